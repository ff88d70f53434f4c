//! State Management
//!
//! Global session and notice signals, plus the `localStorage` backend the
//! session service persists to.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState, PortalSession};
pub use storage::LocalStore;
