//! Page Components
//!
//! One component per portal route.

pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod index;
pub mod profile;

pub use auth::{Login, Signup};
pub use bookings::Bookings;
pub use dashboard::Dashboard;
pub use index::Index;
pub use profile::Profile;
