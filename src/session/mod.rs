//! MediClean Session Store
//!
//! - **types**: `SessionRecord`, `Role`, `SessionState`
//! - **store**: key-value backends (`MemoryStore`, `FileStore`)
//! - **auth**: pluggable `Authenticator` and the placeholder implementation
//! - **service**: `SessionService`, the lifecycle owner
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use mediclean::session::{MemoryStore, PlaceholderAuthenticator, SessionService};
//!
//! # tokio_test_block(async {
//! let store = MemoryStore::new();
//! let mut service = SessionService::new(store.clone(), PlaceholderAuthenticator);
//! service.restore();
//! service.login("jane@example.com", "secret").await?;
//! assert!(service.is_authenticated());
//!
//! // A fresh service over the same store sees the persisted record
//! let mut reloaded = SessionService::new(store, PlaceholderAuthenticator);
//! assert!(reloaded.restore().is_authenticated());
//! # Ok::<(), mediclean::session::SessionError>(())
//! # }).unwrap();
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use auth::{Authenticator, PlaceholderAuthenticator};
pub use error::{SessionError, SessionResult};
pub use service::SessionService;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{AuthAction, Role, SessionRecord, SessionState, SignupRequest, SESSION_KEY};
