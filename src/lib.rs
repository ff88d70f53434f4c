//! # MediClean
//!
//! Medical waste collection portal: who is logged in, which pages they may
//! see, and the collection bookings they manage.
//!
//! ## Modules
//!
//! - [`session`]: session lifecycle over a pluggable key-value store
//! - [`routing`]: named pages and the access gate
//! - [`bookings`]: in-memory booking ledger, history and recurring plans
//! - [`content`]: static page content (waste categories, dashboard, profile)
//! - [`notify`]: transient success and error notices
//!
//! With the default `native` feature:
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//! - [`site`]: static site server with Axum
//!
//! The browser frontend builds this crate with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mediclean::{authorize, AccessDecision, BookingLedger, Page, SessionState, WasteType};
//!
//! // Gated pages redirect anonymous visitors once restore has finished
//! assert_eq!(
//!     authorize(Page::Bookings, &SessionState::Anonymous),
//!     AccessDecision::Redirect(Page::Login)
//! );
//!
//! let mut ledger = BookingLedger::new();
//! let date = mediclean::bookings::parse_date("2025-03-01").unwrap();
//! let id = ledger.schedule(date, "10:00 AM", WasteType::Sharps).unwrap().id.clone();
//! assert!(ledger.cancel(&id).is_ok());
//! ```

pub mod bookings;
pub mod content;
pub mod notify;
pub mod routing;
pub mod session;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod site;

// Re-export top-level types for convenience
pub use session::{
    AuthAction, Authenticator, FileStore, KeyValueStore, MemoryStore, PlaceholderAuthenticator,
    Role, SessionError, SessionRecord, SessionResult, SessionService, SessionState,
    SignupRequest,
};

pub use routing::{authorize, AccessDecision, Page};

pub use bookings::{Booking, BookingError, BookingLedger, BookingResult, BookingStatus, WasteType};

pub use notify::{Notice, NoticeLevel};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};

#[cfg(feature = "native")]
pub use site::{build_router, serve, SiteError, SiteState};
