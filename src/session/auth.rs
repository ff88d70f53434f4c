//! Credential checking
//!
//! The session service delegates "who is this" to an [`Authenticator`].
//! [`PlaceholderAuthenticator`] accepts every credential pair and hands out
//! fixed demo records; a real identity backend plugs in behind the same
//! trait.

use async_trait::async_trait;
use uuid::Uuid;

use super::error::SessionResult;
use super::types::{Role, SessionRecord, SignupRequest};

/// Identity backend used by [`SessionService`](super::SessionService)
#[async_trait(?Send)]
pub trait Authenticator {
    /// Resolve credentials to a session record
    async fn login(&self, email: &str, password: &str) -> SessionResult<SessionRecord>;

    /// Create an account and return its session record
    async fn signup(&self, request: &SignupRequest) -> SessionResult<SessionRecord>;
}

/// Accepts any credentials without verification
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAuthenticator;

impl PlaceholderAuthenticator {
    pub const DEMO_USER_ID: &'static str = "user-123";
    pub const DEMO_NAME: &'static str = "Dr. Jane Smith";
    pub const DEMO_FACILITY: &'static str = "City Medical Center";
}

#[async_trait(?Send)]
impl Authenticator for PlaceholderAuthenticator {
    async fn login(&self, email: &str, _password: &str) -> SessionResult<SessionRecord> {
        Ok(SessionRecord {
            id: Self::DEMO_USER_ID.to_string(),
            email: email.to_string(),
            name: Self::DEMO_NAME.to_string(),
            facility_name: Some(Self::DEMO_FACILITY.to_string()),
            role: Role::Facility,
        })
    }

    async fn signup(&self, request: &SignupRequest) -> SessionResult<SessionRecord> {
        Ok(SessionRecord {
            id: new_user_id(),
            email: request.email.clone(),
            name: request.name.clone(),
            facility_name: request.facility_name.clone(),
            role: Role::Facility,
        })
    }
}

/// Fresh opaque account identifier (`user-` + 9 hex chars)
pub fn new_user_id() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("user-{}", &token[..9])
}
