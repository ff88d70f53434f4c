//! Session Service
//!
//! Single authority for who, if anyone, is logged in. Storage and the
//! identity backend are injected at construction.
//!
//! ```text
//!            restore()
//!  Loading ───────────────┬──────────────► Anonymous
//!     │                   └──────────────► Authenticated
//!     │ login/signup                          ▲   │
//!     └───────────────────────────────────────┘   │ logout
//!  Anonymous ── login/signup ──► Authenticated ───┘
//! ```

use super::auth::Authenticator;
use super::error::{SessionError, SessionResult};
use super::store::KeyValueStore;
use super::types::{SessionRecord, SessionState, SignupRequest, SESSION_KEY};

/// Session lifecycle over an injected store and authenticator
pub struct SessionService<S, A> {
    store: S,
    authenticator: A,
    state: SessionState,
}

impl<S: KeyValueStore, A: Authenticator> SessionService<S, A> {
    /// Create a service in the `Loading` state. Call [`restore`](Self::restore)
    /// to resolve it.
    pub fn new(store: S, authenticator: A) -> Self {
        Self {
            store,
            authenticator,
            state: SessionState::Loading,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current session record, if any
    pub fn current(&self) -> Option<&SessionRecord> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Adopt the persisted record, if there is a readable one.
    ///
    /// Never fails: unreadable storage and malformed records both resolve to
    /// `Anonymous`.
    pub fn restore(&mut self) -> &SessionState {
        self.state = match self.store.get_item(SESSION_KEY) {
            Ok(Some(raw)) if raw.trim().is_empty() => {
                tracing::debug!("Persisted session was cleared");
                SessionState::Anonymous
            }
            Ok(Some(raw)) => match serde_json::from_str::<SessionRecord>(&raw) {
                Ok(record) => {
                    tracing::info!(user_id = %record.id, "Restored session");
                    SessionState::Authenticated(record)
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed session record: {}", e);
                    SessionState::Anonymous
                }
            },
            Ok(None) => {
                tracing::debug!("No persisted session");
                SessionState::Anonymous
            }
            Err(e) => {
                tracing::warn!("Error checking authentication: {}", e);
                SessionState::Anonymous
            }
        };
        &self.state
    }

    /// Log in with any non-empty credentials.
    ///
    /// Replaces an existing session. Fails only on empty input, a refusing
    /// authenticator, or a storage write failure.
    pub async fn login(&mut self, email: &str, password: &str) -> SessionResult<SessionRecord> {
        let result = self.try_login(email, password).await;
        self.settle(result)
    }

    /// Create an account and log into it
    pub async fn signup(&mut self, request: SignupRequest) -> SessionResult<SessionRecord> {
        let result = self.try_signup(request).await;
        self.settle(result)
    }

    /// Clear the persisted record and the in-memory session. Always succeeds.
    ///
    /// If the key cannot be removed it is blanked instead, which `restore`
    /// reads as no session.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.remove_item(SESSION_KEY) {
            tracing::warn!("Failed to remove persisted session, blanking it: {}", e);
            if let Err(e) = self.store.set_item(SESSION_KEY, "") {
                tracing::error!("Failed to clear persisted session: {}", e);
            }
        }
        if let Some(record) = self.state.user() {
            tracing::info!(user_id = %record.id, "Logged out");
        }
        self.state = SessionState::Anonymous;
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn try_login(&mut self, email: &str, password: &str) -> SessionResult<SessionRecord> {
        require("email", email)?;
        require("password", password)?;

        let record = self.authenticator.login(email.trim(), password).await?;
        self.persist(record)
    }

    async fn try_signup(&mut self, request: SignupRequest) -> SessionResult<SessionRecord> {
        require("email", &request.email)?;
        require("password", &request.password)?;
        require("name", &request.name)?;

        let request = SignupRequest {
            email: request.email.trim().to_string(),
            ..request
        };
        let record = self.authenticator.signup(&request).await?;
        self.persist(record)
    }

    fn persist(&mut self, record: SessionRecord) -> SessionResult<SessionRecord> {
        let encoded = serde_json::to_string(&record)?;
        self.store.set_item(SESSION_KEY, &encoded)?;

        tracing::info!(user_id = %record.id, role = %record.role, "Session established");
        self.state = SessionState::Authenticated(record.clone());
        Ok(record)
    }

    /// A failed attempt keeps the previous session; it only resolves `Loading`.
    fn settle(&mut self, result: SessionResult<SessionRecord>) -> SessionResult<SessionRecord> {
        if let Err(e) = &result {
            tracing::error!("Authentication failed: {}", e);
            if self.state.is_loading() {
                self.state = SessionState::Anonymous;
            }
        }
        result
    }
}

fn require(field: &'static str, value: &str) -> SessionResult<()> {
    if value.trim().is_empty() {
        return Err(SessionError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::auth::PlaceholderAuthenticator;
    use crate::session::store::MemoryStore;
    use crate::session::types::Role;
    use async_trait::async_trait;

    fn service(store: &MemoryStore) -> SessionService<MemoryStore, PlaceholderAuthenticator> {
        SessionService::new(store.clone(), PlaceholderAuthenticator)
    }

    struct RejectAll;

    /// Store whose keys can be overwritten but never removed
    #[derive(Clone, Default)]
    struct NoRemoveStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for NoRemoveStore {
        fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, _key: &str) -> SessionResult<()> {
            Err(SessionError::Write("read-only entry".to_string()))
        }
    }

    #[async_trait(?Send)]
    impl Authenticator for RejectAll {
        async fn login(&self, _email: &str, _password: &str) -> SessionResult<SessionRecord> {
            Err(SessionError::Rejected("unknown account".to_string()))
        }

        async fn signup(&self, _request: &SignupRequest) -> SessionResult<SessionRecord> {
            Err(SessionError::Rejected("signups closed".to_string()))
        }
    }

    #[test]
    fn test_new_service_is_loading() {
        let store = MemoryStore::new();
        let svc = service(&store);
        assert!(svc.state().is_loading());
        assert!(svc.current().is_none());
    }

    #[test]
    fn test_restore_empty_store_is_anonymous() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        assert_eq!(svc.restore(), &SessionState::Anonymous);
    }

    #[test]
    fn test_restore_malformed_record_is_anonymous() {
        let store = MemoryStore::new();
        store.set_item(SESSION_KEY, "{not json").unwrap();

        let mut svc = service(&store);
        assert_eq!(svc.restore(), &SessionState::Anonymous);
        // The malformed value is left alone
        assert!(store.get_item(SESSION_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_login_authenticates_and_persists() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.restore();

        let record = svc.login("jane@example.com", "secret").await.unwrap();
        assert!(svc.is_authenticated());
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.role, Role::Facility);

        let raw = store.get_item(SESSION_KEY).unwrap().unwrap();
        let persisted: SessionRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, record);
    }

    #[tokio::test]
    async fn test_login_before_restore_resolves_loading() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.login("jane@example.com", "secret").await.unwrap();
        assert!(svc.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejects_blank_credentials() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.restore();

        let err = svc.login("   ", "secret").await.unwrap_err();
        assert!(matches!(err, SessionError::MissingField("email")));
        let err = svc.login("jane@example.com", "").await.unwrap_err();
        assert!(matches!(err, SessionError::MissingField("password")));

        assert!(!svc.is_authenticated());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_storage_failure_keeps_previous_state() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.restore();
        svc.login("first@example.com", "pw").await.unwrap();

        store.fail_writes(true);
        let err = svc.login("second@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, SessionError::Write(_)));
        assert_eq!(svc.current().unwrap().email, "first@example.com");
    }

    #[tokio::test]
    async fn test_failed_login_from_loading_becomes_anonymous() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        let mut svc = service(&store);

        assert!(svc.login("jane@example.com", "pw").await.is_err());
        assert_eq!(svc.state(), &SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_rejecting_authenticator() {
        let store = MemoryStore::new();
        let mut svc = SessionService::new(store.clone(), RejectAll);
        svc.restore();

        let err = svc.login("jane@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, SessionError::Rejected(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_replaces_existing_session() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.restore();

        svc.signup(SignupRequest::new("old@example.com", "pw", "Old")).await.unwrap();
        svc.login("new@example.com", "pw").await.unwrap();

        assert_eq!(svc.current().unwrap().email, "new@example.com");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_requires_name() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        let err = svc
            .signup(SignupRequest::new("a@example.com", "pw", " "))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::MissingField("name")));
    }

    #[tokio::test]
    async fn test_logout_clears_store_and_state() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.login("jane@example.com", "pw").await.unwrap();

        svc.logout();
        assert_eq!(svc.state(), &SessionState::Anonymous);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_logout_survives_storage_failure() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.login("jane@example.com", "pw").await.unwrap();

        store.fail_writes(true);
        svc.logout();
        assert_eq!(svc.state(), &SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_logout_blanks_record_when_remove_fails() {
        let store = NoRemoveStore::default();
        let mut svc = SessionService::new(store.clone(), PlaceholderAuthenticator);
        svc.restore();
        svc.login("jane@example.com", "pw").await.unwrap();

        svc.logout();
        assert_eq!(svc.state(), &SessionState::Anonymous);
        assert_eq!(store.get_item(SESSION_KEY).unwrap().as_deref(), Some(""));

        let mut reloaded = SessionService::new(store, PlaceholderAuthenticator);
        assert_eq!(reloaded.restore(), &SessionState::Anonymous);
    }

    #[test]
    fn test_restore_blank_record_is_anonymous() {
        let store = MemoryStore::new();
        store.set_item(SESSION_KEY, "  ").unwrap();
        let mut svc = service(&store);
        assert_eq!(svc.restore(), &SessionState::Anonymous);
    }

    #[test]
    fn test_logout_from_loading() {
        let store = MemoryStore::new();
        let mut svc = service(&store);
        svc.logout();
        assert_eq!(svc.state(), &SessionState::Anonymous);
    }
}
