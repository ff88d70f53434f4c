//! Global Application State
//!
//! Reactive session and notice signals shared by every page.
//!
//! Session operations build a short-lived [`SessionService`] over
//! [`LocalStore`], restore it from storage, run the operation, then copy the
//! resulting state into the `session` signal.

use leptos::*;
use mediclean::session::{
    PlaceholderAuthenticator, SessionRecord, SessionResult, SessionService, SessionState,
    SignupRequest,
};
use mediclean::Notice;

use super::storage::LocalStore;

/// Session service as wired in the browser
pub type PortalSession = SessionService<LocalStore, PlaceholderAuthenticator>;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Who is logged in. `Loading` until the first restore finishes.
    pub session: RwSignal<SessionState>,
    /// Notice currently on screen
    pub notice: RwSignal<Option<Notice>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(SessionState::Loading),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// A service with the persisted session already loaded
    pub fn session_service(&self) -> PortalSession {
        let mut service = SessionService::new(LocalStore, PlaceholderAuthenticator);
        service.restore();
        service
    }

    /// Resolve `Loading` from `localStorage`
    pub fn restore_session(&self) {
        let service = self.session_service();
        self.sync_session(&service);
    }

    pub fn sync_session(&self, service: &PortalSession) {
        self.session.set(service.state().clone());
    }

    pub async fn login(self, email: String, password: String) -> SessionResult<SessionRecord> {
        let mut service = self.session_service();
        let result = service.login(&email, &password).await;
        self.sync_session(&service);
        log_failure("Login", &result);
        result
    }

    pub async fn signup(self, request: SignupRequest) -> SessionResult<SessionRecord> {
        let mut service = self.session_service();
        let result = service.signup(request).await;
        self.sync_session(&service);
        log_failure("Signup", &result);
        result
    }

    /// Clear the session and announce it
    pub fn logout(&self) {
        let mut service = self.session_service();
        service.logout();
        self.sync_session(&service);
        self.show_notice(Notice::logged_out());
    }

    /// Show a notice (auto-clears after its timeout)
    pub fn show_notice(&self, notice: Notice) {
        let timeout = notice.timeout_ms();
        self.notice.set(Some(notice.clone()));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(timeout, move || {
            // A newer notice keeps its own timer
            notice_signal.update(|current| {
                if current.as_ref() == Some(&notice) {
                    *current = None;
                }
            });
        })
        .forget();
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }
}

fn log_failure<T>(action: &str, result: &SessionResult<T>) {
    if let Err(e) = result {
        web_sys::console::error_1(&format!("{} failed: {}", action, e).into());
    }
}
