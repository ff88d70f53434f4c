//! Client-side routes and the access gate
//!
//! Maps URL paths to pages and decides, per render, whether a page may be
//! shown for the current [`SessionState`]. The gate is a UI policy only; it
//! runs in the client and protects nothing.

use crate::session::SessionState;

/// Named pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Dashboard,
    Bookings,
    Profile,
    Login,
    Signup,
    NotFound,
}

impl Page {
    /// Get all pages for iteration
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Dashboard,
            Page::Bookings,
            Page::Profile,
            Page::Login,
            Page::Signup,
            Page::NotFound,
        ]
    }

    /// Resolve a URL path. Query string, fragment and trailing slash are
    /// ignored; anything unknown is `NotFound`.
    pub fn parse(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Page::Home,
            "/dashboard" => Page::Dashboard,
            "/bookings" => Page::Bookings,
            "/profile" => Page::Profile,
            "/login" => Page::Login,
            "/signup" => Page::Signup,
            _ => Page::NotFound,
        }
    }

    /// Canonical path. `NotFound` has none and reports `/404`.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Dashboard => "/dashboard",
            Page::Bookings => "/bookings",
            Page::Profile => "/profile",
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::NotFound => "/404",
        }
    }

    /// Title used in navigation and the document head
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Bookings => "Bookings",
            Page::Profile => "Profile",
            Page::Login => "Login",
            Page::Signup => "Sign Up",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Whether the page requires a session
    pub fn is_gated(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Bookings | Page::Profile)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Outcome of the access gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Show the page
    Render,
    /// Restore has not finished; show a neutral loading indicator
    Pending,
    /// Navigate elsewhere instead
    Redirect(Page),
}

/// Decide what to show for `page` given the session state.
///
/// Gated pages wait while the session is `Loading` so a reload does not
/// flash a redirect, then send anonymous visitors to the login page.
pub fn authorize(page: Page, session: &SessionState) -> AccessDecision {
    if !page.is_gated() {
        return AccessDecision::Render;
    }

    match session {
        SessionState::Loading => AccessDecision::Pending,
        SessionState::Anonymous => AccessDecision::Redirect(Page::Login),
        SessionState::Authenticated(_) => AccessDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, SessionRecord};

    fn signed_in() -> SessionState {
        SessionState::Authenticated(SessionRecord {
            id: "user-123".to_string(),
            email: "jane@example.com".to_string(),
            name: "Dr. Jane Smith".to_string(),
            facility_name: None,
            role: Role::Facility,
        })
    }

    #[test]
    fn test_parse_known_paths() {
        for page in Page::all().iter().filter(|p| **p != Page::NotFound) {
            assert_eq!(Page::parse(page.path()), *page);
        }
    }

    #[test]
    fn test_parse_ignores_query_and_trailing_slash() {
        assert_eq!(Page::parse("/bookings/"), Page::Bookings);
        assert_eq!(Page::parse("/profile?tab=billing"), Page::Profile);
        assert_eq!(Page::parse("/login#form"), Page::Login);
        assert_eq!(Page::parse(""), Page::Home);
    }

    #[test]
    fn test_parse_unknown_is_not_found() {
        assert_eq!(Page::parse("/reports"), Page::NotFound);
        assert_eq!(Page::parse("/dashboard/extra"), Page::NotFound);
        assert_eq!(Page::parse("/404"), Page::NotFound);
    }

    #[test]
    fn test_gated_pages() {
        let gated: Vec<_> = Page::all().iter().filter(|p| p.is_gated()).collect();
        assert_eq!(gated, vec![&Page::Dashboard, &Page::Bookings, &Page::Profile]);
    }

    #[test]
    fn test_anonymous_is_redirected_to_login() {
        for page in [Page::Dashboard, Page::Bookings, Page::Profile] {
            assert_eq!(
                authorize(page, &SessionState::Anonymous),
                AccessDecision::Redirect(Page::Login)
            );
        }
    }

    #[test]
    fn test_loading_defers_gated_pages() {
        assert_eq!(authorize(Page::Bookings, &SessionState::Loading), AccessDecision::Pending);
        assert_eq!(authorize(Page::Home, &SessionState::Loading), AccessDecision::Render);
    }

    #[test]
    fn test_authenticated_renders_everything() {
        let state = signed_in();
        for page in Page::all() {
            assert_eq!(authorize(*page, &state), AccessDecision::Render);
        }
    }

    #[test]
    fn test_public_pages_render_when_anonymous() {
        for page in [Page::Home, Page::Login, Page::Signup, Page::NotFound] {
            assert_eq!(authorize(page, &SessionState::Anonymous), AccessDecision::Render);
        }
    }
}
