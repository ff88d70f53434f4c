//! Access Gate Component
//!
//! Wraps a gated page: renders it, shows a spinner while the session is
//! restoring, or redirects anonymous visitors to the login page.

use leptos::*;
use leptos_router::Redirect;
use mediclean::{authorize, AccessDecision, Page};

use super::loading::PageLoading;
use crate::state::global::GlobalState;

#[component]
pub fn Gate(page: Page, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let decision = create_memo(move |_| state.session.with(|session| authorize(page, session)));

    move || match decision.get() {
        AccessDecision::Render => children().into_view(),
        AccessDecision::Pending => view! { <PageLoading /> }.into_view(),
        AccessDecision::Redirect(target) => view! { <Redirect path=target.path() /> }.into_view(),
    }
}
