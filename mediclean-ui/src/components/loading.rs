//! Loading Component
//!
//! Spinners shown while the session is being restored or a form submits.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
