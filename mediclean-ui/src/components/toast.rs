//! Toast Notification Component
//!
//! Shows the current [`Notice`] in the corner of the screen.

use leptos::*;
use mediclean::notify::{Notice, NoticeLevel};

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                state.notice.get().map(|notice| view! {
                    <ToastMessage notice=notice on_close=move |_| state.clear_notice() />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (icon, bg_class) = match notice.level {
        NoticeLevel::Success => ("✓", "bg-emerald-600"),
        NoticeLevel::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            role="status"
            class=format!(
                "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 max-w-sm animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <p class="text-sm font-semibold">{notice.title}</p>
                {notice.description.map(|text| view! {
                    <p class="text-sm opacity-90">{text}</p>
                })}
            </div>
            <button class="text-white/80 hover:text-white" on:click=move |_| on_close.call(())>
                "×"
            </button>
        </div>
    }
}
