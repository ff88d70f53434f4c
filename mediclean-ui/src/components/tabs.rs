//! Tab Button Component

use leptos::*;

/// One trigger in a tab strip. `active` decides the highlight.
#[component]
pub fn TabButton(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if active.get() {
                    "px-4 py-2 text-sm font-medium rounded-md bg-white shadow-sm"
                } else {
                    "px-4 py-2 text-sm font-medium rounded-md text-gray-500 hover:text-gray-900"
                }
            }
            on:click=move |_| on_select.call(())
        >
            {label}
        </button>
    }
}
