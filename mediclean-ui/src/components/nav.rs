//! Navigation Component
//!
//! Header navigation bar. Gated links and the logout button only appear
//! with a session; anonymous visitors get Log In and Sign Up instead.

use leptos::*;
use leptos_router::*;
use mediclean::Page;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (menu_open, set_menu_open) = create_signal(false);

    let authenticated = create_memo(move |_| state.session.with(|s| s.is_authenticated()));

    let navigate = use_navigate();
    let logout = move |_: ev::MouseEvent| {
        state.logout();
        set_menu_open.set(false);
        navigate(Page::Home.path(), Default::default());
    };

    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-white/95 backdrop-blur">
            <div class="container mx-auto px-4 flex h-16 items-center justify-between">
                <A href="/" class="flex items-center gap-2">
                    <span class="h-8 w-8 rounded-full bg-emerald-600 text-white text-sm font-bold flex items-center justify-center">
                        "MC"
                    </span>
                    <span class="font-bold text-xl">"MediClean"</span>
                </A>

                <button
                    class="md:hidden px-3 py-2 border rounded-md"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <nav class=move || {
                    if menu_open.get() {
                        "absolute top-16 inset-x-0 bg-white border-b flex flex-col gap-4 p-4 md:static md:flex-row md:items-center md:gap-6 md:p-0 md:border-0"
                    } else {
                        "hidden md:flex items-center gap-6"
                    }
                }>
                    <NavLink page=Page::Home label="Home" icon="🏠" />
                    <Show when=move || authenticated.get()>
                        <NavLink page=Page::Dashboard label="Dashboard" icon="📊" />
                        <NavLink page=Page::Bookings label="Bookings" icon="📅" />
                        <NavLink page=Page::Profile label="Profile" icon="👤" />
                    </Show>

                    <Show
                        when=move || authenticated.get()
                        fallback=|| view! {
                            <div class="flex items-center gap-4">
                                <A href=Page::Login.path() class="px-4 py-2 border rounded-md text-sm font-medium">
                                    "Log In"
                                </A>
                                <A href=Page::Signup.path() class="px-4 py-2 bg-emerald-600 text-white rounded-md text-sm font-medium">
                                    "Sign Up"
                                </A>
                            </div>
                        }
                    >
                        <button
                            class="px-4 py-2 border rounded-md text-sm font-medium"
                            on:click=logout.clone()
                        >
                            "Log Out"
                        </button>
                    </Show>

                    <UserBadge />
                </nav>
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <A
            href=page.path()
            class="text-sm font-medium text-gray-500 hover:text-gray-900 transition-colors flex items-center gap-2"
            active_class="text-gray-900"
        >
            <span>{icon}</span>
            {label}
        </A>
    }
}

/// Avatar initial, display name and role of the signed-in user
#[component]
fn UserBadge() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    move || {
        state.session.with(|s| {
            s.user().map(|user| {
                view! {
                    <div class="flex items-center gap-2 text-xs text-gray-500">
                        <span class="h-8 w-8 rounded-full bg-emerald-100 text-emerald-700 font-semibold flex items-center justify-center">
                            {user.initial().to_string()}
                        </span>
                        <div>
                            <p class="font-medium text-gray-900">{user.display_name().to_string()}</p>
                            <p>{user.role.label()}</p>
                        </div>
                    </div>
                }
            })
        })
    }
}
