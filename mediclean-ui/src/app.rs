//! App Root Component
//!
//! Main application component with routing and global providers.

use chrono::Datelike;
use leptos::*;
use leptos_router::*;
use mediclean::Page;

use crate::components::{Gate, Nav, Toast};
use crate::pages::{Bookings, Dashboard, Index, Login, Profile, Signup};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    // Resolve the persisted session once, after the first render
    let state = expect_context::<GlobalState>();
    create_effect(move |_| {
        spawn_local(async move {
            state.restore_session();
        });
    });

    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Index />
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route
                            path="/dashboard"
                            view=|| view! { <Gate page=Page::Dashboard><Dashboard /></Gate> }
                        />
                        <Route
                            path="/bookings"
                            view=|| view! { <Gate page=Page::Bookings><Bookings /></Gate> }
                        />
                        <Route
                            path="/profile"
                            view=|| view! { <Gate page=Page::Profile><Profile /></Gate> }
                        />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Site footer
#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-gray-50 border-t">
            <div class="container mx-auto py-10 px-4 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-8">
                <div>
                    <A href="/" class="flex items-center gap-2 mb-4">
                        <span class="h-8 w-8 rounded-full bg-emerald-600 text-white text-sm font-bold flex items-center justify-center">
                            "MC"
                        </span>
                        <span class="font-bold text-xl">"MediClean"</span>
                    </A>
                    <p class="text-sm text-gray-500 max-w-xs">
                        "Professional medical waste management solutions for healthcare facilities of all sizes."
                    </p>
                </div>
                <FooterColumn
                    title="Services"
                    items=&["Waste Collection", "Disposal Services", "Compliance Management", "Staff Training"]
                />
                <FooterColumn
                    title="Resources"
                    items=&["Guidelines", "Regulations", "Blog", "FAQs"]
                />
                <FooterColumn
                    title="Contact"
                    items=&[
                        "support@mediclean.example",
                        "+1 (555) 123-4567",
                        "123 Medical Plaza, Suite 500, San Francisco, CA 94103",
                    ]
                />
            </div>
            <div class="container mx-auto px-4 py-6 border-t text-xs text-gray-500">
                {format!("© {} MediClean. All rights reserved.", year)}
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-sm font-semibold mb-3">{title}</h3>
            <ul class="space-y-2">
                {items.iter().map(|item| view! {
                    <li class="text-sm text-gray-500">{*item}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        web_sys::console::error_1(&format!("No route for {}", location.pathname.get()).into());
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-xl text-gray-500 mb-6">"Oops! Page not found"</p>
            <A
                href=Page::Home.path()
                class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium transition-colors"
            >
                "Return to Home"
            </A>
        </div>
    }
}
