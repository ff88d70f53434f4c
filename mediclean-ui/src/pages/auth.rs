//! Login and signup pages

use leptos::*;
use mediclean::AuthAction;

use crate::components::AuthForm;

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 px-4">
            <AuthForm mode=AuthAction::Login />
        </div>
    }
}

#[component]
pub fn Signup() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 px-4">
            <AuthForm mode=AuthAction::Signup />
        </div>
    }
}
