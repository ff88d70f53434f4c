//! Auth Form Component
//!
//! Shared login / signup form. On success it shows a notice and moves to
//! the dashboard; on failure it shows a notice without any detail.

use leptos::*;
use leptos_router::*;
use mediclean::{AuthAction, Notice, Page, SignupRequest};

use super::loading::InlineLoading;
use crate::state::global::GlobalState;

#[component]
pub fn AuthForm(mode: AuthAction) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (facility_name, set_facility_name) = create_signal(String::new());
    let (is_facility, set_is_facility) = create_signal(true);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match mode {
                AuthAction::Login => state.login(email.get_untracked(), password.get_untracked()).await,
                AuthAction::Signup => {
                    let mut request = SignupRequest::new(
                        email.get_untracked(),
                        password.get_untracked(),
                        name.get_untracked(),
                    );
                    if is_facility.get_untracked() {
                        request = request.facility(facility_name.get_untracked());
                    }
                    state.signup(request).await
                }
            };

            match result {
                Ok(_) => {
                    state.show_notice(Notice::auth_succeeded(mode));
                    navigate(Page::Dashboard.path(), Default::default());
                }
                Err(e) => state.show_notice(Notice::auth_failed(mode, &e)),
            }
            set_submitting.set(false);
        });
    };

    let (heading, subheading, submit_label) = match mode {
        AuthAction::Login => (
            "Login to your account",
            "Enter your credentials to access your account",
            "Login",
        ),
        AuthAction::Signup => (
            "Create your account",
            "Enter your information to create your account",
            "Create Account",
        ),
    };
    let signup = mode == AuthAction::Signup;

    view! {
        <div class="w-full max-w-md mx-auto space-y-6">
            <div class="text-center">
                <h1 class="text-2xl font-bold tracking-tight">{heading}</h1>
                <p class="text-sm text-gray-500 mt-2">{subheading}</p>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <Show when=move || signup>
                    <TextField
                        id="name"
                        label="Full Name"
                        input_type="text"
                        placeholder="Dr. Jane Smith"
                        value=name
                        set_value=set_name
                    />
                </Show>

                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="name@example.com"
                    value=email
                    set_value=set_email
                />

                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    placeholder=""
                    value=password
                    set_value=set_password
                />

                <Show when=move || signup>
                    <div class="flex items-center space-x-2">
                        <input
                            id="isFacility"
                            type="checkbox"
                            prop:checked=move || is_facility.get()
                            on:change=move |ev| set_is_facility.set(event_target_checked(&ev))
                        />
                        <label for="isFacility" class="text-sm">"I represent a medical facility"</label>
                    </div>
                    <Show when=move || is_facility.get()>
                        <TextField
                            id="facilityName"
                            label="Facility Name"
                            input_type="text"
                            placeholder="City Medical Center"
                            value=facility_name
                            set_value=set_facility_name
                        />
                    </Show>
                </Show>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-emerald-600 hover:bg-emerald-700 disabled:bg-gray-400
                           disabled:cursor-not-allowed text-white rounded-md py-2 font-medium
                           transition-colors"
                >
                    <Show when=move || submitting.get() fallback=move || submit_label>
                        <InlineLoading />
                        " Please wait..."
                    </Show>
                </button>
            </form>

            <div class="text-center text-sm">
                {match mode {
                    AuthAction::Login => view! {
                        <p>
                            "Don't have an account? "
                            <A href=Page::Signup.path() class="text-emerald-600 font-medium">"Sign up"</A>
                        </p>
                    },
                    AuthAction::Signup => view! {
                        <p>
                            "Already have an account? "
                            <A href=Page::Login.path() class="text-emerald-600 font-medium">"Login"</A>
                        </p>
                    },
                }}
            </div>
        </div>
    }
}

/// Labelled, required text input bound to a signal
#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full border rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-emerald-500"
            />
        </div>
    }
}
