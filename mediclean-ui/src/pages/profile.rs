//! Profile Page
//!
//! Profile, facility, billing and notification settings. Forms only edit a
//! local draft; saving shows a notice and nothing is persisted.

use leptos::*;
use mediclean::content::{
    notification_preferences, FacilityType, PasswordChange, ProfileDraft, PAYMENT_METHODS,
};
use mediclean::Notice;

use crate::components::TabButton;
use crate::state::global::GlobalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Facility,
    Billing,
    Notifications,
}

type Getter<T> = fn(&T) -> String;
type Setter<T> = fn(&mut T, String);

#[component]
pub fn Profile() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let initial = state
        .session
        .with_untracked(|session| session.user().map(ProfileDraft::from_record))
        .unwrap_or_default();
    let draft = create_rw_signal(initial);
    let (tab, set_tab) = create_signal(Tab::Profile);

    let tab_button = move |target: Tab, label: &'static str| {
        view! {
            <TabButton
                label=label
                active=Signal::derive(move || tab.get() == target)
                on_select=move |_| set_tab.set(target)
            />
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">"Profile Settings"</h1>
                <p class="text-gray-500">"Manage your account settings and preferences"</p>
            </div>

            <div class="inline-flex gap-1 p-1 mb-6 bg-gray-100 rounded-lg">
                {tab_button(Tab::Profile, "Profile")}
                {tab_button(Tab::Facility, "Facility")}
                {tab_button(Tab::Billing, "Billing")}
                {tab_button(Tab::Notifications, "Notifications")}
            </div>

            {move || match tab.get() {
                Tab::Profile => view! { <PersonalTab draft=draft /> }.into_view(),
                Tab::Facility => view! { <FacilityTab draft=draft /> }.into_view(),
                Tab::Billing => view! { <BillingTab draft=draft /> }.into_view(),
                Tab::Notifications => view! { <NotificationsTab /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn PersonalTab(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let password = create_rw_signal(PasswordChange::default());

    let save_profile = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.show_notice(Notice::profile_updated());
    };

    let update_password = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match password.with_untracked(PasswordChange::validate) {
            Ok(()) => {
                password.set(PasswordChange::default());
                state.show_notice(Notice::password_updated());
            }
            Err(e) => state.show_notice(Notice::password_failed(&e)),
        }
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <form on:submit=save_profile class="bg-white rounded-lg border shadow-sm p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"Personal Information"</h2>
                    <p class="text-sm text-gray-500">"Update your personal details"</p>
                </div>
                <FormField id="name" label="Full Name" input_type="text" form=draft
                    get=|d: &ProfileDraft| d.name.clone() set=|d: &mut ProfileDraft, v| d.name = v />
                <FormField id="email" label="Email" input_type="email" form=draft
                    get=|d: &ProfileDraft| d.email.clone() set=|d: &mut ProfileDraft, v| d.email = v />
                <FormField id="phone" label="Phone" input_type="tel" form=draft
                    get=|d: &ProfileDraft| d.phone.clone() set=|d: &mut ProfileDraft, v| d.phone = v />
                <SubmitButton label="Save Changes" />
            </form>

            <form on:submit=update_password class="bg-white rounded-lg border shadow-sm p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"Password"</h2>
                    <p class="text-sm text-gray-500">"Update your password"</p>
                </div>
                <FormField id="current-password" label="Current Password" input_type="password" form=password
                    get=|p: &PasswordChange| p.current.clone() set=|p: &mut PasswordChange, v| p.current = v />
                <FormField id="new-password" label="New Password" input_type="password" form=password
                    get=|p: &PasswordChange| p.new.clone() set=|p: &mut PasswordChange, v| p.new = v />
                <FormField id="confirm-password" label="Confirm New Password" input_type="password" form=password
                    get=|p: &PasswordChange| p.confirm.clone() set=|p: &mut PasswordChange, v| p.confirm = v />
                <SubmitButton label="Update Password" />
            </form>
        </div>
    }
}

#[component]
fn FacilityTab(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (facility_type, set_facility_type) = create_signal(FacilityType::default());

    let save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.show_notice(Notice::profile_updated());
    };

    view! {
        <form on:submit=save class="bg-white rounded-lg border shadow-sm p-6 space-y-4">
            <div>
                <h2 class="text-lg font-semibold">"Facility Information"</h2>
                <p class="text-sm text-gray-500">"Update your facility details"</p>
            </div>
            <FormField id="facilityName" label="Facility Name" input_type="text" form=draft
                get=|d: &ProfileDraft| d.facility_name.clone() set=|d: &mut ProfileDraft, v| d.facility_name = v />
            <FormField id="address" label="Street Address" input_type="text" form=draft
                get=|d: &ProfileDraft| d.address.clone() set=|d: &mut ProfileDraft, v| d.address = v />
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <FormField id="city" label="City" input_type="text" form=draft
                    get=|d: &ProfileDraft| d.city.clone() set=|d: &mut ProfileDraft, v| d.city = v />
                <FormField id="state" label="State" input_type="text" form=draft
                    get=|d: &ProfileDraft| d.state.clone() set=|d: &mut ProfileDraft, v| d.state = v />
                <FormField id="zip" label="ZIP Code" input_type="text" form=draft
                    get=|d: &ProfileDraft| d.zip.clone() set=|d: &mut ProfileDraft, v| d.zip = v />
            </div>
            <div class="space-y-2">
                <label for="facility-type" class="text-sm font-medium">"Facility Type"</label>
                <select
                    id="facility-type"
                    class="w-full border rounded-md px-3 py-2"
                    on:change=move |ev| {
                        if let Some(kind) = FacilityType::from_value(&event_target_value(&ev)) {
                            set_facility_type.set(kind);
                        }
                    }
                >
                    {FacilityType::all().iter().map(|&kind| view! {
                        <option value=kind.value() selected=move || facility_type.get() == kind>
                            {kind.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>
            <SubmitButton label="Save Facility Information" />
        </form>
    }
}

#[component]
fn BillingTab(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <div class="bg-white rounded-lg border shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Payment Methods"</h2>
                <p class="text-sm text-gray-500 mb-4">"Manage your payment options"</p>
                <div class="space-y-4">
                    {PAYMENT_METHODS.iter().map(|method| view! {
                        <div class="flex items-center justify-between p-4 rounded-lg border">
                            <div>
                                <p class="font-medium">{method.summary()}</p>
                                <p class="text-sm text-gray-500">{format!("Expires {}", method.expires)}</p>
                            </div>
                            <Show when=move || method.is_default>
                                <span class="px-2 py-0.5 rounded-full text-xs bg-emerald-50 text-emerald-700">
                                    "Default"
                                </span>
                            </Show>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="bg-white rounded-lg border shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Billing Address"</h2>
                <p class="text-sm text-gray-500 mb-4">"Your billing information"</p>
                <div class="text-sm space-y-1">
                    <p class="font-medium">{move || draft.with(|d| d.billing_name().to_string())}</p>
                    <p>{move || draft.with(|d| d.address.clone())}</p>
                    <p>{move || draft.with(ProfileDraft::city_line)}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let preferences = create_rw_signal(notification_preferences());

    let toggle = move |index: usize, enabled: bool| {
        preferences.update(|prefs| {
            if let Some(pref) = prefs.get_mut(index) {
                pref.enabled = enabled;
            }
        });
    };

    view! {
        <div class="bg-white rounded-lg border shadow-sm p-6">
            <h2 class="text-lg font-semibold">"Notification Preferences"</h2>
            <p class="text-sm text-gray-500 mb-6">"Manage how you receive updates"</p>

            <h3 class="text-lg font-medium mb-4">"Notification Types"</h3>
            <div class="space-y-4">
                {move || preferences.get().into_iter().enumerate().map(|(index, pref)| view! {
                    <div class="flex items-center justify-between">
                        <div class="flex items-start gap-3">
                            <span class="text-xl">{pref.icon}</span>
                            <div>
                                <p class="font-medium">{pref.title}</p>
                                <p class="text-sm text-gray-500">{pref.description}</p>
                            </div>
                        </div>
                        <input
                            type="checkbox"
                            prop:checked=pref.enabled
                            on:change=move |ev| toggle(index, event_target_checked(&ev))
                        />
                    </div>
                }).collect_view()}
            </div>

            <button
                class="mt-6 px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-md font-medium"
                on:click=move |_| state.show_notice(Notice::profile_updated())
            >
                "Save Notification Preferences"
            </button>
        </div>
    }
}

/// Text input bound to one field of a form signal
#[component]
fn FormField<T: 'static>(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    form: RwSignal<T>,
    get: Getter<T>,
    set: Setter<T>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">{label}</label>
            <input
                id=id
                type=input_type
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
                class="w-full border rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-emerald-500"
            />
        </div>
    }
}

#[component]
fn SubmitButton(label: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-md font-medium"
        >
            {label}
        </button>
    }
}
