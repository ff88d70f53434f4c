//! Dashboard Page
//!
//! Headline stats, compliance, recent activity, upcoming collections and
//! this month's waste summary for the logged-in facility.

use leptos::*;
use leptos_router::*;
use mediclean::bookings::BookingLedger;
use mediclean::content::{recent_activity, COMPLIANCE, WASTE_SUMMARY};
use mediclean::Page;

use crate::components::{risk_classes, DashboardStats};
use crate::state::global::GlobalState;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let greeting = move || {
        state.session.with(|session| {
            session
                .user()
                .map(|user| format!("Welcome back, {}!", user.name))
                .unwrap_or_default()
        })
    };

    let upcoming: Vec<_> = BookingLedger::with_samples()
        .scheduled()
        .into_iter()
        .cloned()
        .collect();

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-8">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-500">{greeting}</p>
                </div>
                <A
                    href=Page::Bookings.path()
                    class="mt-4 md:mt-0 px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-md font-medium"
                >
                    "Schedule Collection"
                </A>
            </div>

            <DashboardStats />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mt-8">
                <div class="lg:col-span-2 space-y-6">
                    <Card title="Compliance Overview" description="Your regulatory compliance status">
                        <div class="space-y-4">
                            {COMPLIANCE.iter().map(|item| view! {
                                <div>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span class="font-medium">{item.name}</span>
                                        <span class="text-gray-500">{format!("{}%", item.percent)}</span>
                                    </div>
                                    <div class="h-2 bg-gray-100 rounded-full">
                                        <div
                                            class="h-2 bg-emerald-500 rounded-full"
                                            style=format!("width: {}%", item.percent)
                                        ></div>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </Card>

                    <Card title="Recent Activity" description="Latest actions and updates">
                        <div class="space-y-4">
                            {recent_activity().into_iter().map(|activity| view! {
                                <div class="flex items-start gap-4">
                                    <div class="h-9 w-9 rounded-full bg-emerald-50 flex items-center justify-center">
                                        {activity.kind.icon()}
                                    </div>
                                    <div class="flex-1">
                                        <div class="flex justify-between">
                                            <p class="font-medium">{activity.description}</p>
                                            <span class="text-sm text-gray-500">
                                                {activity.date.format("%b %-d").to_string()}
                                            </span>
                                        </div>
                                        <p class="text-sm text-gray-500">{activity.details}</p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </Card>
                </div>

                <div class="space-y-6">
                    <Card title="Upcoming Collections" description="Your scheduled waste pickups">
                        <div class="space-y-4">
                            {upcoming.into_iter().map(|booking| view! {
                                <div class="flex flex-col space-y-2 p-3 rounded-lg border">
                                    <div class="flex justify-between items-center">
                                        <span class="font-medium">{booking.date.format("%a, %b %-d").to_string()}</span>
                                        <span class="text-xs bg-emerald-50 text-emerald-600 px-2 py-1 rounded-full">
                                            {booking.waste_type.short_label()}
                                        </span>
                                    </div>
                                    <div class="text-sm text-gray-500">"🕑 " {booking.time}</div>
                                </div>
                            }).collect_view()}
                        </div>
                        <A
                            href=Page::Bookings.path()
                            class="block w-full mt-4 border rounded-md py-2 text-center text-sm font-medium"
                        >
                            "View All Bookings"
                        </A>
                    </Card>

                    <Card title="Waste Summary" description="This month's waste by category">
                        <div class="space-y-3">
                            {WASTE_SUMMARY.iter().map(|share| view! {
                                <div class="flex items-center justify-between">
                                    <span class=format!("px-2 py-0.5 rounded-full border text-xs {}", risk_classes(share.waste_type.risk()))>
                                        {share.waste_type.short_label()}
                                    </span>
                                    <span class="text-sm text-gray-500">
                                        {format!("{} kg ({}%)", share.amount_kg, share.percent)}
                                    </span>
                                </div>
                            }).collect_view()}
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Card(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border shadow-sm p-6">
            <h2 class="text-lg font-semibold">{title}</h2>
            <p class="text-sm text-gray-500 mb-4">{description}</p>
            {children()}
        </div>
    }
}
