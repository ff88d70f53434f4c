//! Bookings Page
//!
//! Schedule collections, browse past ones and pause or resume recurring
//! plans. Plan toggles only last for the current visit.

use leptos::*;
use mediclean::bookings::{past_collections, recurring_plans, PlanStatus};

use crate::components::{risk_classes, BookingCalendar, TabButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Schedule,
    History,
    Recurring,
}

#[component]
pub fn Bookings() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Schedule);

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
                <h1 class="text-3xl font-bold">"Waste Collection Bookings"</h1>
                <p class="text-gray-500">"Schedule and manage your medical waste collections"</p>
            </div>

            <div class="inline-flex gap-1 p-1 mb-6 bg-gray-100 rounded-lg">
                {tab_button(Tab::Schedule, "Schedule")}
                {tab_button(Tab::History, "Booking History")}
                {tab_button(Tab::Recurring, "Recurring Plans")}
            </div>

            {move || match tab.get() {
                Tab::Schedule => view! { <BookingCalendar /> }.into_view(),
                Tab::History => view! { <History /> }.into_view(),
                Tab::Recurring => view! { <RecurringPlans /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn History() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border shadow-sm p-6">
            <h2 class="text-lg font-semibold">"Past Collections"</h2>
            <p class="text-sm text-gray-500 mb-4">"History of your waste collections"</p>

            <div class="rounded-md border overflow-x-auto">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="bg-gray-50 border-b">
                            <th class="px-4 py-3 text-left font-medium">"Date"</th>
                            <th class="px-4 py-3 text-left font-medium">"Time"</th>
                            <th class="px-4 py-3 text-left font-medium">"Waste Type"</th>
                            <th class="px-4 py-3 text-left font-medium">"Status"</th>
                            <th class="px-4 py-3 text-left font-medium">"Weight"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {past_collections().into_iter().map(|row| view! {
                            <tr class="border-b last:border-b-0">
                                <td class="px-4 py-3 whitespace-nowrap">{row.date.format("%Y-%m-%d").to_string()}</td>
                                <td class="px-4 py-3 whitespace-nowrap">{row.time}</td>
                                <td class="px-4 py-3 whitespace-nowrap">{row.waste_type.short_label()}</td>
                                <td class="px-4 py-3 whitespace-nowrap">
                                    <span class=format!("px-2 py-0.5 rounded-full border text-xs {}", risk_classes(row.status.risk()))>
                                        {row.status.label()}
                                    </span>
                                </td>
                                <td class="px-4 py-3 whitespace-nowrap">{format!("{} kg", row.weight_kg)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn RecurringPlans() -> impl IntoView {
    let plans = create_rw_signal(recurring_plans());

    let toggle = move |index: usize| {
        plans.update(|plans| {
            if let Some(plan) = plans.get_mut(index) {
                plan.status = plan.status.toggled();
            }
        });
    };

    view! {
        <div class="bg-white rounded-lg border shadow-sm p-6">
            <h2 class="text-lg font-semibold">"Recurring Plans"</h2>
            <p class="text-sm text-gray-500 mb-4">"Regular collection schedules"</p>

            <div class="space-y-4">
                {move || plans.get().into_iter().enumerate().map(|(index, plan)| {
                    let badge = match plan.status {
                        PlanStatus::Active => "bg-emerald-50 text-emerald-700",
                        PlanStatus::Paused => "bg-gray-100 text-gray-600",
                    };
                    view! {
                        <div class="flex items-center justify-between p-4 rounded-lg border">
                            <div>
                                <h3 class="font-medium">{plan.title}</h3>
                                <p class="text-sm text-gray-500">{plan.cadence}</p>
                            </div>
                            <div class="flex items-center gap-2">
                                <span class=format!("px-2 py-0.5 rounded-full text-xs {}", badge)>
                                    {plan.status.label()}
                                </span>
                                <button
                                    class="px-3 py-1 border rounded-md text-sm"
                                    on:click=move |_| toggle(index)
                                >
                                    {plan.status.toggle_label()}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
