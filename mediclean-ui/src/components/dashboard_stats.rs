//! Dashboard Stats Component
//!
//! The four headline cards at the top of the dashboard.

use leptos::*;
use mediclean::content::{StatCard, TrendDirection, STAT_CARDS};

#[component]
pub fn DashboardStats() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
            {STAT_CARDS.iter().map(|card| view! { <StatsCard card=card /> }).collect_view()}
        </div>
    }
}

#[component]
fn StatsCard(card: &'static StatCard) -> impl IntoView {
    let trend = card.trend.as_ref().map(|trend| {
        let color = match trend.direction {
            TrendDirection::Up => "text-emerald-600",
            TrendDirection::Down => "text-red-600",
            TrendDirection::Neutral => "text-gray-500",
        };
        view! { <span class=format!("ml-1 font-medium {}", color)>{trend.text}</span> }
    });

    view! {
        <div class="bg-white rounded-lg border shadow-sm p-6">
            <div class="flex items-center justify-between pb-2">
                <h3 class="text-sm font-medium">{card.title}</h3>
                <div class="h-8 w-8 rounded-lg bg-emerald-50 flex items-center justify-center">
                    {card.icon}
                </div>
            </div>
            <div class="text-2xl font-bold">{card.value}</div>
            <p class="text-xs text-gray-500 mt-1 flex items-center gap-1">
                {card.description}
                {trend}
            </p>
        </div>
    }
}
