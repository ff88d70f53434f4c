//! Waste Categories Component
//!
//! Cards describing each waste stream and its handling risk.

use leptos::*;
use mediclean::content::{RiskLevel, WasteCategory, WASTE_CATEGORIES};

/// Tailwind classes for a risk-coloured badge or banner
pub fn risk_classes(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Safe => "bg-emerald-50 text-emerald-700 border-emerald-200",
        RiskLevel::Caution => "bg-amber-50 text-amber-700 border-amber-200",
        RiskLevel::Hazard => "bg-red-50 text-red-700 border-red-200",
    }
}

fn border_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Safe => "border-l-emerald-500",
        RiskLevel::Caution => "border-l-amber-500",
        RiskLevel::Hazard => "border-l-red-500",
    }
}

/// Grid of all waste category cards
#[component]
pub fn WasteCategories() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {WASTE_CATEGORIES
                .iter()
                .map(|category| view! { <WasteCategoryCard category=category /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn WasteCategoryCard(category: &'static WasteCategory) -> impl IntoView {
    let risk = category.risk;

    view! {
        <div class=format!(
            "bg-white rounded-lg border border-l-4 {} shadow-sm hover:shadow-md transition-all flex flex-col",
            border_class(risk)
        )>
            <div class="p-6 flex justify-between items-start">
                <div>
                    <h3 class="text-lg font-semibold">{category.title}</h3>
                    <p class="text-sm text-gray-500 mt-1">{category.description}</p>
                </div>
                <div class=format!(
                    "h-10 w-10 rounded-full border {} flex items-center justify-center",
                    risk_classes(risk)
                )>
                    {category.icon}
                </div>
            </div>

            <div class="px-6 space-y-4 flex-1">
                <div>
                    <h4 class="text-sm font-medium mb-2">"Examples"</h4>
                    <div class="flex flex-wrap gap-2">
                        {category.examples.iter().map(|example| view! {
                            <span class="px-2 py-0.5 border rounded-full text-xs">{*example}</span>
                        }).collect_view()}
                    </div>
                </div>
                <div>
                    <h4 class="text-sm font-medium mb-1">"Guidelines"</h4>
                    <p class="text-sm text-gray-500">{category.guidelines}</p>
                </div>
            </div>

            <div class="p-6">
                <div class=format!(
                    "w-full py-2 px-3 rounded-md border text-xs flex items-center gap-2 {}",
                    risk_classes(risk)
                )>
                    <span>"⚠"</span>
                    <span>{risk.banner()}</span>
                </div>
            </div>
        </div>
    }
}
