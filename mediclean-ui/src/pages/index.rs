//! Landing Page
//!
//! Public marketing page: hero, features, waste categories and the
//! "How It Works" steps.

use leptos::*;
use leptos_router::*;
use mediclean::content::{FEATURES, HERO_SUBTITLE, HERO_TITLE, STEPS};
use mediclean::Page;

use crate::components::WasteCategories;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <div>
            <section class="py-20 bg-gradient-to-b from-emerald-50 to-white">
                <div class="container mx-auto px-4 max-w-3xl text-center">
                    <h1 class="text-4xl md:text-5xl font-bold tracking-tight text-emerald-700 mb-6">
                        {HERO_TITLE}
                    </h1>
                    <p class="text-xl text-gray-500 mb-8">{HERO_SUBTITLE}</p>
                    <A
                        href=Page::Signup.path()
                        class="inline-block px-8 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium"
                    >
                        "Get Started"
                    </A>
                </div>
            </section>

            <Section title="Our Features" subtitle="Everything your medical facility needs for efficient waste management">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="bg-white rounded-lg border shadow-sm p-6">
                            <div class="h-12 w-12 rounded-lg bg-emerald-50 flex items-center justify-center text-2xl mb-4">
                                {feature.icon}
                            </div>
                            <h3 class="text-xl font-medium mb-2">{feature.title}</h3>
                            <p class="text-gray-500">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Section>

            <Section title="Waste Categories We Handle" subtitle="Comprehensive waste management for all medical waste classifications">
                <WasteCategories />
            </Section>

            <Section title="How It Works" subtitle="Simple steps to manage your medical waste effectively">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                    {STEPS.iter().map(|step| view! {
                        <div class="text-center">
                            <div class="h-16 w-16 rounded-full bg-emerald-50 text-emerald-600 flex items-center justify-center mx-auto mb-4">
                                <span class="text-2xl font-bold">{step.number}</span>
                            </div>
                            <h3 class="text-xl font-medium mb-2">{step.title}</h3>
                            <p class="text-gray-500">{step.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Section>
        </div>
    }
}

#[component]
fn Section(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold mb-3">{title}</h2>
                    <p class="text-gray-500 max-w-2xl mx-auto">{subtitle}</p>
                </div>
                {children()}
            </div>
        </section>
    }
}
