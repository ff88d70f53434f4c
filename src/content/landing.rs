//! Landing page copy

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const HERO_TITLE: &str = "Medical Waste Management Made Simple";
pub const HERO_SUBTITLE: &str = "Streamline your medical waste disposal with our comprehensive \
                                 waste management system designed for healthcare facilities";

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Efficient Scheduling",
        description: "Book and manage waste collection appointments with an intuitive calendar system",
        icon: "📅",
    },
    Feature {
        title: "Waste Tracking",
        description: "Track all waste categories and volumes with detailed reporting",
        icon: "🗑️",
    },
    Feature {
        title: "Compliance Management",
        description: "Stay compliant with all medical waste disposal regulations",
        icon: "📄",
    },
    Feature {
        title: "Simplified Payments",
        description: "Manage invoices and payments through a secure payment portal",
        icon: "💳",
    },
];

/// Numbered "How It Works" step
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Create an Account",
        description: "Register your facility and set up your profile",
    },
    Step {
        number: 2,
        title: "Schedule Collections",
        description: "Book waste pickups at times that suit your facility",
    },
    Step {
        number: 3,
        title: "Track & Comply",
        description: "Monitor collections and keep your compliance records current",
    },
];
