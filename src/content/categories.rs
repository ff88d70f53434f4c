//! Waste categories handled by the service

use serde::Serialize;

/// Handling risk of a waste stream
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Caution,
    Hazard,
}

impl RiskLevel {
    /// Banner text shown under a category card
    pub fn banner(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Low risk - Standard protocols apply",
            RiskLevel::Caution => "Medium risk - Special handling required",
            RiskLevel::Hazard => "High risk - Strict protocols must be followed",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "safe"),
            RiskLevel::Caution => write!(f, "caution"),
            RiskLevel::Hazard => write!(f, "hazard"),
        }
    }
}

/// A waste category card on the landing page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WasteCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub risk: RiskLevel,
    pub examples: &'static [&'static str],
    pub guidelines: &'static str,
}

pub const WASTE_CATEGORIES: &[WasteCategory] = &[
    WasteCategory {
        title: "General Medical Waste",
        description: "Non-hazardous healthcare waste similar to regular waste",
        icon: "💧",
        risk: RiskLevel::Safe,
        examples: &["Paper", "Packaging", "Non-soiled items", "Masks", "Gloves"],
        guidelines: "Can be disposed of with regular waste following standard sanitation protocols. \
                     Should be placed in clear or white bags.",
    },
    WasteCategory {
        title: "Infectious Waste",
        description: "Materials contaminated with blood and other bodily fluids",
        icon: "🦠",
        risk: RiskLevel::Caution,
        examples: &["Soiled bandages", "Culture dishes", "Blood bags", "Swabs"],
        guidelines: "Must be placed in leak-proof, biohazard-labeled red bags and containers. \
                     Requires treatment before disposal.",
    },
    WasteCategory {
        title: "Sharps Waste",
        description: "Objects that can cut or puncture skin",
        icon: "💉",
        risk: RiskLevel::Caution,
        examples: &["Needles", "Scalpels", "Broken glass", "Lancets"],
        guidelines: "Must be collected in puncture-resistant, labeled containers. \
                     Never recap needles before disposal.",
    },
    WasteCategory {
        title: "Pharmaceutical Waste",
        description: "Expired or unused medications and related supplies",
        icon: "💊",
        risk: RiskLevel::Caution,
        examples: &["Expired drugs", "Unused medications", "Containers", "Vials"],
        guidelines: "Must be segregated from other waste streams. \
                     Some medications require special disposal methods.",
    },
    WasteCategory {
        title: "Chemical Waste",
        description: "Laboratory chemicals and reagents",
        icon: "🧪",
        risk: RiskLevel::Hazard,
        examples: &["Solvents", "Disinfectants", "Reagents", "Acids"],
        guidelines: "Must be collected in compatible containers with proper labeling. \
                     Segregate incompatible chemicals.",
    },
    WasteCategory {
        title: "Radioactive Waste",
        description: "Materials contaminated with radioactive substances",
        icon: "☢️",
        risk: RiskLevel::Hazard,
        examples: &["Isotopes", "Contaminated tools", "Lab coats", "Gloves"],
        guidelines: "Requires specialized containment, labeling, and documentation. \
                     Must be handled by trained personnel only.",
    },
];

/// Categories at a given risk level
pub fn by_risk(risk: RiskLevel) -> impl Iterator<Item = &'static WasteCategory> {
    WASTE_CATEGORIES.iter().filter(move |c| c.risk == risk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_categories() {
        assert_eq!(WASTE_CATEGORIES.len(), 6);
        assert!(WASTE_CATEGORIES.iter().all(|c| !c.examples.is_empty()));
    }

    #[test]
    fn test_by_risk() {
        assert_eq!(by_risk(RiskLevel::Safe).count(), 1);
        assert_eq!(by_risk(RiskLevel::Caution).count(), 3);
        let hazards: Vec<_> = by_risk(RiskLevel::Hazard).map(|c| c.title).collect();
        assert_eq!(hazards, vec!["Chemical Waste", "Radioactive Waste"]);
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(RiskLevel::Hazard.banner(), "High risk - Strict protocols must be followed");
        assert_eq!(RiskLevel::Caution.to_string(), "caution");
    }
}
