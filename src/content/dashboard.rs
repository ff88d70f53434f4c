//! Dashboard sample data: stat cards, compliance, activity feed, waste mix

use chrono::NaiveDate;
use serde::Serialize;

use crate::bookings::WasteType;

/// Direction of a stat card trend
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Trend annotation on a stat card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub text: &'static str,
}

/// Headline number on the dashboard
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub trend: Option<Trend>,
}

pub const STAT_CARDS: &[StatCard] = &[
    StatCard {
        title: "Total Collections",
        value: "87",
        description: "This month",
        icon: "🗑️",
        trend: Some(Trend {
            direction: TrendDirection::Up,
            text: "+12.5% from last month",
        }),
    },
    StatCard {
        title: "Next Collection",
        value: "Tomorrow",
        description: "January 28, 10:00 AM",
        icon: "📅",
        trend: None,
    },
    StatCard {
        title: "Waste Volume",
        value: "342 kg",
        description: "This month",
        icon: "📊",
        trend: Some(Trend {
            direction: TrendDirection::Up,
            text: "+7.2% from last month",
        }),
    },
    StatCard {
        title: "Compliance",
        value: "98%",
        description: "Regulatory compliance score",
        icon: "📈",
        trend: None,
    },
];

/// One row of the compliance overview
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComplianceItem {
    pub name: &'static str,
    /// 0..=100
    pub percent: u8,
}

pub const COMPLIANCE: &[ComplianceItem] = &[
    ComplianceItem { name: "Documentation", percent: 100 },
    ComplianceItem { name: "Staff Training", percent: 85 },
    ComplianceItem { name: "Waste Segregation", percent: 98 },
    ComplianceItem { name: "Storage Requirements", percent: 92 },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ActivityKind {
    Collection,
    Payment,
    Message,
    Alert,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Collection => "📅",
            ActivityKind::Payment => "💳",
            ActivityKind::Message => "💬",
            ActivityKind::Alert => "⚠️",
        }
    }
}

/// Entry in the recent activity feed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub description: &'static str,
    pub date: NaiveDate,
    pub details: &'static str,
}

/// Recent activity, newest first
pub fn recent_activity() -> Vec<ActivityItem> {
    let rows = [
        (
            ActivityKind::Collection,
            "Waste collection completed",
            (2025, 1, 24),
            "32 kg of general waste collected",
        ),
        (ActivityKind::Payment, "Invoice #INV-2023-124 paid", (2025, 1, 22), "$245.00"),
        (ActivityKind::Message, "New message from Support", (2025, 1, 20), "Re: February Schedule"),
        (ActivityKind::Alert, "Compliance reminder", (2025, 1, 18), "Annual report due in 14 days"),
    ];

    rows.into_iter()
        .filter_map(|(kind, description, (y, m, d), details)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| ActivityItem {
                kind,
                description,
                date,
                details,
            })
        })
        .collect()
}

/// Share of this month's waste by type
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WasteShare {
    pub waste_type: WasteType,
    pub amount_kg: u32,
    pub percent: u8,
}

pub const WASTE_SUMMARY: &[WasteShare] = &[
    WasteShare { waste_type: WasteType::General, amount_kg: 152, percent: 45 },
    WasteShare { waste_type: WasteType::Sharps, amount_kg: 87, percent: 25 },
    WasteShare { waste_type: WasteType::Pharmaceutical, amount_kg: 63, percent: 18 },
    WasteShare { waste_type: WasteType::Hazardous, amount_kg: 40, percent: 12 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waste_summary_adds_up() {
        let percent: u32 = WASTE_SUMMARY.iter().map(|s| s.percent as u32).sum();
        assert_eq!(percent, 100);
        let kg: u32 = WASTE_SUMMARY.iter().map(|s| s.amount_kg).sum();
        assert_eq!(kg, 342);
    }

    #[test]
    fn test_compliance_in_range() {
        assert!(COMPLIANCE.iter().all(|c| c.percent <= 100));
    }

    #[test]
    fn test_recent_activity_newest_first() {
        let feed = recent_activity();
        assert_eq!(feed.len(), 4);
        assert!(feed.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(feed[3].kind.icon(), "⚠️");
    }
}
