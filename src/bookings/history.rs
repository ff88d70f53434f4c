//! Booking history and recurring plans shown on the bookings page

use chrono::NaiveDate;
use serde::Serialize;

use super::types::{BookingStatus, WasteType};

/// A finished collection with its measured weight
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PastCollection {
    pub date: NaiveDate,
    pub time: &'static str,
    pub waste_type: WasteType,
    pub status: BookingStatus,
    pub weight_kg: u32,
}

/// Past collections, most recent first
pub fn past_collections() -> Vec<PastCollection> {
    let rows = [
        ((2025, 1, 15), "10:00 AM", WasteType::General, 28),
        ((2025, 1, 8), "2:00 PM", WasteType::Sharps, 12),
        ((2025, 1, 2), "9:30 AM", WasteType::Pharmaceutical, 15),
        ((2024, 12, 27), "11:00 AM", WasteType::Hazardous, 8),
        ((2024, 12, 20), "3:30 PM", WasteType::General, 32),
    ];

    rows.into_iter()
        .filter_map(|((y, m, d), time, waste_type, weight_kg)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| PastCollection {
                date,
                time,
                waste_type,
                status: BookingStatus::Completed,
                weight_kg,
            })
        })
        .collect()
}

/// Whether a recurring plan is running
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PlanStatus {
    Active,
    Paused,
}

impl PlanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::Active => "Active",
            PlanStatus::Paused => "Paused",
        }
    }

    /// Label of the button that flips the status
    pub fn toggle_label(&self) -> &'static str {
        match self {
            PlanStatus::Active => "Pause",
            PlanStatus::Paused => "Resume",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PlanStatus::Active => PlanStatus::Paused,
            PlanStatus::Paused => PlanStatus::Active,
        }
    }
}

/// A regular collection schedule
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecurringPlan {
    pub title: &'static str,
    pub cadence: &'static str,
    pub status: PlanStatus,
}

pub fn recurring_plans() -> Vec<RecurringPlan> {
    vec![
        RecurringPlan {
            title: "Weekly General Waste",
            cadence: "Every Monday at 10:00 AM",
            status: PlanStatus::Active,
        },
        RecurringPlan {
            title: "Bi-weekly Sharps",
            cadence: "Every other Friday at 2:00 PM",
            status: PlanStatus::Active,
        },
        RecurringPlan {
            title: "Monthly Pharmaceutical",
            cadence: "First Monday of each month at 9:00 AM",
            status: PlanStatus::Paused,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_collections_are_completed_and_ordered() {
        let rows = past_collections();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.status == BookingStatus::Completed));
        assert!(rows.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(rows.iter().map(|r| r.weight_kg).sum::<u32>(), 95);
    }

    #[test]
    fn test_plan_toggle() {
        let plans = recurring_plans();
        assert_eq!(plans[2].status, PlanStatus::Paused);
        assert_eq!(plans[2].status.toggle_label(), "Resume");
        assert_eq!(plans[0].status.toggled(), PlanStatus::Paused);
    }
}
