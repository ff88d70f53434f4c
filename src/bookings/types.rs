//! Booking data types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::BookingError;
use crate::content::RiskLevel;

/// Collection time slots offered by the booking form
pub const TIME_SLOTS: [&str; 8] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
];

/// Default slot preselected in the form
pub const DEFAULT_TIME_SLOT: &str = TIME_SLOTS[0];

/// Waste stream a collection is booked for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WasteType {
    #[default]
    General,
    Sharps,
    Pharmaceutical,
    Hazardous,
}

impl WasteType {
    /// Get all waste types for iteration
    pub fn all() -> &'static [WasteType] {
        &[
            WasteType::General,
            WasteType::Sharps,
            WasteType::Pharmaceutical,
            WasteType::Hazardous,
        ]
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            WasteType::General => "General Medical Waste",
            WasteType::Sharps => "Sharps Waste",
            WasteType::Pharmaceutical => "Pharmaceutical Waste",
            WasteType::Hazardous => "Hazardous Waste",
        }
    }

    /// Short label for tables and badges
    pub fn short_label(&self) -> &'static str {
        match self {
            WasteType::General => "General",
            WasteType::Sharps => "Sharps",
            WasteType::Pharmaceutical => "Pharmaceutical",
            WasteType::Hazardous => "Hazardous",
        }
    }

    pub fn risk(&self) -> RiskLevel {
        match self {
            WasteType::General => RiskLevel::Safe,
            WasteType::Sharps | WasteType::Pharmaceutical => RiskLevel::Caution,
            WasteType::Hazardous => RiskLevel::Hazard,
        }
    }
}

impl std::fmt::Display for WasteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WasteType::General => write!(f, "general"),
            WasteType::Sharps => write!(f, "sharps"),
            WasteType::Pharmaceutical => write!(f, "pharmaceutical"),
            WasteType::Hazardous => write!(f, "hazardous"),
        }
    }
}

impl FromStr for WasteType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(WasteType::General),
            "sharps" => Ok(WasteType::Sharps),
            "pharmaceutical" => Ok(WasteType::Pharmaceutical),
            "hazardous" => Ok(WasteType::Hazardous),
            other => Err(BookingError::UnknownWasteType(other.to_string())),
        }
    }
}

/// Lifecycle of a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Canceled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "Scheduled",
            BookingStatus::Completed => "Completed",
            BookingStatus::Canceled => "Canceled",
        }
    }

    /// Badge colouring: completed is safe, scheduled caution, canceled hazard
    pub fn risk(&self) -> RiskLevel {
        match self {
            BookingStatus::Completed => RiskLevel::Safe,
            BookingStatus::Scheduled => RiskLevel::Caution,
            BookingStatus::Canceled => RiskLevel::Hazard,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Scheduled => write!(f, "scheduled"),
            BookingStatus::Completed => write!(f, "completed"),
            BookingStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// A waste collection booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date: NaiveDate,
    /// One of [`TIME_SLOTS`] for form-created bookings
    pub time: String,
    pub waste_type: WasteType,
    pub status: BookingStatus,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waste_type_parse() {
        assert_eq!("sharps".parse::<WasteType>().unwrap(), WasteType::Sharps);
        assert_eq!(" Hazardous ".parse::<WasteType>().unwrap(), WasteType::Hazardous);
        assert!(matches!(
            "radioactive".parse::<WasteType>(),
            Err(BookingError::UnknownWasteType(_))
        ));
    }

    #[test]
    fn test_waste_type_display_matches_parse() {
        for wt in WasteType::all() {
            assert_eq!(wt.to_string().parse::<WasteType>().unwrap(), *wt);
        }
    }

    #[test]
    fn test_risk_mapping() {
        assert_eq!(WasteType::General.risk(), RiskLevel::Safe);
        assert_eq!(WasteType::Pharmaceutical.risk(), RiskLevel::Caution);
        assert_eq!(BookingStatus::Canceled.risk(), RiskLevel::Hazard);
    }

    #[test]
    fn test_booking_json_uses_lowercase_tags() {
        let booking = Booking {
            id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 28).unwrap(),
            time: "10:00 AM".to_string(),
            waste_type: WasteType::General,
            status: BookingStatus::Scheduled,
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["wasteType"], "general");
        assert_eq!(json["status"], "scheduled");
        assert_eq!(json["date"], "2025-01-28");
    }
}
