//! Profile page data: editable drafts, facility types, billing and
//! notification preferences.

use serde::Serialize;
use thiserror::Error;

use crate::session::SessionRecord;

/// Editable copy of the profile forms.
///
/// Pre-filled from the session record; contact and address fields start
/// from fixed demo values. Edits are never written back to the session.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub facility_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ProfileDraft {
    pub fn from_record(record: &SessionRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: "555-123-4567".to_string(),
            facility_name: record.facility_name.clone().unwrap_or_default(),
            address: "123 Medical Plaza".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip: "94103".to_string(),
        }
    }

    /// Name on the billing address: facility if set, else the user
    pub fn billing_name(&self) -> &str {
        if self.facility_name.is_empty() {
            &self.name
        } else {
            &self.facility_name
        }
    }

    /// Second billing address line, e.g. `San Francisco, CA 94103`
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum FacilityType {
    #[default]
    Hospital,
    Clinic,
    Dental,
    Laboratory,
    Pharmacy,
    Other,
}

impl FacilityType {
    pub fn all() -> &'static [FacilityType] {
        &[
            FacilityType::Hospital,
            FacilityType::Clinic,
            FacilityType::Dental,
            FacilityType::Laboratory,
            FacilityType::Pharmacy,
            FacilityType::Other,
        ]
    }

    /// Form value
    pub fn value(&self) -> &'static str {
        match self {
            FacilityType::Hospital => "hospital",
            FacilityType::Clinic => "clinic",
            FacilityType::Dental => "dental",
            FacilityType::Laboratory => "laboratory",
            FacilityType::Pharmacy => "pharmacy",
            FacilityType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacilityType::Hospital => "Hospital",
            FacilityType::Clinic => "Medical Clinic",
            FacilityType::Dental => "Dental Office",
            FacilityType::Laboratory => "Laboratory",
            FacilityType::Pharmacy => "Pharmacy",
            FacilityType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.value() == value)
    }
}

/// Problems with the change-password form
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PasswordChangeError {
    #[error("All password fields are required")]
    Incomplete,

    #[error("New passwords do not match")]
    Mismatch,

    #[error("New password must differ from the current one")]
    Unchanged,
}

/// Change-password form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), PasswordChangeError> {
        if self.current.is_empty() || self.new.is_empty() || self.confirm.is_empty() {
            return Err(PasswordChangeError::Incomplete);
        }
        if self.new != self.confirm {
            return Err(PasswordChangeError::Mismatch);
        }
        if self.new == self.current {
            return Err(PasswordChangeError::Unchanged);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotificationPreference {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub enabled: bool,
}

pub fn notification_preferences() -> Vec<NotificationPreference> {
    vec![
        NotificationPreference {
            title: "Collection Reminders",
            description: "Receive reminders about upcoming waste collections",
            icon: "📅",
            enabled: true,
        },
        NotificationPreference {
            title: "Payment Confirmations",
            description: "Get notified when payments are processed",
            icon: "💳",
            enabled: true,
        },
        NotificationPreference {
            title: "Account Updates",
            description: "Important updates regarding your account",
            icon: "👤",
            enabled: true,
        },
        NotificationPreference {
            title: "Compliance Alerts",
            description: "Stay informed about regulatory changes",
            icon: "🔔",
            enabled: false,
        },
    ]
}

/// Saved card on the billing tab
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaymentMethod {
    pub brand: &'static str,
    pub last4: &'static str,
    pub expires: &'static str,
    pub is_default: bool,
}

impl PaymentMethod {
    pub fn summary(&self) -> String {
        format!("{} ending in {}", self.brand, self.last4)
    }
}

pub const PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod { brand: "VISA", last4: "4242", expires: "12/2025", is_default: true },
    PaymentMethod { brand: "MasterCard", last4: "5678", expires: "08/2024", is_default: false },
];
