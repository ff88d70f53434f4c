//! Transient notices
//!
//! Success and error messages shown after form submissions. The browser
//! frontend displays one at a time and clears it after [`Notice::timeout_ms`].

use serde::Serialize;

use crate::bookings::{Booking, BookingError};
use crate::content::PasswordChangeError;
use crate::session::{AuthAction, SessionError};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A titled message with an optional detail line
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: None,
        }
    }

    /// Builder: attach a detail line
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// How long the notice stays on screen
    pub fn timeout_ms(&self) -> u32 {
        match self.level {
            NoticeLevel::Success => 3000,
            NoticeLevel::Error => 5000,
        }
    }

    pub fn auth_succeeded(action: AuthAction) -> Self {
        match action {
            AuthAction::Login => {
                Self::success("Login successful").description("Welcome back to MediClean!")
            }
            AuthAction::Signup => Self::success("Account created successfully")
                .description("Welcome to MediClean!"),
        }
    }

    /// Failed login or signup. The cause is never shown.
    pub fn auth_failed(action: AuthAction, error: &SessionError) -> Self {
        let title = match action {
            AuthAction::Login => "Login failed",
            AuthAction::Signup => "Signup failed",
        };
        Self::error(title).description(error.user_message())
    }

    pub fn logged_out() -> Self {
        Self::success("Logged out").description("You have been signed out of MediClean.")
    }

    pub fn booking_scheduled(booking: &Booking) -> Self {
        Self::success("Collection scheduled").description(format!(
            "{} pickup on {} at {}",
            booking.waste_type.label(),
            booking.date.format("%B %-d, %Y"),
            booking.time
        ))
    }

    pub fn booking_canceled(booking: &Booking) -> Self {
        Self::success("Collection canceled").description(format!(
            "The pickup on {} has been canceled.",
            booking.date.format("%B %-d, %Y")
        ))
    }

    pub fn booking_failed(error: &BookingError) -> Self {
        Self::error("Booking failed").description(error.to_string())
    }

    pub fn profile_updated() -> Self {
        Self::success("Profile updated")
            .description("Your profile changes have been saved successfully.")
    }

    pub fn password_updated() -> Self {
        Self::success("Password updated")
            .description("Your password has been changed successfully.")
    }

    pub fn password_failed(error: &PasswordChangeError) -> Self {
        Self::error("Password not updated").description(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::{BookingStatus, WasteType};
    use chrono::NaiveDate;

    #[test]
    fn test_auth_notices() {
        let ok = Notice::auth_succeeded(AuthAction::Signup);
        assert_eq!(ok.title, "Account created successfully");
        assert!(!ok.is_error());

        let err = Notice::auth_failed(
            AuthAction::Login,
            &SessionError::Write("quota exceeded".to_string()),
        );
        assert_eq!(err.title, "Login failed");
        assert_eq!(
            err.description.as_deref(),
            Some("Please check your credentials and try again.")
        );
        assert!(!err.description.unwrap_or_default().contains("quota"));
    }

    #[test]
    fn test_timeouts_by_level() {
        assert_eq!(Notice::profile_updated().timeout_ms(), 3000);
        assert_eq!(Notice::error("x").timeout_ms(), 5000);
    }

    #[test]
    fn test_booking_notice_mentions_slot() {
        let booking = Booking {
            id: "abc".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: "10:00 AM".to_string(),
            waste_type: WasteType::Sharps,
            status: BookingStatus::Scheduled,
        };
        let notice = Notice::booking_scheduled(&booking);
        let text = notice.description.unwrap();
        assert!(text.contains("March 1, 2025"));
        assert!(text.contains("10:00 AM"));
    }

    #[test]
    fn test_serializes_level_lowercase() {
        let json = serde_json::to_string(&Notice::error("Nope")).unwrap();
        assert!(json.contains("\"level\":\"error\""));
    }
}
