//! Static site content
//!
//! Tables rendered by the pages. Everything here is fixed sample data that
//! is rebuilt on every load.

pub mod categories;
pub mod dashboard;
pub mod landing;
pub mod profile;

pub use categories::{RiskLevel, WasteCategory, WASTE_CATEGORIES};
pub use dashboard::{
    recent_activity, ActivityItem, ActivityKind, ComplianceItem, StatCard, Trend, TrendDirection,
    WasteShare, COMPLIANCE, STAT_CARDS, WASTE_SUMMARY,
};
pub use landing::{Feature, Step, FEATURES, HERO_SUBTITLE, HERO_TITLE, STEPS};
pub use profile::{
    notification_preferences, FacilityType, NotificationPreference, PasswordChange,
    PasswordChangeError, PaymentMethod, ProfileDraft, PAYMENT_METHODS,
};
