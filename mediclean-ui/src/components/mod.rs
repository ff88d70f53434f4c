//! UI Components
//!
//! Reusable Leptos components for the portal pages.

pub mod auth_form;
pub mod booking_calendar;
pub mod dashboard_stats;
pub mod gate;
pub mod loading;
pub mod nav;
pub mod tabs;
pub mod toast;
pub mod waste_categories;

pub use auth_form::AuthForm;
pub use booking_calendar::BookingCalendar;
pub use dashboard_stats::DashboardStats;
pub use gate::Gate;
pub use loading::{InlineLoading, PageLoading};
pub use nav::Nav;
pub use tabs::TabButton;
pub use toast::Toast;
pub use waste_categories::{risk_classes, WasteCategories};
