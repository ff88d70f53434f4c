//! Waste collection bookings
//!
//! - **types**: `Booking`, `WasteType`, `BookingStatus`, time slots
//! - **ledger**: in-memory `BookingLedger` behind the booking form
//! - **history**: past collections and recurring plans
//! - **error**: error types

pub mod error;
pub mod history;
pub mod ledger;
pub mod types;

pub use error::{BookingError, BookingResult};
pub use history::{past_collections, recurring_plans, PastCollection, PlanStatus, RecurringPlan};
pub use ledger::{parse_date, BookingLedger};
pub use types::{Booking, BookingStatus, WasteType, DEFAULT_TIME_SLOT, TIME_SLOTS};
