//! Booking error types

use thiserror::Error;

use super::types::BookingStatus;

/// Errors from the booking ledger
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// No booking with this identifier
    #[error("Booking not found: {0}")]
    NotFound(String),

    /// Time is not one of the offered slots
    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    /// Waste type name not recognised
    #[error("Unknown waste type: {0}")]
    UnknownWasteType(String),

    /// Date text could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Booking is in a state that cannot be canceled
    #[error("Booking {id} cannot be canceled: already {status}")]
    NotCancelable { id: String, status: BookingStatus },
}

/// Result type alias for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
