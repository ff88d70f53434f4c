//! In-memory booking ledger behind the booking form.
//!
//! Nothing here is persisted; a reload starts from the sample bookings again.

use chrono::NaiveDate;
use uuid::Uuid;

use super::error::{BookingError, BookingResult};
use super::types::{Booking, BookingStatus, WasteType, TIME_SLOTS};

/// Ordered list of bookings, oldest entry first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-filled with the three sample collections shown to every
    /// new visitor
    pub fn with_samples() -> Self {
        let samples = [
            ("1", (2025, 1, 28), "10:00 AM", WasteType::General),
            ("2", (2025, 1, 31), "2:00 PM", WasteType::Sharps),
            ("3", (2025, 2, 5), "9:30 AM", WasteType::Pharmaceutical),
        ];

        let bookings = samples
            .into_iter()
            .filter_map(|(id, (y, m, d), time, waste_type)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| Booking {
                    id: id.to_string(),
                    date,
                    time: time.to_string(),
                    waste_type,
                    status: BookingStatus::Scheduled,
                })
            })
            .collect();

        Self { bookings }
    }

    /// Append a new scheduled booking with a fresh identifier
    pub fn schedule(
        &mut self,
        date: NaiveDate,
        time: &str,
        waste_type: WasteType,
    ) -> BookingResult<&Booking> {
        if !TIME_SLOTS.contains(&time) {
            return Err(BookingError::UnknownTimeSlot(time.to_string()));
        }

        let booking = Booking {
            id: new_booking_id(),
            date,
            time: time.to_string(),
            waste_type,
            status: BookingStatus::Scheduled,
        };

        tracing::debug!(
            booking_id = %booking.id,
            date = %booking.date,
            waste_type = %booking.waste_type,
            "Booking scheduled"
        );

        self.bookings.push(booking);
        let index = self.bookings.len() - 1;
        Ok(&self.bookings[index])
    }

    /// Mark a booking canceled. Canceling twice is a no-op; completed
    /// collections cannot be canceled.
    pub fn cancel(&mut self, id: &str) -> BookingResult<&Booking> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        match booking.status {
            BookingStatus::Completed => Err(BookingError::NotCancelable {
                id: id.to_string(),
                status: booking.status,
            }),
            BookingStatus::Canceled => Ok(&*booking),
            BookingStatus::Scheduled => {
                booking.status = BookingStatus::Canceled;
                tracing::debug!(booking_id = %id, "Booking canceled");
                Ok(&*booking)
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Bookings on a given day, in insertion order
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.date == date).collect()
    }

    /// Still-scheduled bookings ordered by date
    pub fn scheduled(&self) -> Vec<&Booking> {
        let mut scheduled: Vec<_> = self.bookings.iter().filter(|b| b.is_active()).collect();
        scheduled.sort_by_key(|b| b.date);
        scheduled
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Parse a form date (`YYYY-MM-DD`)
pub fn parse_date(input: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(input.to_string()))
}

fn new_booking_id() -> String {
    let token = Uuid::new_v4().simple().to_string();
    token[..9].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_samples() {
        let ledger = BookingLedger::with_samples();
        assert_eq!(ledger.len(), 3);
        assert!(ledger.iter().all(|b| b.status == BookingStatus::Scheduled));
        assert_eq!(ledger.get("2").unwrap().waste_type, WasteType::Sharps);
    }

    #[test]
    fn test_schedule_appends_scheduled_entry() {
        let mut ledger = BookingLedger::with_samples();
        let booking = ledger
            .schedule(date(2025, 3, 1), "10:00 AM", WasteType::Sharps)
            .unwrap()
            .clone();

        assert_eq!(booking.date, date(2025, 3, 1));
        assert_eq!(booking.time, "10:00 AM");
        assert_eq!(booking.waste_type, WasteType::Sharps);
        assert_eq!(booking.status, BookingStatus::Scheduled);
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.iter().last(), Some(&booking));
    }

    #[test]
    fn test_schedule_generates_distinct_ids() {
        let mut ledger = BookingLedger::new();
        let a = ledger.schedule(date(2025, 3, 1), "9:00 AM", WasteType::General).unwrap().id.clone();
        let b = ledger.schedule(date(2025, 3, 1), "9:00 AM", WasteType::General).unwrap().id.clone();
        assert_ne!(a, b);
        assert_eq!(ledger.on_date(date(2025, 3, 1)).len(), 2);
    }

    #[test]
    fn test_schedule_rejects_unknown_slot() {
        let mut ledger = BookingLedger::new();
        let err = ledger
            .schedule(date(2025, 3, 1), "7:00 PM", WasteType::General)
            .unwrap_err();
        assert_eq!(err, BookingError::UnknownTimeSlot("7:00 PM".to_string()));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_cancel_only_touches_target() {
        let mut ledger = BookingLedger::with_samples();
        let id = ledger
            .schedule(date(2025, 3, 1), "10:00 AM", WasteType::Sharps)
            .unwrap()
            .id
            .clone();
        let before: Vec<_> = ledger.iter().filter(|b| b.id != id).cloned().collect();

        let canceled = ledger.cancel(&id).unwrap();
        assert_eq!(canceled.status, BookingStatus::Canceled);

        let after: Vec<_> = ledger.iter().filter(|b| b.id != id).cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_cancel_twice_is_noop() {
        let mut ledger = BookingLedger::with_samples();
        ledger.cancel("1").unwrap();
        assert_eq!(ledger.cancel("1").unwrap().status, BookingStatus::Canceled);
    }

    #[test]
    fn test_cancel_unknown() {
        let mut ledger = BookingLedger::with_samples();
        assert_eq!(ledger.cancel("nope"), Err(BookingError::NotFound("nope".to_string())));
    }

    #[test]
    fn test_scheduled_excludes_canceled_and_sorts() {
        let mut ledger = BookingLedger::with_samples();
        ledger.schedule(date(2025, 1, 2), "9:00 AM", WasteType::Hazardous).unwrap();
        ledger.cancel("2").unwrap();

        let dates: Vec<_> = ledger.scheduled().iter().map(|b| b.date).collect();
        assert_eq!(dates, vec![date(2025, 1, 2), date(2025, 1, 28), date(2025, 2, 5)]);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-01").unwrap(), date(2025, 3, 1));
        assert!(matches!(parse_date("03/01/2025"), Err(BookingError::InvalidDate(_))));
    }
}
