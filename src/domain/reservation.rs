//! Confirmed reservations, the read-only input to slot computation

use super::error::{DomainError, DomainResult};
use super::time::TimeOfDay;

/// An already-confirmed booking interval for one charging point on one day.
///
/// Reservations are fetched from the booking store and never mutated here.
/// Intervals on the same point and day are assumed non-overlapping; the
/// store enforces that at confirmation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub charging_point_id: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Reservation {
    pub fn new(
        charging_point_id: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            charging_point_id: charging_point_id.into(),
            start,
            end,
        }
    }

    /// Parse from the wire shape: 12-hour start/end labels.
    pub fn from_labels(
        charging_point_id: impl Into<String>,
        start_label: &str,
        end_label: &str,
    ) -> DomainResult<Self> {
        let start = TimeOfDay::parse_label(start_label)?;
        let end = TimeOfDay::parse_label(end_label)?;
        if end != TimeOfDay::MIDNIGHT && end <= start {
            return Err(DomainError::Validation(format!(
                "reservation ends before it starts: {} -> {}",
                start_label, end_label
            )));
        }
        Ok(Self::new(charging_point_id, start, end))
    }

    /// End hour on the day grid. An end of `12:00 AM` means the reservation
    /// runs to the end of the same day, so hour 0 is folded to 24.
    pub fn end_hour_on_grid(&self) -> u32 {
        match self.end.hour() {
            0 => 24,
            h => h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels() {
        let r = Reservation::from_labels("CP-01", "10:00 AM", "12:00 PM").unwrap();
        assert_eq!(r.start.hour(), 10);
        assert_eq!(r.end.hour(), 12);
        assert_eq!(r.end_hour_on_grid(), 12);
    }

    #[test]
    fn test_midnight_end_folds_to_hour_24() {
        let r = Reservation::from_labels("CP-01", "10:00 PM", "12:00 AM").unwrap();
        assert_eq!(r.start.hour(), 22);
        assert_eq!(r.end_hour_on_grid(), 24);
    }

    #[test]
    fn test_inverted_interval_is_rejected() {
        assert!(Reservation::from_labels("CP-01", "03:00 PM", "01:00 PM").is_err());
    }

    #[test]
    fn test_bad_label_is_a_validation_error_not_a_panic() {
        let err = Reservation::from_labels("CP-01", "25:00 XX", "01:00 PM").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimeLabel(_)));
    }
}
