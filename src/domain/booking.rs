//! Booking records and derived price/end-time computations

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::{DomainError, DomainResult};
use super::time::TimeOfDay;

/// The fixed session lengths offered to the user, in minutes.
pub const DURATION_CHOICES_MIN: [u32; 3] = [60, 120, 180];

/// A confirmed booking, as persisted by the store
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub station_id: String,
    pub charging_point_id: String,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub duration_minutes: u32,
    pub vehicle_plate: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// End of the session, wrapping past midnight (`11:00 PM` + 60min
    /// ends at `12:00 AM`).
    pub fn end(&self) -> TimeOfDay {
        self.start.add_minutes(self.duration_minutes)
    }
}

/// Price and end-time derived for a chosen (start, duration) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingQuote {
    pub end_time: TimeOfDay,
    pub total_amount: Decimal,
}

/// A booking request as assembled by the user, before confirmation
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub station_id: String,
    pub charging_point_id: String,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub duration_minutes: u32,
    pub vehicle_plate: String,
}

/// Check that a duration is one of the offered session lengths.
pub fn validate_duration_choice(duration_minutes: u32) -> DomainResult<()> {
    if DURATION_CHOICES_MIN.contains(&duration_minutes) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "duration must be one of {:?} minutes, got {}",
            DURATION_CHOICES_MIN, duration_minutes
        )))
    }
}

/// Normalize a vehicle plate: uppercase, whitespace stripped.
pub fn normalize_vehicle_plate(plate: &str) -> DomainResult<String> {
    let normalized: String = plate
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if normalized.is_empty() {
        return Err(DomainError::Validation(
            "vehicle plate must not be empty".to_string(),
        ));
    }
    Ok(normalized)
}

/// Total price for a session: `price_per_hour × duration / 60`, carried at
/// exactly two decimal places.
pub fn total_amount(price_per_hour: Decimal, duration_minutes: u32) -> Decimal {
    let mut total = price_per_hour * Decimal::from(duration_minutes) / Decimal::from(60);
    total.rescale(2);
    total
}

/// Derive end time and total price for a chosen slot.
pub fn quote(price_per_hour: Decimal, start: TimeOfDay, duration_minutes: u32) -> BookingQuote {
    BookingQuote {
        end_time: start.add_minutes(duration_minutes),
        total_amount: total_amount(price_per_hour, duration_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_amount_is_exact() {
        // 18/h for three hours is exactly 54.00
        let total = total_amount(Decimal::from(18), 180);
        assert_eq!(total.to_string(), "54.00");
    }

    #[test]
    fn test_total_amount_fractional_price() {
        let total = total_amount(Decimal::new(2250, 2), 120); // 22.50/h
        assert_eq!(total.to_string(), "45.00");
    }

    #[test]
    fn test_quote_rolls_over_midnight() {
        let start = TimeOfDay::parse_label("11:00 PM").unwrap();
        let q = quote(Decimal::from(18), start, 60);
        assert_eq!(q.end_time.label_12h(), "12:00 AM");
        assert_eq!(q.total_amount.to_string(), "18.00");
    }

    #[test]
    fn test_duration_choice_validation() {
        assert!(validate_duration_choice(60).is_ok());
        assert!(validate_duration_choice(180).is_ok());
        assert!(validate_duration_choice(90).is_err());
        assert!(validate_duration_choice(0).is_err());
    }

    #[test]
    fn test_plate_normalization() {
        assert_eq!(normalize_vehicle_plate("ka 01 ab 1234").unwrap(), "KA01AB1234");
        assert!(normalize_vehicle_plate("   ").is_err());
    }
}
