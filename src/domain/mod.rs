//! Core business entities and types

pub mod booking;
pub mod error;
pub mod reservation;
pub mod station;
pub mod time;

// Re-export commonly used types
pub use booking::{
    normalize_vehicle_plate, quote, total_amount, validate_duration_choice, Booking,
    BookingQuote, NewBooking, DURATION_CHOICES_MIN,
};
pub use error::{DomainError, DomainResult};
pub use reservation::Reservation;
pub use station::{ChargingPoint, PointStatus, PointType, Station};
pub use time::{TimeOfDay, MINUTES_PER_DAY};
