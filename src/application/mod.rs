//! Business logic: the slot availability engine and the booking service

pub mod availability;
pub mod booking;

pub use availability::{availability_grid, HourSlot, DEFAULT_CLOSING_HOUR};
pub use booking::BookingService;
