//! # EV Booking Service
//!
//! Slot booking backend for EV charging stations: station discovery,
//! per-point hour-grid availability and booking confirmation.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities and types (times, stations,
//!   reservations, bookings)
//! - **application**: Business logic — the pure slot availability engine
//!   and the booking service
//! - **infrastructure**: External concerns (storage behind a trait seam)
//! - **api**: REST API with Swagger documentation
//! - **support**: Graceful shutdown coordination

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export the core engine and service for easy access
pub use application::{availability_grid, BookingService, HourSlot, DEFAULT_CLOSING_HOUR};

// Re-export API router and storage types
pub use api::create_api_router;
pub use infrastructure::{InMemoryStorage, Storage};
