//! Storage trait definitions

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Booking, ChargingPoint, DomainResult, Reservation, Station};

/// Storage trait for persistence operations
#[async_trait]
pub trait Storage: Send + Sync {
    // Station operations
    async fn save_station(&self, station: Station) -> DomainResult<()>;
    async fn get_station(&self, id: &str) -> DomainResult<Option<Station>>;
    async fn list_stations(&self) -> DomainResult<Vec<Station>>;
    async fn get_point(
        &self,
        station_id: &str,
        point_id: &str,
    ) -> DomainResult<Option<ChargingPoint>>;

    // Booking operations
    async fn save_booking(&self, booking: Booking) -> DomainResult<Booking>;
    async fn get_booking(&self, id: Uuid) -> DomainResult<Option<Booking>>;
    async fn delete_booking(&self, id: Uuid) -> DomainResult<()>;
    async fn list_bookings_for_point(
        &self,
        charging_point_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<Booking>>;

    // Reservation feed: confirmed bookings projected to the engine's input shape
    async fn reservations_for(
        &self,
        charging_point_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;
}
