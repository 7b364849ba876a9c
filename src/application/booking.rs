//! Booking service
//!
//! Orchestrates slot computation and booking confirmation over the storage
//! seam. The availability engine itself stays pure; this service resolves
//! the charging point, loads the day's reservations and re-checks the grid
//! at confirmation time so a slot taken by a concurrent client fails the
//! attempt instead of silently double-booking.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use metrics::counter;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::availability::{availability_grid, HourSlot};
use crate::domain::{
    normalize_vehicle_plate, quote, validate_duration_choice, Booking, BookingQuote,
    ChargingPoint, DomainError, DomainResult, NewBooking, TimeOfDay,
};
use crate::infrastructure::Storage;

/// Service for slot availability and booking operations
pub struct BookingService {
    storage: Arc<dyn Storage>,
    closing_hour: u32,
}

impl BookingService {
    pub fn new(storage: Arc<dyn Storage>, closing_hour: u32) -> Self {
        Self {
            storage,
            closing_hour,
        }
    }

    /// Compute the bookable hour grid for a point on a given day.
    ///
    /// The point must exist and be in `Available` status. An empty grid
    /// (nothing left today) is a normal result.
    pub async fn availability(
        &self,
        station_id: &str,
        point_id: &str,
        date: NaiveDate,
        reference: TimeOfDay,
    ) -> DomainResult<Vec<HourSlot>> {
        let point = self.resolve_bookable_point(station_id, point_id).await?;

        let reservations = self.storage.reservations_for(&point.point_id, date).await?;
        let grid = availability_grid(&reservations, reference, self.closing_hour);

        counter!("booking_availability_grids_total").increment(1);
        debug!(
            station_id,
            point_id,
            %date,
            reservations = reservations.len(),
            slots = grid.len(),
            "availability grid computed"
        );

        Ok(grid)
    }

    /// Derive end time and total price for a chosen (start, duration) pair.
    ///
    /// The pair must be one the current grid actually offers: a booked
    /// hour, or a duration the grid withholds (later reservation, evening
    /// cap), is rejected rather than priced.
    pub async fn quote(
        &self,
        station_id: &str,
        point_id: &str,
        date: NaiveDate,
        start: TimeOfDay,
        duration_minutes: u32,
        reference: TimeOfDay,
    ) -> DomainResult<BookingQuote> {
        validate_duration_choice(duration_minutes)?;
        if start.minute() != 0 {
            return Err(DomainError::Validation(format!(
                "sessions start on the hour, got {}",
                start.label_12h()
            )));
        }

        let point = self.resolve_bookable_point(station_id, point_id).await?;

        let grid = self
            .availability(station_id, point_id, date, reference)
            .await?;
        self.check_slot_offerable(&grid, start.hour(), duration_minutes, reference)?;

        Ok(quote(point.price_per_hour, start, duration_minutes))
    }

    /// Confirm a booking.
    ///
    /// Re-runs the availability grid against the submission-time clock, so
    /// a slot taken between fetch and confirmation fails with
    /// [`DomainError::Conflict`]; the caller refetches and re-selects.
    pub async fn create_booking(
        &self,
        request: NewBooking,
        reference: TimeOfDay,
    ) -> DomainResult<Booking> {
        validate_duration_choice(request.duration_minutes)?;
        let vehicle_plate = normalize_vehicle_plate(&request.vehicle_plate)?;

        if request.start.minute() != 0 {
            return Err(DomainError::Validation(format!(
                "sessions start on the hour, got {}",
                request.start.label_12h()
            )));
        }

        let point = self
            .resolve_bookable_point(&request.station_id, &request.charging_point_id)
            .await?;

        let grid = self
            .availability(
                &request.station_id,
                &request.charging_point_id,
                request.date,
                reference,
            )
            .await?;
        self.check_slot_offerable(&grid, request.start.hour(), request.duration_minutes, reference)?;

        let price = quote(point.price_per_hour, request.start, request.duration_minutes);
        let booking = Booking {
            id: Uuid::new_v4(),
            station_id: request.station_id,
            charging_point_id: request.charging_point_id,
            date: request.date,
            start: request.start,
            duration_minutes: request.duration_minutes,
            vehicle_plate,
            total_amount: price.total_amount,
            created_at: Utc::now(),
        };

        // The store is the final arbiter; a concurrent writer that slipped
        // past the grid re-check is rejected here.
        let booking = self.storage.save_booking(booking).await.inspect_err(|e| {
            if matches!(e, DomainError::Conflict(_)) {
                counter!("booking_conflicts_total").increment(1);
                warn!(error = %e, "booking rejected at confirmation");
            }
        })?;

        counter!("bookings_created_total").increment(1);
        info!(
            booking_id = %booking.id,
            point_id = %booking.charging_point_id,
            date = %booking.date,
            start = %booking.start,
            duration_minutes = booking.duration_minutes,
            total = %booking.total_amount,
            "booking confirmed"
        );

        Ok(booking)
    }

    /// List bookings for a charging point on a day.
    pub async fn bookings_for_point(
        &self,
        charging_point_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<Booking>> {
        self.storage.list_bookings_for_point(charging_point_id, date).await
    }

    /// Cancel a booking, freeing its hours for subsequent grids.
    pub async fn cancel_booking(&self, id: Uuid) -> DomainResult<()> {
        self.storage.delete_booking(id).await?;
        info!(booking_id = %id, "booking cancelled");
        Ok(())
    }

    /// List all stations.
    pub async fn list_stations(&self) -> DomainResult<Vec<crate::domain::Station>> {
        self.storage.list_stations().await
    }

    /// Get one station by ID.
    pub async fn get_station(&self, id: &str) -> DomainResult<crate::domain::Station> {
        self.storage
            .get_station(id)
            .await?
            .ok_or_else(|| DomainError::not_found("station", "id", id))
    }

    async fn resolve_bookable_point(
        &self,
        station_id: &str,
        point_id: &str,
    ) -> DomainResult<ChargingPoint> {
        let point = self
            .storage
            .get_point(station_id, point_id)
            .await?
            .ok_or_else(|| DomainError::not_found("charging point", "point_id", point_id))?;

        if !point.is_bookable() {
            return Err(DomainError::PointUnavailable(point.point_id));
        }

        Ok(point)
    }

    fn check_slot_offerable(
        &self,
        grid: &[HourSlot],
        start_hour: u32,
        duration_minutes: u32,
        reference: TimeOfDay,
    ) -> DomainResult<()> {
        // The grid always starts at the reference-derived hour, so a miss
        // means the requested hour lies before it (or past closing).
        let slot = grid.iter().find(|s| s.hour == start_hour).ok_or_else(|| {
            DomainError::Validation(format!(
                "start hour {} is not offerable from reference time {}",
                start_hour,
                reference.hhmm()
            ))
        })?;

        if slot.is_booked {
            return Err(DomainError::Conflict(format!(
                "hour {} was booked by another client",
                start_hour
            )));
        }
        if !slot.available_durations.contains(&duration_minutes) {
            return Err(DomainError::Conflict(format!(
                "a {} minute session no longer fits at hour {}",
                duration_minutes, start_hour
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::availability::DEFAULT_CLOSING_HOUR;
    use crate::infrastructure::InMemoryStorage;
    use rust_decimal::Decimal;

    fn service() -> BookingService {
        BookingService::new(Arc::new(InMemoryStorage::new()), DEFAULT_CLOSING_HOUR)
    }

    fn at(label: &str) -> TimeOfDay {
        TimeOfDay::parse_label(label).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn new_booking(start: &str, duration: u32) -> NewBooking {
        NewBooking {
            station_id: "ST-01".to_string(),
            charging_point_id: "CP-01".to_string(),
            date: date(),
            start: at(start),
            duration_minutes: duration,
            vehicle_plate: "ka 01 ab 1234".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_booking_happy_path() {
        let service = service();
        let booking = service
            .create_booking(new_booking("10:00 AM", 120), at("09:00 AM"))
            .await
            .unwrap();

        assert_eq!(booking.vehicle_plate, "KA01AB1234");
        assert_eq!(booking.end().label_12h(), "12:00 PM");
        // Seeded demo point CP-01 charges 18.00/h
        assert_eq!(booking.total_amount, Decimal::new(3600, 2));
    }

    #[tokio::test]
    async fn test_booked_hours_disappear_from_the_grid() {
        let service = service();
        service
            .create_booking(new_booking("10:00 AM", 120), at("09:00 AM"))
            .await
            .unwrap();

        let grid = service
            .availability("ST-01", "CP-01", date(), at("09:15 AM"))
            .await
            .unwrap();

        let nine = grid.iter().find(|s| s.hour == 9).unwrap();
        assert_eq!(nine.available_durations, vec![60]);
        assert!(grid.iter().find(|s| s.hour == 10).unwrap().is_booked);
        assert!(grid.iter().find(|s| s.hour == 11).unwrap().is_booked);
    }

    #[tokio::test]
    async fn test_conflicting_booking_fails_the_attempt() {
        let service = service();
        service
            .create_booking(new_booking("02:00 PM", 60), at("09:00 AM"))
            .await
            .unwrap();

        let err = service
            .create_booking(new_booking("02:00 PM", 60), at("09:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_duration_running_into_reservation_conflicts() {
        let service = service();
        service
            .create_booking(new_booking("03:00 PM", 60), at("09:00 AM"))
            .await
            .unwrap();

        // 14:00 for three hours would cover the 15:00 booking
        let err = service
            .create_booking(new_booking("02:00 PM", 180), at("09:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unknown_point_is_not_found() {
        let service = service();
        let err = service
            .availability("ST-01", "CP-99", date(), at("09:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_maintenance_point_is_rejected() {
        let service = service();
        // Seeded CP-03 is under maintenance
        let err = service
            .availability("ST-01", "CP-03", date(), at("09:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PointUnavailable(_)));
    }

    #[tokio::test]
    async fn test_cancel_frees_the_slot() {
        let service = service();
        let booking = service
            .create_booking(new_booking("04:00 PM", 60), at("09:00 AM"))
            .await
            .unwrap();

        service.cancel_booking(booking.id).await.unwrap();

        let grid = service
            .availability("ST-01", "CP-01", date(), at("09:00 AM"))
            .await
            .unwrap();
        assert!(!grid.iter().find(|s| s.hour == 16).unwrap().is_booked);
    }

    #[tokio::test]
    async fn test_off_hour_start_is_rejected() {
        let service = service();
        let err = service
            .create_booking(new_booking("10:30 AM", 60), at("09:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_quote_for_evening_slot() {
        let service = service();
        let q = service
            .quote("ST-01", "CP-01", date(), at("11:00 PM"), 60, at("09:00 PM"))
            .await
            .unwrap();
        assert_eq!(q.end_time.label_12h(), "12:00 AM");
        assert_eq!(q.total_amount, Decimal::new(1800, 2));
    }

    #[tokio::test]
    async fn test_quote_rejects_booked_slot() {
        let service = service();
        service
            .create_booking(new_booking("10:00 AM", 120), at("09:00 AM"))
            .await
            .unwrap();

        let err = service
            .quote("ST-01", "CP-01", date(), at("10:00 AM"), 60, at("09:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_quote_rejects_capped_evening_duration() {
        let service = service();
        // The 23:00 cap allows only 60 minutes even on a free day
        let err = service
            .quote("ST-01", "CP-01", date(), at("11:00 PM"), 180, at("09:00 PM"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_stale_start_hour_names_the_reference_time() {
        let service = service();
        // Hour 8 lies before the 09:00 reference, even for a future date
        let err = service
            .create_booking(new_booking("08:00 AM", 60), at("09:00 AM"))
            .await
            .unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("reference time 09:00"), "message was: {}", msg)
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
