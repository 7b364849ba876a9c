//! API DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::application::HourSlot;
use crate::domain::{Booking, ChargingPoint, Station, DURATION_CHOICES_MIN};

/// Standard API response envelope
///
/// On success: `{"success": true, "data": {...}}`,
/// on error: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// A charging station
#[derive(Debug, Serialize, ToSchema)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub points: Vec<ChargingPointDto>,
}

/// One bookable charging point at a station
#[derive(Debug, Serialize, ToSchema)]
pub struct ChargingPointDto {
    pub point_id: String,
    /// `AC` or `DC`
    pub point_type: String,
    /// Connector standard, e.g. `Type 2`, `CCS2`
    pub connector_type: String,
    pub power_kw: u32,
    /// Price per hour of charging
    pub price_per_hour: Decimal,
    /// `Available`, `Occupied`, `Maintenance` or `Unknown`;
    /// only `Available` points accept bookings
    pub status: String,
    pub supported_vehicles: Vec<String>,
}

impl From<ChargingPoint> for ChargingPointDto {
    fn from(p: ChargingPoint) -> Self {
        Self {
            point_id: p.point_id,
            point_type: p.point_type.as_str().to_string(),
            connector_type: p.connector_type,
            power_kw: p.power_kw,
            price_per_hour: p.price_per_hour,
            status: p.status.as_str().to_string(),
            supported_vehicles: p.supported_vehicles,
        }
    }
}

impl From<Station> for StationDto {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            latitude: s.latitude,
            longitude: s.longitude,
            points: s.points.into_iter().map(Into::into).collect(),
        }
    }
}

/// One hour of the availability grid
#[derive(Debug, Serialize, ToSchema)]
pub struct HourSlotDto {
    /// Start hour, 0-23
    pub hour: u32,
    /// 12-hour start label, e.g. `09:00 AM`
    pub label_12h: String,
    /// Covered by an existing reservation
    pub is_booked: bool,
    /// Offerable session lengths in minutes (subset of 60/120/180)
    pub available_durations: Vec<u32>,
}

impl From<HourSlot> for HourSlotDto {
    fn from(s: HourSlot) -> Self {
        Self {
            hour: s.hour,
            label_12h: s.label_12h,
            is_booked: s.is_booked,
            available_durations: s.available_durations,
        }
    }
}

/// Query parameters for the availability grid
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Booking day, `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Reference wall-clock override, 24-hour `HH:MM`.
    /// Defaults to the server's local time.
    pub at: Option<String>,
}

/// Query parameters for a slot quote
#[derive(Debug, Deserialize, IntoParams)]
pub struct QuoteQuery {
    /// Booking day, `YYYY-MM-DD`
    pub date: NaiveDate,
    /// 12-hour start label from the availability grid, e.g. `10:00 AM`
    pub start_time: String,
    /// Session length in minutes: 60, 120 or 180
    pub duration_minutes: u32,
    /// Reference wall-clock override, 24-hour `HH:MM`.
    /// Defaults to the server's local time.
    pub at: Option<String>,
}

/// Price and end time for a chosen slot
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteDto {
    /// 12-hour start label
    pub start_time: String,
    /// 12-hour end label; `12:00 AM` for sessions ending at midnight
    pub end_time: String,
    pub duration_minutes: u32,
    pub total_amount: Decimal,
}

/// Booking creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 64))]
    pub station_id: String,
    #[validate(length(min = 1, max = 64))]
    pub charging_point_id: String,
    /// Booking day, `YYYY-MM-DD`
    pub date: NaiveDate,
    /// 12-hour start label from the availability grid, e.g. `10:00 AM`
    #[validate(length(min = 1, max = 16))]
    pub start_time: String,
    /// Session length in minutes: 60, 120 or 180
    #[validate(custom(function = validate_duration_minutes))]
    pub duration_minutes: u32,
    /// Vehicle plate; spaces are stripped and letters uppercased
    #[validate(length(min = 2, max = 16))]
    pub vehicle_plate: String,
}

fn validate_duration_minutes(duration: u32) -> Result<(), validator::ValidationError> {
    if DURATION_CHOICES_MIN.contains(&duration) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("duration_choice");
        err.message = Some("duration must be 60, 120 or 180 minutes".into());
        Err(err)
    }
}

/// A confirmed booking
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: Uuid,
    pub station_id: String,
    pub charging_point_id: String,
    pub date: NaiveDate,
    /// 12-hour start label
    pub start_time: String,
    /// 12-hour end label; `12:00 AM` for sessions ending at midnight
    pub end_time: String,
    pub duration_minutes: u32,
    pub vehicle_plate: String,
    pub total_amount: Decimal,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        let end_time = b.end().label_12h();
        Self {
            id: b.id,
            station_id: b.station_id,
            charging_point_id: b.charging_point_id,
            date: b.date,
            start_time: b.start.label_12h(),
            end_time,
            duration_minutes: b.duration_minutes,
            vehicle_plate: b.vehicle_plate,
            total_amount: b.total_amount,
        }
    }
}

/// Query parameters for listing bookings
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingsQuery {
    pub charging_point_id: String,
    /// Booking day, `YYYY-MM-DD`
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_validation() {
        let req = CreateBookingRequest {
            station_id: "ST-01".to_string(),
            charging_point_id: "CP-01".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            start_time: "10:00 AM".to_string(),
            duration_minutes: 90,
            vehicle_plate: "KA01AB1234".to_string(),
        };
        assert!(req.validate().is_err());

        let req = CreateBookingRequest {
            duration_minutes: 120,
            ..req
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_booking_dto_labels() {
        use crate::domain::TimeOfDay;
        use chrono::Utc;

        let booking = Booking {
            id: Uuid::new_v4(),
            station_id: "ST-01".to_string(),
            charging_point_id: "CP-01".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            start: TimeOfDay::parse_label("11:00 PM").unwrap(),
            duration_minutes: 60,
            vehicle_plate: "KA01AB1234".to_string(),
            total_amount: Decimal::new(1800, 2),
            created_at: Utc::now(),
        };

        let dto = BookingDto::from(booking);
        assert_eq!(dto.start_time, "11:00 PM");
        assert_eq!(dto.end_time, "12:00 AM");
    }
}
