//! In-memory storage implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::Storage;
use crate::domain::{
    Booking, ChargingPoint, DomainError, DomainResult, PointStatus, PointType, Reservation,
    Station,
};

/// In-memory storage for development and testing
pub struct InMemoryStorage {
    stations: DashMap<String, Station>,
    bookings: DashMap<Uuid, Booking>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        let storage = Self {
            stations: DashMap::new(),
            bookings: DashMap::new(),
        };

        // Seed demo stations so the API is usable out of the box
        for station in demo_stations() {
            storage.stations.insert(station.id.clone(), station);
        }

        storage
    }

    fn booked_hours(booking: &Booking) -> std::ops::Range<u32> {
        let start = booking.start.hour();
        start..(start + booking.duration_minutes / 60).min(24)
    }

    fn overlaps(a: &Booking, b: &Booking) -> bool {
        let (ra, rb) = (Self::booked_hours(a), Self::booked_hours(b));
        ra.start < rb.end && rb.start < ra.end
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_station(&self, station: Station) -> DomainResult<()> {
        if self.stations.contains_key(&station.id) {
            return Err(DomainError::Conflict(format!(
                "station already exists: {}",
                station.id
            )));
        }
        self.stations.insert(station.id.clone(), station);
        Ok(())
    }

    async fn get_station(&self, id: &str) -> DomainResult<Option<Station>> {
        Ok(self.stations.get(id).map(|s| s.clone()))
    }

    async fn list_stations(&self) -> DomainResult<Vec<Station>> {
        let mut stations: Vec<Station> =
            self.stations.iter().map(|e| e.value().clone()).collect();
        stations.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(stations)
    }

    async fn get_point(
        &self,
        station_id: &str,
        point_id: &str,
    ) -> DomainResult<Option<ChargingPoint>> {
        Ok(self
            .stations
            .get(station_id)
            .and_then(|s| s.point(point_id).cloned()))
    }

    async fn save_booking(&self, booking: Booking) -> DomainResult<Booking> {
        // Final conflict arbitration: at most one booking per point per
        // time range, regardless of what the client computed.
        let conflict = self.bookings.iter().any(|existing| {
            existing.charging_point_id == booking.charging_point_id
                && existing.date == booking.date
                && Self::overlaps(existing.value(), &booking)
        });
        if conflict {
            return Err(DomainError::Conflict(format!(
                "point {} already booked at {} on {}",
                booking.charging_point_id, booking.start, booking.date
            )));
        }

        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn get_booking(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|b| b.clone()))
    }

    async fn delete_booking(&self, id: Uuid) -> DomainResult<()> {
        self.bookings
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("booking", "id", id.to_string()))?;
        Ok(())
    }

    async fn list_bookings_for_point(
        &self,
        charging_point_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.charging_point_id == charging_point_id && b.date == date)
            .map(|b| b.value().clone())
            .collect();
        bookings.sort_by_key(|b| b.start);
        Ok(bookings)
    }

    async fn reservations_for(
        &self,
        charging_point_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        let bookings = self.list_bookings_for_point(charging_point_id, date).await?;
        Ok(bookings
            .into_iter()
            .map(|b| Reservation::new(b.charging_point_id.clone(), b.start, b.end()))
            .collect())
    }
}

fn demo_stations() -> Vec<Station> {
    let point = |station_id: &str,
                 point_id: &str,
                 point_type: PointType,
                 connector: &str,
                 power_kw: u32,
                 price: Decimal,
                 status: PointStatus| ChargingPoint {
        point_id: point_id.to_string(),
        station_id: station_id.to_string(),
        point_type,
        connector_type: connector.to_string(),
        power_kw,
        price_per_hour: price,
        status,
        supported_vehicles: vec!["Car".to_string(), "Three Wheeler".to_string()],
    };

    vec![
        Station {
            id: "ST-01".to_string(),
            name: "Green Park Charging Hub".to_string(),
            address: "12 Green Park Road".to_string(),
            latitude: 12.9716,
            longitude: 77.5946,
            points: vec![
                point(
                    "ST-01",
                    "CP-01",
                    PointType::Ac,
                    "Type 2",
                    22,
                    Decimal::from(18),
                    PointStatus::Available,
                ),
                point(
                    "ST-01",
                    "CP-02",
                    PointType::Dc,
                    "CCS2",
                    60,
                    Decimal::new(2250, 2),
                    PointStatus::Available,
                ),
                point(
                    "ST-01",
                    "CP-03",
                    PointType::Ac,
                    "Type 2",
                    11,
                    Decimal::from(15),
                    PointStatus::Maintenance,
                ),
            ],
        },
        Station {
            id: "ST-02".to_string(),
            name: "Riverside EV Plaza".to_string(),
            address: "4 Riverside Avenue".to_string(),
            latitude: 13.0827,
            longitude: 80.2707,
            points: vec![
                point(
                    "ST-02",
                    "CP-01",
                    PointType::Dc,
                    "CHAdeMO",
                    50,
                    Decimal::from(24),
                    PointStatus::Available,
                ),
                point(
                    "ST-02",
                    "CP-02",
                    PointType::Ac,
                    "Type 2",
                    7,
                    Decimal::new(1250, 2),
                    PointStatus::Occupied,
                ),
            ],
        },
    ]
}
