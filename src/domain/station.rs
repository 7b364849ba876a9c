//! Station and charging point entities

use rust_decimal::Decimal;

/// Charging point status as reported by the station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointStatus {
    /// Point is free and may be booked
    Available,
    /// A vehicle is currently charging
    Occupied,
    /// Point is under maintenance
    Maintenance,
    /// Any other backend-reported state
    Unknown,
}

impl PointStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
            Self::Unknown => "Unknown",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Available" => Self::Available,
            "Occupied" => Self::Occupied,
            "Maintenance" => Self::Maintenance,
            _ => Self::Unknown,
        }
    }
}

/// Current type delivered by a charging point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    Ac,
    Dc,
}

impl PointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Dc => "DC",
        }
    }
}

/// One physical connector/bay at a station, individually bookable
#[derive(Debug, Clone)]
pub struct ChargingPoint {
    /// Point ID, unique within the station (e.g. "CP-01")
    pub point_id: String,
    /// Owning station ID
    pub station_id: String,
    /// AC or DC
    pub point_type: PointType,
    /// Connector standard (e.g. "CCS2", "Type 2")
    pub connector_type: String,
    /// Rated power in kW
    pub power_kw: u32,
    /// Price per hour of charging, in the station's currency
    pub price_per_hour: Decimal,
    /// Current status; only `Available` points accept bookings
    pub status: PointStatus,
    /// Vehicle categories the bay can accommodate
    pub supported_vehicles: Vec<String>,
}

impl ChargingPoint {
    pub fn is_bookable(&self) -> bool {
        self.status == PointStatus::Available
    }
}

/// A charging station with one or more points
#[derive(Debug, Clone)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub points: Vec<ChargingPoint>,
}

impl Station {
    pub fn point(&self, point_id: &str) -> Option<&ChargingPoint> {
        self.points.iter().find(|p| p.point_id == point_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_falls_back_to_unknown() {
        assert_eq!(PointStatus::parse("Available"), PointStatus::Available);
        assert_eq!(PointStatus::parse("Occupied"), PointStatus::Occupied);
        assert_eq!(PointStatus::parse("OutOfOrder"), PointStatus::Unknown);
    }

    #[test]
    fn test_only_available_points_are_bookable() {
        let mut point = ChargingPoint {
            point_id: "CP-01".to_string(),
            station_id: "ST-01".to_string(),
            point_type: PointType::Ac,
            connector_type: "Type 2".to_string(),
            power_kw: 22,
            price_per_hour: Decimal::from(18),
            status: PointStatus::Available,
            supported_vehicles: vec!["Car".to_string()],
        };
        assert!(point.is_bookable());

        point.status = PointStatus::Maintenance;
        assert!(!point.is_bookable());
    }
}
