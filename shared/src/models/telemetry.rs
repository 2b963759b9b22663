//! Vehicle telemetry
//!
//! Entries come from a third-party fleet tracker whose fields are loosely
//! typed: coordinates arrive as strings, anything may be missing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Default map position when an entry has no usable coordinates
pub const DEFAULT_LATITUDE: f64 = 28.61;
pub const DEFAULT_LONGITUDE: f64 = 77.23;

/// Vehicle movement status as reported by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VehicleStatus {
    Running,
    #[default]
    Idle,
    Parked,
    #[serde(rename = "No Data")]
    NoData,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 4] = [Self::Running, Self::Idle, Self::Parked, Self::NoData];

    /// Marker color on the monitoring map
    pub const fn marker_color(&self) -> &'static str {
        match self {
            Self::Running => "#66E066",
            Self::Idle => "#FFB03F",
            Self::Parked => "#808080",
            Self::NoData => "#999",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Idle => "Idle",
            Self::Parked => "Parked",
            Self::NoData => "No Data",
        }
    }

    /// Status from tracker text; a status the map has no color for is
    /// shown as `NoData`
    fn parse_lenient(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
            .unwrap_or(Self::NoData)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracker entry as received
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVehicle {
    pub vehicle_number: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub status: Option<String>,
    pub speed: Option<Value>,
    pub ignition_status: Option<String>,
    pub location: Option<String>,
    pub distance: Option<Value>,
    pub updated_at: Option<String>,
}

/// Tracker response body: `{ "data": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelemetryResponse {
    pub data: Option<Vec<RawVehicle>>,
}

/// Normalized vehicle position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    /// Position in the tracker response
    pub id: String,
    pub number: String,
    pub lat: f64,
    pub lon: f64,
    pub status: VehicleStatus,
    pub speed: f64,
    pub ignition: bool,
    pub location: String,
    pub distance: f64,
    pub updated_at: String,
}

fn number_or(value: Option<&Value>, fallback: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    // 0 and NaN are treated as missing, as the tracker uses them for "no fix"
    parsed.filter(|v| *v != 0.0 && v.is_finite()).unwrap_or(fallback)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl Vehicle {
    /// Normalize one tracker entry; `index` becomes the vehicle id
    pub fn from_raw(index: usize, raw: RawVehicle, now: DateTime<Utc>) -> Self {
        Self {
            id: index.to_string(),
            number: non_empty(raw.vehicle_number).unwrap_or_else(|| "Unknown".to_string()),
            lat: number_or(raw.latitude.as_ref(), DEFAULT_LATITUDE),
            lon: number_or(raw.longitude.as_ref(), DEFAULT_LONGITUDE),
            // only a missing status means idle
            status: non_empty(raw.status)
                .as_deref()
                .map(VehicleStatus::parse_lenient)
                .unwrap_or_default(),
            speed: number_or(raw.speed.as_ref(), 0.0),
            ignition: raw.ignition_status.as_deref() == Some("ON"),
            location: non_empty(raw.location).unwrap_or_else(|| "Unknown Area".to_string()),
            distance: number_or(raw.distance.as_ref(), 0.0),
            updated_at: non_empty(raw.updated_at).unwrap_or_else(|| now.to_rfc3339()),
        }
    }
}

/// Vehicle counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub running: usize,
    pub idle: usize,
    pub parked: usize,
    pub no_data: usize,
}

impl FleetSummary {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        vehicles.iter().fold(Self::default(), |mut acc, v| {
            acc.total += 1;
            match v.status {
                VehicleStatus::Running => acc.running += 1,
                VehicleStatus::Idle => acc.idle += 1,
                VehicleStatus::Parked => acc.parked += 1,
                VehicleStatus::NoData => acc.no_data += 1,
            }
            acc
        })
    }

    pub fn count(&self, status: VehicleStatus) -> usize {
        match status {
            VehicleStatus::Running => self.running,
            VehicleStatus::Idle => self.idle,
            VehicleStatus::Parked => self.parked,
            VehicleStatus::NoData => self.no_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-14T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let vehicle = Vehicle::from_raw(3, RawVehicle::default(), now());
        assert_eq!(vehicle.id, "3");
        assert_eq!(vehicle.number, "Unknown");
        assert_eq!(vehicle.lat, DEFAULT_LATITUDE);
        assert_eq!(vehicle.lon, DEFAULT_LONGITUDE);
        assert_eq!(vehicle.status, VehicleStatus::Idle);
        assert!(!vehicle.ignition);
        assert_eq!(vehicle.location, "Unknown Area");
        assert_eq!(vehicle.updated_at, "2025-03-14T10:00:00+00:00");
    }

    #[test]
    fn test_tracker_entry_decodes() {
        let body = r#"{"data": [{
            "vehicleNumber": "TN01AB1234",
            "latitude": "13.0827",
            "longitude": "80.2707",
            "status": "Running",
            "speed": 42,
            "ignitionStatus": "ON",
            "location": "Anna Salai",
            "distance": "12.5",
            "updatedAt": "2025-03-14 09:58:00"
        }, {
            "vehicleNumber": "TN01AB9999",
            "latitude": "garbage",
            "status": "No Data",
            "ignitionStatus": "OFF"
        }]}"#;
        let response: TelemetryResponse = serde_json::from_str(body).unwrap();
        let vehicles: Vec<Vehicle> = response
            .data
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| Vehicle::from_raw(i, raw, now()))
            .collect();

        assert_eq!(vehicles[0].lat, 13.0827);
        assert_eq!(vehicles[0].speed, 42.0);
        assert_eq!(vehicles[0].distance, 12.5);
        assert!(vehicles[0].ignition);
        assert_eq!(vehicles[1].lat, DEFAULT_LATITUDE);
        assert_eq!(vehicles[1].status, VehicleStatus::NoData);
        assert!(!vehicles[1].ignition);

        let summary = FleetSummary::from_vehicles(&vehicles);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.count(VehicleStatus::Running), 1);
        assert_eq!(summary.no_data, 1);
    }

    #[test]
    fn test_unknown_status_is_not_idle() {
        let raw = |status: &str| RawVehicle {
            status: Some(status.to_string()),
            ..RawVehicle::default()
        };
        let stopped = Vehicle::from_raw(0, raw("Stopped"), now());
        assert_eq!(stopped.status, VehicleStatus::NoData);
        assert_eq!(stopped.status.marker_color(), "#999");

        assert_eq!(Vehicle::from_raw(1, raw("  "), now()).status, VehicleStatus::Idle);
        assert_eq!(Vehicle::from_raw(2, raw("parked"), now()).status, VehicleStatus::Parked);

        let vehicles = vec![stopped, Vehicle::from_raw(3, RawVehicle::default(), now())];
        let summary = FleetSummary::from_vehicles(&vehicles);
        assert_eq!(summary.idle, 1);
        assert_eq!(summary.no_data, 1);
    }

    #[test]
    fn test_marker_colors() {
        assert_eq!(VehicleStatus::Running.marker_color(), "#66E066");
        assert_eq!(VehicleStatus::NoData.marker_color(), "#999");
        assert_eq!(VehicleStatus::NoData.to_string(), "No Data");
    }
}
