//! Data records mirroring the Honeycomb JSON schema.
//!
//! The vendor does not guarantee field presence, so everything except the
//! envelope `ok` flags is optional. An absent field stays `None` and is
//! omitted again on serialization; unknown vendor fields are dropped on
//! decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One SWARM vibration sensor as reported by `list_sensors`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastseen: Option<DateTime<Utc>>,
    /// Connection medium, e.g. "GSM" or "WiFi".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_using: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measuring_point: Option<MeasuringPoint>,
}

/// Geographic position of a sensor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Settings profile of one configured physical sensor point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasuringPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_percentage: Option<i64>,
    /// Vibration category, e.g. "CAT3".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_save_level: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_led: Option<bool>,
    /// Measurement guideline, e.g. "DIN4150_3_80Hz".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measuring_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_post_trigger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_pre_trigger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_save_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibration_type: Option<String>,
}

/// One vibration-event sample from `get_peak_records`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeakRecord {
    /// Milliseconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measuring_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibration_type: Option<String>,
}

/// Envelope for a successful `list_sensors` response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Vec<Sensor>>,
}

/// Envelope for a 400/500 error response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Envelope for a successful `get_peak_records` response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeakRecordsResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub samples: Vec<PeakRecord>,
}
