//! Output formatting: plain-text tables for sensors and peak records.

use chrono::DateTime;
use omnidots_lib::{PeakRecord, Sensor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    Plain,
    /// JSON (pretty-printed)
    #[default]
    Json,
}

/// Render sensors as a fixed-width table. Absent fields show as "-".
pub fn sensors_plain(sensors: &[Sensor]) -> String {
    if sensors.is_empty() {
        return "<no sensors>".to_string();
    }
    let mut out = String::new();
    out.push_str(&row(&[
        "NAME",
        "LASTSEEN",
        "CONNECTED",
        "LOCATION",
        "MEASURING POINT",
    ]));
    for sensor in sensors {
        let lastseen = sensor
            .lastseen
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string());
        let location = sensor.location.as_ref().and_then(|loc| {
            match (loc.latitude, loc.longitude) {
                (Some(lat), Some(lon)) => Some(format!("{},{}", lat, lon)),
                _ => None,
            }
        });
        let measuring_point = sensor.measuring_point.as_ref().map(|mp| {
            match (&mp.name, mp.id) {
                (Some(name), Some(id)) => format!("{} (#{})", name, id),
                (Some(name), None) => name.clone(),
                (None, Some(id)) => format!("#{}", id),
                (None, None) => "-".to_string(),
            }
        });
        out.push_str(&row(&[
            sensor.name.as_deref().unwrap_or("-"),
            lastseen.as_deref().unwrap_or("-"),
            sensor.connected_using.as_deref().unwrap_or("-"),
            location.as_deref().unwrap_or("-"),
            measuring_point.as_deref().unwrap_or("-"),
        ]));
    }
    out
}

/// Render peak records as a fixed-width table, timestamps in UTC.
pub fn peak_records_plain(samples: &[PeakRecord]) -> String {
    if samples.is_empty() {
        return "<no peak records>".to_string();
    }
    let mut out = String::new();
    out.push_str(&row(&[
        "TIMESTAMP",
        "CATEGORY",
        "GUIDELINE",
        "MEASURING",
        "VIBRATION",
    ]));
    for sample in samples {
        let timestamp = sample.timestamp.map(|ms| {
            DateTime::from_timestamp_millis(ms)
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| ms.to_string())
        });
        out.push_str(&row(&[
            timestamp.as_deref().unwrap_or("-"),
            sample.category.as_deref().unwrap_or("-"),
            sample.guide_line.as_deref().unwrap_or("-"),
            sample.measuring_type.as_deref().unwrap_or("-"),
            sample.vibration_type.as_deref().unwrap_or("-"),
        ]));
    }
    out
}

fn row(cells: &[&str]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<19}", cell));
    }
    format!("{}\n", line.trim_end())
}
