use crate::error::{GrowOpsError, Result};
use crate::models::SensorReading;
use std::path::Path;

/// Load daily log readings from a JSON file (an array of readings),
/// sorted oldest first.
pub fn load_readings(path: &Path) -> Result<Vec<SensorReading>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        GrowOpsError::NotFound(format!("log file {}: {e}", path.display()))
    })?;
    let mut readings: Vec<SensorReading> = serde_json::from_str(&raw)?;
    readings.sort_by_key(|r| r.timestamp);
    tracing::debug!("loaded {} readings from {}", readings.len(), path.display());
    Ok(readings)
}

/// Extract one numeric field across the readings, oldest first, skipping
/// entries where it was not logged. Field names match the log form.
pub fn series(readings: &[SensorReading], field: &str) -> Result<Vec<f64>> {
    let pick: fn(&SensorReading) -> Option<f64> = match field {
        "temp" | "temperature" => |r| r.temp_c,
        "humidity" => |r| r.humidity_pct,
        "ph" => |r| r.ph,
        "ec" => |r| r.ec_ms_cm,
        "water_temp" => |r| r.water_temp_c,
        "dissolved_oxygen" | "do" => |r| r.dissolved_oxygen_mg_l,
        "light_hours" => |r| r.light_hours,
        "ventilation_hours" => |r| r.ventilation_hours,
        other => {
            return Err(GrowOpsError::InvalidData(format!(
                "unknown field '{other}' (expected temp, humidity, ph, ec, water_temp, \
                 dissolved_oxygen, light_hours, or ventilation_hours)"
            )))
        }
    };

    Ok(readings.iter().filter_map(pick).collect())
}
