use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily log entry from a grow system.
///
/// Every measurement is optional: the logging form lets growers record
/// whatever they measured that day, and each calculation degrades gracefully
/// when a field it needs is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub timestamp: DateTime<Utc>,
    pub temp_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub ph: Option<f64>,
    pub ec_ms_cm: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub dissolved_oxygen_mg_l: Option<f64>,
    pub light_hours: Option<f64>,
    pub ventilation_hours: Option<f64>,
}

impl SensorReading {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            temp_c: None,
            humidity_pct: None,
            ph: None,
            ec_ms_cm: None,
            water_temp_c: None,
            dissolved_oxygen_mg_l: None,
            light_hours: None,
            ventilation_hours: None,
        }
    }

    /// Air temperature and humidity together, when both were logged.
    pub fn air_pair(&self) -> Option<(f64, f64)> {
        match (self.temp_c, self.humidity_pct) {
            (Some(t), Some(h)) => Some((t, h)),
            _ => None,
        }
    }

    pub fn has_root_zone_data(&self) -> bool {
        self.dissolved_oxygen_mg_l.is_some()
            || self.water_temp_c.is_some()
            || self.ec_ms_cm.is_some()
    }
}
