use super::{FactorContext, HealthFactor};
use crate::logic::root_health::{root_health, RootStatus};
use crate::models::{FactorKind, Finding, SensorReading, Severity};

/// Root zone factor - reservoir oxygen, temperature, and EC
///
/// Systems without a reservoir (trays) skip this factor entirely, and
/// dissolved oxygen is only held against systems that rely on active
/// aeration; a Kratky jar is supposed to read low once the air gap forms.
pub struct RootZoneFactor;

impl HealthFactor for RootZoneFactor {
    fn id(&self) -> &'static str {
        "root_zone"
    }

    fn name(&self) -> &'static str {
        "Root Zone"
    }

    fn evaluate(&self, reading: &SensorReading, ctx: &FactorContext) -> Option<Finding> {
        if !ctx.system.has_reservoir() || !reading.has_root_zone_data() {
            return None;
        }

        let oxygen = if ctx.system.relies_on_dissolved_oxygen() {
            reading.dissolved_oxygen_mg_l
        } else {
            None
        };

        let health = root_health(oxygen, reading.water_temp_c, reading.ec_ms_cm);
        let summary = health.issues.first().copied().unwrap_or("root zone degraded");

        match health.status {
            RootStatus::Poor => Some(Finding::new(
                FactorKind::RootZone,
                Severity::Critical,
                25.0,
                format!("Root zone poor ({:.0}/100): {summary}", health.score),
            )),
            RootStatus::Fair => Some(Finding::new(
                FactorKind::RootZone,
                Severity::Warning,
                10.0,
                format!("Root zone fair ({:.0}/100): {summary}", health.score),
            )),
            RootStatus::Healthy => None,
        }
    }
}
