use super::{FactorContext, HealthFactor};
use crate::models::{FactorKind, Finding, SensorReading, Severity, SystemType};

/// How many days after sowing a microgreens tray stays under blackout.
const TRAY_BLACKOUT_DAYS: i64 = 3;

/// Light factor - daily light hours against what the batch needs at its age
///
/// Microgreens trays inside the blackout window need no light at all; a
/// young batch gets a gentler minimum than an established one.
pub struct LightFactor;

impl LightFactor {
    fn required_hours(ctx: &FactorContext) -> Option<f64> {
        if ctx.system == SystemType::MicrogreensTray && ctx.batch_age_days <= TRAY_BLACKOUT_DAYS {
            return None;
        }
        // Seedlings need less than the crop's full photoperiod
        if ctx.batch_age_days < 7 {
            Some((ctx.profile.light_hours_min - 2.0).max(8.0))
        } else {
            Some(ctx.profile.light_hours_min)
        }
    }
}

impl HealthFactor for LightFactor {
    fn id(&self) -> &'static str {
        "light"
    }

    fn name(&self) -> &'static str {
        "Light"
    }

    fn evaluate(&self, reading: &SensorReading, ctx: &FactorContext) -> Option<Finding> {
        let required = Self::required_hours(ctx)?;
        let hours = reading.light_hours.filter(|v| v.is_finite())?;

        let deficit = required - hours;
        if deficit > 6.0 {
            Some(Finding::new(
                FactorKind::Light,
                Severity::Warning,
                20.0,
                format!(
                    "Only {hours:.1}h of light logged; {} needs {required:.0}h at this age",
                    ctx.profile.name
                ),
            ))
        } else if deficit > 2.0 {
            Some(Finding::new(
                FactorKind::Light,
                Severity::Advisory,
                10.0,
                format!("Light at {hours:.1}h is a little short of the {required:.0}h target"),
            ))
        } else {
            None
        }
    }
}
