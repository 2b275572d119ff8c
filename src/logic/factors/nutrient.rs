use super::{FactorContext, HealthFactor};
use crate::logic::nutrient::nutrient_lockout;
use crate::models::{FactorKind, Finding, SensorReading, Severity};

/// Nutrient factor - pH lockout and solution strength
///
/// A pH in a lockout bucket starves the crop no matter what is in the
/// reservoir, so it outranks everything else this factor reports. Otherwise
/// pH or EC drifting outside the crop's range is a warning.
pub struct NutrientFactor;

impl HealthFactor for NutrientFactor {
    fn id(&self) -> &'static str {
        "nutrient"
    }

    fn name(&self) -> &'static str {
        "Nutrient"
    }

    fn evaluate(&self, reading: &SensorReading, ctx: &FactorContext) -> Option<Finding> {
        if let Some(blocked) = nutrient_lockout(reading.ph) {
            return Some(Finding::new(
                FactorKind::Nutrient,
                Severity::Critical,
                30.0,
                format!(
                    "pH lockout risk at {:.1}: {} unavailable",
                    reading.ph.unwrap_or_default(),
                    blocked.join(", ")
                ),
            ));
        }

        if let Some(ph) = reading.ph.filter(|v| v.is_finite()) {
            if !ctx.profile.ph.contains(ph) {
                return Some(Finding::new(
                    FactorKind::Nutrient,
                    Severity::Warning,
                    15.0,
                    format!(
                        "pH {:.1} outside {} range {:.1}-{:.1}",
                        ph, ctx.profile.name, ctx.profile.ph.min, ctx.profile.ph.max
                    ),
                ));
            }
        }

        if let Some(ec) = reading.ec_ms_cm.filter(|v| v.is_finite()) {
            if !ctx.profile.ec_ms_cm.contains(ec) {
                let direction = if ec < ctx.profile.ec_ms_cm.min {
                    "weak"
                } else {
                    "strong"
                };
                return Some(Finding::new(
                    FactorKind::Nutrient,
                    Severity::Warning,
                    10.0,
                    format!(
                        "EC {:.1} mS/cm too {} for {} (target {:.1}-{:.1})",
                        ec,
                        direction,
                        ctx.profile.name,
                        ctx.profile.ec_ms_cm.min,
                        ctx.profile.ec_ms_cm.max
                    ),
                ));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropProfile, SystemType};
    use chrono::Utc;

    fn ctx() -> FactorContext {
        FactorContext {
            profile: CropProfile::lookup("lettuce").unwrap().clone(),
            system: SystemType::Dwc,
            batch_age_days: 10,
        }
    }

    fn reading(ph: Option<f64>, ec: Option<f64>) -> SensorReading {
        let mut r = SensorReading::new(Utc::now());
        r.ph = ph;
        r.ec_ms_cm = ec;
        r
    }

    #[test]
    fn lockout_outranks_range_warnings() {
        let finding = NutrientFactor
            .evaluate(&reading(Some(7.2), Some(5.0)), &ctx())
            .unwrap();
        assert_eq!(finding.severity, Severity::Critical);
        assert!(finding.message.contains("lockout"));
    }

    #[test]
    fn off_range_ph_without_lockout_warns() {
        // 6.4: no lockout bucket, but above lettuce's 6.2 ceiling
        let finding = NutrientFactor.evaluate(&reading(Some(6.4), None), &ctx()).unwrap();
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.contains("pH"));
    }

    #[test]
    fn weak_solution_warns() {
        let finding = NutrientFactor
            .evaluate(&reading(Some(6.0), Some(0.4)), &ctx())
            .unwrap();
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.contains("weak"));
    }

    #[test]
    fn dialed_in_reservoir_is_clean() {
        assert!(NutrientFactor
            .evaluate(&reading(Some(5.9), Some(1.2)), &ctx())
            .is_none());
    }

    #[test]
    fn missing_fields_abstain() {
        assert!(NutrientFactor.evaluate(&reading(None, None), &ctx()).is_none());
    }
}
