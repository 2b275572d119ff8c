use super::{FactorContext, HealthFactor};
use crate::logic::vpd::{calculate_vpd, vpd_status};
use crate::models::{FactorKind, Finding, SensorReading, Severity};

/// Air factor - scores vapor pressure deficit against the crop's range
///
/// VPD extremes (mold-risk humidity or transpiration-stress dryness) are
/// critical; a readable VPD merely outside the crop's preferred range is a
/// warning. Missing temperature or humidity degrades to a small advisory.
pub struct AirFactor;

impl HealthFactor for AirFactor {
    fn id(&self) -> &'static str {
        "air_vpd"
    }

    fn name(&self) -> &'static str {
        "Air / VPD"
    }

    fn evaluate(&self, reading: &SensorReading, ctx: &FactorContext) -> Option<Finding> {
        let Some(vpd) = calculate_vpd(reading.temp_c, reading.humidity_pct) else {
            return Some(Finding::new(
                FactorKind::Air,
                Severity::Advisory,
                5.0,
                "VPD unknown - log temperature and humidity",
            ));
        };
        let band = vpd_status(Some(vpd));

        if band.is_extreme() {
            return Some(Finding::new(
                FactorKind::Air,
                Severity::Critical,
                25.0,
                format!("VPD {:.2} kPa: {}", vpd, band.recommendation()),
            ));
        }

        if !ctx.profile.vpd_kpa.contains(vpd) {
            let direction = if vpd < ctx.profile.vpd_kpa.min {
                "low"
            } else {
                "high"
            };
            return Some(Finding::new(
                FactorKind::Air,
                Severity::Warning,
                10.0,
                format!(
                    "VPD {:.2} kPa slightly {} for {} (target {:.1}-{:.1})",
                    vpd, direction, ctx.profile.name, ctx.profile.vpd_kpa.min, ctx.profile.vpd_kpa.max
                ),
            ));
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
            system: SystemType::Nft,
            batch_age_days: 20,
        }
    }

    fn reading(temp_c: Option<f64>, humidity_pct: Option<f64>) -> SensorReading {
        let mut r = SensorReading::new(Utc::now());
        r.temp_c = temp_c;
        r.humidity_pct = humidity_pct;
        r
    }

    #[test]
    fn in_range_vpd_is_clean() {
        // 20C / 65% -> ~0.82 kPa, inside lettuce's 0.6-1.0 target
        let finding = AirFactor.evaluate(&reading(Some(20.0), Some(65.0)), &ctx());
        assert!(finding.is_none());
    }

    #[test]
    fn mold_risk_is_critical() {
        // 18C / 95% -> ~0.10 kPa, deep in the too-humid band
        let finding = AirFactor
            .evaluate(&reading(Some(18.0), Some(95.0)), &ctx())
            .unwrap();
        assert_eq!(finding.severity, Severity::Critical);
    }

    #[test]
    fn off_crop_range_is_a_warning() {
        // 27C / 60% -> ~1.42 kPa, a fine flowering band but high for lettuce
        let finding = AirFactor
            .evaluate(&reading(Some(27.0), Some(60.0)), &ctx())
            .unwrap();
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.contains("high"));
    }

    #[test]
    fn missing_data_is_a_small_advisory() {
        let finding = AirFactor.evaluate(&reading(None, None), &ctx()).unwrap();
        assert_eq!(finding.severity, Severity::Advisory);
        assert_eq!(finding.penalty, 5.0);
    }
}
