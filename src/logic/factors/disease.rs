use super::{FactorContext, HealthFactor};
use crate::logic::disease::{disease_risk, RiskLevel};
use crate::models::{FactorKind, Finding, SensorReading, Severity};

/// Disease factor - folds the fungal risk score into the composite
pub struct DiseaseFactor;

impl HealthFactor for DiseaseFactor {
    fn id(&self) -> &'static str {
        "disease"
    }

    fn name(&self) -> &'static str {
        "Disease"
    }

    fn evaluate(&self, reading: &SensorReading, _ctx: &FactorContext) -> Option<Finding> {
        let risk = disease_risk(
            reading.humidity_pct,
            reading.temp_c,
            reading.ventilation_hours,
        );

        match risk.level {
            RiskLevel::High => Some(Finding::new(
                FactorKind::Disease,
                Severity::Warning,
                20.0,
                format!("Fungal disease risk high ({:.0}/100)", risk.score),
            )),
            RiskLevel::Medium => Some(Finding::new(
                FactorKind::Disease,
                Severity::Advisory,
                5.0,
                format!("Fungal disease risk elevated ({:.0}/100)", risk.score),
            )),
            RiskLevel::Low => None,
        }
    }
}
