use super::{
    air::AirFactor, disease::DiseaseFactor, light::LightFactor, nutrient::NutrientFactor,
    root_zone::RootZoneFactor, FactorContext, HealthFactor,
};
use crate::models::{FactorKind, FactorStatus, HealthResult, SensorReading, Severity};

pub struct HealthEngine {
    factors: Vec<Box<dyn HealthFactor>>,
}

impl HealthEngine {
    pub fn new() -> Self {
        let factors: Vec<Box<dyn HealthFactor>> = vec![
            Box::new(AirFactor),
            Box::new(NutrientFactor),
            Box::new(LightFactor),
            Box::new(RootZoneFactor),
            Box::new(DiseaseFactor),
        ];

        Self { factors }
    }

    /// Score one reading. Pure and deterministic: the only time involved is
    /// whatever the caller baked into `ctx.batch_age_days`.
    pub fn evaluate(&self, reading: &SensorReading, ctx: &FactorContext) -> HealthResult {
        let mut findings: Vec<_> = self
            .factors
            .iter()
            .filter_map(|f| f.evaluate(reading, ctx))
            .collect();

        // Worst first: severity, then penalty
        findings.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then(b.penalty.total_cmp(&a.penalty))
        });

        let score = (100.0 - findings.iter().map(|f| f.penalty).sum::<f64>()).clamp(0.0, 100.0);

        let reasons = findings
            .iter()
            .map(|f| format!("{}: {}", f.severity.as_str().to_uppercase(), f.message))
            .collect();

        let status_of = |kind: FactorKind| {
            findings
                .iter()
                .filter(|f| f.factor == kind)
                .map(|f| match f.severity {
                    Severity::Critical => FactorStatus::Danger,
                    Severity::Warning => FactorStatus::Warn,
                    _ => FactorStatus::Ok,
                })
                .max_by_key(|s| match s {
                    FactorStatus::Ok => 0,
                    FactorStatus::Warn => 1,
                    FactorStatus::Danger => 2,
                })
                .unwrap_or(FactorStatus::Ok)
        };

        HealthResult {
            score,
            reasons,
            air: status_of(FactorKind::Air),
            nutrient: status_of(FactorKind::Nutrient),
            light: status_of(FactorKind::Light),
            findings,
        }
    }

    pub fn evaluate_factor(
        &self,
        factor_id: &str,
        reading: &SensorReading,
        ctx: &FactorContext,
    ) -> Option<crate::models::Finding> {
        self.factors
            .iter()
            .find(|f| f.id() == factor_id)
            .and_then(|f| f.evaluate(reading, ctx))
    }

    pub fn list_factors(&self) -> Vec<(&'static str, &'static str)> {
        self.factors.iter().map(|f| (f.id(), f.name())).collect()
    }
}

impl Default for HealthEngine {
    fn default() -> Self {
        Self::new()
    }
}
