pub mod air;
pub mod disease;
pub mod engine;
pub mod light;
pub mod nutrient;
pub mod root_zone;

pub use engine::HealthEngine;

use crate::models::{CropProfile, Finding, SensorReading, SystemType};

/// Inputs shared by every health factor for one scoring call.
#[derive(Debug, Clone)]
pub struct FactorContext {
    pub profile: CropProfile,
    pub system: SystemType,
    pub batch_age_days: i64,
}

/// Trait for crop health factors
pub trait HealthFactor: Send + Sync {
    /// Unique identifier for this factor
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the factor and return a finding if something is off
    fn evaluate(&self, reading: &SensorReading, ctx: &FactorContext) -> Option<Finding>;
}
