use crate::cache::TtlCache;
use crate::error::Result;
use crate::logic::factors::{FactorContext, HealthEngine};
use crate::models::{CropProfile, HealthAssessment, SensorReading, SystemType};
use chrono::{DateTime, Utc};

pub const DEFAULT_CACHE_TTL_MINUTES: i64 = 5;

/// Caller-facing entry point for health scoring.
///
/// Wraps the pure engine with a TTL memoization cache and a last line of
/// defence: the engine never fails on domain-invalid input, but anything
/// that does go wrong in the surrounding plumbing is logged and converted
/// into a zero-score error-tagged assessment so rendering never crashes.
pub struct FarmIntelligenceService {
    engine: HealthEngine,
    cache: TtlCache<HealthAssessment>,
}

impl FarmIntelligenceService {
    pub fn new() -> Self {
        Self::with_ttl_minutes(DEFAULT_CACHE_TTL_MINUTES)
    }

    pub fn with_ttl_minutes(minutes: i64) -> Self {
        Self {
            engine: HealthEngine::new(),
            cache: TtlCache::with_ttl_minutes(minutes),
        }
    }

    /// Score a reading for the given crop and system. `now` drives only the
    /// cache window; the score itself depends solely on the arguments.
    pub fn assess(
        &mut self,
        reading: &SensorReading,
        crop_name: &str,
        system: SystemType,
        batch_age_days: i64,
        now: DateTime<Utc>,
    ) -> HealthAssessment {
        match self.try_assess(reading, crop_name, system, batch_age_days, now) {
            Ok(assessment) => assessment,
            Err(e) => {
                tracing::error!("health assessment failed: {e}");
                HealthAssessment::failed(e.to_string())
            }
        }
    }

    fn try_assess(
        &mut self,
        reading: &SensorReading,
        crop_name: &str,
        system: SystemType,
        batch_age_days: i64,
        now: DateTime<Utc>,
    ) -> Result<HealthAssessment> {
        let key = cache_key(reading, crop_name, system, batch_age_days)?;

        if let Some(hit) = self.cache.get(&key, now) {
            tracing::debug!("cache hit for {crop_name} assessment");
            return Ok(hit);
        }

        let ctx = FactorContext {
            profile: CropProfile::lookup_or_default(crop_name).clone(),
            system,
            batch_age_days,
        };
        let assessment = HealthAssessment::ok(self.engine.evaluate(reading, &ctx));

        self.cache.insert(key, assessment.clone(), now);
        Ok(assessment)
    }

    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.cache.purge_expired(now);
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl Default for FarmIntelligenceService {
    fn default() -> Self {
        Self::new()
    }
}

fn cache_key(
    reading: &SensorReading,
    crop_name: &str,
    system: SystemType,
    batch_age_days: i64,
) -> Result<String> {
    let params = serde_json::json!({
        "reading": reading,
        "crop": crop_name.to_lowercase(),
        "system": system,
        "age": batch_age_days,
    });
    Ok(serde_json::to_string(&params)?)
}
