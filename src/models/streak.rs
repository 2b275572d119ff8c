use super::health::Severity;
use serde::{Deserialize, Serialize};

/// Gamification badge for a logging streak. Pure lookup data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakBadge {
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uncertainty {
    Low,
    Medium,
    High,
}

impl Uncertainty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Uncertainty::Low => "Low",
            Uncertainty::Medium => "Medium",
            Uncertainty::High => "High",
        }
    }
}

impl std::fmt::Display for Uncertainty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated health after a gap in logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDecay {
    pub new_health: f64,
    pub decay_amount: f64,
    pub uncertainty: Uncertainty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPhase {
    Blackout,
    Growth,
}

impl GrowthPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthPhase::Blackout => "Blackout",
            GrowthPhase::Growth => "Growth",
        }
    }
}

impl std::fmt::Display for GrowthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackoutWarning {
    pub severity: Severity,
    pub message: String,
}

/// Where a microgreens tray stands relative to its blackout window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackoutStatus {
    pub phase: GrowthPhase,
    pub age_days: i64,
    pub days_remaining: i64,
    pub urgency: Option<Urgency>,
    pub warning: Option<BlackoutWarning>,
}
