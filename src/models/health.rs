use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Advisory,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Advisory => "Advisory",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Advisory => "→",
            Severity::Warning => "⚠",
            Severity::Critical => "!",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-factor detail flag exposed on a `HealthResult`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorStatus {
    #[default]
    Ok,
    Warn,
    Danger,
}

impl FactorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorStatus::Ok => "OK",
            FactorStatus::Warn => "WARN",
            FactorStatus::Danger => "DANGER",
        }
    }
}

impl std::fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorKind {
    Air,
    Nutrient,
    Light,
    RootZone,
    Disease,
}

impl FactorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorKind::Air => "Air",
            FactorKind::Nutrient => "Nutrient",
            FactorKind::Light => "Light",
            FactorKind::RootZone => "Root Zone",
            FactorKind::Disease => "Disease",
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scored observation from a health factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub factor: FactorKind,
    pub severity: Severity,
    /// Points subtracted from the composite score.
    pub penalty: f64,
    pub message: String,
}

impl Finding {
    pub fn new(
        factor: FactorKind,
        severity: Severity,
        penalty: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            factor,
            severity,
            penalty,
            message: message.into(),
        }
    }
}

/// Composite farm health for one reading. Score is always in [0, 100] and
/// reasons are ordered worst-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResult {
    pub score: f64,
    pub reasons: Vec<String>,
    pub air: FactorStatus,
    pub nutrient: FactorStatus,
    pub light: FactorStatus,
    pub findings: Vec<Finding>,
}

impl HealthResult {
    pub fn perfect() -> Self {
        Self {
            score: 100.0,
            reasons: Vec::new(),
            air: FactorStatus::Ok,
            nutrient: FactorStatus::Ok,
            light: FactorStatus::Ok,
            findings: Vec::new(),
        }
    }
}

/// Caller-facing envelope produced by the service wrapper. When an
/// unexpected failure is caught, `error` is set and the score is zeroed so
/// downstream rendering never crashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub result: HealthResult,
    pub error: bool,
    pub error_message: Option<String>,
}

impl HealthAssessment {
    pub fn ok(result: HealthResult) -> Self {
        Self {
            result,
            error: false,
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let mut result = HealthResult::perfect();
        result.score = 0.0;
        Self {
            result,
            error: true,
            error_message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Advisory);
        assert!(Severity::Advisory > Severity::Info);
    }

    #[test]
    fn failed_assessment_is_zero_scored() {
        let a = HealthAssessment::failed("boom");
        assert!(a.error);
        assert_eq!(a.result.score, 0.0);
        assert_eq!(a.error_message.as_deref(), Some("boom"));
    }
}
