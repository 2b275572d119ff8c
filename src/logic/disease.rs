use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseRisk {
    pub score: f64,
    pub level: RiskLevel,
    pub recommendations: Vec<&'static str>,
}

/// Additive fungal disease risk score for an enclosed grow space.
///
/// Humidity dominates: sustained air above 80% is the main driver of powdery
/// mildew and damping-off. Temperature extremes and poor ventilation add on
/// top. Missing inputs contribute nothing.
pub fn disease_risk(
    humidity_pct: Option<f64>,
    temp_c: Option<f64>,
    ventilation_hours: Option<f64>,
) -> DiseaseRisk {
    let mut score: f64 = 0.0;

    if let Some(h) = humidity_pct.filter(|v| v.is_finite()) {
        if h > 80.0 {
            score += 50.0;
        } else if h > 70.0 {
            score += 35.0;
        } else if h > 60.0 {
            score += 20.0;
        } else if h < 40.0 {
            // Dry stress weakens tissue and invites opportunistic infection
            score += 10.0;
        }
    }

    if let Some(t) = temp_c.filter(|v| v.is_finite()) {
        if t > 28.0 {
            score += 25.0;
        } else if t < 15.0 {
            score += 15.0;
        }
    }

    if let Some(v) = ventilation_hours.filter(|v| v.is_finite()) {
        if v < 1.0 {
            score += 15.0;
        } else if v > 4.0 {
            score -= 10.0;
        }
    }

    let score = score.clamp(0.0, 100.0);

    let (level, recommendations) = if score < 30.0 {
        (
            RiskLevel::Low,
            vec!["Conditions look good. Keep air moving and monitor humidity."],
        )
    } else if score < 60.0 {
        (
            RiskLevel::Medium,
            vec![
                "Increase ventilation, especially overnight.",
                "Inspect lower leaves and stems for early fungal spots.",
                "Avoid wetting foliage when topping up reservoirs.",
            ],
        )
    } else {
        (
            RiskLevel::High,
            vec![
                "Run fans continuously and dehumidify below 70%.",
                "Space plants out to improve airflow through the canopy.",
                "Remove any affected tissue immediately.",
                "Hold off on misting until humidity drops.",
            ],
        )
    };

    DiseaseRisk {
        score,
        level,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humid_and_stagnant_is_high_risk() {
        let risk = disease_risk(Some(85.0), Some(29.0), Some(0.5));
        // 50 + 25 + 15
        assert_eq!(risk.score, 90.0);
        assert_eq!(risk.level, RiskLevel::High);
        assert!(!risk.recommendations.is_empty());
    }

    #[test]
    fn ventilation_credit_can_lower_the_band() {
        let stagnant = disease_risk(Some(75.0), None, None);
        assert_eq!(stagnant.score, 35.0);
        assert_eq!(stagnant.level, RiskLevel::Medium);

        let ventilated = disease_risk(Some(75.0), None, Some(5.0));
        assert_eq!(ventilated.score, 25.0);
        assert_eq!(ventilated.level, RiskLevel::Low);
    }

    #[test]
    fn dry_stress_contributes() {
        let risk = disease_risk(Some(35.0), None, None);
        assert_eq!(risk.score, 10.0);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn cold_adds_points() {
        let risk = disease_risk(None, Some(12.0), None);
        assert_eq!(risk.score, 15.0);
    }

    #[test]
    fn score_clamped_to_bounds() {
        // Ventilation credit alone cannot go negative
        let risk = disease_risk(Some(50.0), Some(20.0), Some(8.0));
        assert_eq!(risk.score, 0.0);

        let risk = disease_risk(Some(95.0), Some(30.0), Some(0.0));
        assert!(risk.score <= 100.0);
    }

    #[test]
    fn missing_everything_is_low() {
        let risk = disease_risk(None, None, None);
        assert_eq!(risk.score, 0.0);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn exclusive_humidity_buckets() {
        assert_eq!(disease_risk(Some(81.0), None, None).score, 50.0);
        assert_eq!(disease_risk(Some(71.0), None, None).score, 35.0);
        assert_eq!(disease_risk(Some(61.0), None, None).score, 20.0);
        assert_eq!(disease_risk(Some(50.0), None, None).score, 0.0);
    }
}
