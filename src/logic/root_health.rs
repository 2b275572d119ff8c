use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootStatus {
    Healthy,
    Fair,
    Poor,
}

impl RootStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootStatus::Healthy => "Healthy",
            RootStatus::Fair => "Fair",
            RootStatus::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for RootStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootHealth {
    pub score: f64,
    pub status: RootStatus,
    pub issues: Vec<&'static str>,
}

/// Root-zone health from dissolved oxygen, water temperature, and EC.
///
/// Starts at 100 and subtracts per-threshold penalties. Warm water holds
/// less oxygen and favors pythium, so a hot reservoir with low DO takes
/// both deductions. Missing inputs deduct nothing.
pub fn root_health(
    dissolved_oxygen_mg_l: Option<f64>,
    water_temp_c: Option<f64>,
    ec_ms_cm: Option<f64>,
) -> RootHealth {
    let mut score: f64 = 100.0;
    let mut issues = Vec::new();

    if let Some(oxygen) = dissolved_oxygen_mg_l.filter(|v| v.is_finite()) {
        if oxygen < 5.0 {
            score -= 40.0;
            issues.push("Dissolved oxygen critically low - roots are suffocating");
        } else if oxygen < 6.0 {
            score -= 20.0;
            issues.push("Dissolved oxygen below optimal - increase aeration");
        }
    }

    if let Some(temp) = water_temp_c.filter(|v| v.is_finite()) {
        if temp > 26.0 {
            score -= 30.0;
            issues.push("Water too warm - oxygen drops and pythium thrives");
        } else if temp > 24.0 {
            score -= 15.0;
            issues.push("Water warmer than ideal - consider chilling the reservoir");
        } else if temp < 18.0 {
            score -= 15.0;
            issues.push("Water too cold - nutrient uptake slows");
        }
    }

    if let Some(ec) = ec_ms_cm.filter(|v| v.is_finite()) {
        if ec > 2.5 {
            score -= 20.0;
            issues.push("EC too high - risk of osmotic stress and root burn");
        } else if ec < 0.8 {
            score -= 10.0;
            issues.push("EC too low - solution may be underfeeding");
        }
    }

    let score = score.max(0.0);

    let status = if score >= 80.0 {
        RootStatus::Healthy
    } else if score >= 60.0 {
        RootStatus::Fair
    } else {
        RootStatus::Poor
    };

    RootHealth {
        score,
        status,
        issues,
    }
}
