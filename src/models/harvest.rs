use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Degree-day harvest forecast. Malformed or empty temperature history
/// yields `Unavailable` rather than an error so callers can degrade to a
/// "not enough data yet" display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HarvestForecast {
    Predicted {
        predicted_date: NaiveDate,
        days_remaining: i64,
        percent_complete: f64,
    },
    Unavailable {
        reason: String,
    },
}

impl HarvestForecast {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        HarvestForecast::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_predicted(&self) -> bool {
        matches!(self, HarvestForecast::Predicted { .. })
    }
}
