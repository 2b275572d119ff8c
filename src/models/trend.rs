use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Stable,
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "↑ Rising",
            Trend::Falling => "↓ Falling",
            Trend::Stable => "→ Stable",
            Trend::InsufficientData => "Insufficient data",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stability analysis over a numeric series.
///
/// A series shorter than three points carries `Trend::InsufficientData` and
/// zeroed metrics; callers must check the trend label before treating the
/// stability score as a real measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub stability: f64,
    pub variance: f64,
    pub percent_in_range: f64,
    pub trend: Trend,
}

impl TrendResult {
    pub fn insufficient_data() -> Self {
        Self {
            stability: 0.0,
            variance: 0.0,
            percent_in_range: 0.0,
            trend: Trend::InsufficientData,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.trend != Trend::InsufficientData
    }
}
