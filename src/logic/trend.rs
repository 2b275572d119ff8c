use crate::models::{Trend, TrendResult};

/// Stability and direction of a numeric series against a target range.
///
/// Requires at least three points; shorter series get the explicit
/// insufficient-data sentinel rather than a zero that looks measured.
/// Stability blends a variance factor (40%) with the share of values inside
/// the target range (60%).
pub fn analyze_trend(values: &[f64], target_min: f64, target_max: f64) -> TrendResult {
    let usable: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if usable.len() < 3 {
        return TrendResult::insufficient_data();
    }

    let n = usable.len() as f64;
    let mean = usable.iter().sum::<f64>() / n;
    // Population variance: the series is the whole record, not a sample
    let variance = usable.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let in_range = usable
        .iter()
        .filter(|v| **v >= target_min && **v <= target_max)
        .count();
    let percent_in_range = in_range as f64 / n * 100.0;

    let variance_factor = (100.0 - variance * 10.0).max(0.0);
    let stability = 0.4 * variance_factor + 0.6 * percent_in_range;

    let recent = &usable[usable.len() - 3..];
    let trend = if recent[2] > recent[0] {
        Trend::Rising
    } else if recent[2] < recent[0] {
        Trend::Falling
    } else {
        Trend::Stable
    };

    TrendResult {
        stability,
        variance,
        percent_in_range,
        trend,
    }
}
