use crate::models::{CropProfile, HarvestForecast, SensorReading};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Growing degree days for one day from its max/min air temperature.
/// Never negative: days below the crop's base temperature contribute zero.
pub fn daily_gdd(t_max: f64, t_min: f64, profile: &CropProfile) -> f64 {
    let gdd = (t_max + t_min) / 2.0 - profile.base_temp_c;
    gdd.max(0.0)
}

/// Predict the harvest date by accumulating GDD from the sowing date.
///
/// Readings are grouped by calendar day; each day contributes the GDD of its
/// observed max/min temperature. Once the crop's target is met the day it
/// was met becomes the predicted date; otherwise the mean daily accumulation
/// extrapolates forward from `today`.
pub fn predict_harvest(
    readings: &[SensorReading],
    profile: &CropProfile,
    sowing_date: NaiveDate,
    today: NaiveDate,
) -> HarvestForecast {
    // Per-day (max, min) air temperature since sowing.
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for reading in readings {
        let date = reading.timestamp.date_naive();
        if date < sowing_date {
            continue;
        }
        let Some(t) = reading.temp_c.filter(|v| v.is_finite()) else {
            continue;
        };
        by_day
            .entry(date)
            .and_modify(|(max, min)| {
                *max = max.max(t);
                *min = min.min(t);
            })
            .or_insert((t, t));
    }

    if by_day.is_empty() {
        return HarvestForecast::unavailable("no temperature logs since sowing");
    }

    let mut cumulative = 0.0;
    let mut reached_on: Option<NaiveDate> = None;
    for (date, (t_max, t_min)) in &by_day {
        cumulative += daily_gdd(*t_max, *t_min, profile);
        if cumulative >= profile.target_gdd && reached_on.is_none() {
            reached_on = Some(*date);
        }
    }

    let percent_complete = (cumulative / profile.target_gdd * 100.0).min(100.0);

    if let Some(date) = reached_on {
        return HarvestForecast::Predicted {
            predicted_date: date,
            days_remaining: (date - today).num_days().max(0),
            percent_complete,
        };
    }

    let mean_daily = cumulative / by_day.len() as f64;
    if mean_daily <= 0.0 {
        return HarvestForecast::unavailable(
            "no heat accumulation above the crop's base temperature yet",
        );
    }

    let remaining = profile.target_gdd - cumulative;
    let days_remaining = (remaining / mean_daily).ceil() as i64;
    HarvestForecast::Predicted {
        predicted_date: today + Duration::days(days_remaining),
        days_remaining,
        percent_complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading_at(date: NaiveDate, hour: u32, temp_c: f64) -> SensorReading {
        let ts = date.and_hms_opt(hour, 0, 0).unwrap().and_utc();
        let mut r = SensorReading::new(ts);
        r.temp_c = Some(temp_c);
        r
    }

    fn lettuce() -> &'static CropProfile {
        CropProfile::lookup("lettuce").unwrap()
    }

    #[test]
    fn daily_gdd_never_negative() {
        let p = lettuce();
        assert_eq!(daily_gdd(2.0, -4.0, p), 0.0);
        assert!(daily_gdd(22.0, 16.0, p) > 0.0);
    }

    #[test]
    fn daily_gdd_mean_above_base() {
        let p = lettuce(); // base 4.0
        let gdd = daily_gdd(24.0, 16.0, p);
        assert!((gdd - 16.0).abs() < 1e-9);
    }

    #[test]
    fn empty_logs_are_unavailable() {
        let sown = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let forecast = predict_harvest(&[], lettuce(), sown, today);
        assert!(!forecast.is_predicted());
    }

    #[test]
    fn logs_before_sowing_are_ignored() {
        let sown = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        let early = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let forecast = predict_harvest(&[reading_at(early, 12, 20.0)], lettuce(), sown, today);
        assert_eq!(
            forecast,
            HarvestForecast::unavailable("no temperature logs since sowing")
        );
    }

    #[test]
    fn extrapolates_from_mean_accumulation() {
        let sown = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        // Four days at a steady 24/16C: 16 GDD per day for lettuce.
        let mut readings = Vec::new();
        for offset in 0..4 {
            let date = sown + Duration::days(offset);
            readings.push(reading_at(date, 6, 16.0));
            readings.push(reading_at(date, 14, 24.0));
        }
        let forecast = predict_harvest(&readings, lettuce(), sown, today);
        match forecast {
            HarvestForecast::Predicted {
                days_remaining,
                percent_complete,
                ..
            } => {
                // 64 of 550 GDD accumulated, 486 remaining at 16/day -> 31 days
                assert_eq!(days_remaining, 31);
                assert!(percent_complete > 11.0 && percent_complete < 12.0);
            }
            other => panic!("expected prediction, got {other:?}"),
        }
    }

    #[test]
    fn target_already_met_reports_zero_days_remaining() {
        let sown = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let mut readings = Vec::new();
        for offset in 0..40 {
            let date = sown + Duration::days(offset);
            readings.push(reading_at(date, 6, 14.0));
            readings.push(reading_at(date, 14, 26.0));
        }
        // 16 GDD/day * 40 days = 640 > 550 target
        let forecast = predict_harvest(&readings, lettuce(), sown, today);
        match forecast {
            HarvestForecast::Predicted {
                days_remaining,
                percent_complete,
                ..
            } => {
                assert_eq!(days_remaining, 0);
                assert_eq!(percent_complete, 100.0);
            }
            other => panic!("expected prediction, got {other:?}"),
        }
    }

    #[test]
    fn cold_run_with_no_accumulation_is_unavailable() {
        let sown = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        let mut readings = Vec::new();
        for offset in 0..3 {
            let date = sown + Duration::days(offset);
            readings.push(reading_at(date, 12, 1.0));
        }
        let forecast = predict_harvest(&readings, lettuce(), sown, today);
        assert!(!forecast.is_predicted());
    }
}
