use crate::models::{
    BlackoutStatus, BlackoutWarning, GrowthPhase, HealthDecay, Severity, StreakBadge,
    Uncertainty, Urgency,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

/// Consecutive-day logging streak, counted backward from the most recent
/// logged date. A gap of more than one calendar day relative to `today`
/// resets the streak to zero.
pub fn calculate_streak(timestamps: &[DateTime<Utc>], today: NaiveDate) -> u32 {
    // Dedupe to one entry per calendar date, newest first
    let dates: BTreeSet<NaiveDate> = timestamps.iter().map(|t| t.date_naive()).collect();
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    dates.reverse();

    let Some(&most_recent) = dates.first() else {
        return 0;
    };
    if (today - most_recent).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() > 1 {
            break;
        }
        streak += 1;
    }
    streak
}

pub fn streak_badge(streak: u32) -> StreakBadge {
    match streak {
        0 => StreakBadge {
            emoji: "🌑",
            label: "No Streak",
            color: "gray",
            message: "Log today to start a new streak.",
        },
        1 => StreakBadge {
            emoji: "🌱",
            label: "Sprout",
            color: "green",
            message: "Day one. Come back tomorrow.",
        },
        2..=6 => StreakBadge {
            emoji: "🌿",
            label: "Taking Root",
            color: "green",
            message: "A few days in a row. Keep it growing.",
        },
        7 => StreakBadge {
            emoji: "🔥",
            label: "Full Week",
            color: "orange",
            message: "Seven straight days of logging.",
        },
        8..=29 => StreakBadge {
            emoji: "🔥",
            label: "On Fire",
            color: "orange",
            message: "Your logs are building a real history.",
        },
        _ => StreakBadge {
            emoji: "🏆",
            label: "Master Grower",
            color: "gold",
            message: "A month or more without missing a day.",
        },
    }
}

/// Estimated crop health after `days_missed` without a log entry.
///
/// Linear 5%/day decay with an extra 3%/day penalty beyond day three, when
/// unnoticed problems start to compound. Health never goes below zero.
pub fn health_decay(days_missed: u32, last_known_health: f64) -> HealthDecay {
    let days = f64::from(days_missed);
    let accelerated = (days - 3.0).max(0.0);
    let decay_amount = days * 5.0 + accelerated * 3.0;

    let new_health = (last_known_health - decay_amount).clamp(0.0, 100.0);

    let uncertainty = if days_missed > 7 {
        Uncertainty::High
    } else if days_missed > 3 {
        Uncertainty::Medium
    } else {
        Uncertainty::Low
    };

    HealthDecay {
        new_health,
        decay_amount,
        uncertainty,
    }
}

/// Blackout window length for microgreens, in days after sowing.
const BLACKOUT_DAYS: i64 = 3;

/// Phase of a microgreens tray relative to its blackout window.
///
/// Age is whole calendar days between the sow date and `today`; time of day
/// never shifts the phase. A future sow date counts as age zero. When the
/// grower reports the tray still covered past the window, a critical warning
/// is attached.
pub fn blackout_status(sow_date: NaiveDate, still_covered: bool, today: NaiveDate) -> BlackoutStatus {
    let age_days = (today - sow_date).num_days().max(0);

    let phase = if age_days <= BLACKOUT_DAYS {
        GrowthPhase::Blackout
    } else {
        GrowthPhase::Growth
    };

    let days_remaining = (BLACKOUT_DAYS - age_days).max(0);

    // Day four is the transition day: uncover now
    let urgency = if age_days == BLACKOUT_DAYS + 1 {
        Some(Urgency::Immediate)
    } else {
        None
    };

    let warning = if still_covered && age_days > BLACKOUT_DAYS {
        Some(BlackoutWarning {
            severity: Severity::Critical,
            message: format!(
                "Tray still covered at day {age_days}. Uncover immediately: \
                 shoots will etiolate and mold risk climbs every extra day."
            ),
        })
    } else {
        None
    };

    BlackoutStatus {
        phase,
        age_days,
        days_remaining,
        urgency,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(date: NaiveDate, hour: u32) -> DateTime<Utc> {
        date.and_hms_opt(hour, 0, 0).unwrap().and_utc()
    }

    #[test]
    fn streak_counts_consecutive_days_and_stops_at_gaps() {
        let today = day(2026, 8, 8);
        let logs = vec![
            ts(today, 9),
            ts(day(2026, 8, 7), 20),
            ts(day(2026, 8, 5), 12), // gap: Aug 6 missing
        ];
        assert_eq!(calculate_streak(&logs, today), 2);
    }

    #[test]
    fn streak_zero_after_long_gap() {
        let today = day(2026, 8, 8);
        let logs = vec![ts(day(2026, 8, 3), 12)];
        assert_eq!(calculate_streak(&logs, today), 0);
    }

    #[test]
    fn streak_survives_yesterday_only() {
        let today = day(2026, 8, 8);
        let logs = vec![ts(day(2026, 8, 7), 23)];
        assert_eq!(calculate_streak(&logs, today), 1);
    }

    #[test]
    fn multiple_logs_per_day_count_once() {
        let today = day(2026, 8, 8);
        let logs = vec![ts(today, 6), ts(today, 12), ts(today, 21), ts(day(2026, 8, 7), 8)];
        assert_eq!(calculate_streak(&logs, today), 2);
    }

    #[test]
    fn empty_logs_mean_no_streak() {
        assert_eq!(calculate_streak(&[], day(2026, 8, 8)), 0);
    }

    #[test]
    fn badge_ranges() {
        assert_eq!(streak_badge(0).label, "No Streak");
        assert_eq!(streak_badge(1).label, "Sprout");
        assert_eq!(streak_badge(4).label, "Taking Root");
        assert_eq!(streak_badge(7).label, "Full Week");
        assert_eq!(streak_badge(15).label, "On Fire");
        assert_eq!(streak_badge(30).label, "Master Grower");
        assert_eq!(streak_badge(365).label, "Master Grower");
    }

    #[test]
    fn decay_is_linear_then_accelerates() {
        let d = health_decay(2, 100.0);
        assert_eq!(d.decay_amount, 10.0);
        assert_eq!(d.new_health, 90.0);
        assert_eq!(d.uncertainty, Uncertainty::Low);

        let d = health_decay(5, 100.0);
        // 25 linear + 6 accelerated
        assert_eq!(d.decay_amount, 31.0);
        assert_eq!(d.new_health, 69.0);
        assert_eq!(d.uncertainty, Uncertainty::Medium);
    }

    #[test]
    fn decay_clamps_at_zero() {
        let d = health_decay(30, 50.0);
        assert_eq!(d.new_health, 0.0);
        assert_eq!(d.uncertainty, Uncertainty::High);
    }

    #[test]
    fn blackout_day_zero() {
        let today = day(2026, 8, 8);
        let status = blackout_status(today, false, today);
        assert_eq!(status.phase, GrowthPhase::Blackout);
        assert_eq!(status.age_days, 0);
        assert_eq!(status.days_remaining, 3);
        assert!(status.urgency.is_none());
        assert!(status.warning.is_none());
    }

    #[test]
    fn blackout_transition_day_is_immediate() {
        let today = day(2026, 8, 8);
        let status = blackout_status(day(2026, 8, 4), false, today);
        assert_eq!(status.phase, GrowthPhase::Growth);
        assert_eq!(status.age_days, 4);
        assert_eq!(status.urgency, Some(Urgency::Immediate));
    }

    #[test]
    fn still_covered_past_window_is_critical() {
        let today = day(2026, 8, 11);
        let status = blackout_status(day(2026, 8, 1), true, today);
        assert_eq!(status.phase, GrowthPhase::Growth);
        let warning = status.warning.expect("expected a warning");
        assert_eq!(warning.severity, Severity::Critical);
    }

    #[test]
    fn covered_inside_window_is_fine() {
        let today = day(2026, 8, 8);
        let status = blackout_status(day(2026, 8, 6), true, today);
        assert_eq!(status.phase, GrowthPhase::Blackout);
        assert!(status.warning.is_none());
    }

    #[test]
    fn future_sow_date_counts_as_day_zero() {
        let today = day(2026, 8, 8);
        let status = blackout_status(day(2026, 8, 10), false, today);
        assert_eq!(status.age_days, 0);
        assert_eq!(status.phase, GrowthPhase::Blackout);
    }
}
