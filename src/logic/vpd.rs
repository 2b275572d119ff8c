use serde::{Deserialize, Serialize};

/// Vapor pressure deficit in kPa from air temperature and relative humidity.
///
/// Saturation vapor pressure comes from the Tetens equation. Returns `None`
/// for missing or non-finite inputs and for humidity outside 0-100%.
pub fn calculate_vpd(temp_c: Option<f64>, humidity_pct: Option<f64>) -> Option<f64> {
    let t = temp_c.filter(|v| v.is_finite())?;
    let rh = humidity_pct
        .filter(|v| v.is_finite())
        .filter(|v| (0.0..=100.0).contains(v))?;

    let svp = 0.61078 * (17.27 * t / (t + 237.3)).exp();
    let avp = svp * rh / 100.0;
    let vpd = svp - avp;

    Some((vpd * 100.0).round() / 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VpdBand {
    TooHumid,
    Seedling,
    Vegetative,
    Flowering,
    TooDry,
    Unknown,
}

impl VpdBand {
    pub fn label(&self) -> &'static str {
        match self {
            VpdBand::TooHumid => "Too Humid",
            VpdBand::Seedling => "Low - Seedling Range",
            VpdBand::Vegetative => "Perfect - Vegetative Range",
            VpdBand::Flowering => "Good - Flowering Range",
            VpdBand::TooDry => "Too Dry",
            VpdBand::Unknown => "Unknown",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            VpdBand::TooHumid => {
                "Mold risk. Increase air circulation or lower humidity."
            }
            VpdBand::Seedling => {
                "Gentle transpiration. Ideal for seedlings and clones; raise \
                 temperature slightly for mature plants."
            }
            VpdBand::Vegetative => "Ideal range for vegetative growth. Hold steady.",
            VpdBand::Flowering => {
                "Good for flowering and fruiting stages. Watch for drift above 1.6."
            }
            VpdBand::TooDry => {
                "Transpiration stress. Raise humidity or lower temperature."
            }
            VpdBand::Unknown => "Log temperature and humidity to track VPD.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VpdBand::TooHumid => "droplets",
            VpdBand::Seedling => "sprout",
            VpdBand::Vegetative => "leaf",
            VpdBand::Flowering => "flower",
            VpdBand::TooDry => "sun",
            VpdBand::Unknown => "help-circle",
        }
    }

    /// Extremes that call for immediate correction.
    pub fn is_extreme(&self) -> bool {
        matches!(self, VpdBand::TooHumid | VpdBand::TooDry)
    }
}

impl std::fmt::Display for VpdBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a VPD value into its band. `None` or NaN maps to `Unknown`.
pub fn vpd_status(vpd: Option<f64>) -> VpdBand {
    let v = match vpd {
        Some(v) if v.is_finite() => v,
        _ => return VpdBand::Unknown,
    };

    if v < 0.4 {
        VpdBand::TooHumid
    } else if v <= 0.8 {
        VpdBand::Seedling
    } else if v <= 1.2 {
        VpdBand::Vegetative
    } else if v <= 1.6 {
        VpdBand::Flowering
    } else {
        VpdBand::TooDry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        // 25C / 60% is a common vegetative setpoint
        let v = calculate_vpd(Some(25.0), Some(60.0)).unwrap();
        assert!((v - 1.27).abs() < 0.05, "got {v}");

        // Cool and humid, near the mold-risk floor
        let v = calculate_vpd(Some(20.0), Some(90.0)).unwrap();
        assert!((v - 0.23).abs() < 0.05, "got {v}");
    }

    #[test]
    fn invalid_input_yields_none() {
        assert_eq!(calculate_vpd(None, Some(50.0)), None);
        assert_eq!(calculate_vpd(Some(20.0), None), None);
        assert_eq!(calculate_vpd(Some(f64::NAN), Some(50.0)), None);
        assert_eq!(calculate_vpd(Some(20.0), Some(120.0)), None);
        assert_eq!(calculate_vpd(Some(20.0), Some(-5.0)), None);
    }

    #[test]
    fn monotonic_in_temperature_at_fixed_humidity() {
        let mut last = f64::MIN;
        for t in 0..=40 {
            let v = calculate_vpd(Some(t as f64), Some(55.0)).unwrap();
            assert!(v >= last, "VPD fell from {last} to {v} at {t}C");
            last = v;
        }
    }

    #[test]
    fn non_increasing_in_humidity_at_fixed_temperature() {
        let mut last = f64::MAX;
        for h in 0..=100 {
            let v = calculate_vpd(Some(24.0), Some(h as f64)).unwrap();
            assert!(v <= last, "VPD rose from {last} to {v} at {h}%");
            last = v;
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(vpd_status(Some(0.39)), VpdBand::TooHumid);
        assert_eq!(vpd_status(Some(0.4)), VpdBand::Seedling);
        assert_eq!(vpd_status(Some(0.8)), VpdBand::Seedling);
        assert_eq!(vpd_status(Some(0.81)), VpdBand::Vegetative);
        assert_eq!(vpd_status(Some(1.2)), VpdBand::Vegetative);
        assert_eq!(vpd_status(Some(1.27)), VpdBand::Flowering);
        assert_eq!(vpd_status(Some(1.6)), VpdBand::Flowering);
        assert_eq!(vpd_status(Some(1.61)), VpdBand::TooDry);
    }

    #[test]
    fn unknown_band_for_missing_input() {
        assert_eq!(vpd_status(None), VpdBand::Unknown);
        assert_eq!(vpd_status(Some(f64::NAN)), VpdBand::Unknown);
    }

    #[test]
    fn idempotent() {
        let a = calculate_vpd(Some(22.5), Some(63.0));
        let b = calculate_vpd(Some(22.5), Some(63.0));
        assert_eq!(a, b);
    }
}
