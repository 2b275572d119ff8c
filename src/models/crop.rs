use serde::{Deserialize, Serialize};

/// Inclusive optimal range for a measured value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance outside the range, zero when inside.
    pub fn excess(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    Dwc,
    Nft,
    EbbFlow,
    Drip,
    Kratky,
    MicrogreensTray,
}

impl SystemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemType::Dwc => "Deep Water Culture",
            SystemType::Nft => "NFT",
            SystemType::EbbFlow => "Ebb & Flow",
            SystemType::Drip => "Drip",
            SystemType::Kratky => "Kratky",
            SystemType::MicrogreensTray => "Microgreens Tray",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dwc" | "deep water culture" | "deepwaterculture" => Some(SystemType::Dwc),
            "nft" | "nutrient film" => Some(SystemType::Nft),
            "ebbflow" | "ebb & flow" | "ebb and flow" | "flood and drain" => {
                Some(SystemType::EbbFlow)
            }
            "drip" => Some(SystemType::Drip),
            "kratky" => Some(SystemType::Kratky),
            "microgreens" | "microgreenstray" | "microgreens tray" | "tray" => {
                Some(SystemType::MicrogreensTray)
            }
            _ => None,
        }
    }

    /// Actively aerated systems live or die by dissolved oxygen. Kratky
    /// relies on a passive air gap and trays have no reservoir at all.
    pub fn relies_on_dissolved_oxygen(&self) -> bool {
        matches!(
            self,
            SystemType::Dwc | SystemType::Nft | SystemType::EbbFlow | SystemType::Drip
        )
    }

    pub fn has_reservoir(&self) -> bool {
        !matches!(self, SystemType::MicrogreensTray)
    }
}

impl std::fmt::Display for SystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static reference data for one crop: optimal ranges plus degree-day
/// parameters for harvest forecasting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub ph: Range,
    pub ec_ms_cm: Range,
    pub temp_c: Range,
    pub humidity_pct: Range,
    pub vpd_kpa: Range,
    /// Base temperature for growing-degree-day accumulation.
    pub base_temp_c: f64,
    /// Cumulative GDD at which the crop is ready to harvest.
    pub target_gdd: f64,
    pub light_hours_min: f64,
}

const PROFILES: &[CropProfile] = &[
    CropProfile {
        name: "Lettuce",
        ph: Range::new(5.5, 6.2),
        ec_ms_cm: Range::new(0.8, 1.8),
        temp_c: Range::new(15.0, 22.0),
        humidity_pct: Range::new(50.0, 70.0),
        vpd_kpa: Range::new(0.6, 1.0),
        base_temp_c: 4.0,
        target_gdd: 550.0,
        light_hours_min: 12.0,
    },
    CropProfile {
        name: "Basil",
        ph: Range::new(5.5, 6.5),
        ec_ms_cm: Range::new(1.0, 1.6),
        temp_c: Range::new(18.0, 27.0),
        humidity_pct: Range::new(45.0, 65.0),
        vpd_kpa: Range::new(0.8, 1.2),
        base_temp_c: 10.0,
        target_gdd: 450.0,
        light_hours_min: 14.0,
    },
    CropProfile {
        name: "Spinach",
        ph: Range::new(5.8, 6.6),
        ec_ms_cm: Range::new(1.2, 2.0),
        temp_c: Range::new(13.0, 21.0),
        humidity_pct: Range::new(45.0, 65.0),
        vpd_kpa: Range::new(0.6, 1.0),
        base_temp_c: 2.0,
        target_gdd: 480.0,
        light_hours_min: 12.0,
    },
    CropProfile {
        name: "Kale",
        ph: Range::new(5.5, 6.5),
        ec_ms_cm: Range::new(1.2, 2.2),
        temp_c: Range::new(13.0, 23.0),
        humidity_pct: Range::new(45.0, 70.0),
        vpd_kpa: Range::new(0.7, 1.1),
        base_temp_c: 4.0,
        target_gdd: 600.0,
        light_hours_min: 12.0,
    },
    CropProfile {
        name: "Arugula",
        ph: Range::new(6.0, 7.0),
        ec_ms_cm: Range::new(0.8, 1.5),
        temp_c: Range::new(10.0, 21.0),
        humidity_pct: Range::new(45.0, 65.0),
        vpd_kpa: Range::new(0.6, 1.0),
        base_temp_c: 4.0,
        target_gdd: 380.0,
        light_hours_min: 10.0,
    },
    CropProfile {
        name: "Tomato",
        ph: Range::new(5.5, 6.5),
        ec_ms_cm: Range::new(2.0, 3.5),
        temp_c: Range::new(18.0, 27.0),
        humidity_pct: Range::new(55.0, 75.0),
        vpd_kpa: Range::new(0.8, 1.4),
        base_temp_c: 10.0,
        target_gdd: 1100.0,
        light_hours_min: 14.0,
    },
    CropProfile {
        name: "Strawberry",
        ph: Range::new(5.5, 6.2),
        ec_ms_cm: Range::new(1.0, 1.4),
        temp_c: Range::new(15.0, 26.0),
        humidity_pct: Range::new(60.0, 75.0),
        vpd_kpa: Range::new(0.7, 1.2),
        base_temp_c: 7.0,
        target_gdd: 900.0,
        light_hours_min: 12.0,
    },
    CropProfile {
        name: "Microgreens",
        ph: Range::new(5.5, 6.5),
        ec_ms_cm: Range::new(0.5, 1.2),
        temp_c: Range::new(18.0, 24.0),
        humidity_pct: Range::new(40.0, 60.0),
        vpd_kpa: Range::new(0.8, 1.2),
        base_temp_c: 8.0,
        target_gdd: 140.0,
        light_hours_min: 12.0,
    },
];

/// Neutral fallback when a crop name is unknown. Wide ranges so unknown
/// crops score on the universal thresholds rather than a wrong profile.
const DEFAULT_PROFILE: CropProfile = CropProfile {
    name: "Generic",
    ph: Range::new(5.5, 6.5),
    ec_ms_cm: Range::new(0.8, 2.5),
    temp_c: Range::new(15.0, 26.0),
    humidity_pct: Range::new(40.0, 70.0),
    vpd_kpa: Range::new(0.8, 1.2),
    base_temp_c: 8.0,
    target_gdd: 600.0,
    light_hours_min: 12.0,
};

impl CropProfile {
    pub fn lookup(name: &str) -> Option<&'static CropProfile> {
        PROFILES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn lookup_or_default(name: &str) -> &'static CropProfile {
        Self::lookup(name).unwrap_or(&DEFAULT_PROFILE)
    }

    pub fn default_profile() -> &'static CropProfile {
        &DEFAULT_PROFILE
    }

    pub fn all() -> &'static [CropProfile] {
        PROFILES
    }
}
