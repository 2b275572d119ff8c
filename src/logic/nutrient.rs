/// Nutrients chemically unavailable at the given solution pH.
///
/// Bucket table from the standard hydroponic availability chart. Returns
/// `None` for missing pH and for the 5.5-6.5 sweet spot where everything
/// stays soluble.
pub fn nutrient_lockout(ph: Option<f64>) -> Option<&'static [&'static str]> {
    const STRONG_ACID: &[&str] = &["Calcium", "Magnesium", "Potassium"];
    const MILD_ACID: &[&str] = &["Calcium", "Magnesium"];
    const MILD_ALKALINE: &[&str] = &["Iron", "Manganese"];
    const STRONG_ALKALINE: &[&str] = &["Iron", "Manganese", "Boron", "Copper", "Zinc"];

    let ph = ph.filter(|v| v.is_finite())?;

    if ph < 5.0 {
        Some(STRONG_ACID)
    } else if ph < 5.5 {
        Some(MILD_ACID)
    } else if ph <= 6.5 {
        None
    } else if ph <= 7.0 {
        Some(MILD_ALKALINE)
    } else {
        Some(STRONG_ALKALINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweet_spot_has_no_lockout() {
        assert_eq!(nutrient_lockout(Some(5.5)), None);
        assert_eq!(nutrient_lockout(Some(6.0)), None);
        assert_eq!(nutrient_lockout(Some(6.5)), None);
    }

    #[test]
    fn iron_locks_above_six_and_a_half() {
        let blocked = nutrient_lockout(Some(6.6)).unwrap();
        assert!(blocked.contains(&"Iron"));
    }

    #[test]
    fn alkaline_extends_the_lockout_list() {
        let mild = nutrient_lockout(Some(6.8)).unwrap();
        let strong = nutrient_lockout(Some(7.4)).unwrap();
        assert!(strong.len() > mild.len());
        assert!(strong.contains(&"Zinc"));
    }

    #[test]
    fn acid_locks_cations() {
        let blocked = nutrient_lockout(Some(4.6)).unwrap();
        assert!(blocked.contains(&"Calcium"));
        assert!(blocked.contains(&"Potassium"));

        let blocked = nutrient_lockout(Some(5.2)).unwrap();
        assert!(blocked.contains(&"Calcium"));
        assert!(!blocked.contains(&"Potassium"));
    }

    #[test]
    fn missing_ph_is_none() {
        assert_eq!(nutrient_lockout(None), None);
        assert_eq!(nutrient_lockout(Some(f64::NAN)), None);
    }
}
