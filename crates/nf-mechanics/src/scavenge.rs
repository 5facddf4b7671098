//! Scavenging odds and skill-gated activities.

/// Chance that one scavenge or search attempt finds something.
pub fn find_chance(scavenging_level: u32) -> f64 {
    (0.55 + 0.04 * scavenging_level as f64).min(0.95)
}

/// Barricade strength added by one barricading action.
pub fn barricade_strength(carpentry_level: u32) -> i32 {
    20 + 5 * carpentry_level as i32
}

/// Extra salvage units recovered at higher Carpentry levels.
pub fn salvage_bonus(carpentry_level: u32) -> u32 {
    carpentry_level / 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_grows_and_caps() {
        assert!((find_chance(0) - 0.55).abs() < 1e-9);
        assert!(find_chance(5) > find_chance(0));
        assert!((find_chance(10) - 0.95).abs() < 1e-9);
        assert!((find_chance(50) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn barricades_scale_with_carpentry() {
        assert_eq!(barricade_strength(0), 20);
        assert_eq!(barricade_strength(4), 40);
        assert_eq!(salvage_bonus(2), 0);
        assert_eq!(salvage_bonus(6), 2);
    }
}
