//! Resting tiers.

use nf_core::player::Stats;
use serde::Serialize;

/// Food and water both need to be above this to rest at all.
pub const MIN_RESERVE: f64 = 10.0;

/// How well the player can rest where they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RestTier {
    /// Out in the open. Refused with a zombie next to the player.
    Rough,
    /// Indoors.
    Shelter,
    /// In a bed or tent.
    Bed,
}

/// What one rest restores and how long it takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestEffect {
    /// Stamina restored.
    pub stm: f64,
    /// Health restored.
    pub hp: f64,
    /// Ticks that pass.
    pub ticks: u32,
}

impl RestTier {
    /// Restoration and duration for this tier.
    pub fn effect(self) -> RestEffect {
        match self {
            Self::Rough => RestEffect {
                stm: 20.0,
                hp: 2.0,
                ticks: 3,
            },
            Self::Shelter => RestEffect {
                stm: 35.0,
                hp: 5.0,
                ticks: 4,
            },
            Self::Bed => RestEffect {
                stm: 60.0,
                hp: 15.0,
                ticks: 6,
            },
        }
    }

    /// Short description for the message log.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Rough => "You rest fitfully out in the open.",
            Self::Shelter => "You rest in the shelter of four walls.",
            Self::Bed => "You sleep soundly.",
        }
    }
}

/// True if food and water are high enough to rest.
pub fn has_reserve(stats: &Stats) -> bool {
    stats.food >= MIN_RESERVE && stats.h2o >= MIN_RESERVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn better_tiers_restore_more() {
        let rough = RestTier::Rough.effect();
        let shelter = RestTier::Shelter.effect();
        let bed = RestTier::Bed.effect();
        assert!(rough.stm < shelter.stm && shelter.stm < bed.stm);
        assert!(rough.hp < shelter.hp && shelter.hp < bed.hp);
        assert!(bed.ticks >= 1);
    }

    #[test]
    fn reserve_needs_both_food_and_water() {
        let mut stats = Stats::default();
        assert!(has_reserve(&stats));
        stats.h2o = 9.5;
        assert!(!has_reserve(&stats));
    }
}
