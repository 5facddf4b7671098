//! Derived player stats.
//!
//! Nothing here is cached on the player: every value is recomputed from the
//! current equipment and skills whenever it is asked for.

use nf_core::item::Slot;
use nf_core::player::Player;
use nf_core::skill::SkillId;
use serde::{Deserialize, Serialize};

/// Tuning constants for derived stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRules {
    /// Unarmed attack.
    pub base_attack: i32,
    /// Attack added per Combat level (floored after multiplying).
    pub combat_bonus_per_level: f64,
    /// Carry capacity without a bag.
    pub base_capacity: f64,
    /// Sight radius during the day.
    pub day_vision: i32,
    /// Sight radius at night.
    pub night_vision: i32,
    /// Stamina per step on plain ground.
    pub base_move_cost: i32,
    /// Extra stamina per step while over capacity.
    pub encumbrance_penalty: i32,
}

impl Default for StatRules {
    fn default() -> Self {
        Self {
            base_attack: 4,
            combat_bonus_per_level: 0.5,
            base_capacity: 30.0,
            day_vision: 6,
            night_vision: 3,
            base_move_cost: 1,
            encumbrance_penalty: 2,
        }
    }
}

impl StatRules {
    /// Set the unarmed attack.
    pub fn with_base_attack(mut self, attack: i32) -> Self {
        self.base_attack = attack;
        self
    }

    /// Set the per-level Combat bonus.
    pub fn with_combat_bonus_per_level(mut self, bonus: f64) -> Self {
        self.combat_bonus_per_level = bonus;
        self
    }

    /// Set the carry capacity without a bag.
    pub fn with_base_capacity(mut self, capacity: f64) -> Self {
        self.base_capacity = capacity;
        self
    }
}

/// Total attack: base, weapon, and Combat skill.
pub fn attack(player: &Player, rules: &StatRules) -> i32 {
    let weapon = player.equipped_def(Slot::Weapon).map_or(0, |d| d.attack);
    let lvl = player.skills.level(SkillId::Combat) as f64;
    let skill = (lvl * rules.combat_bonus_per_level).floor() as i32;
    rules.base_attack + weapon + skill
}

/// Total defence from worn gear.
pub fn defense(player: &Player) -> i32 {
    Slot::ALL
        .into_iter()
        .filter_map(|s| player.equipped_def(s))
        .map(|d| d.defense)
        .sum()
}

/// Sight radius, including any light source in the tool slot.
pub fn vision(player: &Player, rules: &StatRules, is_night: bool) -> i32 {
    let base = if is_night { rules.night_vision } else { rules.day_vision };
    base + player.equipped_def(Slot::Tool).map_or(0, |d| d.vision)
}

/// Total carried weight.
pub fn weight(player: &Player) -> f64 {
    player
        .inv
        .items()
        .iter()
        .filter_map(|i| i.def().map(|d| d.weight * i.qty as f64))
        .sum()
}

/// Carry capacity, including an equipped bag.
pub fn capacity(player: &Player, rules: &StatRules) -> f64 {
    rules.base_capacity + player.equipped_def(Slot::Back).map_or(0.0, |d| d.carry)
}

/// True when carrying more than the capacity.
pub fn is_encumbered(player: &Player, rules: &StatRules) -> bool {
    weight(player) > capacity(player, rules)
}

/// Stamina cost of one step onto a tile with `tile_extra` extra cost. Never negative.
pub fn move_cost(player: &Player, rules: &StatRules, tile_extra: i32) -> i32 {
    let feet = player.equipped_def(Slot::Feet).map_or(0, |d| d.move_bonus);
    let penalty = if is_encumbered(player, rules) {
        rules.encumbrance_penalty
    } else {
        0
    };
    (rules.base_move_cost + tile_extra - feet + penalty).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::geom::Position;
    use nf_core::item::item_def;
    use nf_core::player::Location;

    fn player() -> Player {
        Player::new(Position::new(0, 0), Position::new(0, 0), Location::World)
    }

    fn equip(p: &mut Player, id: &str) {
        let def = item_def(id).unwrap();
        let uid = p.inv.add(def, 1)[0];
        p.equip.set(def.slot.unwrap(), Some(uid));
    }

    #[test]
    fn unarmed_attack_is_base() {
        assert_eq!(attack(&player(), &StatRules::default()), 4);
    }

    #[test]
    fn attack_adds_weapon_and_floored_skill() {
        let mut p = player();
        equip(&mut p, "machete");
        // 20 + 35 + 50 xp reaches level 3; 3 * 0.5 floors to 1
        p.skills.gain(SkillId::Combat, 105);
        assert_eq!(p.skills.level(SkillId::Combat), 3);
        assert_eq!(attack(&p, &StatRules::default()), 4 + 10 + 1);
    }

    #[test]
    fn defense_sums_body_and_feet() {
        let mut p = player();
        equip(&mut p, "riot_vest");
        equip(&mut p, "boots");
        assert_eq!(defense(&p), 6);
    }

    #[test]
    fn flashlight_extends_vision() {
        let rules = StatRules::default();
        let mut p = player();
        assert_eq!(vision(&p, &rules, true), 3);
        equip(&mut p, "flashlight");
        assert_eq!(vision(&p, &rules, true), 6);
        assert_eq!(vision(&p, &rules, false), 9);
    }

    #[test]
    fn encumbrance_raises_move_cost() {
        let rules = StatRules::default();
        let mut p = player();
        assert_eq!(move_cost(&p, &rules, 0), 1);
        p.inv.add(item_def("stone").unwrap(), 60);
        assert!(is_encumbered(&p, &rules));
        assert_eq!(move_cost(&p, &rules, 1), 4);
        equip(&mut p, "backpack");
        assert!(!is_encumbered(&p, &rules));
    }

    #[test]
    fn footwear_never_makes_cost_negative() {
        let rules = StatRules::default();
        let mut p = player();
        equip(&mut p, "sneakers");
        assert_eq!(move_cost(&p, &rules, 0), 0);
    }

    #[test]
    fn rules_deserialize_with_defaults() {
        let rules: StatRules = serde_json::from_str(r#"{"base_attack": 7}"#).unwrap();
        assert_eq!(rules.base_attack, 7);
        assert_eq!(rules.day_vision, 6);
    }
}
