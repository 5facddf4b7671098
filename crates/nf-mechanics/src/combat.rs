//! Combat math between the player and a single zombie.
//!
//! These functions only compute numbers. Applying them to game state
//! (removing dead zombies, wearing gear, killing the player) is the
//! simulation's job.

use serde::Serialize;

/// Damage dealt by an attack. Always at least 1.
pub fn damage(atk: i32, def: i32) -> i32 {
    (atk - def).max(1)
}

/// Who strikes first in an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Initiative {
    /// The player attacked.
    Player,
    /// The zombie ambushed the player.
    Zombie,
}

/// Numbers needed to resolve one exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combatants {
    /// Player health before the exchange.
    pub player_hp: f64,
    /// Player attack.
    pub player_atk: i32,
    /// Player defence.
    pub player_def: i32,
    /// Zombie health before the exchange.
    pub zombie_hp: i32,
    /// Zombie attack.
    pub zombie_atk: i32,
    /// Zombie defence.
    pub zombie_def: i32,
}

/// Result of one exchange of blows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exchange {
    /// Damage the player dealt, if the player got to strike.
    pub player_dealt: Option<i32>,
    /// Damage the zombie dealt, if the zombie got to strike.
    pub zombie_dealt: Option<i32>,
    /// The zombie's health reached zero.
    pub zombie_killed: bool,
    /// The player's health reached zero.
    pub player_killed: bool,
}

/// Resolve one exchange. The second striker only acts if it survived the
/// first blow.
pub fn exchange(initiative: Initiative, c: Combatants) -> Exchange {
    let player_strike = damage(c.player_atk, c.zombie_def);
    let zombie_strike = damage(c.zombie_atk, c.player_def);
    let mut out = Exchange {
        player_dealt: None,
        zombie_dealt: None,
        zombie_killed: false,
        player_killed: false,
    };
    match initiative {
        Initiative::Player => {
            out.player_dealt = Some(player_strike);
            out.zombie_killed = c.zombie_hp - player_strike <= 0;
            if !out.zombie_killed {
                out.zombie_dealt = Some(zombie_strike);
                out.player_killed = c.player_hp - zombie_strike as f64 <= 0.0;
            }
        }
        Initiative::Zombie => {
            out.zombie_dealt = Some(zombie_strike);
            out.player_killed = c.player_hp - zombie_strike as f64 <= 0.0;
            if !out.player_killed {
                out.player_dealt = Some(player_strike);
                out.zombie_killed = c.zombie_hp - player_strike <= 0;
            }
        }
    }
    out
}

/// Outcome of wearing down a degradable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wear {
    /// Still usable with this much durability left.
    Intact(i32),
    /// Durability hit zero; the item is destroyed.
    Broken,
}

/// Wear an item by `amount`. Items without durability never wear.
pub fn wear(durability: Option<i32>, amount: i32) -> Option<Wear> {
    let left = durability? - amount;
    Some(if left <= 0 { Wear::Broken } else { Wear::Intact(left) })
}
