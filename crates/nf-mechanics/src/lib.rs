//! Pure game rules for Nightfall.
//!
//! Derived stats, combat math, rest tiers and scavenging odds. Nothing in
//! this crate mutates game state or draws random numbers; the simulation
//! feeds it numbers and applies the results.

pub mod combat;
pub mod rest;
pub mod scavenge;
pub mod stats;

pub use combat::{Combatants, Exchange, Initiative, Wear, damage, exchange, wear};
pub use rest::{MIN_RESERVE, RestEffect, RestTier};
pub use stats::StatRules;
