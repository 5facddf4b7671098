//! Player commands.
//!
//! Each public command validates against the current state, mutates only
//! once every check has passed, advances time as the action requires, and
//! then logs any refusal and redraws.

mod crafting;
mod inventory;
mod movement;
mod rest;
mod scavenge;
