//! Procedural generation for Nightfall.
//!
//! [`world::generate`] builds the outdoor map: terrain, settlements, roads
//! and buildings. [`interior::generate`] builds a building's floors from
//! layout templates when the player first walks in. Both draw from an RNG
//! supplied by the caller, so a seeded RNG gives a reproducible world.

/// Generation tuning.
pub mod config;
/// Interior generation.
pub mod interior;
/// World generation.
pub mod world;

/// Re-export of [`config::WorldGenConfig`].
pub use config::{TierConfig, WorldGenConfig};
/// Re-exports of the interior generator entry points.
pub use interior::{find_stairs, generate_bunker};
/// Re-exports of the world generator entry points.
pub use world::place_bunker;
