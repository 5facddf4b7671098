//! Core types for Nightfall: grids, tiles, items, enemies, recipes, and the
//! player model.
//!
//! Everything here is plain data plus the static content tables that the
//! generators and the simulation read from. Nothing in this crate advances
//! time or draws random numbers on its own, apart from [`weighted_pick`],
//! which takes its RNG from the caller.

/// Enemy definitions and zombie instances.
pub mod enemy;
/// Error types used throughout the crate.
pub mod error;
/// Positions and cardinal directions.
pub mod geom;
/// Fixed-size row-major grid.
pub mod grid;
/// Interior tiles, cells, floors and buildings.
pub mod interior;
/// Item instances and the player's inventory.
pub mod inventory;
/// Item definitions.
pub mod item;
/// Weighted loot tables.
pub mod loot;
/// The player model.
pub mod player;
/// Crafting recipes.
pub mod recipe;
/// Skills and experience.
pub mod skill;
/// Interior layout templates.
pub mod templates;
/// World tiles and building types.
pub mod tile;
/// Generic weighted random selection.
pub mod weighted;
/// The outdoor world map.
pub mod world;

/// Re-export enemy types.
pub use enemy::{EnemyDef, EnemyKind, Zombie};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export geometry types.
pub use geom::{Direction, Position};
/// Re-export the grid.
pub use grid::Grid;
/// Re-export interior types.
pub use interior::{Building, BuildingId, Floor, InteriorCell, InteriorTile};
/// Re-export inventory types.
pub use inventory::{InvItem, Inventory, ItemStack, ItemUid};
/// Re-export item types.
pub use item::{ItemDef, ItemId, ItemKind, Placement, Restore, Slot, find_item, item_def};
/// Re-export loot tables.
pub use loot::LootTable;
/// Re-export player types.
pub use player::{Equipment, Location, Player, Stats};
/// Re-export recipe types.
pub use recipe::{Recipe, Station, recipe};
/// Re-export skill types.
pub use skill::{SkillId, Skills};
/// Re-export tile types.
pub use tile::{BuildingType, StairDirection, Tile};
/// Re-export weighted selection.
pub use weighted::weighted_pick;
/// Re-export world types.
pub use world::{Settlement, SettlementTier, WorldCell, WorldMap};
