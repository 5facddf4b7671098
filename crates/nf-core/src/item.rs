//! Item definitions.
//!
//! Items are identified by a static string id (`"canned_food"`, `"axe"`, ...)
//! that indexes into [`ITEMS`]. Inventory entries only ever hold ids that
//! came from this table.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::interior::InteriorTile;
use crate::tile::Tile;

/// A static item identifier.
pub type ItemId = &'static str;

/// Broad item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    /// Eaten to restore food.
    Food,
    /// Drunk to restore water.
    Drink,
    /// Restores health.
    Medicine,
    /// Crafting input.
    Material,
    /// Equippable in the weapon slot.
    Weapon,
    /// Equippable in the tool slot.
    Tool,
    /// Body armour.
    Armor,
    /// Footwear.
    Footwear,
    /// Bags that raise carry capacity.
    Bag,
    /// Consumed to build a structure on a tile.
    Placeable,
}

/// The five equipment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    /// Held weapon.
    Weapon,
    /// Held tool.
    Tool,
    /// Worn on the body.
    Body,
    /// Worn on the feet.
    Feet,
    /// Carried on the back.
    Back,
}

impl Slot {
    /// All slots in display order.
    pub const ALL: [Slot; 5] = [Slot::Weapon, Slot::Tool, Slot::Body, Slot::Feet, Slot::Back];

    /// Parse a slot name.
    pub fn parse(s: &str) -> Option<Slot> {
        match s.to_lowercase().as_str() {
            "weapon" => Some(Self::Weapon),
            "tool" => Some(Self::Tool),
            "body" | "armor" | "armour" => Some(Self::Body),
            "feet" | "shoes" => Some(Self::Feet),
            "back" | "bag" => Some(Self::Back),
            _ => None,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Tool => write!(f, "tool"),
            Self::Body => write!(f, "body"),
            Self::Feet => write!(f, "feet"),
            Self::Back => write!(f, "back"),
        }
    }
}

/// Where a placeable item may be built and what it turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Replaces the current world tile.
    World(Tile),
    /// Replaces an interior floor tile next to the player.
    Interior(InteriorTile),
}

/// Stat changes applied when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Restore {
    /// Health delta.
    pub hp: f64,
    /// Stamina delta.
    pub stm: f64,
    /// Food delta.
    pub food: f64,
    /// Water delta.
    pub h2o: f64,
}

impl Restore {
    /// No effect.
    pub const NONE: Restore = Restore {
        hp: 0.0,
        stm: 0.0,
        food: 0.0,
        h2o: 0.0,
    };

    /// True if using the item changes any stat.
    pub fn is_some(&self) -> bool {
        *self != Self::NONE
    }
}

/// Static definition of an item.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    /// Unique id.
    pub id: ItemId,
    /// Display name.
    pub name: &'static str,
    /// Category.
    pub kind: ItemKind,
    /// Weight per unit.
    pub weight: f64,
    /// Whether units merge into a single stack.
    pub stackable: bool,
    /// Equipment slot, if equippable.
    pub slot: Option<Slot>,
    /// Attack bonus while equipped.
    pub attack: i32,
    /// Defence bonus while equipped.
    pub defense: i32,
    /// Starting durability for degradable gear.
    pub durability: Option<i32>,
    /// Effect when used.
    pub restore: Restore,
    /// Vision bonus while equipped.
    pub vision: i32,
    /// Carry capacity bonus while equipped.
    pub carry: f64,
    /// Stamina saved per step while equipped.
    pub move_bonus: i32,
    /// Structure produced when placed.
    pub placement: Option<Placement>,
}

const BASE: ItemDef = ItemDef {
    id: "",
    name: "",
    kind: ItemKind::Material,
    weight: 0.0,
    stackable: false,
    slot: None,
    attack: 0,
    defense: 0,
    durability: None,
    restore: Restore::NONE,
    vision: 0,
    carry: 0.0,
    move_bonus: 0,
    placement: None,
};

const fn consumable(
    id: ItemId,
    name: &'static str,
    kind: ItemKind,
    weight: f64,
    restore: Restore,
) -> ItemDef {
    ItemDef {
        id,
        name,
        kind,
        weight,
        stackable: true,
        restore,
        ..BASE
    }
}

const fn material(id: ItemId, name: &'static str, weight: f64) -> ItemDef {
    ItemDef {
        id,
        name,
        weight,
        stackable: true,
        ..BASE
    }
}

const fn weapon(id: ItemId, name: &'static str, weight: f64, attack: i32, durability: i32) -> ItemDef {
    ItemDef {
        id,
        name,
        kind: ItemKind::Weapon,
        weight,
        slot: Some(Slot::Weapon),
        attack,
        durability: Some(durability),
        ..BASE
    }
}

const fn tool(id: ItemId, name: &'static str, weight: f64, durability: i32) -> ItemDef {
    ItemDef {
        id,
        name,
        kind: ItemKind::Tool,
        weight,
        slot: Some(Slot::Tool),
        durability: Some(durability),
        ..BASE
    }
}

const fn armor(id: ItemId, name: &'static str, weight: f64, defense: i32, durability: i32) -> ItemDef {
    ItemDef {
        id,
        name,
        kind: ItemKind::Armor,
        weight,
        slot: Some(Slot::Body),
        defense,
        durability: Some(durability),
        ..BASE
    }
}

const fn footwear(id: ItemId, name: &'static str, weight: f64, defense: i32, move_bonus: i32) -> ItemDef {
    ItemDef {
        id,
        name,
        kind: ItemKind::Footwear,
        weight,
        slot: Some(Slot::Feet),
        defense,
        move_bonus,
        ..BASE
    }
}

const fn bag(id: ItemId, name: &'static str, weight: f64, carry: f64) -> ItemDef {
    ItemDef {
        id,
        name,
        kind: ItemKind::Bag,
        weight,
        slot: Some(Slot::Back),
        carry,
        ..BASE
    }
}

const fn placeable(id: ItemId, name: &'static str, weight: f64, placement: Placement) -> ItemDef {
    ItemDef {
        id,
        name,
        kind: ItemKind::Placeable,
        weight,
        placement: Some(placement),
        ..BASE
    }
}

const fn restore(hp: f64, stm: f64, food: f64, h2o: f64) -> Restore {
    Restore { hp, stm, food, h2o }
}

/// Every item in the game.
pub const ITEMS: &[ItemDef] = &[
    // Food and drink
    consumable("canned_food", "Canned Food", ItemKind::Food, 0.5, restore(0.0, 0.0, 30.0, 0.0)),
    consumable("crackers", "Crackers", ItemKind::Food, 0.2, restore(0.0, 0.0, 12.0, -2.0)),
    consumable("berries", "Wild Berries", ItemKind::Food, 0.1, restore(0.0, 0.0, 8.0, 2.0)),
    consumable("energy_bar", "Energy Bar", ItemKind::Food, 0.2, restore(0.0, 10.0, 15.0, 0.0)),
    consumable("water_bottle", "Water Bottle", ItemKind::Drink, 0.5, restore(0.0, 0.0, 0.0, 35.0)),
    consumable("dirty_water", "Dirty Water", ItemKind::Drink, 0.5, restore(-5.0, 0.0, 0.0, 20.0)),
    consumable("soda", "Soda", ItemKind::Drink, 0.4, restore(0.0, 5.0, 0.0, 15.0)),
    // Medicine
    consumable("bandage", "Bandage", ItemKind::Medicine, 0.1, restore(15.0, 0.0, 0.0, 0.0)),
    consumable("medkit", "Medkit", ItemKind::Medicine, 1.0, restore(40.0, 0.0, 0.0, 0.0)),
    consumable("painkillers", "Painkillers", ItemKind::Medicine, 0.1, restore(8.0, 10.0, 0.0, 0.0)),
    // Materials
    material("wood", "Wood", 1.0),
    material("plank", "Plank", 0.8),
    material("nails", "Nails", 0.05),
    material("scrap_metal", "Scrap Metal", 0.7),
    material("cloth", "Cloth", 0.2),
    material("plant_fiber", "Plant Fiber", 0.05),
    material("stone", "Stone", 0.6),
    material("rope", "Rope", 0.3),
    material("duct_tape", "Duct Tape", 0.2),
    // Weapons
    weapon("knife", "Kitchen Knife", 0.3, 4, 40),
    weapon("bat", "Baseball Bat", 1.2, 6, 50),
    weapon("pipe", "Lead Pipe", 1.5, 7, 60),
    weapon("spear", "Spear", 1.0, 8, 35),
    weapon("axe", "Fire Axe", 2.0, 9, 60),
    weapon("spiked_bat", "Spiked Bat", 1.4, 9, 60),
    weapon("machete", "Machete", 1.0, 10, 70),
    // Tools
    tool("hammer", "Hammer", 1.0, 80),
    tool("crowbar", "Crowbar", 1.5, 100),
    tool("saw", "Saw", 0.8, 80),
    ItemDef {
        vision: 3,
        ..tool("flashlight", "Flashlight", 0.4, 200)
    },
    // Wearables
    armor("jacket", "Leather Jacket", 1.5, 2, 60),
    armor("padded_armor", "Padded Armor", 3.0, 3, 50),
    armor("riot_vest", "Riot Vest", 4.0, 5, 100),
    footwear("sneakers", "Sneakers", 0.6, 0, 1),
    footwear("boots", "Work Boots", 1.2, 1, 1),
    bag("duffel_bag", "Duffel Bag", 0.8, 12.0),
    bag("backpack", "Backpack", 1.0, 20.0),
    // Placeables
    placeable("campfire", "Campfire Kit", 4.0, Placement::World(Tile::Campfire)),
    placeable("tent", "Tent", 5.0, Placement::World(Tile::Tent)),
    placeable("workbench", "Workbench", 10.0, Placement::Interior(InteriorTile::Workbench)),
    placeable("bedroll", "Bedroll", 2.0, Placement::Interior(InteriorTile::Bed)),
    placeable("storage_box", "Storage Box", 6.0, Placement::Interior(InteriorTile::Crate)),
];

/// Look up an item by id.
pub fn item_def(id: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|d| d.id == id)
}

/// Look up an item by id or case-insensitive display name.
pub fn find_item(query: &str) -> CoreResult<&'static ItemDef> {
    let q = query.trim().to_lowercase();
    let underscored = q.replace(' ', "_");
    ITEMS
        .iter()
        .find(|d| d.id == underscored || d.name.to_lowercase() == q)
        .ok_or_else(|| CoreError::UnknownItem(query.to_string()))
}
