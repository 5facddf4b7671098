//! Crafting recipes.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::item::ItemId;
use crate::skill::SkillId;

/// A crafting station that must be nearby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Station {
    /// A campfire on or next to the player's world tile.
    Campfire,
    /// A workbench next to the player indoors.
    Workbench,
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Campfire => write!(f, "campfire"),
            Self::Workbench => write!(f, "workbench"),
        }
    }
}

/// A crafting recipe.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    /// Unique id.
    pub id: &'static str,
    /// Item produced.
    pub result: ItemId,
    /// Units produced.
    pub qty: u32,
    /// Minimum skill level required.
    pub skill: Option<(SkillId, u32)>,
    /// Tool that must be equipped.
    pub tool: Option<ItemId>,
    /// Station that must be nearby.
    pub station: Option<Station>,
    /// Consumed inputs.
    pub materials: &'static [(ItemId, u32)],
    /// Experience granted.
    pub xp: (SkillId, u32),
}

/// Every recipe.
pub const RECIPES: &[Recipe] = &[
    Recipe {
        id: "plank",
        result: "plank",
        qty: 2,
        skill: None,
        tool: Some("saw"),
        station: None,
        materials: &[("wood", 2)],
        xp: (SkillId::Carpentry, 5),
    },
    Recipe {
        id: "rope",
        result: "rope",
        qty: 1,
        skill: None,
        tool: None,
        station: None,
        materials: &[("plant_fiber", 3)],
        xp: (SkillId::Survival, 4),
    },
    Recipe {
        id: "bandage",
        result: "bandage",
        qty: 1,
        skill: None,
        tool: None,
        station: None,
        materials: &[("cloth", 2)],
        xp: (SkillId::Survival, 3),
    },
    Recipe {
        id: "spear",
        result: "spear",
        qty: 1,
        skill: None,
        tool: None,
        station: None,
        materials: &[("wood", 1), ("rope", 1), ("stone", 1)],
        xp: (SkillId::Survival, 6),
    },
    Recipe {
        id: "campfire",
        result: "campfire",
        qty: 1,
        skill: None,
        tool: None,
        station: None,
        materials: &[("wood", 3), ("stone", 2)],
        xp: (SkillId::Survival, 5),
    },
    Recipe {
        id: "clean_water",
        result: "water_bottle",
        qty: 1,
        skill: None,
        tool: None,
        station: Some(Station::Campfire),
        materials: &[("dirty_water", 1)],
        xp: (SkillId::Survival, 3),
    },
    Recipe {
        id: "bedroll",
        result: "bedroll",
        qty: 1,
        skill: None,
        tool: None,
        station: None,
        materials: &[("cloth", 3), ("rope", 1)],
        xp: (SkillId::Survival, 5),
    },
    Recipe {
        id: "padded_armor",
        result: "padded_armor",
        qty: 1,
        skill: None,
        tool: None,
        station: None,
        materials: &[("cloth", 4), ("duct_tape", 1)],
        xp: (SkillId::Survival, 6),
    },
    Recipe {
        id: "tent",
        result: "tent",
        qty: 1,
        skill: Some((SkillId::Survival, 1)),
        tool: None,
        station: None,
        materials: &[("cloth", 4), ("rope", 2), ("wood", 2)],
        xp: (SkillId::Survival, 10),
    },
    Recipe {
        id: "workbench",
        result: "workbench",
        qty: 1,
        skill: Some((SkillId::Carpentry, 1)),
        tool: Some("hammer"),
        station: None,
        materials: &[("plank", 4), ("nails", 4)],
        xp: (SkillId::Carpentry, 10),
    },
    Recipe {
        id: "storage_box",
        result: "storage_box",
        qty: 1,
        skill: Some((SkillId::Carpentry, 1)),
        tool: Some("hammer"),
        station: Some(Station::Workbench),
        materials: &[("plank", 3), ("nails", 2)],
        xp: (SkillId::Carpentry, 8),
    },
    Recipe {
        id: "spiked_bat",
        result: "spiked_bat",
        qty: 1,
        skill: Some((SkillId::Carpentry, 2)),
        tool: Some("hammer"),
        station: Some(Station::Workbench),
        materials: &[("bat", 1), ("nails", 4)],
        xp: (SkillId::Carpentry, 12),
    },
];

/// Look up a recipe by id.
pub fn recipe(id: &str) -> CoreResult<&'static Recipe> {
    let key = id.trim().to_lowercase().replace(' ', "_");
    RECIPES
        .iter()
        .find(|r| r.id == key)
        .ok_or_else(|| CoreError::UnknownRecipe(id.to_string()))
}
