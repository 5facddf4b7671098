//! Weighted loot tables.

use serde::Serialize;

use crate::item::ItemId;

/// Identifies a loot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LootTable {
    /// Open grassland.
    Grass,
    /// Woodland.
    Forest,
    /// Roadside debris.
    Road,
    /// Around the outside of a building.
    Yard,
    /// Homes and apartments.
    Residential,
    /// Shops and supermarkets.
    Grocery,
    /// Pharmacies and hospitals.
    Medical,
    /// Police stations.
    Police,
    /// Warehouses.
    Industrial,
    /// Farmhouses and cabins.
    Rural,
    /// Churches and schools.
    Civic,
    /// Fridges.
    Kitchen,
    /// Lockers.
    Gear,
    /// The starting bunker.
    Bunker,
}

impl LootTable {
    /// Weighted item entries for this table.
    pub fn entries(self) -> &'static [(ItemId, u32)] {
        match self {
            Self::Grass => &[("plant_fiber", 6), ("stone", 3), ("berries", 2)],
            Self::Forest => &[("wood", 6), ("berries", 4), ("plant_fiber", 3), ("stone", 2)],
            Self::Road => &[
                ("scrap_metal", 4),
                ("stone", 2),
                ("dirty_water", 2),
                ("cloth", 1),
                ("nails", 1),
            ],
            Self::Yard => &[
                ("wood", 3),
                ("scrap_metal", 3),
                ("dirty_water", 2),
                ("cloth", 2),
                ("rope", 1),
            ],
            Self::Residential => &[
                ("canned_food", 5),
                ("water_bottle", 5),
                ("cloth", 4),
                ("crackers", 4),
                ("soda", 3),
                ("bandage", 3),
                ("painkillers", 2),
                ("duct_tape", 2),
                ("jacket", 1),
                ("sneakers", 1),
                ("bat", 1),
                ("knife", 1),
                ("backpack", 1),
                ("hammer", 1),
                ("flashlight", 1),
            ],
            Self::Grocery => &[
                ("canned_food", 8),
                ("water_bottle", 8),
                ("crackers", 6),
                ("soda", 6),
                ("energy_bar", 4),
                ("duct_tape", 1),
                ("duffel_bag", 1),
            ],
            Self::Medical => &[
                ("bandage", 8),
                ("painkillers", 6),
                ("medkit", 3),
                ("water_bottle", 3),
                ("cloth", 3),
            ],
            Self::Police => &[
                ("flashlight", 3),
                ("boots", 3),
                ("energy_bar", 3),
                ("bandage", 3),
                ("riot_vest", 2),
                ("bat", 2),
                ("knife", 2),
                ("jacket", 2),
                ("duffel_bag", 1),
            ],
            Self::Industrial => &[
                ("scrap_metal", 6),
                ("nails", 6),
                ("plank", 4),
                ("wood", 3),
                ("rope", 3),
                ("duct_tape", 3),
                ("hammer", 2),
                ("saw", 2),
                ("crowbar", 2),
                ("pipe", 2),
                ("axe", 1),
            ],
            Self::Rural => &[
                ("wood", 4),
                ("rope", 3),
                ("canned_food", 3),
                ("axe", 2),
                ("water_bottle", 2),
                ("cloth", 2),
                ("nails", 2),
                ("saw", 1),
                ("boots", 1),
                ("machete", 1),
            ],
            Self::Civic => &[
                ("cloth", 4),
                ("water_bottle", 3),
                ("crackers", 3),
                ("bandage", 2),
                ("plank", 2),
                ("flashlight", 1),
                ("backpack", 1),
            ],
            Self::Kitchen => &[
                ("canned_food", 6),
                ("water_bottle", 5),
                ("soda", 4),
                ("crackers", 3),
                ("energy_bar", 2),
                ("knife", 1),
            ],
            Self::Gear => &[
                ("jacket", 3),
                ("boots", 2),
                ("sneakers", 2),
                ("backpack", 2),
                ("flashlight", 2),
                ("riot_vest", 1),
                ("crowbar", 1),
            ],
            Self::Bunker => &[
                ("canned_food", 4),
                ("water_bottle", 4),
                ("bandage", 2),
                ("energy_bar", 2),
                ("plank", 1),
                ("nails", 1),
            ],
        }
    }
}
