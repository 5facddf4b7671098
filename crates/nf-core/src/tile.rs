//! World tiles and building types.

use serde::{Deserialize, Serialize};

use crate::loot::LootTable;

/// The kinds of building that can appear on the world map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    /// Detached family home.
    House,
    /// Multi-unit residential block.
    Apartment,
    /// Corner shop.
    Store,
    /// Large grocery store.
    Supermarket,
    /// Drug store.
    Pharmacy,
    /// Hospital.
    Hospital,
    /// Police station.
    PoliceStation,
    /// Gas station.
    GasStation,
    /// Storage warehouse.
    Warehouse,
    /// Rural farmhouse.
    Farmhouse,
    /// Woodland cabin.
    Cabin,
    /// Church.
    Church,
    /// School.
    School,
    /// The player's starting shelter.
    Bunker,
}

/// Whether a building's second floor lies above or below the ground floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StairDirection {
    /// Upper storey reached by stairs up.
    Up,
    /// Basement reached by stairs down.
    Down,
}

/// Static tuning for a building type.
#[derive(Debug, Clone, Copy)]
pub struct BuildingProfile {
    /// Display name.
    pub name: &'static str,
    /// Map glyph.
    pub glyph: char,
    /// Loot table searched indoors.
    pub loot: LootTable,
    /// Maximum interior zombies spawned per floor.
    pub danger: u32,
    /// Probability of a second floor.
    pub second_floor_chance: f64,
    /// Direction of the second floor.
    pub stairs: StairDirection,
}

impl BuildingType {
    /// Every building type, bunker included.
    pub const ALL: [BuildingType; 14] = [
        Self::House,
        Self::Apartment,
        Self::Store,
        Self::Supermarket,
        Self::Pharmacy,
        Self::Hospital,
        Self::PoliceStation,
        Self::GasStation,
        Self::Warehouse,
        Self::Farmhouse,
        Self::Cabin,
        Self::Church,
        Self::School,
        Self::Bunker,
    ];

    /// Static tuning for this type.
    pub fn profile(self) -> BuildingProfile {
        let (name, glyph, loot, danger, second_floor_chance, stairs) = match self {
            Self::House => ("House", 'h', LootTable::Residential, 2, 0.4, StairDirection::Up),
            Self::Apartment => ("Apartment", 'A', LootTable::Residential, 3, 0.7, StairDirection::Up),
            Self::Store => ("Store", 's', LootTable::Grocery, 2, 0.0, StairDirection::Up),
            Self::Supermarket => ("Supermarket", 'M', LootTable::Grocery, 4, 0.0, StairDirection::Up),
            Self::Pharmacy => ("Pharmacy", 'p', LootTable::Medical, 2, 0.0, StairDirection::Up),
            Self::Hospital => ("Hospital", 'H', LootTable::Medical, 5, 0.5, StairDirection::Up),
            Self::PoliceStation => ("Police Station", 'P', LootTable::Police, 4, 0.4, StairDirection::Down),
            Self::GasStation => ("Gas Station", 'g', LootTable::Grocery, 2, 0.0, StairDirection::Up),
            Self::Warehouse => ("Warehouse", 'W', LootTable::Industrial, 3, 0.0, StairDirection::Up),
            Self::Farmhouse => ("Farmhouse", 'F', LootTable::Rural, 2, 0.3, StairDirection::Down),
            Self::Cabin => ("Cabin", 'c', LootTable::Rural, 1, 0.2, StairDirection::Down),
            Self::Church => ("Church", 't', LootTable::Civic, 2, 0.25, StairDirection::Down),
            Self::School => ("School", 'S', LootTable::Civic, 3, 0.4, StairDirection::Up),
            Self::Bunker => ("Bunker", 'B', LootTable::Bunker, 0, 0.0, StairDirection::Down),
        };
        BuildingProfile {
            name,
            glyph,
            loot,
            danger,
            second_floor_chance,
            stairs,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Parse a building type from its name, ignoring case, spaces and underscores.
    pub fn parse(s: &str) -> Option<BuildingType> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL.into_iter().find(|bt| {
            bt.name()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
                == key
        })
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A world map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Open grassland.
    Grass,
    /// Woodland.
    Forest,
    /// Lakes and rivers. Impassable.
    Water,
    /// Paved road.
    Road,
    /// Road crossing water.
    Bridge,
    /// Player-built campfire.
    Campfire,
    /// Player-built tent.
    Tent,
    /// An enterable building.
    Building(BuildingType),
}

/// Static properties of a world tile.
#[derive(Debug, Clone, Copy)]
pub struct TileDef {
    /// Display name.
    pub name: &'static str,
    /// Map glyph.
    pub glyph: char,
    /// Whether the player and zombies can stand here.
    pub passable: bool,
    /// Whether the tile leads into an interior.
    pub enterable: bool,
    /// Scavengeable loot units when generated.
    pub loot: u32,
    /// Table scavenged from.
    pub loot_table: Option<LootTable>,
    /// Extra stamina needed to step onto this tile.
    pub move_cost: i32,
}

impl Tile {
    /// Static properties of this tile.
    pub fn def(self) -> TileDef {
        let plain = |name, glyph, loot, loot_table, move_cost| TileDef {
            name,
            glyph,
            passable: true,
            enterable: false,
            loot,
            loot_table,
            move_cost,
        };
        match self {
            Self::Grass => plain("Grass", '.', 1, Some(LootTable::Grass), 0),
            Self::Forest => plain("Forest", 'T', 2, Some(LootTable::Forest), 1),
            Self::Water => TileDef {
                passable: false,
                ..plain("Water", '~', 0, None, 0)
            },
            Self::Road => plain("Road", '=', 1, Some(LootTable::Road), 0),
            Self::Bridge => plain("Bridge", '#', 0, None, 0),
            Self::Campfire => plain("Campfire", '*', 0, None, 0),
            Self::Tent => plain("Tent", '^', 0, None, 0),
            Self::Building(bt) => {
                let profile = bt.profile();
                TileDef {
                    enterable: true,
                    ..plain(profile.name, profile.glyph, 1, Some(LootTable::Yard), 0)
                }
            }
        }
    }

    /// True for any building tile.
    pub fn is_building(self) -> bool {
        matches!(self, Self::Building(_))
    }

    /// True for road and bridge tiles.
    pub fn is_road(self) -> bool {
        matches!(self, Self::Road | Self::Bridge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_is_the_only_impassable_tile() {
        assert!(!Tile::Water.def().passable);
        for tile in [Tile::Grass, Tile::Forest, Tile::Road, Tile::Bridge, Tile::Tent] {
            assert!(tile.def().passable);
        }
    }

    #[test]
    fn buildings_are_enterable() {
        for bt in BuildingType::ALL {
            assert!(Tile::Building(bt).def().enterable);
        }
        assert!(!Tile::Grass.def().enterable);
    }

    #[test]
    fn parse_building_type_loosely() {
        assert_eq!(BuildingType::parse("police_station"), Some(BuildingType::PoliceStation));
        assert_eq!(BuildingType::parse("Gas Station"), Some(BuildingType::GasStation));
        assert_eq!(BuildingType::parse("castle"), None);
    }

    #[test]
    fn bunker_is_safe() {
        let profile = BuildingType::Bunker.profile();
        assert_eq!(profile.danger, 0);
        assert!(profile.second_floor_chance <= 0.0);
    }
}
