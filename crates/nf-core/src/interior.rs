//! Building interiors: tiles, cells, floors, and the building arena id.

use serde::Serialize;

use crate::geom::Position;
use crate::grid::Grid;
use crate::inventory::ItemStack;
use crate::item::ItemId;
use crate::loot::LootTable;
use crate::tile::BuildingType;

/// A tile inside a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InteriorTile {
    /// Solid wall.
    Wall,
    /// Walkable floor.
    Floor,
    /// Door to the outside.
    Door,
    /// Window opening.
    Window,
    /// Ladder hatch to the outside.
    Ladder,
    /// Stairs leading up.
    StairsUp,
    /// Stairs leading down.
    StairsDown,
    /// Shelving.
    Shelf,
    /// Cupboard.
    Cabinet,
    /// Fridge.
    Fridge,
    /// Shop counter.
    Counter,
    /// Desk.
    Desk,
    /// Metal locker.
    Locker,
    /// Bed.
    Bed,
    /// Storage crate.
    Crate,
    /// Table.
    Table,
    /// Crafting workbench.
    Workbench,
    /// Collapsed debris.
    Rubble,
}

/// Static properties of an interior tile.
#[derive(Debug, Clone, Copy)]
pub struct InteriorTileDef {
    /// Display name.
    pub name: &'static str,
    /// Template and map glyph.
    pub glyph: char,
    /// Whether it can be walked on.
    pub passable: bool,
    /// Whether it leads outside.
    pub entry: bool,
    /// Whether it is a door or window that can be barricaded.
    pub opening: bool,
    /// Whether it stores items.
    pub container: bool,
    /// Searchable loot units when generated.
    pub loot: u32,
    /// Table used instead of the building's own.
    pub loot_table: Option<LootTable>,
    /// Materials recovered by salvaging.
    pub salvage: &'static [(ItemId, u32)],
}

const SOLID: InteriorTileDef = InteriorTileDef {
    name: "",
    glyph: '#',
    passable: false,
    entry: false,
    opening: false,
    container: false,
    loot: 0,
    loot_table: None,
    salvage: &[],
};

const fn walkable(name: &'static str, glyph: char) -> InteriorTileDef {
    InteriorTileDef {
        name,
        glyph,
        passable: true,
        ..SOLID
    }
}

const fn furniture(
    name: &'static str,
    glyph: char,
    loot: u32,
    salvage: &'static [(ItemId, u32)],
) -> InteriorTileDef {
    InteriorTileDef {
        name,
        glyph,
        loot,
        salvage,
        ..SOLID
    }
}

impl InteriorTile {
    /// Every interior tile.
    pub const ALL: [InteriorTile; 18] = [
        Self::Wall,
        Self::Floor,
        Self::Door,
        Self::Window,
        Self::Ladder,
        Self::StairsUp,
        Self::StairsDown,
        Self::Shelf,
        Self::Cabinet,
        Self::Fridge,
        Self::Counter,
        Self::Desk,
        Self::Locker,
        Self::Bed,
        Self::Crate,
        Self::Table,
        Self::Workbench,
        Self::Rubble,
    ];

    /// Static properties of this tile.
    pub fn def(self) -> InteriorTileDef {
        match self {
            Self::Wall => InteriorTileDef { name: "Wall", ..SOLID },
            Self::Floor => walkable("Floor", '.'),
            Self::Door => InteriorTileDef {
                entry: true,
                opening: true,
                ..walkable("Door", '+')
            },
            Self::Window => InteriorTileDef {
                name: "Window",
                glyph: '=',
                opening: true,
                ..SOLID
            },
            Self::Ladder => InteriorTileDef {
                entry: true,
                ..walkable("Ladder", 'H')
            },
            Self::StairsUp => walkable("Stairs Up", '<'),
            Self::StairsDown => walkable("Stairs Down", '>'),
            Self::Shelf => furniture("Shelf", 's', 2, &[("wood", 2), ("nails", 1)]),
            Self::Cabinet => furniture("Cabinet", 'c', 2, &[("wood", 1), ("scrap_metal", 1)]),
            Self::Fridge => InteriorTileDef {
                loot_table: Some(LootTable::Kitchen),
                ..furniture("Fridge", 'f', 2, &[("scrap_metal", 3)])
            },
            Self::Counter => furniture("Counter", 'n', 1, &[("wood", 2)]),
            Self::Desk => furniture("Desk", 'd', 1, &[("wood", 2), ("nails", 1)]),
            Self::Locker => InteriorTileDef {
                loot_table: Some(LootTable::Gear),
                ..furniture("Locker", 'l', 2, &[("scrap_metal", 2)])
            },
            Self::Bed => InteriorTileDef {
                loot: 1,
                salvage: &[("cloth", 2), ("wood", 1)],
                ..walkable("Bed", 'b')
            },
            Self::Crate => InteriorTileDef {
                container: true,
                ..furniture("Crate", 'x', 0, &[])
            },
            Self::Table => furniture("Table", 't', 0, &[("wood", 2)]),
            Self::Workbench => furniture("Workbench", 'w', 0, &[]),
            Self::Rubble => furniture("Rubble", '%', 0, &[("stone", 1), ("scrap_metal", 1)]),
        }
    }

    /// Map a template character to a tile. Unknown characters become walls.
    pub fn from_glyph(c: char) -> InteriorTile {
        Self::ALL
            .into_iter()
            .find(|t| t.def().glyph == c && *t != Self::Wall)
            .unwrap_or(Self::Wall)
    }

    /// True for either staircase.
    pub fn is_stairs(self) -> bool {
        matches!(self, Self::StairsUp | Self::StairsDown)
    }

    /// True for furniture that can be searched for loot.
    pub fn is_searchable(self) -> bool {
        self.def().loot > 0
    }
}

/// One cell of an interior floor.
#[derive(Debug, Clone, Serialize)]
pub struct InteriorCell {
    /// Tile type.
    pub tile: InteriorTile,
    /// Remaining searchable loot.
    pub loot: u32,
    /// Barricade strength on an opening. Zero means open.
    pub barricade_hp: i32,
    /// Contents, present only on container tiles.
    pub storage: Option<Vec<ItemStack>>,
    /// Items lying on the floor.
    pub items: Vec<ItemStack>,
}

impl InteriorCell {
    /// A fresh cell with the tile's starting loot and, for containers, empty storage.
    pub fn new(tile: InteriorTile) -> Self {
        let def = tile.def();
        Self {
            tile,
            loot: def.loot,
            barricade_hp: 0,
            storage: def.container.then(Vec::new),
            items: Vec::new(),
        }
    }

    /// True if a barricade currently blocks this opening.
    pub fn is_barricaded(&self) -> bool {
        self.barricade_hp > 0
    }

    /// True if the player or a zombie can stand here.
    pub fn is_walkable(&self) -> bool {
        self.tile.def().passable && !self.is_barricaded()
    }

    /// True if this cell can be used to leave the building.
    pub fn is_usable_exit(&self) -> bool {
        self.tile.def().entry && !self.is_barricaded()
    }
}

/// One storey of a building.
#[derive(Debug, Clone, Serialize)]
pub struct Floor {
    /// Cell grid. Dimensions are fixed at construction.
    pub map: Grid<InteriorCell>,
    /// Where the player appears when arriving from outside.
    pub entry_pos: Position,
    /// Human-readable label ("Ground Floor", "Basement", ...).
    pub label: String,
}

impl Floor {
    /// Floor width.
    pub fn w(&self) -> i32 {
        self.map.width()
    }

    /// Floor height.
    pub fn h(&self) -> i32 {
        self.map.height()
    }

    /// Borrow a cell.
    pub fn cell(&self, pos: Position) -> Option<&InteriorCell> {
        self.map.get(pos)
    }

    /// Mutably borrow a cell.
    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut InteriorCell> {
        self.map.get_mut(pos)
    }

    /// First cell of the given tile type in row-major order.
    pub fn find_tile(&self, tile: InteriorTile) -> Option<Position> {
        self.map.find(|c| c.tile == tile)
    }

    /// True if `pos` is inside the floor and walkable.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(InteriorCell::is_walkable)
    }
}

/// Index of a building in the game's building arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BuildingId(pub usize);

/// A generated building with one or more floors.
#[derive(Debug, Clone, Serialize)]
pub struct Building {
    /// Floors, ground floor first.
    pub floors: Vec<Floor>,
    /// What kind of building this is.
    pub building_type: BuildingType,
    /// Set once the player leaves with no zombies left inside.
    pub cleared: bool,
}

impl Building {
    /// True for the starting bunker.
    pub fn is_bunker(&self) -> bool {
        self.building_type == BuildingType::Bunker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for tile in InteriorTile::ALL {
            assert_eq!(InteriorTile::from_glyph(tile.def().glyph), tile);
        }
        assert_eq!(InteriorTile::from_glyph('?'), InteriorTile::Wall);
    }

    #[test]
    fn containers_start_with_empty_storage() {
        let crate_cell = InteriorCell::new(InteriorTile::Crate);
        assert_eq!(crate_cell.storage.as_ref().map(Vec::len), Some(0));
        assert!(InteriorCell::new(InteriorTile::Shelf).storage.is_none());
    }

    #[test]
    fn barricaded_door_is_not_an_exit() {
        let mut door = InteriorCell::new(InteriorTile::Door);
        assert!(door.is_usable_exit());
        door.barricade_hp = 10;
        assert!(!door.is_usable_exit());
        assert!(!door.is_walkable());
    }

    #[test]
    fn find_tile_is_row_major() {
        let map = Grid::from_fn(3, 3, |p| {
            if p == Position::new(2, 0) || p == Position::new(0, 2) {
                InteriorCell::new(InteriorTile::StairsUp)
            } else {
                InteriorCell::new(InteriorTile::Floor)
            }
        });
        let floor = Floor {
            map,
            entry_pos: Position::new(1, 1),
            label: "Test".into(),
        };
        assert_eq!(floor.find_tile(InteriorTile::StairsUp), Some(Position::new(2, 0)));
        assert_eq!(floor.find_tile(InteriorTile::Door), None);
    }
}
