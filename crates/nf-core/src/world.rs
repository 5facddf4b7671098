//! The outdoor world map.

use serde::Serialize;

use crate::geom::Position;
use crate::grid::Grid;
use crate::interior::BuildingId;
use crate::inventory::ItemStack;
use crate::tile::Tile;

/// One cell of the world map.
#[derive(Debug, Clone, Serialize)]
pub struct WorldCell {
    /// Terrain or structure.
    pub tile: Tile,
    /// Remaining scavengeable loot. Never exceeds `max`.
    pub loot: u32,
    /// Loot the cell was created with.
    pub max: u32,
    /// Building generated on first entry.
    pub interior: Option<BuildingId>,
    /// Items lying on the ground.
    pub items: Vec<ItemStack>,
}

impl WorldCell {
    /// A fresh cell with the tile's full loot.
    pub fn new(tile: Tile) -> Self {
        let loot = tile.def().loot;
        Self {
            tile,
            loot,
            max: loot,
            interior: None,
            items: Vec::new(),
        }
    }

    /// Replace the tile with a player-built structure. Loot can only shrink.
    pub fn build(&mut self, tile: Tile) {
        self.tile = tile;
        self.max = self.max.min(tile.def().loot);
        self.loot = self.loot.min(self.max);
    }
}

/// Size class of a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SettlementTier {
    /// Large and dense.
    City,
    /// Medium.
    Town,
    /// A handful of buildings.
    Hamlet,
}

impl std::fmt::Display for SettlementTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::Town => write!(f, "town"),
            Self::Hamlet => write!(f, "hamlet"),
        }
    }
}

/// A named generation anchor.
#[derive(Debug, Clone, Serialize)]
pub struct Settlement {
    /// Place name.
    pub name: String,
    /// Size class.
    pub tier: SettlementTier,
    /// Centre cell.
    pub center: Position,
    /// Buildings actually placed around it.
    pub buildings: usize,
}

/// The generated outdoor world.
#[derive(Debug, Clone, Serialize)]
pub struct WorldMap {
    /// Cell grid.
    pub grid: Grid<WorldCell>,
    /// Settlements in placement order.
    pub settlements: Vec<Settlement>,
}

impl WorldMap {
    /// A world of a single tile type with no settlements.
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        Self {
            grid: Grid::from_fn(width, height, |_| WorldCell::new(tile)),
            settlements: Vec::new(),
        }
    }

    /// Map width.
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Map height.
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Borrow a cell.
    pub fn cell(&self, pos: Position) -> Option<&WorldCell> {
        self.grid.get(pos)
    }

    /// Mutably borrow a cell.
    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut WorldCell> {
        self.grid.get_mut(pos)
    }

    /// Tile at `pos`.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.cell(pos).map(|c| c.tile)
    }

    /// Overwrite the tile at `pos` with a fresh cell.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        if let Some(cell) = self.grid.get_mut(pos) {
            *cell = WorldCell::new(tile);
        }
    }

    /// True if `pos` is on the map and passable.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|t| t.def().passable)
    }

    /// Count of cells holding `pred`-matching tiles.
    pub fn count_tiles(&self, pred: impl Fn(Tile) -> bool) -> usize {
        self.grid.iter().filter(|(_, c)| pred(c.tile)).count()
    }
}
