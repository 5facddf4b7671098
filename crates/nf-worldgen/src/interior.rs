//! Building interior generation from layout templates.

use nf_core::geom::Position;
use nf_core::grid::Grid;
use nf_core::interior::{Building, Floor, InteriorCell, InteriorTile};
use nf_core::inventory::ItemStack;
use nf_core::item::item_def;
use nf_core::templates::{self, Template};
use nf_core::tile::{BuildingType, StairDirection};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// Supplies waiting in the bunker's crate at the start of a game.
pub const BUNKER_STORES: &[(&str, u32)] = &[
    ("canned_food", 3),
    ("water_bottle", 3),
    ("bandage", 2),
    ("knife", 1),
    ("hammer", 1),
    ("plank", 4),
    ("nails", 6),
];

/// Turn a template into a floor. Short rows are padded with wall.
pub fn build_floor(template: Template, label: &str) -> Floor {
    let rows: Vec<Vec<char>> = template.iter().map(|r| r.chars().collect()).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0) as i32;
    let height = rows.len() as i32;
    let map = Grid::from_fn(width, height, |p| {
        let glyph = rows
            .get(p.y as usize)
            .and_then(|r| r.get(p.x as usize))
            .copied()
            .unwrap_or('#');
        InteriorCell::new(InteriorTile::from_glyph(glyph))
    });
    let entry_pos = map
        .find(|c| c.tile.def().entry)
        .or_else(|| map.find(|c| c.tile.def().passable))
        .unwrap_or_default();
    Floor {
        map,
        entry_pos,
        label: label.to_string(),
    }
}

fn pick<'a>(pool: &'a [Template], rng: &mut StdRng) -> Option<&'a Template> {
    if pool.is_empty() {
        None
    } else {
        pool.get(rng.random_range(0..pool.len()))
    }
}

/// Generate a building of the given type.
///
/// Types without a ground floor pool fall back to a house layout, keeping
/// the requested type.
pub fn generate(bt: BuildingType, rng: &mut StdRng) -> Building {
    let ground_pool = match templates::ground_floors(bt) {
        [] => templates::ground_floors(BuildingType::House),
        pool => pool,
    };
    let mut floors = Vec::new();
    if let Some(template) = pick(ground_pool, rng) {
        floors.push(build_floor(*template, "Ground Floor"));
    }

    let profile = bt.profile();
    let second = if rng.random_bool(profile.second_floor_chance.clamp(0.0, 1.0)) {
        pick(templates::second_floors(bt), rng).copied()
    } else {
        None
    };
    let landing = second
        .zip(floors.first_mut())
        .and_then(|(template, ground)| carve_stairs(ground, profile.stairs, rng).map(|_| template));
    if let Some(template) = landing {
        let label = match profile.stairs {
            StairDirection::Up => "Upstairs",
            StairDirection::Down => "Basement",
        };
        floors.push(build_floor(template, label));
    }

    debug!(building = %bt, floors = floors.len(), "generated interior");
    Building {
        floors,
        building_type: bt,
        cleared: false,
    }
}

/// Replace a random plain floor tile (not the entry) with a staircase.
fn carve_stairs(floor: &mut Floor, dir: StairDirection, rng: &mut StdRng) -> Option<Position> {
    let candidates: Vec<Position> = floor
        .map
        .iter()
        .filter(|(p, c)| c.tile == InteriorTile::Floor && *p != floor.entry_pos)
        .map(|(p, _)| p)
        .collect();
    let pos = *candidates.get(rng.random_range(0..candidates.len().max(1)))?;
    let tile = match dir {
        StairDirection::Up => InteriorTile::StairsUp,
        StairDirection::Down => InteriorTile::StairsDown,
    };
    if let Some(cell) = floor.cell_mut(pos) {
        *cell = InteriorCell::new(tile);
    }
    Some(pos)
}

/// The starting shelter: fixed layout, already cleared, crate stocked.
pub fn generate_bunker() -> Building {
    let mut floor = build_floor(templates::BUNKER, "Bunker");
    let stores: Vec<ItemStack> = BUNKER_STORES
        .iter()
        .filter_map(|(id, qty)| item_def(id).map(|d| ItemStack::new(d, *qty)))
        .collect();
    if let Some(cell) = floor
        .find_tile(InteriorTile::Crate)
        .and_then(|pos| floor.cell_mut(pos))
    {
        cell.storage = Some(stores);
    }
    Building {
        floors: vec![floor],
        building_type: BuildingType::Bunker,
        cleared: true,
    }
}

/// First tile of the given staircase type in row-major order.
pub fn find_stairs(floor: &Floor, stairs: InteriorTile) -> Option<Position> {
    floor.find_tile(stairs)
}
