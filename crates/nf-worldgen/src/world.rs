//! Outdoor world generation.
//!
//! Four passes over one grid: terrain, settlements, roads, buildings. Every
//! pass is bounded, so generation always terminates even on a map that is
//! mostly water; it just produces fewer settlements or buildings.

use std::f64::consts::TAU;

use nf_core::geom::{Direction, Position};
use nf_core::tile::{BuildingType, Tile};
use nf_core::weighted::weighted_pick;
use nf_core::world::{Settlement, SettlementTier, WorldMap};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::WorldGenConfig;

/// Smallest map side the generator will produce.
pub const MIN_SIDE: i32 = 8;

const PLACE_NAMES: &[&str] = &[
    "Ashford", "Bramwell", "Cold Harbor", "Dunmore", "Elk Ridge", "Fairview", "Glenrock", "Hollow Creek",
    "Ironwood", "Juniper", "Kettle Falls", "Lowell", "Millbrook", "Northgate", "Oakdale", "Pine Bluff",
    "Quarry Hill", "Redwater", "Stillwell", "Thornton", "Umber Flats", "Vale", "Westbury", "Yarrow",
];

const TIERS: [SettlementTier; 3] = [SettlementTier::City, SettlementTier::Town, SettlementTier::Hamlet];

/// Building mix for each settlement tier.
pub fn building_table(tier: SettlementTier) -> &'static [(BuildingType, u32)] {
    use BuildingType::*;
    match tier {
        SettlementTier::City => &[
            (House, 15),
            (Apartment, 25),
            (Store, 10),
            (Supermarket, 8),
            (Pharmacy, 8),
            (Hospital, 5),
            (PoliceStation, 6),
            (GasStation, 6),
            (Warehouse, 8),
            (Church, 4),
            (School, 5),
        ],
        SettlementTier::Town => &[
            (House, 35),
            (Apartment, 8),
            (Store, 12),
            (Supermarket, 3),
            (Pharmacy, 6),
            (Hospital, 1),
            (PoliceStation, 3),
            (GasStation, 8),
            (Warehouse, 4),
            (Church, 6),
            (School, 4),
            (Farmhouse, 4),
        ],
        SettlementTier::Hamlet => &[
            (House, 30),
            (Farmhouse, 25),
            (Cabin, 20),
            (Store, 8),
            (GasStation, 8),
            (Church, 9),
        ],
    }
}

/// Generate a complete world map.
pub fn generate(config: &WorldGenConfig, rng: &mut StdRng) -> WorldMap {
    let width = config.width.max(MIN_SIDE);
    let height = config.height.max(MIN_SIDE);
    let mut map = WorldMap::filled(width, height, Tile::Grass);

    fill_terrain(&mut map, config, rng);
    map.settlements = place_settlements(&map, config, rng);
    lay_roads(&mut map, config, rng);
    place_buildings(&mut map, config, rng);

    debug!(
        width,
        height,
        settlements = map.settlements.len(),
        roads = map.count_tiles(Tile::is_road),
        buildings = map.count_tiles(Tile::is_building),
        "generated world"
    );
    map
}

/// Low-frequency sinusoidal field with random phases plus per-cell jitter.
fn fill_terrain(map: &mut WorldMap, config: &WorldGenConfig, rng: &mut StdRng) {
    let phase_x = rng.random::<f64>() * TAU;
    let phase_y = rng.random::<f64>() * TAU;
    let phase_d = rng.random::<f64>() * TAU;
    let freq_x = rng.random_range(0.08..0.16);
    let freq_y = rng.random_range(0.08..0.16);

    for y in 0..map.height() {
        for x in 0..map.width() {
            let (fx, fy) = (x as f64, y as f64);
            let wave = (fx * freq_x + phase_x).sin()
                + (fy * freq_y + phase_y).cos()
                + ((fx * 0.7 - fy * 0.4) * freq_x + phase_d).sin();
            let value = wave / 3.0 * 1.2 + rng.random_range(-0.15..0.15);
            let tile = if value < config.water_threshold {
                Tile::Water
            } else if value > config.forest_threshold {
                Tile::Forest
            } else {
                Tile::Grass
            };
            map.set_tile(Position::new(x, y), tile);
        }
    }
}

fn random_cell(map: &WorldMap, margin: i32, rng: &mut StdRng) -> Position {
    let margin_x = if map.width() > 2 * margin { margin } else { 0 };
    let margin_y = if map.height() > 2 * margin { margin } else { 0 };
    Position::new(
        rng.random_range(margin_x..map.width() - margin_x),
        rng.random_range(margin_y..map.height() - margin_y),
    )
}

fn place_settlements(map: &WorldMap, config: &WorldGenConfig, rng: &mut StdRng) -> Vec<Settlement> {
    let mut settlements: Vec<Settlement> = Vec::new();
    for tier in TIERS {
        let tc = config.tier(tier);
        let mut placed = 0;
        let mut attempts = 0;
        while placed < tc.count && attempts < config.max_attempts {
            attempts += 1;
            let center = random_cell(map, config.edge_margin, rng);
            if map.tile(center) == Some(Tile::Water) {
                continue;
            }
            let crowded = settlements
                .iter()
                .any(|s| s.center == center || (s.tier == tier && s.center.manhattan(center) < tc.min_distance));
            if crowded {
                continue;
            }
            let name = pick_name(&settlements, rng);
            settlements.push(Settlement {
                name,
                tier,
                center,
                buildings: 0,
            });
            placed += 1;
        }
        if placed < tc.count {
            warn!(%tier, placed, requested = tc.count, "settlement placement saturated");
        }
    }
    settlements
}

fn pick_name(taken: &[Settlement], rng: &mut StdRng) -> String {
    let free: Vec<&str> = PLACE_NAMES
        .iter()
        .copied()
        .filter(|n| taken.iter().all(|s| s.name != *n))
        .collect();
    if free.is_empty() {
        format!("Settlement {}", taken.len() + 1)
    } else {
        free[rng.random_range(0..free.len())].to_string()
    }
}

/// Convert one cell to road, or bridge over water. Buildings are left alone.
fn pave(map: &mut WorldMap, pos: Position) {
    match map.tile(pos) {
        Some(Tile::Water) => map.set_tile(pos, Tile::Bridge),
        Some(Tile::Grass | Tile::Forest) => map.set_tile(pos, Tile::Road),
        _ => {}
    }
}

/// L-shaped Manhattan path between two cells, corner chosen at random.
fn lay_path(map: &mut WorldMap, from: Position, to: Position, rng: &mut StdRng) {
    let corner = if rng.random_bool(0.5) {
        Position::new(to.x, from.y)
    } else {
        Position::new(from.x, to.y)
    };
    for (a, b) in [(from, corner), (corner, to)] {
        let (dx, dy) = ((b.x - a.x).signum(), (b.y - a.y).signum());
        let mut p = a;
        pave(map, p);
        while p != b {
            p = p.offset(dx, dy);
            pave(map, p);
        }
    }
}

fn nearest(from: Position, candidates: impl Iterator<Item = Position>) -> Option<Position> {
    candidates
        .filter(|c| *c != from)
        .min_by_key(|c| c.manhattan(from))
}

fn lay_roads(map: &mut WorldMap, config: &WorldGenConfig, rng: &mut StdRng) {
    let settlements = map.settlements.clone();
    let centers = |tiers: &[SettlementTier]| -> Vec<Position> {
        settlements
            .iter()
            .filter(|s| tiers.contains(&s.tier))
            .map(|s| s.center)
            .collect()
    };
    let cities = centers(&[SettlementTier::City]);
    let towns = centers(&[SettlementTier::Town]);
    let hubs = centers(&[SettlementTier::City, SettlementTier::Town]);

    // Short main street through every centre so isolated settlements still
    // have road frontage.
    for s in &settlements {
        let reach = (config.tier(s.tier).radius / 2).max(1);
        lay_path(map, s.center.offset(-reach, 0), s.center.offset(reach, 0), rng);
        lay_path(map, s.center.offset(0, -reach), s.center.offset(0, reach), rng);
    }

    for pair in cities.windows(2) {
        lay_path(map, pair[0], pair[1], rng);
    }
    if cities.len() >= 3 {
        lay_path(map, cities[cities.len() - 1], cities[0], rng);
    }

    for town in &towns {
        let target = nearest(*town, cities.iter().copied()).or_else(|| nearest(*town, towns.iter().copied()));
        if let Some(target) = target {
            lay_path(map, *town, target, rng);
        }
    }

    for hamlet in settlements.iter().filter(|s| s.tier == SettlementTier::Hamlet) {
        let target = nearest(hamlet.center, hubs.iter().copied()).or_else(|| {
            nearest(
                hamlet.center,
                settlements
                    .iter()
                    .filter(|s| s.tier == SettlementTier::Hamlet)
                    .map(|s| s.center),
            )
        });
        if let Some(target) = target {
            lay_path(map, hamlet.center, target, rng);
        }
    }

    grow_spurs(map, config.road_spurs, rng);
}

/// Short dead-end roads branching off random existing road cells.
fn grow_spurs(map: &mut WorldMap, count: usize, rng: &mut StdRng) {
    let roads: Vec<Position> = map
        .grid
        .iter()
        .filter(|(_, c)| c.tile == Tile::Road)
        .map(|(p, _)| p)
        .collect();
    if roads.is_empty() {
        return;
    }
    for _ in 0..count {
        let mut p = roads[rng.random_range(0..roads.len())];
        let dir = Direction::ALL[rng.random_range(0..4)];
        for _ in 0..rng.random_range(3..=8) {
            p = p.step(dir);
            match map.tile(p) {
                Some(Tile::Grass | Tile::Forest) => map.set_tile(p, Tile::Road),
                Some(Tile::Road) => {}
                _ => break,
            }
        }
    }
}

fn is_road_adjacent(map: &WorldMap, pos: Position) -> bool {
    pos.neighbors4()
        .into_iter()
        .any(|n| map.tile(n).is_some_and(Tile::is_road))
}

fn place_buildings(map: &mut WorldMap, config: &WorldGenConfig, rng: &mut StdRng) {
    for i in 0..map.settlements.len() {
        let (tier, center) = (map.settlements[i].tier, map.settlements[i].center);
        let tc = config.tier(tier);
        let table = building_table(tier);
        let mut placed = 0;
        let mut attempts = 0;
        while placed < tc.buildings && attempts < config.max_attempts {
            attempts += 1;
            let pos = center.offset(
                rng.random_range(-tc.radius..=tc.radius),
                rng.random_range(-tc.radius..=tc.radius),
            );
            if !matches!(map.tile(pos), Some(Tile::Grass | Tile::Forest)) || !is_road_adjacent(map, pos) {
                continue;
            }
            if let Some(bt) = weighted_pick(table, rng) {
                map.set_tile(pos, Tile::Building(*bt));
                placed += 1;
            }
        }
        let settlement = &mut map.settlements[i];
        settlement.buildings = placed;
        debug!(name = %settlement.name, %tier, placed, attempts, "placed buildings");
    }
}

/// Turn the buildable cell nearest the map centre into the starting bunker.
///
/// Searches outward ring by ring for grass or forest with at least one
/// passable neighbour. On a map with no such cell the bunker overwrites the
/// centre tile, whatever it was.
pub fn place_bunker(map: &mut WorldMap) -> Position {
    let center = Position::new(map.width() / 2, map.height() / 2);
    let max_ring = map.width().max(map.height());
    let site = (0..=max_ring).find_map(|r| {
        ring(center, r).into_iter().find(|p| {
            matches!(map.tile(*p), Some(Tile::Grass | Tile::Forest))
                && p.neighbors4().into_iter().any(|n| map.is_passable(n))
        })
    });
    let pos = site.unwrap_or(center);
    map.set_tile(pos, Tile::Building(BuildingType::Bunker));
    pos
}

/// Cells at Chebyshev distance `r`, in row-major order.
fn ring(center: Position, r: i32) -> Vec<Position> {
    let mut out = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx.abs().max(dy.abs()) == r {
                out.push(center.offset(dx, dy));
            }
        }
    }
    out
}
