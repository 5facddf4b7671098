//! Fixtures shared by the unit tests.

use nf_core::enemy::{EnemyKind, Zombie};
use nf_core::geom::Position;
use nf_core::interior::{Building, BuildingId, InteriorTile};
use nf_core::inventory::ItemUid;
use nf_core::item::item_def;
use nf_core::player::Location;
use nf_core::tile::{BuildingType, Tile};
use nf_core::world::WorldMap;
use nf_worldgen::interior::build_floor;

use crate::config::GameConfig;
use crate::game::Game;

/// Small world, no zombies, no hunger, no night spawns.
pub(crate) fn quiet_config() -> GameConfig {
    GameConfig::default()
        .with_world_size(24, 20)
        .with_initial_zombies(0)
        .with_decay(0.0, 0.0)
        .with_night_spawns(0.0, 0.0)
}

/// A player standing outside on an all-grass map, next to the bunker.
pub(crate) fn outdoor_game() -> Game {
    let mut game = Game::from_world(quiet_config(), WorldMap::filled(20, 20, Tile::Grass));
    let bunker = game.player.world_pos;
    let outside = bunker.offset(1, 0);
    game.player.location = Location::World;
    game.player.p = outside;
    game.player.world_pos = outside;
    game
}

/// A player inside a one-floor building made from `rows`, standing on the first door.
pub(crate) fn indoor_game(rows: &'static [&'static str]) -> Game {
    let mut game = outdoor_game();
    let floor = build_floor(rows, "Ground Floor");
    let entry = floor.entry_pos;
    let id = BuildingId(game.buildings.len());
    game.buildings.push(Building {
        floors: vec![floor],
        building_type: BuildingType::House,
        cleared: false,
    });
    let door = game.player.p;
    game.world.set_tile(door, Tile::Building(BuildingType::House));
    if let Some(cell) = game.world.cell_mut(door) {
        cell.interior = Some(id);
    }
    game.player.location = Location::Interior { building: id, floor: 0 };
    game.player.p = entry;
    game
}

/// Put a fresh item in the inventory and equip it.
pub(crate) fn give_equipped(game: &mut Game, id: &str) -> ItemUid {
    let def = item_def(id).unwrap();
    let uid = game.player.inv.add(def, 1)[0];
    game.player.equip.set(def.slot.unwrap(), Some(uid));
    uid
}

/// Add `qty` units of an item.
pub(crate) fn give(game: &mut Game, id: &str, qty: u32) {
    game.player.inv.add(item_def(id).unwrap(), qty);
}

/// Drop a world zombie at `pos`.
pub(crate) fn world_zombie(game: &mut Game, kind: EnemyKind, pos: Position) {
    game.zombies.push(Zombie::new(kind, pos, 0));
}

/// Position of the first tile of a type on the current floor.
pub(crate) fn tile_pos(game: &Game, tile: InteriorTile) -> Position {
    game.current_floor().unwrap().find_tile(tile).unwrap()
}
