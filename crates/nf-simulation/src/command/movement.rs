use nf_core::geom::Direction;
use nf_core::interior::{BuildingId, InteriorTile};
use nf_core::player::Location;
use nf_core::tile::Tile;
use nf_mechanics::stats;
use nf_worldgen::find_stairs;
use tracing::info;

use crate::error::{ActionResult, GameError};
use crate::game::Game;
use crate::log::Severity;

impl Game {
    /// Step one cell in a cardinal direction.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> ActionResult {
        let result = self.try_move(dx, dy);
        self.finish(result)
    }

    /// Walk into the building on the current world cell.
    pub fn enter_building(&mut self) -> ActionResult {
        let result = self.try_enter();
        self.finish(result)
    }

    /// Leave the building through the door or ladder underfoot.
    pub fn exit_building(&mut self) -> ActionResult {
        let result = self.try_exit();
        self.finish(result)
    }

    /// Take the stairs underfoot to the other floor.
    pub fn use_stairs(&mut self) -> ActionResult {
        let result = self.try_stairs();
        self.finish(result)
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> ActionResult {
        self.ensure_alive()?;
        let dir = Direction::from_delta(dx, dy).ok_or(GameError::InvalidDirection)?;
        let target = self.player.p.step(dir);
        let extra = match self.player.location {
            Location::World => {
                let tile = self.world.tile(target).ok_or(GameError::Blocked)?;
                if !tile.def().passable {
                    return Err(GameError::Blocked);
                }
                if self.world_zombie_at(target).is_some() {
                    return Err(GameError::ZombieInTheWay);
                }
                tile.def().move_cost
            }
            Location::Interior { floor, .. } => {
                let walkable = self.current_floor().is_some_and(|f| f.is_walkable(target));
                if !walkable {
                    return Err(GameError::Blocked);
                }
                if self.interior_zombie_at(target, floor).is_some() {
                    return Err(GameError::ZombieInTheWay);
                }
                0
            }
        };
        let cost = stats::move_cost(&self.player, &self.config.stats, extra);
        self.spend_stamina(f64::from(cost))?;
        self.player.p = target;
        if self.player.location == Location::World {
            self.player.world_pos = target;
        }
        self.tick();
        Ok(())
    }

    fn try_enter(&mut self) -> ActionResult {
        self.ensure_alive()?;
        if self.player.location.is_interior() {
            return Err(GameError::NotOutdoors);
        }
        let pos = self.player.p;
        let (tile, existing) = self
            .world
            .cell(pos)
            .map(|c| (c.tile, c.interior))
            .ok_or(GameError::NotAnEntrance)?;
        let Tile::Building(building_type) = tile else {
            return Err(GameError::NotAnEntrance);
        };
        let id = match existing {
            Some(id) => id,
            None => {
                let building = nf_worldgen::interior::generate(building_type, &mut self.rng);
                let id = BuildingId(self.buildings.len());
                self.buildings.push(building);
                if let Some(cell) = self.world.cell_mut(pos) {
                    cell.interior = Some(id);
                }
                id
            }
        };
        let entry = self
            .building(id)
            .and_then(|b| b.floors.first())
            .map(|f| f.entry_pos)
            .ok_or(GameError::NotAnEntrance)?;

        self.player.world_pos = pos;
        self.player.location = Location::Interior { building: id, floor: 0 };
        self.player.p = entry;
        let spawned = self.spawn_interior_zombies(id);
        self.say(format!("You enter the {building_type}."), Severity::Info);
        if spawned > 0 {
            self.say("Something shuffles in the dark. You are not alone.", Severity::Danger);
        }
        info!(building = %building_type, id = id.0, zombies = spawned, "entered building");
        self.tick();
        Ok(())
    }

    fn try_exit(&mut self) -> ActionResult {
        self.ensure_alive()?;
        let Location::Interior { building, floor } = self.player.location else {
            return Err(GameError::NotIndoors);
        };
        if floor != 0 {
            return Err(GameError::NotOnGroundFloor);
        }
        let cell = self
            .current_floor()
            .and_then(|f| f.cell(self.player.p))
            .ok_or(GameError::NotAtExit)?;
        if !cell.tile.def().entry {
            return Err(GameError::NotAtExit);
        }
        if !cell.is_usable_exit() {
            return Err(GameError::ExitBarricaded);
        }
        if self.world_zombie_at(self.player.world_pos).is_some() {
            return Err(GameError::ZombieInTheWay);
        }

        let empty = self.interior_zombies.is_empty();
        let newly_cleared = match self.buildings.get_mut(building.0) {
            Some(b) if empty && !b.cleared => {
                b.cleared = true;
                true
            }
            _ => false,
        };
        if newly_cleared {
            self.say("You leave the building cleared behind you.", Severity::Good);
        }
        self.interior_zombies.clear();
        self.player.location = Location::World;
        self.player.p = self.player.world_pos;
        self.say("You step back outside.", Severity::Info);
        self.tick();
        Ok(())
    }

    fn try_stairs(&mut self) -> ActionResult {
        self.ensure_alive()?;
        let Location::Interior { building, floor } = self.player.location else {
            return Err(GameError::NotIndoors);
        };
        let here = self
            .current_floor()
            .and_then(|f| f.cell(self.player.p))
            .map(|c| c.tile)
            .filter(|t| t.is_stairs())
            .ok_or(GameError::NoStairs)?;
        let to = if floor == 0 { 1 } else { 0 };
        let dest = self
            .building(building)
            .and_then(|b| b.floors.get(to))
            .ok_or(GameError::NoStairs)?;
        let opposite = match here {
            InteriorTile::StairsUp => InteriorTile::StairsDown,
            _ => InteriorTile::StairsUp,
        };
        let landing = find_stairs(dest, opposite).unwrap_or(dest.entry_pos);
        let label = dest.label.clone();
        if self.interior_zombie_at(landing, to).is_some() {
            return Err(GameError::ZombieInTheWay);
        }

        self.player.location = Location::Interior { building, floor: to };
        self.player.p = landing;
        self.say(format!("You take the stairs. {label}."), Severity::Info);
        self.tick();
        Ok(())
    }
}
