//! Zombie movement and spawning.

use nf_core::enemy::{EnemyKind, Zombie};
use nf_core::geom::{Direction, Position};
use nf_core::interior::{BuildingId, InteriorTile};
use nf_core::player::Location;
use nf_core::weighted::weighted_pick;
use rand::Rng;
use tracing::debug;

use crate::game::Game;
use crate::log::Severity;

/// Interior zombies never spawn closer than this to a floor's landing point.
const LANDING_CLEARANCE: i32 = 3;

impl Game {
    /// Pick a step from `from`: toward `target` when it is within aggro
    /// range, otherwise in a random direction.
    fn choose_step(&mut self, from: Position, target: Option<Position>) -> Direction {
        let chase = target.filter(|t| from.manhattan(*t) <= self.config.aggro_radius);
        if let Some(t) = chase {
            let dx = (t.x - from.x).signum();
            let dy = (t.y - from.y).signum();
            let horizontal = match (dx, dy) {
                (0, _) => false,
                (_, 0) => true,
                _ => self.rng.random_bool(0.5),
            };
            let step = if horizontal {
                Direction::from_delta(dx, 0)
            } else {
                Direction::from_delta(0, dy)
            };
            if let Some(dir) = step {
                return dir;
            }
        }
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }

    /// Move world zombies. A zombie stepping onto the player ambushes them.
    pub(crate) fn step_world_zombies(&mut self) {
        let turn = self.player.turn;
        let mut i = 0;
        while i < self.zombies.len() {
            if !self.player.alive {
                break;
            }
            let (from, speed) = (self.zombies[i].pos, self.zombies[i].def().speed);
            if turn % speed.max(1) != 0 {
                i += 1;
                continue;
            }
            let target = (!self.player.location.is_interior()).then_some(self.player.p);
            let dir = self.choose_step(from, target);
            let next = from.step(dir);
            if Some(next) == target {
                if self.resolve_ambush(i) {
                    continue;
                }
            } else if self.world.is_passable(next)
                && next != self.player.world_pos
                && self.world_zombie_at(next).is_none()
            {
                self.zombies[i].pos = next;
            }
            i += 1;
        }
    }

    /// Move interior zombies. Barricades in the way take damage instead.
    pub(crate) fn step_interior_zombies(&mut self) {
        let Location::Interior { building, floor } = self.player.location else {
            return;
        };
        let turn = self.player.turn;
        for i in 0..self.interior_zombies.len() {
            let zombie = self.interior_zombies[i].clone();
            let def = zombie.def();
            if turn % def.speed.max(1) != 0 {
                continue;
            }
            let target = (zombie.floor == floor).then_some(self.player.p);
            let next = zombie.pos.step(self.choose_step(zombie.pos, target));
            if Some(next) == target || self.interior_zombie_at(next, zombie.floor).is_some() {
                continue;
            }
            let Some(cell) = self
                .buildings
                .get_mut(building.0)
                .and_then(|b| b.floors.get_mut(zombie.floor))
                .and_then(|f| f.cell_mut(next))
            else {
                continue;
            };
            if cell.is_barricaded() {
                cell.barricade_hp = (cell.barricade_hp - def.atk).max(0);
                if cell.barricade_hp == 0 {
                    self.say(
                        format!("A {} tears through a barricade!", def.name),
                        Severity::Danger,
                    );
                }
            } else if cell.is_walkable() {
                self.interior_zombies[i].pos = next;
            }
        }
    }

    /// Spawn up to `count` world zombies away from the player's anchor.
    /// Returns how many were placed.
    pub(crate) fn spawn_world_zombies(&mut self, count: usize) -> usize {
        let (w, h) = (self.world.width(), self.world.height());
        if w <= 0 || h <= 0 {
            return 0;
        }
        let anchor = self.anchor();
        let mut spawned = 0;
        let mut attempts = 0;
        while spawned < count
            && attempts < self.config.spawn_attempts
            && self.zombies.len() < self.config.max_world_zombies
        {
            attempts += 1;
            let pos = Position::new(self.rng.random_range(0..w), self.rng.random_range(0..h));
            if pos.manhattan(anchor) <= self.config.spawn_buffer
                || !self.world.is_passable(pos)
                || self.world_zombie_at(pos).is_some()
            {
                continue;
            }
            let Some(kind) = weighted_pick(&EnemyKind::spawn_table(), &mut self.rng).copied() else {
                break;
            };
            self.zombies.push(Zombie::new(kind, pos, 0));
            spawned += 1;
        }
        debug!(requested = count, spawned, attempts, total = self.zombies.len(), "world spawn");
        spawned
    }

    /// Populate an uncleared building's floors as the player walks in.
    /// Returns how many zombies were placed.
    pub(crate) fn spawn_interior_zombies(&mut self, id: BuildingId) -> usize {
        let Some(building) = self.buildings.get(id.0) else {
            return 0;
        };
        if building.cleared || building.is_bunker() {
            return 0;
        }
        let danger = building.building_type.profile().danger;
        let mut spawned = 0;
        for (index, floor) in building.floors.iter().enumerate() {
            let landing = if index == 0 {
                floor.entry_pos
            } else {
                floor
                    .map
                    .find(|c| c.tile.is_stairs())
                    .unwrap_or(floor.entry_pos)
            };
            let mut free: Vec<Position> = floor
                .map
                .iter()
                .filter(|(p, c)| {
                    c.is_walkable()
                        && c.tile == InteriorTile::Floor
                        && p.manhattan(landing) >= LANDING_CLEARANCE
                })
                .map(|(p, _)| p)
                .collect();
            let wanted = self.rng.random_range(0..=danger);
            for _ in 0..wanted {
                if free.is_empty() || self.interior_zombies.len() >= self.config.max_interior_zombies {
                    break;
                }
                let pos = free.swap_remove(self.rng.random_range(0..free.len()));
                let Some(kind) = weighted_pick(&EnemyKind::spawn_table(), &mut self.rng).copied() else {
                    break;
                };
                self.interior_zombies.push(Zombie::new(kind, pos, index));
                spawned += 1;
            }
        }
        debug!(building = id.0, spawned, "interior spawn");
        spawned
    }
}
