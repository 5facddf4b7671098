use nf_core::geom::Position;
use nf_core::inventory::InvItem;
use nf_core::player::{Equipment, Location, Stats};
use nf_core::skill::Skills;
use nf_core::tile::BuildingType;
use nf_core::world::Settlement;
use nf_mechanics::stats;
use serde::Serialize;

use crate::game::Game;
use crate::log::LogEntry;

/// Draws the game after every command.
///
/// Renderers only read state; they never drive the simulation.
pub trait Renderer {
    /// Redraw from the current game state.
    fn render(&mut self, game: &Game);
}

/// A read-only, serializable view of everything a UI needs.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// Turns elapsed.
    pub turn: u32,
    /// Current day, starting at 1.
    pub day: u32,
    /// True during the night.
    pub night: bool,
    /// World or interior.
    pub location: Location,
    /// Type of the building the player is in.
    pub building: Option<BuildingType>,
    /// Label of the current floor.
    pub floor_label: Option<&'a str>,
    /// Position in the active space.
    pub position: Position,
    /// World cell the player is on or returns to.
    pub world_position: Position,
    /// Vital stats.
    pub stats: Stats,
    /// Derived attack.
    pub attack: i32,
    /// Derived defence.
    pub defense: i32,
    /// Derived sight radius.
    pub vision: i32,
    /// Carried weight.
    pub weight: f64,
    /// Carry capacity.
    pub capacity: f64,
    /// Skill levels.
    pub skills: &'a Skills,
    /// Carried items.
    pub inventory: &'a [InvItem],
    /// Equipment slots.
    pub equipment: Equipment,
    /// Zombies killed.
    pub kills: u32,
    /// False once dead.
    pub alive: bool,
    /// Cause of death.
    pub death_cause: Option<&'a str>,
    /// Size of the world population.
    pub world_zombies: usize,
    /// Size of the interior population.
    pub interior_zombies: usize,
    /// Settlements on the map.
    pub settlements: &'a [Settlement],
    /// Recent log lines, newest first.
    pub log: Vec<&'a LogEntry>,
}

impl Game {
    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let player = &self.player;
        let rules = &self.config.stats;
        Snapshot {
            turn: player.turn,
            day: self.day(),
            night: self.is_night(),
            location: player.location,
            building: self.current_building().map(|b| b.building_type),
            floor_label: self.current_floor().map(|f| f.label.as_str()),
            position: player.p,
            world_position: player.world_pos,
            stats: player.stats,
            attack: stats::attack(player, rules),
            defense: stats::defense(player),
            vision: stats::vision(player, rules, self.is_night()),
            weight: stats::weight(player),
            capacity: stats::capacity(player, rules),
            skills: &player.skills,
            inventory: player.inv.items(),
            equipment: player.equip,
            kills: player.kills,
            alive: player.alive,
            death_cause: player.death_cause.as_deref(),
            world_zombies: self.zombies.len(),
            interior_zombies: self.interior_zombies.len(),
            settlements: &self.world.settlements,
            log: self.log.recent().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter(Rc<Cell<u32>>);

    impl Renderer for Counter {
        fn render(&mut self, _game: &Game) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn renderer_runs_after_every_command() {
        let config = GameConfig::default().with_world_size(24, 20).with_initial_zombies(0);
        let mut game = Game::new(config);
        let count = Rc::new(Cell::new(0));
        game.set_renderer(Box::new(Counter(count.clone())));
        let _ = game.rest();
        let _ = game.move_by(5, 5);
        let _ = game.count_item("plank");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn snapshot_serializes() {
        let game = Game::new(GameConfig::default().with_world_size(24, 20));
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["turn"], 0);
        assert_eq!(json["alive"], true);
        assert_eq!(json["interior_zombies"], 0);
        assert!(json["log"].as_array().is_some_and(|l| !l.is_empty()));
    }
}
