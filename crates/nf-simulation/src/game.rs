use nf_core::enemy::Zombie;
use nf_core::geom::Position;
use nf_core::interior::{Building, BuildingId, Floor, InteriorCell};
use nf_core::item::Slot;
use nf_core::player::{Location, Player};
use nf_core::skill::SkillId;
use nf_core::world::WorldMap;
use nf_mechanics::combat::{Wear, wear};
use nf_worldgen::{generate_bunker, place_bunker};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::clock::DayCycle;
use crate::config::GameConfig;
use crate::error::{ActionResult, GameError};
use crate::log::{MessageLog, Severity};
use crate::render::Renderer;

/// A running game: the world, the building arena, the player, both zombie
/// populations and the message log.
///
/// Every command validates first, then mutates, advances time with zero or
/// more ticks, and finally hands the game to the registered [`Renderer`].
/// A refused command leaves the state untouched apart from a log line.
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) cycle: DayCycle,
    pub(crate) rng: StdRng,
    pub(crate) world: WorldMap,
    pub(crate) buildings: Vec<Building>,
    pub(crate) player: Player,
    pub(crate) zombies: Vec<Zombie>,
    pub(crate) interior_zombies: Vec<Zombie>,
    pub(crate) log: MessageLog,
    pub(crate) last_night_spawn: u32,
    renderer: Option<Box<dyn Renderer>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.player.turn)
            .field("alive", &self.player.alive)
            .field("location", &self.player.location)
            .field("buildings", &self.buildings.len())
            .field("zombies", &self.zombies.len())
            .field("interior_zombies", &self.interior_zombies.len())
            .field("log", &self.log.len())
            .finish()
    }
}

impl Game {
    /// Generate a world from the config's seed and start a new game in it.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let world = nf_worldgen::world::generate(&config.world, &mut rng);
        Self::assemble(config, world, rng)
    }

    /// Start a new game in an existing world.
    pub fn from_world(config: GameConfig, world: WorldMap) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::assemble(config, world, rng)
    }

    fn assemble(config: GameConfig, mut world: WorldMap, rng: StdRng) -> Self {
        let bunker_pos = place_bunker(&mut world);
        let bunker = generate_bunker();
        let entry = bunker.floors.first().map(|f| f.entry_pos).unwrap_or_default();
        let id = BuildingId(0);
        if let Some(cell) = world.cell_mut(bunker_pos) {
            cell.interior = Some(id);
        }
        let player = Player::new(entry, bunker_pos, Location::Interior { building: id, floor: 0 });
        let mut game = Self {
            cycle: DayCycle::new(config.turns_per_day, config.night_ratio),
            log: MessageLog::new(config.log_display_cap),
            config,
            rng,
            world,
            buildings: vec![bunker],
            player,
            zombies: Vec::new(),
            interior_zombies: Vec::new(),
            last_night_spawn: 0,
            renderer: None,
        };
        let spawned = game.spawn_world_zombies(game.config.initial_zombies);
        game.say(
            "You wake in a bunker beneath the ruins. The crate by the wall holds what is left of your supplies.",
            Severity::Info,
        );
        info!(
            seed = game.config.seed,
            settlements = game.world.settlements.len(),
            bunker = %bunker_pos,
            zombies = spawned,
            "game started"
        );
        game
    }

    /// Register the renderer called after every command.
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
    }

    /// The configuration this game runs with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The outdoor map.
    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    /// Every building generated so far, indexed by [`BuildingId`].
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Look up a building in the arena.
    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(id.0)
    }

    /// The survivor.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Zombies roaming the world.
    pub fn zombies(&self) -> &[Zombie] {
        &self.zombies
    }

    /// Zombies inside the building the player is in.
    pub fn interior_zombies(&self) -> &[Zombie] {
        &self.interior_zombies
    }

    /// The player-facing message log.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Turns elapsed.
    pub fn turn(&self) -> u32 {
        self.player.turn
    }

    /// Current day, starting at 1.
    pub fn day(&self) -> u32 {
        self.cycle.day(self.player.turn)
    }

    /// True during the night.
    pub fn is_night(&self) -> bool {
        self.cycle.is_night(self.player.turn)
    }

    /// The day/night cycle.
    pub fn cycle(&self) -> DayCycle {
        self.cycle
    }

    /// True while the player lives.
    pub fn is_alive(&self) -> bool {
        self.player.alive
    }

    /// The building the player is in.
    pub fn current_building(&self) -> Option<&Building> {
        match self.player.location {
            Location::Interior { building, .. } => self.buildings.get(building.0),
            Location::World => None,
        }
    }

    /// The floor the player is on.
    pub fn current_floor(&self) -> Option<&Floor> {
        match self.player.location {
            Location::Interior { building, floor } => self.buildings.get(building.0)?.floors.get(floor),
            Location::World => None,
        }
    }

    pub(crate) fn current_floor_mut(&mut self) -> Option<&mut Floor> {
        match self.player.location {
            Location::Interior { building, floor } => self.buildings.get_mut(building.0)?.floors.get_mut(floor),
            Location::World => None,
        }
    }

    /// Mutable interior cell on the current floor.
    pub(crate) fn floor_cell_mut(&mut self, pos: Position) -> Option<&mut InteriorCell> {
        self.current_floor_mut()?.cell_mut(pos)
    }

    /// The world cell the player is on or will return to.
    pub fn anchor(&self) -> Position {
        match self.player.location {
            Location::World => self.player.p,
            Location::Interior { .. } => self.player.world_pos,
        }
    }

    /// Index of the world zombie standing at `pos`.
    pub(crate) fn world_zombie_at(&self, pos: Position) -> Option<usize> {
        self.zombies.iter().position(|z| z.pos == pos)
    }

    /// Index of the interior zombie standing at `pos` on `floor`.
    pub(crate) fn interior_zombie_at(&self, pos: Position, floor: usize) -> Option<usize> {
        self.interior_zombies
            .iter()
            .position(|z| z.floor == floor && z.pos == pos)
    }

    /// Log the outcome of a command and redraw.
    pub(crate) fn finish(&mut self, result: ActionResult) -> ActionResult {
        if let Err(err) = &result {
            self.say(err.to_string(), Severity::Warning);
        }
        if let Some(mut renderer) = self.renderer.take() {
            renderer.render(self);
            self.renderer = Some(renderer);
        }
        result
    }

    pub(crate) fn ensure_alive(&self) -> ActionResult {
        if self.player.alive {
            Ok(())
        } else {
            Err(GameError::Dead)
        }
    }

    /// Spend stamina, refusing if there is not enough.
    pub(crate) fn spend_stamina(&mut self, cost: f64) -> ActionResult {
        if self.player.stats.stm < cost {
            return Err(GameError::Exhausted);
        }
        self.player.stats.adjust_stm(-cost);
        Ok(())
    }

    pub(crate) fn say(&mut self, text: impl Into<String>, severity: Severity) {
        self.log.push(self.player.turn, text, severity);
    }

    pub(crate) fn gain_xp(&mut self, skill: SkillId, xp: u32) {
        if let Some(lvl) = self.player.skills.gain(skill, xp) {
            self.say(format!("{skill} skill increased to level {lvl}."), Severity::Good);
        }
    }

    /// Wear down whatever is equipped in `slot`, destroying it when it breaks.
    pub(crate) fn wear_slot(&mut self, slot: Slot, amount: i32) {
        let Some(uid) = self.player.equip.get(slot) else {
            return;
        };
        let Some(item) = self.player.inv.get_mut(uid) else {
            return;
        };
        match wear(item.durability, amount) {
            None => {}
            Some(Wear::Intact(left)) => item.durability = Some(left),
            Some(Wear::Broken) => {
                let name = item.def().map_or(item.id, |d| d.name);
                self.player.destroy(uid);
                self.say(format!("Your {name} breaks!"), Severity::Warning);
            }
        }
    }

    pub(crate) fn die(&mut self, cause: impl Into<String>) {
        let cause = cause.into();
        self.player.kill(cause.clone());
        self.say(format!("You died: {cause}."), Severity::Danger);
        info!(turn = self.player.turn, kills = self.player.kills, %cause, "player died");
    }
}
