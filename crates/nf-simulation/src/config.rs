use std::path::{Path, PathBuf};

use nf_mechanics::StatRules;
use nf_worldgen::WorldGenConfig;
use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid JSON for a config.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Stamina spent by each kind of action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaCosts {
    /// Scavenging a world cell.
    pub scavenge: f64,
    /// Searching interior furniture.
    pub search: f64,
    /// One attack.
    pub attack: f64,
    /// Breaking down furniture.
    pub salvage: f64,
    /// Barricading an opening.
    pub barricade: f64,
    /// Crafting a recipe.
    pub build: f64,
}

impl Default for StaminaCosts {
    fn default() -> Self {
        Self {
            scavenge: 3.0,
            search: 2.0,
            attack: 4.0,
            salvage: 5.0,
            barricade: 6.0,
            build: 3.0,
        }
    }
}

/// Configuration for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. The same seed and the same commands replay the same game.
    pub seed: u64,
    /// World generation tuning.
    pub world: WorldGenConfig,
    /// Derived stat tuning.
    pub stats: StatRules,
    /// Stamina spent per action.
    pub costs: StaminaCosts,
    /// Turns in one day.
    pub turns_per_day: u32,
    /// Fraction of each day that is night, at the end of the day.
    pub night_ratio: f64,
    /// Food lost per tick.
    pub food_decay: f64,
    /// Water lost per tick.
    pub h2o_decay: f64,
    /// Health lost per tick while food or water is empty.
    pub starvation_damage: f64,
    /// Stamina regained per tick while fed and watered.
    pub stamina_regen: f64,
    /// Manhattan distance within which zombies chase the player.
    pub aggro_radius: i32,
    /// Cap on the world zombie population.
    pub max_world_zombies: usize,
    /// Cap on the interior zombie population.
    pub max_interior_zombies: usize,
    /// Zombies never spawn within this Manhattan distance of the player.
    pub spawn_buffer: i32,
    /// Attempts per spawning pass.
    pub spawn_attempts: u32,
    /// World zombies placed at the start.
    pub initial_zombies: usize,
    /// Zombies spawned on the first night.
    pub night_spawn_base: f64,
    /// Extra zombies spawned per elapsed day.
    pub night_spawn_escalation: f64,
    /// Durability lost by a weapon per strike.
    pub weapon_wear: i32,
    /// Durability lost by armour per hit taken.
    pub armor_wear: i32,
    /// Durability lost by a tool per use.
    pub tool_wear: i32,
    /// Chance per unbarricaded ground floor opening of a night break-in.
    pub break_in_chance: f64,
    /// Log entries shown by renderers.
    pub log_display_cap: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world: WorldGenConfig::default(),
            stats: StatRules::default(),
            costs: StaminaCosts::default(),
            turns_per_day: 120,
            night_ratio: 0.35,
            food_decay: 0.25,
            h2o_decay: 0.35,
            starvation_damage: 1.0,
            stamina_regen: 1.0,
            aggro_radius: 6,
            max_world_zombies: 40,
            max_interior_zombies: 8,
            spawn_buffer: 8,
            spawn_attempts: 200,
            initial_zombies: 15,
            night_spawn_base: 4.0,
            night_spawn_escalation: 2.0,
            weapon_wear: 1,
            armor_wear: 1,
            tool_wear: 1,
            break_in_chance: 0.2,
            log_display_cap: 50,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turns_per_day == 0 {
            return Err(ConfigError::Invalid("turns_per_day must be positive".into()));
        }
        if !(0.0..1.0).contains(&self.night_ratio) {
            return Err(ConfigError::Invalid("night_ratio must be in [0, 1)".into()));
        }
        if !(0.0..=1.0).contains(&self.break_in_chance) {
            return Err(ConfigError::Invalid("break_in_chance must be in [0, 1]".into()));
        }
        if self.food_decay < 0.0 || self.h2o_decay < 0.0 || self.starvation_damage < 0.0 {
            return Err(ConfigError::Invalid("decay and damage rates cannot be negative".into()));
        }
        Ok(())
    }

    /// `break_in_chance` as a usable probability. NaN means never.
    pub fn break_in_odds(&self) -> f64 {
        if self.break_in_chance.is_nan() {
            0.0
        } else {
            self.break_in_chance.clamp(0.0, 1.0)
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the world size.
    pub fn with_world_size(mut self, width: i32, height: i32) -> Self {
        self.world = self.world.with_size(width, height);
        self
    }

    /// Set the number of turns per day.
    pub fn with_turns_per_day(mut self, turns: u32) -> Self {
        self.turns_per_day = turns;
        self
    }

    /// Set the number of zombies placed at the start.
    pub fn with_initial_zombies(mut self, count: usize) -> Self {
        self.initial_zombies = count;
        self
    }

    /// Set the per-tick food and water decay.
    pub fn with_decay(mut self, food: f64, h2o: f64) -> Self {
        self.food_decay = food;
        self.h2o_decay = h2o;
        self
    }

    /// Set the night spawn base and per-day escalation.
    pub fn with_night_spawns(mut self, base: f64, escalation: f64) -> Self {
        self.night_spawn_base = base;
        self.night_spawn_escalation = escalation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.turns_per_day, 120);
        assert!((config.night_ratio - 0.35).abs() < f64::EPSILON);
        assert_eq!(config.log_display_cap, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = GameConfig::default()
            .with_seed(7)
            .with_world_size(20, 16)
            .with_turns_per_day(10)
            .with_initial_zombies(0)
            .with_decay(0.0, 0.0);
        assert_eq!(config.seed, 7);
        assert_eq!((config.world.width, config.world.height), (20, 16));
        assert_eq!(config.turns_per_day, 10);
        assert_eq!(config.initial_zombies, 0);
        assert_eq!(config.food_decay, 0.0);
    }

    #[test]
    fn loads_partial_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 9, "world": {{"width": 30}}, "stats": {{"base_attack": 6}}}}"#).unwrap();
        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.world.width, 30);
        assert_eq!(config.world.height, 48);
        assert_eq!(config.stats.base_attack, 6);
        assert_eq!(config.turns_per_day, 120);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GameConfig::from_json_file("/no/such/nightfall.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"turns_per_day": 0}}"#).unwrap();
        let err = GameConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = GameConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
