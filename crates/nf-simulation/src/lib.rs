//! Turn-based survival simulation for Nightfall.
//!
//! [`Game`] owns the whole run: the generated world, the building arena,
//! the player, both zombie populations and the message log. Player commands
//! are methods on [`Game`]; each one validates, mutates, advances time with
//! zero or more ticks and then redraws through the registered [`Renderer`].
//!
//! ```no_run
//! use nf_simulation::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7));
//! let _ = game.exit_building();
//! let _ = game.move_by(0, 1);
//! println!("turn {} day {}", game.turn(), game.day());
//! ```

mod ai;
mod combat;
mod command;
mod tick;

/// Day and night cycle.
pub mod clock;
/// Tunable game rules.
pub mod config;
/// Command refusals.
pub mod error;
/// The game engine.
pub mod game;
/// Player-facing message log.
pub mod log;
/// Rendering hook and state snapshots.
pub mod render;

#[cfg(test)]
mod testing;

/// Re-export the day cycle.
pub use clock::DayCycle;
/// Re-export configuration types.
pub use config::{ConfigError, GameConfig, StaminaCosts};
/// Re-export error types.
pub use error::{ActionResult, GameError};
/// Re-export the engine.
pub use game::Game;
/// Re-export log types.
pub use log::{LogEntry, MessageLog, Severity};
/// Re-export rendering types.
pub use render::{Renderer, Snapshot};
