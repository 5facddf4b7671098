pub mod interior;
pub mod map;
pub mod play;
pub mod simulate;
pub mod snapshot;

use std::path::Path;

use nf_simulation::GameConfig;

/// Load the config file if one was given, then apply the seed override.
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<GameConfig, String> {
    let config = match path {
        Some(path) => GameConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => GameConfig::default(),
    };
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}
