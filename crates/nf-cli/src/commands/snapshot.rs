use std::path::Path;

use nf_simulation::Game;

pub fn run(seed: Option<u64>, config: Option<&Path>) -> Result<(), String> {
    let config = super::load_config(config, seed)?;
    let game = Game::new(config);
    let json = serde_json::to_string_pretty(&game.snapshot())
        .map_err(|e| format!("serialization failed: {e}"))?;
    println!("{json}");
    Ok(())
}
