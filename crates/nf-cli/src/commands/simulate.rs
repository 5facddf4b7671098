use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use nf_core::geom::Direction;
use nf_core::item::Slot;
use nf_simulation::{ActionResult, Game, Severity};

use crate::render::log_line;

/// Commands tried per requested turn before the autopilot gives up.
const ATTEMPTS_PER_TURN: u32 = 4;

/// Items the autopilot eats, drinks or applies, best first.
const FOOD: &[&str] = &["canned_food", "energy_bar", "crackers", "berries"];
const DRINK: &[&str] = &["water_bottle", "soda", "dirty_water"];
const MEDICINE: &[&str] = &["medkit", "bandage", "painkillers"];

fn first_carried<'a>(game: &Game, ids: &[&'a str]) -> Option<&'a str> {
    ids.iter().copied().find(|id| game.count_item(id) > 0)
}

/// One decision of the scripted survivor.
fn step(game: &mut Game, rng: &mut StdRng) -> ActionResult {
    let stats = game.player().stats;
    let here = game.player().p;
    let indoors = game.player().location.is_interior();

    let supply = [(stats.hp, MEDICINE), (stats.food, FOOD), (stats.h2o, DRINK)]
        .into_iter()
        .filter(|(value, _)| *value < 50.0)
        .find_map(|(_, ids)| first_carried(game, ids));
    if let Some(id) = supply {
        return game.use_item(id);
    }

    let zombies = if indoors { game.interior_zombies() } else { game.zombies() };
    let adjacent = zombies.iter().map(|z| z.pos).find(|pos| pos.is_adjacent4(here));
    if let Some(target) = adjacent {
        return game.attack_zombie(target.x, target.y, indoors);
    }
    if stats.stm < 20.0 {
        return game.rest();
    }
    if indoors {
        if game.search_interior().is_ok() {
            return Ok(());
        }
        if game.exit_building().is_ok() {
            return Ok(());
        }
    } else {
        if game.scavenge().is_ok() {
            return Ok(());
        }
        if rng.random_bool(0.3) && game.enter_building().is_ok() {
            return Ok(());
        }
    }
    let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    let (dx, dy) = dir.delta();
    game.move_by(dx, dy)
}

/// Pick up the starting supplies and gear up.
fn prepare(game: &mut Game) {
    let supplies = [
        ("knife", 1),
        ("hammer", 1),
        ("canned_food", 3),
        ("water_bottle", 3),
        ("bandage", 2),
    ];
    for (id, qty) in supplies {
        let _ = game.retrieve_from_container(id, qty);
    }
    let _ = game.equip_item("knife");
    let _ = game.equip_item("hammer");
    let _ = game.exit_building();
}

pub fn run(turns: u32, seed: Option<u64>, config: Option<&Path>, verbose: bool) -> Result<(), String> {
    let config = super::load_config(config, seed)?;
    let seed = config.seed;
    let mut game = Game::new(config);
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);

    prepare(&mut game);
    let mut attempts = 0;
    let mut refused = 0;
    let budget = turns.saturating_mul(ATTEMPTS_PER_TURN);
    while game.is_alive() && game.turn() < turns && attempts < budget {
        attempts += 1;
        if step(&mut game, &mut rng).is_err() {
            refused += 1;
        }
    }
    debug!(attempts, refused, turn = game.turn(), "autopilot finished");

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({turns} turns, seed={seed})").dimmed()
    );
    println!();

    if verbose {
        println!("  {}", "Message Log".bold().underline());
        println!();
        for entry in game.log().entries() {
            let label = format!("[turn {:>4}]", entry.turn).dimmed();
            println!("  {label} {}", log_line(entry));
        }
        println!();
    } else {
        let notable: Vec<_> = game
            .log()
            .entries()
            .iter()
            .filter(|e| e.severity == Severity::Danger)
            .collect();
        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for entry in notable {
                println!("  {}  {}", format!("[turn {:>4}]", entry.turn).dimmed(), entry.text);
            }
            println!();
        }
    }

    let player = game.player();
    let status = if player.alive {
        "alive".green().to_string()
    } else {
        format!("dead ({})", player.death_cause.as_deref().unwrap_or("unknown")).red().to_string()
    };
    let weapon = player.equipped_def(Slot::Weapon).map_or("none", |d| d.name);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec!["Status".to_string(), status]);
    table.add_row(vec!["Turns".to_string(), game.turn().to_string()]);
    table.add_row(vec!["Day".to_string(), game.day().to_string()]);
    table.add_row(vec!["Kills".to_string(), player.kills.to_string()]);
    table.add_row(vec!["Health".to_string(), format!("{:.0}", player.stats.hp)]);
    table.add_row(vec!["Stamina".to_string(), format!("{:.0}", player.stats.stm)]);
    table.add_row(vec!["Food".to_string(), format!("{:.1}", player.stats.food)]);
    table.add_row(vec!["Water".to_string(), format!("{:.1}", player.stats.h2o)]);
    table.add_row(vec!["Weapon".to_string(), weapon.to_string()]);
    table.add_row(vec!["Items".to_string(), player.inv.len().to_string()]);
    table.add_row(vec!["Buildings seen".to_string(), game.buildings().len().saturating_sub(1).to_string()]);
    table.add_row(vec!["World zombies".to_string(), game.zombies().len().to_string()]);
    table.add_row(vec!["Refused commands".to_string(), refused.to_string()]);
    println!("{table}");

    Ok(())
}
