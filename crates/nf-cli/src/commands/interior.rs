use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use nf_core::error::CoreError;
use nf_core::tile::BuildingType;

use crate::render::floor_rows;

pub fn run(kind: &str, seed: u64) -> Result<(), String> {
    let bt = BuildingType::parse(kind)
        .ok_or_else(|| CoreError::UnknownBuildingType(kind.to_string()).to_string())?;
    let building = nf_worldgen::interior::generate(bt, &mut StdRng::seed_from_u64(seed));
    let profile = bt.profile();

    println!(
        "  {} {}",
        bt.name().bold(),
        format!("(danger {}, seed={seed})", profile.danger).dimmed()
    );
    for floor in &building.floors {
        println!();
        println!("  {}", floor.label.underline());
        for row in floor_rows(floor) {
            println!("  {row}");
        }
    }
    Ok(())
}
