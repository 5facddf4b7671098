use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use nf_core::tile::Tile;
use nf_worldgen::{WorldGenConfig, world};

use crate::render::world_rows;

pub fn run(seed: u64, width: i32, height: i32) -> Result<(), String> {
    if width < 8 || height < 8 {
        return Err(format!("map must be at least 8x8, got {width}x{height}"));
    }
    let config = WorldGenConfig::default().with_size(width, height);
    let map = world::generate(&config, &mut StdRng::seed_from_u64(seed));

    println!(
        "  {} {}",
        "World".bold(),
        format!("({width}x{height}, seed={seed})").dimmed()
    );
    println!();
    for row in world_rows(&map) {
        println!("  {row}");
    }
    println!();

    if map.settlements.is_empty() {
        println!("  No settlements placed.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Settlement", "Tier", "Centre", "Buildings"]);
    for s in &map.settlements {
        table.add_row(vec![
            s.name.clone(),
            s.tier.to_string(),
            s.center.to_string(),
            s.buildings.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    let buildings = map.count_tiles(Tile::is_building);
    println!(
        "  {} settlements, {buildings} buildings, {} forest, {} water",
        map.settlements.len(),
        map.count_tiles(|t| t == Tile::Forest),
        map.count_tiles(|t| t == Tile::Water)
    );
    Ok(())
}
