//! Coloured terminal drawing.

use colored::{ColoredString, Colorize};

use nf_core::enemy::Zombie;
use nf_core::geom::Position;
use nf_core::interior::{Floor, InteriorCell, InteriorTile};
use nf_core::player::Location;
use nf_core::tile::Tile;
use nf_core::world::WorldMap;
use nf_mechanics::stats;
use nf_simulation::{Game, LogEntry, Renderer, Severity};

/// Cells drawn on each side of the player.
const VIEW_RADIUS: i32 = 8;

pub fn world_glyph(tile: Tile) -> ColoredString {
    let glyph = tile.def().glyph.to_string();
    match tile {
        Tile::Grass => glyph.green(),
        Tile::Forest => glyph.green().bold(),
        Tile::Water => glyph.blue(),
        Tile::Road | Tile::Bridge => glyph.white().dimmed(),
        Tile::Campfire => glyph.red().bold(),
        Tile::Tent => glyph.yellow(),
        Tile::Building(_) => glyph.yellow().bold(),
    }
}

pub fn interior_glyph(cell: &InteriorCell) -> ColoredString {
    let glyph = cell.tile.def().glyph.to_string();
    if cell.is_barricaded() {
        return glyph.yellow().bold();
    }
    match cell.tile {
        InteriorTile::Wall => glyph.white().dimmed(),
        InteriorTile::Floor => glyph.normal(),
        InteriorTile::Door | InteriorTile::Window => glyph.cyan(),
        t if t.is_stairs() || t == InteriorTile::Ladder => glyph.magenta(),
        _ if cell.loot > 0 => glyph.yellow(),
        _ => glyph.white(),
    }
}

pub fn log_line(entry: &LogEntry) -> ColoredString {
    let text = entry.text.as_str();
    match entry.severity {
        Severity::Info => text.normal(),
        Severity::Good => text.green(),
        Severity::Warning => text.yellow(),
        Severity::Danger => text.red().bold(),
        Severity::Combat => text.red(),
    }
}

/// Every row of a world map.
pub fn world_rows(map: &WorldMap) -> Vec<String> {
    (0..map.height())
        .map(|y| {
            (0..map.width())
                .filter_map(|x| map.tile(Position::new(x, y)))
                .map(|t| world_glyph(t).to_string())
                .collect()
        })
        .collect()
}

/// Every row of a floor.
pub fn floor_rows(floor: &Floor) -> Vec<String> {
    (0..floor.h())
        .map(|y| {
            (0..floor.w())
                .filter_map(|x| floor.cell(Position::new(x, y)))
                .map(|c| interior_glyph(c).to_string())
                .collect()
        })
        .collect()
}

fn zombie_glyph(zombies: &[&Zombie], pos: Position) -> Option<ColoredString> {
    zombies
        .iter()
        .find(|z| z.pos == pos)
        .map(|z| z.def().glyph.to_string().red().bold())
}

fn viewport(game: &Game) -> Vec<String> {
    let player = game.player();
    let centre = player.p;
    let floor = game.current_floor();
    let sight = stats::vision(player, &game.config().stats, game.is_night());
    let zombies: Vec<&Zombie> = match player.location {
        Location::Interior { floor: idx, .. } => {
            game.interior_zombies().iter().filter(|z| z.floor == idx).collect()
        }
        Location::World => game.zombies().iter().collect(),
    };

    (centre.y - VIEW_RADIUS..=centre.y + VIEW_RADIUS)
        .map(|y| {
            (centre.x - VIEW_RADIUS..=centre.x + VIEW_RADIUS)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if pos == centre {
                        return "@".bright_white().bold().to_string();
                    }
                    let base = match floor {
                        Some(f) => f.cell(pos).map(interior_glyph),
                        None => game.world().tile(pos).map(world_glyph),
                    };
                    let Some(base) = base else {
                        return " ".to_string();
                    };
                    let visible = floor.is_some() || pos.chebyshev(centre) <= sight;
                    match zombie_glyph(&zombies, pos).filter(|_| visible) {
                        Some(z) => z.to_string(),
                        None => base.to_string(),
                    }
                })
                .collect()
        })
        .collect()
}

fn bar(label: &str, value: f64) -> String {
    let text = format!("{label} {value:>3.0}");
    if value < 25.0 {
        text.red().bold().to_string()
    } else if value < 50.0 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}

pub fn status_line(game: &Game) -> String {
    let snap = game.snapshot();
    let time = if snap.night { "night".blue().bold() } else { "day".yellow() };
    let place = match (snap.building, snap.floor_label) {
        (Some(bt), Some(label)) => format!("{bt}, {label}"),
        _ => format!("outside {}", snap.world_position),
    };
    let mut line = format!(
        "Day {} ({time}) turn {} | {} {} {} {} | atk {} def {} | kills {} | {place}",
        snap.day,
        snap.turn,
        bar("HP", snap.stats.hp),
        bar("STM", snap.stats.stm),
        bar("FOOD", snap.stats.food),
        bar("H2O", snap.stats.h2o),
        snap.attack,
        snap.defense,
        snap.kills,
    );
    if stats::is_encumbered(game.player(), &game.config().stats) {
        line.push_str(&format!(" | {}", "encumbered".yellow()));
    }
    line
}

/// Redraws the viewport, the status line and any new log lines.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    shown: usize,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Print the viewport and the status line.
pub fn draw_view(game: &Game) {
    for row in viewport(game) {
        println!("  {row}");
    }
    println!("  {}", status_line(game));
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, game: &Game) {
        draw_view(game);
        let entries = game.log().entries();
        for entry in entries.iter().skip(self.shown) {
            println!("  {}", log_line(entry));
        }
        self.shown = entries.len();
        if !game.is_alive() {
            let cause = game.player().death_cause.as_deref().unwrap_or("unknown causes");
            println!("  {} {cause}.", "You died:".red().bold());
        }
        println!();
    }
}
