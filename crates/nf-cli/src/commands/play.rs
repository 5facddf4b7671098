use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use nf_core::geom::Direction;
use nf_core::item::Slot;
use nf_core::recipe::RECIPES;
use nf_simulation::{ActionResult, Game, Renderer};

use crate::render::{TerminalRenderer, draw_view};

const HELP: &str = "\
  Movement   n/e/s/w (or north, east, ...), enter, exit, stairs
  Looting    scavenge, search, salvage
  Survival   rest, use <item>, barricade
  Fighting   attack <dir>
  Gear       equip <item>, unequip <slot>, inv
  Items      drop/take/store/retrieve <item> [qty]
  Crafting   recipes, build <recipe>, place <item>
  Other      look, help, quit";

/// A parsed line of player input.
#[derive(Debug, PartialEq)]
enum Input {
    Move(Direction),
    Attack(Direction),
    Enter,
    Exit,
    Stairs,
    Scavenge,
    Search,
    Salvage,
    Barricade,
    Rest,
    Use(String),
    Equip(String),
    Unequip(Slot),
    Drop(String, u32),
    Take(String, u32),
    Store(String, u32),
    Retrieve(String, u32),
    Build(String),
    Place(String),
    Inventory,
    Recipes,
    Look,
    Help,
    Quit,
}

/// Split an item argument into its name and an optional trailing quantity.
fn item_and_qty(args: &[&str]) -> Result<(String, u32), String> {
    match args.split_last() {
        None => Err("which item?".into()),
        Some((last, rest)) if !rest.is_empty() => match last.parse::<u32>() {
            Ok(qty) => Ok((rest.join(" "), qty)),
            Err(_) => Ok((args.join(" "), 1)),
        },
        Some(_) => Ok((args.join(" "), 1)),
    }
}

fn item(args: &[&str]) -> Result<String, String> {
    if args.is_empty() {
        Err("which item?".into())
    } else {
        Ok(args.join(" "))
    }
}

fn direction(args: &[&str]) -> Result<Direction, String> {
    args.first()
        .and_then(|d| Direction::parse(d))
        .ok_or_else(|| "which direction? (n, e, s, w)".to_string())
}

fn parse(line: &str) -> Result<Input, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = words.split_first() else {
        return Err("say something".into());
    };
    if let Some(dir) = Direction::parse(verb) {
        return Ok(Input::Move(dir));
    }
    let input = match verb.to_lowercase().as_str() {
        "go" | "move" => Input::Move(direction(args)?),
        "attack" | "hit" | "a" => Input::Attack(direction(args)?),
        "enter" => Input::Enter,
        "exit" | "leave" => Input::Exit,
        "stairs" | "climb" => Input::Stairs,
        "scavenge" => Input::Scavenge,
        "search" => Input::Search,
        "salvage" => Input::Salvage,
        "barricade" => Input::Barricade,
        "rest" | "sleep" => Input::Rest,
        "use" | "eat" | "drink" => Input::Use(item(args)?),
        "equip" | "wield" | "wear" => Input::Equip(item(args)?),
        "unequip" | "remove" => {
            let slot = args
                .first()
                .and_then(|s| Slot::parse(s))
                .ok_or_else(|| "which slot? (weapon, tool, body, feet, back)".to_string())?;
            Input::Unequip(slot)
        }
        "drop" => {
            let (id, qty) = item_and_qty(args)?;
            Input::Drop(id, qty)
        }
        "take" | "pickup" | "get" => {
            let (id, qty) = item_and_qty(args)?;
            Input::Take(id, qty)
        }
        "store" => {
            let (id, qty) = item_and_qty(args)?;
            Input::Store(id, qty)
        }
        "retrieve" => {
            let (id, qty) = item_and_qty(args)?;
            Input::Retrieve(id, qty)
        }
        "build" | "craft" => Input::Build(item(args)?),
        "place" => Input::Place(item(args)?),
        "inv" | "inventory" | "i" => Input::Inventory,
        "recipes" => Input::Recipes,
        "look" | "l" => Input::Look,
        "help" | "?" => Input::Help,
        "quit" | "q" => Input::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(input)
}

fn apply(game: &mut Game, input: Input) -> ActionResult {
    let p = game.player().p;
    let indoors = game.player().location.is_interior();
    match input {
        Input::Move(dir) => {
            let (dx, dy) = dir.delta();
            game.move_by(dx, dy)
        }
        Input::Attack(dir) => {
            let target = p.step(dir);
            game.attack_zombie(target.x, target.y, indoors)
        }
        Input::Enter => game.enter_building(),
        Input::Exit => game.exit_building(),
        Input::Stairs => game.use_stairs(),
        Input::Scavenge => game.scavenge(),
        Input::Search => game.search_interior(),
        Input::Salvage => game.salvage(),
        Input::Barricade => game.barricade(),
        Input::Rest => game.rest(),
        Input::Use(id) => game.use_item(&id),
        Input::Equip(id) => game.equip_item(&id),
        Input::Unequip(slot) => game.unequip(slot),
        Input::Drop(id, qty) => game.drop_item(&id, qty),
        Input::Take(id, qty) => game.pickup_item(&id, qty),
        Input::Store(id, qty) => game.store_in_container(&id, qty),
        Input::Retrieve(id, qty) => game.retrieve_from_container(&id, qty),
        Input::Build(id) => game.build(&id),
        Input::Place(id) => {
            if indoors {
                game.place_interior(&id)
            } else {
                game.place_structure(&id)
            }
        }
        Input::Inventory | Input::Recipes | Input::Look | Input::Help | Input::Quit => Ok(()),
    }
}

fn print_inventory(game: &Game) {
    let player = game.player();
    if player.inv.is_empty() {
        println!("  You carry nothing.");
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Qty", "Durability", "Equipped"]);
    for entry in player.inv.items() {
        let name = entry.def().map_or(entry.id, |d| d.name);
        let durability = entry.durability.map_or_else(|| "-".to_string(), |d| d.to_string());
        let slot = player
            .equip
            .slot_of(entry.uid)
            .map_or_else(String::new, |s| s.to_string());
        table.add_row(vec![name.to_string(), entry.qty.to_string(), durability, slot]);
    }
    println!("{table}");
}

fn print_recipes() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Recipe", "Materials", "Needs"]);
    for r in RECIPES {
        let materials: Vec<String> = r.materials.iter().map(|(id, qty)| format!("{qty} {id}")).collect();
        let mut needs = Vec::new();
        if let Some((skill, lvl)) = r.skill {
            needs.push(format!("{skill} {lvl}"));
        }
        if let Some(tool) = r.tool {
            needs.push(tool.to_string());
        }
        if let Some(station) = r.station {
            needs.push(station.to_string());
        }
        table.add_row(vec![r.id.to_string(), materials.join(", "), needs.join(", ")]);
    }
    println!("{table}");
}

pub fn run(seed: Option<u64>, config: Option<&Path>) -> Result<(), String> {
    let config = super::load_config(config, seed)?;
    let mut game = Game::new(config);

    println!("  {} Type 'help' for commands, 'quit' to exit.\n", "Nightfall.".bold());
    let mut renderer = TerminalRenderer::new();
    renderer.render(&game);
    game.set_renderer(Box::new(renderer));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        if line.trim().is_empty() {
            continue;
        }

        let input = match parse(&line) {
            Ok(input) => input,
            Err(msg) => {
                println!("  {}\n", msg.yellow());
                continue;
            }
        };
        match input {
            Input::Quit => break,
            Input::Help => println!("{HELP}\n"),
            Input::Inventory => print_inventory(&game),
            Input::Recipes => print_recipes(),
            Input::Look => draw_view(&game),
            other => {
                // Refusals are already in the game log, which the renderer prints.
                let _ = apply(&mut game, other);
            }
        }
        if !game.is_alive() {
            println!("  Survived {} turns, {} kills.", game.turn(), game.player().kills);
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions_and_verbs() {
        assert_eq!(parse("n"), Ok(Input::Move(Direction::North)));
        assert_eq!(parse("go west"), Ok(Input::Move(Direction::West)));
        assert_eq!(parse("attack e"), Ok(Input::Attack(Direction::East)));
        assert_eq!(parse("  rest "), Ok(Input::Rest));
        assert!(parse("attack").is_err());
        assert!(parse("dance").is_err());
    }

    #[test]
    fn item_names_may_have_spaces_and_a_quantity() {
        assert_eq!(parse("use canned food"), Ok(Input::Use("canned food".into())));
        assert_eq!(parse("drop plank 3"), Ok(Input::Drop("plank".into(), 3)));
        assert_eq!(parse("take water bottle"), Ok(Input::Take("water bottle".into(), 1)));
        assert_eq!(parse("store 3"), Ok(Input::Store("3".into(), 1)));
        assert!(parse("drop").is_err());
    }

    #[test]
    fn unequip_needs_a_slot() {
        assert_eq!(parse("unequip weapon"), Ok(Input::Unequip(Slot::Weapon)));
        assert!(parse("unequip hat").is_err());
    }
}
