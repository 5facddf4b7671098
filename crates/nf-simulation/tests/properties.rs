//! Property tests driving the engine with random command sequences.
//!
//! Whatever the player does, stats stay in range, death is final, world
//! loot never grows, and the player's location always points somewhere real.

#![allow(missing_docs)]

use nf_core::player::Location;
use nf_simulation::{Game, GameConfig, GameError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Cmd {
    Move(i32, i32),
    Attack(i32, i32),
    Enter,
    Exit,
    Stairs,
    Scavenge,
    Search,
    Salvage,
    Barricade,
    Rest,
    Use(&'static str),
    Build(&'static str),
    Equip(&'static str),
}

fn dir() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![Just((0, -1)), Just((1, 0)), Just((0, 1)), Just((-1, 0))]
}

fn cmd() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        6 => dir().prop_map(|(dx, dy)| Cmd::Move(dx, dy)),
        2 => dir().prop_map(|(dx, dy)| Cmd::Attack(dx, dy)),
        1 => Just(Cmd::Enter),
        1 => Just(Cmd::Exit),
        1 => Just(Cmd::Stairs),
        2 => Just(Cmd::Scavenge),
        2 => Just(Cmd::Search),
        1 => Just(Cmd::Salvage),
        1 => Just(Cmd::Barricade),
        1 => Just(Cmd::Rest),
        1 => prop_oneof![Just("canned_food"), Just("water_bottle"), Just("bandage")].prop_map(Cmd::Use),
        1 => prop_oneof![Just("bandage"), Just("campfire"), Just("rope")].prop_map(Cmd::Build),
        1 => prop_oneof![Just("knife"), Just("hammer")].prop_map(Cmd::Equip),
    ]
}

fn run(game: &mut Game, cmd: &Cmd) -> Result<(), GameError> {
    let p = game.player().p;
    let indoors = game.player().location.is_interior();
    match *cmd {
        Cmd::Move(dx, dy) => game.move_by(dx, dy),
        Cmd::Attack(dx, dy) => game.attack_zombie(p.x + dx, p.y + dy, indoors),
        Cmd::Enter => game.enter_building(),
        Cmd::Exit => game.exit_building(),
        Cmd::Stairs => game.use_stairs(),
        Cmd::Scavenge => game.scavenge(),
        Cmd::Search => game.search_interior(),
        Cmd::Salvage => game.salvage(),
        Cmd::Barricade => game.barricade(),
        Cmd::Rest => game.rest(),
        Cmd::Use(id) => game.use_item(id),
        Cmd::Build(id) => game.build(id),
        Cmd::Equip(id) => game.equip_item(id),
    }
}

fn world_loot(game: &Game) -> Vec<u32> {
    game.world().grid.iter().map(|(_, c)| c.loot).collect()
}

fn config(seed: u64) -> GameConfig {
    GameConfig::default()
        .with_seed(seed)
        .with_world_size(24, 20)
        .with_turns_per_day(40)
        .with_initial_zombies(6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn invariants_hold_for_any_command_sequence(
        seed in any::<u64>(),
        cmds in prop::collection::vec(cmd(), 1..60),
    ) {
        let mut game = Game::new(config(seed));
        let _ = game.retrieve_from_container("knife", 1);
        let _ = game.retrieve_from_container("hammer", 1);
        let _ = game.retrieve_from_container("canned_food", 3);

        for cmd in &cmds {
            let loot_before = world_loot(&game);
            let was_alive = game.is_alive();
            let turn_before = game.turn();
            let stats_before = game.player().stats;

            let result = run(&mut game, cmd);

            let player = game.player();
            prop_assert!(player.stats.in_range(), "{:?} after {:?}", player.stats, cmd);

            if !was_alive {
                prop_assert_eq!(result, Err(GameError::Dead));
                prop_assert_eq!(game.turn(), turn_before);
                prop_assert_eq!(player.stats, stats_before);
                prop_assert!(!player.alive);
            }
            if !player.alive {
                prop_assert!(player.death_cause.is_some());
                prop_assert_eq!(player.stats.hp, 0.0);
            }

            for ((_, cell), before) in game.world().grid.iter().zip(&loot_before) {
                prop_assert!(cell.loot <= cell.max);
                prop_assert!(cell.loot <= *before);
            }

            match player.location {
                Location::World => {
                    prop_assert!(game.interior_zombies().is_empty());
                    prop_assert!(game.world().grid.in_bounds(player.p));
                    prop_assert_eq!(player.p, player.world_pos);
                }
                Location::Interior { building, floor } => {
                    let b = game.building(building);
                    prop_assert!(b.is_some_and(|b| floor < b.floors.len()));
                    let f = game.current_floor();
                    prop_assert!(f.is_some_and(|f| f.cell(player.p).is_some()));
                    prop_assert!(game.interior_zombies().iter().all(|z| z.floor < 2));
                }
            }
            prop_assert!(game.zombies().len() <= game.config().max_world_zombies);
        }
    }

    #[test]
    fn same_seed_same_game(seed in any::<u64>(), cmds in prop::collection::vec(cmd(), 1..30)) {
        let mut a = Game::new(config(seed));
        let mut b = Game::new(config(seed));
        for cmd in &cmds {
            prop_assert_eq!(run(&mut a, cmd), run(&mut b, cmd));
        }
        prop_assert_eq!(a.player().p, b.player().p);
        prop_assert_eq!(a.player().stats, b.player().stats);
        prop_assert_eq!(a.zombies().len(), b.zombies().len());
    }
}

#[test]
fn dead_players_stay_dead() {
    let mut config = config(3).with_decay(100.0, 100.0);
    config.starvation_damage = 10.0;
    let mut game = Game::new(config);
    game.exit_building().unwrap();
    let steps = [(0, 1), (1, 0), (0, -1), (-1, 0)];
    for (dx, dy) in steps.iter().cycle().take(200) {
        if !game.is_alive() {
            break;
        }
        let _ = game.move_by(*dx, *dy);
    }
    assert!(!game.is_alive());
    let turn = game.turn();
    assert_eq!(game.move_by(1, 0), Err(GameError::Dead));
    assert_eq!(game.rest(), Err(GameError::Dead));
    assert_eq!(game.turn(), turn);
    assert!(game.player().death_cause.is_some());
}
