//! Advancing time: hunger, thirst, stamina, zombies, days and nights.

use nf_core::enemy::{EnemyKind, Zombie};
use nf_core::geom::Position;
use nf_core::player::Location;
use nf_core::weighted::weighted_pick;
use rand::Rng;
use tracing::{debug, info};

use crate::game::Game;
use crate::log::Severity;

impl Game {
    /// Advance the world by one turn. Does nothing once the player is dead.
    pub(crate) fn tick(&mut self) {
        if !self.player.alive {
            return;
        }
        self.player.turn += 1;
        let turn = self.player.turn;

        let stats = &mut self.player.stats;
        stats.adjust_food(-self.config.food_decay);
        stats.adjust_h2o(-self.config.h2o_decay);
        let starving = stats.food <= 0.0;
        let parched = stats.h2o <= 0.0;
        if starving || parched {
            stats.adjust_hp(-self.config.starvation_damage);
            if stats.hp <= 0.0 {
                let cause = if starving { "starvation" } else { "dehydration" };
                self.die(cause);
                return;
            }
        } else {
            stats.adjust_stm(self.config.stamina_regen);
        }

        if self.player.location.is_interior() {
            self.step_interior_zombies();
        } else {
            self.step_world_zombies();
        }
        if !self.player.alive {
            return;
        }

        if self.cycle.is_dawn(turn) {
            let day = self.cycle.day(turn);
            self.say(format!("Dawn breaks. Day {day} begins."), Severity::Info);
            info!(day, "new day");
        }
        self.check_nightfall();
    }

    /// Spawn the night's horde once per day, on its first night tick.
    fn check_nightfall(&mut self) {
        let turn = self.player.turn;
        if !self.cycle.is_night(turn) {
            return;
        }
        let day = self.cycle.day(turn);
        if day <= self.last_night_spawn {
            return;
        }
        self.last_night_spawn = day;
        let wanted = self.config.night_spawn_base + f64::from(day - 1) * self.config.night_spawn_escalation;
        let count = wanted.floor().max(0.0) as usize;
        let spawned = self.spawn_world_zombies(count);
        self.say("Night falls. Somewhere close, the dead begin to stir.", Severity::Danger);
        info!(day, requested = count, spawned, "night spawn");
        self.break_in();
    }

    /// At nightfall, unbarricaded ground floor openings may let zombies in.
    fn break_in(&mut self) {
        let Location::Interior { building, floor } = self.player.location else {
            return;
        };
        let Some(ground) = self
            .buildings
            .get(building.0)
            .filter(|b| !b.is_bunker())
            .and_then(|b| b.floors.first())
        else {
            return;
        };
        let openings: Vec<Position> = ground
            .map
            .iter()
            .filter(|(_, c)| c.tile.def().opening && !c.is_barricaded())
            .map(|(p, _)| p)
            .collect();

        let mut arrived = 0;
        for opening in openings {
            if self.interior_zombies.len() >= self.config.max_interior_zombies {
                break;
            }
            if !self.rng.random_bool(self.config.break_in_odds()) {
                continue;
            }
            let spot = std::iter::once(opening).chain(opening.neighbors4()).find(|p| {
                ground.is_walkable(*p)
                    && !(floor == 0 && *p == self.player.p)
                    && !self.interior_zombies.iter().any(|z| z.floor == 0 && z.pos == *p)
            });
            let kind = weighted_pick(&EnemyKind::spawn_table(), &mut self.rng).copied();
            if let Some((pos, kind)) = spot.zip(kind) {
                self.interior_zombies.push(Zombie::new(kind, pos, 0));
                arrived += 1;
            }
        }
        if arrived > 0 {
            self.say(
                format!("Glass shatters downstairs. {arrived} of them got in."),
                Severity::Danger,
            );
            debug!(arrived, "night break-in");
        }
    }
}
