//! Applying combat exchanges to game state.

use nf_core::enemy::Zombie;
use nf_core::geom::Position;
use nf_core::item::Slot;
use nf_core::player::Location;
use nf_core::skill::SkillId;
use nf_mechanics::combat::{Combatants, Initiative, exchange};
use nf_mechanics::stats;
use tracing::debug;

use crate::error::{ActionResult, GameError};
use crate::game::Game;
use crate::log::Severity;

/// Which zombie collection a target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Population {
    World,
    Interior,
}

impl Game {
    fn population_mut(&mut self, pop: Population) -> &mut Vec<Zombie> {
        match pop {
            Population::World => &mut self.zombies,
            Population::Interior => &mut self.interior_zombies,
        }
    }

    /// Attack the zombie at `(x, y)`, in the world or on the current floor.
    pub fn attack_zombie(&mut self, x: i32, y: i32, is_interior: bool) -> ActionResult {
        let result = self.try_attack(Position::new(x, y), is_interior);
        self.finish(result)
    }

    fn try_attack(&mut self, target: Position, is_interior: bool) -> ActionResult {
        self.ensure_alive()?;
        let (pop, idx) = match (self.player.location, is_interior) {
            (Location::Interior { floor, .. }, true) => (
                Population::Interior,
                self.interior_zombie_at(target, floor).ok_or(GameError::NoZombieThere)?,
            ),
            (Location::World, false) => (
                Population::World,
                self.world_zombie_at(target).ok_or(GameError::NoZombieThere)?,
            ),
            (Location::World, true) => return Err(GameError::NotIndoors),
            (Location::Interior { .. }, false) => return Err(GameError::NotOutdoors),
        };
        if !self.player.p.is_adjacent4(target) {
            return Err(GameError::NotAdjacent);
        }
        self.spend_stamina(self.config.costs.attack)?;
        self.resolve_player_attack(pop, idx);
        self.tick();
        Ok(())
    }

    /// The player strikes first. Returns true if the zombie died.
    pub(crate) fn resolve_player_attack(&mut self, pop: Population, idx: usize) -> bool {
        self.resolve(pop, idx, Initiative::Player)
    }

    /// A world zombie strikes first. Returns true if the zombie died.
    pub(crate) fn resolve_ambush(&mut self, idx: usize) -> bool {
        if let Some(z) = self.zombies.get(idx) {
            let name = z.def().name;
            self.say(format!("A {name} lunges at you!"), Severity::Danger);
        }
        self.resolve(Population::World, idx, Initiative::Zombie)
    }

    fn resolve(&mut self, pop: Population, idx: usize, initiative: Initiative) -> bool {
        let Some(zombie) = self.population_mut(pop).get(idx).cloned() else {
            return false;
        };
        let enemy = zombie.def();
        let out = exchange(
            initiative,
            Combatants {
                player_hp: self.player.stats.hp,
                player_atk: stats::attack(&self.player, &self.config.stats),
                player_def: stats::defense(&self.player),
                zombie_hp: zombie.hp,
                zombie_atk: enemy.atk,
                zombie_def: enemy.def,
            },
        );
        debug!(?initiative, enemy = enemy.name, ?out, "combat exchange");

        if initiative == Initiative::Zombie {
            self.take_hit(enemy.name, out.zombie_dealt);
        }
        if let Some(dmg) = out.player_dealt {
            if let Some(z) = self.population_mut(pop).get_mut(idx) {
                z.hp -= dmg;
            }
            self.say(format!("You hit the {} for {dmg}.", enemy.name), Severity::Combat);
            self.wear_slot(Slot::Weapon, self.config.weapon_wear);
        }
        if initiative == Initiative::Player {
            self.take_hit(enemy.name, out.zombie_dealt);
        }

        if out.zombie_killed {
            self.population_mut(pop).remove(idx);
            self.player.kills += 1;
            self.say(format!("The {} collapses.", enemy.name), Severity::Good);
            self.gain_xp(SkillId::Combat, enemy.xp);
        }
        if out.player_killed {
            self.die(format!("killed by a {}", enemy.name));
        }
        out.zombie_killed
    }

    fn take_hit(&mut self, name: &str, dealt: Option<i32>) {
        if let Some(dmg) = dealt {
            self.player.stats.adjust_hp(-f64::from(dmg));
            self.say(format!("The {name} hits you for {dmg}."), Severity::Combat);
            self.wear_slot(Slot::Body, self.config.armor_wear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{give_equipped, indoor_game, outdoor_game, world_zombie};
    use nf_core::enemy::EnemyKind;

    #[test]
    fn exact_kill_gets_no_retaliation() {
        let mut game = outdoor_game();
        let target = game.player.p.offset(1, 0);
        world_zombie(&mut game, EnemyKind::Walker, target);
        game.zombies[0].hp = 4;
        game.config.aggro_radius = 0;
        assert!(game.attack_zombie(target.x, target.y, false).is_ok());
        assert!(game.zombies.is_empty());
        assert_eq!(game.player.kills, 1);
        assert_eq!(game.player.stats.hp, 100.0);
        assert_eq!(game.player.skills.level(SkillId::Combat), 0);
        assert_eq!(game.player.skills.progress(SkillId::Combat).unwrap().xp, 10);
    }

    #[test]
    fn survivor_retaliates_and_wears_gear() {
        let mut game = outdoor_game();
        let target = game.player.p.offset(0, 1);
        world_zombie(&mut game, EnemyKind::Brute, target);
        let knife = give_equipped(&mut game, "knife");
        let vest = give_equipped(&mut game, "riot_vest");
        game.attack_zombie(target.x, target.y, false).unwrap();
        // knife 4 + base 4 = 8 attack against 3 defence
        assert_eq!(game.zombies[0].hp, 40);
        // brute 12 attack against 5 defence
        assert_eq!(game.player.stats.hp, 93.0);
        assert_eq!(game.player.inv.get(knife).unwrap().durability, Some(39));
        assert_eq!(game.player.inv.get(vest).unwrap().durability, Some(99));
        assert_eq!(game.player.stats.stm, 100.0 - 4.0 + 1.0);
    }

    #[test]
    fn attack_requires_adjacency_and_a_target() {
        let mut game = outdoor_game();
        let p = game.player.p;
        world_zombie(&mut game, EnemyKind::Walker, p.offset(2, 0));
        assert_eq!(game.attack_zombie(p.x + 2, p.y, false), Err(GameError::NotAdjacent));
        assert_eq!(game.attack_zombie(p.x, p.y + 1, false), Err(GameError::NoZombieThere));
        assert_eq!(game.attack_zombie(p.x + 2, p.y, true), Err(GameError::NotIndoors));
        assert_eq!(game.player.turn, 0);
        assert_eq!(game.player.stats.stm, 100.0);
    }

    #[test]
    fn exhausted_player_cannot_attack() {
        let mut game = outdoor_game();
        let target = game.player.p.offset(1, 0);
        world_zombie(&mut game, EnemyKind::Walker, target);
        game.player.stats.stm = 1.0;
        assert_eq!(game.attack_zombie(target.x, target.y, false), Err(GameError::Exhausted));
        assert_eq!(game.zombies[0].hp, 20);
    }

    #[test]
    fn death_names_the_killer() {
        let mut game = outdoor_game();
        let target = game.player.p.offset(1, 0);
        world_zombie(&mut game, EnemyKind::Brute, target);
        game.player.stats.hp = 5.0;
        game.attack_zombie(target.x, target.y, false).unwrap();
        assert!(!game.player.alive);
        assert_eq!(game.player.death_cause.as_deref(), Some("killed by a Brute"));
        assert_eq!(game.attack_zombie(target.x, target.y, false), Err(GameError::Dead));
    }

    #[test]
    fn interior_attack_only_reaches_the_current_floor() {
        let mut game = indoor_game(&["#####", "#...#", "##+##"]);
        game.player.p = Position::new(1, 1);
        game.config.aggro_radius = 0;
        game.interior_zombies.push(Zombie::new(EnemyKind::Walker, Position::new(2, 1), 1));
        assert_eq!(game.attack_zombie(2, 1, true), Err(GameError::NoZombieThere));
        game.interior_zombies[0].floor = 0;
        assert_eq!(game.attack_zombie(2, 1, false), Err(GameError::NotOutdoors));
        assert!(game.attack_zombie(2, 1, true).is_ok());
        assert_eq!(game.interior_zombies[0].hp, 16);
    }
}
