use nf_core::interior::InteriorTile;
use nf_core::player::Location;
use nf_core::tile::Tile;
use nf_mechanics::rest::{RestTier, has_reserve};
use tracing::debug;

use crate::error::{ActionResult, GameError};
use crate::game::Game;
use crate::log::Severity;

impl Game {
    /// Rest for a few turns, recovering stamina and some health.
    pub fn rest(&mut self) -> ActionResult {
        let result = self.try_rest();
        self.finish(result)
    }

    /// How well the player could rest right now.
    pub fn rest_tier(&self) -> RestTier {
        let p = self.player.p;
        match self.player.location {
            Location::World if self.world.tile(p) == Some(Tile::Tent) => RestTier::Bed,
            Location::World => RestTier::Rough,
            Location::Interior { .. } => {
                let on_bed = self
                    .current_floor()
                    .and_then(|f| f.cell(p))
                    .is_some_and(|c| c.tile == InteriorTile::Bed);
                if on_bed { RestTier::Bed } else { RestTier::Shelter }
            }
        }
    }

    fn try_rest(&mut self) -> ActionResult {
        self.ensure_alive()?;
        if !has_reserve(&self.player.stats) {
            return Err(GameError::TooHungry);
        }
        let tier = self.rest_tier();
        if tier == RestTier::Rough {
            let p = self.player.p;
            if self.zombies.iter().any(|z| z.pos.manhattan(p) <= 1) {
                return Err(GameError::ZombiesNearby);
            }
        }

        let effect = tier.effect();
        self.player.stats.adjust_stm(effect.stm);
        self.player.stats.adjust_hp(effect.hp);
        self.say(tier.describe(), Severity::Good);
        debug!(?tier, ticks = effect.ticks, "resting");
        for _ in 0..effect.ticks {
            self.tick();
            if !self.player.alive {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{indoor_game, outdoor_game, world_zombie};
    use nf_core::enemy::EnemyKind;
    use nf_core::geom::Position;

    #[test]
    fn rough_rest_in_the_open() {
        let mut game = outdoor_game();
        game.config.stamina_regen = 0.0;
        game.player.stats.stm = 50.0;
        game.player.stats.hp = 90.0;
        assert_eq!(game.rest_tier(), RestTier::Rough);
        game.rest().unwrap();
        assert_eq!(game.player.stats.stm, 70.0);
        assert_eq!(game.player.stats.hp, 92.0);
        assert_eq!(game.player.turn, 3);
    }

    #[test]
    fn adjacent_zombie_prevents_rough_rest() {
        let mut game = outdoor_game();
        game.player.stats.stm = 50.0;
        let p = game.player.p;
        world_zombie(&mut game, EnemyKind::Crawler, p.offset(0, 1));
        assert_eq!(game.rest(), Err(GameError::ZombiesNearby));
        assert_eq!(game.player.stats.stm, 50.0);
        assert_eq!(game.player.turn, 0);
    }

    #[test]
    fn tent_counts_as_a_bed() {
        let mut game = outdoor_game();
        game.world.set_tile(game.player.p, Tile::Tent);
        assert_eq!(game.rest_tier(), RestTier::Bed);
        game.player.stats.stm = 10.0;
        game.config.stamina_regen = 0.0;
        game.rest().unwrap();
        assert_eq!(game.player.stats.stm, 70.0);
        assert_eq!(game.player.turn, 6);
    }

    #[test]
    fn indoors_is_shelter_and_beds_are_better() {
        let mut game = indoor_game(&["#####", "#b..#", "#...#", "##+##"]);
        assert_eq!(game.rest_tier(), RestTier::Shelter);
        game.player.p = Position::new(1, 1);
        assert_eq!(game.rest_tier(), RestTier::Bed);
    }

    #[test]
    fn hunger_blocks_rest() {
        let mut game = outdoor_game();
        game.player.stats.food = 5.0;
        assert_eq!(game.rest(), Err(GameError::TooHungry));
        assert_eq!(game.player.turn, 0);
    }
}
