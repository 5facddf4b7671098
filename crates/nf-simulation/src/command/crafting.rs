use nf_core::geom::Position;
use nf_core::interior::{InteriorCell, InteriorTile};
use nf_core::item::{Placement, find_item, item_def};
use nf_core::player::Location;
use nf_core::recipe::{Recipe, Station, recipe};
use nf_core::tile::Tile;
use tracing::debug;

use crate::error::{ActionResult, GameError};
use crate::game::Game;
use crate::log::Severity;

impl Game {
    /// Craft a recipe from carried materials.
    pub fn build(&mut self, recipe_id: &str) -> ActionResult {
        let result = self.try_build(recipe_id);
        self.finish(result)
    }

    /// Set up a carried structure on the current world cell.
    pub fn place_structure(&mut self, item_id: &str) -> ActionResult {
        let result = self.try_place_structure(item_id);
        self.finish(result)
    }

    /// Set up a carried piece of furniture next to the player indoors.
    pub fn place_interior(&mut self, item_id: &str) -> ActionResult {
        let result = self.try_place_interior(item_id);
        self.finish(result)
    }

    fn station_nearby(&self, station: Station) -> bool {
        let p = self.player.p;
        let mut reach = std::iter::once(p).chain(p.neighbors4());
        match (station, self.player.location) {
            (Station::Campfire, Location::World) => {
                reach.any(|q| self.world.tile(q) == Some(Tile::Campfire))
            }
            (Station::Workbench, Location::Interior { .. }) => self.current_floor().is_some_and(|f| {
                reach.any(|q| f.cell(q).is_some_and(|c| c.tile == InteriorTile::Workbench))
            }),
            _ => false,
        }
    }

    fn check_recipe(&self, r: &Recipe) -> ActionResult {
        let skills = &self.player.skills;
        if let Some((skill, _)) = r.skill.filter(|(s, lvl)| skills.level(*s) < *lvl) {
            return Err(GameError::NeedSkill(skill));
        }
        if let Some(tool) = r.tool.filter(|t| !self.player.has_equipped(t)) {
            return Err(GameError::NeedTool(item_def(tool).map_or(tool, |d| d.name)));
        }
        if let Some(station) = r.station.filter(|s| !self.station_nearby(*s)) {
            return Err(GameError::NeedStation(station));
        }
        Ok(())
    }

    fn try_build(&mut self, recipe_id: &str) -> ActionResult {
        self.ensure_alive()?;
        let r = recipe(recipe_id)?;
        self.check_recipe(r)?;
        let result = find_item(r.result)?;
        if r.materials.iter().any(|(id, qty)| self.player.inv.count(id) < *qty) {
            return Err(GameError::NotEnoughMaterials);
        }
        self.spend_stamina(self.config.costs.build)?;

        for (id, qty) in r.materials {
            self.player.remove_item(id, *qty);
        }
        self.player.inv.add(result, r.qty);
        let label = if r.qty > 1 {
            format!("{} x{}", result.name, r.qty)
        } else {
            result.name.to_string()
        };
        self.say(format!("You craft {label}."), Severity::Good);
        debug!(recipe = r.id, qty = r.qty, "crafted");
        let (skill, xp) = r.xp;
        self.gain_xp(skill, xp);
        self.tick();
        Ok(())
    }

    fn try_place_structure(&mut self, item_id: &str) -> ActionResult {
        self.ensure_alive()?;
        let def = find_item(item_id)?;
        let Some(Placement::World(tile)) = def.placement else {
            return Err(GameError::NotPlaceable);
        };
        if self.player.location.is_interior() {
            return Err(GameError::NotOutdoors);
        }
        let pos = self.player.p;
        if !matches!(self.world.tile(pos), Some(Tile::Grass | Tile::Forest)) {
            return Err(GameError::CantPlaceHere);
        }
        if !self.player.remove_item(def.id, 1) {
            return Err(GameError::NotCarrying(def.name.to_string()));
        }
        if let Some(cell) = self.world.cell_mut(pos) {
            cell.build(tile);
        }
        self.say(format!("You set up the {}.", tile.def().name.to_lowercase()), Severity::Good);
        Ok(())
    }

    /// First free floor tile next to the player.
    fn free_spot(&self) -> Option<Position> {
        let Location::Interior { floor: idx, .. } = self.player.location else {
            return None;
        };
        let floor = self.current_floor()?;
        self.player.p.neighbors4().into_iter().find(|q| {
            floor
                .cell(*q)
                .is_some_and(|c| c.tile == InteriorTile::Floor && c.items.is_empty())
                && self.interior_zombie_at(*q, idx).is_none()
        })
    }

    fn try_place_interior(&mut self, item_id: &str) -> ActionResult {
        self.ensure_alive()?;
        let def = find_item(item_id)?;
        let Some(Placement::Interior(tile)) = def.placement else {
            return Err(GameError::NotPlaceable);
        };
        if !self.player.location.is_interior() {
            return Err(GameError::NotIndoors);
        }
        if self.player.inv.count(def.id) == 0 {
            return Err(GameError::NotCarrying(def.name.to_string()));
        }
        let spot = self.free_spot().ok_or(GameError::CantPlaceHere)?;
        self.player.remove_item(def.id, 1);
        if let Some(cell) = self.floor_cell_mut(spot) {
            *cell = InteriorCell::new(tile);
        }
        self.say(format!("You set up the {}.", tile.def().name.to_lowercase()), Severity::Good);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{give, give_equipped, indoor_game, outdoor_game};
    use nf_core::enemy::{EnemyKind, Zombie};
    use nf_core::error::CoreError;
    use nf_core::skill::SkillId;

    #[test]
    fn simple_recipe_consumes_and_produces() {
        let mut game = outdoor_game();
        give(&mut game, "cloth", 5);
        game.build("bandage").unwrap();
        assert_eq!(game.count_item("cloth"), 3);
        assert_eq!(game.count_item("bandage"), 1);
        assert_eq!(game.player.turn, 1);
        assert_eq!(game.player.skills.progress(SkillId::Survival).unwrap().xp, 3);
    }

    #[test]
    fn failed_checks_change_nothing() {
        let mut game = outdoor_game();
        give(&mut game, "wood", 2);
        assert_eq!(
            game.build("teleporter"),
            Err(GameError::Core(CoreError::UnknownRecipe("teleporter".into())))
        );
        assert_eq!(game.build("plank"), Err(GameError::NeedTool("Saw")));
        give_equipped(&mut game, "saw");
        game.build("plank").unwrap();
        assert_eq!(game.count_item("plank"), 2);
        let items = game.player.inv.items().to_vec();
        let stats = game.player.stats;
        assert_eq!(game.build("plank"), Err(GameError::NotEnoughMaterials));
        assert_eq!(game.player.inv.items(), items.as_slice());
        assert_eq!(game.player.stats, stats);
        assert_eq!(game.player.turn, 1);
    }

    #[test]
    fn skill_gates_come_first() {
        let mut game = outdoor_game();
        assert_eq!(game.build("tent"), Err(GameError::NeedSkill(SkillId::Survival)));
        assert_eq!(game.build("workbench"), Err(GameError::NeedSkill(SkillId::Carpentry)));
    }

    #[test]
    fn clean_water_needs_a_campfire() {
        let mut game = outdoor_game();
        give(&mut game, "dirty_water", 1);
        assert_eq!(game.build("clean_water"), Err(GameError::NeedStation(Station::Campfire)));
        game.world.set_tile(game.player.p.offset(0, 1), Tile::Campfire);
        game.build("clean_water").unwrap();
        assert_eq!(game.count_item("water_bottle"), 1);
    }

    #[test]
    fn workbench_recipes_need_a_bench_indoors() {
        let mut game = indoor_game(&["#####", "#w..#", "#...#", "##+##"]);
        game.player.skills.gain(SkillId::Carpentry, 200);
        give_equipped(&mut game, "hammer");
        give(&mut game, "plank", 3);
        give(&mut game, "nails", 2);
        assert_eq!(game.build("storage_box"), Err(GameError::NeedStation(Station::Workbench)));
        game.player.p = Position::new(1, 2);
        game.build("storage_box").unwrap();
        assert_eq!(game.count_item("storage_box"), 1);
    }

    #[test]
    fn campfire_goes_on_open_ground() {
        let mut game = outdoor_game();
        assert_eq!(game.place_structure("campfire"), Err(GameError::NotCarrying("Campfire Kit".into())));
        give(&mut game, "campfire", 1);
        game.world.set_tile(game.player.p, Tile::Road);
        assert_eq!(game.place_structure("campfire"), Err(GameError::CantPlaceHere));
        game.world.set_tile(game.player.p, Tile::Forest);
        game.place_structure("campfire").unwrap();
        let cell = game.world.cell(game.player.p).unwrap();
        assert_eq!(cell.tile, Tile::Campfire);
        assert_eq!(cell.loot, 0);
        assert_eq!(game.count_item("campfire"), 0);
        assert_eq!(game.place_structure("workbench"), Err(GameError::NotPlaceable));
    }

    #[test]
    fn furniture_goes_on_a_free_adjacent_floor() {
        let mut game = indoor_game(&["#####", "#...#", "##+##"]);
        let door = game.player.p;
        give(&mut game, "storage_box", 1);
        game.interior_zombies.push(Zombie::new(EnemyKind::Walker, door.offset(0, -1), 0));
        assert_eq!(game.place_interior("storage_box"), Err(GameError::CantPlaceHere));
        game.interior_zombies.clear();
        game.place_interior("storage_box").unwrap();
        let cell = game.current_floor().unwrap().cell(door.offset(0, -1)).unwrap();
        assert_eq!(cell.tile, InteriorTile::Crate);
        assert!(cell.storage.is_some());
        assert_eq!(game.player.turn, 0);
    }

    #[test]
    fn placement_respects_location() {
        let mut game = outdoor_game();
        give(&mut game, "bedroll", 1);
        assert_eq!(game.place_interior("bedroll"), Err(GameError::NotIndoors));
        let mut game = indoor_game(&["#####", "#...#", "##+##"]);
        give(&mut game, "tent", 1);
        assert_eq!(game.place_structure("tent"), Err(GameError::NotOutdoors));
    }
}
