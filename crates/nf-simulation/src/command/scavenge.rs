use nf_core::geom::Position;
use nf_core::interior::{InteriorCell, InteriorTile};
use nf_core::item::{Slot, item_def};
use nf_core::loot::LootTable;
use nf_core::player::Location;
use nf_core::skill::SkillId;
use nf_core::weighted::weighted_pick;
use nf_mechanics::scavenge::{barricade_strength, find_chance, salvage_bonus};
use rand::Rng;

use crate::error::{ActionResult, GameError};
use crate::game::Game;
use crate::log::Severity;

/// Strongest a barricade can get.
const BARRICADE_MAX: i32 = 100;

/// A cell followed by its four neighbours.
fn reach(p: Position) -> impl Iterator<Item = Position> {
    std::iter::once(p).chain(p.neighbors4())
}

impl Game {
    /// Scavenge the current world cell.
    pub fn scavenge(&mut self) -> ActionResult {
        let result = self.try_scavenge();
        self.finish(result)
    }

    /// Search furniture underfoot or next to the player.
    pub fn search_interior(&mut self) -> ActionResult {
        let result = self.try_search();
        self.finish(result)
    }

    /// Break down nearby furniture into materials.
    pub fn salvage(&mut self) -> ActionResult {
        let result = self.try_salvage();
        self.finish(result)
    }

    /// Reinforce a door or window next to the player.
    pub fn barricade(&mut self) -> ActionResult {
        let result = self.try_barricade();
        self.finish(result)
    }

    /// Roll against the Scavenging skill and draw from `table` on success.
    fn roll_loot(&mut self, table: LootTable, place: &str) {
        let chance = find_chance(self.player.skills.level(SkillId::Scavenging));
        let found = if self.rng.random_bool(chance) {
            weighted_pick(table.entries(), &mut self.rng).and_then(|&id| item_def(id))
        } else {
            None
        };
        match found {
            Some(def) => {
                self.player.inv.add(def, 1);
                self.say(format!("You search the {place} and find {}.", def.name), Severity::Good);
                self.gain_xp(SkillId::Scavenging, 3);
            }
            None => {
                self.say(format!("You search the {place} but find nothing useful."), Severity::Info);
                self.gain_xp(SkillId::Scavenging, 1);
            }
        }
    }

    fn try_scavenge(&mut self) -> ActionResult {
        self.ensure_alive()?;
        if self.player.location.is_interior() {
            return Err(GameError::NotOutdoors);
        }
        let pos = self.player.p;
        let (tile, table) = self
            .world
            .cell(pos)
            .filter(|c| c.loot > 0)
            .and_then(|c| c.tile.def().loot_table.map(|t| (c.tile, t)))
            .ok_or(GameError::NothingToScavenge)?;
        self.spend_stamina(self.config.costs.scavenge)?;
        if let Some(cell) = self.world.cell_mut(pos) {
            cell.loot = cell.loot.saturating_sub(1);
        }
        let place = tile.def().name.to_lowercase();
        self.roll_loot(table, &place);
        self.tick();
        Ok(())
    }

    fn try_search(&mut self) -> ActionResult {
        self.ensure_alive()?;
        let building_table = self
            .current_building()
            .map(|b| b.building_type.profile().loot)
            .ok_or(GameError::NotIndoors)?;
        let floor = self.current_floor().ok_or(GameError::NotIndoors)?;
        let (pos, tile) = reach(self.player.p)
            .find_map(|q| {
                floor
                    .cell(q)
                    .filter(|c| c.loot > 0 && c.tile.is_searchable())
                    .map(|c| (q, c.tile))
            })
            .ok_or(GameError::NothingToSearch)?;
        self.spend_stamina(self.config.costs.search)?;
        if let Some(cell) = self.floor_cell_mut(pos) {
            cell.loot = cell.loot.saturating_sub(1);
        }
        let def = tile.def();
        let place = def.name.to_lowercase();
        self.roll_loot(def.loot_table.unwrap_or(building_table), &place);
        self.tick();
        Ok(())
    }

    fn try_salvage(&mut self) -> ActionResult {
        self.ensure_alive()?;
        let floor = self.current_floor().ok_or(GameError::NotIndoors)?;
        if !(self.player.has_equipped("hammer") || self.player.has_equipped("crowbar")) {
            return Err(GameError::NeedTool("hammer or crowbar"));
        }
        let (pos, tile) = reach(self.player.p)
            .find_map(|q| {
                floor
                    .cell(q)
                    .filter(|c| !c.tile.def().salvage.is_empty())
                    .map(|c| (q, c.tile))
            })
            .ok_or(GameError::NothingToSalvage)?;
        self.spend_stamina(self.config.costs.salvage)?;

        let bonus = salvage_bonus(self.player.skills.level(SkillId::Carpentry));
        let mut gained = Vec::new();
        for (id, qty) in tile.def().salvage {
            if let Some(def) = item_def(id) {
                self.player.inv.add(def, qty + bonus);
                gained.push(format!("{} {}", qty + bonus, def.name));
            }
        }
        if let Some(cell) = self.floor_cell_mut(pos) {
            let items = std::mem::take(&mut cell.items);
            *cell = InteriorCell::new(InteriorTile::Floor);
            cell.items = items;
        }
        self.say(
            format!("You break down the {} for {}.", tile.def().name.to_lowercase(), gained.join(", ")),
            Severity::Good,
        );
        self.wear_slot(Slot::Tool, self.config.tool_wear);
        self.gain_xp(SkillId::Carpentry, 4);
        self.tick();
        Ok(())
    }

    fn try_barricade(&mut self) -> ActionResult {
        self.ensure_alive()?;
        let Location::Interior { floor: floor_idx, .. } = self.player.location else {
            return Err(GameError::NotIndoors);
        };
        if !self.player.has_equipped("hammer") {
            return Err(GameError::NeedTool("hammer"));
        }
        let floor = self.current_floor().ok_or(GameError::NotIndoors)?;
        let openings: Vec<(Position, i32)> = self
            .player
            .p
            .neighbors4()
            .into_iter()
            .filter(|q| self.interior_zombie_at(*q, floor_idx).is_none())
            .filter_map(|q| {
                floor
                    .cell(q)
                    .filter(|c| c.tile.def().opening)
                    .map(|c| (q, c.barricade_hp))
            })
            .collect();
        if openings.is_empty() {
            return Err(GameError::NothingToBarricade);
        }
        let (pos, _) = openings
            .into_iter()
            .find(|(_, hp)| *hp < BARRICADE_MAX)
            .ok_or(GameError::FullyBarricaded)?;
        if self.player.inv.count("plank") < 1 || self.player.inv.count("nails") < 2 {
            return Err(GameError::NotEnoughMaterials);
        }
        self.spend_stamina(self.config.costs.barricade)?;

        self.player.remove_item("plank", 1);
        self.player.remove_item("nails", 2);
        let strength = barricade_strength(self.player.skills.level(SkillId::Carpentry));
        let mut now = 0;
        if let Some(cell) = self.floor_cell_mut(pos) {
            cell.barricade_hp = (cell.barricade_hp + strength).min(BARRICADE_MAX);
            now = cell.barricade_hp;
        }
        self.say(format!("You nail boards across the opening ({now}/{BARRICADE_MAX})."), Severity::Good);
        self.wear_slot(Slot::Tool, self.config.tool_wear);
        self.gain_xp(SkillId::Carpentry, 5);
        self.tick();
        self.tick();
        Ok(())
    }
}
