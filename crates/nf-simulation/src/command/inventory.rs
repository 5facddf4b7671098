use nf_core::geom::Position;
use nf_core::inventory::{ItemStack, stash, unstash};
use nf_core::item::{ItemDef, Slot, find_item};
use nf_core::player::Location;

use crate::error::{ActionResult, GameError};
use crate::game::Game;
use crate::log::Severity;

impl Game {
    /// Put fresh items in the inventory.
    pub fn add_item(&mut self, id: &str, qty: u32) -> ActionResult {
        let result = self.try_add(id, qty);
        self.finish(result)
    }

    /// Throw items away.
    pub fn remove_item(&mut self, id: &str, qty: u32) -> ActionResult {
        let result = self.try_remove(id, qty);
        self.finish(result)
    }

    /// Units of an item carried. Unknown ids count as zero.
    pub fn count_item(&self, id: &str) -> u32 {
        find_item(id).map_or(0, |def| self.player.inv.count(def.id))
    }

    /// Eat, drink or apply one unit of an item.
    pub fn use_item(&mut self, id: &str) -> ActionResult {
        let result = self.try_use(id);
        self.finish(result)
    }

    /// Equip an item into its slot, replacing what was there.
    pub fn equip_item(&mut self, id: &str) -> ActionResult {
        let result = self.try_equip(id);
        self.finish(result)
    }

    /// Empty an equipment slot. The item stays in the inventory.
    pub fn unequip(&mut self, slot: Slot) -> ActionResult {
        let result = self.try_unequip(slot);
        self.finish(result)
    }

    /// Drop items onto the ground underfoot.
    pub fn drop_item(&mut self, id: &str, qty: u32) -> ActionResult {
        let result = self.try_drop(id, qty);
        self.finish(result)
    }

    /// Pick up items from the ground underfoot.
    pub fn pickup_item(&mut self, id: &str, qty: u32) -> ActionResult {
        let result = self.try_pickup(id, qty);
        self.finish(result)
    }

    /// Move items into a container underfoot or next to the player.
    pub fn store_in_container(&mut self, id: &str, qty: u32) -> ActionResult {
        let result = self.try_store(id, qty);
        self.finish(result)
    }

    /// Take items out of a container underfoot or next to the player.
    pub fn retrieve_from_container(&mut self, id: &str, qty: u32) -> ActionResult {
        let result = self.try_retrieve(id, qty);
        self.finish(result)
    }

    fn lookup(&self, id: &str, qty: u32) -> Result<&'static ItemDef, GameError> {
        self.ensure_alive()?;
        let def = find_item(id)?;
        if qty == 0 {
            return Err(GameError::ZeroQuantity);
        }
        Ok(def)
    }

    /// Take `qty` units out of the inventory, or explain why not.
    fn take_carried(&mut self, def: &ItemDef, qty: u32) -> Result<Vec<ItemStack>, GameError> {
        let carried = self.player.inv.count(def.id);
        if carried == 0 {
            return Err(GameError::NotCarrying(def.name.to_string()));
        }
        self.player
            .take_items(def.id, qty)
            .ok_or_else(|| GameError::NotEnough(def.name.to_string()))
    }

    /// Check, without mutating, that `qty` units of `def` are carried.
    fn require_carried(&self, def: &ItemDef, qty: u32) -> ActionResult {
        match self.player.inv.count(def.id) {
            0 => Err(GameError::NotCarrying(def.name.to_string())),
            n if n < qty => Err(GameError::NotEnough(def.name.to_string())),
            _ => Ok(()),
        }
    }

    fn ground_pile_mut(&mut self) -> Option<&mut Vec<ItemStack>> {
        let p = self.player.p;
        match self.player.location {
            Location::World => self.world.cell_mut(p).map(|c| &mut c.items),
            Location::Interior { .. } => self.floor_cell_mut(p).map(|c| &mut c.items),
        }
    }

    /// Nearest container: underfoot first, then N, E, S, W.
    fn container_pos(&self) -> Option<Position> {
        let floor = self.current_floor()?;
        let p = self.player.p;
        std::iter::once(p)
            .chain(p.neighbors4())
            .find(|q| floor.cell(*q).is_some_and(|c| c.storage.is_some()))
    }

    fn storage_mut(&mut self, pos: Position) -> Option<&mut Vec<ItemStack>> {
        self.floor_cell_mut(pos)?.storage.as_mut()
    }

    fn try_add(&mut self, id: &str, qty: u32) -> ActionResult {
        let def = self.lookup(id, qty)?;
        self.player.inv.add(def, qty);
        self.say(format!("Added {qty} {}.", def.name), Severity::Info);
        Ok(())
    }

    fn try_remove(&mut self, id: &str, qty: u32) -> ActionResult {
        let def = self.lookup(id, qty)?;
        self.take_carried(def, qty)?;
        self.say(format!("You discard {qty} {}.", def.name), Severity::Info);
        Ok(())
    }

    fn try_use(&mut self, id: &str) -> ActionResult {
        let def = self.lookup(id, 1)?;
        self.require_carried(def, 1)?;
        if !def.restore.is_some() {
            return Err(GameError::NotUsable);
        }
        self.take_carried(def, 1)?;
        self.player.stats.apply(&def.restore);
        self.say(format!("You use the {}.", def.name), Severity::Good);
        Ok(())
    }

    fn try_equip(&mut self, id: &str) -> ActionResult {
        let def = self.lookup(id, 1)?;
        self.require_carried(def, 1)?;
        let slot = def.slot.ok_or(GameError::NotEquippable)?;
        let equipped = self.player.equip.uids();
        let uid = self
            .player
            .inv
            .items()
            .iter()
            .find(|i| i.id == def.id && !equipped.contains(&i.uid))
            .map(|i| i.uid);
        let Some(uid) = uid else {
            self.say(format!("The {} is already equipped.", def.name), Severity::Info);
            return Ok(());
        };
        let previous = self.player.equip.set(slot, Some(uid));
        let replaced = previous
            .and_then(|old| self.player.inv.get(old))
            .and_then(|i| i.def())
            .map(|d| d.name);
        match replaced {
            Some(old) => self.say(
                format!("You put away the {old} and equip the {}.", def.name),
                Severity::Info,
            ),
            None => self.say(format!("You equip the {}.", def.name), Severity::Info),
        }
        Ok(())
    }

    fn try_unequip(&mut self, slot: Slot) -> ActionResult {
        self.ensure_alive()?;
        let name = self.player.equipped_def(slot).map(|d| d.name);
        self.player.equip.set(slot, None).ok_or(GameError::SlotEmpty(slot))?;
        self.say(
            format!("You unequip the {}.", name.unwrap_or("item")),
            Severity::Info,
        );
        Ok(())
    }

    fn try_drop(&mut self, id: &str, qty: u32) -> ActionResult {
        let def = self.lookup(id, qty)?;
        self.require_carried(def, qty)?;
        if self.ground_pile_mut().is_none() {
            return Err(GameError::CantPlaceHere);
        }
        let stacks = self.take_carried(def, qty)?;
        if let Some(pile) = self.ground_pile_mut() {
            for stack in stacks {
                stash(pile, stack);
            }
        }
        self.say(format!("You drop {qty} {}.", def.name), Severity::Info);
        Ok(())
    }

    fn try_pickup(&mut self, id: &str, qty: u32) -> ActionResult {
        let def = self.lookup(id, qty)?;
        let stacks = self
            .ground_pile_mut()
            .and_then(|pile| unstash(pile, def.id, qty))
            .ok_or_else(|| GameError::NothingHere(def.name.to_string()))?;
        for stack in stacks {
            self.player.inv.insert(stack);
        }
        self.say(format!("You pick up {qty} {}.", def.name), Severity::Info);
        Ok(())
    }

    fn try_store(&mut self, id: &str, qty: u32) -> ActionResult {
        let def = self.lookup(id, qty)?;
        if !self.player.location.is_interior() {
            return Err(GameError::NotIndoors);
        }
        let pos = self.container_pos().ok_or(GameError::NoContainer)?;
        self.require_carried(def, qty)?;
        let stacks = self.take_carried(def, qty)?;
        if let Some(storage) = self.storage_mut(pos) {
            for stack in stacks {
                stash(storage, stack);
            }
        }
        self.say(format!("You store {qty} {}.", def.name), Severity::Info);
        Ok(())
    }

    fn try_retrieve(&mut self, id: &str, qty: u32) -> ActionResult {
        let def = self.lookup(id, qty)?;
        if !self.player.location.is_interior() {
            return Err(GameError::NotIndoors);
        }
        let pos = self.container_pos().ok_or(GameError::NoContainer)?;
        let stacks = self
            .storage_mut(pos)
            .and_then(|storage| unstash(storage, def.id, qty))
            .ok_or_else(|| GameError::NothingHere(def.name.to_string()))?;
        for stack in stacks {
            self.player.inv.insert(stack);
        }
        self.say(format!("You take {qty} {} from the container.", def.name), Severity::Info);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{give, give_equipped, outdoor_game};
    use nf_core::error::CoreError;
    use nf_core::interior::InteriorTile;

    #[test]
    fn add_and_count() {
        let mut game = outdoor_game();
        game.add_item("canned_food", 3).unwrap();
        game.add_item("Canned Food", 2).unwrap();
        assert_eq!(game.count_item("canned_food"), 5);
        assert_eq!(game.count_item("laser"), 0);
        assert_eq!(
            game.add_item("laser", 1),
            Err(GameError::Core(CoreError::UnknownItem("laser".into())))
        );
        assert_eq!(game.add_item("plank", 0), Err(GameError::ZeroQuantity));
        assert_eq!(game.player.turn, 0);
    }

    #[test]
    fn remove_is_all_or_nothing() {
        let mut game = outdoor_game();
        give(&mut game, "nails", 3);
        assert_eq!(game.remove_item("nails", 4), Err(GameError::NotEnough("Nails".into())));
        assert_eq!(game.count_item("nails"), 3);
        assert_eq!(game.remove_item("plank", 1), Err(GameError::NotCarrying("Plank".into())));
        game.remove_item("nails", 3).unwrap();
        assert_eq!(game.count_item("nails"), 0);
    }

    #[test]
    fn using_food_restores_and_consumes() {
        let mut game = outdoor_game();
        game.player.stats.food = 50.0;
        give(&mut game, "canned_food", 2);
        game.use_item("canned_food").unwrap();
        assert_eq!(game.player.stats.food, 80.0);
        assert_eq!(game.count_item("canned_food"), 1);
        assert_eq!(game.player.turn, 0);
    }

    #[test]
    fn restoration_is_clamped() {
        let mut game = outdoor_game();
        give(&mut game, "medkit", 1);
        game.player.stats.hp = 90.0;
        game.use_item("medkit").unwrap();
        assert_eq!(game.player.stats.hp, 100.0);
    }

    #[test]
    fn materials_are_not_usable() {
        let mut game = outdoor_game();
        give(&mut game, "wood", 1);
        assert_eq!(game.use_item("wood"), Err(GameError::NotUsable));
        assert_eq!(game.count_item("wood"), 1);
    }

    #[test]
    fn equip_swaps_and_unequip_clears() {
        let mut game = outdoor_game();
        give(&mut game, "bat", 1);
        give(&mut game, "axe", 1);
        game.equip_item("bat").unwrap();
        assert_eq!(game.player.equipped_def(Slot::Weapon).unwrap().id, "bat");
        game.equip_item("axe").unwrap();
        assert_eq!(game.player.equipped_def(Slot::Weapon).unwrap().id, "axe");
        assert_eq!(game.count_item("bat"), 1);
        game.unequip(Slot::Weapon).unwrap();
        assert_eq!(game.player.equip.get(Slot::Weapon), None);
        assert_eq!(game.unequip(Slot::Weapon), Err(GameError::SlotEmpty(Slot::Weapon)));
        give(&mut game, "wood", 1);
        assert_eq!(game.equip_item("wood"), Err(GameError::NotEquippable));
    }

    #[test]
    fn dropping_equipped_gear_clears_the_slot() {
        let mut game = outdoor_game();
        give_equipped(&mut game, "knife");
        game.drop_item("knife", 1).unwrap();
        assert_eq!(game.player.equip.get(Slot::Weapon), None);
        let pile = &game.world.cell(game.player.p).unwrap().items;
        assert_eq!(pile.len(), 1);
        assert_eq!(pile[0].durability, Some(40));
    }

    #[test]
    fn drop_then_pick_up() {
        let mut game = outdoor_game();
        give(&mut game, "plank", 4);
        game.drop_item("plank", 3).unwrap();
        game.drop_item("plank", 1).unwrap();
        assert_eq!(game.world.cell(game.player.p).unwrap().items.len(), 1);
        assert_eq!(game.count_item("plank"), 0);
        assert_eq!(game.pickup_item("plank", 5), Err(GameError::NothingHere("Plank".into())));
        game.pickup_item("plank", 2).unwrap();
        assert_eq!(game.count_item("plank"), 2);
        assert_eq!(game.world.cell(game.player.p).unwrap().items[0].qty, 2);
    }

    #[test]
    fn containers_hold_items() {
        let mut game = Game::new(crate::testing::quiet_config());
        let crate_pos = crate::testing::tile_pos(&game, InteriorTile::Crate);
        game.player.p = crate_pos.offset(0, 1);
        assert!(game.current_floor().unwrap().is_walkable(game.player.p));
        game.retrieve_from_container("canned_food", 2).unwrap();
        assert_eq!(game.count_item("canned_food"), 2);
        game.store_in_container("canned_food", 1).unwrap();
        assert_eq!(game.count_item("canned_food"), 1);
        let stored = game.current_floor().unwrap().cell(crate_pos).unwrap().storage.clone().unwrap();
        let food: u32 = stored.iter().filter(|s| s.id == "canned_food").map(|s| s.qty).sum();
        assert_eq!(food, 2);
        assert_eq!(
            game.retrieve_from_container("medkit", 1),
            Err(GameError::NothingHere("Medkit".into()))
        );
    }

    #[test]
    fn containers_need_a_container() {
        let mut game = outdoor_game();
        give(&mut game, "wood", 1);
        assert_eq!(game.store_in_container("wood", 1), Err(GameError::NotIndoors));
    }
}
