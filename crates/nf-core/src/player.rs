//! The player model: vital stats, location, equipment, and inventory.

use serde::Serialize;

use crate::geom::Position;
use crate::interior::BuildingId;
use crate::inventory::{InvItem, Inventory, ItemStack, ItemUid};
use crate::item::{ItemDef, Restore, Slot};
use crate::skill::Skills;

/// Upper bound of every vital stat.
pub const STAT_MAX: f64 = 100.0;

/// The four vital stats, each clamped to `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    /// Health. Death at zero.
    pub hp: f64,
    /// Stamina, spent by actions.
    pub stm: f64,
    /// Satiety.
    pub food: f64,
    /// Hydration.
    pub h2o: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hp: STAT_MAX,
            stm: STAT_MAX,
            food: STAT_MAX,
            h2o: STAT_MAX,
        }
    }
}

fn clamp_stat(v: f64) -> f64 {
    v.clamp(0.0, STAT_MAX)
}

impl Stats {
    /// Adjust health, clamping. Returns the new value.
    pub fn adjust_hp(&mut self, delta: f64) -> f64 {
        self.hp = clamp_stat(self.hp + delta);
        self.hp
    }

    /// Adjust stamina, clamping. Returns the new value.
    pub fn adjust_stm(&mut self, delta: f64) -> f64 {
        self.stm = clamp_stat(self.stm + delta);
        self.stm
    }

    /// Adjust food, clamping. Returns the new value.
    pub fn adjust_food(&mut self, delta: f64) -> f64 {
        self.food = clamp_stat(self.food + delta);
        self.food
    }

    /// Adjust water, clamping. Returns the new value.
    pub fn adjust_h2o(&mut self, delta: f64) -> f64 {
        self.h2o = clamp_stat(self.h2o + delta);
        self.h2o
    }

    /// Apply every delta of an item effect.
    pub fn apply(&mut self, restore: &Restore) {
        self.adjust_hp(restore.hp);
        self.adjust_stm(restore.stm);
        self.adjust_food(restore.food);
        self.adjust_h2o(restore.h2o);
    }

    /// True if every stat lies in the valid range.
    pub fn in_range(&self) -> bool {
        [self.hp, self.stm, self.food, self.h2o]
            .iter()
            .all(|v| (0.0..=STAT_MAX).contains(v))
    }
}

/// Where the player currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    /// On the world map.
    World,
    /// Inside a building, on one of its floors.
    Interior {
        /// Building arena index.
        building: BuildingId,
        /// Floor index within the building.
        floor: usize,
    },
}

impl Location {
    /// True when indoors.
    pub fn is_interior(self) -> bool {
        matches!(self, Self::Interior { .. })
    }
}

/// Equipment slots, each referencing an inventory instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Equipment {
    /// Weapon slot.
    pub weapon: Option<ItemUid>,
    /// Tool slot.
    pub tool: Option<ItemUid>,
    /// Body slot.
    pub body: Option<ItemUid>,
    /// Feet slot.
    pub feet: Option<ItemUid>,
    /// Back slot.
    pub back: Option<ItemUid>,
}

impl Equipment {
    /// The instance in a slot.
    pub fn get(&self, slot: Slot) -> Option<ItemUid> {
        match slot {
            Slot::Weapon => self.weapon,
            Slot::Tool => self.tool,
            Slot::Body => self.body,
            Slot::Feet => self.feet,
            Slot::Back => self.back,
        }
    }

    /// Put an instance into a slot (or empty it). Returns what was there.
    pub fn set(&mut self, slot: Slot, uid: Option<ItemUid>) -> Option<ItemUid> {
        let target = match slot {
            Slot::Weapon => &mut self.weapon,
            Slot::Tool => &mut self.tool,
            Slot::Body => &mut self.body,
            Slot::Feet => &mut self.feet,
            Slot::Back => &mut self.back,
        };
        std::mem::replace(target, uid)
    }

    /// The slot holding `uid`, if any.
    pub fn slot_of(&self, uid: ItemUid) -> Option<Slot> {
        Slot::ALL.into_iter().find(|s| self.get(*s) == Some(uid))
    }

    /// Every equipped instance.
    pub fn uids(&self) -> Vec<ItemUid> {
        Slot::ALL.into_iter().filter_map(|s| self.get(s)).collect()
    }
}

/// The survivor.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Position in the active space (world or current floor).
    pub p: Position,
    /// World cell to return to when leaving a building.
    pub world_pos: Position,
    /// World or interior.
    pub location: Location,
    /// Vital stats.
    pub stats: Stats,
    /// Equipment slots.
    pub equip: Equipment,
    /// Carried items.
    pub inv: Inventory,
    /// Skill levels.
    pub skills: Skills,
    /// Turns survived.
    pub turn: u32,
    /// False once dead. Never reverts.
    pub alive: bool,
    /// Zombies killed.
    pub kills: u32,
    /// Cause of death, once dead.
    pub death_cause: Option<String>,
}

impl Player {
    /// A healthy player at `p` in `location`.
    pub fn new(p: Position, world_pos: Position, location: Location) -> Self {
        Self {
            p,
            world_pos,
            location,
            stats: Stats::default(),
            equip: Equipment::default(),
            inv: Inventory::new(),
            skills: Skills::new(),
            turn: 0,
            alive: true,
            kills: 0,
            death_cause: None,
        }
    }

    /// The item instance and definition in a slot.
    pub fn equipped(&self, slot: Slot) -> Option<(&InvItem, &'static ItemDef)> {
        let item = self.inv.get(self.equip.get(slot)?)?;
        Some((item, item.def()?))
    }

    /// The definition of the item in a slot.
    pub fn equipped_def(&self, slot: Slot) -> Option<&'static ItemDef> {
        self.equipped(slot).map(|(_, def)| def)
    }

    /// True if the item with `id` is equipped in any slot.
    pub fn has_equipped(&self, id: &str) -> bool {
        Slot::ALL
            .into_iter()
            .any(|s| self.equipped(s).is_some_and(|(item, _)| item.id == id))
    }

    /// Take `qty` units of `id` out of the inventory, preferring unequipped
    /// instances. Either everything is taken or nothing is. Emptied equipment
    /// slots are cleared.
    pub fn take_items(&mut self, id: &str, qty: u32) -> Option<Vec<ItemStack>> {
        let equipped = self.equip.uids();
        let plan = self.inv.plan_removal(id, qty, &equipped)?;
        let mut taken = Vec::with_capacity(plan.len());
        for (uid, n) in plan {
            taken.extend(self.inv.take(uid, n));
            if let (None, Some(slot)) = (self.inv.get(uid), self.equip.slot_of(uid)) {
                self.equip.set(slot, None);
            }
        }
        Some(taken)
    }

    /// Remove `qty` units of `id`. Returns false, changing nothing, if fewer
    /// are carried.
    pub fn remove_item(&mut self, id: &str, qty: u32) -> bool {
        self.take_items(id, qty).is_some()
    }

    /// Destroy one instance outright, clearing any slot it occupied.
    pub fn destroy(&mut self, uid: ItemUid) -> Option<InvItem> {
        let item = self.inv.get(uid)?.clone();
        self.inv.take(uid, item.qty);
        if let Some(slot) = self.equip.slot_of(uid) {
            self.equip.set(slot, None);
        }
        Some(item)
    }

    /// Mark the player dead. Subsequent calls keep the first cause.
    pub fn kill(&mut self, cause: impl Into<String>) {
        if self.alive {
            self.alive = false;
            self.stats.hp = 0.0;
            self.death_cause = Some(cause.into());
        }
    }
}
