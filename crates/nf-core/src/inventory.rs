//! Item instances, stacks, and the player's ordered inventory.

use serde::Serialize;

use crate::item::{ItemDef, ItemId, item_def};

/// Unique id of an item instance inside one inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ItemUid(pub u32);

/// Items outside the inventory: on the ground or in a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    /// Item id.
    pub id: ItemId,
    /// Unit count.
    pub qty: u32,
    /// Remaining durability, for degradable gear.
    pub durability: Option<i32>,
}

impl ItemStack {
    /// A fresh stack at full durability.
    pub fn new(def: &ItemDef, qty: u32) -> Self {
        Self {
            id: def.id,
            qty,
            durability: def.durability,
        }
    }
}

/// An item instance held by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvItem {
    /// Instance id, referenced by equipment slots.
    pub uid: ItemUid,
    /// Item id.
    pub id: ItemId,
    /// Unit count. Always 1 for non-stackable items.
    pub qty: u32,
    /// Remaining durability, for degradable gear.
    pub durability: Option<i32>,
}

impl InvItem {
    /// Static definition of this item.
    pub fn def(&self) -> Option<&'static ItemDef> {
        item_def(self.id)
    }
}

/// Ordered list of item instances. Stackable items share one entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    items: Vec<InvItem>,
    next_uid: u32,
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in insertion order.
    pub fn items(&self) -> &[InvItem] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units carried of `id`.
    pub fn count(&self, id: &str) -> u32 {
        self.items.iter().filter(|i| i.id == id).map(|i| i.qty).sum()
    }

    /// Borrow an entry by instance id.
    pub fn get(&self, uid: ItemUid) -> Option<&InvItem> {
        self.items.iter().find(|i| i.uid == uid)
    }

    /// Mutably borrow an entry by instance id.
    pub fn get_mut(&mut self, uid: ItemUid) -> Option<&mut InvItem> {
        self.items.iter_mut().find(|i| i.uid == uid)
    }

    /// First entry holding `id`.
    pub fn find(&self, id: &str) -> Option<&InvItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn alloc_uid(&mut self) -> ItemUid {
        self.next_uid += 1;
        ItemUid(self.next_uid)
    }

    /// Add `qty` fresh units of an item. Returns the uids touched.
    pub fn add(&mut self, def: &ItemDef, qty: u32) -> Vec<ItemUid> {
        if qty == 0 {
            return Vec::new();
        }
        if def.stackable {
            vec![self.insert(ItemStack::new(def, qty))]
        } else {
            (0..qty).map(|_| self.insert(ItemStack::new(def, 1))).collect()
        }
    }

    /// Move a stack into the inventory, merging stackables. Non-stackable
    /// stacks with `qty > 1` are split into single instances; the uid of the
    /// last one is returned.
    pub fn insert(&mut self, stack: ItemStack) -> ItemUid {
        let stackable = item_def(stack.id).is_some_and(|d| d.stackable);
        if stackable {
            if let Some(existing) = self.items.iter_mut().find(|i| i.id == stack.id) {
                existing.qty += stack.qty;
                return existing.uid;
            }
            let uid = self.alloc_uid();
            self.items.push(InvItem {
                uid,
                id: stack.id,
                qty: stack.qty,
                durability: stack.durability,
            });
            return uid;
        }
        let mut last = ItemUid(0);
        for _ in 0..stack.qty.max(1) {
            last = self.alloc_uid();
            self.items.push(InvItem {
                uid: last,
                id: stack.id,
                qty: 1,
                durability: stack.durability,
            });
        }
        last
    }

    /// Take up to `qty` units out of one entry. The entry disappears when emptied.
    pub fn take(&mut self, uid: ItemUid, qty: u32) -> Option<ItemStack> {
        let idx = self.items.iter().position(|i| i.uid == uid)?;
        let entry = &mut self.items[idx];
        let taken = qty.min(entry.qty);
        if taken == 0 {
            return None;
        }
        let stack = ItemStack {
            id: entry.id,
            qty: taken,
            durability: entry.durability,
        };
        entry.qty -= taken;
        if entry.qty == 0 {
            self.items.remove(idx);
        }
        Some(stack)
    }

    /// Plan which entries would be drained to remove `qty` units of `id`,
    /// visiting entries not in `keep_last` first. Returns `None` when the
    /// inventory holds fewer than `qty` units.
    pub fn plan_removal(&self, id: &str, qty: u32, keep_last: &[ItemUid]) -> Option<Vec<(ItemUid, u32)>> {
        if self.count(id) < qty {
            return None;
        }
        let mut candidates: Vec<&InvItem> = self.items.iter().filter(|i| i.id == id).collect();
        candidates.sort_by_key(|i| keep_last.contains(&i.uid));
        let mut remaining = qty;
        let mut plan = Vec::new();
        for item in candidates {
            if remaining == 0 {
                break;
            }
            let n = item.qty.min(remaining);
            plan.push((item.uid, n));
            remaining -= n;
        }
        Some(plan)
    }
}

/// Put a stack onto a ground pile or into container storage, merging
/// stackable items with an existing stack of the same id.
pub fn stash(pile: &mut Vec<ItemStack>, stack: ItemStack) {
    let stackable = item_def(stack.id).is_some_and(|d| d.stackable);
    match pile.iter_mut().find(|s| stackable && s.id == stack.id) {
        Some(existing) => existing.qty += stack.qty,
        None => pile.push(stack),
    }
}

/// Units of `id` in a pile.
pub fn pile_count(pile: &[ItemStack], id: &str) -> u32 {
    pile.iter().filter(|s| s.id == id).map(|s| s.qty).sum()
}

/// Take `qty` units of `id` out of a pile. All or nothing.
pub fn unstash(pile: &mut Vec<ItemStack>, id: &str, qty: u32) -> Option<Vec<ItemStack>> {
    if qty == 0 || pile_count(pile, id) < qty {
        return None;
    }
    let mut remaining = qty;
    let mut taken = Vec::new();
    for stack in pile.iter_mut().filter(|s| s.id == id) {
        if remaining == 0 {
            break;
        }
        let n = stack.qty.min(remaining);
        stack.qty -= n;
        remaining -= n;
        taken.push(ItemStack {
            id: stack.id,
            qty: n,
            durability: stack.durability,
        });
    }
    pile.retain(|s| s.qty > 0);
    Some(taken)
}
