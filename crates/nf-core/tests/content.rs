//! Property tests for the content tables and the item containers.

#![allow(missing_docs)]

use nf_core::inventory::{Inventory, ItemStack, pile_count, stash, unstash};
use nf_core::item::{ITEMS, item_def};
use nf_core::loot::LootTable;
use nf_core::tile::{BuildingType, Tile};
use nf_core::geom::Position;
use nf_core::weighted::weighted_pick;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn any_item() -> impl Strategy<Value = &'static str> {
    (0..ITEMS.len()).prop_map(|i| ITEMS[i].id)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn inventory_counts_what_was_added(id in any_item(), adds in prop::collection::vec(1u32..5, 1..6)) {
        let def = item_def(id).unwrap();
        let mut inv = Inventory::new();
        for qty in &adds {
            inv.add(def, *qty);
        }
        let total: u32 = adds.iter().sum();
        prop_assert_eq!(inv.count(id), total);
        if def.stackable {
            prop_assert_eq!(inv.len(), 1);
        } else {
            prop_assert_eq!(inv.len(), total as usize);
        }
    }

    #[test]
    fn piles_conserve_units(id in any_item(), drops in prop::collection::vec(1u32..4, 1..5), take in 1u32..12) {
        let def = item_def(id).unwrap();
        let mut pile = Vec::new();
        for qty in &drops {
            stash(&mut pile, ItemStack::new(def, *qty));
        }
        let total: u32 = drops.iter().sum();
        prop_assert_eq!(pile_count(&pile, id), total);
        match unstash(&mut pile, id, take) {
            Some(taken) => {
                prop_assert!(take <= total);
                prop_assert_eq!(taken.iter().map(|s| s.qty).sum::<u32>(), take);
                prop_assert_eq!(pile_count(&pile, id), total - take);
                prop_assert!(pile.iter().all(|s| s.qty > 0));
            }
            None => {
                prop_assert!(take > total);
                prop_assert_eq!(pile_count(&pile, id), total);
            }
        }
    }

    #[test]
    fn loot_tables_only_yield_known_items(seed in any::<u64>(), bt in 0..BuildingType::ALL.len()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let table: LootTable = BuildingType::ALL[bt].profile().loot;
        for _ in 0..16 {
            let id = weighted_pick(table.entries(), &mut rng).copied();
            prop_assert!(id.and_then(item_def).is_some());
        }
    }
}

#[test]
fn tiles_serialize_as_json() {
    let tile = Tile::Building(BuildingType::Pharmacy);
    let json = serde_json::to_string(&tile).unwrap();
    assert_eq!(json, r#"{"Building":"Pharmacy"}"#);
    let back: Tile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tile);
    assert_eq!(serde_json::to_string(&Tile::Grass).unwrap(), r#""Grass""#);
}

#[test]
fn positions_serialize_as_objects() {
    let json = serde_json::to_value(Position::new(3, -2)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 3, "y": -2 }));
}
