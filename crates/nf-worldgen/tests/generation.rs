//! Property tests for world and interior generation.

#![allow(missing_docs)]

use nf_core::interior::InteriorTile;
use nf_core::tile::{BuildingType, Tile};
use nf_worldgen::WorldGenConfig;
use nf_worldgen::{interior, world};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn worlds_respect_tile_rules(seed in any::<u64>(), w in 8i32..48, h in 8i32..40) {
        let config = WorldGenConfig::default().with_size(w, h);
        let map = world::generate(&config, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!((map.width(), map.height()), (w, h));
        for s in &map.settlements {
            prop_assert_ne!(map.tile(s.center), Some(Tile::Water));
        }
        for (pos, cell) in map.grid.iter() {
            prop_assert!(cell.loot <= cell.max);
            if cell.tile.is_building() {
                let touches_road = pos
                    .neighbors4()
                    .into_iter()
                    .any(|n| map.tile(n).is_some_and(Tile::is_road));
                prop_assert!(touches_road);
            }
        }
    }

    #[test]
    fn interiors_always_have_an_entry(seed in any::<u64>(), idx in 0usize..13) {
        let bt = BuildingType::ALL[idx];
        let building = interior::generate(bt, &mut StdRng::seed_from_u64(seed));
        prop_assert!(!building.floors.is_empty());
        prop_assert!(building.floors.len() <= 2);
        let ground = &building.floors[0];
        prop_assert!(ground.cell(ground.entry_pos).is_some_and(|c| c.tile.def().entry));
        if building.floors.len() == 2 {
            let stairs = ground.map.iter().filter(|(_, c)| c.tile.is_stairs()).count();
            prop_assert_eq!(stairs, 1);
            prop_assert!(building.floors[1]
                .map
                .iter()
                .any(|(_, c)| matches!(c.tile, InteriorTile::StairsUp | InteriorTile::StairsDown)));
        }
    }
}
