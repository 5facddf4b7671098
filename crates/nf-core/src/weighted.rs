//! Weighted random selection shared by loot, spawn, and building tables.

use rand::Rng;

/// Pick one entry from `(value, weight)` pairs with probability proportional
/// to its weight. Returns `None` when the table is empty or all weights are zero.
///
/// Uses a single draw against the cumulative weight.
pub fn weighted_pick<'a, T, R: Rng + ?Sized>(entries: &'a [(T, u32)], rng: &mut R) -> Option<&'a T> {
    let total: u32 = entries.iter().map(|(_, w)| *w).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.random_range(0..total);
    for (value, weight) in entries {
        if roll < *weight {
            return Some(value);
        }
        roll -= weight;
    }
    None
}
