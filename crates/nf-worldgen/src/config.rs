use nf_core::world::SettlementTier;
use serde::{Deserialize, Serialize};

/// Per-tier settlement tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Settlements to attempt.
    pub count: usize,
    /// Minimum Manhattan distance to another settlement of the same tier.
    pub min_distance: i32,
    /// Search radius for building placement around the centre.
    pub radius: i32,
    /// Buildings to attempt around each centre.
    pub buildings: usize,
}

/// Configuration for world generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Map width in cells.
    pub width: i32,
    /// Map height in cells.
    pub height: i32,
    /// City tuning.
    pub cities: TierConfig,
    /// Town tuning.
    pub towns: TierConfig,
    /// Hamlet tuning.
    pub hamlets: TierConfig,
    /// Attempts per settlement placement and per settlement's buildings.
    pub max_attempts: u32,
    /// Random road spurs grown after the main network.
    pub road_spurs: usize,
    /// Below this terrain value a cell becomes water.
    pub water_threshold: f64,
    /// Above this terrain value a cell becomes forest.
    pub forest_threshold: f64,
    /// Settlement centres keep at least this far from the map edge.
    pub edge_margin: i32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            cities: TierConfig {
                count: 2,
                min_distance: 20,
                radius: 8,
                buildings: 30,
            },
            towns: TierConfig {
                count: 4,
                min_distance: 12,
                radius: 6,
                buildings: 14,
            },
            hamlets: TierConfig {
                count: 6,
                min_distance: 8,
                radius: 4,
                buildings: 5,
            },
            max_attempts: 300,
            road_spurs: 6,
            water_threshold: -0.55,
            forest_threshold: 0.35,
            edge_margin: 3,
        }
    }
}

impl WorldGenConfig {
    /// Set the map dimensions.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set how many settlements of each tier to attempt.
    pub fn with_settlements(mut self, cities: usize, towns: usize, hamlets: usize) -> Self {
        self.cities.count = cities;
        self.towns.count = towns;
        self.hamlets.count = hamlets;
        self
    }

    /// Set the attempt bound for placement passes.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the number of random road spurs.
    pub fn with_road_spurs(mut self, spurs: usize) -> Self {
        self.road_spurs = spurs;
        self
    }

    /// Tuning for one tier.
    pub fn tier(&self, tier: SettlementTier) -> &TierConfig {
        match tier {
            SettlementTier::City => &self.cities,
            SettlementTier::Town => &self.towns,
            SettlementTier::Hamlet => &self.hamlets,
        }
    }
}
