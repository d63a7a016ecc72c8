//! Generation tuning constants
//!
//! Every constant the generator consults lives here so balance tooling can
//! load alternatives from JSON without rebuilding.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::object::Season;

/// Tuning constants for item and money generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    // Depth limits
    /// Absolute maximum dungeon depth
    pub max_depth: i32,
    /// Number of depth rows in the allocation tables
    pub max_obj_depth: i32,

    // Quality rolls (percent)
    pub good_chance_base: i32,
    pub great_chance: i32,
    /// Base cost above which a kind is good at depth 0
    pub good_cost_base: i32,
    /// Increase of the good-cost threshold per level
    pub good_cost_per_level: i32,

    // Decision ladder (per ten thousand)
    /// Artifact chance contributed by each artifact roll
    pub artifact_roll_chance: u32,
    pub multi_ego_base: u32,
    pub multi_ego_per_level: u32,
    pub multi_ego_max: u32,

    // Enchantment
    /// One in N items that are not good roll faults
    pub fault_chance: u32,
    /// One in N chance of another random extra power
    pub extra_power_continue: u32,
    pub fuel_torch: i32,
    pub fuel_lamp: i32,

    // Money
    pub gold_avg_base: i32,
    /// Percent multiplier on `depth + depth^2 / 25`
    pub gold_avg_mult: i32,
    pub gold_tail_base: u32,
    pub gold_tail_min: u32,
    /// Exclusive upper bound on a single cash pile
    pub max_cash: i32,
    /// One in N piles use the next coin rank up
    pub coin_bump_chance: u32,

    // Retries
    pub make_tries: u32,
    pub multi_ego_attempts: u32,

    /// Season the allocation tables are built for
    pub season: Season,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_obj_depth: 128,

            good_chance_base: 33,
            great_chance: 30,
            good_cost_base: 1000,
            good_cost_per_level: 50,

            artifact_roll_chance: 150,
            multi_ego_base: 200,
            multi_ego_per_level: 20,
            multi_ego_max: 2500,

            fault_chance: 20,
            extra_power_continue: 4,
            fuel_torch: 5000,
            fuel_lamp: 7500,

            gold_avg_base: 16,
            gold_avg_mult: 160,
            gold_tail_base: 100,
            gold_tail_min: 20,
            max_cash: 500_000,
            coin_bump_chance: 8,

            make_tries: 10,
            multi_ego_attempts: 6,

            season: Season::default(),
        }
    }
}

impl GenConfig {
    /// Parse and validate a JSON configuration. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth < 1 {
            return Err(invalid("max_depth", "must be at least 1"));
        }
        if self.max_obj_depth < 1 {
            return Err(invalid("max_obj_depth", "must be at least 1"));
        }
        if !(0..=100).contains(&self.great_chance) {
            return Err(invalid("great_chance", "must be a percentage"));
        }
        if self.max_cash < 2 {
            return Err(invalid("max_cash", "must be at least 2"));
        }
        if self.gold_tail_min == 0 {
            return Err(invalid("gold_tail_min", "must be positive"));
        }
        if self.make_tries == 0 {
            return Err(invalid("make_tries", "must be positive"));
        }
        if self.multi_ego_attempts < 2 {
            return Err(invalid(
                "multi_ego_attempts",
                "must allow both ego anchors to be tried",
            ));
        }
        Ok(())
    }

    /// Percent chance of a good item at `depth`
    pub fn good_chance(&self, depth: i32) -> i32 {
        (self.good_chance_base + depth).min(100)
    }

    /// Multi-ego rung width (per ten thousand) at `depth`
    pub fn multi_ego_chance(&self, depth: i32) -> u32 {
        let depth = depth.max(0) as u32;
        (self.multi_ego_base + self.multi_ego_per_level * depth).min(self.multi_ego_max)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}
