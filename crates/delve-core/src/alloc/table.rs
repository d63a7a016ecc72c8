//! Per-depth allocation tables over ordinary item kinds
//!
//! Two cumulative tables are kept, one over every kind and one over kinds
//! that count as good at that depth. Each row holds `num_kinds + 1` entries
//! starting at zero, so row `d` occupies `d * (num_kinds + 1) ..` and the
//! last entry of a row is its total mass.

use strum::EnumCount;
use tracing::debug;

use super::sampler::{Slot, sample_dense, select_sparse_at};
use crate::object::{Allocation, GameData, ItemKind, KindFlags, KindId, Season, Tval};
use crate::rng::GameRng;
use crate::world::GenConfig;

// ============================================================================
// Rarity curve
// ============================================================================

/// Depth scaling applied to an allocation weight
///
/// Zero past `max`. Below `min` the weight falls off as
/// `1 / (1 + (min - depth))`. Inside the range it tapers linearly from 1 at
/// `min` toward 0 at `max + 1`, except for single-depth ranges.
pub fn depth_scale(alloc: &Allocation, depth: i32) -> f64 {
    if depth > alloc.max {
        0.0
    } else if depth < alloc.min {
        1.0 / f64::from(1 + alloc.min - depth)
    } else if alloc.min == alloc.max {
        1.0
    } else {
        1.0 - f64::from(depth - alloc.min) / f64::from(alloc.max + 1 - alloc.min)
    }
}

/// Kinds no selector may ever return
///
/// Vault-only kinds are not listed here; they are filtered by the caller.
pub fn is_structurally_excluded(kind: &ItemKind, season: Season) -> bool {
    kind.is_quest_or_unique()
        || kind.kind_flags.contains(KindFlags::SPECIAL_GEN)
        || !kind.in_season(season)
}

/// Unscaled-by-quality weight of a kind at `depth`
pub fn kind_weight(kind: &ItemKind, depth: i32, season: Season) -> f64 {
    if kind.alloc.prob == 0 || is_structurally_excluded(kind, season) {
        return 0.0;
    }
    f64::from(kind.alloc.prob) * depth_scale(&kind.alloc, depth)
}

/// Whether a kind is good enough for the good table at `depth`
pub fn kind_is_good(kind: &ItemKind, depth: i32, config: &GenConfig) -> bool {
    if kind.kind_flags.contains(KindFlags::GOOD) {
        return true;
    }
    let threshold = config.good_cost_base + depth.max(0) * config.good_cost_per_level;
    if kind.cost > threshold {
        return true;
    }

    // Undamaged wargear
    if kind.tval.is_armour() {
        kind.to_a.min() >= 0
    } else if kind.tval.is_ammo() {
        true
    } else if kind.tval.is_melee_weapon() || kind.tval.is_launcher() {
        kind.to_h.min() >= 0 && kind.to_d.min() >= 0
    } else {
        false
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Cumulative per-depth distributions over item kinds
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationTable {
    num_kinds: usize,
    depths: usize,
    season: Season,
    all: Vec<f64>,
    good: Vec<f64>,
    /// `depth * Tval::COUNT + tval`
    all_tval: Vec<f64>,
    good_tval: Vec<f64>,
}

impl AllocationTable {
    /// Build both tables for every depth up to `config.max_obj_depth`
    pub fn build(data: &GameData, config: &GenConfig) -> Self {
        let num_kinds = data.kinds().len();
        let depths = config.max_obj_depth.max(1) as usize;
        let stride = num_kinds + 1;

        let mut all = vec![0.0; depths * stride];
        let mut good = vec![0.0; depths * stride];
        let mut all_tval = vec![0.0; depths * Tval::COUNT];
        let mut good_tval = vec![0.0; depths * Tval::COUNT];

        for depth in 0..depths {
            let level = depth as i32;
            let row = depth * stride;
            let mut all_sum = 0.0;
            let mut good_sum = 0.0;
            for (k, kind) in data.kinds().iter().enumerate() {
                let weight = kind_weight(kind, level, config.season);
                let good_weight = if weight > 0.0 && kind_is_good(kind, level, config) {
                    weight
                } else {
                    0.0
                };
                all_sum += weight;
                good_sum += good_weight;
                all[row + k + 1] = all_sum;
                good[row + k + 1] = good_sum;

                let t = depth * Tval::COUNT + kind.tval.index();
                all_tval[t] += weight;
                good_tval[t] += good_weight;
            }
        }

        debug!(
            kinds = num_kinds,
            depths,
            season = %config.season,
            "built allocation tables"
        );

        Self {
            num_kinds,
            depths,
            season: config.season,
            all,
            good,
            all_tval,
            good_tval,
        }
    }

    pub fn num_kinds(&self) -> usize {
        self.num_kinds
    }

    /// Number of depth rows
    pub fn depths(&self) -> usize {
        self.depths
    }

    /// Season the tables were built for
    pub fn season(&self) -> Season {
        self.season
    }

    fn clamp_depth(&self, depth: i32) -> usize {
        depth.clamp(0, self.depths as i32 - 1) as usize
    }

    /// Cumulative row for `depth`, `num_kinds + 1` entries
    pub fn row(&self, depth: i32, good: bool) -> &[f64] {
        let stride = self.num_kinds + 1;
        let start = self.clamp_depth(depth) * stride;
        let table = if good { &self.good } else { &self.all };
        &table[start..start + stride]
    }

    /// Total mass of a row
    pub fn total(&self, depth: i32, good: bool) -> f64 {
        self.row(depth, good)[self.num_kinds]
    }

    /// Mass of one category within a row
    pub fn tval_total(&self, depth: i32, good: bool, tval: Tval) -> f64 {
        let t = self.clamp_depth(depth) * Tval::COUNT + tval.index();
        if good {
            self.good_tval[t]
        } else {
            self.all_tval[t]
        }
    }

    /// Weight of one kind within a row
    pub fn weight(&self, depth: i32, good: bool, kind: KindId) -> f64 {
        let row = self.row(depth, good);
        row[kind.0 + 1] - row[kind.0]
    }

    /// Draw a kind, optionally restricted to one category
    ///
    /// Returns `None` when the requested distribution has no mass.
    pub fn select_kind(
        &self,
        data: &GameData,
        rng: &mut GameRng,
        depth: i32,
        good: bool,
        tval: Option<Tval>,
    ) -> Option<KindId> {
        let Some(tval) = tval else {
            let row = self.row(depth, good);
            if row[self.num_kinds] <= 0.0 {
                return None;
            }
            return Some(KindId(sample_dense(row, rng)));
        };

        let total = self.tval_total(depth, good, tval);
        if total <= 0.0 {
            return None;
        }
        let kinds = data.kinds_of(tval);
        let slots: Vec<Slot> = kinds
            .iter()
            .map(|&k| Slot::Weighted(self.weight(depth, good, k)))
            .collect();
        let i = select_sparse_at(&slots, rng.range_f64(0.0, total));
        Some(kinds[i])
    }
}
