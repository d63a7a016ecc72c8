//! Multi-ego combinations
//!
//! A table of ego pairs that can share a kind, built per request. The pair
//! window starts at the sum of both egos' shallowest depths and is at least
//! ten levels wide.

use tracing::{debug, trace};

use super::ego::{ego_set_applies, select_kind_for_ego, usable_kinds};
use crate::alloc::{depth_scale, sample_dense};
use crate::context::GenerationContext;
use crate::object::{Allocation, EgoId, KindId, Tval};
use crate::rng::GameRng;

/// Shallowest depth any combination is native at
const MIN_COMBINED_DEPTH: i32 = 10;
/// Narrowest combined window
const MIN_COMBINED_SPAN: i32 = 10;

/// One candidate pair and its joint weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiEgoEntry {
    pub first: EgoId,
    pub second: EgoId,
    pub weight: f64,
}

impl MultiEgoEntry {
    pub fn egos(&self) -> [EgoId; 2] {
        [self.first, self.second]
    }
}

/// Combined native window of two egos
pub fn combined_window(a: &Allocation, b: &Allocation, max_depth: i32) -> Allocation {
    let min = (a.min + b.min).max(MIN_COMBINED_DEPTH);
    let max = (a.max + b.max).min(max_depth).max(min + MIN_COMBINED_SPAN);
    Allocation::new(a.prob * b.prob, min, max)
}

/// Request-scoped cumulative table of legal ego pairs
#[derive(Debug, Clone, Default)]
pub struct MultiEgoTable {
    entries: Vec<MultiEgoEntry>,
    /// `entries.len() + 1` entries starting at zero
    cumulative: Vec<f64>,
}

impl MultiEgoTable {
    /// Pairs sharing a kind of the category (or any category)
    pub fn build(ctx: &GenerationContext, depth: i32, tval: Option<Tval>) -> Self {
        let num_kinds = ctx.data().kinds().len();
        let compat = ctx
            .data()
            .egos()
            .iter()
            .map(|ego| {
                let mut row = vec![false; num_kinds];
                for k in usable_kinds(ctx, ego, tval) {
                    row[k.0] = true;
                }
                row
            })
            .collect();
        Self::from_compat(ctx, depth, compat)
    }

    /// Pairs that both attach to `kind`
    pub fn build_for_kind(ctx: &GenerationContext, depth: i32, kind: KindId) -> Self {
        let compat = ctx
            .data()
            .egos()
            .iter()
            .map(|ego| vec![ego.applies_to(kind)])
            .collect();
        Self::from_compat(ctx, depth, compat)
    }

    /// `compat[ego]` flags the kinds each ego may use
    fn from_compat(ctx: &GenerationContext, depth: i32, compat: Vec<Vec<bool>>) -> Self {
        let data = ctx.data();

        let mut entries = Vec::new();
        let mut cumulative = vec![0.0];
        let mut total = 0.0;
        let egos = data.egos();
        for i in 0..egos.len() {
            if egos[i].alloc.prob == 0 {
                continue;
            }
            for j in i + 1..egos.len() {
                if egos[j].alloc.prob == 0 {
                    continue;
                }
                let shares_kind = compat[i].iter().zip(&compat[j]).any(|(a, b)| *a && *b);
                if !shares_kind || data.is_forbidden(EgoId(i), EgoId(j)) {
                    continue;
                }
                let window = combined_window(&egos[i].alloc, &egos[j].alloc, ctx.config().max_depth);
                let weight = f64::from(window.prob) * depth_scale(&window, depth);
                if weight <= 0.0 {
                    continue;
                }
                total += weight;
                entries.push(MultiEgoEntry {
                    first: EgoId(i),
                    second: EgoId(j),
                    weight,
                });
                cumulative.push(total);
            }
        }

        trace!(depth, pairs = entries.len(), total, "built multi-ego table");
        Self {
            entries,
            cumulative,
        }
    }

    pub fn entries(&self) -> &[MultiEgoEntry] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    /// Whether the pair (in either order) is in the table
    pub fn contains(&self, a: EgoId, b: EgoId) -> bool {
        self.entries
            .iter()
            .any(|e| (e.first == a && e.second == b) || (e.first == b && e.second == a))
    }

    pub fn select(&self, rng: &mut GameRng) -> Option<MultiEgoEntry> {
        if self.is_empty() {
            return None;
        }
        Some(self.entries[sample_dense(&self.cumulative, rng)])
    }
}

/// Draw a kind every ego of the pair attaches to
///
/// Starts from a random member and alternates anchors when the drawn kind
/// fails the cross-check, up to `multi_ego_attempts` draws.
pub fn select_kind_for_ego_set(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    depth: i32,
    egos: [EgoId; 2],
    tval: Option<Tval>,
) -> Option<KindId> {
    let mut anchor = rng.rn2(2) as usize;
    for _ in 0..ctx.config().multi_ego_attempts {
        if let Some(kind) = select_kind_for_ego(ctx, rng, depth, egos[anchor], tval)
            && ego_set_applies(ctx.data(), kind, &egos)
        {
            return Some(kind);
        }
        anchor ^= 1;
    }
    debug!(
        first = %ctx.data().ego(egos[0]).name,
        second = %ctx.data().ego(egos[1]).name,
        "no shared kind for ego pair"
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_combined_window() {
        let a = Allocation::new(10, 0, 30);
        let b = Allocation::new(5, 3, 40);
        let w = combined_window(&a, &b, 128);
        assert_eq!((w.prob, w.min, w.max), (50, 10, 70));

        let deep = combined_window(&Allocation::new(1, 60, 100), &Allocation::new(1, 70, 100), 128);
        assert_eq!((deep.min, deep.max), (130, 140));
    }

    #[test]
    fn test_forbidden_pair_never_listed() {
        let ctx = testing::context();
        for depth in [10, 25, 50, 80] {
            let table = MultiEgoTable::build(&ctx, depth, None);
            assert!(!table.contains(testing::SLAY_EVIL, testing::DEFENDER));
            for e in table.entries() {
                assert!(e.first < e.second);
                assert!(!ctx.data().is_forbidden(e.first, e.second));
            }
        }
        let table = MultiEgoTable::build(&ctx, 25, Some(Tval::Sword));
        assert!(table.contains(testing::SLAY_EVIL, testing::BURNING));
    }

    #[test]
    fn test_pairs_need_a_shared_kind() {
        let ctx = testing::context();
        let table = MultiEgoTable::build(&ctx, 25, None);
        assert!(!table.contains(testing::SLAY_EVIL, testing::RESISTANCE));
        assert!(MultiEgoTable::build(&ctx, 25, Some(Tval::Potion)).is_empty());
    }

    #[test]
    fn test_selected_kind_fits_both() {
        let ctx = testing::context();
        let mut rng = GameRng::new(21);
        let table = MultiEgoTable::build(&ctx, 30, None);
        for _ in 0..200 {
            let entry = table.select(&mut rng).unwrap();
            if let Some(kind) = select_kind_for_ego_set(&ctx, &mut rng, 30, entry.egos(), None) {
                assert!(ego_set_applies(ctx.data(), kind, &entry.egos()));
            }
        }
    }

    #[test]
    fn test_pairs_for_kind() {
        let ctx = testing::context();
        let table = MultiEgoTable::build_for_kind(&ctx, 30, testing::LONG_SWORD);
        assert!(!table.is_empty());
        for e in table.entries() {
            assert!(ego_set_applies(ctx.data(), testing::LONG_SWORD, &e.egos()));
        }
        assert!(MultiEgoTable::build_for_kind(&ctx, 30, testing::POTION).is_empty());
    }

    #[test]
    fn test_cumulative_matches_entries() {
        let ctx = testing::context();
        let table = MultiEgoTable::build(&ctx, 40, None);
        let sum: f64 = table.entries().iter().map(|e| e.weight).sum();
        assert!((table.total() - sum).abs() < 1e-9);
        assert!(!table.is_empty());
    }
}
