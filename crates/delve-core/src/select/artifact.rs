//! Artifact selection
//!
//! Eligibility depends on which artifacts already exist this run, so the
//! probability array is rebuilt on every call. Two policies exist: the
//! strict one drops artifacts at or past their deepest native level, the
//! relaxed one only penalises them. Callers try strict first.

use tracing::debug;

use crate::alloc::{SparseTable, Slot};
use crate::context::GenerationContext;
use crate::object::{Allocation, Artifact, ArtifactId, KindId, Tval};
use crate::rng::GameRng;

/// Artifacts that may never be chosen regardless of depth
fn is_ineligible(ctx: &GenerationContext, id: ArtifactId, art: &Artifact, tval: Option<Tval>) -> bool {
    art.is_placeholder()
        || art.kind.is_none()
        || art.quest
        || ctx.is_created(id)
        || tval.is_some_and(|t| t != art.tval)
}

/// Weight inside or below the native range
fn native_weight(alloc: &Allocation, depth: i32) -> f64 {
    let prob = f64::from(alloc.prob);
    if depth < alloc.min {
        let below = f64::from(1 + alloc.min - depth);
        prob / (below * below)
    } else if alloc.max <= alloc.min {
        prob
    } else {
        prob * (1.0 - f64::from(depth - alloc.min) / f64::from(alloc.max + 1 - alloc.min))
    }
}

fn eligible_with(
    ctx: &GenerationContext,
    depth: i32,
    tval: Option<Tval>,
    overrun: impl Fn(&Allocation) -> Slot,
) -> SparseTable {
    let slots = ctx
        .data()
        .artifacts()
        .iter()
        .enumerate()
        .map(|(i, art)| {
            if is_ineligible(ctx, ArtifactId(i), art, tval) {
                Slot::Excluded
            } else if art.alloc.max <= depth {
                overrun(&art.alloc)
            } else {
                Slot::Weighted(native_weight(&art.alloc, depth))
            }
        })
        .collect();
    SparseTable::from_slots(slots)
}

/// Artifacts still native at `depth`
pub fn eligible_strict(ctx: &GenerationContext, depth: i32, tval: Option<Tval>) -> SparseTable {
    eligible_with(ctx, depth, tval, |_| Slot::Excluded)
}

/// Every uncreated artifact, with past-native ones heavily penalised
pub fn eligible_relaxed(ctx: &GenerationContext, depth: i32, tval: Option<Tval>) -> SparseTable {
    eligible_with(ctx, depth, tval, |alloc| {
        Slot::Weighted(f64::from(alloc.prob) / f64::from(10 * (depth - alloc.max + 1)))
    })
}

/// The distribution `select_artifact` draws from
pub fn artifact_probabilities(ctx: &GenerationContext, depth: i32, tval: Option<Tval>) -> SparseTable {
    let strict = eligible_strict(ctx, depth, tval);
    if strict.is_empty() {
        eligible_relaxed(ctx, depth, tval)
    } else {
        strict
    }
}

/// Pick an uncreated artifact for `depth`. Does not mark it created.
pub fn select_artifact(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    depth: i32,
    tval: Option<Tval>,
) -> Option<ArtifactId> {
    let strict = eligible_strict(ctx, depth, tval);
    let table = if strict.is_empty() {
        debug!(depth, "no native artifact, relaxing depth limit");
        eligible_relaxed(ctx, depth, tval)
    } else {
        strict
    };
    let id = table.select(rng).map(ArtifactId)?;
    debug!(depth, artifact = %ctx.data().artifact(id).name, "selected artifact");
    Some(id)
}

/// Pick an uncreated artifact built on `kind`, with the same two passes
pub fn select_artifact_for_kind(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    depth: i32,
    kind: KindId,
) -> Option<ArtifactId> {
    let tval = Some(ctx.data().kind(kind).tval);
    let only_kind = |table: SparseTable| {
        let slots = table
            .slots()
            .iter()
            .zip(ctx.data().artifacts())
            .map(|(&slot, art)| if art.kind == Some(kind) { slot } else { Slot::Excluded })
            .collect();
        SparseTable::from_slots(slots)
    };
    let strict = only_kind(eligible_strict(ctx, depth, tval));
    let table = if strict.is_empty() {
        only_kind(eligible_relaxed(ctx, depth, tval))
    } else {
        strict
    };
    table.select(rng).map(ArtifactId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_structural_exclusions() {
        let ctx = testing::context();
        let table = eligible_relaxed(&ctx, 30, None);
        assert_eq!(table.slots()[testing::PLACEHOLDER.0], Slot::Excluded);
        assert_eq!(table.slots()[testing::LOST_BLADE.0], Slot::Excluded);
        assert_eq!(table.slots()[testing::QUEST_CROWN.0], Slot::Excluded);
        assert!(table.weight(testing::RINGIL.0) > 0.0);
    }

    #[test]
    fn test_strict_drops_past_native() {
        let ctx = testing::context();
        let ringil = ctx.data().artifact(testing::RINGIL).alloc;
        let strict = eligible_strict(&ctx, ringil.max, None);
        assert_eq!(strict.slots()[testing::RINGIL.0], Slot::Excluded);
        assert_eq!(strict.weight(testing::RINGIL.0), 0.0);
        assert!(eligible_strict(&ctx, ringil.max - 1, None).slots()[testing::RINGIL.0].is_live());
        let relaxed = eligible_relaxed(&ctx, ringil.max, None);
        assert_eq!(relaxed.weight(testing::RINGIL.0), f64::from(ringil.prob) / 10.0);
        let deeper = eligible_relaxed(&ctx, ringil.max + 4, None);
        assert_eq!(deeper.weight(testing::RINGIL.0), f64::from(ringil.prob) / 50.0);
    }

    #[test]
    fn test_below_min_square_penalty() {
        let alloc = Allocation::new(100, 20, 40);
        assert_eq!(native_weight(&alloc, 18), 100.0 / 9.0);
        assert_eq!(native_weight(&alloc, 20), 100.0);
        assert!(native_weight(&alloc, 30) < 100.0);
    }

    #[test]
    fn test_tval_filter() {
        let ctx = testing::context();
        let table = eligible_strict(&ctx, 25, Some(Tval::Bow));
        for (i, slot) in table.slots().iter().enumerate() {
            if slot.is_live() {
                assert_eq!(ctx.data().artifacts()[i].tval, Tval::Bow);
            }
        }
        assert!(!table.is_empty());
    }

    #[test]
    fn test_relaxed_fallback_at_endgame() {
        let ctx = testing::context();
        assert!(eligible_strict(&ctx, 120, None).is_empty());
        let mut rng = GameRng::new(3);
        assert!(select_artifact(&ctx, &mut rng, 120, None).is_some());
    }

    #[test]
    fn test_select_for_kind() {
        let ctx = testing::context();
        let mut rng = GameRng::new(4);
        for depth in [5, 25, 100] {
            assert_eq!(
                select_artifact_for_kind(&ctx, &mut rng, depth, testing::LONG_SWORD),
                Some(testing::RINGIL)
            );
        }
        assert_eq!(select_artifact_for_kind(&ctx, &mut rng, 25, testing::DAGGER), None);
    }

    #[test]
    fn test_created_artifacts_excluded() {
        let mut ctx = testing::context();
        for i in 0..ctx.data().artifacts().len() {
            ctx.mark_created(ArtifactId(i));
        }
        let mut rng = GameRng::new(5);
        assert_eq!(select_artifact(&ctx, &mut rng, 20, None), None);
        assert!(artifact_probabilities(&ctx, 20, None).is_empty());
    }
}
