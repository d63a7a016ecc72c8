//! Single-ego selection and kind/ego compatibility

use tracing::trace;

use crate::alloc::{SparseTable, Slot, depth_scale, is_structurally_excluded};
use crate::context::GenerationContext;
use crate::object::{Ego, EgoId, GameData, KindId, MAX_EGOS, Tval};
use crate::rng::GameRng;

/// Kinds of `ego` that are generatable and match the category filter
pub(crate) fn usable_kinds<'a>(
    ctx: &'a GenerationContext,
    ego: &'a Ego,
    tval: Option<Tval>,
) -> impl Iterator<Item = KindId> + 'a {
    let season = ctx.config().season;
    ego.possible.iter().map(|p| p.kind).filter(move |&k| {
        let kind = ctx.data().kind(k);
        tval.is_none_or(|t| kind.tval == t) && !is_structurally_excluded(kind, season)
    })
}

fn ego_slot(ego: &Ego, depth: i32, applies: bool) -> Slot {
    if !applies || ego.alloc.max < depth {
        return Slot::Excluded;
    }
    Slot::Weighted(f64::from(ego.alloc.prob) * depth_scale(&ego.alloc, depth))
}

/// Ego distribution for a category (or any category)
pub fn ego_probabilities(ctx: &GenerationContext, depth: i32, tval: Option<Tval>) -> SparseTable {
    let slots = ctx
        .data()
        .egos()
        .iter()
        .map(|ego| ego_slot(ego, depth, usable_kinds(ctx, ego, tval).next().is_some()))
        .collect();
    SparseTable::from_slots(slots)
}

/// Ego distribution restricted to egos that attach to `kind`
pub fn ego_probabilities_for_kind(ctx: &GenerationContext, depth: i32, kind: KindId) -> SparseTable {
    let slots = ctx
        .data()
        .egos()
        .iter()
        .map(|ego| ego_slot(ego, depth, ego.applies_to(kind)))
        .collect();
    SparseTable::from_slots(slots)
}

/// Draw one ego able to attach to some kind of the category
pub fn select_ego(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    depth: i32,
    tval: Option<Tval>,
) -> Option<EgoId> {
    ego_probabilities(ctx, depth, tval).select(rng).map(EgoId)
}

/// Draw one ego able to attach to `kind`
pub fn select_ego_for_kind(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    depth: i32,
    kind: KindId,
) -> Option<EgoId> {
    ego_probabilities_for_kind(ctx, depth, kind)
        .select(rng)
        .map(EgoId)
}

/// Draw a base kind for `ego`, weighted by its scale and the kind's rarity curve
pub fn select_kind_for_ego(
    ctx: &GenerationContext,
    rng: &mut GameRng,
    depth: i32,
    ego: EgoId,
    tval: Option<Tval>,
) -> Option<KindId> {
    let ego = ctx.data().ego(ego);
    let season = ctx.config().season;
    let slots: Vec<Slot> = ego
        .possible
        .iter()
        .map(|p| {
            let kind = ctx.data().kind(p.kind);
            if tval.is_some_and(|t| kind.tval != t) || is_structurally_excluded(kind, season) {
                Slot::Excluded
            } else {
                Slot::Weighted(f64::from(p.scale) * depth_scale(&kind.alloc, depth))
            }
        })
        .collect();
    let table = SparseTable::from_slots(slots);
    let i = table.select(rng)?;
    trace!(ego = %ego.name, kind = %ctx.data().kind(ego.possible[i].kind).name, "kind for ego");
    Some(ego.possible[i].kind)
}

/// Whether every ego in `egos` attaches to `kind` and the set may coexist
pub fn ego_set_applies(data: &GameData, kind: KindId, egos: &[EgoId]) -> bool {
    if egos.is_empty() || egos.len() > MAX_EGOS {
        return false;
    }
    for (i, &a) in egos.iter().enumerate() {
        if !data.ego(a).applies_to(kind) {
            return false;
        }
        for &b in &egos[i + 1..] {
            if a == b || data.is_forbidden(a, b) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_ego_matches_tval() {
        let ctx = testing::context();
        let mut rng = GameRng::new(11);
        for _ in 0..200 {
            let ego = select_ego(&ctx, &mut rng, 20, Some(Tval::SoftArmour)).unwrap();
            let kind = select_kind_for_ego(&ctx, &mut rng, 20, ego, Some(Tval::SoftArmour)).unwrap();
            assert_eq!(ctx.data().kind(kind).tval, Tval::SoftArmour);
            assert!(ctx.data().ego(ego).applies_to(kind));
        }
    }

    #[test]
    fn test_egos_past_max_excluded() {
        let ctx = testing::context();
        let table = ego_probabilities(&ctx, 90, None);
        for (i, ego) in ctx.data().egos().iter().enumerate() {
            if ego.alloc.max < 90 {
                assert_eq!(table.slots()[i], Slot::Excluded);
            }
        }
        assert!(ego_probabilities(&ctx, 20, Some(Tval::Rod)).is_empty());
    }

    #[test]
    fn test_select_ego_for_kind() {
        let ctx = testing::context();
        let mut rng = GameRng::new(12);
        for _ in 0..100 {
            let ego = select_ego_for_kind(&ctx, &mut rng, 30, testing::LONG_SWORD).unwrap();
            assert!(ctx.data().ego(ego).applies_to(testing::LONG_SWORD));
        }
        assert_eq!(select_ego_for_kind(&ctx, &mut rng, 30, testing::POTION), None);
    }

    #[test]
    fn test_ego_set_applies() {
        let data = testing::data();
        let sword = testing::LONG_SWORD;
        assert!(ego_set_applies(&data, sword, &[testing::SLAY_EVIL]));
        assert!(ego_set_applies(&data, sword, &[testing::SLAY_EVIL, testing::BURNING]));
        assert!(!ego_set_applies(&data, sword, &[testing::SLAY_EVIL, testing::DEFENDER]));
        assert!(!ego_set_applies(&data, sword, &[testing::BURNING, testing::BURNING]));
        assert!(!ego_set_applies(&data, sword, &[testing::RESISTANCE]));
        assert!(!ego_set_applies(&data, sword, &[]));
    }
}
