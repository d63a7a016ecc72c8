//! Base item preparation and random extra powers

use strum::EnumCount;

use crate::object::{
    Aspect, ChestTraps, Element, GameData, KindFlags, KindId, Modifier, ObjFlags, Payload,
    RES_LEVEL_BASE, RES_LEVEL_IMMUNE, GeneratedItem, Tval,
};
use crate::rng::GameRng;
use crate::world::GenConfig;

/// Reset an item to the base stats of its kind
///
/// Random values are evaluated at `level` with the given aspect.
pub fn object_prep(
    data: &GameData,
    config: &GenConfig,
    rng: &mut GameRng,
    id: KindId,
    level: i32,
    aspect: Aspect,
) -> GeneratedItem {
    let kind = data.kind(id);
    let max_depth = config.max_depth;
    let mut item = GeneratedItem::new(id, kind.tval, kind.sval);

    item.origin_depth = level;
    item.weight = kind.weight;
    item.ac = kind.ac;
    item.dd = kind.dd;
    item.ds = kind.ds;
    item.flags = kind.flags;
    item.resists = kind.resists;
    item.slays = kind.slays.clone();
    item.brands = kind.brands.clone();

    for i in 0..Modifier::COUNT {
        item.modifiers[i] = kind.modifiers[i].calc(rng, level, max_depth, aspect);
    }

    if kind.tval.can_have_charges() {
        item.pval = kind.charges.calc(rng, level, max_depth, aspect);
    } else if kind.tval.has_kind_pval() {
        item.pval = kind.pval.calc(rng, level, max_depth, aspect);
    }

    // Light fuel
    if kind.flags.contains(ObjFlags::BURNS_OUT) {
        item.pval = config.fuel_torch;
    } else if kind.flags.contains(ObjFlags::TAKES_FUEL) {
        item.pval = config.fuel_lamp;
    }

    item.to_h = kind.to_h.calc(rng, level, max_depth, aspect);
    item.to_d = kind.to_d.calc(rng, level, max_depth, aspect);
    item.to_a = kind.to_a.calc(rng, level, max_depth, aspect);

    item.payload = match kind.tval {
        Tval::Chest => Payload::Chest(ChestTraps::empty()),
        Tval::Gold => Payload::Cash,
        _ => Payload::Plain,
    };

    item
}

// ============================================================================
// Random extra powers
// ============================================================================

/// Roll every extra power family named in `gen_flags`
///
/// Each family grants one power, then another while
/// `one_in(extra_power_continue)` succeeds and a power is still available.
pub fn apply_random_powers(
    rng: &mut GameRng,
    item: &mut GeneratedItem,
    gen_flags: KindFlags,
    continue_chance: u32,
) {
    if gen_flags.contains(KindFlags::RAND_SUSTAIN) {
        repeat_grant(rng, continue_chance, |rng| grant_flag(rng, item, ObjFlags::SUSTAINS));
    }
    if gen_flags.contains(KindFlags::RAND_POWER) {
        repeat_grant(rng, continue_chance, |rng| grant_flag(rng, item, ObjFlags::POWERS));
    }
    if gen_flags.contains(KindFlags::RAND_LO_RES) {
        repeat_grant(rng, continue_chance, |rng| grant_resist(rng, item, &Element::LOW));
    }
    if gen_flags.contains(KindFlags::RAND_HI_RES) {
        repeat_grant(rng, continue_chance, |rng| grant_resist(rng, item, &Element::HIGH));
    }
}

fn repeat_grant(rng: &mut GameRng, continue_chance: u32, mut grant: impl FnMut(&mut GameRng) -> bool) {
    if !grant(rng) {
        return;
    }
    while rng.one_in(continue_chance) {
        if !grant(rng) {
            break;
        }
    }
}

/// Add one flag from `pool` the item does not have yet
fn grant_flag(rng: &mut GameRng, item: &mut GeneratedItem, pool: ObjFlags) -> bool {
    let missing: Vec<ObjFlags> = pool.difference(item.flags).iter().collect();
    match rng.choose(&missing) {
        Some(&flag) => {
            item.flags |= flag;
            true
        }
        None => false,
    }
}

/// Raise one of the weakest resists in `pool` by a level, never to immunity
fn grant_resist(rng: &mut GameRng, item: &mut GeneratedItem, pool: &[Element]) -> bool {
    let Some(lowest) = pool.iter().map(|&e| item.resist(e)).min() else {
        return false;
    };
    let next = (lowest + 1).max(RES_LEVEL_BASE);
    if next >= RES_LEVEL_IMMUNE {
        return false;
    }
    let tier: Vec<Element> = pool
        .iter()
        .copied()
        .filter(|&e| item.resist(e) == lowest)
        .collect();
    match rng.choose(&tier) {
        Some(&element) => {
            item.set_resist(element, next);
            true
        }
        None => false,
    }
}
