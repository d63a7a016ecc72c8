//! Ego and artifact merging, minima and the apply-magic pass

use strum::EnumCount;
use tracing::trace;

use crate::object::{
    Aspect, ArtifactId, ChestTraps, EgoId, Element, FaultId, GameData, GeneratedItem, KindFlags,
    Modifier, Payload, RES_LEVEL_IMMUNE, merge_names,
};
use crate::rng::GameRng;
use crate::world::GenConfig;

/// Most faults a single roll can attach
const MAX_ROLLED_FAULTS: i32 = 4;
/// Largest number of damage dice supercharging reaches
const MAX_SUPERCHARGED_DICE: i32 = 9;

// ============================================================================
// Ego and artifact properties
// ============================================================================

/// Merge one ego's properties into the item
pub fn ego_apply_magic(
    data: &GameData,
    config: &GenConfig,
    rng: &mut GameRng,
    item: &mut GeneratedItem,
    id: EgoId,
    level: i32,
) {
    let ego = data.ego(id);
    let max_depth = config.max_depth;

    item.to_h += ego.to_h.calc(rng, level, max_depth, Aspect::Randomise);
    item.to_d += ego.to_d.calc(rng, level, max_depth, Aspect::Randomise);
    item.to_a += ego.to_a.calc(rng, level, max_depth, Aspect::Randomise);
    for i in 0..Modifier::COUNT {
        item.modifiers[i] += ego.modifiers[i].calc(rng, level, max_depth, Aspect::Randomise);
    }

    item.weight = item.weight * ego.weight_pct / 100;

    if !ego.pval.is_zero() {
        let extra = ego.pval.calc(rng, level, max_depth, Aspect::Randomise);
        if data.kind(item.kind).kind_flags.contains(KindFlags::PVAL_PERCENT) {
            item.pval = item.pval * extra / 100;
        } else {
            item.pval = item.pval.max(extra);
        }
    }

    item.flags |= ego.flags;
    item.flags &= !ego.flags_off;
    merge_names(&mut item.slays, &ego.slays);
    merge_names(&mut item.brands, &ego.brands);
    for grant in &ego.faults {
        item.add_fault(grant.fault, grant.power);
    }

    // Capped sum
    for i in 0..Element::COUNT {
        let sum = item.resists[i].saturating_add(ego.resists[i]);
        item.resists[i] = sum.min(RES_LEVEL_IMMUNE);
    }
}

/// Overwrite the item with an artifact's fixed properties
pub fn copy_artifact_data(data: &GameData, item: &mut GeneratedItem, id: ArtifactId) {
    let art = data.artifact(id);

    item.ac = art.ac;
    item.dd = art.dd;
    item.ds = art.ds;
    item.to_h = art.to_h;
    item.to_d = art.to_d;
    item.to_a = art.to_a;
    item.weight = art.weight;
    item.modifiers = art.modifiers;
    item.flags |= art.flags;

    // Elementwise maximum
    for i in 0..Element::COUNT {
        item.resists[i] = item.resists[i].max(art.resists[i]).min(RES_LEVEL_IMMUNE);
    }

    merge_names(&mut item.slays, &art.slays);
    merge_names(&mut item.brands, &art.brands);
    for grant in &art.faults {
        item.add_fault(grant.fault, grant.power);
    }
}

/// Raise stats to the floors declared by the item's egos
pub fn ego_apply_minima(data: &GameData, item: &mut GeneratedItem) {
    let egos = item.egos().to_vec();
    for id in egos {
        let ego = data.ego(id);
        if let Some(min) = ego.min_to_h {
            item.to_h = item.to_h.max(min);
        }
        if let Some(min) = ego.min_to_d {
            item.to_d = item.to_d.max(min);
        }
        if let Some(min) = ego.min_to_a {
            item.to_a = item.to_a.max(min);
        }
        for (value, min) in item.modifiers.iter_mut().zip(ego.min_modifiers) {
            if let Some(min) = min {
                *value = (*value).max(min);
            }
        }
    }
}

// ============================================================================
// Apply magic
// ============================================================================

/// Random bonuses for a non-artifact item of the given power
///
/// Power 0 is an ordinary item, 1 good and 2 great. Returns the effective
/// level after any faults were rolled.
pub fn apply_magic(
    data: &GameData,
    config: &GenConfig,
    rng: &mut GameRng,
    item: &mut GeneratedItem,
    level: i32,
    power: i32,
) -> i32 {
    let mut level = level;

    if item.tval.can_have_faults() && rng.one_in(config.fault_chance) {
        level = roll_faults(data, config, rng, item, level);
    }

    if item.tval.is_weapon() {
        apply_magic_weapon(config, rng, item, level, power);
    } else if item.tval.is_armour() {
        apply_magic_armour(config, rng, item, level, power);
    } else if let Some(traps) = item.chest_traps() {
        item.payload = Payload::Chest(traps | pick_chest_traps(rng, level));
    }

    level
}

fn roll_faults(
    data: &GameData,
    config: &GenConfig,
    rng: &mut GameRng,
    item: &mut GeneratedItem,
    level: i32,
) -> i32 {
    let candidates: Vec<usize> = data
        .faults()
        .iter()
        .enumerate()
        .filter(|(_, f)| f.can_afflict(item.tval))
        .map(|(i, _)| i)
        .collect();
    if candidates.is_empty() {
        return level;
    }

    let mut level = level;
    for _ in 0..rng.randint1(MAX_ROLLED_FAULTS) {
        let Some(&pick) = rng.choose(&candidates) else {
            break;
        };
        let power = rng.randint1(9) + 10 * rng.m_bonus(9, level, config.max_depth);
        let id = FaultId(pick);
        if item.add_fault(id, power) {
            let fault = data.fault(id);
            item.to_h += fault.to_h;
            item.to_d += fault.to_d;
            item.to_a += fault.to_a;
            item.flags |= fault.flags;
        }
        // Faulty items roll their bonuses deeper
        level += 1 + power / 20;
        trace!(fault = %data.fault(id).name, power, level, "rolled fault");
    }
    level
}

/// Weapon to-hit and to-dam, with a chance of extra damage dice
fn apply_magic_weapon(
    config: &GenConfig,
    rng: &mut GameRng,
    item: &mut GeneratedItem,
    level: i32,
    power: i32,
) {
    if power <= 0 {
        return;
    }
    let max_depth = config.max_depth;
    let to_h1 = rng.randint1(5) + rng.m_bonus(5, level, max_depth);
    let to_d1 = rng.randint1(5) + rng.m_bonus(5, level, max_depth);
    let to_h2 = rng.m_bonus(10, level, max_depth);
    let to_d2 = rng.m_bonus(10, level, max_depth);

    item.to_h += to_h1;
    item.to_d += to_d1;
    if power >= 2 {
        item.to_h += to_h2;
        item.to_d += to_d2;
        supercharge_dice(rng, item);
    }
}

fn supercharge_dice(rng: &mut GameRng, item: &mut GeneratedItem) {
    if !(item.tval.is_melee_weapon() || item.tval.is_ammo()) || item.dd <= 0 || item.ds <= 0 {
        return;
    }
    while item.dd < MAX_SUPERCHARGED_DICE && rng.one_in((10 * item.dd * item.ds) as u32) {
        item.dd += 1;
    }
}

fn apply_magic_armour(
    config: &GenConfig,
    rng: &mut GameRng,
    item: &mut GeneratedItem,
    level: i32,
    power: i32,
) {
    if power <= 0 {
        return;
    }
    let to_a1 = rng.randint1(5) + rng.m_bonus(5, level, config.max_depth);
    let to_a2 = rng.m_bonus(10, level, config.max_depth);
    item.to_a += to_a1;
    if power >= 2 {
        item.to_a += to_a2;
    }
}

/// Trap set for a chest found at `level`; deeper chests carry nastier traps
pub fn pick_chest_traps(rng: &mut GameRng, level: i32) -> ChestTraps {
    if rng.randint0(100) >= 10 + level.clamp(0, 80) {
        return ChestTraps::empty();
    }

    let mut pool = vec![
        ChestTraps::LOSE_STR,
        ChestTraps::LOSE_CON,
        ChestTraps::POISON,
        ChestTraps::PARALYZE,
    ];
    if level >= 20 {
        pool.push(ChestTraps::SUMMON);
    }
    if level >= 40 {
        pool.push(ChestTraps::EXPLODE);
    }

    let mut traps = ChestTraps::empty();
    for _ in 0..1 + (level / 25).clamp(0, 2) {
        if let Some(&trap) = rng.choose(&pool) {
            traps |= trap;
        }
    }
    traps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make::prep::object_prep;
    use crate::object::{ObjFlags, RES_LEVEL_BASE, Tval};
    use crate::testing;

    fn sword(rng: &mut GameRng) -> GeneratedItem {
        let data = testing::data();
        object_prep(&data, &GenConfig::default(), rng, testing::LONG_SWORD, 30, Aspect::Randomise)
    }

    #[test]
    fn test_ego_merge_flags_and_slays() {
        let data = testing::data();
        let config = GenConfig::default();
        let mut rng = GameRng::new(1);
        let mut item = sword(&mut rng);
        item.attach_ego(testing::SLAY_EVIL);
        ego_apply_magic(&data, &config, &mut rng, &mut item, testing::SLAY_EVIL, 30);
        assert!(item.slays.iter().any(|s| s == "evil"));
        assert!(item.flags.contains(ObjFlags::BLESSED));
    }

    #[test]
    fn test_ego_resists_are_capped() {
        let data = testing::data();
        let config = GenConfig::default();
        let mut rng = GameRng::new(2);
        let mut item = object_prep(&data, &config, &mut rng, testing::LEATHER, 20, Aspect::Randomise);
        item.set_resist(Element::Fire, RES_LEVEL_IMMUNE - 1);
        ego_apply_magic(&data, &config, &mut rng, &mut item, testing::RESISTANCE, 20);
        ego_apply_magic(&data, &config, &mut rng, &mut item, testing::RESISTANCE, 20);
        assert_eq!(item.resist(Element::Fire), RES_LEVEL_IMMUNE);
        assert_eq!(item.resist(Element::Acid), 2 * RES_LEVEL_BASE);
    }

    #[test]
    fn test_ego_weight_and_flags_off() {
        let data = testing::data();
        let config = GenConfig::default();
        let mut rng = GameRng::new(3);
        let mut item = object_prep(&data, &config, &mut rng, testing::LEATHER, 40, Aspect::Randomise);
        let base = item.weight;
        item.flags |= ObjFlags::AGGRAVATE;
        ego_apply_magic(&data, &config, &mut rng, &mut item, testing::ELVENKIND, 40);
        assert_eq!(item.weight, base * data.ego(testing::ELVENKIND).weight_pct / 100);
        assert!(!item.flags.contains(ObjFlags::AGGRAVATE));
    }

    #[test]
    fn test_minima_only_raise() {
        let data = testing::data();
        let mut rng = GameRng::new(4);
        let mut item = object_prep(&data, &GenConfig::default(), &mut rng, testing::LEATHER, 40, Aspect::Randomise);
        item.attach_ego(testing::ELVENKIND);
        let floor = data.ego(testing::ELVENKIND).min_to_a.unwrap();
        item.to_a = floor - 5;
        ego_apply_minima(&data, &mut item);
        assert_eq!(item.to_a, floor);
        item.to_a = floor + 7;
        ego_apply_minima(&data, &mut item);
        assert_eq!(item.to_a, floor + 7);
    }

    #[test]
    fn test_artifact_copy() {
        let data = testing::data();
        let mut rng = GameRng::new(5);
        let mut item = sword(&mut rng);
        item.set_resist(Element::Cold, 2);
        copy_artifact_data(&data, &mut item, testing::RINGIL);
        let art = data.artifact(testing::RINGIL);
        assert_eq!((item.to_h, item.to_d, item.dd), (art.to_h, art.to_d, art.dd));
        assert_eq!(item.resist(Element::Cold), 2.max(art.resists[Element::Cold.index()]));
        assert!(item.resists.iter().all(|&r| r <= RES_LEVEL_IMMUNE));
    }

    #[test]
    fn test_great_weapons_gain_bonuses() {
        let data = testing::data();
        let config = GenConfig {
            fault_chance: u32::MAX,
            ..GenConfig::default()
        };
        let mut rng = GameRng::new(6);
        for _ in 0..50 {
            let mut item = sword(&mut rng);
            let (h, d) = (item.to_h, item.to_d);
            apply_magic(&data, &config, &mut rng, &mut item, 30, 2);
            assert!(item.to_h > h && item.to_d > d);
            assert!(item.dd <= MAX_SUPERCHARGED_DICE);
            assert!(!item.is_faulty());
        }
    }

    #[test]
    fn test_faults_raise_level() {
        let data = testing::data();
        let config = GenConfig {
            fault_chance: 1,
            ..GenConfig::default()
        };
        let mut rng = GameRng::new(7);
        let mut item = sword(&mut rng);
        let level = apply_magic(&data, &config, &mut rng, &mut item, 10, 0);
        assert!(item.is_faulty());
        assert!(level > 10);
        assert!(item.faults.iter().all(|f| data.fault(f.fault).can_afflict(Tval::Sword)));
        assert!(item.faults.len() <= MAX_ROLLED_FAULTS as usize);
    }

    #[test]
    fn test_great_items_can_be_faulty() {
        let data = testing::data();
        let config = GenConfig {
            fault_chance: 1,
            ..GenConfig::default()
        };
        let mut rng = GameRng::new(9);
        for power in [1, 2] {
            let mut item = sword(&mut rng);
            apply_magic(&data, &config, &mut rng, &mut item, 30, power);
            assert!(item.is_faulty());
        }
    }

    #[test]
    fn test_chest_traps_by_depth() {
        let mut rng = GameRng::new(8);
        for _ in 0..200 {
            let traps = pick_chest_traps(&mut rng, 5);
            assert!(!traps.intersects(ChestTraps::SUMMON | ChestTraps::EXPLODE));
        }
        let trapped = (0..200)
            .filter(|_| !pick_chest_traps(&mut rng, 80).is_empty())
            .count();
        assert!(trapped > 120);
    }
}
