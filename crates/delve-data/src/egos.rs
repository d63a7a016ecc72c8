//! Ego definitions
//!
//! Forbidden pairs are listed on both sides so the table reads the same
//! from either ego.

use delve_core::object::{
    Ego, EgoId, Element, FaultGrant, KindFlags, KindId, Modifier, ObjFlags, RES_LEVEL_BASE,
    RandomValue,
};

use crate::faults;
use crate::kinds::*;

// ============================================================================
// Ego indices
// ============================================================================

pub const HOLY_AVENGER: EgoId = EgoId(0);
pub const DEFENDER: EgoId = EgoId(1);
pub const WESTERNESSE: EgoId = EgoId(2);
pub const SLAY_EVIL: EgoId = EgoId(3);
pub const SLAY_UNDEAD: EgoId = EgoId(4);
pub const SLAY_DRAGON: EgoId = EgoId(5);
pub const BURNING: EgoId = EgoId(6);
pub const FREEZING: EgoId = EgoId(7);
pub const VENOM: EgoId = EgoId(8);
pub const MORGUL: EgoId = EgoId(9);
pub const DIGGING: EgoId = EgoId(10);
pub const POWER: EgoId = EgoId(11);
pub const ACCURACY: EgoId = EgoId(12);
pub const EXTRA_MIGHT: EgoId = EgoId(13);
pub const RESISTANCE: EgoId = EgoId(14);
pub const RESIST_FIRE: EgoId = EgoId(15);
pub const ELVENKIND: EgoId = EgoId(16);
pub const STEALTH: EgoId = EgoId(17);
pub const FREE_ACTION: EgoId = EgoId(18);
pub const SEEING: EgoId = EgoId(19);
pub const MAGI: EgoId = EgoId(20);
pub const SPEED: EgoId = EgoId(21);
pub const DWARVEN: EgoId = EgoId(22);
pub const BRIGHTNESS: EgoId = EgoId(23);
pub const TRUE_SIGHT: EgoId = EgoId(24);
pub const PLENTY: EgoId = EgoId(25);

pub const NUM_EGOS: usize = 26;

// ============================================================================
// Kind groups
// ============================================================================

const MELEE: [KindId; 10] = [
    DAGGER,
    MAIN_GAUCHE,
    RAPIER,
    LONG_SWORD,
    BLADE_OF_CHAOS,
    WHIP,
    MACE,
    WAR_HAMMER,
    SPEAR,
    GLAIVE,
];
const AMMO: [KindId; 3] = [ARROW, IRON_SHOT, BOLT];
const LAUNCHERS: [KindId; 3] = [SLING, SHORT_BOW, LONG_BOW];
const BODY: [KindId; 4] = [SOFT_LEATHER, HARD_LEATHER, METAL_SCALE, MITHRIL_MAIL];

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn slayer(name: &str, cost: i32, alloc: (u32, i32, i32), slays: &[&str]) -> Ego {
    let (prob, min, max) = alloc;
    let mut ego = Ego::new(name, cost)
        .with_alloc(prob, min, max)
        .with_kinds(MELEE)
        .with_kinds(AMMO);
    ego.to_h = RandomValue::new(0, 1, 6, 0);
    ego.to_d = RandomValue::new(0, 1, 6, 0);
    ego.slays = names(slays);
    ego
}

fn brander(name: &str, brand: &str, element: Element) -> Ego {
    let mut ego = Ego::new(name, 800)
        .with_alloc(20, 5, 100)
        .with_kinds(MELEE)
        .with_kinds(AMMO);
    ego.brands = names(&[brand]);
    ego.resists[element.index()] = RES_LEVEL_BASE;
    ego
}

// ============================================================================
// Table
// ============================================================================

/// Every ego, in index order
pub fn egos() -> Vec<Ego> {
    let mut egos = Vec::with_capacity(NUM_EGOS);

    // Weapons
    let mut avenger = Ego::new("(Holy Avenger)", 10_000)
        .with_alloc(10, 30, 127)
        .with_kinds(MELEE)
        .forbidding(MORGUL);
    avenger.to_h = RandomValue::new(0, 1, 6, 0);
    avenger.to_d = RandomValue::new(0, 1, 6, 0);
    avenger.to_a = RandomValue::new(0, 1, 4, 0);
    avenger.modifiers[Modifier::Wis.index()] = RandomValue::new(0, 1, 4, 0);
    avenger.min_modifiers[Modifier::Wis.index()] = Some(1);
    avenger.flags = ObjFlags::SEE_INVIS | ObjFlags::BLESSED;
    avenger.gen_flags = KindFlags::RAND_SUSTAIN;
    avenger.slays = names(&["evil", "undead", "demon"]);
    egos.push(avenger);

    let mut defender = Ego::new("(Defender)", 15_000)
        .with_alloc(10, 20, 127)
        .with_kinds(MELEE)
        .forbidding(MORGUL);
    defender.to_h = RandomValue::new(0, 1, 4, 0);
    defender.to_d = RandomValue::new(0, 1, 4, 0);
    defender.to_a = RandomValue::new(0, 1, 8, 10);
    defender.modifiers[Modifier::Stealth.index()] = RandomValue::new(0, 1, 4, 0);
    defender.flags = ObjFlags::FEATHER | ObjFlags::FREE_ACT | ObjFlags::SEE_INVIS | ObjFlags::REGEN;
    defender.gen_flags = KindFlags::RAND_SUSTAIN;
    for element in Element::LOW {
        defender.resists[element.index()] = RES_LEVEL_BASE;
    }
    egos.push(defender);

    let mut westernesse = Ego::new("of Westernesse", 20_000)
        .with_alloc(20, 15, 100)
        .with_kinds(MELEE);
    westernesse.to_h = RandomValue::new(0, 1, 5, 0);
    westernesse.to_d = RandomValue::new(0, 1, 5, 0);
    for stat in [Modifier::Str, Modifier::Dex, Modifier::Con] {
        westernesse.modifiers[stat.index()] = RandomValue::new(0, 1, 2, 0);
        westernesse.min_modifiers[stat.index()] = Some(1);
    }
    westernesse.flags = ObjFlags::FREE_ACT | ObjFlags::SEE_INVIS;
    westernesse.slays = names(&["orc", "troll", "giant"]);
    egos.push(westernesse);

    let mut slay_evil = slayer("of Slay Evil", 500, (30, 0, 80), &["evil"]).forbidding(MORGUL);
    slay_evil.flags = ObjFlags::BLESSED;
    egos.push(slay_evil);
    egos.push(slayer("of Slay Undead", 400, (30, 5, 80), &["undead"]));
    egos.push(slayer("of Slay Dragon", 600, (30, 10, 100), &["dragon"]));

    egos.push(brander("of Burning", "fire", Element::Fire).forbidding(FREEZING));
    egos.push(brander("of Freezing", "cold", Element::Cold).forbidding(BURNING));
    egos.push(brander("of Venom", "poison", Element::Poison));

    let mut morgul = Ego::new("of Morgul", 1)
        .with_alloc(10, 10, 100)
        .with_kinds(MELEE)
        .forbidding(HOLY_AVENGER)
        .forbidding(DEFENDER)
        .forbidding(SLAY_EVIL);
    morgul.to_h = RandomValue::new(0, 1, 20, 0);
    morgul.to_d = RandomValue::new(0, 1, 20, 0);
    morgul.flags = ObjFlags::SEE_INVIS | ObjFlags::AGGRAVATE | ObjFlags::DRAIN_EXP;
    morgul.slays = names(&["undead"]);
    morgul.faults = vec![FaultGrant {
        fault: faults::TELEPORTATION,
        power: 40,
    }];
    egos.push(morgul);

    let mut digging = Ego::new("of Digging", 500)
        .with_alloc(20, 5, 100)
        .with_kinds([SHOVEL]);
    digging.modifiers[Modifier::Tunnel.index()] = RandomValue::new(0, 1, 4, 0);
    digging.min_modifiers[Modifier::Tunnel.index()] = Some(1);
    digging.brands = names(&["acid"]);
    egos.push(digging);

    // Launchers
    let mut power = Ego::new("of Power", 2000)
        .with_alloc(20, 15, 100)
        .with_kinds(LAUNCHERS);
    power.to_h = RandomValue::new(0, 1, 5, 0);
    power.to_d = RandomValue::new(0, 1, 15, 10);
    power.min_to_d = Some(15);
    egos.push(power);

    let mut accuracy = Ego::new("of Accuracy", 1000)
        .with_alloc(20, 5, 100)
        .with_kinds(LAUNCHERS);
    accuracy.to_h = RandomValue::new(0, 1, 15, 10);
    accuracy.to_d = RandomValue::new(0, 1, 5, 0);
    accuracy.min_to_h = Some(15);
    egos.push(accuracy);

    let mut might = Ego::new("of Extra Might", 4000)
        .with_alloc(10, 20, 100)
        .with_kinds(LAUNCHERS);
    might.modifiers[Modifier::Might.index()] = RandomValue::fixed(1);
    might.to_d = RandomValue::new(0, 1, 10, 0);
    egos.push(might);

    // Armour
    let mut resistance = Ego::new("of Resistance", 1000)
        .with_alloc(20, 5, 100)
        .with_kinds(BODY)
        .with_kinds([CLOAK, SMALL_SHIELD]);
    resistance.to_a = RandomValue::new(0, 1, 10, 0);
    for element in Element::LOW {
        resistance.resists[element.index()] = RES_LEVEL_BASE;
    }
    egos.push(resistance);

    let mut resist_fire = Ego::new("of Resist Fire", 300)
        .with_alloc(30, 0, 60)
        .with_kinds(BODY)
        .with_kinds([CLOAK, SMALL_SHIELD]);
    resist_fire.resists[Element::Fire.index()] = RES_LEVEL_BASE;
    egos.push(resist_fire);

    let mut elvenkind = Ego::new("of Elvenkind", 4000)
        .with_alloc(5, 30, 127)
        .with_kinds(BODY)
        .with_kinds([CLOAK, LEATHER_BOOTS])
        .forbidding(STEALTH)
        .forbidding(DWARVEN);
    elvenkind.to_a = RandomValue::new(0, 1, 10, 0);
    elvenkind.min_to_a = Some(5);
    elvenkind.modifiers[Modifier::Stealth.index()] = RandomValue::new(0, 1, 3, 0);
    elvenkind.min_modifiers[Modifier::Stealth.index()] = Some(1);
    elvenkind.weight_pct = 80;
    elvenkind.flags_off = ObjFlags::AGGRAVATE;
    elvenkind.gen_flags = KindFlags::RAND_HI_RES;
    for element in Element::LOW {
        elvenkind.resists[element.index()] = RES_LEVEL_BASE;
    }
    egos.push(elvenkind);

    let mut stealth = Ego::new("of Stealth", 500)
        .with_alloc(20, 0, 60)
        .with_kinds([SOFT_LEATHER, HARD_LEATHER, CLOAK, LEATHER_BOOTS])
        .forbidding(ELVENKIND);
    stealth.modifiers[Modifier::Stealth.index()] = RandomValue::new(0, 1, 3, 0);
    stealth.min_modifiers[Modifier::Stealth.index()] = Some(1);
    egos.push(stealth);

    let mut free_action = Ego::new("of Free Action", 1000)
        .with_alloc(20, 5, 100)
        .with_kinds([LEATHER_GLOVES, LEATHER_BOOTS]);
    free_action.flags = ObjFlags::FREE_ACT;
    egos.push(free_action);

    let mut seeing = Ego::new("of Seeing", 1000)
        .with_alloc(20, 10, 100)
        .with_kinds([METAL_CAP, IRON_CROWN]);
    seeing.modifiers[Modifier::Search.index()] = RandomValue::new(0, 1, 5, 0);
    seeing.flags = ObjFlags::SEE_INVIS | ObjFlags::PROT_BLIND;
    egos.push(seeing);

    let mut magi = Ego::new("of the Magi", 7500)
        .with_alloc(5, 30, 127)
        .with_kinds([IRON_CROWN]);
    magi.modifiers[Modifier::Int.index()] = RandomValue::new(0, 1, 3, 0);
    magi.min_modifiers[Modifier::Int.index()] = Some(1);
    magi.flags = ObjFlags::SEE_INVIS | ObjFlags::SUST_INT;
    magi.gen_flags = KindFlags::RAND_POWER;
    for element in Element::LOW {
        magi.resists[element.index()] = RES_LEVEL_BASE;
    }
    egos.push(magi);

    let mut speed = Ego::new("of Speed", 100_000)
        .with_alloc(2, 40, 127)
        .with_kinds([LEATHER_BOOTS]);
    speed.modifiers[Modifier::Speed.index()] = RandomValue::new(0, 1, 9, 10);
    speed.min_modifiers[Modifier::Speed.index()] = Some(1);
    egos.push(speed);

    let mut dwarven = Ego::new("(Dwarven)", 500)
        .with_alloc(10, 10, 100)
        .with_kinds([METAL_SCALE, MITHRIL_MAIL, METAL_CAP])
        .forbidding(ELVENKIND);
    dwarven.to_a = RandomValue::new(0, 1, 15, 0);
    dwarven.modifiers[Modifier::Str.index()] = RandomValue::new(0, 1, 2, 0);
    dwarven.modifiers[Modifier::Con.index()] = RandomValue::new(0, 1, 2, 0);
    dwarven.modifiers[Modifier::Infra.index()] = RandomValue::new(0, 1, 5, 0);
    dwarven.weight_pct = 120;
    dwarven.flags = ObjFlags::FREE_ACT;
    egos.push(dwarven);

    // Lights and devices
    let mut brightness = Ego::new("of Brightness", 100)
        .with_alloc(10, 0, 50)
        .with_kinds([TORCH, LANTERN]);
    brightness.modifiers[Modifier::Light.index()] = RandomValue::fixed(1);
    egos.push(brightness);

    let mut true_sight = Ego::new("of True Sight", 500)
        .with_alloc(10, 15, 100)
        .with_kinds([LANTERN]);
    true_sight.flags = ObjFlags::PROT_BLIND | ObjFlags::SEE_INVIS;
    egos.push(true_sight);

    let mut plenty = Ego::new("of Plenty", 400)
        .with_alloc(10, 10, 100)
        .with_kinds([STAFF_DETECT_EVIL]);
    plenty.pval = RandomValue::fixed(150);
    egos.push(plenty);

    egos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_names() {
        let egos = egos();
        assert_eq!(egos.len(), NUM_EGOS);
        assert_eq!(egos[HOLY_AVENGER.0].name, "(Holy Avenger)");
        assert_eq!(egos[MORGUL.0].name, "of Morgul");
        assert_eq!(egos[ELVENKIND.0].name, "of Elvenkind");
        assert_eq!(egos[DWARVEN.0].name, "(Dwarven)");
        assert_eq!(egos[PLENTY.0].name, "of Plenty");
    }

    #[test]
    fn test_forbids_are_symmetric() {
        let egos = egos();
        for (i, ego) in egos.iter().enumerate() {
            for other in &ego.forbid {
                assert!(
                    egos[other.0].forbid.contains(&EgoId(i)),
                    "{} forbids {} one way only",
                    ego.name,
                    egos[other.0].name
                );
            }
        }
    }
}
