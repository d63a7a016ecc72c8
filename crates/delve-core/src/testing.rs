//! Small data set shared by unit tests

use crate::context::GenerationContext;
use crate::object::{
    Artifact, ArtifactId, DataFile, Ego, EgoId, Element, Fault, FaultId, GameData, ItemKind,
    KindFlags, KindId, Modifier, ObjFlags, RES_LEVEL_BASE, RandomValue, Season, Tval,
};
use crate::world::GenConfig;

pub const COPPER: KindId = KindId(0);
pub const SILVER: KindId = KindId(1);
pub const GOLD_COINS: KindId = KindId(2);
pub const DAGGER: KindId = KindId(3);
pub const LONG_SWORD: KindId = KindId(4);
pub const SHORT_BOW: KindId = KindId(5);
pub const ARROW: KindId = KindId(6);
pub const LEATHER: KindId = KindId(7);
pub const CLOAK: KindId = KindId(8);
pub const RING: KindId = KindId(9);
pub const POTION: KindId = KindId(10);
pub const WAND: KindId = KindId(11);
pub const TORCH: KindId = KindId(12);
pub const PHIAL: KindId = KindId(13);
pub const SNOWBALL: KindId = KindId(14);
pub const QUEST_SHARD: KindId = KindId(15);
pub const CROWN: KindId = KindId(16);
pub const MITHRIL: KindId = KindId(17);
pub const CHEST: KindId = KindId(18);
pub const SCALE_MAIL: KindId = KindId(19);

pub const SLAY_EVIL: EgoId = EgoId(0);
pub const DEFENDER: EgoId = EgoId(1);
pub const BURNING: EgoId = EgoId(2);
pub const RESISTANCE: EgoId = EgoId(3);
pub const STEALTH: EgoId = EgoId(4);
pub const ELVENKIND: EgoId = EgoId(5);
pub const BRIGHTNESS: EgoId = EgoId(6);

pub const PLACEHOLDER: ArtifactId = ArtifactId(0);
pub const ELENDIL: ArtifactId = ArtifactId(1);
pub const RINGIL: ArtifactId = ArtifactId(2);
pub const QUEST_CROWN: ArtifactId = ArtifactId(3);
pub const BELTHRONDING: ArtifactId = ArtifactId(4);
pub const LOST_BLADE: ArtifactId = ArtifactId(5);

fn kinds() -> Vec<ItemKind> {
    let mut kinds = vec![
        ItemKind::new("Copper", Tval::Gold, 1),
        ItemKind::new("Silver", Tval::Gold, 2),
        ItemKind::new("Gold", Tval::Gold, 3),
    ];

    let mut dagger = ItemKind::new("Dagger", Tval::Sword, 1)
        .with_alloc(40, 0, 100)
        .with_level(0, 30);
    (dagger.dd, dagger.ds, dagger.weight) = (1, 4, 12);
    kinds.push(dagger);

    let mut sword = ItemKind::new("Long Sword", Tval::Sword, 2)
        .with_alloc(30, 10, 100)
        .with_level(10, 300);
    (sword.dd, sword.ds, sword.weight) = (2, 5, 130);
    kinds.push(sword);

    let mut bow = ItemKind::new("Short Bow", Tval::Bow, 1)
        .with_alloc(30, 5, 100)
        .with_level(5, 80);
    bow.pval = RandomValue::fixed(2);
    bow.weight = 30;
    kinds.push(bow);

    let mut arrow = ItemKind::new("Arrow", Tval::Arrow, 1)
        .with_alloc(50, 5, 100)
        .with_level(5, 1);
    (arrow.dd, arrow.ds, arrow.weight) = (1, 9, 2);
    arrow.gen_mult_prob = 100;
    arrow.stack_size = RandomValue::new(5, 2, 6, 0);
    kinds.push(arrow);

    let mut leather = ItemKind::new("Soft Leather Armour", Tval::SoftArmour, 1)
        .with_alloc(40, 0, 60)
        .with_level(0, 18);
    (leather.ac, leather.weight) = (8, 80);
    kinds.push(leather);

    let mut cloak = ItemKind::new("Cloak", Tval::Cloak, 1)
        .with_alloc(40, 0, 100)
        .with_level(0, 3);
    (cloak.ac, cloak.weight) = (1, 10);
    kinds.push(cloak);

    kinds.push(
        ItemKind::new("Ring of Bodykeeping", Tval::Ring, 1)
            .with_alloc(10, 20, 100)
            .with_level(20, 1500)
            .with_kind_flags(KindFlags::RAND_SUSTAIN),
    );

    let mut potion = ItemKind::new("Potion of Cure Light Wounds", Tval::Potion, 1)
        .with_alloc(60, 0, 40)
        .with_level(0, 20);
    potion.pval = RandomValue::fixed(15);
    potion.gen_mult_prob = 30;
    potion.stack_size = RandomValue::new(1, 1, 2, 0);
    kinds.push(potion);

    let mut wand = ItemKind::new("Wand of Magic Missile", Tval::Wand, 1)
        .with_alloc(30, 3, 60)
        .with_level(3, 100);
    wand.charges = RandomValue::new(10, 1, 10, 0);
    kinds.push(wand);

    let mut torch = ItemKind::new("Wooden Torch", Tval::Light, 1)
        .with_alloc(70, 0, 40)
        .with_level(0, 1);
    torch.flags = ObjFlags::BURNS_OUT;
    kinds.push(torch);

    kinds.push(
        ItemKind::new("Phial", Tval::Light, 2)
            .with_alloc(10, 5, 100)
            .with_kind_flags(KindFlags::INSTA_ART),
    );

    let mut snowball = ItemKind::new("Snowball", Tval::Food, 1).with_alloc(40, 0, 100);
    snowball.pval = RandomValue::fixed(100);
    snowball.season = Some(Season::Winter);
    kinds.push(snowball);

    kinds.push(
        ItemKind::new("Silmaril", Tval::Amulet, 1)
            .with_alloc(10, 0, 100)
            .with_kind_flags(KindFlags::QUEST),
    );

    let mut crown = ItemKind::new("Iron Crown", Tval::Crown, 1)
        .with_alloc(20, 15, 100)
        .with_level(15, 500);
    crown.ac = 2;
    kinds.push(crown);

    let mut mithril = ItemKind::new("Mithril Chain Mail", Tval::HardArmour, 1)
        .with_alloc(10, 20, 100)
        .with_level(20, 7000)
        .with_kind_flags(KindFlags::VAULT_ONLY);
    mithril.ac = 28;
    kinds.push(mithril);

    kinds.push(
        ItemKind::new("Small Wooden Chest", Tval::Chest, 1)
            .with_alloc(20, 5, 100)
            .with_level(5, 20),
    );

    let mut scale = ItemKind::new("Metal Scale Mail", Tval::HardArmour, 2)
        .with_alloc(30, 10, 100)
        .with_level(10, 550);
    (scale.ac, scale.weight) = (38, 250);
    kinds.push(scale);

    kinds
}

fn egos() -> Vec<Ego> {
    let weapons = [DAGGER, LONG_SWORD];
    let armour = [LEATHER, CLOAK];

    let mut slay_evil = Ego::new("of Slay Evil", 500)
        .with_alloc(30, 0, 80)
        .with_kinds(weapons)
        .forbidding(DEFENDER);
    slay_evil.to_h = RandomValue::new(0, 1, 6, 0);
    slay_evil.to_d = RandomValue::new(0, 1, 6, 0);
    slay_evil.slays = vec!["evil".to_string()];
    slay_evil.flags = ObjFlags::BLESSED;

    let mut defender = Ego::new("(Defender)", 1500)
        .with_alloc(10, 10, 100)
        .with_kinds(weapons)
        .forbidding(SLAY_EVIL);
    defender.to_a = RandomValue::new(0, 1, 8, 0);
    defender.flags = ObjFlags::FEATHER | ObjFlags::FREE_ACT | ObjFlags::SEE_INVIS | ObjFlags::REGEN;
    defender.gen_flags = KindFlags::RAND_SUSTAIN;
    for element in Element::LOW {
        defender.resists[element.index()] = RES_LEVEL_BASE;
    }

    let mut burning = Ego::new("of Burning", 800)
        .with_alloc(20, 5, 80)
        .with_kinds(weapons)
        .with_possible(ARROW, 200);
    burning.brands = vec!["fire".to_string()];
    burning.resists[Element::Fire.index()] = RES_LEVEL_BASE;

    let mut resistance = Ego::new("of Resistance", 1000)
        .with_alloc(20, 5, 100)
        .with_kinds(armour)
        .with_kinds([SCALE_MAIL, MITHRIL]);
    resistance.to_a = RandomValue::new(0, 1, 10, 0);
    for element in Element::LOW {
        resistance.resists[element.index()] = RES_LEVEL_BASE;
    }

    let mut stealth = Ego::new("of Stealth", 500)
        .with_alloc(20, 0, 60)
        .with_kinds(armour);
    stealth.modifiers[Modifier::Stealth.index()] = RandomValue::new(0, 1, 3, 0);
    stealth.min_modifiers[Modifier::Stealth.index()] = Some(1);

    let mut elvenkind = Ego::new("of Elvenkind", 4000)
        .with_alloc(5, 30, 100)
        .with_kinds(armour)
        .forbidding(STEALTH);
    elvenkind.modifiers[Modifier::Stealth.index()] = RandomValue::new(0, 1, 2, 0);
    elvenkind.gen_flags = KindFlags::RAND_HI_RES;
    elvenkind.weight_pct = 80;
    elvenkind.flags_off = ObjFlags::AGGRAVATE;
    elvenkind.min_to_a = Some(5);

    let mut brightness = Ego::new("of Brightness", 100)
        .with_alloc(10, 0, 50)
        .with_kinds([TORCH]);
    brightness.modifiers[Modifier::Light.index()] = RandomValue::fixed(1);

    vec![slay_evil, defender, burning, resistance, stealth, elvenkind, brightness]
}

fn faults() -> Vec<Fault> {
    let mut vulnerability = Fault::new(
        "vulnerability",
        [Tval::Sword, Tval::Hafted, Tval::SoftArmour, Tval::HardArmour, Tval::Cloak],
    );
    vulnerability.to_a = -10;

    let mut teleportation = Fault::new("teleportation", [Tval::Sword, Tval::Ring, Tval::Light]);
    teleportation.flags = ObjFlags::TELEPORT;

    let mut siphoning = Fault::new("siphoning", [Tval::Sword, Tval::Bow]);
    siphoning.to_h = -5;

    vec![vulnerability, teleportation, siphoning]
}

fn artifacts() -> Vec<Artifact> {
    let placeholder = Artifact::new("", LONG_SWORD, Tval::Sword).with_alloc(50, 0, 100);

    let mut elendil = Artifact::new("of Elendil", PHIAL, Tval::Light).with_alloc(50, 5, 30);
    elendil.flags = ObjFlags::SEE_INVIS;
    elendil.resists[Element::Light.index()] = RES_LEVEL_BASE;
    elendil.cost = 30_000;

    let mut ringil = Artifact::new("'Ringil'", LONG_SWORD, Tval::Sword).with_alloc(10, 20, 40);
    (ringil.dd, ringil.ds, ringil.weight) = (4, 5, 130);
    (ringil.to_h, ringil.to_d) = (22, 25);
    ringil.cost = 300_000;
    ringil.flags = ObjFlags::SEE_INVIS | ObjFlags::FREE_ACT | ObjFlags::REGEN | ObjFlags::SLOW_DIGEST;
    ringil.resists[Element::Cold.index()] = RES_LEVEL_BASE;
    ringil.resists[Element::Light.index()] = RES_LEVEL_BASE;
    ringil.slays = vec!["evil".to_string(), "undead".to_string()];
    ringil.brands = vec!["cold".to_string()];

    let mut crown = Artifact::new("of Morgoth", CROWN, Tval::Crown).with_alloc(1, 100, 127);
    crown.quest = true;

    let mut belthronding = Artifact::new("'Belthronding'", SHORT_BOW, Tval::Bow).with_alloc(20, 10, 60);
    (belthronding.to_h, belthronding.to_d) = (20, 22);
    belthronding.cost = 35_000;

    let mut lost = Artifact::new("'Lost'", LONG_SWORD, Tval::Sword).with_alloc(50, 0, 100);
    lost.kind = None;

    vec![placeholder, elendil, ringil, crown, belthronding, lost]
}

pub fn data_file() -> DataFile {
    DataFile {
        kinds: kinds(),
        egos: egos(),
        artifacts: artifacts(),
        faults: faults(),
        coins: vec![COPPER, SILVER, GOLD_COINS],
    }
}

pub fn data() -> GameData {
    GameData::new(data_file()).expect("fixture data is valid")
}

pub fn context() -> GenerationContext {
    GenerationContext::new(data(), GenConfig::default()).expect("default config is valid")
}

#[test]
fn test_fixture_indices() {
    let data = data();
    assert_eq!(data.kind(LONG_SWORD).name, "Long Sword");
    assert_eq!(data.kind(CHEST).tval, Tval::Chest);
    assert_eq!(data.kind(SCALE_MAIL).tval, Tval::HardArmour);
    assert_eq!(data.ego(BRIGHTNESS).name, "of Brightness");
    assert_eq!(data.artifact(LOST_BLADE).name, "'Lost'");
    assert!(data.fault(FaultId(0)).can_afflict(Tval::Sword));
}
