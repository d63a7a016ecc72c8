//! Object kind definitions
//!
//! Indices are stable: egos, artifacts and the coin list refer to kinds by
//! the constants below, so new kinds are only ever appended.

use delve_core::object::{
    Element, ItemKind, KindFlags, KindId, Modifier, ObjFlags, RES_LEVEL_BASE, RandomValue, Season,
    Tval,
};

// ============================================================================
// Kind indices
// ============================================================================

pub const COPPER: KindId = KindId(0);
pub const SILVER: KindId = KindId(1);
pub const GOLD: KindId = KindId(2);
pub const MITHRIL_COINS: KindId = KindId(3);
pub const ADAMANTITE: KindId = KindId(4);

pub const DAGGER: KindId = KindId(5);
pub const MAIN_GAUCHE: KindId = KindId(6);
pub const RAPIER: KindId = KindId(7);
pub const LONG_SWORD: KindId = KindId(8);
pub const BLADE_OF_CHAOS: KindId = KindId(9);
pub const WHIP: KindId = KindId(10);
pub const MACE: KindId = KindId(11);
pub const WAR_HAMMER: KindId = KindId(12);
pub const SPEAR: KindId = KindId(13);
pub const GLAIVE: KindId = KindId(14);
pub const SHOVEL: KindId = KindId(15);
pub const SLING: KindId = KindId(16);
pub const SHORT_BOW: KindId = KindId(17);
pub const LONG_BOW: KindId = KindId(18);
pub const ARROW: KindId = KindId(19);
pub const IRON_SHOT: KindId = KindId(20);
pub const BOLT: KindId = KindId(21);

pub const SOFT_LEATHER: KindId = KindId(22);
pub const HARD_LEATHER: KindId = KindId(23);
pub const METAL_SCALE: KindId = KindId(24);
pub const MITHRIL_MAIL: KindId = KindId(25);
pub const CLOAK: KindId = KindId(26);
pub const LEATHER_BOOTS: KindId = KindId(27);
pub const LEATHER_GLOVES: KindId = KindId(28);
pub const METAL_CAP: KindId = KindId(29);
pub const IRON_CROWN: KindId = KindId(30);
pub const SMALL_SHIELD: KindId = KindId(31);
pub const DRAGON_MAIL: KindId = KindId(32);

pub const TORCH: KindId = KindId(33);
pub const LANTERN: KindId = KindId(34);
pub const PHIAL: KindId = KindId(35);
pub const FLASK_OF_OIL: KindId = KindId(36);

pub const RING_PROTECTION: KindId = KindId(37);
pub const RING_BODYKEEPING: KindId = KindId(38);
pub const RING_SPEED: KindId = KindId(39);
pub const RING_OF_POWER: KindId = KindId(40);
pub const AMULET_RESIST: KindId = KindId(41);

pub const WAND_MAGIC_MISSILE: KindId = KindId(42);
pub const WAND_STONE_TO_MUD: KindId = KindId(43);
pub const STAFF_DETECT_EVIL: KindId = KindId(44);
pub const ROD_TREASURE: KindId = KindId(45);

pub const POTION_CLW: KindId = KindId(46);
pub const POTION_SPEED: KindId = KindId(47);
pub const POTION_LIFE: KindId = KindId(48);
pub const SCROLL_PHASE: KindId = KindId(49);
pub const SCROLL_DEEP_DESCENT: KindId = KindId(50);
pub const SCROLL_ACQUIREMENT: KindId = KindId(51);
pub const RATION: KindId = KindId(52);
pub const SNOWBALL: KindId = KindId(53);
pub const MUSHROOM_SECOND_SIGHT: KindId = KindId(54);
pub const MAGIC_BOOK: KindId = KindId(55);

pub const SMALL_CHEST: KindId = KindId(56);
pub const LARGE_CHEST: KindId = KindId(57);
pub const MASSIVE_IRON_CROWN: KindId = KindId(58);

/// Number of kinds in the standard set
pub const NUM_KINDS: usize = 59;

// ============================================================================
// Constructors
// ============================================================================

type Alloc = (u32, i32, i32);

fn plain(name: &str, tval: Tval, sval: u16, (prob, min, max): Alloc, level: i32, cost: i32) -> ItemKind {
    ItemKind::new(name, tval, sval)
        .with_alloc(prob, min, max)
        .with_level(level, cost)
}

fn coin(name: &str, sval: u16) -> ItemKind {
    ItemKind::new(name, Tval::Gold, sval)
}

#[allow(clippy::too_many_arguments)]
fn weapon(
    name: &str,
    tval: Tval,
    sval: u16,
    alloc: Alloc,
    level: i32,
    cost: i32,
    (dd, ds): (i32, i32),
    weight: i32,
) -> ItemKind {
    let mut kind = plain(name, tval, sval, alloc, level, cost);
    kind.dd = dd;
    kind.ds = ds;
    kind.weight = weight;
    kind
}

fn launcher(name: &str, sval: u16, alloc: Alloc, level: i32, cost: i32, might: i32) -> ItemKind {
    let mut kind = plain(name, Tval::Bow, sval, alloc, level, cost);
    kind.pval = RandomValue::fixed(might);
    kind.weight = 30;
    kind
}

fn ammo(name: &str, tval: Tval, alloc: Alloc, level: i32, (dd, ds): (i32, i32)) -> ItemKind {
    let mut kind = weapon(name, tval, 1, alloc, level, 1, (dd, ds), 4);
    kind.gen_mult_prob = 100;
    kind.stack_size = RandomValue::new(5, 1, 15, 0);
    kind
}

#[allow(clippy::too_many_arguments)]
fn armour(
    name: &str,
    tval: Tval,
    sval: u16,
    alloc: Alloc,
    level: i32,
    cost: i32,
    ac: i32,
    weight: i32,
) -> ItemKind {
    let mut kind = plain(name, tval, sval, alloc, level, cost);
    kind.ac = ac;
    kind.weight = weight;
    kind
}

fn device(name: &str, tval: Tval, sval: u16, alloc: Alloc, level: i32, cost: i32, charges: RandomValue) -> ItemKind {
    let mut kind = plain(name, tval, sval, alloc, level, cost);
    kind.charges = charges;
    kind.weight = 10;
    kind
}

fn stacking(mut kind: ItemKind, prob: u32, stack: RandomValue) -> ItemKind {
    kind.gen_mult_prob = prob;
    kind.stack_size = stack;
    kind
}

// ============================================================================
// Table
// ============================================================================

/// Every kind, in index order
pub fn kinds() -> Vec<ItemKind> {
    let mut kinds = Vec::with_capacity(NUM_KINDS);

    // Money
    kinds.push(coin("Copper", 1));
    kinds.push(coin("Silver", 2));
    kinds.push(coin("Gold", 3));
    kinds.push(coin("Mithril", 4));
    kinds.push(coin("Adamantite", 5));

    // Melee weapons
    kinds.push(weapon("Dagger", Tval::Sword, 1, (40, 0, 100), 0, 10, (1, 4), 12));
    kinds.push(weapon("Main Gauche", Tval::Sword, 2, (30, 3, 100), 3, 25, (1, 5), 30));
    kinds.push(weapon("Rapier", Tval::Sword, 3, (30, 5, 100), 5, 42, (1, 6), 40));
    kinds.push(weapon("Long Sword", Tval::Sword, 4, (30, 10, 100), 10, 300, (2, 5), 130));
    let mut chaos = weapon("Blade of Chaos", Tval::Sword, 5, (10, 70, 127), 70, 4000, (6, 5), 180);
    chaos.resists[Element::Chaos.index()] = RES_LEVEL_BASE;
    kinds.push(chaos);
    kinds.push(weapon("Whip", Tval::Hafted, 1, (40, 1, 60), 1, 30, (1, 3), 30));
    kinds.push(weapon("Mace", Tval::Hafted, 2, (30, 5, 100), 5, 65, (2, 4), 120));
    kinds.push(weapon("War Hammer", Tval::Hafted, 3, (30, 10, 100), 10, 225, (3, 3), 120));
    let mut spear = weapon("Spear", Tval::Polearm, 1, (40, 5, 100), 5, 36, (1, 6), 50);
    spear.flags = ObjFlags::THROWING;
    kinds.push(spear);
    kinds.push(weapon("Glaive", Tval::Polearm, 2, (20, 20, 100), 20, 363, (2, 6), 190));
    let mut shovel = weapon("Shovel", Tval::Digger, 1, (40, 1, 60), 1, 10, (1, 2), 60);
    shovel.modifiers[Modifier::Tunnel.index()] = RandomValue::fixed(1);
    kinds.push(shovel);

    // Missile weapons
    kinds.push(launcher("Sling", 1, (40, 1, 60), 1, 5, 2));
    kinds.push(launcher("Short Bow", 2, (30, 3, 100), 3, 50, 2));
    kinds.push(launcher("Long Bow", 3, (20, 10, 100), 10, 120, 3));
    kinds.push(ammo("Arrow", Tval::Arrow, (50, 3, 100), 3, (1, 9)));
    kinds.push(ammo("Iron Shot", Tval::Shot, (40, 1, 100), 1, (1, 4)));
    kinds.push(ammo("Bolt", Tval::Bolt, (40, 10, 100), 10, (1, 10)));

    // Armour
    kinds.push(armour("Soft Leather Armour", Tval::SoftArmour, 1, (40, 0, 60), 0, 18, 8, 80));
    let mut hard_leather = armour("Hard Leather Armour", Tval::SoftArmour, 2, (30, 5, 80), 5, 150, 16, 100);
    hard_leather.to_h = RandomValue::fixed(-1);
    kinds.push(hard_leather);
    let mut scale = armour("Metal Scale Mail", Tval::HardArmour, 1, (30, 15, 100), 15, 550, 38, 250);
    scale.to_h = RandomValue::fixed(-2);
    kinds.push(scale);
    kinds.push(
        armour("Mithril Chain Mail", Tval::HardArmour, 2, (10, 30, 127), 30, 7000, 28, 150)
            .with_kind_flags(KindFlags::VAULT_ONLY),
    );
    kinds.push(armour("Cloak", Tval::Cloak, 1, (40, 0, 100), 0, 3, 1, 10));
    kinds.push(armour("Pair of Leather Boots", Tval::Boots, 1, (40, 0, 80), 0, 4, 2, 20));
    kinds.push(armour("Set of Leather Gloves", Tval::Gloves, 1, (40, 0, 80), 0, 3, 1, 10));
    kinds.push(armour("Metal Cap", Tval::Helm, 1, (30, 5, 100), 5, 30, 3, 20));
    kinds.push(armour("Iron Crown", Tval::Crown, 1, (20, 15, 127), 15, 500, 2, 20));
    kinds.push(armour("Small Metal Shield", Tval::Shield, 1, (30, 3, 100), 3, 50, 5, 65));
    let mut dragon = armour("Black Dragon Scale Mail", Tval::DragonArmour, 1, (5, 40, 127), 40, 10_000, 30, 200)
        .with_kind_flags(KindFlags::GOOD);
    dragon.resists[Element::Acid.index()] = RES_LEVEL_BASE;
    kinds.push(dragon);

    // Light sources
    let mut torch = plain("Wooden Torch", Tval::Light, 1, (70, 0, 40), 0, 1);
    torch.flags = ObjFlags::BURNS_OUT;
    torch.modifiers[Modifier::Light.index()] = RandomValue::fixed(2);
    kinds.push(stacking(torch, 30, RandomValue::new(1, 1, 3, 0)));
    let mut lantern = plain("Lantern", Tval::Light, 2, (30, 5, 100), 5, 100);
    lantern.flags = ObjFlags::TAKES_FUEL;
    lantern.modifiers[Modifier::Light.index()] = RandomValue::fixed(2);
    kinds.push(lantern);
    kinds.push(
        plain("Phial", Tval::Light, 3, (10, 5, 100), 5, 10_000).with_kind_flags(KindFlags::INSTA_ART),
    );
    let mut oil = plain("Flask of Oil", Tval::Flask, 1, (50, 1, 100), 1, 3);
    oil.pval = RandomValue::fixed(7500);
    kinds.push(stacking(oil, 50, RandomValue::new(1, 1, 5, 0)));

    // Jewellery
    let mut protection = plain("Ring of Protection", Tval::Ring, 1, (30, 10, 100), 10, 500);
    protection.to_a = RandomValue::new(5, 1, 5, 10);
    kinds.push(protection);
    kinds.push(
        plain("Ring of Bodykeeping", Tval::Ring, 2, (10, 30, 127), 30, 1500)
            .with_kind_flags(KindFlags::RAND_SUSTAIN),
    );
    let mut speed = plain("Ring of Speed", Tval::Ring, 3, (2, 75, 127), 75, 100_000)
        .with_kind_flags(KindFlags::GOOD);
    speed.modifiers[Modifier::Speed.index()] = RandomValue::new(1, 1, 4, 10);
    kinds.push(speed);
    kinds.push(
        plain("Ring of Power", Tval::Ring, 4, (5, 30, 127), 30, 50_000)
            .with_kind_flags(KindFlags::INSTA_ART),
    );
    kinds.push(
        plain("Amulet of Resist", Tval::Amulet, 1, (20, 20, 100), 20, 250)
            .with_kind_flags(KindFlags::RAND_LO_RES),
    );

    // Magic devices
    kinds.push(device("Wand of Magic Missile", Tval::Wand, 1, (40, 3, 60), 3, 100, RandomValue::new(10, 1, 10, 0)));
    kinds.push(device("Wand of Stone to Mud", Tval::Wand, 2, (30, 10, 100), 10, 300, RandomValue::new(5, 1, 8, 0)));
    kinds.push(
        device("Staff of Detect Evil", Tval::Staff, 1, (30, 5, 80), 5, 350, RandomValue::new(8, 1, 8, 0))
            .with_kind_flags(KindFlags::PVAL_PERCENT),
    );
    kinds.push(plain("Rod of Treasure Location", Tval::Rod, 1, (20, 5, 100), 5, 1000));

    // Consumables
    let mut clw = plain("Potion of Cure Light Wounds", Tval::Potion, 1, (60, 0, 40), 0, 20);
    clw.pval = RandomValue::fixed(15);
    kinds.push(stacking(clw, 30, RandomValue::new(1, 1, 2, 0)));
    kinds.push(stacking(
        plain("Potion of Speed", Tval::Potion, 2, (40, 1, 100), 1, 75),
        20,
        RandomValue::new(1, 1, 2, 0),
    ));
    kinds.push(
        plain("Potion of Life", Tval::Potion, 3, (2, 60, 127), 60, 5000).with_kind_flags(KindFlags::GOOD),
    );
    kinds.push(stacking(
        plain("Scroll of Phase Door", Tval::Scroll, 1, (60, 1, 100), 1, 15),
        30,
        RandomValue::new(1, 1, 3, 0),
    ));
    kinds.push(plain("Scroll of Deep Descent", Tval::Scroll, 2, (40, 5, 100), 5, 125));
    kinds.push(
        plain("Scroll of Acquirement", Tval::Scroll, 3, (3, 20, 127), 20, 20_000)
            .with_kind_flags(KindFlags::SPECIAL_GEN),
    );
    let mut ration = plain("Ration of Food", Tval::Food, 1, (60, 0, 100), 0, 3);
    ration.pval = RandomValue::fixed(6000);
    kinds.push(stacking(ration, 50, RandomValue::new(1, 1, 4, 0)));
    let mut snowball = plain("Snowball", Tval::Food, 2, (40, 0, 100), 0, 1);
    snowball.pval = RandomValue::fixed(100);
    snowball.season = Some(Season::Winter);
    kinds.push(stacking(snowball, 60, RandomValue::new(1, 1, 5, 0)));
    let mut mushroom = plain("Mushroom of Second Sight", Tval::Mushroom, 1, (20, 5, 60), 5, 10);
    mushroom.pval = RandomValue::fixed(500);
    kinds.push(mushroom);
    kinds.push(plain("Magic for Beginners", Tval::MagicBook, 1, (40, 1, 100), 1, 25));

    // Chests and quest items
    kinds.push(plain("Small Wooden Chest", Tval::Chest, 1, (20, 5, 100), 5, 20));
    kinds.push(plain("Large Iron Chest", Tval::Chest, 2, (20, 20, 127), 20, 300));
    kinds.push(
        armour("Massive Iron Crown", Tval::Crown, 2, (1, 100, 127), 100, 10_000, 0, 30)
            .with_kind_flags(KindFlags::QUEST),
    );

    kinds
}
