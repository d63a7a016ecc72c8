//! Artifact definitions
//!
//! Entry 0 is an unnamed placeholder and is never generated.

use delve_core::object::{
    Artifact, ArtifactId, Element, FaultGrant, Modifier, ObjFlags, RES_LEVEL_BASE, Tval,
};

use crate::faults;
use crate::kinds::*;

pub const PLACEHOLDER: ArtifactId = ArtifactId(0);
pub const GALADRIEL: ArtifactId = ArtifactId(1);
pub const RINGIL: ArtifactId = ArtifactId(2);
pub const ANDURIL: ArtifactId = ArtifactId(3);
pub const STING: ArtifactId = ArtifactId(4);
pub const GROND: ArtifactId = ArtifactId(5);
pub const BELTHRONDING: ArtifactId = ArtifactId(6);
pub const THALKETTOTH: ArtifactId = ArtifactId(7);
pub const COLLUIN: ArtifactId = ArtifactId(8);
pub const CAMMITHRIM: ArtifactId = ArtifactId(9);
pub const THENGEL: ArtifactId = ArtifactId(10);
pub const NARYA: ArtifactId = ArtifactId(11);
pub const NENYA: ArtifactId = ArtifactId(12);
pub const VILYA: ArtifactId = ArtifactId(13);
pub const RAZORBACK: ArtifactId = ArtifactId(14);
pub const MORGOTH: ArtifactId = ArtifactId(15);

pub const NUM_ARTIFACTS: usize = 16;

fn resist_all(art: &mut Artifact, elements: &[Element]) {
    for element in elements {
        art.resists[element.index()] = RES_LEVEL_BASE;
    }
}

/// Every artifact, in index order
pub fn artifacts() -> Vec<Artifact> {
    let mut arts = Vec::with_capacity(NUM_ARTIFACTS);

    arts.push(Artifact::new("", DAGGER, Tval::Sword));

    let mut galadriel = Artifact::new("of Galadriel", PHIAL, Tval::Light).with_alloc(50, 5, 30);
    galadriel.modifiers[Modifier::Light.index()] = 3;
    galadriel.flags = ObjFlags::NO_FUEL;
    galadriel.cost = 10_000;
    galadriel.weight = 10;
    resist_all(&mut galadriel, &[Element::Light]);
    arts.push(galadriel);

    // Weapons
    let mut ringil = Artifact::new("'Ringil'", LONG_SWORD, Tval::Sword).with_alloc(10, 20, 40);
    (ringil.dd, ringil.ds, ringil.weight) = (4, 5, 130);
    (ringil.to_h, ringil.to_d) = (22, 25);
    ringil.modifiers[Modifier::Speed.index()] = 10;
    ringil.flags = ObjFlags::SEE_INVIS | ObjFlags::FREE_ACT | ObjFlags::REGEN | ObjFlags::SLOW_DIGEST;
    ringil.slays = vec!["evil".into(), "undead".into(), "demon".into()];
    ringil.brands = vec!["cold".into()];
    ringil.cost = 300_000;
    resist_all(&mut ringil, &[Element::Cold, Element::Light]);
    arts.push(ringil);

    let mut anduril = Artifact::new("'Anduril'", LONG_SWORD, Tval::Sword).with_alloc(10, 20, 60);
    (anduril.dd, anduril.ds, anduril.weight) = (3, 5, 130);
    (anduril.to_h, anduril.to_d, anduril.to_a) = (10, 15, 10);
    anduril.modifiers[Modifier::Str.index()] = 4;
    anduril.modifiers[Modifier::Dex.index()] = 4;
    anduril.flags = ObjFlags::SEE_INVIS | ObjFlags::FREE_ACT | ObjFlags::SUST_DEX;
    anduril.slays = vec!["evil".into(), "troll".into(), "orc".into()];
    anduril.brands = vec!["fire".into()];
    anduril.cost = 80_000;
    resist_all(&mut anduril, &[Element::Fire, Element::Dark]);
    arts.push(anduril);

    let mut sting = Artifact::new("'Sting'", DAGGER, Tval::Sword).with_alloc(15, 5, 40);
    (sting.dd, sting.ds, sting.weight) = (1, 6, 12);
    (sting.to_h, sting.to_d) = (7, 8);
    sting.modifiers[Modifier::Blows.index()] = 1;
    sting.modifiers[Modifier::Light.index()] = 1;
    sting.flags = ObjFlags::SEE_INVIS | ObjFlags::FREE_ACT | ObjFlags::SLOW_DIGEST;
    sting.slays = vec!["orc".into(), "spider".into()];
    sting.cost = 100_000;
    resist_all(&mut sting, &[Element::Light]);
    arts.push(sting);

    let mut grond = Artifact::new("'Grond'", WAR_HAMMER, Tval::Hafted).with_alloc(5, 50, 127);
    (grond.dd, grond.ds, grond.weight) = (9, 9, 1000);
    (grond.to_h, grond.to_d) = (5, 25);
    grond.flags = ObjFlags::IMPACT | ObjFlags::AGGRAVATE;
    grond.slays = vec!["animal".into(), "dragon".into(), "demon".into()];
    grond.cost = 500_000;
    grond.faults = vec![FaultGrant {
        fault: faults::VULNERABILITY,
        power: 30,
    }];
    arts.push(grond);

    let mut belthronding = Artifact::new("'Belthronding'", LONG_BOW, Tval::Bow).with_alloc(20, 10, 60);
    (belthronding.to_h, belthronding.to_d) = (20, 22);
    belthronding.modifiers[Modifier::Dex.index()] = 3;
    belthronding.modifiers[Modifier::Shots.index()] = 1;
    belthronding.cost = 35_000;
    arts.push(belthronding);

    // Armour
    let mut thalkettoth =
        Artifact::new("'Thalkettoth'", HARD_LEATHER, Tval::SoftArmour).with_alloc(20, 10, 50);
    (thalkettoth.ac, thalkettoth.to_a, thalkettoth.weight) = (16, 25, 80);
    thalkettoth.modifiers[Modifier::Dex.index()] = 3;
    thalkettoth.cost = 25_000;
    resist_all(&mut thalkettoth, &[Element::Acid, Element::Shards]);
    arts.push(thalkettoth);

    let mut colluin = Artifact::new("'Colluin'", CLOAK, Tval::Cloak).with_alloc(20, 10, 60);
    (colluin.ac, colluin.to_a, colluin.weight) = (1, 15, 10);
    colluin.cost = 10_000;
    resist_all(&mut colluin, &[Element::Acid, Element::Elec, Element::Fire, Element::Cold, Element::Poison]);
    arts.push(colluin);

    let mut cammithrim = Artifact::new("'Cammithrim'", LEATHER_GLOVES, Tval::Gloves).with_alloc(20, 5, 40);
    (cammithrim.ac, cammithrim.to_a, cammithrim.weight) = (1, 10, 10);
    cammithrim.modifiers[Modifier::Light.index()] = 1;
    cammithrim.flags = ObjFlags::FREE_ACT | ObjFlags::SUST_CON;
    cammithrim.cost = 2_000;
    resist_all(&mut cammithrim, &[Element::Light]);
    arts.push(cammithrim);

    let mut thengel = Artifact::new("of Thengel", METAL_CAP, Tval::Helm).with_alloc(20, 10, 50);
    (thengel.ac, thengel.to_a, thengel.weight) = (3, 12, 20);
    thengel.modifiers[Modifier::Wis.index()] = 3;
    thengel.flags = ObjFlags::PROT_CONF;
    thengel.cost = 8_000;
    arts.push(thengel);

    // Rings of power
    let mut narya = Artifact::new("of Power 'Narya'", RING_OF_POWER, Tval::Ring).with_alloc(5, 30, 90);
    narya.modifiers[Modifier::Str.index()] = 2;
    narya.modifiers[Modifier::Speed.index()] = 1;
    narya.flags = ObjFlags::FREE_ACT | ObjFlags::SEE_INVIS | ObjFlags::REGEN;
    narya.cost = 100_000;
    resist_all(&mut narya, &[Element::Fire, Element::Dark]);
    arts.push(narya);

    let mut nenya = Artifact::new("of Power 'Nenya'", RING_OF_POWER, Tval::Ring).with_alloc(5, 40, 100);
    nenya.modifiers[Modifier::Int.index()] = 3;
    nenya.modifiers[Modifier::Speed.index()] = 2;
    nenya.flags = ObjFlags::SEE_INVIS | ObjFlags::SUST_INT;
    nenya.cost = 200_000;
    resist_all(&mut nenya, &[Element::Cold, Element::Light]);
    arts.push(nenya);

    let mut vilya = Artifact::new("of Power 'Vilya'", RING_OF_POWER, Tval::Ring).with_alloc(5, 50, 110);
    vilya.modifiers[Modifier::Wis.index()] = 4;
    vilya.modifiers[Modifier::Speed.index()] = 3;
    vilya.flags = ObjFlags::SEE_INVIS | ObjFlags::SUST_WIS | ObjFlags::HOLD_LIFE;
    vilya.cost = 300_000;
    resist_all(&mut vilya, &[Element::Elec, Element::Poison, Element::Dark]);
    arts.push(vilya);

    let mut razorback =
        Artifact::new("'Razorback'", DRAGON_MAIL, Tval::DragonArmour).with_alloc(5, 40, 100);
    (razorback.ac, razorback.to_a, razorback.weight) = (30, 25, 200);
    razorback.flags = ObjFlags::FREE_ACT | ObjFlags::AGGRAVATE;
    razorback.cost = 400_000;
    resist_all(&mut razorback, &[Element::Acid, Element::Elec, Element::Fire, Element::Poison, Element::Light, Element::Dark]);
    arts.push(razorback);

    let mut morgoth = Artifact::new("of Morgoth", MASSIVE_IRON_CROWN, Tval::Crown).with_alloc(1, 100, 127);
    morgoth.quest = true;
    (morgoth.ac, morgoth.to_a) = (0, 50);
    morgoth.cost = 10_000_000;
    arts.push(morgoth);

    arts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_names() {
        let arts = artifacts();
        assert_eq!(arts.len(), NUM_ARTIFACTS);
        assert!(arts[PLACEHOLDER.0].is_placeholder());
        assert_eq!(arts[RINGIL.0].name, "'Ringil'");
        assert_eq!(arts[BELTHRONDING.0].tval, Tval::Bow);
        assert_eq!(arts[VILYA.0].name, "of Power 'Vilya'");
        assert!(arts[MORGOTH.0].quest);
    }
}
