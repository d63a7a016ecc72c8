//! Fault definitions

use delve_core::object::{Fault, FaultId, ObjFlags, Tval};

pub const VULNERABILITY: FaultId = FaultId(0);
pub const TELEPORTATION: FaultId = FaultId(1);
pub const SIPHONING: FaultId = FaultId(2);
pub const TREACHERY: FaultId = FaultId(3);
pub const EXPERIENCE_DRAIN: FaultId = FaultId(4);

const WEAPONS: [Tval; 4] = [Tval::Sword, Tval::Hafted, Tval::Polearm, Tval::Digger];
const ARMOUR: [Tval; 9] = [
    Tval::SoftArmour,
    Tval::HardArmour,
    Tval::DragonArmour,
    Tval::Cloak,
    Tval::Shield,
    Tval::Helm,
    Tval::Crown,
    Tval::Gloves,
    Tval::Boots,
];

/// Every fault, in index order
pub fn faults() -> Vec<Fault> {
    let mut vulnerability = Fault::new("vulnerability", WEAPONS.into_iter().chain(ARMOUR));
    vulnerability.to_a = -10;
    vulnerability.flags = ObjFlags::AGGRAVATE;

    let mut teleportation = Fault::new(
        "teleportation",
        WEAPONS
            .into_iter()
            .chain([Tval::Bow, Tval::Ring, Tval::Amulet, Tval::Light]),
    );
    teleportation.flags = ObjFlags::TELEPORT;

    let mut siphoning = Fault::new("siphoning", WEAPONS.into_iter().chain([Tval::Bow]));
    siphoning.to_h = -5;
    siphoning.to_d = -5;

    let mut treachery = Fault::new("treacherous weapon", WEAPONS);
    treachery.to_h = -10;

    let mut drain = Fault::new(
        "experience drain",
        ARMOUR.into_iter().chain([Tval::Ring, Tval::Amulet, Tval::Light]),
    );
    drain.flags = ObjFlags::DRAIN_EXP;

    vec![vulnerability, teleportation, siphoning, treachery, drain]
}
