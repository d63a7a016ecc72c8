//! Object flags, elements and modifiers

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

bitflags! {
    /// Object property flags carried by kinds, egos, artifacts and items
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ObjFlags: u32 {
        // Sustains
        const SUST_STR = 0x0000_0001;
        const SUST_INT = 0x0000_0002;
        const SUST_WIS = 0x0000_0004;
        const SUST_DEX = 0x0000_0008;
        const SUST_CON = 0x0000_0010;
        // Protections
        const PROT_FEAR = 0x0000_0020;
        const PROT_BLIND = 0x0000_0040;
        const PROT_CONF = 0x0000_0080;
        const PROT_STUN = 0x0000_0100;
        // Misc powers
        const SLOW_DIGEST = 0x0000_0200;
        const FEATHER = 0x0000_0400;
        const REGEN = 0x0000_0800;
        const TELEPATHY = 0x0000_1000;
        const SEE_INVIS = 0x0000_2000;
        const FREE_ACT = 0x0000_4000;
        const HOLD_LIFE = 0x0000_8000;
        // Other properties
        const IMPACT = 0x0001_0000;
        const BLESSED = 0x0002_0000;
        const BURNS_OUT = 0x0004_0000;
        const TAKES_FUEL = 0x0008_0000;
        const NO_FUEL = 0x0010_0000;
        const THROWING = 0x0020_0000;
        const AGGRAVATE = 0x0040_0000;
        const DRAIN_EXP = 0x0080_0000;
        const TELEPORT = 0x0100_0000;

        const SUSTAINS = Self::SUST_STR.bits()
            | Self::SUST_INT.bits()
            | Self::SUST_WIS.bits()
            | Self::SUST_DEX.bits()
            | Self::SUST_CON.bits();
        const POWERS = Self::PROT_FEAR.bits()
            | Self::PROT_BLIND.bits()
            | Self::PROT_CONF.bits()
            | Self::PROT_STUN.bits()
            | Self::SLOW_DIGEST.bits()
            | Self::FEATHER.bits()
            | Self::REGEN.bits()
            | Self::TELEPATHY.bits()
            | Self::SEE_INVIS.bits()
            | Self::FREE_ACT.bits()
            | Self::HOLD_LIFE.bits();
    }
}

bitflags! {
    /// Generation flags shared by kinds and egos
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct KindFlags: u32 {
        /// Always counts as good
        const GOOD = 0x0001;
        /// Reserved for quests, never generated
        const QUEST = 0x0002;
        /// Only exists as an artifact
        const INSTA_ART = 0x0004;
        /// Generated only by special rules (never by the allocation tables)
        const SPECIAL_GEN = 0x0008;
        /// May only appear inside vaults
        const VAULT_ONLY = 0x0010;
        /// Grant a random low resistance
        const RAND_LO_RES = 0x0020;
        /// Grant a random high resistance
        const RAND_HI_RES = 0x0040;
        /// Grant a random sustain
        const RAND_SUSTAIN = 0x0080;
        /// Grant a random miscellaneous power
        const RAND_POWER = 0x0100;
        /// Ego pval scales the base pval by percent instead of taking the maximum
        const PVAL_PERCENT = 0x0200;
    }
}

bitflags! {
    /// Chest trap set, stored in the item payload
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ChestTraps: u8 {
        const LOSE_STR = 0x01;
        const LOSE_CON = 0x02;
        const POISON = 0x04;
        const PARALYZE = 0x08;
        const EXPLODE = 0x10;
        const SUMMON = 0x20;
    }
}

/// Resistance elements
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Element {
    Acid = 0,
    Elec = 1,
    Fire = 2,
    Cold = 3,
    Poison = 4,
    Light = 5,
    Dark = 6,
    Sound = 7,
    Shards = 8,
    Nexus = 9,
    Nether = 10,
    Chaos = 11,
    Disenchant = 12,
}

impl Element {
    /// The four base elements
    pub const LOW: [Element; 4] = [Element::Acid, Element::Elec, Element::Fire, Element::Cold];

    /// Everything above the base elements
    pub const HIGH: [Element; 9] = [
        Element::Poison,
        Element::Light,
        Element::Dark,
        Element::Sound,
        Element::Shards,
        Element::Nexus,
        Element::Nether,
        Element::Chaos,
        Element::Disenchant,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Resist level of a vulnerability
pub const RES_LEVEL_VULNERABLE: i8 = -1;
/// Resist level of ordinary resistance
pub const RES_LEVEL_BASE: i8 = 1;
/// Resist level ceiling
pub const RES_LEVEL_IMMUNE: i8 = 3;

/// Per-element resistance levels
pub type ResistTable = [i8; Element::COUNT];

/// Numeric item modifiers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Modifier {
    Str = 0,
    Int = 1,
    Wis = 2,
    Dex = 3,
    Con = 4,
    Stealth = 5,
    Search = 6,
    Infra = 7,
    Tunnel = 8,
    Speed = 9,
    Blows = 10,
    Shots = 11,
    Might = 12,
    Light = 13,
}

impl Modifier {
    pub const fn index(self) -> usize {
        self as usize
    }
}
