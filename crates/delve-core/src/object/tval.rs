//! Item categories (tval)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// Coarse item category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Tval {
    Chest = 0,
    Shot = 1,
    Arrow = 2,
    Bolt = 3,
    Bow = 4,
    Digger = 5,
    Hafted = 6,
    Polearm = 7,
    Sword = 8,
    Boots = 9,
    Gloves = 10,
    Helm = 11,
    Crown = 12,
    Shield = 13,
    Cloak = 14,
    SoftArmour = 15,
    HardArmour = 16,
    DragonArmour = 17,
    Light = 18,
    Amulet = 19,
    Ring = 20,
    Staff = 21,
    Wand = 22,
    Rod = 23,
    Scroll = 24,
    Potion = 25,
    Flask = 26,
    Food = 27,
    Mushroom = 28,
    MagicBook = 29,
    PrayerBook = 30,
    Gold = 31,
}

impl Tval {
    /// Dense index for per-category tables
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_melee_weapon(self) -> bool {
        matches!(
            self,
            Tval::Digger | Tval::Hafted | Tval::Polearm | Tval::Sword
        )
    }

    pub const fn is_ammo(self) -> bool {
        matches!(self, Tval::Shot | Tval::Arrow | Tval::Bolt)
    }

    pub const fn is_launcher(self) -> bool {
        matches!(self, Tval::Bow)
    }

    /// Melee weapons, launchers and ammunition
    pub const fn is_weapon(self) -> bool {
        self.is_melee_weapon() || self.is_ammo() || self.is_launcher()
    }

    pub const fn is_armour(self) -> bool {
        matches!(
            self,
            Tval::Boots
                | Tval::Gloves
                | Tval::Helm
                | Tval::Crown
                | Tval::Shield
                | Tval::Cloak
                | Tval::SoftArmour
                | Tval::HardArmour
                | Tval::DragonArmour
        )
    }

    pub const fn is_jewellery(self) -> bool {
        matches!(self, Tval::Ring | Tval::Amulet)
    }

    pub const fn is_light(self) -> bool {
        matches!(self, Tval::Light)
    }

    /// Wands and staves carry charges in pval
    pub const fn can_have_charges(self) -> bool {
        matches!(self, Tval::Wand | Tval::Staff)
    }

    pub const fn is_edible(self) -> bool {
        matches!(self, Tval::Food | Tval::Mushroom)
    }

    pub const fn is_fuel(self) -> bool {
        matches!(self, Tval::Flask)
    }

    /// Categories that can roll faults
    pub const fn can_have_faults(self) -> bool {
        self.is_weapon() || self.is_armour() || self.is_jewellery() || self.is_light()
    }

    /// Categories whose kind-level pval is rolled at creation
    pub const fn has_kind_pval(self) -> bool {
        self.is_edible() || self.is_fuel() || self.is_launcher() || matches!(self, Tval::Potion)
    }
}
