//! Item kinds (static templates)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

use super::flags::{Element, KindFlags, Modifier, ObjFlags, ResistTable};
use super::random_value::RandomValue;
use super::tval::Tval;

/// Index into the kind array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KindId(pub usize);

/// Seasons gating seasonal kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Native depth range and rarity weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Relative rarity weight (0 = never allocated)
    pub prob: u32,
    /// Shallowest native depth
    pub min: i32,
    /// Deepest native depth
    pub max: i32,
}

impl Allocation {
    pub const NONE: Self = Self {
        prob: 0,
        min: 0,
        max: 0,
    };

    pub const fn new(prob: u32, min: i32, max: i32) -> Self {
        Self { prob, min, max }
    }
}

/// Static definition of one concrete item type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemKind {
    pub name: String,
    pub tval: Tval,
    pub sval: u16,
    /// Native level; items found shallower gain an out-of-depth value bonus
    pub level: i32,
    pub cost: i32,
    pub weight: i32,

    pub ac: i32,
    pub dd: i32,
    pub ds: i32,
    #[serde(default)]
    pub to_h: RandomValue,
    #[serde(default)]
    pub to_d: RandomValue,
    #[serde(default)]
    pub to_a: RandomValue,

    /// Food, potions, flasks and launchers
    #[serde(default)]
    pub pval: RandomValue,
    /// Wands and staves
    #[serde(default)]
    pub charges: RandomValue,
    #[serde(default)]
    pub modifiers: [RandomValue; Modifier::COUNT],
    #[serde(default)]
    pub resists: ResistTable,

    #[serde(default)]
    pub flags: ObjFlags,
    #[serde(default)]
    pub kind_flags: KindFlags,
    #[serde(default)]
    pub slays: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,

    pub alloc: Allocation,
    /// Percent chance of generating a stack
    #[serde(default)]
    pub gen_mult_prob: u32,
    #[serde(default)]
    pub stack_size: RandomValue,
    #[serde(default = "default_max_stack")]
    pub max_stack: i32,

    /// Only generated while the run is in this season
    #[serde(default)]
    pub season: Option<Season>,
}

fn default_max_stack() -> i32 {
    40
}

impl ItemKind {
    /// A blank kind of the given category, for builders and tests
    pub fn new(name: impl Into<String>, tval: Tval, sval: u16) -> Self {
        Self {
            name: name.into(),
            tval,
            sval,
            level: 0,
            cost: 0,
            weight: 0,
            ac: 0,
            dd: 0,
            ds: 0,
            to_h: RandomValue::ZERO,
            to_d: RandomValue::ZERO,
            to_a: RandomValue::ZERO,
            pval: RandomValue::ZERO,
            charges: RandomValue::ZERO,
            modifiers: [RandomValue::ZERO; Modifier::COUNT],
            resists: [0; Element::COUNT],
            flags: ObjFlags::empty(),
            kind_flags: KindFlags::empty(),
            slays: Vec::new(),
            brands: Vec::new(),
            alloc: Allocation::NONE,
            gen_mult_prob: 0,
            stack_size: RandomValue::fixed(1),
            max_stack: default_max_stack(),
            season: None,
        }
    }

    pub fn with_alloc(mut self, prob: u32, min: i32, max: i32) -> Self {
        self.alloc = Allocation::new(prob, min, max);
        self
    }

    pub fn with_level(mut self, level: i32, cost: i32) -> Self {
        self.level = level;
        self.cost = cost;
        self
    }

    pub fn with_kind_flags(mut self, flags: KindFlags) -> Self {
        self.kind_flags |= flags;
        self
    }

    /// Never produced by the allocation tables or selectors
    pub fn is_quest_or_unique(&self) -> bool {
        self.kind_flags
            .intersects(KindFlags::QUEST | KindFlags::INSTA_ART)
    }

    /// Whether a seasonal kind is available in `season`
    pub fn in_season(&self, season: Season) -> bool {
        self.season.is_none_or(|s| s == season)
    }
}
