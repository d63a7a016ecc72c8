//! Ego item templates

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use super::fault::FaultId;
use super::flags::{Element, KindFlags, Modifier, ObjFlags, ResistTable};
use super::kind::{Allocation, KindId};
use super::random_value::RandomValue;

/// Index into the ego array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EgoId(pub usize);

/// Most egos a single item may carry
pub const MAX_EGOS: usize = 2;

/// A kind an ego may attach to, with its relative weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleItem {
    pub kind: KindId,
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_scale() -> u32 {
    100
}

fn default_weight_pct() -> i32 {
    100
}

/// A fault an ego or artifact always carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultGrant {
    pub fault: FaultId,
    pub power: i32,
}

/// Static definition of one ego enchantment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ego {
    pub name: String,
    pub cost: i32,
    pub alloc: Allocation,
    pub possible: Vec<PossibleItem>,

    #[serde(default)]
    pub to_h: RandomValue,
    #[serde(default)]
    pub to_d: RandomValue,
    #[serde(default)]
    pub to_a: RandomValue,
    #[serde(default)]
    pub modifiers: [RandomValue; Modifier::COUNT],

    #[serde(default)]
    pub min_to_h: Option<i32>,
    #[serde(default)]
    pub min_to_d: Option<i32>,
    #[serde(default)]
    pub min_to_a: Option<i32>,
    #[serde(default)]
    pub min_modifiers: [Option<i32>; Modifier::COUNT],

    /// Weight multiplier in percent
    #[serde(default = "default_weight_pct")]
    pub weight_pct: i32,
    /// Combined with the base pval (see `KindFlags::PVAL_PERCENT`)
    #[serde(default)]
    pub pval: RandomValue,

    #[serde(default)]
    pub flags: ObjFlags,
    #[serde(default)]
    pub flags_off: ObjFlags,
    /// Only the `RAND_*` bits are meaningful on egos
    #[serde(default)]
    pub gen_flags: KindFlags,
    #[serde(default)]
    pub resists: ResistTable,
    #[serde(default)]
    pub slays: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub faults: Vec<FaultGrant>,

    /// Egos this one may never be combined with
    #[serde(default)]
    pub forbid: Vec<EgoId>,
}

impl Ego {
    pub fn new(name: impl Into<String>, cost: i32) -> Self {
        Self {
            name: name.into(),
            cost,
            alloc: Allocation::NONE,
            possible: Vec::new(),
            to_h: RandomValue::ZERO,
            to_d: RandomValue::ZERO,
            to_a: RandomValue::ZERO,
            modifiers: [RandomValue::ZERO; Modifier::COUNT],
            min_to_h: None,
            min_to_d: None,
            min_to_a: None,
            min_modifiers: [None; Modifier::COUNT],
            weight_pct: default_weight_pct(),
            pval: RandomValue::ZERO,
            flags: ObjFlags::empty(),
            flags_off: ObjFlags::empty(),
            gen_flags: KindFlags::empty(),
            resists: [0; Element::COUNT],
            slays: Vec::new(),
            brands: Vec::new(),
            faults: Vec::new(),
            forbid: Vec::new(),
        }
    }

    pub fn with_alloc(mut self, prob: u32, min: i32, max: i32) -> Self {
        self.alloc = Allocation::new(prob, min, max);
        self
    }

    /// Attach to each kind with the default scale
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = KindId>) -> Self {
        self.possible.extend(kinds.into_iter().map(|kind| PossibleItem {
            kind,
            scale: default_scale(),
        }));
        self
    }

    pub fn with_possible(mut self, kind: KindId, scale: u32) -> Self {
        self.possible.push(PossibleItem { kind, scale });
        self
    }

    pub fn forbidding(mut self, other: EgoId) -> Self {
        self.forbid.push(other);
        self
    }

    /// Whether this ego may attach to `kind`
    pub fn applies_to(&self, kind: KindId) -> bool {
        self.possible.iter().any(|p| p.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_to() {
        let ego = Ego::new("of Slay Evil", 500)
            .with_kinds([KindId(1), KindId(2)])
            .with_possible(KindId(5), 20);
        assert!(ego.applies_to(KindId(2)));
        assert!(ego.applies_to(KindId(5)));
        assert!(!ego.applies_to(KindId(3)));
        assert_eq!(ego.possible[0].scale, 100);
    }

    #[test]
    fn test_ego_json_defaults() {
        let json = r#"{
            "name": "of Resist Fire", "cost": 300,
            "alloc": { "prob": 20, "min": 5, "max": 60 },
            "possible": [ { "kind": 3 } ]
        }"#;
        let ego: Ego = serde_json::from_str(json).unwrap();
        assert_eq!(ego.weight_pct, 100);
        assert_eq!(ego.possible[0].scale, 100);
        assert!(ego.min_to_h.is_none());
        assert!(ego.forbid.is_empty());
    }
}
