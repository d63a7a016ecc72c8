//! Generated item instances

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use super::artifact::ArtifactId;
use super::ego::{EgoId, MAX_EGOS};
use super::fault::{FaultId, ItemFault};
use super::flags::{ChestTraps, Element, Modifier, ObjFlags, RES_LEVEL_IMMUNE, ResistTable};
use super::kind::KindId;
use super::tval::Tval;

/// Category-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Payload {
    #[default]
    Plain,
    /// A pile of money; the amount is in `pval`
    Cash,
    /// A chest and its trap set (empty when untrapped)
    Chest(ChestTraps),
}

/// A fully generated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub kind: KindId,
    pub tval: Tval,
    pub sval: u16,
    /// Depth the item was generated at
    pub origin_depth: i32,

    pub number: i32,
    pub weight: i32,

    pub ac: i32,
    pub dd: i32,
    pub ds: i32,
    pub to_h: i32,
    pub to_d: i32,
    pub to_a: i32,

    /// Charges, fuel, nourishment or cash depending on category
    pub pval: i32,
    pub modifiers: [i32; Modifier::COUNT],
    pub resists: ResistTable,
    pub flags: ObjFlags,
    pub slays: Vec<String>,
    pub brands: Vec<String>,
    pub faults: Vec<ItemFault>,

    egos: Vec<EgoId>,
    artifact: Option<ArtifactId>,

    pub payload: Payload,
    /// Estimated worth of the whole stack
    pub value: i64,
}

impl GeneratedItem {
    /// A blank single item of the given kind
    pub fn new(kind: KindId, tval: Tval, sval: u16) -> Self {
        Self {
            kind,
            tval,
            sval,
            origin_depth: 0,
            number: 1,
            weight: 0,
            ac: 0,
            dd: 0,
            ds: 0,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            pval: 0,
            modifiers: [0; Modifier::COUNT],
            resists: [0; Element::COUNT],
            flags: ObjFlags::empty(),
            slays: Vec::new(),
            brands: Vec::new(),
            faults: Vec::new(),
            egos: Vec::new(),
            artifact: None,
            payload: Payload::Plain,
            value: 0,
        }
    }

    pub fn egos(&self) -> &[EgoId] {
        &self.egos
    }

    pub fn artifact(&self) -> Option<ArtifactId> {
        self.artifact
    }

    pub fn is_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn is_ego(&self) -> bool {
        !self.egos.is_empty()
    }

    pub fn has_ego(&self, ego: EgoId) -> bool {
        self.egos.contains(&ego)
    }

    /// Attach an ego. Fails when the item is an artifact, already carries
    /// the ego, or has no free ego slot.
    pub fn attach_ego(&mut self, ego: EgoId) -> bool {
        if self.artifact.is_some() || self.egos.len() >= MAX_EGOS || self.has_ego(ego) {
            return false;
        }
        self.egos.push(ego);
        true
    }

    /// Attach an artifact. Fails when any ego is already attached.
    pub fn attach_artifact(&mut self, artifact: ArtifactId) -> bool {
        if !self.egos.is_empty() || self.artifact.is_some() {
            return false;
        }
        self.artifact = Some(artifact);
        true
    }

    pub fn has_fault(&self, fault: FaultId) -> bool {
        self.faults.iter().any(|f| f.fault == fault)
    }

    /// Add a fault, keeping the stronger power if it is already present.
    /// Returns true when a new fault was added.
    pub fn add_fault(&mut self, fault: FaultId, power: i32) -> bool {
        if let Some(existing) = self.faults.iter_mut().find(|f| f.fault == fault) {
            existing.power = existing.power.max(power);
            return false;
        }
        self.faults.push(ItemFault { fault, power });
        true
    }

    pub fn is_faulty(&self) -> bool {
        !self.faults.is_empty()
    }

    /// Resist level for one element
    pub fn resist(&self, element: Element) -> i8 {
        self.resists[element.index()]
    }

    /// Set a resist level, clamped to the immunity ceiling
    pub fn set_resist(&mut self, element: Element, level: i8) {
        self.resists[element.index()] = level.min(RES_LEVEL_IMMUNE);
    }

    pub fn modifier(&self, modifier: Modifier) -> i32 {
        self.modifiers[modifier.index()]
    }

    pub fn is_cash(&self) -> bool {
        matches!(self.payload, Payload::Cash)
    }

    pub fn chest_traps(&self) -> Option<ChestTraps> {
        match self.payload {
            Payload::Chest(traps) => Some(traps),
            _ => None,
        }
    }
}

/// Add names not already in `dest`
pub(crate) fn merge_names(dest: &mut Vec<String>, src: &[String]) {
    for name in src {
        if !dest.contains(name) {
            dest.push(name.clone());
        }
    }
}
