//! Artifact definitions and per-run creation state

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use super::ego::FaultGrant;
use super::flags::{Element, Modifier, ObjFlags, ResistTable};
use super::kind::{Allocation, KindId};
use super::tval::Tval;

/// Index into the artifact array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactId(pub usize);

/// Static definition of a unique item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Empty for placeholder entries
    pub name: String,
    /// Base kind; `None` when the data file named a kind that does not exist
    pub kind: Option<KindId>,
    pub tval: Tval,
    pub alloc: Allocation,
    /// Reserved for quests, never randomly generated
    #[serde(default)]
    pub quest: bool,

    pub ac: i32,
    pub dd: i32,
    pub ds: i32,
    #[serde(default)]
    pub to_h: i32,
    #[serde(default)]
    pub to_d: i32,
    #[serde(default)]
    pub to_a: i32,
    pub weight: i32,
    pub cost: i32,

    #[serde(default)]
    pub modifiers: [i32; Modifier::COUNT],
    #[serde(default)]
    pub flags: ObjFlags,
    #[serde(default)]
    pub resists: ResistTable,
    #[serde(default)]
    pub slays: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub faults: Vec<FaultGrant>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, kind: KindId, tval: Tval) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
            tval,
            alloc: Allocation::NONE,
            quest: false,
            ac: 0,
            dd: 0,
            ds: 0,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            weight: 0,
            cost: 0,
            modifiers: [0; Modifier::COUNT],
            flags: ObjFlags::empty(),
            resists: [0; Element::COUNT],
            slays: Vec::new(),
            brands: Vec::new(),
            faults: Vec::new(),
        }
    }

    pub fn with_alloc(mut self, prob: u32, min: i32, max: i32) -> Self {
        self.alloc = Allocation::new(prob, min, max);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }
}

/// Per-run "already created" flags, parallel to the artifact array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactUpkeep {
    created: Vec<bool>,
}

impl ArtifactUpkeep {
    pub fn new(count: usize) -> Self {
        Self {
            created: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    pub fn is_created(&self, id: ArtifactId) -> bool {
        self.created[id.0]
    }

    /// Record that the artifact now exists. Creating it twice is a bug.
    pub fn mark_created(&mut self, id: ArtifactId) {
        assert!(
            !self.created[id.0],
            "artifact {} selected after it was already created",
            id.0
        );
        self.created[id.0] = true;
    }

    /// Administrative reset of a single artifact
    pub fn uncreate(&mut self, id: ArtifactId) {
        self.created[id.0] = false;
    }

    /// Forget every artifact (new character)
    pub fn reset(&mut self) {
        self.created.iter_mut().for_each(|c| *c = false);
    }

    /// Resize after the artifact list changed, keeping existing flags
    pub fn resize(&mut self, count: usize) {
        self.created.resize(count, false);
    }

    pub fn created_count(&self) -> usize {
        self.created.iter().filter(|c| **c).count()
    }
}
