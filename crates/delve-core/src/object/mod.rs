//! Object system
//!
//! Static templates (kinds, egos, artifacts, faults) and generated instances.

mod artifact;
mod data;
mod ego;
mod fault;
mod flags;
mod item;
mod kind;
mod random_value;
mod tval;

pub use artifact::{Artifact, ArtifactId, ArtifactUpkeep};
pub use data::{DataFile, GameData};
pub use ego::{Ego, EgoId, FaultGrant, MAX_EGOS, PossibleItem};
pub use fault::{Fault, FaultId, ItemFault};
pub use flags::{
    ChestTraps, Element, KindFlags, Modifier, ObjFlags, RES_LEVEL_BASE, RES_LEVEL_IMMUNE,
    RES_LEVEL_VULNERABLE, ResistTable,
};
pub use item::{GeneratedItem, Payload};
pub(crate) use item::merge_names;
pub use kind::{Allocation, ItemKind, KindId, Season};
pub use random_value::{Aspect, RandomValue};
pub use tval::Tval;
