//! Artifact, ego and multi-ego selectors
//!
//! Selectors only read the context and draw from the RNG. They return
//! `None` when nothing is eligible; marking artifacts created is left to
//! the assembler.

mod artifact;
mod ego;
mod multi_ego;

pub use artifact::{
    artifact_probabilities, eligible_relaxed, eligible_strict, select_artifact,
    select_artifact_for_kind,
};
pub use ego::{
    ego_probabilities, ego_probabilities_for_kind, ego_set_applies, select_ego,
    select_ego_for_kind, select_kind_for_ego,
};
pub use multi_ego::{MultiEgoEntry, MultiEgoTable, combined_window, select_kind_for_ego_set};
