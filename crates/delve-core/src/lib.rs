//! delve-core: procedural item generation
//!
//! Decides which item comes into existence for a depth and a set of quality
//! constraints (ordinary kind, ego, ego pair or artifact) and enchants it.
//! The crate does no I/O; all randomness flows through one [`GameRng`] and
//! all long-lived state lives in a [`GenerationContext`].

pub mod alloc;
pub mod context;
pub mod make;
pub mod object;
pub mod rng;
pub mod select;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

pub use context::GenerationContext;
pub use make::{ObjectRequest, find_kind_by_name, make_artifact, make_gold, make_object, make_object_named};
pub use object::{GameData, GeneratedItem};
pub use rng::GameRng;
pub use world::{ConfigError, DataError, GenConfig, RunState};
