//! Per-run player state consulted by the generator

use serde::{Deserialize, Serialize};

/// Options and position of the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Current dungeon depth
    pub depth: i32,
    /// Birth option: never generate artifacts
    pub no_artifacts: bool,
    /// Player trait doubling cash piles
    pub greedy: bool,
}

impl RunState {
    pub fn at_depth(depth: i32) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }
}
