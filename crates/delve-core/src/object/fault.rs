//! Faults (item drawbacks)

use serde::{Deserialize, Serialize};

use super::flags::ObjFlags;
use super::tval::Tval;

/// Index into the fault array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaultId(pub usize);

/// Static fault definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fault {
    pub name: String,
    /// Categories this fault can afflict
    pub tvals: Vec<Tval>,
    #[serde(default)]
    pub to_h: i32,
    #[serde(default)]
    pub to_d: i32,
    #[serde(default)]
    pub to_a: i32,
    #[serde(default)]
    pub flags: ObjFlags,
}

impl Fault {
    pub fn new(name: impl Into<String>, tvals: impl IntoIterator<Item = Tval>) -> Self {
        Self {
            name: name.into(),
            tvals: tvals.into_iter().collect(),
            to_h: 0,
            to_d: 0,
            to_a: 0,
            flags: ObjFlags::empty(),
        }
    }

    pub fn can_afflict(&self, tval: Tval) -> bool {
        self.tvals.contains(&tval)
    }
}

/// A fault attached to a generated item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFault {
    pub fault: FaultId,
    pub power: i32,
}
