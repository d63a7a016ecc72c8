//! delve-data: standard static item data for the delve generator
//!
//! Contains kind, ego, artifact and fault definitions plus the coin list.
//! Indices are exported as constants so callers and tests can name entries.

pub mod artifacts;
pub mod egos;
pub mod faults;
pub mod kinds;

use delve_core::object::{DataFile, GameData};
use delve_core::world::DataError;

pub use artifacts::{NUM_ARTIFACTS, artifacts};
pub use egos::{NUM_EGOS, egos};
pub use faults::faults;
pub use kinds::{NUM_KINDS, kinds};

/// Coin kinds, cheapest first
pub const COINS: [delve_core::object::KindId; 5] = [
    kinds::COPPER,
    kinds::SILVER,
    kinds::GOLD,
    kinds::MITHRIL_COINS,
    kinds::ADAMANTITE,
];

/// The standard data set in its raw serialisable form
pub fn standard_file() -> DataFile {
    DataFile {
        kinds: kinds(),
        egos: egos(),
        artifacts: artifacts(),
        faults: faults(),
        coins: COINS.to_vec(),
    }
}

/// The standard data set, validated
pub fn standard_data() -> Result<GameData, DataError> {
    GameData::new(standard_file())
}
