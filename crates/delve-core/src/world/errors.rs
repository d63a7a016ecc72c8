//! Setup-time errors
//!
//! Generation itself never fails with an error: an empty distribution is
//! reported as `None`. These errors cover loading and validating static data
//! and configuration before any table is built.

use thiserror::Error;

/// Static data that cannot be used to build generation tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("kind '{kind}' has an inverted allocation range {min}..{max}")]
    InvalidAllocation { kind: String, min: i32, max: i32 },

    #[error("ego '{ego}' refers to unknown kind index {index}")]
    UnknownKind { ego: String, index: usize },

    #[error("ego '{ego}' forbids unknown ego index {index}")]
    UnknownEgo { ego: String, index: usize },

    #[error("'{owner}' grants unknown fault index {index}")]
    UnknownFault { owner: String, index: usize },

    #[error("artifact '{artifact}' refers to unknown kind index {index}")]
    UnknownArtifactKind { artifact: String, index: usize },

    #[error("artifact '{artifact}' is a {expected} but its base kind is a {found}")]
    ArtifactTvalMismatch {
        artifact: String,
        expected: String,
        found: String,
    },

    #[error("coin list entry {index} is not a gold kind")]
    InvalidCoin { index: usize },

    #[error("no coin kinds defined")]
    NoCoins,

    #[error("could not parse data file: {0}")]
    Parse(String),
}

/// Invalid generation configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("could not parse configuration: {0}")]
    Parse(String),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
