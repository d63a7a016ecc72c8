//! Run state, configuration and setup errors

mod config;
mod errors;
mod run;

pub use config::GenConfig;
pub use errors::{ConfigError, DataError};
pub use run::RunState;
