//! Errors raised while building a gumball machine.

use crate::config::{ConfigError, ConfigViolation};
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Inventory not specified. Call .inventory(count) before .build()")]
    MissingInventory,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BuildError {
    /// Configuration rules the build broke, if that is why it failed.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            BuildError::Config(ConfigError::Invalid(violations)) => violations,
            _ => &[],
        }
    }
}
