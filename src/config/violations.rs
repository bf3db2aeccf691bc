//! Configuration errors.

use thiserror::Error;

/// A single rule a [`MachineConfig`](super::MachineConfig) broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("History limit must be at least 1 when set")]
    ZeroHistoryLimit,
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration is invalid: {}", render(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
