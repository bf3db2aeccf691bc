//! Machine configuration.
//!
//! Configuration is plain data: it can be written by hand, deserialized from
//! JSON, or assembled by [`GumballMachineBuilder`](crate::builder::GumballMachineBuilder).
//! Validation accumulates every violation instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use gumball::config::MachineConfig;
//!
//! let config = MachineConfig::from_json(r#"{ "inventory": 5 }"#).unwrap();
//! assert_eq!(config.inventory, 5);
//! assert_eq!(config.history_limit, Some(64));
//! ```

pub mod violations;

pub use violations::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default number of transitions kept in a machine's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Settings for a gumball machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Gumballs loaded at construction
    pub inventory: u32,

    /// Transitions kept in history; `None` keeps all of them
    pub history_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            inventory: 0,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl MachineConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check every rule, collecting all violations.
    ///
    /// Any inventory is accepted: a machine built from a config must behave
    /// exactly like one from [`GumballMachine::new`](crate::gumball::GumballMachine::new).
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            if self.history_limit == Some(0) {
                Validation::fail(ConfigViolation::ZeroHistoryLimit)
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Consume the config, returning it unchanged if valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MachineConfig::default().validate().is_success());
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let config = MachineConfig {
            inventory: 3,
            history_limit: Some(0),
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroHistoryLimit)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn any_inventory_is_allowed() {
        for inventory in [0, 1, 500, u32::MAX] {
            let config = MachineConfig {
                inventory,
                history_limit: None,
            };

            assert!(config.validate().is_success(), "inventory {inventory}");
        }
    }

    #[test]
    fn from_json_fills_defaults() {
        let config = MachineConfig::from_json(r#"{ "inventory": 7, "history_limit": null }"#)
            .unwrap();

        assert_eq!(config.inventory, 7);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let result = MachineConfig::from_json(r#"{ "inventory": 1, "flavor": "grape" }"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn from_json_rejects_capacity() {
        let result = MachineConfig::from_json(r#"{ "inventory": 1, "capacity": 10 }"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn from_json_reports_violations() {
        let result = MachineConfig::from_json(r#"{ "inventory": 500, "history_limit": 0 }"#);

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations, vec![ConfigViolation::ZeroHistoryLimit]);
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn invalid_error_lists_every_message() {
        let err = ConfigError::Invalid(vec![
            ConfigViolation::ZeroHistoryLimit,
            ConfigViolation::ZeroHistoryLimit,
        ]);

        assert_eq!(
            err.to_string(),
            "Configuration is invalid: History limit must be at least 1 when set; \
             History limit must be at least 1 when set"
        );
    }
}
