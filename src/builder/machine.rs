//! Builder for constructing gumball machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::gumball::GumballMachine;

/// Builder for gumball machines with a fluent API.
///
/// Settings not given keep their [`MachineConfig`] defaults, except the
/// inventory, which must be set.
#[derive(Debug, Clone, Default)]
pub struct GumballMachineBuilder {
    inventory: Option<u32>,
    history_limit: Option<Option<usize>>,
}

impl GumballMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every setting from an existing configuration.
    pub fn from_config(config: MachineConfig) -> Self {
        Self {
            inventory: Some(config.inventory),
            history_limit: Some(config.history_limit),
        }
    }

    /// Set the number of gumballs loaded (required).
    pub fn inventory(mut self, count: u32) -> Self {
        self.inventory = Some(count);
        self
    }

    /// Bound the transition history; `None` keeps everything.
    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Configuration this builder would produce.
    pub fn config(&self) -> Result<MachineConfig, BuildError> {
        let defaults = MachineConfig::default();
        Ok(MachineConfig {
            inventory: self.inventory.ok_or(BuildError::MissingInventory)?,
            history_limit: self.history_limit.unwrap_or(defaults.history_limit),
        })
    }

    /// Build the machine.
    /// Returns an error if the inventory is missing or the settings are invalid.
    pub fn build(self) -> Result<GumballMachine, BuildError> {
        let config = self.config()?;
        Ok(GumballMachine::with_config(config)?)
    }
}
