//! Trigger configuration module.
//!
//! This module defines which rule extracts the typed prefix from the text
//! before the cursor.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::trigger::TriggerPolicy;
use serde::{Deserialize, Serialize};

/// Trigger rule selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Complete only inside `\<command>{...`
    #[default]
    Command,

    /// Complete the trailing run of word characters anywhere in the line
    WordRun,
}

/// Trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Trigger rule
    pub policy: TriggerKind,

    /// Command name for the `command` rule, without the leading backslash
    pub command: String,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            policy: TriggerKind::Command,
            command: "sr".to_string(),
        }
    }
}

impl TriggerConfig {
    /// Builds the trigger policy described by this configuration.
    pub fn policy(&self) -> ConfigResult<TriggerPolicy> {
        match self.policy {
            TriggerKind::Command => TriggerPolicy::command(&self.command)
                .map_err(|e| ConfigError::ValidationError(e.to_string())),
            TriggerKind::WordRun => Ok(TriggerPolicy::WordRun),
        }
    }
}

impl Validate for TriggerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.policy == TriggerKind::Command {
            if self.command.is_empty() {
                return Err(ConfigError::MissingValue("trigger.command".to_string()));
            }

            if !self.command.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid trigger command: {}",
                    self.command
                )));
            }
        }

        Ok(())
    }
}
