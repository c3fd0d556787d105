//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Default bound of the change history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;

/// Tunables for a `StateMachine`.
///
/// Deserializes with every field optional, so hosts can embed it in their
/// own configuration files.
///
/// # Example
///
/// ```rust
/// use tickstate::machine::MachineConfig;
///
/// let config = MachineConfig::default()
///     .strict(true)
///     .history_capacity(4);
///
/// assert!(config.transitions_enabled);
/// assert!(config.strict);
/// assert_eq!(config.history_capacity, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Whether `run()` evaluates transitions before running the current state.
    pub transitions_enabled: bool,

    /// Reject empty state batches with `EmptyBatch`.
    pub strict: bool,

    /// Maximum number of realized changes kept in history; 0 disables it.
    pub history_capacity: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            transitions_enabled: true,
            strict: cfg!(debug_assertions),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MachineConfig {
    pub fn transitions_enabled(mut self, enabled: bool) -> Self {
        self.transitions_enabled = enabled;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
