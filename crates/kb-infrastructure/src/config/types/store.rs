//! Document store configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SLOW_OPERATION_MS;

/// Document store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store calls taking at least this long are logged at `warn`
    pub slow_operation_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slow_operation_ms: DEFAULT_SLOW_OPERATION_MS,
        }
    }
}

impl StoreConfig {
    /// Slow-call threshold as a [`Duration`]
    pub fn slow_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_operation_ms)
    }
}
