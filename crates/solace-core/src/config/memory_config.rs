use serde::{Deserialize, Serialize};

use super::defaults;

/// Conversation memory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Sliding-window size: at most this many recent turns feed the
    /// prompt context.
    pub window: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_MEMORY_WINDOW,
        }
    }
}
