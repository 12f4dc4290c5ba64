//! Configuration types for the diff engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the structural comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of shared endpoints at which per-endpoint diffing runs in parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl EngineConfig {
    /// Never parallelize (useful for debugging and small documents).
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Parallelize as soon as there is more than one shared endpoint.
    #[must_use]
    pub const fn eager() -> Self {
        Self {
            parallel_threshold: 2,
        }
    }

    /// Whether `shared` endpoint pairs warrant the parallel path.
    #[must_use]
    pub const fn should_parallelize(&self, shared: usize) -> bool {
        shared >= self.parallel_threshold
    }
}
