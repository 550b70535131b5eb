//! Tuning knobs for the job manager.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MAX_BATCH_ITEMS: usize = 1000;
const DEFAULT_CONCURRENCY: usize = 8;

/// Configuration validation failures, reported before any job is accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_batch_items must be at least 1")]
    ZeroMaxBatchItems,

    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Limits applied by the [`crate::JobManager`].
///
/// `concurrency` is a constant per manager, never proportional to batch
/// size, so memory and CPU stay bounded no matter how large a submission
/// is. Partial documents merge over the defaults via serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobsConfig {
    /// Largest batch a single submission may carry.
    pub max_batch_items: usize,
    /// How many items are processed at once within one job.
    pub concurrency: usize,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            max_batch_items: DEFAULT_MAX_BATCH_ITEMS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl JobsConfig {
    /// Rejects degenerate limits. Called by the manager constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_batch_items == 0 {
            return Err(ConfigError::ZeroMaxBatchItems);
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}
