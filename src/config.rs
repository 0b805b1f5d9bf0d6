//! Kernel configuration.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Launch-time constants of the kernel.
///
/// All fields have working defaults; `validate` is called by
/// [`crate::kernel::MotifKernel::new`], so hand-built configurations fail
/// fast instead of deadlocking a worker pool or sizing a zero-length buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Number of cooperating workers in the fixed pool.
    pub workers: usize,
    /// Pair-intersection size at or above which a second vertex is heavy.
    pub heavy_threshold: usize,
    /// Per-worker cap on flagged heavy candidates; overflow silently takes
    /// the light path.
    pub max_heavy_per_worker: usize,
    /// Root degree below which the dispatch loop cuts over from the
    /// collaborative state to round-robin fallback.
    pub branch_degree_threshold: usize,
    /// Capacity, in vertex ids, of every scratch and staging buffer.
    pub buffer_capacity: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            workers: 8,
            heavy_threshold: 2048,
            max_heavy_per_worker: 64,
            branch_degree_threshold: 32,
            buffer_capacity: 4096,
        }
    }
}

impl KernelConfig {
    /// Checks that the configuration can actually run.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.workers >= 1, "worker pool must have at least 1 worker");
        ensure!(
            self.buffer_capacity >= 1,
            "scratch/staging buffers need nonzero capacity"
        );
        ensure!(
            self.heavy_threshold >= 1,
            "a heavy threshold of 0 would flag empty intersections"
        );
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(KernelConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = KernelConfig {
            workers: 0,
            ..KernelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let config = KernelConfig::from_json(r#"{"workers": 4, "heavy_threshold": 16}"#).unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.heavy_threshold, 16);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.max_heavy_per_worker, 64);
    }

    #[test]
    fn json_rejects_invalid() {
        assert!(KernelConfig::from_json(r#"{"workers": 0}"#).is_err());
    }
}
