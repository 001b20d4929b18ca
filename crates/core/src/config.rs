//! Tunable parameters for benchmarks and disturbances

use crate::error::RippleError;
use crate::solver::{Bounds, KernelBackend};
use serde::{Deserialize, Serialize};

/// Benchmark run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Grid edge length in cells
    pub size: usize,
    /// Passes per mode
    pub runs: u32,
    /// Region recomputed in partial mode
    pub region: Bounds,
    /// Seed for both initial grids; `None` draws from the thread RNG
    pub seed: Option<u64>,
    /// Kernel execution backend
    pub backend: KernelBackend,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: 325,
            runs: 20,
            region: Bounds::new(100, 150, 100, 150),
            seed: None,
            backend: KernelBackend::Serial,
        }
    }
}

impl BenchmarkConfig {
    /// Check that a run with this configuration makes sense
    ///
    /// The region is not checked: it is clamped at run time like every
    /// other update region.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::InvalidConfig`] when `size` or `runs` is zero.
    pub fn validate(&self) -> Result<(), RippleError> {
        if self.size == 0 {
            return Err(RippleError::invalid_config("size", "must be at least 1"));
        }
        if self.runs == 0 {
            return Err(RippleError::invalid_config("runs", "must be at least 1"));
        }
        Ok(())
    }
}

/// Disturbance parameters for injecting ripples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleParams {
    /// Height added at the impact centre for full pressure
    pub initial_pressure: f32,
    /// Multiplier applied to each touched cell, clamped to `0.8..=1.3`
    pub damping: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            initial_pressure: 0.7,
            damping: 0.95,
        }
    }
}
