//! Full versus partial update benchmark
//!
//! Both modes start from grids built with the same seed and run the same
//! number of passes; only the update bounds differ. The report carries total
//! wall-clock time per mode plus a checksum of the final `current` map, which
//! differs between modes because a partial pass leaves stale cells behind.

use crate::config::BenchmarkConfig;
use crate::error::RippleError;
use crate::grid::BufferPair;
use crate::solver::{
    update_full_with, update_region_with, Bounds, KernelBackend, PassTimer, ProfilerScope,
};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// Which bounds a benchmark pass uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Every interior cell
    Full,
    /// Only the configured region
    Partial,
}

/// Timing and outcome of one mode
#[derive(Debug, Clone, Serialize)]
pub struct ModeResult {
    /// Mode that produced this result
    pub mode: UpdateMode,
    /// Wall-clock total over all passes, in seconds
    pub total_secs: f64,
    /// Mean pass time in milliseconds
    pub mean_ms: f64,
    /// Number of passes run
    pub passes: u64,
    /// Cells recomputed per pass after clamping
    pub cells_per_pass: usize,
    /// Sum of the final `current` map
    pub checksum: f64,
}

/// Result of a complete benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Grid edge length
    pub size: usize,
    /// Seed both modes started from
    pub seed: u64,
    /// Backend used for every pass
    pub backend: KernelBackend,
    /// Full-grid mode
    pub full: ModeResult,
    /// Region-only mode
    pub partial: ModeResult,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "full:{:.4} partial:{:.4}",
            self.full.total_secs, self.partial.total_secs
        )
    }
}

/// Run `runs` passes of `mode` on `pair`, timing each one
pub fn time_passes(
    pair: &mut BufferPair,
    mode: UpdateMode,
    region: Bounds,
    runs: u32,
    backend: KernelBackend,
) -> PassTimer {
    let mut timer = PassTimer::new();
    for _ in 0..runs {
        let start = Instant::now();
        match mode {
            UpdateMode::Full => update_full_with(pair, backend),
            UpdateMode::Partial => update_region_with(pair, region, backend),
        }
        timer.record(start.elapsed());
    }
    timer
}

fn run_mode(
    config: &BenchmarkConfig,
    seed: u64,
    mode: UpdateMode,
) -> Result<ModeResult, RippleError> {
    let mut pair = BufferPair::initialize_seeded(config.size, seed)?;
    let region = match mode {
        UpdateMode::Full => Bounds::full(config.size),
        UpdateMode::Partial => config.region,
    };

    let scope = ProfilerScope::new("benchmark_mode");
    let timer = time_passes(&mut pair, mode, region, config.runs, config.backend);
    debug!(
        "{:?} mode: {} passes in {:.3} ms",
        mode,
        timer.passes(),
        scope.elapsed_ms()
    );

    Ok(ModeResult {
        mode,
        total_secs: timer.total().as_secs_f64(),
        mean_ms: timer.mean_ms(),
        passes: timer.passes(),
        cells_per_pass: region.clamp(config.size).area(),
        checksum: pair.current().checksum(),
    })
}

/// Time full and partial updates from identical starting grids
///
/// When `config.seed` is `None` a seed is drawn once and shared by both modes.
///
/// # Errors
///
/// Returns [`RippleError::InvalidConfig`] when the configuration does not
/// validate.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport, RippleError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    info!(
        "Benchmarking {}x{} grid, {} runs per mode, {} backend, seed={}",
        config.size,
        config.size,
        config.runs,
        config.backend.name(),
        seed
    );

    let full = run_mode(config, seed, UpdateMode::Full)?;
    let partial = run_mode(config, seed, UpdateMode::Partial)?;

    info!(
        "full {:.4}s, partial {:.4}s",
        full.total_secs, partial.total_secs
    );

    Ok(BenchmarkReport {
        size: config.size,
        seed,
        backend: config.backend,
        full,
        partial,
    })
}
