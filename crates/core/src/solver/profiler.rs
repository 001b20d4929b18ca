//! Timing helpers for benchmark passes.
//!
//! Provides RAII-style profiling scopes and an accumulating pass timer.

use std::time::{Duration, Instant};
use tracing::trace;

/// A profiling scope that measures elapsed time using RAII.
///
/// The elapsed time is emitted as a `trace!` event when dropped.
pub struct ProfilerScope {
    start: Instant,
    name: &'static str,
}

impl ProfilerScope {
    /// Creates a new profiling scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Gets elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ProfilerScope {
    fn drop(&mut self) {
        trace!(scope = self.name, elapsed_ms = self.elapsed_ms(), "profiler scope closed");
    }
}

/// Accumulates wall-clock time over repeated passes.
pub struct PassTimer {
    total: Duration,
    passes: u64,
}

impl PassTimer {
    /// Creates an empty timer.
    pub fn new() -> Self {
        Self {
            total: Duration::ZERO,
            passes: 0,
        }
    }

    /// Adds an externally measured pass duration.
    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.passes += 1;
    }

    /// Total time over all recorded passes.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Number of recorded passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Mean pass time in milliseconds, zero when nothing was recorded.
    pub fn mean_ms(&self) -> f64 {
        if self.passes == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1000.0 / self.passes as f64
    }
}

impl Default for PassTimer {
    fn default() -> Self {
        Self::new()
    }
}
