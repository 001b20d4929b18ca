//! Ripple Map Core Library
//!
//! Double-buffered wave-height grids updated by a damped-averaging stencil,
//! with a benchmark comparing full-grid passes against passes restricted to a
//! sub-rectangle of the interior.
//!
//! ## Layout
//!
//! - [`grid`]: square height maps and the `current`/`previous` buffer pair
//! - [`solver`]: region clamping and the relaxation kernel
//! - [`disturbance`]: injecting ripples and tracking the disturbed area
//! - [`render`]: height-to-alpha previews
//! - [`benchmark`]: full versus partial timing runs

pub mod benchmark;
pub mod config;
pub mod disturbance;
pub mod error;
pub mod grid;
pub mod render;
pub mod solver;

// Re-export core types
pub use benchmark::{run_benchmark, BenchmarkReport, ModeResult, UpdateMode};
pub use config::{BenchmarkConfig, RippleParams};
pub use error::{RippleError, RippleErrorCode};
pub use grid::{BufferPair, RippleMap};
pub use solver::{update_full, update_region, Bounds, ClampedBounds, KernelBackend};
