//! Ripple stencil solver module
//!
//! This module holds the damped-averaging relaxation kernel and the region
//! bounds it runs over. A pass always ends in a buffer swap, whether the region
//! covers the whole interior, a sub-rectangle, or nothing at all.
//!
//! # Backend Selection
//!
//! [`KernelBackend::Serial`] is the reference. [`KernelBackend::Parallel`]
//! splits a pass by rows across the rayon pool and yields identical heights.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::grid::BufferPair;
//! use ripple_core::solver::{update_full, update_region, Bounds};
//!
//! let mut pair = BufferPair::initialize_seeded(64, 42).unwrap();
//! update_full(&mut pair);
//! update_region(&mut pair, Bounds::new(10, 20, 10, 20));
//! assert_eq!(pair.passes(), 2);
//! ```

mod bounds;
pub mod profiler;
mod stencil;

// Re-exports
pub use bounds::{Bounds, ClampedBounds};
pub use profiler::{PassTimer, ProfilerScope};
pub use stencil::{
    step_ripple_cpu, step_ripple_par, update_full, update_full_with, update_region,
    update_region_with, KernelBackend, DAMPING,
};
