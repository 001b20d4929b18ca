//! Damped-averaging relaxation kernel
//!
//! One pass recomputes the interior cells of `previous` from `current`:
//!
//! ```text
//! h' = (c[x-1][y] + c[x+1][y] + c[x][y-1] + c[x][y+1]) / 2 - p[x][y]
//! p[x][y] = h' * 0.95
//! ```
//!
//! then swaps the two maps. Neighbours come only from `current` and the prior
//! state only from `previous` at the same cell, so a pass is a pure function of
//! its inputs and the visiting order does not matter.
//!
//! Full and partial passes share this kernel and differ only in bounds. Cells
//! outside a partial region keep stale values in the map that becomes
//! `previous`, which is why full and partial runs diverge from the same seed.

use super::bounds::{Bounds, ClampedBounds};
use crate::grid::BufferPair;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Damping factor applied to every recomputed height
pub const DAMPING: f32 = 0.95;

/// How a single pass is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelBackend {
    /// Row after row on the calling thread
    #[default]
    Serial,
    /// Rows spread over the rayon thread pool
    Parallel,
}

impl KernelBackend {
    /// Short lowercase name for logs and reports
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

/// Relax one row of `previous` in place
///
/// `up`, `row` and `down` are rows `x-1`, `x` and `x+1` of `current`.
#[inline(always)]
fn relax_row(up: &[f32], row: &[f32], down: &[f32], out: &mut [f32], ys: Range<usize>) {
    for y in ys {
        let new_height = (up[y] + down[y] + row[y - 1] + row[y + 1]) / 2.0 - out[y];
        out[y] = new_height * DAMPING;
    }
}

/// Serial pass over `region`
///
/// # Arguments
///
/// * `current` - Heights to read neighbours from
/// * `previous` - Heights from one pass earlier, overwritten inside `region`
/// * `size` - Edge length of both maps
/// * `region` - Clamped interior region to recompute
pub fn step_ripple_cpu(
    current: &[f32],
    previous: &mut [f32],
    size: usize,
    region: &ClampedBounds,
) {
    if region.is_empty() {
        return;
    }

    for x in region.x_range() {
        relax_row(
            &current[(x - 1) * size..x * size],
            &current[x * size..(x + 1) * size],
            &current[(x + 1) * size..(x + 2) * size],
            &mut previous[x * size..(x + 1) * size],
            region.y_range(),
        );
    }
}

/// Row-parallel pass over `region`, bit-identical to [`step_ripple_cpu`]
pub fn step_ripple_par(
    current: &[f32],
    previous: &mut [f32],
    size: usize,
    region: &ClampedBounds,
) {
    if region.is_empty() {
        return;
    }

    let rows = region.x_range();
    let first = rows.start;

    previous[rows.start * size..rows.end * size]
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(i, out)| {
            let x = first + i;
            relax_row(
                &current[(x - 1) * size..x * size],
                &current[x * size..(x + 1) * size],
                &current[(x + 1) * size..(x + 2) * size],
                out,
                region.y_range(),
            );
        });
}

/// Recompute the clamped `bounds` region, then swap the buffers
///
/// Never fails: bounds outside the interior are clamped, and an empty region
/// still swaps.
pub fn update_region(pair: &mut BufferPair, bounds: Bounds) {
    update_region_with(pair, bounds, KernelBackend::Serial);
}

/// Recompute every interior cell, then swap the buffers
///
/// Same as [`update_region`] with `Bounds::full(size)`.
pub fn update_full(pair: &mut BufferPair) {
    update_full_with(pair, KernelBackend::Serial);
}

/// [`update_region`] on a chosen backend
pub fn update_region_with(pair: &mut BufferPair, bounds: Bounds, backend: KernelBackend) {
    let size = pair.size();
    let region = bounds.clamp(size);

    let (current, previous) = pair.split_mut();
    match backend {
        KernelBackend::Serial => {
            step_ripple_cpu(current.as_slice(), previous.as_mut_slice(), size, &region);
        }
        KernelBackend::Parallel => {
            step_ripple_par(current.as_slice(), previous.as_mut_slice(), size, &region);
        }
    }

    // Swap buffers
    pair.swap();
}

/// [`update_full`] on a chosen backend
pub fn update_full_with(pair: &mut BufferPair, backend: KernelBackend) {
    let bounds = Bounds::full(pair.size());
    update_region_with(pair, bounds, backend);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RippleMap;
    use approx::assert_relative_eq;

    fn ones_and_zeros(size: usize) -> BufferPair {
        BufferPair::from_grids(RippleMap::with_value(size, 1.0), RippleMap::new(size)).unwrap()
    }

    #[test]
    fn test_single_pass_on_five_by_five() {
        let mut pair = ones_and_zeros(5);
        update_full(&mut pair);

        // Freshly written map is now current
        let current = pair.current();
        for x in 0..5 {
            for y in 0..5 {
                if current.is_edge(x, y) {
                    assert_eq!(current.get(x, y), 0.0, "edge ({x},{y})");
                } else {
                    assert_relative_eq!(current.get(x, y), 1.9, epsilon = 1e-6);
                }
            }
        }

        // Old current, untouched, is now previous
        assert!(pair.previous().as_slice().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_reads_previous_at_same_cell() {
        let mut previous = RippleMap::new(3);
        previous.set(1, 1, 0.5);
        let mut pair = BufferPair::from_grids(RippleMap::with_value(3, 1.0), previous).unwrap();

        update_full(&mut pair);

        // (4 / 2 - 0.5) * 0.95
        assert_relative_eq!(pair.current().get(1, 1), 1.425, epsilon = 1e-6);
    }

    #[test]
    fn test_asymmetric_neighbours() {
        let mut current = RippleMap::new(3);
        current.set(0, 1, 1.0);
        current.set(2, 1, 2.0);
        current.set(1, 0, 3.0);
        current.set(1, 2, 4.0);
        let mut pair = BufferPair::from_grids(current, RippleMap::new(3)).unwrap();

        update_full(&mut pair);

        assert_relative_eq!(pair.current().get(1, 1), 5.0 * 0.95, epsilon = 1e-6);
    }

    #[test]
    fn test_region_only_writes_inside() {
        let mut pair = ones_and_zeros(8);
        update_region(&mut pair, Bounds::new(2, 4, 3, 5));

        let written = pair.current();
        for x in 0..8 {
            for y in 0..8 {
                let inside = (2..4).contains(&x) && (3..5).contains(&y);
                let expected = if inside { 1.9 } else { 0.0 };
                assert_relative_eq!(written.get(x, y), expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_tiny_grids_only_swap() {
        for size in 1..3 {
            let mut pair = ones_and_zeros(size);
            update_full(&mut pair);
            assert!(pair.current().as_slice().iter().all(|&v| v == 0.0));
            assert!(pair.previous().as_slice().iter().all(|&v| v == 1.0));
            assert_eq!(pair.passes(), 1);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = BufferPair::initialize_seeded(33, 5).unwrap();
        let mut parallel = serial.clone();

        for _ in 0..6 {
            update_full_with(&mut serial, KernelBackend::Serial);
            update_full_with(&mut parallel, KernelBackend::Parallel);
        }
        update_region_with(&mut serial, Bounds::new(4, 20, 7, 30), KernelBackend::Serial);
        update_region_with(&mut parallel, Bounds::new(4, 20, 7, 30), KernelBackend::Parallel);

        assert_eq!(serial.current(), parallel.current());
        assert_eq!(serial.previous(), parallel.previous());
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(KernelBackend::default(), KernelBackend::Serial);
        assert_eq!(KernelBackend::Serial.name(), "serial");
        assert_eq!(KernelBackend::Parallel.name(), "parallel");
    }
}
