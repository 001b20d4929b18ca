//! Update regions and their clamping to the grid interior
//!
//! Callers describe a region with signed, half-open bounds that may spill past
//! the grid or even be inverted. [`Bounds::clamp`] turns them into the set of
//! interior cells the kernel may actually write. Nothing is ever rejected.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Nominal half-open update rectangle `[start_x, end_x) × [start_y, end_y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// First row (inclusive)
    pub start_x: i64,
    /// Last row (exclusive)
    pub end_x: i64,
    /// First column (inclusive)
    pub start_y: i64,
    /// Last column (exclusive)
    pub end_y: i64,
}

impl Bounds {
    /// Create bounds from `(start_x, end_x, start_y, end_y)`
    #[must_use]
    pub const fn new(start_x: i64, end_x: i64, start_y: i64, end_y: i64) -> Self {
        Self {
            start_x,
            end_x,
            start_y,
            end_y,
        }
    }

    /// Nominal bounds covering a whole `size × size` grid
    ///
    /// Clamping reduces these to the interior, so a pass with full bounds
    /// never touches an edge cell.
    #[must_use]
    pub fn full(size: usize) -> Self {
        let n = i64::try_from(size).unwrap_or(i64::MAX);
        Self::new(0, n, 0, n)
    }

    /// Clamp to the interior of a `size × size` grid
    ///
    /// Effective start is `max(1, start)`, effective end is `min(size - 1, end)`
    /// on each axis. An inverted result collapses to an empty range.
    #[must_use]
    pub fn clamp(&self, size: usize) -> ClampedBounds {
        let interior_end = i64::try_from(size)
            .unwrap_or(i64::MAX)
            .saturating_sub(1);

        let axis = |start: i64, end: i64| -> Range<usize> {
            let start = start.max(1);
            let end = end.min(interior_end).max(start);
            start as usize..end as usize
        };

        ClampedBounds {
            x: axis(self.start_x, self.end_x),
            y: axis(self.start_y, self.end_y),
        }
    }
}

/// Interior region that survived clamping
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClampedBounds {
    x: Range<usize>,
    y: Range<usize>,
}

impl ClampedBounds {
    /// Rows to update
    #[inline]
    #[must_use]
    pub fn x_range(&self) -> Range<usize> {
        self.x.clone()
    }

    /// Columns to update
    #[inline]
    #[must_use]
    pub fn y_range(&self) -> Range<usize> {
        self.y.clone()
    }

    /// True when the region contains no cell
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// Number of cells the kernel will write
    #[must_use]
    pub fn area(&self) -> usize {
        self.x.len() * self.y.len()
    }

    /// True when `(x, y)` will be written
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }

    /// Back to signed nominal bounds, e.g. to feed a later pass
    #[must_use]
    pub fn to_bounds(&self) -> Bounds {
        Bounds::new(
            self.x.start as i64,
            self.x.end as i64,
            self.y.start as i64,
            self.y.end as i64,
        )
    }
}
