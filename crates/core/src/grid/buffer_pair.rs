//! Double-buffered ripple state
//!
//! A `BufferPair` owns the `current` and `previous` maps. The stencil kernel
//! writes into `previous` while reading `current`, then calls [`BufferPair::swap`],
//! which trades the two owned maps in O(1) without touching their contents.

use super::ripple_map::RippleMap;
use crate::error::RippleError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Ping-pong pair of equally sized ripple maps
#[derive(Debug, Clone)]
pub struct BufferPair {
    current: RippleMap,
    previous: RippleMap,
    passes: u64,
}

impl BufferPair {
    /// Create a pair with random heights from the thread RNG
    ///
    /// `current` holds independent uniform samples in `[0, 1)`, `previous` is a
    /// value copy of `current`.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::InvalidSize`] when `size` is zero.
    pub fn initialize(size: usize) -> Result<Self, RippleError> {
        Self::initialize_with_rng(size, &mut rand::rng())
    }

    /// Create a pair with random heights from a deterministic seed
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::InvalidSize`] when `size` is zero.
    pub fn initialize_seeded(size: usize, seed: u64) -> Result<Self, RippleError> {
        Self::initialize_with_rng(size, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a pair with random heights drawn from `rng`
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::InvalidSize`] when `size` is zero.
    pub fn initialize_with_rng<R: Rng>(
        size: usize,
        rng: &mut R,
    ) -> Result<Self, RippleError> {
        if size == 0 {
            return Err(RippleError::InvalidSize { size });
        }

        let current = RippleMap::random(size, rng);
        let previous = current.clone();
        debug!("Initialized {}x{} ripple buffer pair", size, size);

        Ok(Self {
            current,
            previous,
            passes: 0,
        })
    }

    /// Build a pair from caller-supplied maps
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::InvalidSize`] for empty maps and
    /// [`RippleError::ShapeMismatch`] when the two maps differ in size.
    pub fn from_grids(current: RippleMap, previous: RippleMap) -> Result<Self, RippleError> {
        if current.size() != previous.size() {
            return Err(RippleError::ShapeMismatch {
                current: current.size(),
                previous: previous.size(),
            });
        }
        if current.size() == 0 {
            return Err(RippleError::InvalidSize { size: 0 });
        }

        Ok(Self {
            current,
            previous,
            passes: 0,
        })
    }

    /// Edge length shared by both maps
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.current.size()
    }

    /// Map holding the most recent heights
    #[inline]
    #[must_use]
    pub fn current(&self) -> &RippleMap {
        &self.current
    }

    /// Map holding the heights from one pass earlier
    #[inline]
    #[must_use]
    pub fn previous(&self) -> &RippleMap {
        &self.previous
    }

    /// Mutable access to `current`, used to inject disturbances between passes
    #[inline]
    pub fn current_mut(&mut self) -> &mut RippleMap {
        &mut self.current
    }

    /// Borrow `current` for reading and `previous` for writing at once
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&RippleMap, &mut RippleMap) {
        (&self.current, &mut self.previous)
    }

    /// Exchange which map is `current`
    ///
    /// Only the owned handles move; no height is copied.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
        self.passes += 1;
    }

    /// Number of swaps performed since construction
    #[inline]
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Consume the pair, returning `(current, previous)`
    #[must_use]
    pub fn into_grids(self) -> (RippleMap, RippleMap) {
        (self.current, self.previous)
    }
}
