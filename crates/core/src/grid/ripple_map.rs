//! Square height grid backing one side of the double buffer
//!
//! Heights are stored as a flat `Vec<f32>` in row-major order. The first
//! coordinate `x` selects the row and `y` the column, so `(x, y)` lives at
//! `x * size + y`.

use rand::Rng;

/// Square 2D field of wave heights
#[derive(Debug, Clone, PartialEq)]
pub struct RippleMap {
    /// Heights in row-major order (x * size + y)
    data: Vec<f32>,
    /// Edge length in cells
    size: usize,
}

impl RippleMap {
    /// Create a new map with given edge length, initialized to zero
    ///
    /// # Arguments
    ///
    /// * `size` - Edge length in cells
    ///
    /// # Returns
    ///
    /// New map of `size × size` zeros
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_value(size, 0.0)
    }

    /// Create a new map with every cell set to `value`
    #[must_use]
    pub fn with_value(size: usize, value: f32) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Create a map of independent uniform samples in `[0, 1)`
    ///
    /// # Arguments
    ///
    /// * `size` - Edge length in cells
    /// * `rng` - Source of randomness; a seeded RNG gives reproducible maps
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let data = (0..size * size).map(|_| rng.random::<f32>()).collect();
        Self { data, size }
    }

    /// Edge length in cells
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get reference to the raw heights
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable reference to the raw heights
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get height at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.size && y < self.size, "Coordinates out of bounds");
        self.data[x * self.size + y]
    }

    /// Set height at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(x < self.size && y < self.size, "Coordinates out of bounds");
        self.data[x * self.size + y] = value;
    }

    /// True when `(x, y)` lies on the outer edge
    #[inline]
    #[must_use]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.size || y + 1 == self.size
    }

    /// Sum of every height, used as a cheap fingerprint in benchmark reports
    #[must_use]
    pub fn checksum(&self) -> f64 {
        self.data.iter().map(|&v| f64::from(v)).sum()
    }
}
