//! Error types for grid construction and configuration
//!
//! The stencil kernel itself never fails: bounds are clamped, not validated.
//! Everything that can go wrong is caught earlier, when a buffer pair is built
//! or a benchmark configuration is accepted.

use std::fmt;

/// Error codes for the construction and configuration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleErrorCode {
    /// Grid size must be at least one cell.
    InvalidSize,
    /// `current` and `previous` grids differ in size.
    ShapeMismatch,
    /// Benchmark or simulation configuration rejected.
    InvalidConfig,
}

/// Error returned when a ripple grid or configuration cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RippleError {
    /// Requested grid size is zero.
    InvalidSize {
        /// The rejected size
        size: usize,
    },
    /// The two grids handed to a buffer pair have different sizes.
    ShapeMismatch {
        /// Size of the grid offered as `current`
        current: usize,
        /// Size of the grid offered as `previous`
        previous: usize,
    },
    /// A configuration field holds an unusable value.
    InvalidConfig {
        /// Name of the offending field (e.g. `"size"`, `"runs"`)
        field: &'static str,
        /// Description of the validation failure
        message: String,
    },
}

impl RippleError {
    /// Create error for a configuration field with a custom message.
    ///
    /// # Arguments
    /// * `field` - The name of the invalid field
    /// * `message` - A description of the validation error
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> RippleErrorCode {
        match self {
            Self::InvalidSize { .. } => RippleErrorCode::InvalidSize,
            Self::ShapeMismatch { .. } => RippleErrorCode::ShapeMismatch,
            Self::InvalidConfig { .. } => RippleErrorCode::InvalidConfig,
        }
    }
}

impl fmt::Display for RippleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "Grid size must be at least 1, got {size}")
            }
            Self::ShapeMismatch { current, previous } => write!(
                f,
                "Buffer shape mismatch: current is {current}x{current}, previous is {previous}x{previous}"
            ),
            Self::InvalidConfig { field, message } => {
                write!(f, "Config field {field}: {message}")
            }
        }
    }
}

impl std::error::Error for RippleError {}
