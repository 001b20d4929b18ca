//! Ripple grid storage and double buffering

mod buffer_pair;
mod ripple_map;

// Re-export main types
pub use buffer_pair::BufferPair;
pub use ripple_map::RippleMap;
