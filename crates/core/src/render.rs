//! Height-to-pixel conversion for previews
//!
//! Heights are drawn as blue with alpha proportional to height, clamped to
//! `[0, 1]`. Output is row-major in the map's own `(x, y)` order.

use crate::grid::RippleMap;
use rayon::prelude::*;

/// Colour used for every ripple pixel
pub const RIPPLE_RGB: [u8; 3] = [0, 0, 255];

/// Alpha byte for one height
#[inline]
#[must_use]
pub fn height_to_alpha(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// One alpha byte per cell
#[must_use]
pub fn render_alpha(map: &RippleMap) -> Vec<u8> {
    map.as_slice()
        .par_iter()
        .map(|&v| height_to_alpha(v))
        .collect()
}

/// Blue RGBA pixels, four bytes per cell
#[must_use]
pub fn render_rgba(map: &RippleMap) -> Vec<u8> {
    let mut rgba = vec![0u8; map.as_slice().len() * 4];
    rgba.par_chunks_mut(4)
        .zip(map.as_slice().par_iter())
        .for_each(|(px, &v)| {
            px[..3].copy_from_slice(&RIPPLE_RGB);
            px[3] = height_to_alpha(v);
        });
    rgba
}
