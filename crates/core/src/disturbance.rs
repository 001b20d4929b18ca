//! Ripple injection and affected-area tracking
//!
//! A touch adds a small diamond-weighted bump of height around a point,
//! scaled by pressure. The touched rectangles can be accumulated into an
//! [`AffectedArea`] whose bounds then drive a partial update pass.
//!
//! Edge cells are never disturbed, so the fixed boundary the kernel relies on
//! stays intact.

use crate::config::RippleParams;
use crate::grid::RippleMap;
use crate::solver::Bounds;

/// Lowest accepted touch pressure
pub const MIN_PRESSURE: f32 = 0.1;
/// Highest accepted touch pressure
pub const MAX_PRESSURE: f32 = 1.0;
/// Accepted range for per-touch damping
pub const DAMPING_RANGE: (f32, f32) = (0.8, 1.3);

/// Impact radius in cells for a given pressure, `ceil(3 * pressure)`
#[must_use]
pub fn impact_radius(pressure: f32) -> i64 {
    let pressure = pressure.clamp(MIN_PRESSURE, MAX_PRESSURE);
    (3.0 * pressure).ceil() as i64
}

/// Smallest bounds covering both `a` and `b`
fn union(a: Bounds, b: Bounds) -> Bounds {
    Bounds::new(
        a.start_x.min(b.start_x),
        a.end_x.max(b.end_x),
        a.start_y.min(b.start_y),
        a.end_y.max(b.end_y),
    )
}

/// `d * i / steps`, truncated toward zero
///
/// `|d|` and `i` never exceed `u64::MAX`, so the product fits in a `u128`.
fn step_offset(d: i128, i: i128, steps: i128) -> i128 {
    let scaled = (d.unsigned_abs() * i.unsigned_abs() / steps.unsigned_abs()) as i128;
    if d < 0 {
        -scaled
    } else {
        scaled
    }
}

/// Add a ripple centred on `(x, y)`
///
/// Every interior cell within the square impact radius gains
/// `initial_pressure * pressure / (|dx| + |dy| + 1)` and is then multiplied by
/// the damping factor. Pressure is clamped to
/// [`MIN_PRESSURE`]`..=`[`MAX_PRESSURE`] and damping to [`DAMPING_RANGE`].
///
/// # Returns
///
/// Half-open bounds of the touched cells, or `None` if the impact missed the
/// interior entirely.
pub fn apply_ripple(
    map: &mut RippleMap,
    x: i64,
    y: i64,
    pressure: f32,
    params: &RippleParams,
) -> Option<Bounds> {
    let pressure = pressure.clamp(MIN_PRESSURE, MAX_PRESSURE);
    let damping = params.damping.clamp(DAMPING_RANGE.0, DAMPING_RANGE.1);
    let radius = impact_radius(pressure);
    let size = i64::try_from(map.size()).ok()?;

    // Window of interior cells within the impact radius
    let x_lo = x.saturating_sub(radius).max(1);
    let x_hi = x.saturating_add(radius).min(size - 2);
    let y_lo = y.saturating_sub(radius).max(1);
    let y_hi = y.saturating_add(radius).min(size - 2);
    if x_lo > x_hi || y_lo > y_hi {
        return None;
    }

    for nx in x_lo..=x_hi {
        for ny in y_lo..=y_hi {
            let (dx, dy) = (nx - x, ny - y);
            let (cx, cy) = (nx as usize, ny as usize);
            let falloff = (dx.abs() + dy.abs() + 1) as f32;
            let bumped = map.get(cx, cy) + params.initial_pressure * pressure / falloff;
            map.set(cx, cy, bumped * damping);
        }
    }
    Some(Bounds::new(x_lo, x_hi + 1, y_lo, y_hi + 1))
}

/// Apply ripples along the straight segment from `from` to `to`
///
/// One ripple is applied per cell step, `max(|dx|, |dy|) + 1` in total,
/// both endpoints included.
///
/// # Returns
///
/// Union of the touched bounds, or `None` if nothing inside the interior
/// was touched.
pub fn apply_stroke(
    map: &mut RippleMap,
    from: (i64, i64),
    to: (i64, i64),
    pressure: f32,
    params: &RippleParams,
) -> Option<Bounds> {
    let size = i64::try_from(map.size()).ok()?;
    let radius = impact_radius(pressure);
    // Centres outside this window cannot reach the interior
    let (lo, hi) = (-radius, size.saturating_add(radius));

    let dx = i128::from(to.0) - i128::from(from.0);
    let dy = i128::from(to.1) - i128::from(from.1);
    let steps = dx.abs().max(dy.abs());
    let divisor = steps.max(1);

    // The major axis advances exactly one cell per step, so only steps whose
    // major coordinate lies inside [lo, hi] are visited.
    let (major_from, major_d) = if dx.abs() >= dy.abs() {
        (from.0, dx)
    } else {
        (from.1, dy)
    };
    let offset = |c: i64| (i128::from(c) - i128::from(major_from)) * major_d.signum();
    let (a, b) = (offset(lo), offset(hi));
    let first = a.min(b).max(0);
    let last = a.max(b).min(steps);

    let mut touched: Option<Bounds> = None;
    for i in first..=last {
        let x = i128::from(from.0) + step_offset(dx, i, divisor);
        let y = i128::from(from.1) + step_offset(dy, i, divisor);
        let (Ok(x), Ok(y)) = (i64::try_from(x), i64::try_from(y)) else {
            continue;
        };
        if let Some(hit) = apply_ripple(map, x, y, pressure, params) {
            touched = Some(touched.map_or(hit, |t| union(t, hit)));
        }
    }
    touched
}

/// Running union of disturbed regions, grown by the spread margin
///
/// Feed it every rectangle returned by [`apply_ripple`] or [`apply_stroke`],
/// then [`take`](Self::take) the bounds for the next partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffectedArea {
    size: usize,
    bounds: Option<Bounds>,
}

impl AffectedArea {
    /// Empty area for a `size × size` grid
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size, bounds: None }
    }

    /// Merge `touched`, grown by `margin` cells on every side
    ///
    /// The result is clamped to the grid interior.
    pub fn include(&mut self, touched: Bounds, margin: i64) {
        let grown = Bounds::new(
            touched.start_x.saturating_sub(margin),
            touched.end_x.saturating_add(margin),
            touched.start_y.saturating_sub(margin),
            touched.end_y.saturating_add(margin),
        );
        let merged = self.bounds.map_or(grown, |b| union(b, grown));
        let clamped = merged.clamp(self.size);
        self.bounds = (!clamped.is_empty()).then(|| clamped.to_bounds());
    }

    /// True when nothing has been included since the last take
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Current union without resetting
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Return the union and reset to empty
    pub fn take(&mut self) -> Option<Bounds> {
        self.bounds.take()
    }
}
