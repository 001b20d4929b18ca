//! Stencil kernel property suite
//!
//! Checks the observable contract of a pass: determinism, fixed edges,
//! full/region equivalence, degenerate regions, and the expected divergence
//! between full and partial runs from the same seed.

use approx::assert_relative_eq;
use ripple_core::disturbance::{apply_ripple, impact_radius, AffectedArea};
use ripple_core::solver::{update_full_with, update_region_with};
use ripple_core::{
    update_full, update_region, Bounds, BufferPair, KernelBackend, RippleMap, RippleParams,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn edge_cells(size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size)
        .flat_map(move |x| (0..size).map(move |y| (x, y)))
        .filter(move |&(x, y)| x == 0 || y == 0 || x == size - 1 || y == size - 1)
}

/// Pair whose `previous` differs from `current`, so both inputs matter
fn distinct_pair(size: usize, seed: u64) -> BufferPair {
    let a = BufferPair::initialize_seeded(size, seed).unwrap();
    let b = BufferPair::initialize_seeded(size, seed + 1).unwrap();
    let (current, _) = a.into_grids();
    let (previous, _) = b.into_grids();
    BufferPair::from_grids(current, previous).unwrap()
}

#[test]
fn test_pass_is_deterministic() {
    let mut a = distinct_pair(48, 3);
    let mut b = a.clone();

    for _ in 0..5 {
        update_region(&mut a, Bounds::new(5, 40, 2, 30));
        update_region(&mut b, Bounds::new(5, 40, 2, 30));
    }

    assert_eq!(a.current(), b.current());
    assert_eq!(a.previous(), b.previous());
}

#[test]
fn test_edges_never_written() {
    let size = 24;
    let bounds_list = [
        Bounds::full(size),
        Bounds::new(-100, 100, -100, 100),
        Bounds::new(0, 3, 20, 24),
    ];

    for bounds in bounds_list {
        let mut pair = distinct_pair(size, 11);
        let before_current = pair.current().clone();
        let before_previous = pair.previous().clone();

        update_region(&mut pair, bounds);

        // Old previous was the write target and is now current
        for (x, y) in edge_cells(size) {
            assert_eq!(
                pair.current().get(x, y),
                before_previous.get(x, y),
                "edge ({x},{y}) written for {bounds:?}"
            );
        }
        // Old current is only read from
        assert_eq!(pair.previous(), &before_current);
    }
}

#[test]
fn test_full_matches_nominal_full_region() {
    let n = 31;
    let mut full = distinct_pair(n, 8);
    let mut region = full.clone();

    for _ in 0..4 {
        update_full(&mut full);
        update_region(&mut region, Bounds::new(0, n as i64, 0, n as i64));
    }

    assert_eq!(full.current(), region.current());
    assert_eq!(full.previous(), region.previous());
}

#[test]
fn test_degenerate_region_swaps_without_writes() {
    let mut pair = distinct_pair(16, 21);
    let before_current = pair.current().clone();
    let before_previous = pair.previous().clone();
    let current_ptr = pair.current().as_slice().as_ptr();
    let previous_ptr = pair.previous().as_slice().as_ptr();

    update_region(&mut pair, Bounds::new(9, 4, 1, 15));

    // Values untouched
    assert_eq!(pair.current(), &before_previous);
    assert_eq!(pair.previous(), &before_current);
    // Handles exchanged
    assert_eq!(pair.current().as_slice().as_ptr(), previous_ptr);
    assert_eq!(pair.previous().as_slice().as_ptr(), current_ptr);
    assert_eq!(pair.passes(), 1);
}

#[test]
fn test_single_pass_scenario() {
    let mut pair =
        BufferPair::from_grids(RippleMap::with_value(5, 1.0), RippleMap::with_value(5, 0.0))
            .unwrap();

    update_full(&mut pair);

    assert_relative_eq!(pair.current().get(2, 2), 1.9, epsilon = 1e-6);
    for x in 1..4 {
        for y in 1..4 {
            assert_relative_eq!(pair.current().get(x, y), 1.9, epsilon = 1e-6);
        }
    }
    for (x, y) in edge_cells(5) {
        assert_eq!(pair.current().get(x, y), 0.0);
        assert_eq!(pair.previous().get(x, y), 1.0);
    }
}

#[test]
fn test_partial_and_full_diverge() {
    let mut full = BufferPair::initialize_seeded(40, 1000).unwrap();
    let mut partial = full.clone();

    for passes in 1..=4 {
        update_full(&mut full);
        update_region(&mut partial, Bounds::new(10, 20, 12, 30));
        assert_ne!(
            full.current(),
            partial.current(),
            "expected divergence after {passes} passes"
        );
    }
}

#[test]
fn test_partial_region_matches_full_inside_after_one_pass() {
    let mut full = distinct_pair(30, 5);
    let mut partial = full.clone();
    let bounds = Bounds::new(8, 18, 4, 22);

    update_full(&mut full);
    update_region(&mut partial, bounds);

    let region = bounds.clamp(30);
    for x in region.x_range() {
        for y in region.y_range() {
            assert_eq!(full.current().get(x, y), partial.current().get(x, y));
        }
    }
}

#[test]
fn test_parallel_backend_identical() {
    let mut serial = distinct_pair(65, 77);
    let mut parallel = serial.clone();

    for _ in 0..10 {
        update_full_with(&mut serial, KernelBackend::Serial);
        update_full_with(&mut parallel, KernelBackend::Parallel);
        update_region_with(&mut serial, Bounds::new(3, 50, 10, 60), KernelBackend::Serial);
        update_region_with(&mut parallel, Bounds::new(3, 50, 10, 60), KernelBackend::Parallel);
    }

    assert_eq!(serial.current(), parallel.current());
}

#[test]
fn test_independent_pairs_on_threads() {
    let handles: Vec<_> = (0..4_u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut pair = BufferPair::initialize_seeded(32, seed).unwrap();
                for _ in 0..8 {
                    update_full(&mut pair);
                }
                pair
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let threaded = handle.join().unwrap();
        let mut local = BufferPair::initialize_seeded(32, seed as u64).unwrap();
        for _ in 0..8 {
            update_full(&mut local);
        }
        assert_eq!(threaded.current(), local.current());
    }
}

#[test]
fn test_disturbed_area_drives_partial_update() {
    let size = 64;
    let mut pair =
        BufferPair::from_grids(RippleMap::new(size), RippleMap::new(size)).unwrap();
    let params = RippleParams::default();
    let mut area = AffectedArea::new(size);

    let touched = apply_ripple(pair.current_mut(), 30, 30, 1.0, &params).unwrap();
    area.include(touched, impact_radius(1.0));
    let bounds = area.take().unwrap();
    assert_eq!(bounds, Bounds::new(24, 37, 24, 37));

    update_region(&mut pair, bounds);

    // The bump spread into its neighbours
    assert!(pair.current().get(30, 34) > 0.0);
    // Nothing outside the affected area moved
    assert_eq!(pair.current().get(10, 10), 0.0);
    assert_eq!(pair.current().get(37, 30), 0.0);
}
