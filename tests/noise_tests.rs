// Host-side tests for the noise field.

use ambient_core::noise::{fbm, hash, value_noise};

#[test]
fn hash_is_repeatable_and_half_open() {
    for ix in -50..50 {
        for iy in -50..50 {
            let a = hash(ix as f64, iy as f64);
            let b = hash(ix as f64, iy as f64);
            assert_eq!(a.to_bits(), b.to_bits(), "hash not repeatable at ({ix},{iy})");
            assert!((0.0..1.0).contains(&a), "hash({ix},{iy}) = {a} out of range");
        }
    }
}

#[test]
fn hash_varies_across_lattice() {
    let a = hash(0.0, 0.0);
    let b = hash(1.0, 0.0);
    let c = hash(0.0, 1.0);
    assert!(a != b || a != c, "neighbouring lattice points should differ");
}

#[test]
fn value_noise_matches_hash_on_lattice_points() {
    for (ix, iy) in [(0, 0), (3, -2), (-7, 11), (25, 25)] {
        let (x, y) = (ix as f64, iy as f64);
        assert!((value_noise(x, y) - hash(x, y)).abs() < 1e-12);
    }
}

#[test]
fn value_noise_is_bounded() {
    let mut x = -20.0;
    while x < 20.0 {
        let mut y = -20.0;
        while y < 20.0 {
            let v = value_noise(x, y);
            assert!((0.0..1.0).contains(&v), "value_noise({x},{y}) = {v}");
            y += 0.37;
        }
        x += 0.41;
    }
}

#[test]
fn value_noise_is_continuous_across_lattice_boundaries() {
    for k in -5..5 {
        let k = k as f64;
        for y in [0.25, 1.5, -3.75] {
            let mut prev_gap = f64::MAX;
            for eps in [1e-3, 1e-5, 1e-7, 1e-9] {
                let gap = (value_noise(k + eps, y) - value_noise(k - eps, y)).abs();
                assert!(gap <= prev_gap + 1e-12, "gap should shrink with eps");
                prev_gap = gap;
            }
            assert!(prev_gap < 1e-6, "seam at x={k}, y={y}: {prev_gap}");

            let gap_y = (value_noise(y, k + 1e-9) - value_noise(y, k - 1e-9)).abs();
            assert!(gap_y < 1e-6, "seam at y={k}: {gap_y}");
        }
    }
}

#[test]
fn fbm_single_octave_is_half_value_noise() {
    for (x, y) in [(0.3, 0.7), (12.5, -4.25), (-1.0, 9.9)] {
        assert!((fbm(x, y, 1) - 0.5 * value_noise(x, y)).abs() < 1e-12);
    }
}

#[test]
fn fbm_octaves_add_bounded_shrinking_contributions() {
    let (x, y) = (3.7, -8.2);
    let mut prev = fbm(x, y, 1);
    for octaves in 2..=8u32 {
        let next = fbm(x, y, octaves);
        let added = next - prev;
        let amplitude = 0.5f64.powi(octaves as i32);
        assert!(added >= -1e-12, "octave {octaves} subtracted");
        assert!(added <= amplitude, "octave {octaves} added {added} > amplitude {amplitude}");
        prev = next;
    }
}

#[test]
fn fbm_four_octaves_stays_below_one() {
    let bound = 1.0 - 0.5f64.powi(4);
    for i in 0..400 {
        let x = i as f64 * 0.173 - 30.0;
        let y = i as f64 * 0.091 + 7.0;
        let v = fbm(x, y, 4);
        assert!(v >= 0.0 && v < bound, "fbm({x},{y}) = {v}");
    }
}
