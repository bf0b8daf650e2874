use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::systems::mesh::paths::sampling::*;

#[test]
fn sphere_surface_points_lie_on_the_sphere() {
    let mut rng = StdRng::seed_from_u64(7);
    for radius in [0.1, 1.0, 2.0, 35.0] {
        for _ in 0..1000 {
            let p = sample_sphere_surface(&mut rng, radius);
            assert_abs_diff_eq!(p.length(), radius, epsilon = 1e-9 * radius.max(1.0));
        }
    }
}

#[test]
fn sphere_surface_has_no_polar_clustering() {
    // uniform on a sphere means z is uniform on [-r, r]
    let mut rng = StdRng::seed_from_u64(11);
    let samples = 20_000;
    let mut bins = [0usize; 10];
    for _ in 0..samples {
        let p = sample_sphere_surface(&mut rng, 1.0);
        let bin = (((p.z + 1.0) / 2.0) * 10.0).floor().clamp(0.0, 9.0) as usize;
        bins[bin] += 1;
    }

    let expected = samples / 10;
    for count in bins {
        assert!(count.abs_diff(expected) < expected / 7, "bins: {:?}", bins);
    }
}

#[test]
fn ball_volume_points_stay_inside() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..5000 {
        let p = sample_ball_volume(&mut rng, 2.0);
        assert!(p.length() <= 2.0 + 1e-9);
    }
}

#[test]
fn ball_volume_density_is_uniform() {
    // cubed distance over r^3 should be uniform on [0, 1]
    let mut rng = StdRng::seed_from_u64(5);
    let radius: f64 = 3.0;
    let samples = 20_000;
    let mut bins = [0usize; 10];
    let mut sum = 0.0;

    for _ in 0..samples {
        let u = sample_ball_volume(&mut rng, radius).length().powi(3) / radius.powi(3);
        sum += u;
        bins[((u * 10.0).floor() as usize).min(9)] += 1;
    }

    assert_abs_diff_eq!(sum / samples as f64, 0.5, epsilon = 0.02);
    let expected = samples / 10;
    for count in bins {
        assert!(count.abs_diff(expected) < expected / 7, "bins: {:?}", bins);
    }
}

#[test]
fn distributions_match_the_plain_samplers() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        assert_eq!(a.sample(SphereSurface { radius: 1.5 }), sample_sphere_surface(&mut b, 1.5));
        assert_eq!(a.sample(BallVolume { radius: 0.5 }), sample_ball_volume(&mut b, 0.5));
    }
}

#[test]
fn same_seed_replays_same_samples() {
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..50).map(|_| sample_ball_volume(&mut rng, 1.0)).collect::<Vec<_>>()
    };

    assert_eq!(draw(9), draw(9));
    assert_ne!(draw(9), draw(10));
}
