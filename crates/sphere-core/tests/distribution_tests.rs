use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sphere_core::sampler::{
    polar_angle_with_band, sample_on_shell, sample_unit_sphere, spherical_to_cartesian, PolarBand,
};
use sphere_core::{Point, PALETTE};
use std::f32::consts::PI;

#[test]
fn unit_samples_lie_on_the_unit_sphere() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..2000 {
        let v = sample_unit_sphere(&mut rng);
        assert!((v.length() - 1.0).abs() < 1e-5, "{v:?}");
    }
}

#[test]
fn shell_samples_match_the_requested_radius() {
    let mut rng = StdRng::seed_from_u64(2);
    for radius in [200.0_f32, 640.0, 1000.0] {
        for _ in 0..200 {
            let v = sample_on_shell(&mut rng, radius);
            assert!((v.length() - radius).abs() < radius * 1e-5);
        }
    }
}

#[test]
fn polar_angles_come_from_the_two_ranges() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut mid = 0usize;
    let n = 10_000;
    for _ in 0..n {
        let (phi, band) = polar_angle_with_band(&mut rng);
        match band {
            PolarBand::MidBand => {
                mid += 1;
                assert!((PI..3.0 * PI).contains(&phi), "{phi}");
            }
            PolarBand::Pole => assert!((0.8 * PI..PI).contains(&phi), "{phi}"),
        }
    }
    // candidate u < 0.6 selects the mid band
    let frac = mid as f32 / n as f32;
    assert!((frac - 0.6).abs() < 0.03, "mid-band fraction {frac}");
}

#[test]
fn distribution_crowds_the_pole() {
    let mut rng = StdRng::seed_from_u64(4);
    let n = 10_000;
    let cap = (0.8 * PI).cos();
    let near_pole = (0..n)
        .filter(|_| sample_unit_sphere(&mut rng).z <= cap + 1e-4)
        .count();
    // A uniform sphere puts ~10% of points in this cap; the pole branch alone
    // contributes 40%.
    assert!(near_pole as f32 / n as f32 > 0.35);
}

#[test]
fn spherical_axes() {
    let north = spherical_to_cartesian(0.0, 0.0);
    assert!((north.z - 1.0).abs() < 1e-6);
    let equator = spherical_to_cartesian(0.0, PI / 2.0);
    assert!((equator.x - 1.0).abs() < 1e-6);
    assert!(equator.z.abs() < 1e-6);
}

#[test]
fn new_points_start_on_the_shell() {
    let mut rng = StdRng::seed_from_u64(5);
    for radius in [200.0_f32, 1000.0] {
        for _ in 0..100 {
            let p = Point::create(&mut rng, radius);
            assert!((p.position.length() - radius).abs() < radius * 1e-5);
            assert_eq!(p.direction.x, 0.0);
            assert!((p.direction.length() - 1.0).abs() < 1e-5);
        }
    }
}

#[test]
fn update_reprojects_then_bobs() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut p = Point::create(&mut rng, 200.0);

    p.update(0, 200.0);
    assert!((p.position.length() - 200.0).abs() < 1e-3);

    // Bob offset is added after re-projection.
    let frame = 300_u64;
    let mut q = p.clone();
    q.update(frame, 350.0);
    let mut reference = p.clone();
    reference.update(0, 350.0);
    let bob = (frame as f32 * 0.005).sin() * 0.03;
    assert!((q.position.y - reference.position.y - bob).abs() < 1e-4);
    assert_eq!(q.position.x, reference.position.x);
    assert_eq!(q.position.z, reference.position.z);
}

#[test]
fn update_through_the_center_falls_back_to_up() {
    // One drift step lands exactly on the origin.
    let mut p = Point {
        position: Vec3::new(0.0, -0.6, 0.0),
        color: PALETTE[0],
        size_factor: 1.0,
        direction: Vec3::Y,
    };
    p.update(0, 200.0);
    assert_eq!(p.position, Vec3::new(0.0, 200.0, 0.0));
}

#[test]
fn draw_radius_scales_with_collective_size() {
    let mut rng = StdRng::seed_from_u64(7);
    let p = Point::create(&mut rng, 200.0);
    assert_eq!(p.draw_radius(200.0, 200.0), 0.6 * p.size_factor);
    assert_eq!(p.draw_radius(0.0, 200.0), 0.0);
    assert_eq!(p.draw_radius(100.0, 0.0), 0.0);
}
