use sphere_core::scroll::{scale_factor, shell_radius};
use sphere_core::{BASE_RADIUS, MAX_SCALE_FACTOR};

#[test]
fn unscrolled_page_keeps_base_radius() {
    assert_eq!(scale_factor(0.0, MAX_SCALE_FACTOR), 1.0);
    assert_eq!(shell_radius(BASE_RADIUS, 0.0, MAX_SCALE_FACTOR), BASE_RADIUS);
}

#[test]
fn zoom_grows_linearly_below_the_cap() {
    assert!((scale_factor(50.0, MAX_SCALE_FACTOR) - 2.0).abs() < 1e-6);
    assert!((scale_factor(100.0, MAX_SCALE_FACTOR) - 3.0).abs() < 1e-6);
}

#[test]
fn boundary_offset_lands_exactly_on_the_cap() {
    assert_eq!(scale_factor(200.0, MAX_SCALE_FACTOR), 5.0);
    assert_eq!(
        shell_radius(BASE_RADIUS, 200.0, MAX_SCALE_FACTOR),
        BASE_RADIUS * 5.0
    );
}

#[test]
fn large_offsets_saturate() {
    assert_eq!(scale_factor(1000.0, MAX_SCALE_FACTOR), MAX_SCALE_FACTOR);
    assert_eq!(
        shell_radius(BASE_RADIUS, 1000.0, MAX_SCALE_FACTOR),
        shell_radius(BASE_RADIUS, 200.0, MAX_SCALE_FACTOR)
    );
    assert_eq!(scale_factor(f32::MAX, MAX_SCALE_FACTOR), MAX_SCALE_FACTOR);
}

#[test]
fn bogus_offsets_read_as_unscrolled() {
    assert_eq!(scale_factor(-40.0, MAX_SCALE_FACTOR), 1.0);
    assert_eq!(scale_factor(f32::NAN, MAX_SCALE_FACTOR), 1.0);
}
