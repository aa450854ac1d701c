//! Pole-biased positions on the unit sphere.
//!
//! This is a visual heuristic, not a density-corrected distribution. A
//! candidate polar angle `acos(u / 2)` only selects which of two ranges the
//! final angle is redrawn from:
//!
//! - mid-band candidates (`|cos| < 0.3`) redraw from `[π, 3π)`, i.e. a full
//!   turn starting at the south pole;
//! - everything else redraws from `[0.8π, π)`, hugging the south pole.

use crate::constants::{MID_BAND_COS, MID_BAND_PHI, POLE_PHI};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Which redraw range a polar-angle sample came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolarBand {
    MidBand,
    Pole,
}

/// Classify the candidate angle produced from `u` in `[0, 1)`.
#[inline]
pub fn classify_candidate(u: f32) -> PolarBand {
    let phi0 = (0.5 * u).acos();
    if phi0.cos().abs() < MID_BAND_COS {
        PolarBand::MidBand
    } else {
        PolarBand::Pole
    }
}

/// Draw a polar angle using the two-branch rule.
pub fn polar_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    polar_angle_with_band(rng).0
}

/// Like [`polar_angle`], also reporting which range the angle was drawn from.
pub fn polar_angle_with_band<R: Rng + ?Sized>(rng: &mut R) -> (f32, PolarBand) {
    let u: f32 = rng.gen();
    let band = classify_candidate(u);
    let (lo, hi) = match band {
        PolarBand::MidBand => MID_BAND_PHI,
        PolarBand::Pole => POLE_PHI,
    };
    (rng.gen_range(lo..hi), band)
}

/// Spherical to Cartesian with `z` as the polar axis.
#[inline]
pub fn spherical_to_cartesian(theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}

/// A point on the unit sphere, denser toward the poles.
pub fn sample_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = polar_angle(rng);
    spherical_to_cartesian(theta, phi)
}

/// A point on a shell of the given radius.
pub fn sample_on_shell<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    sample_unit_sphere(rng) * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_bands_split_at_sixty_percent() {
        // cos(acos(u/2)) = u/2, so the mid band is u < 0.6
        assert_eq!(classify_candidate(0.0), PolarBand::MidBand);
        assert_eq!(classify_candidate(0.59), PolarBand::MidBand);
        assert_eq!(classify_candidate(0.61), PolarBand::Pole);
        assert_eq!(classify_candidate(0.99), PolarBand::Pole);
    }
}
