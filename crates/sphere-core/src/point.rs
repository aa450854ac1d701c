use crate::constants::*;
use crate::draw::{DrawSink, SphereDraw};
use crate::sampler::sample_on_shell;
use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;

/// One dot of the cloud. Only `position` changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub color: &'static str,
    pub size_factor: f32,
    /// Unit heading in the y/z plane; sets direction of drift, not distance.
    pub direction: Vec3,
}

impl Point {
    pub fn create<R: Rng + ?Sized>(rng: &mut R, shell_radius: f32) -> Self {
        let position = sample_on_shell(rng, shell_radius);
        let color = *PALETTE.choose(rng).unwrap_or(&PALETTE[0]);
        let size_factor = *SIZE_FACTORS.choose(rng).unwrap_or(&1.0);
        let direction = Vec3::new(0.0, rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
            .try_normalize()
            .unwrap_or(Vec3::Y);
        Self {
            position,
            color,
            size_factor,
            direction,
        }
    }

    /// Drift one step, snap back onto the shell, then bob vertically.
    pub fn update(&mut self, frame_index: u64, shell_radius: f32) {
        let moved = self.position + self.direction * DRIFT_STEP;
        self.position = moved.try_normalize().unwrap_or(Vec3::Y) * shell_radius;
        self.position.y += (frame_index as f32 * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
    }

    /// On-screen sphere radius for the current collective scale.
    #[inline]
    pub fn draw_radius(&self, current_scale: f32, shell_radius: f32) -> f32 {
        if shell_radius <= 0.0 {
            return 0.0;
        }
        POINT_RADIUS_BASE * (current_scale / shell_radius) * self.size_factor
    }

    pub fn render<S: DrawSink + ?Sized>(&self, current_scale: f32, shell_radius: f32, sink: &mut S) {
        sink.sphere(SphereDraw {
            center: self.position,
            radius: self.draw_radius(current_scale, shell_radius),
            color: self.color,
        });
    }
}
