//! Camera shared by the web and native frontends.
//!
//! Kept free of platform-specific APIs; each frontend builds one from its
//! surface size every frame.

use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Vertical field of view of the sketch-style default camera.
pub const SKETCH_FOVY: f32 = PI / 3.0;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera placed so that one world unit at `z = 0` spans one pixel of a
    /// `width` x `height` surface.
    pub fn sketch_default(width: u32, height: u32) -> Self {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        let eye_z = (h * 0.5) / (SKETCH_FOVY * 0.5).tan();
        Self {
            eye: Vec3::new(0.0, 0.0, eye_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: w / h,
            fovy_radians: SKETCH_FOVY,
            znear: eye_z / 10.0,
            zfar: eye_z * 10.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Pixels per world unit at view depth 1 on a surface `height_px` tall.
    pub fn focal_px(&self, height_px: u32) -> f32 {
        height_px.max(1) as f32 * 0.5 / (self.fovy_radians * 0.5).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sketch_camera_maps_units_to_pixels_at_origin() {
        let cam = Camera::sketch_default(800, 600);
        // focal length / depth of the z = 0 plane = 1 pixel per unit
        assert!((cam.focal_px(600) / cam.eye.z - 1.0).abs() < 1e-5);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!(cam.znear < cam.eye.z && cam.eye.z < cam.zfar);
    }
}
