//! Scene state and the per-frame driver.
//!
//! [`SceneState::frame`] is the whole animation step: it is called once per
//! display refresh with the frame index and the scroll offset polled by the
//! frontend, and issues its draws into a [`DrawSink`].

use crate::constants::{ROTATION_HELD, ROTATION_INITIAL, VERTICAL_SHIFT_PER_FRAME};
use crate::draw::DrawSink;
use crate::params::SceneParams;
use crate::point::Point;
use crate::scroll;
use crate::spring::Spring;
use glam::Mat4;
use rand::Rng;

/// Rotation angles (radians) applied to the scene transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRotation {
    pub x: f32,
    pub z: f32,
}

impl Default for SceneRotation {
    fn default() -> Self {
        Self {
            x: ROTATION_INITIAL,
            z: ROTATION_INITIAL,
        }
    }
}

/// Inputs polled by the frontend for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// 1-based display frame counter.
    pub frame_index: u64,
    /// Page scroll offset in pixels.
    pub scroll_offset: f32,
}

/// Summary of one frame, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub spawned: usize,
    pub total: usize,
    pub shell_radius: f32,
    pub current_scale: f32,
}

pub struct SceneState {
    pub params: SceneParams,
    pub shell_radius: f32,
    pub rotation: SceneRotation,
    pub vertical_shift: f32,
    /// `target` is the target point count, `current` the fractional count.
    pub point_count: Spring,
    /// `target` tracks the shell radius, `current` is the collective radius.
    pub scale: Spring,
    points: Vec<Point>,
    saturated: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneParams::default())
    }
}

impl SceneState {
    pub fn new(params: SceneParams) -> Self {
        let base = params.base_radius;
        Self {
            shell_radius: base,
            rotation: SceneRotation::default(),
            vertical_shift: 0.0,
            // Target starts at the cap so the very first frame already spawns.
            point_count: Spring::new(0.0, params.max_points as f32, params.point_count_spring),
            scale: Spring::new(params.initial_scale, base, params.scale_spring),
            points: Vec::with_capacity(params.max_points),
            saturated: false,
            params,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Scroll handler: map the offset to the shell radius and retarget the scale spring.
    pub fn apply_scroll(&mut self, scroll_offset: f32) {
        self.shell_radius = scroll::shell_radius(
            self.params.base_radius,
            scroll_offset,
            self.params.max_scale_factor,
        );
        self.scale.target = self.shell_radius;
    }

    /// Scene transform for the current rotation and vertical shift.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_z(self.rotation.z + self.vertical_shift)
    }

    /// Number of points the current fractional count asks for.
    #[inline]
    pub fn wanted_points(&self) -> usize {
        let floor = self.point_count.current.max(0.0).floor() as usize;
        floor.min(self.params.max_points)
    }

    pub fn frame<R, S>(&mut self, input: FrameInput, rng: &mut R, sink: &mut S) -> FrameStats
    where
        R: Rng + ?Sized,
        S: DrawSink + ?Sized,
    {
        sink.clear();
        self.apply_scroll(input.scroll_offset);

        sink.set_transform(self.transform());
        // The transform is rebuilt every frame, so these are absolute angles.
        self.rotation = SceneRotation {
            x: ROTATION_HELD,
            z: ROTATION_HELD,
        };
        self.vertical_shift = input.frame_index as f32 * VERTICAL_SHIFT_PER_FRAME;

        self.point_count.step();
        let max = self.params.max_points as f32;
        if self.point_count.current < max {
            self.point_count.target = max;
        }
        self.scale.step();

        let before = self.points.len();
        let wanted = self.wanted_points();
        while self.points.len() < wanted {
            self.points.push(Point::create(rng, self.shell_radius));
        }
        let spawned = self.points.len() - before;
        if spawned > 0 {
            log::debug!(
                "[scene] spawned {} points (total {})",
                spawned,
                self.points.len()
            );
        }
        if !self.saturated && self.point_count.distance() < 1.0 {
            self.saturated = true;
            log::info!("[scene] population settled at {}", self.points.len());
        }

        let current_scale = self.scale.current;
        let shell_radius = self.shell_radius;
        for p in &mut self.points {
            p.update(input.frame_index, shell_radius);
            p.render(current_scale, shell_radius, sink);
        }

        FrameStats {
            spawned,
            total: self.points.len(),
            shell_radius,
            current_scale,
        }
    }
}
