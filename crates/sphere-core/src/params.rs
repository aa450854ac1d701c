use crate::constants::*;

/// Tunables for a [`SceneState`](crate::SceneState).
///
/// `Default` yields the shipped values from [`constants`](crate::constants);
/// tests build smaller variants to keep runs short.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub max_points: usize,
    pub base_radius: f32,
    pub max_scale_factor: f32,
    pub point_count_spring: f32,
    pub scale_spring: f32,
    pub initial_scale: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
            base_radius: BASE_RADIUS,
            max_scale_factor: MAX_SCALE_FACTOR,
            point_count_spring: POINT_COUNT_SPRING,
            scale_spring: SCALE_SPRING,
            initial_scale: INITIAL_SCALE,
        }
    }
}
