use crate::constants::SCROLL_ZOOM_PER_PX;

/// Map a page scroll offset (pixels) to a zoom factor in `[1, max_scale_factor]`.
///
/// Negative and NaN offsets behave like an unscrolled page.
#[inline]
pub fn scale_factor(scroll_offset: f32, max_scale_factor: f32) -> f32 {
    let offset = if scroll_offset.is_nan() {
        0.0
    } else {
        scroll_offset.max(0.0)
    };
    (1.0 + offset * SCROLL_ZOOM_PER_PX).clamp(1.0, max_scale_factor.max(1.0))
}

/// Shell radius for a given scroll offset.
#[inline]
pub fn shell_radius(base_radius: f32, scroll_offset: f32, max_scale_factor: f32) -> f32 {
    base_radius * scale_factor(scroll_offset, max_scale_factor)
}
