use glam::{Mat4, Vec3};

/// One small sphere to be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereDraw {
    pub center: Vec3,
    pub radius: f32,
    pub color: &'static str,
}

/// Receives the draw calls issued by the frame driver.
///
/// Calls arrive in frame order: `clear`, `set_transform`, then one `sphere`
/// per point in creation order.
pub trait DrawSink {
    fn clear(&mut self);
    fn set_transform(&mut self, model: Mat4);
    fn sphere(&mut self, draw: SphereDraw);
}

/// Records one frame of draw calls so a renderer can upload them in a batch.
#[derive(Clone, Debug)]
pub struct DrawList {
    pub model: Mat4,
    pub spheres: Vec<SphereDraw>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            spheres: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            model: Mat4::IDENTITY,
            spheres: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl DrawSink for DrawList {
    fn clear(&mut self) {
        self.model = Mat4::IDENTITY;
        self.spheres.clear();
    }

    fn set_transform(&mut self, model: Mat4) {
        self.model = model;
    }

    fn sphere(&mut self, draw: SphereDraw) {
        self.spheres.push(draw);
    }
}
