pub mod color;
pub mod constants;
pub mod draw;
pub mod gpu;
pub mod params;
pub mod point;
pub mod sampler;
pub mod scene;
pub mod scroll;
pub mod spring;
pub mod state;

pub use color::{parse_hex_color, ColorError};
pub use constants::*;
pub use draw::{DrawList, DrawSink, SphereDraw};
pub use params::SceneParams;
pub use point::Point;
pub use scene::{FrameInput, FrameStats, SceneRotation, SceneState};
pub use spring::{lerp, Spring};
pub use state::*;
