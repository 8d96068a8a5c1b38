pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod presets;
pub mod schedule;
pub mod state;

pub use color::Rgb;
pub use config::{ConfigOverrides, Palette, SurfaceConfig};
pub use error::ConfigError;
pub use geometry::{uv_sphere, CurveTable, MeshData, QuadraticBezier};
pub use input::{normalize_pointer, scroll_progress, ElementRect, InputSnapshot, InputSource, InputState};
pub use layout::{layer_point_count, Lights, LineStroke, PointLayer, PulseSeed, SceneLayout};
pub use presets::{PresetTable, Resolved};
pub use schedule::{FrameDriver, FrameTask, LoopHandle};
pub use state::{pulse_visual, Camera, GroupTransform, MotionParams, PulseVisual, SceneState};
