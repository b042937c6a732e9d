//! Render context: the rendering state camera operations forward to.

mod config;
mod controls;
mod render_context;

pub use config::{CameraSettings, ContextConfig};
pub use controls::{CameraControls, CameraMode};
pub use render_context::RenderContext;
