//! Camera module: the `Camera3D` value type and its projection math.
//!
//! The camera is a plain value owned by the caller. Anything that needs
//! rendering state goes through a `RenderContext` passed in explicitly.

mod camera3d;
pub mod projection;

pub use camera3d::{Camera, Camera3D, CameraProjection, RawCamera3D};
