/// Camera3D: position/orientation value in 3D space.
///
/// A plain `Copy` value. Every operation that needs rendering state
/// (scopes, control modes, input, draw commands, viewport size) forwards
/// to exactly one `RenderContext` entry point with the camera's current
/// fields, and returns `&mut Self` so calls can be chained.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use winit::keyboard::KeyCode;
use crate::context::{CameraMode, RenderContext};
use crate::types::{Color, Ray, Rectangle, Texture2D};

/// Camera projection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraProjection {
    /// Depth-scaled projection; `fovy` is the vertical aperture in degrees
    #[default]
    Perspective,
    /// Depth-independent projection; `fovy` is the near-plane width
    Orthographic,
    /// Any other raw code, carried through unchanged. Renders with an
    /// identity projection.
    Other(i32),
}

impl CameraProjection {
    /// Raw projection code used by `RawCamera3D`
    pub fn code(self) -> i32 {
        match self {
            CameraProjection::Perspective => 0,
            CameraProjection::Orthographic => 1,
            CameraProjection::Other(code) => code,
        }
    }
}

impl From<i32> for CameraProjection {
    fn from(code: i32) -> Self {
        match code {
            0 => CameraProjection::Perspective,
            1 => CameraProjection::Orthographic,
            other => CameraProjection::Other(other),
        }
    }
}

/// Plain C-layout camera record.
///
/// This is the representation handed across FFI or GPU boundaries.
/// `Camera3D` mirrors it field for field.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct RawCamera3D {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fovy: f32,
    /// 0 = perspective, 1 = orthographic, anything else is kept as-is
    pub projection: i32,
}

/// 3D camera: position, look-at target, up vector, field of view, projection.
///
/// `Default` zero-initializes every field (including `up`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera3D {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fovy: f32,
    projection: CameraProjection,
}

/// Alias kept for callers that think of it simply as "the camera".
pub type Camera = Camera3D;

impl Camera3D {
    /// Create a camera at `position` looking at the origin, Y up,
    /// `fovy = 0`, perspective projection.
    ///
    /// Chain `with_*` to override the remaining fields.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 0.0,
            projection: CameraProjection::Perspective,
        }
    }

    /// Create a camera with every field given explicitly.
    pub fn from_parts(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fovy: f32,
        projection: CameraProjection,
    ) -> Self {
        Self { position, target, up, fovy, projection }
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    pub fn with_fovy(mut self, fovy: f32) -> Self {
        self.fovy = fovy;
        self
    }

    pub fn with_projection(mut self, projection: CameraProjection) -> Self {
        self.projection = projection;
        self
    }

    /// Overwrite every field from a raw record.
    pub fn assign(&mut self, raw: &RawCamera3D) -> &mut Self {
        *self = Camera3D::from(*raw);
        self
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point the camera looks at.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up vector (rotation over the view axis).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical aperture in degrees (perspective) or near-plane width (orthographic).
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    pub fn projection(&self) -> CameraProjection {
        self.projection
    }

    // ===== SETTERS (unchecked assignment) =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    pub fn set_fovy(&mut self, fovy: f32) {
        self.fovy = fovy;
    }

    pub fn set_projection(&mut self, projection: CameraProjection) {
        self.projection = projection;
    }

    // ===== RENDER CONTEXT FORWARDING =====

    /// Start a 3D drawing scope with this camera.
    ///
    /// Must be paired with `end_mode` before another incompatible mode begins.
    pub fn begin_mode(&mut self, ctx: &mut RenderContext) -> &mut Self {
        ctx.begin_mode_3d(self);
        self
    }

    /// End the 3D drawing scope and return to 2D.
    pub fn end_mode(&mut self, ctx: &mut RenderContext) -> &mut Self {
        ctx.end_mode_3d();
        self
    }

    /// View transform for the current fields.
    pub fn matrix(&self, ctx: &RenderContext) -> Mat4 {
        ctx.camera_matrix(self)
    }

    /// Select the built-in control mode applied by `update`.
    pub fn set_mode(&mut self, ctx: &mut RenderContext, mode: CameraMode) -> &mut Self {
        ctx.set_camera_mode(self, mode);
        self
    }

    /// Key combined with the mouse to rotate the free camera.
    pub fn set_alt_control(&mut self, ctx: &mut RenderContext, alt_key: KeyCode) -> &mut Self {
        ctx.set_camera_alt_control(alt_key);
        self
    }

    /// Key combined with the mouse for smooth zoom on the free camera.
    pub fn set_smooth_zoom_control(
        &mut self,
        ctx: &mut RenderContext,
        smooth_zoom_key: KeyCode,
    ) -> &mut Self {
        ctx.set_camera_smooth_zoom_control(smooth_zoom_key);
        self
    }

    /// Movement keys for the first and third person cameras.
    #[allow(clippy::too_many_arguments)]
    pub fn set_move_controls(
        &mut self,
        ctx: &mut RenderContext,
        front_key: KeyCode,
        back_key: KeyCode,
        right_key: KeyCode,
        left_key: KeyCode,
        up_key: KeyCode,
        down_key: KeyCode,
    ) -> &mut Self {
        ctx.set_camera_move_controls(front_key, back_key, right_key, left_key, up_key, down_key);
        self
    }

    /// Advance position/target for the selected control mode.
    ///
    /// Orbit-based modes rebuild `position` from the orbit captured by
    /// `set_mode`; call `set_mode` again after moving the camera by hand.
    pub fn update(&mut self, ctx: &mut RenderContext) -> &mut Self {
        ctx.update_camera(self);
        self
    }

    /// Ray from the camera through a screen-space mouse position.
    pub fn mouse_ray(&self, ctx: &RenderContext, mouse_position: Vec2) -> Ray {
        ctx.mouse_ray(mouse_position, self)
    }

    /// Screen-space position of a world-space point.
    pub fn world_to_screen(&self, ctx: &RenderContext, position: Vec3) -> Vec2 {
        ctx.world_to_screen(position, self)
    }

    /// Draw a whole texture as a camera-facing quad.
    pub fn draw_billboard(
        &mut self,
        ctx: &mut RenderContext,
        texture: &Texture2D,
        center: Vec3,
        size: f32,
        tint: Color,
    ) -> &mut Self {
        ctx.draw_billboard(self, texture, center, size, tint);
        self
    }

    /// Draw the `source` region of a texture as a camera-facing quad.
    pub fn draw_billboard_rec(
        &mut self,
        ctx: &mut RenderContext,
        texture: &Texture2D,
        source: Rectangle,
        center: Vec3,
        size: Vec2,
        tint: Color,
    ) -> &mut Self {
        ctx.draw_billboard_rec(self, texture, source, center, size, tint);
        self
    }

    /// Draw a billboard with an explicit up axis, origin and rotation (degrees).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_billboard_pro(
        &mut self,
        ctx: &mut RenderContext,
        texture: &Texture2D,
        source: Rectangle,
        center: Vec3,
        up: Vec3,
        size: Vec2,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    ) -> &mut Self {
        ctx.draw_billboard_pro(self, texture, source, center, up, size, origin, rotation, tint);
        self
    }
}

impl From<RawCamera3D> for Camera3D {
    fn from(raw: RawCamera3D) -> Self {
        Self {
            position: Vec3::from_array(raw.position),
            target: Vec3::from_array(raw.target),
            up: Vec3::from_array(raw.up),
            fovy: raw.fovy,
            projection: CameraProjection::from(raw.projection),
        }
    }
}

impl From<Camera3D> for RawCamera3D {
    fn from(camera: Camera3D) -> Self {
        Self {
            position: camera.position.to_array(),
            target: camera.target.to_array(),
            up: camera.up.to_array(),
            fovy: camera.fovy,
            projection: camera.projection.code(),
        }
    }
}

#[cfg(test)]
#[path = "camera3d_tests.rs"]
mod tests;
