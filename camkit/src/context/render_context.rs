/// RenderContext: rendering state the camera forwards to.
///
/// Owns everything that is global in an immediate-mode renderer: screen
/// size, the active camera control mode and its key bindings, the input
/// snapshot, whether a 3D scope is open, and the recorded draw commands.
/// The caller owns the context and passes it to camera methods by reference.

use glam::{Mat4, Vec2, Vec3};
use winit::event::WindowEvent;
use winit::keyboard::KeyCode;
use crate::camera::{projection, Camera3D};
use crate::draw::{build_quad, BillboardKind, BillboardParams, CommandQueue, DrawCommand};
use crate::error::{Error, Result};
use crate::input::InputState;
use crate::types::{Color, Ray, Rectangle, Texture2D};
use super::config::{CameraSettings, ContextConfig};
use super::controls::{CameraControls, CameraMode, ControlState};

const SOURCE: &str = "camkit::RenderContext";

#[derive(Debug)]
pub struct RenderContext {
    config: ContextConfig,
    settings: CameraSettings,
    controls: CameraControls,
    control_state: ControlState,
    input: InputState,
    commands: CommandQueue,
    in_mode_3d: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from_valid_config(ContextConfig::default())
    }
}

impl RenderContext {
    /// Create a context for the given screen / clip configuration.
    pub fn new(config: ContextConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            crate::camkit_bail!(SOURCE, err);
        }
        crate::camkit_debug!(
            SOURCE,
            "Created {}x{} context (near={}, far={})",
            config.screen_width, config.screen_height, config.near_plane, config.far_plane
        );
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ContextConfig) -> Self {
        Self {
            config,
            settings: CameraSettings::default(),
            controls: CameraControls::default(),
            control_state: ControlState::default(),
            input: InputState::new(),
            commands: CommandQueue::new(),
            in_mode_3d: false,
        }
    }

    // ===== STATE ACCESS =====

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: CameraSettings) {
        self.settings = settings;
    }

    /// Current key bindings.
    pub fn controls(&self) -> &CameraControls {
        &self.controls
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.control_state.mode
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn commands(&self) -> &CommandQueue {
        &self.commands
    }

    /// Take every recorded command, leaving the queue empty.
    pub fn drain_commands(&mut self) -> Vec<DrawCommand> {
        self.commands.drain()
    }

    /// Whether `begin_mode_3d` has been called without a matching `end_mode_3d`.
    pub fn is_in_mode_3d(&self) -> bool {
        self.in_mode_3d
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.config.screen_width as f32, self.config.screen_height as f32)
    }

    pub fn aspect(&self) -> f32 {
        self.config.screen_width as f32 / self.config.screen_height as f32
    }

    /// Resize the screen. Empty sizes are rejected and leave the context unchanged.
    pub fn set_screen_size(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            crate::camkit_bail!(
                SOURCE,
                Error::InvalidViewport(format!("screen size {}x{} is empty", width, height))
            );
        }
        self.config.screen_width = width;
        self.config.screen_height = height;
        Ok(())
    }

    // ===== EVENT PLUMBING =====

    /// Route a winit window event to the screen size or the input snapshot.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    // Minimized: keep the last usable size
                    crate::camkit_debug!(SOURCE, "Ignoring empty resize {}x{}", size.width, size.height);
                    return true;
                }
                self.set_screen_size(size.width, size.height).is_ok()
            }
            other => self.input.handle_window_event(other),
        }
    }

    /// Reset per-frame input deltas. Call once per frame after updating cameras.
    pub fn end_frame(&mut self) {
        self.input.end_frame();
    }

    // ===== 3D SCOPE =====

    /// Open a 3D drawing scope using `camera`.
    pub fn begin_mode_3d(&mut self, camera: &Camera3D) {
        if self.in_mode_3d {
            crate::camkit_warn!(SOURCE, "begin_mode_3d called while a 3D scope is already open");
        }
        let view = self.camera_matrix(camera);
        let projection = self.projection_matrix(camera);
        self.commands.push(DrawCommand::BeginMode3D { view, projection });
        self.in_mode_3d = true;
    }

    /// Close the current 3D drawing scope.
    pub fn end_mode_3d(&mut self) {
        if !self.in_mode_3d {
            crate::camkit_warn!(SOURCE, "end_mode_3d called outside a 3D scope");
            return;
        }
        self.commands.push(DrawCommand::EndMode3D);
        self.in_mode_3d = false;
    }

    // ===== MATRICES AND QUERIES =====

    /// View transform for `camera`.
    pub fn camera_matrix(&self, camera: &Camera3D) -> Mat4 {
        projection::view_matrix(camera)
    }

    /// Projection transform for `camera` at the current screen aspect.
    pub fn projection_matrix(&self, camera: &Camera3D) -> Mat4 {
        projection::projection_matrix(camera, self.aspect(), self.config.near_plane, self.config.far_plane)
    }

    /// Ray from `camera` through the screen pixel `mouse_position`.
    pub fn mouse_ray(&self, mouse_position: Vec2, camera: &Camera3D) -> Ray {
        let size = self.screen_size();
        projection::mouse_ray(
            camera,
            mouse_position,
            size.x,
            size.y,
            self.config.near_plane,
            self.config.far_plane,
        )
    }

    /// Screen pixel of a world-space point, for the current screen size.
    pub fn world_to_screen(&self, position: Vec3, camera: &Camera3D) -> Vec2 {
        self.world_to_screen_ex(position, camera, self.config.screen_width, self.config.screen_height)
    }

    /// Screen pixel of a world-space point, for an explicit screen size.
    pub fn world_to_screen_ex(&self, position: Vec3, camera: &Camera3D, width: u32, height: u32) -> Vec2 {
        projection::world_to_screen(
            camera,
            position,
            width as f32,
            height as f32,
            self.config.near_plane,
            self.config.far_plane,
        )
    }

    // ===== CAMERA CONTROLS =====

    /// Select the control mode used by `update_camera`, starting from `camera`'s pose.
    pub fn set_camera_mode(&mut self, camera: &Camera3D, mode: CameraMode) {
        self.control_state.select(camera, mode, &mut self.input);
        crate::camkit_debug!(
            SOURCE,
            "Camera mode {:?} (distance {:.3}, yaw {:.3}, pitch {:.3})",
            mode, self.control_state.distance, self.control_state.yaw, self.control_state.pitch
        );
    }

    pub fn set_camera_alt_control(&mut self, alt_key: KeyCode) {
        self.controls.alt_key = alt_key;
    }

    pub fn set_camera_smooth_zoom_control(&mut self, smooth_zoom_key: KeyCode) {
        self.controls.smooth_zoom_key = smooth_zoom_key;
    }

    pub fn set_camera_move_controls(
        &mut self,
        front_key: KeyCode,
        back_key: KeyCode,
        right_key: KeyCode,
        left_key: KeyCode,
        up_key: KeyCode,
        down_key: KeyCode,
    ) {
        self.controls.front_key = front_key;
        self.controls.back_key = back_key;
        self.controls.right_key = right_key;
        self.controls.left_key = left_key;
        self.controls.up_key = up_key;
        self.controls.down_key = down_key;
    }

    /// Advance `camera` for the selected mode from the current input snapshot.
    pub fn update_camera(&mut self, camera: &mut Camera3D) {
        self.control_state.update(camera, &self.input, &self.controls, &self.settings);
        crate::camkit_trace!(
            SOURCE,
            "Camera updated: position {:?}, target {:?}",
            camera.position(), camera.target()
        );
    }

    // ===== BILLBOARDS =====

    /// Queue a whole-texture billboard of square `size`.
    pub fn draw_billboard(
        &mut self,
        camera: &Camera3D,
        texture: &Texture2D,
        center: Vec3,
        size: f32,
        tint: Color,
    ) {
        let params = BillboardParams {
            source: texture.full_source(),
            center,
            up: Vec3::Y,
            size: Vec2::splat(size),
            origin: Vec2::ZERO,
            rotation: 0.0,
            tint,
        };
        self.push_billboard(BillboardKind::Full, camera, texture, &params);
    }

    /// Queue a billboard showing `source` of `texture`, locked on world Y.
    pub fn draw_billboard_rec(
        &mut self,
        camera: &Camera3D,
        texture: &Texture2D,
        source: Rectangle,
        center: Vec3,
        size: Vec2,
        tint: Color,
    ) {
        let params = BillboardParams {
            source,
            center,
            up: Vec3::Y,
            size,
            origin: Vec2::ZERO,
            rotation: 0.0,
            tint,
        };
        self.push_billboard(BillboardKind::Rec, camera, texture, &params);
    }

    /// Queue a billboard with a custom up axis, rotation pivot and rotation.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_billboard_pro(
        &mut self,
        camera: &Camera3D,
        texture: &Texture2D,
        source: Rectangle,
        center: Vec3,
        up: Vec3,
        size: Vec2,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    ) {
        let params = BillboardParams { source, center, up, size, origin, rotation, tint };
        self.push_billboard(BillboardKind::Pro, camera, texture, &params);
    }

    fn push_billboard(
        &mut self,
        kind: BillboardKind,
        camera: &Camera3D,
        texture: &Texture2D,
        params: &BillboardParams,
    ) {
        if !self.in_mode_3d {
            crate::camkit_debug!(SOURCE, "Billboard for texture {} queued outside a 3D scope", texture.id);
        }
        let view = self.camera_matrix(camera);
        let quad = build_quad(kind, &view, texture, params);
        self.commands.push(DrawCommand::Billboard(quad));
    }
}

#[cfg(test)]
#[path = "render_context_tests.rs"]
mod tests;
