/// Built-in camera controllers: mode selection, key bindings and the
/// per-update motion for each mode.
///
/// The controller keeps the camera's orbit around its target as a yaw /
/// pitch / distance triple. Yaw is the angle of `position - target` around
/// world Y (0 = on +Z), pitch its elevation above the XZ plane.

use glam::Vec3;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use crate::camera::Camera3D;
use crate::error::{Error, Result};
use crate::input::InputState;
use super::config::CameraSettings;

/// Camera control mode applied by `RenderContext::update_camera`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// No automatic motion; the caller drives the camera
    #[default]
    Custom,
    /// Orbit / pan / zoom around the target with the mouse
    Free,
    /// Constant rotation around the target
    Orbital,
    /// Move with keys, look with the mouse
    FirstPerson,
    /// Move the target with keys, orbit behind it with the mouse
    ThirdPerson,
}

impl CameraMode {
    /// Raw mode code
    pub fn code(self) -> i32 {
        match self {
            CameraMode::Custom => 0,
            CameraMode::Free => 1,
            CameraMode::Orbital => 2,
            CameraMode::FirstPerson => 3,
            CameraMode::ThirdPerson => 4,
        }
    }

    fn grabs_cursor(self) -> bool {
        matches!(self, CameraMode::FirstPerson | CameraMode::ThirdPerson)
    }
}

impl TryFrom<i32> for CameraMode {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(CameraMode::Custom),
            1 => Ok(CameraMode::Free),
            2 => Ok(CameraMode::Orbital),
            3 => Ok(CameraMode::FirstPerson),
            4 => Ok(CameraMode::ThirdPerson),
            other => Err(Error::InvalidCameraMode(other)),
        }
    }
}

/// Key and button bindings read by the controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraControls {
    /// Held with the pan button to rotate the free camera
    pub alt_key: KeyCode,
    /// Held with alt + pan button to zoom the free camera smoothly
    pub smooth_zoom_key: KeyCode,
    pub front_key: KeyCode,
    pub back_key: KeyCode,
    pub right_key: KeyCode,
    pub left_key: KeyCode,
    pub up_key: KeyCode,
    pub down_key: KeyCode,
    /// Mouse button for free camera pan / rotate / zoom
    pub pan_button: MouseButton,
}

impl Default for CameraControls {
    fn default() -> Self {
        Self {
            alt_key: KeyCode::AltLeft,
            smooth_zoom_key: KeyCode::ControlLeft,
            front_key: KeyCode::KeyW,
            back_key: KeyCode::KeyS,
            right_key: KeyCode::KeyD,
            left_key: KeyCode::KeyA,
            up_key: KeyCode::KeyE,
            down_key: KeyCode::KeyQ,
            pan_button: MouseButton::Middle,
        }
    }
}

/// Controller state carried between updates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct ControlState {
    pub mode: CameraMode,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Unit vector from target to position for the given angles.
pub(crate) fn orbit_direction(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

fn axis(input: &InputState, positive: KeyCode, negative: KeyCode) -> f32 {
    let mut value = 0.0;
    if input.is_key_down(positive) {
        value += 1.0;
    }
    if input.is_key_down(negative) {
        value -= 1.0;
    }
    value
}

impl ControlState {
    /// Capture the camera's current orbit and switch to `mode`.
    pub fn select(&mut self, camera: &Camera3D, mode: CameraMode, input: &mut InputState) {
        let offset = camera.position() - camera.target();
        let horizontal = (offset.x * offset.x + offset.z * offset.z).sqrt();

        self.mode = mode;
        self.distance = offset.length();
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = offset.y.atan2(horizontal);

        input.set_cursor_grabbed(mode.grabs_cursor());
    }

    /// Advance the camera one update for the selected mode.
    pub fn update(
        &mut self,
        camera: &mut Camera3D,
        input: &InputState,
        controls: &CameraControls,
        settings: &CameraSettings,
    ) {
        match self.mode {
            CameraMode::Custom => {}
            CameraMode::Free => self.update_free(camera, input, controls, settings),
            CameraMode::Orbital => self.update_orbital(camera, input, settings),
            CameraMode::FirstPerson => self.update_first_person(camera, input, controls, settings),
            CameraMode::ThirdPerson => self.update_third_person(camera, input, controls, settings),
        }
    }

    fn zoom(&mut self, input: &InputState, settings: &CameraSettings, min: f32) {
        let wheel = input.wheel_move();
        if wheel != 0.0 {
            self.distance = (self.distance - wheel * settings.mouse_scroll_sensitivity)
                .clamp(min, settings.free_distance_max);
        }
    }

    fn clamp_pitch(&mut self, settings: &CameraSettings) {
        let limit = settings.max_pitch();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    fn place_on_orbit(&self, camera: &mut Camera3D) {
        let position = camera.target() + orbit_direction(self.yaw, self.pitch) * self.distance;
        camera.set_position(position);
    }

    fn update_free(
        &mut self,
        camera: &mut Camera3D,
        input: &InputState,
        controls: &CameraControls,
        settings: &CameraSettings,
    ) {
        self.zoom(input, settings, settings.free_distance_min);

        if input.is_mouse_button_down(controls.pan_button) {
            let delta = input.mouse_delta();
            let alt = input.is_key_down(controls.alt_key);
            let smooth_zoom = input.is_key_down(controls.smooth_zoom_key);

            if alt && smooth_zoom {
                self.distance = (self.distance + delta.y * settings.smooth_zoom_sensitivity)
                    .clamp(settings.free_distance_min, settings.free_distance_max);
            } else if alt {
                self.yaw -= delta.x * settings.free_mouse_sensitivity;
                self.pitch += delta.y * settings.free_mouse_sensitivity;
                self.clamp_pitch(settings);
            } else {
                let forward = -orbit_direction(self.yaw, self.pitch);
                let right = forward.cross(Vec3::Y).normalize_or_zero();
                let up = right.cross(forward);
                let scale = settings.free_mouse_sensitivity * self.distance / settings.panning_divider;
                let pan = (-right * delta.x + up * delta.y) * scale;
                camera.set_target(camera.target() + pan);
            }
        }

        self.place_on_orbit(camera);
    }

    fn update_orbital(&mut self, camera: &mut Camera3D, input: &InputState, settings: &CameraSettings) {
        self.yaw += settings.orbital_speed;
        self.zoom(input, settings, settings.free_distance_min);
        self.place_on_orbit(camera);
    }

    /// Yaw-aligned movement from the bound keys, in world units.
    fn movement(&self, input: &InputState, controls: &CameraControls, settings: &CameraSettings) -> Vec3 {
        let forward = Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos());
        let right = Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin());

        let motion = forward * axis(input, controls.front_key, controls.back_key)
            + right * axis(input, controls.right_key, controls.left_key)
            + Vec3::Y * axis(input, controls.up_key, controls.down_key);

        motion * settings.move_speed
    }

    fn mouse_look(&mut self, input: &InputState, settings: &CameraSettings) {
        let delta = input.mouse_delta();
        self.yaw -= delta.x * settings.first_person_mouse_sensitivity;
        self.pitch += delta.y * settings.first_person_mouse_sensitivity;
        self.clamp_pitch(settings);
    }

    fn update_first_person(
        &mut self,
        camera: &mut Camera3D,
        input: &InputState,
        controls: &CameraControls,
        settings: &CameraSettings,
    ) {
        self.mouse_look(input, settings);

        let position = camera.position() + self.movement(input, controls, settings);
        camera.set_position(position);
        camera.set_target(position - orbit_direction(self.yaw, self.pitch));
    }

    fn update_third_person(
        &mut self,
        camera: &mut Camera3D,
        input: &InputState,
        controls: &CameraControls,
        settings: &CameraSettings,
    ) {
        self.mouse_look(input, settings);
        self.zoom(input, settings, settings.third_person_min_distance);

        camera.set_target(camera.target() + self.movement(input, controls, settings));
        self.place_on_orbit(camera);
    }
}

#[cfg(test)]
#[path = "controls_tests.rs"]
mod tests;
