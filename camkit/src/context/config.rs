/// Configuration for `RenderContext` and the built-in camera controllers.

use crate::error::{Error, Result};

/// Screen and clip-plane configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextConfig {
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Near clip distance used by every projection
    pub near_plane: f32,
    /// Far clip distance used by every projection
    pub far_plane: f32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 450,
            near_plane: 0.01,
            far_plane: 1000.0,
        }
    }
}

impl ContextConfig {
    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near_plane = near;
        self.far_plane = far;
        self
    }

    /// Check that the screen is non-empty and `0 < near < far`.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(Error::InvalidViewport(format!(
                "screen size {}x{} is empty",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.near_plane > 0.0 && self.far_plane > self.near_plane) {
            return Err(Error::InvalidViewport(format!(
                "clip planes near={} far={} must satisfy 0 < near < far",
                self.near_plane, self.far_plane
            )));
        }
        Ok(())
    }
}

/// Tuning constants for the built-in camera controllers.
///
/// Per-update quantities: the controllers are frame-driven, not time-driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Distance change per wheel line (free, orbital, third person)
    pub mouse_scroll_sensitivity: f32,
    /// Radians per pixel when rotating / panning the free camera
    pub free_mouse_sensitivity: f32,
    /// Target distance per pixel for smooth zoom
    pub smooth_zoom_sensitivity: f32,
    pub free_distance_min: f32,
    pub free_distance_max: f32,
    /// Pitch limit in degrees, applied symmetrically
    pub max_pitch_degrees: f32,
    /// Larger values pan more slowly
    pub panning_divider: f32,
    /// Radians of yaw per update in orbital mode
    pub orbital_speed: f32,
    /// Radians per pixel for first/third person mouse look
    pub first_person_mouse_sensitivity: f32,
    /// World units per update for first/third person movement
    pub move_speed: f32,
    pub third_person_min_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            mouse_scroll_sensitivity: 1.5,
            free_mouse_sensitivity: 0.01,
            smooth_zoom_sensitivity: 0.05,
            free_distance_min: 0.3,
            free_distance_max: 120.0,
            max_pitch_degrees: 85.0,
            panning_divider: 5.1,
            orbital_speed: 0.01,
            first_person_mouse_sensitivity: 0.003,
            move_speed: 0.1,
            third_person_min_distance: 1.2,
        }
    }
}

impl CameraSettings {
    /// Pitch limit in radians.
    pub fn max_pitch(&self) -> f32 {
        self.max_pitch_degrees.to_radians()
    }
}
