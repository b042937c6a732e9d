/// Input snapshot polled by the camera controllers.
///
/// Feed it either directly (`press_key`, `set_mouse_position`, ...) or from
/// a winit event loop through `handle_window_event`. Call `end_frame` once
/// per frame after the camera update so per-frame deltas start over.

use glam::Vec2;
use rustc_hash::FxHashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pixels per wheel "line" when a device reports pixel deltas.
const PIXELS_PER_WHEEL_LINE: f32 = 100.0;

#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys_down: FxHashSet<KeyCode>,
    buttons_down: FxHashSet<MouseButton>,
    mouse_position: Vec2,
    previous_mouse_position: Vec2,
    wheel: f32,
    cursor_grabbed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== KEYBOARD =====

    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    // ===== MOUSE =====

    pub fn press_mouse_button(&mut self, button: MouseButton) {
        self.buttons_down.insert(button);
    }

    pub fn release_mouse_button(&mut self, button: MouseButton) {
        self.buttons_down.remove(&button);
    }

    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn set_mouse_position(&mut self, position: Vec2) {
        self.mouse_position = position;
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Mouse movement since the last `end_frame`.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_position - self.previous_mouse_position
    }

    /// Accumulate wheel movement in lines (positive = away from the user).
    pub fn add_wheel(&mut self, lines: f32) {
        self.wheel += lines;
    }

    /// Wheel movement since the last `end_frame`.
    pub fn wheel_move(&self) -> f32 {
        self.wheel
    }

    /// Whether a first/third person camera has captured the cursor.
    ///
    /// camkit only records the request; the windowing layer applies it.
    pub fn is_cursor_grabbed(&self) -> bool {
        self.cursor_grabbed
    }

    pub(crate) fn set_cursor_grabbed(&mut self, grabbed: bool) {
        self.cursor_grabbed = grabbed;
    }

    /// Reset per-frame deltas (mouse motion and wheel).
    pub fn end_frame(&mut self) {
        self.previous_mouse_position = self.mouse_position;
        self.wheel = 0.0;
    }

    /// Translate a winit window event. Returns `true` if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                match event.state {
                    ElementState::Pressed => self.press_key(code),
                    ElementState::Released => self.release_key(code),
                }
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                match state {
                    ElementState::Pressed => self.press_mouse_button(*button),
                    ElementState::Released => self.release_mouse_button(*button),
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.set_mouse_position(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_WHEEL_LINE,
                };
                self.add_wheel(lines);
                true
            }
            WindowEvent::Focused(false) => {
                self.keys_down.clear();
                self.buttons_down.clear();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
