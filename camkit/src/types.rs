//! Plain value types shared by the camera and the render context.

use glam::{Vec2, Vec3};
use crate::error::{Error, Result};

/// 2D vector (screen coordinates, billboard sizes)
pub type Vector2 = glam::Vec2;
/// 3D vector (positions, directions)
pub type Vector3 = glam::Vec3;
/// 4x4 column-major matrix
pub type Matrix = glam::Mat4;

/// Ray with an origin and a direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub position: Vec3,
    /// Normalized when produced by `RenderContext::mouse_ray`
    pub direction: Vec3,
}

impl Ray {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self { position, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.position + self.direction * t
    }
}

/// Axis-aligned rectangle in texture pixels (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const BLANK: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Handle to a GPU texture owned by the backend.
///
/// camkit never loads or frees textures; it only reads the id and
/// dimensions when building billboard quads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture2D {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub mipmaps: u32,
}

impl Texture2D {
    /// Describe a texture with a single mip level.
    pub fn new(id: u32, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            crate::camkit_bail!(
                "camkit::Texture2D",
                Error::InvalidResource(format!(
                    "texture {} has zero size ({}x{})",
                    id, width, height
                ))
            );
        }
        Ok(Self { id, width, height, mipmaps: 1 })
    }

    /// Source rectangle covering the whole texture.
    pub fn full_source(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
