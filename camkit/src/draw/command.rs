/// Draw commands recorded by `RenderContext` for a backend to consume.

use glam::{Mat4, Vec2, Vec3};
use crate::types::{Color, Rectangle};

/// Which entry point produced a billboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillboardKind {
    /// Whole texture, square size (`draw_billboard`)
    Full,
    /// Source sub-rectangle, 2D size (`draw_billboard_rec`)
    Rec,
    /// Custom up axis, origin and rotation (`draw_billboard_pro`)
    Pro,
}

/// Camera-facing textured quad, already expanded to world-space corners.
///
/// Corner order: top-left, bottom-left, bottom-right, top-right
/// (counter-clockwise when seen from the camera).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardQuad {
    pub kind: BillboardKind,
    pub texture_id: u32,
    pub source: Rectangle,
    pub center: Vec3,
    /// Size as passed by the caller, before aspect correction
    pub size: Vec2,
    pub corners: [Vec3; 4],
    pub texcoords: [Vec2; 4],
    pub tint: Color,
}

/// A single recorded command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Enter 3D mode with the given camera transforms
    BeginMode3D { view: Mat4, projection: Mat4 },
    /// Leave 3D mode
    EndMode3D,
    Billboard(BillboardQuad),
}

/// Ordered list of recorded draw commands
#[derive(Debug, Default, Clone)]
pub struct CommandQueue {
    commands: Vec<DrawCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Commands recorded so far, in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Hand all recorded commands to the caller, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Billboards only, in submission order.
    pub fn billboards(&self) -> impl Iterator<Item = &BillboardQuad> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Billboard(quad) => Some(quad),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
