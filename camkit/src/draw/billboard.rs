/// Billboard quad construction.
///
/// The quad spans the camera's right vector (taken from the view matrix)
/// and a caller-supplied up axis. The height is `size.y`; the width is
/// `size.x` scaled by the source rectangle's aspect ratio so the texels
/// stay square.

use glam::{Mat4, Vec2, Vec3};
use crate::types::{Color, Rectangle, Texture2D};
use super::command::{BillboardKind, BillboardQuad};

/// Parameters shared by every billboard entry point.
#[derive(Debug, Clone, Copy)]
pub struct BillboardParams {
    pub source: Rectangle,
    pub center: Vec3,
    pub up: Vec3,
    pub size: Vec2,
    /// Rotation pivot, as an offset from the center in billboard units
    pub origin: Vec2,
    /// Degrees, counter-clockwise as seen from the camera
    pub rotation: f32,
    pub tint: Color,
}

/// Expand a billboard into world-space corners and texture coordinates.
pub fn build_quad(
    kind: BillboardKind,
    view: &Mat4,
    texture: &Texture2D,
    params: &BillboardParams,
) -> BillboardQuad {
    let source = params.source;
    let right = view.row(0).truncate();

    let width = params.size.x * (source.width / source.height).abs();
    let height = params.size.y;
    let half = Vec2::new(width / 2.0, height / 2.0);

    let local = [
        Vec2::new(-half.x, half.y),
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
    ];

    let rotation = Vec2::from_angle(params.rotation.to_radians());
    let corners = local.map(|p| {
        let p = if params.rotation != 0.0 {
            rotation.rotate(p - params.origin) + params.origin
        } else {
            p
        };
        params.center + right * p.x + params.up * p.y
    });

    let tex_size = texture.size();
    let u0 = source.x / tex_size.x;
    let u1 = (source.x + source.width) / tex_size.x;
    let v0 = source.y / tex_size.y;
    let v1 = (source.y + source.height) / tex_size.y;

    BillboardQuad {
        kind,
        texture_id: texture.id,
        source,
        center: params.center,
        size: params.size,
        corners,
        texcoords: [
            Vec2::new(u0, v0),
            Vec2::new(u0, v1),
            Vec2::new(u1, v1),
            Vec2::new(u1, v0),
        ],
        tint: params.tint,
    }
}

#[cfg(test)]
#[path = "billboard_tests.rs"]
mod tests;
