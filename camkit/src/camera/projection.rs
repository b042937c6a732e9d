/// Projection math: pure functions of camera fields and screen size.
///
/// Conventions: right-handed view space, OpenGL clip space (depth in
/// [-1, 1]), screen space in pixels with the origin at the top-left and
/// Y pointing down.

use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::types::Ray;
use super::camera3d::{Camera3D, CameraProjection};

/// Look-at view matrix from position, target and up.
pub fn view_matrix(camera: &Camera3D) -> Mat4 {
    Mat4::look_at_rh(camera.position(), camera.target(), camera.up())
}

/// Projection matrix for the camera's projection mode.
///
/// Perspective uses `fovy` as the vertical aperture in degrees.
/// Orthographic uses `fovy` as the near-plane height, widened by `aspect`.
/// Unknown projection codes get the identity matrix.
pub fn projection_matrix(camera: &Camera3D, aspect: f32, near: f32, far: f32) -> Mat4 {
    match camera.projection() {
        CameraProjection::Perspective => {
            Mat4::perspective_rh_gl(camera.fovy().to_radians(), aspect, near, far)
        }
        CameraProjection::Orthographic => {
            let top = camera.fovy() / 2.0;
            let right = top * aspect;
            Mat4::orthographic_rh_gl(-right, right, -top, top, near, far)
        }
        CameraProjection::Other(_) => Mat4::IDENTITY,
    }
}

/// Map a pixel position to normalized device coordinates (x, y in [-1, 1]).
pub fn screen_to_ndc(screen: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (2.0 * screen.x) / width - 1.0,
        1.0 - (2.0 * screen.y) / height,
    )
}

/// Map normalized device coordinates to a pixel position.
pub fn ndc_to_screen(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) / 2.0 * width,
        (1.0 - ndc.y) / 2.0 * height,
    )
}

/// Transform an NDC point back to world space through `inv_view_proj`.
pub fn unproject(ndc: Vec3, inv_view_proj: &Mat4) -> Vec3 {
    let world = *inv_view_proj * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
    world.truncate() / world.w
}

/// Ray from the camera through the pixel `mouse` of a `width` x `height` screen.
///
/// Perspective rays start at the camera position. Orthographic rays start
/// on the near plane under the cursor, since all rays are parallel. The
/// identity projection of an unknown code behaves like orthographic.
pub fn mouse_ray(
    camera: &Camera3D,
    mouse: Vec2,
    width: f32,
    height: f32,
    near: f32,
    far: f32,
) -> Ray {
    let ndc = screen_to_ndc(mouse, width, height);

    let view = view_matrix(camera);
    let proj = projection_matrix(camera, width / height, near, far);
    let inv_view_proj = (proj * view).inverse();

    let near_point = unproject(Vec3::new(ndc.x, ndc.y, -1.0), &inv_view_proj);
    let far_point = unproject(Vec3::new(ndc.x, ndc.y, 1.0), &inv_view_proj);
    let direction = (far_point - near_point).normalize();

    let position = match camera.projection() {
        CameraProjection::Perspective => camera.position(),
        CameraProjection::Orthographic | CameraProjection::Other(_) => near_point,
    };

    Ray { position, direction }
}

/// Pixel position of a world-space point on a `width` x `height` screen.
pub fn world_to_screen(
    camera: &Camera3D,
    position: Vec3,
    width: f32,
    height: f32,
    near: f32,
    far: f32,
) -> Vec2 {
    let view = view_matrix(camera);
    let proj = projection_matrix(camera, width / height, near, far);

    let clip = proj * view * position.extend(1.0);
    let ndc = clip.truncate() / clip.w;

    ndc_to_screen(Vec2::new(ndc.x, ndc.y), width, height)
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
