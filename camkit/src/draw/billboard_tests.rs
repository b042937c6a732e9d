use glam::{Mat4, Vec2, Vec3};
use super::*;

fn front_view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
}

fn params(source: Rectangle, size: Vec2) -> BillboardParams {
    BillboardParams {
        source,
        center: Vec3::ZERO,
        up: Vec3::Y,
        size,
        origin: Vec2::ZERO,
        rotation: 0.0,
        tint: Color::WHITE,
    }
}

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!((actual - expected).length() < 1e-5, "expected {:?}, got {:?}", expected, actual);
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_square_texture_square_quad() {
    let tex = Texture2D::new(1, 32, 32).unwrap();
    let quad = build_quad(BillboardKind::Full, &front_view(), &tex, &params(tex.full_source(), Vec2::splat(2.0)));

    assert_vec3_near(quad.corners[0], Vec3::new(-1.0, 1.0, 0.0));
    assert_vec3_near(quad.corners[1], Vec3::new(-1.0, -1.0, 0.0));
    assert_vec3_near(quad.corners[2], Vec3::new(1.0, -1.0, 0.0));
    assert_vec3_near(quad.corners[3], Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_width_follows_source_aspect() {
    let tex = Texture2D::new(1, 64, 32).unwrap();
    let quad = build_quad(BillboardKind::Full, &front_view(), &tex, &params(tex.full_source(), Vec2::splat(2.0)));

    // 2:1 source → 4 wide, 2 high
    assert_vec3_near(quad.corners[0], Vec3::new(-2.0, 1.0, 0.0));
    assert_vec3_near(quad.corners[2], Vec3::new(2.0, -1.0, 0.0));
}

#[test]
fn test_quad_faces_camera_from_the_side() {
    let view = Mat4::look_at_rh(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, Vec3::Y);
    let tex = Texture2D::new(1, 16, 16).unwrap();
    let quad = build_quad(BillboardKind::Rec, &view, &tex, &params(tex.full_source(), Vec2::splat(2.0)));

    // Looking down -X, the camera's right vector is -Z
    for corner in quad.corners {
        assert!(corner.x.abs() < 1e-5);
    }
    assert_vec3_near(quad.corners[3], Vec3::new(0.0, 1.0, -1.0));
}

#[test]
fn test_center_offsets_corners() {
    let tex = Texture2D::new(1, 16, 16).unwrap();
    let mut p = params(tex.full_source(), Vec2::splat(2.0));
    p.center = Vec3::new(5.0, 2.0, -3.0);
    let quad = build_quad(BillboardKind::Full, &front_view(), &tex, &p);

    assert_vec3_near(quad.corners[1], Vec3::new(4.0, 1.0, -3.0));
    assert_eq!(quad.center, p.center);
}

#[test]
fn test_rotation_about_center() {
    let tex = Texture2D::new(1, 64, 32).unwrap();
    let mut p = params(tex.full_source(), Vec2::splat(2.0));
    p.rotation = 90.0;
    let quad = build_quad(BillboardKind::Pro, &front_view(), &tex, &p);

    // (-2, 1) rotated a quarter turn counter-clockwise → (-1, -2)
    assert_vec3_near(quad.corners[0], Vec3::new(-1.0, -2.0, 0.0));
}

#[test]
fn test_origin_only_matters_with_rotation() {
    let tex = Texture2D::new(1, 16, 16).unwrap();
    let mut p = params(tex.full_source(), Vec2::splat(2.0));
    p.origin = Vec2::new(1.0, 1.0);
    let unrotated = build_quad(BillboardKind::Pro, &front_view(), &tex, &p);
    assert_vec3_near(unrotated.corners[0], Vec3::new(-1.0, 1.0, 0.0));

    p.rotation = 180.0;
    let rotated = build_quad(BillboardKind::Pro, &front_view(), &tex, &p);
    // Pivot at (1, 1): the top-right corner stays put, bottom-left goes to (3, 3)
    assert_vec3_near(rotated.corners[3], Vec3::new(1.0, 1.0, 0.0));
    assert_vec3_near(rotated.corners[1], Vec3::new(3.0, 3.0, 0.0));
}

// ============================================================================
// Texture coordinates
// ============================================================================

#[test]
fn test_full_source_texcoords() {
    let tex = Texture2D::new(1, 64, 32).unwrap();
    let quad = build_quad(BillboardKind::Full, &front_view(), &tex, &params(tex.full_source(), Vec2::ONE));

    assert_eq!(quad.texcoords, [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
    ]);
}

#[test]
fn test_sub_rectangle_texcoords() {
    let tex = Texture2D::new(9, 64, 32).unwrap();
    let source = Rectangle::new(16.0, 8.0, 32.0, 16.0);
    let quad = build_quad(BillboardKind::Rec, &front_view(), &tex, &params(source, Vec2::ONE));

    assert_eq!(quad.texcoords[0], Vec2::new(0.25, 0.25));
    assert_eq!(quad.texcoords[2], Vec2::new(0.75, 0.75));
    assert_eq!(quad.texture_id, 9);
    assert_eq!(quad.source, source);
    assert_eq!(quad.kind, BillboardKind::Rec);
}
