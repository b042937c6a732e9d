use glam::{Mat4, Vec2, Vec3};
use super::*;

fn quad(texture_id: u32) -> BillboardQuad {
    BillboardQuad {
        kind: BillboardKind::Full,
        texture_id,
        source: Rectangle::new(0.0, 0.0, 16.0, 16.0),
        center: Vec3::ZERO,
        size: Vec2::ONE,
        corners: [Vec3::ZERO; 4],
        texcoords: [Vec2::ZERO; 4],
        tint: Color::WHITE,
    }
}

#[test]
fn test_queue_starts_empty() {
    let queue = CommandQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_queue_preserves_order() {
    let mut queue = CommandQueue::new();
    queue.push(DrawCommand::BeginMode3D { view: Mat4::IDENTITY, projection: Mat4::IDENTITY });
    queue.push(DrawCommand::Billboard(quad(5)));
    queue.push(DrawCommand::EndMode3D);

    assert_eq!(queue.len(), 3);
    assert!(matches!(queue.commands()[0], DrawCommand::BeginMode3D { .. }));
    assert!(matches!(queue.commands()[1], DrawCommand::Billboard(_)));
    assert_eq!(queue.commands()[2], DrawCommand::EndMode3D);
}

#[test]
fn test_queue_drain_empties() {
    let mut queue = CommandQueue::new();
    queue.push(DrawCommand::EndMode3D);
    queue.push(DrawCommand::EndMode3D);

    let drained = queue.drain();
    assert_eq!(drained.len(), 2);
    assert!(queue.is_empty());
}

#[test]
fn test_queue_billboards_filter() {
    let mut queue = CommandQueue::new();
    queue.push(DrawCommand::EndMode3D);
    queue.push(DrawCommand::Billboard(quad(1)));
    queue.push(DrawCommand::Billboard(quad(2)));

    let ids: Vec<u32> = queue.billboards().map(|q| q.texture_id).collect();
    assert_eq!(ids, vec![1, 2]);

    queue.clear();
    assert_eq!(queue.billboards().count(), 0);
}
