use egui::{Color32, Pos2, Vec2};
use photo_markup::geometry::{
    is_point_in_convex_quad, is_point_near_ellipse, shape_center, transformed_corners,
};
use photo_markup::tools::apply_drag_action;
use photo_markup::{DragAction, Operation, ShapeTransform};

const HIT_TOLERANCE: f32 = 24.0;

fn boxes() -> Vec<(Pos2, Pos2)> {
    vec![
        (Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0)),
        (Pos2::new(250.0, 40.0), Pos2::new(10.0, 300.0)),
        (Pos2::new(-30.0, 5.0), Pos2::new(400.0, 12.0)),
        (Pos2::new(7.0, 7.0), Pos2::new(7.5, 90.0)),
    ]
}

fn transforms() -> Vec<ShapeTransform> {
    let mut out = Vec::new();
    for &scale in &[0.3, 1.0, 2.7, 5.0] {
        for &rotation_deg in &[0.0, 33.0, 90.0, -145.0, 720.5] {
            for &translate in &[Vec2::ZERO, Vec2::new(-80.0, 45.0)] {
                out.push(ShapeTransform {
                    translate,
                    scale,
                    rotation_deg,
                });
            }
        }
    }
    out
}

#[test]
fn test_center_is_inside_its_own_quad() {
    for (start, end) in boxes() {
        for transform in transforms() {
            let corners = transformed_corners(start, end, &transform);
            let center = shape_center(start, end, transform.translate);
            assert!(
                is_point_in_convex_quad(center, &corners),
                "center {center:?} outside {corners:?} for {transform:?}"
            );
        }
    }
}

#[test]
fn test_ellipse_rejects_far_points_and_accepts_center() {
    for (start, end) in boxes() {
        for transform in transforms() {
            let center = shape_center(start, end, transform.translate);
            assert!(is_point_near_ellipse(center, start, end, &transform, HIT_TOLERANCE));

            let half = (end - start).abs() / 2.0;
            let reach = half.x.max(half.y) * transform.scale + HIT_TOLERANCE + 1.0;
            for step in 0..16 {
                let angle = step as f32 / 16.0 * std::f32::consts::TAU;
                let far = center + Vec2::angled(angle) * reach;
                assert!(
                    !is_point_near_ellipse(far, start, end, &transform, HIT_TOLERANCE),
                    "{far:?} reported near ellipse {start:?}..{end:?} with {transform:?}"
                );
            }
        }
    }
}

#[test]
fn test_zero_move_keeps_corners() {
    let rect = Operation::rect(Pos2::new(12.0, 30.0), Pos2::new(90.0, 64.0), Color32::RED, 6.0);
    let moved = apply_drag_action(&rect, DragAction::Move, Vec2::ZERO, Pos2::new(40.0, 40.0));

    let corners_of = |op: &Operation| match op {
        Operation::RectStroke {
            start,
            end,
            transform,
            ..
        } => transformed_corners(*start, *end, transform),
        other => panic!("expected a rect, got {other:?}"),
    };
    assert_eq!(corners_of(&rect), corners_of(&moved));
}

#[test]
fn test_identity_corners_are_exact() {
    let corners = transformed_corners(
        Pos2::new(0.0, 0.0),
        Pos2::new(100.0, 100.0),
        &ShapeTransform::identity(),
    );
    assert_eq!(
        corners,
        [
            Pos2::new(0.0, 0.0),
            Pos2::new(100.0, 0.0),
            Pos2::new(100.0, 100.0),
            Pos2::new(0.0, 100.0),
        ]
    );
}
