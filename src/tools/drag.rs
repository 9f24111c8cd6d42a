use egui::{Pos2, Vec2};

use super::DragAction;
use crate::geometry::{angle_deg, shape_center};
use crate::operation::common::MIN_SCALE_PIVOT_DISTANCE;
use crate::operation::{Operation, ShapeTransform, clamp_scale};

/// Produce the operation that results from dragging `op` by `delta`.
///
/// `current` is the pointer position after the move, so the previous position
/// is `current - delta`. Combinations that make no sense for the variant (a
/// rotate on an arrow, anything on a pen stroke) return the input unchanged.
pub fn apply_drag_action(op: &Operation, action: DragAction, delta: Vec2, current: Pos2) -> Operation {
    let mut next = op.clone();
    match (&mut next, action) {
        (Operation::RectStroke { transform, .. }, DragAction::Move)
        | (Operation::CircleStroke { transform, .. }, DragAction::Move) => {
            transform.translate += delta;
        }
        (Operation::ArrowStroke { translate, .. }, DragAction::Move) => {
            *translate += delta;
        }
        (
            Operation::RectStroke {
                start,
                end,
                transform,
                ..
            }
            | Operation::CircleStroke {
                start,
                end,
                transform,
                ..
            },
            DragAction::Scale,
        ) => scale_about_center(*start, *end, transform, delta, current),
        (
            Operation::RectStroke {
                start,
                end,
                transform,
                ..
            }
            | Operation::CircleStroke {
                start,
                end,
                transform,
                ..
            },
            DragAction::Rotate,
        ) => {
            let center = shape_center(*start, *end, transform.translate);
            let previous = current - delta;
            transform.rotation_deg += wrap_degrees(angle_deg(center, current) - angle_deg(center, previous));
        }
        (Operation::ArrowStroke { start, .. }, DragAction::ArrowStart) => {
            *start += delta;
        }
        (Operation::ArrowStroke { end, .. }, DragAction::ArrowEnd) => {
            *end += delta;
        }
        _ => {}
    }
    next
}

/// Shortest signed turn for an angle difference, in [-180, 180)
fn wrap_degrees(delta: f32) -> f32 {
    (delta + 180.0).rem_euclid(360.0) - 180.0
}

fn scale_about_center(start: Pos2, end: Pos2, transform: &mut ShapeTransform, delta: Vec2, current: Pos2) {
    let center = shape_center(start, end, transform.translate);
    let previous_distance = (current - delta).distance(center);
    if previous_distance <= MIN_SCALE_PIVOT_DISTANCE {
        return;
    }
    let current_distance = current.distance(center);
    transform.scale = clamp_scale(transform.scale * (current_distance / previous_distance));
}
