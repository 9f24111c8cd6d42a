use egui::Pos2;
use serde::{Deserialize, Serialize};

use super::{
    is_point_in_convex_quad, is_point_near_ellipse, point_to_segment_distance,
    transformed_corners,
};
use crate::operation::Operation;
use crate::tools::{BrushShape, DragAction};

// Hit radii in canvas pixels, sized for touch input
pub const HIT_TOLERANCE: f32 = 24.0;
pub const HANDLE_HIT_RADIUS: f32 = 36.0;
pub const ROTATE_HIT_RADIUS: f32 = 48.0;

/// Distances used when matching a pointer against shapes and handles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestConfig {
    /// Slack around ellipse outlines and arrow shafts
    pub hit_tolerance: f32,
    /// Radius of scale and arrow endpoint handles
    pub handle_hit_radius: f32,
    /// Radius of the rotate handle; larger than the scale handle
    pub rotate_hit_radius: f32,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            handle_hit_radius: HANDLE_HIT_RADIUS,
            rotate_hit_radius: ROTATE_HIT_RADIUS,
        }
    }
}

/// Whether `pos` strikes the body of `op` (not its handles)
fn hits_body(pos: Pos2, op: &Operation, config: &HitTestConfig) -> bool {
    match op {
        Operation::RectStroke {
            start,
            end,
            transform,
            ..
        } => is_point_in_convex_quad(pos, &transformed_corners(*start, *end, transform)),
        Operation::CircleStroke {
            start,
            end,
            transform,
            ..
        } => is_point_near_ellipse(pos, *start, *end, transform, config.hit_tolerance),
        Operation::ArrowStroke {
            start,
            end,
            translate,
            ..
        } => {
            point_to_segment_distance(pos, *start + *translate, *end + *translate)
                < config.hit_tolerance
        }
        Operation::PenStroke { .. } => false,
    }
}

/// Find the topmost operation under `pos`.
///
/// Pen mode never selects anything. Later entries are drawn on top, so the
/// history is scanned from the end.
pub fn hit_test_operation(
    pos: Pos2,
    history: &[Operation],
    tool: BrushShape,
    config: &HitTestConfig,
) -> Option<usize> {
    if tool == BrushShape::Pen {
        return None;
    }

    history
        .iter()
        .enumerate()
        .rev()
        .find(|(_, op)| op.is_selectable() && hits_body(pos, op, config))
        .map(|(index, _)| index)
}

/// Classify which control of a selected operation `pos` strikes.
///
/// Scale and rotate handles sit on the shape boundary and are tested before
/// the body, otherwise a large shape would swallow them.
pub fn hit_test_handle(pos: Pos2, op: &Operation, config: &HitTestConfig) -> DragAction {
    match op {
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
        } => {
            let [top_left, _, bottom_right, _] = transformed_corners(*start, *end, transform);
            if pos.distance(bottom_right) < config.handle_hit_radius {
                DragAction::Scale
            } else if pos.distance(top_left) < config.rotate_hit_radius {
                DragAction::Rotate
            } else if hits_body(pos, op, config) {
                DragAction::Move
            } else {
                DragAction::None
            }
        }
        Operation::ArrowStroke {
            start,
            end,
            translate,
            ..
        } => {
            let start = *start + *translate;
            let end = *end + *translate;
            if pos.distance(start) < config.handle_hit_radius {
                DragAction::ArrowStart
            } else if pos.distance(end) < config.handle_hit_radius {
                DragAction::ArrowEnd
            } else if point_to_segment_distance(pos, start, end) < config.hit_tolerance {
                DragAction::Move
            } else {
                DragAction::None
            }
        }
        Operation::PenStroke { .. } => DragAction::None,
    }
}
