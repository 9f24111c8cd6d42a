use egui::{Color32, Pos2};

use super::BrushShape;
use crate::operation::Operation;

/// Tap-sized shapes below this extent (canvas pixels) are dropped on commit
pub const MIN_SHAPE_EXTENT: f32 = 4.0;

/// Helper for building an operation while the pointer is still down.
///
/// Holds the in-progress operation exactly as it will be committed; shapes
/// carry an identity transform until after commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    operation: Operation,
}

impl Draft {
    /// Start a new draft of `shape` at `pos`
    pub fn begin(shape: BrushShape, pos: Pos2, color: Color32, stroke_width: f32) -> Self {
        let operation = match shape {
            BrushShape::Pen => Operation::pen(vec![pos], color, stroke_width),
            BrushShape::Rect => Operation::rect(pos, pos, color, stroke_width),
            BrushShape::Circle => Operation::circle(pos, pos, color, stroke_width),
            BrushShape::Arrow => Operation::arrow(pos, pos, color, stroke_width),
        };
        Self { operation }
    }

    /// Extend the draft to `pos`: append for pen, move `end` for shapes
    pub fn extend(&mut self, pos: Pos2) {
        match &mut self.operation {
            Operation::PenStroke { points, .. } => points.push(pos),
            Operation::RectStroke { end, .. }
            | Operation::CircleStroke { end, .. }
            | Operation::ArrowStroke { end, .. } => *end = pos,
        }
    }

    /// Get the in-progress operation for preview
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Whether the draft is too small to be worth keeping.
    ///
    /// Pen strokes need two points. Boxes are degenerate when both sides are
    /// shorter than `min_extent`; arrows when their length is.
    pub fn is_degenerate(&self, min_extent: f32) -> bool {
        match &self.operation {
            Operation::PenStroke { points, .. } => points.len() < 2,
            Operation::RectStroke { start, end, .. } | Operation::CircleStroke { start, end, .. } => {
                let size = *end - *start;
                size.x.abs() < min_extent && size.y.abs() < min_extent
            }
            Operation::ArrowStroke { start, end, .. } => start.distance(*end) < min_extent,
        }
    }

    /// Finish the draft, dropping degenerate ones
    pub fn commit(self, min_extent: f32) -> Option<Operation> {
        if self.is_degenerate(min_extent) {
            None
        } else {
            Some(self.operation)
        }
    }
}
