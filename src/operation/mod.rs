use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};

pub(crate) mod common;

pub use common::{DEFAULT_STROKE_WIDTH, MAX_SCALE, MIN_SCALE, clamp_scale};

/// Accumulated transform of a selectable shape.
///
/// Applied on top of the shape's untransformed `start`/`end` box, always in the
/// order scale-about-center, rotate-about-center, translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeTransform {
    /// Whole-shape move accumulator
    pub translate: Vec2,
    /// Uniform scale factor, kept within [`MIN_SCALE`, `MAX_SCALE`]
    pub scale: f32,
    /// Rotation in degrees; accumulates without normalization
    pub rotation_deg: f32,
}

impl Default for ShapeTransform {
    fn default() -> Self {
        const IDENTITY: ShapeTransform = ShapeTransform {
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
        };
        IDENTITY
    }
}

impl ShapeTransform {
    /// Creates a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }
}

/// One committed drawing action in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Free-hand path. Never selectable.
    PenStroke {
        points: Vec<Pos2>,
        color: Color32,
        stroke_width: f32,
    },
    RectStroke {
        start: Pos2,
        end: Pos2,
        color: Color32,
        stroke_width: f32,
        transform: ShapeTransform,
    },
    /// Ellipse inscribed in the `start`/`end` box.
    CircleStroke {
        start: Pos2,
        end: Pos2,
        color: Color32,
        stroke_width: f32,
        transform: ShapeTransform,
    },
    /// Arrow from `start` to `end`. The endpoints are edited directly, so only
    /// a translation is accumulated.
    ArrowStroke {
        start: Pos2,
        end: Pos2,
        color: Color32,
        stroke_width: f32,
        translate: Vec2,
    },
}

impl Operation {
    pub fn rect(start: Pos2, end: Pos2, color: Color32, stroke_width: f32) -> Self {
        Self::RectStroke {
            start,
            end,
            color,
            stroke_width,
            transform: ShapeTransform::identity(),
        }
    }

    pub fn circle(start: Pos2, end: Pos2, color: Color32, stroke_width: f32) -> Self {
        Self::CircleStroke {
            start,
            end,
            color,
            stroke_width,
            transform: ShapeTransform::identity(),
        }
    }

    pub fn arrow(start: Pos2, end: Pos2, color: Color32, stroke_width: f32) -> Self {
        Self::ArrowStroke {
            start,
            end,
            color,
            stroke_width,
            translate: Vec2::ZERO,
        }
    }

    pub fn pen(points: Vec<Pos2>, color: Color32, stroke_width: f32) -> Self {
        Self::PenStroke {
            points,
            color,
            stroke_width,
        }
    }

    /// Get the operation type as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::PenStroke { .. } => "pen",
            Operation::RectStroke { .. } => "rect",
            Operation::CircleStroke { .. } => "circle",
            Operation::ArrowStroke { .. } => "arrow",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Operation::PenStroke { color, .. }
            | Operation::RectStroke { color, .. }
            | Operation::CircleStroke { color, .. }
            | Operation::ArrowStroke { color, .. } => *color,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        match self {
            Operation::PenStroke { stroke_width, .. }
            | Operation::RectStroke { stroke_width, .. }
            | Operation::CircleStroke { stroke_width, .. }
            | Operation::ArrowStroke { stroke_width, .. } => *stroke_width,
        }
    }

    /// Whether hit testing may ever select this operation
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Operation::PenStroke { .. })
    }

    /// Scale/rotate transform for box shapes, `None` for pen and arrow
    pub fn shape_transform(&self) -> Option<&ShapeTransform> {
        match self {
            Operation::RectStroke { transform, .. } | Operation::CircleStroke { transform, .. } => {
                Some(transform)
            }
            Operation::PenStroke { .. } | Operation::ArrowStroke { .. } => None,
        }
    }

    /// Translation accumulated by move drags
    pub fn translation(&self) -> Vec2 {
        match self {
            Operation::RectStroke { transform, .. } | Operation::CircleStroke { transform, .. } => {
                transform.translate
            }
            Operation::ArrowStroke { translate, .. } => *translate,
            Operation::PenStroke { .. } => Vec2::ZERO,
        }
    }
}
