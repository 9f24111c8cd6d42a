use serde::{Deserialize, Serialize};

mod draft;
mod drag;

pub use draft::{Draft, MIN_SHAPE_EXTENT};
pub use drag::apply_drag_action;

/// Which tool is armed for new pointer-down events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrushShape {
    /// Free-hand drawing; never selects
    #[default]
    Pen,
    Rect,
    Circle,
    Arrow,
}

impl BrushShape {
    pub const ALL: [BrushShape; 4] = [
        BrushShape::Pen,
        BrushShape::Rect,
        BrushShape::Circle,
        BrushShape::Arrow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BrushShape::Pen => "Pen",
            BrushShape::Rect => "Rectangle",
            BrushShape::Circle => "Circle",
            BrushShape::Arrow => "Arrow",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BrushShape::Pen => "✏",
            BrushShape::Rect => "⬜",
            BrushShape::Circle => "⭕",
            BrushShape::Arrow => "↗",
        }
    }
}

/// What an active drag gesture manipulates. Lives for one down-to-up gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragAction {
    #[default]
    None,
    Move,
    Scale,
    Rotate,
    ArrowStart,
    ArrowEnd,
}

impl DragAction {
    pub fn is_active(&self) -> bool {
        *self != DragAction::None
    }
}
