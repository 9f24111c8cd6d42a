use crate::operation::Operation;
use crate::tools::{BrushShape, DragAction};

/// The interaction state of the editor, derived from the session.
///
/// ```text
///            down (pen, or miss with nothing selected)
///   ┌──────┐ ────────────────────────────────────────► ┌──────────┐
///   │      │ ◄──────────────── up (commit) / cancel ── │ Drafting │
///   │ Idle │                                           └──────────┘
///   │      │ ── down on a shape or handle ───────────► ┌──────────┐
///   │      │ ◄─────────── up / cancel (keeps selection) │ Dragging │
///   └──────┘                                           └──────────┘
/// ```
///
/// A pointer-down on empty canvas while something is selected only clears the
/// selection and stays in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// No gesture in progress (a selection may still exist)
    Idle,
    /// Pointer is down and a new operation of this shape is being drawn
    Drafting(BrushShape),
    /// Pointer is down and the selected operation is being manipulated
    Dragging(DragAction),
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Drafting(_) => "Drafting",
            EditorState::Dragging(_) => "Dragging",
        }
    }

    pub fn is_gesture_active(&self) -> bool {
        !matches!(self, EditorState::Idle)
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    /// Committed operations in paint order
    pub history: &'a [Operation],
    /// In-progress operation, drawn without a transform
    pub draft: Option<&'a Operation>,
    /// Operation that gets selection handles
    pub selected: Option<usize>,
}

impl RenderSnapshot<'_> {
    pub fn selected_operation(&self) -> Option<&Operation> {
        self.selected.and_then(|index| self.history.get(index))
    }
}
