use egui::Color32;
use serde::{Deserialize, Serialize};

mod history;

pub use history::DrawHistory;

use crate::state::EditorSession;
use crate::tools::BrushShape;

/// Discrete tool events delivered outside of pointer gestures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Arm a different tool; arming the pen clears the selection
    SetShapeTool(BrushShape),
    /// Color for subsequent drafts
    SetColor(Color32),
    /// Stroke width for subsequent drafts
    SetStrokeWidth(f32),
    /// Remove the most recent operation
    Undo,
}

impl Command {
    /// Apply the command to a session. Returns true if the render state changed.
    pub fn execute(self, session: &mut EditorSession) -> bool {
        match self {
            Command::SetShapeTool(shape) => session.set_shape_tool(shape),
            Command::SetColor(color) => session.set_color(color),
            Command::SetStrokeWidth(width) => session.set_stroke_width(width),
            Command::Undo => session.undo(),
        }
    }
}
