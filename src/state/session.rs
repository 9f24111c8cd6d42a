use egui::{Color32, Pos2};
use log::{debug, info, trace};

use super::editor_state::{EditorState, RenderSnapshot};
use crate::command::DrawHistory;
use crate::config::EditorConfig;
use crate::geometry::{hit_test_handle, hit_test_operation};
use crate::operation::Operation;
use crate::tools::{BrushShape, DragAction, Draft, apply_drag_action};

/// Owns the markup of one editing session and turns pointer events into
/// history, selection and draft changes.
///
/// Every mutating method returns `true` when the render snapshot changed.
/// Nothing here can fail: calls whose preconditions don't hold are no-ops.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    history: DrawHistory,
    selected: Option<usize>,
    drag_action: DragAction,
    draft: Option<Draft>,
    shape_tool: BrushShape,
    color: Color32,
    stroke_width: f32,
    /// Pointer position of the previous event; `Some` only while a gesture runs
    last_pointer: Option<Pos2>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            color: config.default_color,
            stroke_width: config.default_stroke_width,
            config,
            history: DrawHistory::new(),
            selected: None,
            drag_action: DragAction::None,
            draft: None,
            shape_tool: BrushShape::default(),
            last_pointer: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn drag_action(&self) -> DragAction {
        self.drag_action
    }

    pub fn draft(&self) -> Option<&Operation> {
        self.draft.as_ref().map(Draft::operation)
    }

    pub fn shape_tool(&self) -> BrushShape {
        self.shape_tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn state(&self) -> EditorState {
        if let Some(draft) = &self.draft {
            EditorState::Drafting(shape_of(draft.operation()))
        } else if self.drag_action.is_active() {
            EditorState::Dragging(self.drag_action)
        } else {
            EditorState::Idle
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            history: self.history.as_slice(),
            draft: self.draft(),
            selected: self.selected,
        }
    }

    /// Hand the committed operations to whoever flattens the image
    pub fn into_operations(self) -> Vec<Operation> {
        self.history.into_vec()
    }

    pub fn pointer_down(&mut self, pos: Pos2) -> bool {
        if self.state().is_gesture_active() {
            // The previous gesture never saw its pointer-up.
            self.cancel_gesture();
        }

        if self.shape_tool != BrushShape::Pen {
            if let Some(action) = self.selected_handle_at(pos) {
                debug!("Drag {:?} on selected operation {:?}", action, self.selected);
                self.drag_action = action;
                self.last_pointer = Some(pos);
                return true;
            }

            let hit = hit_test_operation(
                pos,
                self.history.as_slice(),
                self.shape_tool,
                &self.config.hit_test,
            );
            if let Some(index) = hit {
                // A fresh selection always moves; handles belong to the selected op only.
                debug!("Selected operation {} and started Move", index);
                self.selected = Some(index);
                self.drag_action = DragAction::Move;
                self.last_pointer = Some(pos);
                return true;
            }

            if let Some(index) = self.selected.take() {
                debug!("Tap on empty canvas cleared selection {}", index);
                return true;
            }
        }

        trace!("Begin {:?} draft at {:?}", self.shape_tool, pos);
        self.draft = Some(Draft::begin(self.shape_tool, pos, self.color, self.stroke_width));
        self.last_pointer = Some(pos);
        true
    }

    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        let Some(last) = self.last_pointer else {
            return false;
        };
        let delta = pos - last;
        self.last_pointer = Some(pos);

        if self.drag_action.is_active() {
            let Some(index) = self.selected else {
                return false;
            };
            let Some(op) = self.history.get(index) else {
                return false;
            };
            let next = apply_drag_action(op, self.drag_action, delta, pos);
            if next == *op {
                return false;
            }
            return self.history.replace(index, next);
        }

        match &mut self.draft {
            Some(draft) => {
                draft.extend(pos);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self, _pos: Pos2) -> bool {
        self.last_pointer = None;

        if let Some(draft) = self.draft.take() {
            return match draft.commit(self.config.min_shape_extent) {
                Some(op) => {
                    let index = self.history.push(op);
                    info!("Committed {} operation at index {}", self.history.as_slice()[index].kind(), index);
                    true
                }
                None => {
                    debug!("Discarded degenerate draft");
                    true
                }
            };
        }

        if self.drag_action.is_active() {
            trace!("Finished {:?} drag", self.drag_action);
            self.drag_action = DragAction::None;
            return true;
        }
        false
    }

    /// Abort the running gesture: drafts are discarded, drags simply stop.
    /// Returns true if a gesture was running.
    pub fn cancel_gesture(&mut self) -> bool {
        self.last_pointer = None;
        let was_dragging = std::mem::take(&mut self.drag_action).is_active();
        let had_draft = self.draft.take().is_some();
        if had_draft {
            debug!("Gesture cancelled, draft discarded");
        } else if was_dragging {
            debug!("Drag cancelled, edits so far kept");
        }
        had_draft || was_dragging
    }

    /// Remove the most recent operation
    pub fn undo(&mut self) -> bool {
        let Some(removed) = self.history.undo() else {
            trace!("Undo on empty history ignored");
            return false;
        };
        let removed_index = self.history.len();
        if self.selected == Some(removed_index) {
            self.selected = None;
            if self.drag_action.is_active() {
                self.drag_action = DragAction::None;
                self.last_pointer = None;
            }
        }
        info!("Undid {} operation at index {}", removed.kind(), removed_index);
        true
    }

    pub fn set_shape_tool(&mut self, shape: BrushShape) -> bool {
        if self.shape_tool == shape {
            return false;
        }
        debug!("Tool changed: {:?} -> {:?}", self.shape_tool, shape);
        self.shape_tool = shape;
        if shape == BrushShape::Pen {
            self.selected = None;
            self.drag_action = DragAction::None;
        }
        true
    }

    pub fn set_color(&mut self, color: Color32) -> bool {
        let changed = self.color != color;
        self.color = color;
        changed
    }

    pub fn set_stroke_width(&mut self, width: f32) -> bool {
        let width = self.config.clamp_stroke_width(width);
        let changed = self.stroke_width != width;
        self.stroke_width = width;
        changed
    }

    fn selected_handle_at(&self, pos: Pos2) -> Option<DragAction> {
        let op = self.history.get(self.selected?)?;
        Some(hit_test_handle(pos, op, &self.config.hit_test)).filter(DragAction::is_active)
    }
}

fn shape_of(op: &Operation) -> BrushShape {
    match op {
        Operation::PenStroke { .. } => BrushShape::Pen,
        Operation::RectStroke { .. } => BrushShape::Rect,
        Operation::CircleStroke { .. } => BrushShape::Circle,
        Operation::ArrowStroke { .. } => BrushShape::Arrow,
    }
}
