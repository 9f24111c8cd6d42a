use egui::{Pos2, Vec2};
use log::debug;

use super::{InputEvent, InputState};
use crate::viewport::Viewport;

/// Turns per-frame input into canvas pointer events and viewport changes.
///
/// One finger draws or drags. A second finger joining takes the gesture over
/// for zoom/pan and cancels whatever the first finger was doing; drawing only
/// resumes after every finger has lifted.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    pointer_active: bool,
    zooming: bool,
    last_pos: Option<Pos2>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a one-finger gesture is currently being forwarded
    pub fn is_pointer_active(&self) -> bool {
        self.pointer_active
    }

    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    /// Update gesture state and return the events for the session
    pub fn update(&mut self, input: &InputState, viewport: &mut Viewport) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some((zoom, pan)) = input.pinch {
            if !self.zooming {
                self.zooming = true;
                if self.pointer_active {
                    debug!("Second pointer joined, cancelling gesture");
                    self.end_pointer();
                    events.push(InputEvent::Cancel);
                }
            }
            viewport.apply_pinch(zoom, pan);
            return events;
        }

        if self.zooming {
            if !input.primary_down {
                self.zooming = false;
            }
            return events;
        }

        if input.zoom_delta != 1.0 {
            viewport.apply_pinch(input.zoom_delta, Vec2::ZERO);
        }

        let Some(screen) = input.pointer_pos else {
            if self.pointer_active {
                self.end_pointer();
                events.push(InputEvent::Cancel);
            }
            return events;
        };

        if input.double_clicked && viewport.screen_rect().contains(screen) {
            viewport.toggle_zoom(screen);
        }

        let canvas = viewport.screen_to_canvas(screen);

        if input.primary_pressed && !self.pointer_active && viewport.screen_rect().contains(screen) {
            self.pointer_active = true;
            self.last_pos = Some(canvas);
            events.push(InputEvent::PointerDown { pos: canvas });
        } else if self.pointer_active && input.primary_down && self.last_pos != Some(canvas) {
            self.last_pos = Some(canvas);
            events.push(InputEvent::PointerMove { pos: canvas });
        }

        if self.pointer_active && input.primary_released {
            self.end_pointer();
            events.push(InputEvent::PointerUp { pos: canvas });
        }

        events
    }

    fn end_pointer(&mut self) {
        self.pointer_active = false;
        self.last_pos = None;
    }
}
