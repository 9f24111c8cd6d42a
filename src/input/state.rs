use egui::{Context, PointerButton, Pos2, Vec2};

/// The slice of one frame's raw input the canvas cares about
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Pointer position in screen coordinates
    pub pointer_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub primary_released: bool,
    pub double_clicked: bool,
    /// Two-finger gesture this frame: (zoom factor, pan in screen pixels)
    pub pinch: Option<(f32, Vec2)>,
    /// Ctrl+scroll style zoom factor, 1.0 when idle
    pub zoom_delta: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_pos: None,
            primary_pressed: false,
            primary_down: false,
            primary_released: false,
            double_clicked: false,
            pinch: None,
            zoom_delta: 1.0,
        }
    }
}

impl InputState {
    /// Sample the current frame's input from egui
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| {
            let pinch = input
                .multi_touch()
                .map(|touch| (touch.zoom_delta, touch.translation_delta));
            Self {
                pointer_pos: input.pointer.interact_pos(),
                primary_pressed: input.pointer.button_pressed(PointerButton::Primary),
                primary_down: input.pointer.button_down(PointerButton::Primary),
                primary_released: input.pointer.button_released(PointerButton::Primary),
                double_clicked: input.pointer.button_double_clicked(PointerButton::Primary),
                pinch,
                zoom_delta: input.zoom_delta(),
            }
        })
    }
}
