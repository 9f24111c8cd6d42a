use egui::Pos2;

mod gestures;
mod router;
mod state;

pub use gestures::GestureRecognizer;
pub use router::route_event;
pub use state::InputState;

/// Pointer events delivered to the editor session, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed
    PointerDown { pos: Pos2 },
    /// Pointer moved while pressed
    PointerMove { pos: Pos2 },
    /// Primary pointer released
    PointerUp { pos: Pos2 },
    /// The gesture was taken over (e.g. a second finger joined)
    Cancel,
}
