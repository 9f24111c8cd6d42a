use log::trace;

use super::InputEvent;
use crate::state::EditorSession;

/// Routes a pointer event to the session. Returns true if a new snapshot
/// should be rendered.
pub fn route_event(event: &InputEvent, session: &mut EditorSession) -> bool {
    let changed = match *event {
        InputEvent::PointerDown { pos } => session.pointer_down(pos),
        InputEvent::PointerMove { pos } => session.pointer_move(pos),
        InputEvent::PointerUp { pos } => session.pointer_up(pos),
        InputEvent::Cancel => session.cancel_gesture(),
    };
    trace!("{:?} -> {} (changed: {})", event, session.state().name(), changed);
    changed
}
