mod editor_state;
mod session;

pub use editor_state::{EditorState, RenderSnapshot};
pub use session::EditorSession;
