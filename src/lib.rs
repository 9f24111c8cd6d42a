#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image_loader;
pub mod input;
pub mod operation;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod viewport;

pub use app::MarkupApp;
pub use command::{Command, DrawHistory};
pub use config::EditorConfig;
pub use input::{route_event, InputEvent};
pub use operation::{Operation, ShapeTransform};
pub use renderer::Renderer;
pub use state::{EditorSession, EditorState, RenderSnapshot};
pub use tools::{BrushShape, DragAction};
pub use viewport::Viewport;
