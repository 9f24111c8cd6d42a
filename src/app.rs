use egui::{ColorImage, Key, Modifiers, Painter, Pos2, Rect, TextureHandle, TextureOptions, Vec2};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::EditorConfig;
use crate::image_loader::{ImagePlacement, load_dropped_file};
use crate::input::{route_event, GestureRecognizer, InputState};
use crate::operation::Operation;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::{BaseImage, Renderer};
use crate::state::EditorSession;
use crate::tools::BrushShape;
use crate::viewport::Viewport;

/// Called with the finished markup when the user presses Done
pub type DoneCallback = Box<dyn FnMut(&[Operation])>;

/// Brush settings restored across restarts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub shape: BrushShape,
    pub color: egui::Color32,
    pub stroke_width: f32,
}

impl BrushSettings {
    fn from_session(session: &EditorSession) -> Self {
        Self {
            shape: session.shape_tool(),
            color: session.color(),
            stroke_width: session.stroke_width(),
        }
    }

    fn apply(self, session: &mut EditorSession) {
        Command::SetShapeTool(self.shape).execute(session);
        Command::SetColor(self.color).execute(session);
        Command::SetStrokeWidth(self.stroke_width).execute(session);
    }
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self::from_session(&EditorSession::default())
    }
}

struct LoadedImage {
    texture: TextureHandle,
    placement: ImagePlacement,
}

pub struct MarkupApp {
    session: EditorSession,
    viewport: Viewport,
    gestures: GestureRecognizer,
    renderer: Renderer,
    base_image: Option<LoadedImage>,
    on_done: Option<DoneCallback>,
}

impl MarkupApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig, image: Option<ColorImage>) -> Self {
        let viewport = Viewport::new(Rect::from_min_size(Pos2::ZERO, Vec2::ZERO), config.viewport);
        let mut session = EditorSession::new(config);

        if let Some(settings) = cc
            .storage
            .and_then(|storage| eframe::get_value::<BrushSettings>(storage, eframe::APP_KEY))
        {
            log::debug!("Restoring brush settings: {:?}", settings);
            settings.apply(&mut session);
        }

        let mut app = Self {
            session,
            viewport,
            gestures: GestureRecognizer::new(),
            renderer: Renderer::new(),
            base_image: None,
            on_done: None,
        };
        if let Some(image) = image {
            app.set_base_image(&cc.egui_ctx, image);
        }
        app
    }

    pub fn with_on_done(mut self, on_done: impl FnMut(&[Operation]) + 'static) -> Self {
        self.on_done = Some(Box::new(on_done));
        self
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn execute(&mut self, command: Command) -> bool {
        log::debug!("Executing command: {:?}", command);
        command.execute(&mut self.session)
    }

    /// Replace the photo under the markup
    pub fn set_base_image(&mut self, ctx: &egui::Context, image: ColorImage) {
        let size = Vec2::new(image.size[0] as f32, image.size[1] as f32);
        log::info!("Base image set: {}x{}", size.x, size.y);
        let texture = ctx.load_texture("base_image", image, TextureOptions::LINEAR);
        self.base_image = Some(LoadedImage {
            texture,
            placement: ImagePlacement::new(size),
        });
    }

    /// Hand the committed operations to the caller and close the window
    pub fn finish(&mut self, ctx: &egui::Context) {
        let fresh = EditorSession::new(self.session.config().clone());
        let operations = std::mem::replace(&mut self.session, fresh).into_operations();
        log::info!("Markup done with {} operations", operations.len());
        if let Some(on_done) = self.on_done.as_mut() {
            on_done(&operations);
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Feed this frame's pointer input through gestures into the session
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.viewport.set_screen_rect(canvas_rect);
        if let Some(image) = self.base_image.as_mut() {
            image.placement.resolve(self.viewport.canvas_rect().size());
        }

        let input = InputState::from_context(ctx);
        let mut changed = false;
        for event in self.gestures.update(&input, &mut self.viewport) {
            changed |= route_event(&event, &mut self.session);
        }
        if changed {
            ctx.request_repaint();
        }
    }

    pub(crate) fn paint_canvas(&self, painter: &Painter) {
        let base_image = self.base_image.as_ref().and_then(|image| {
            Some(BaseImage {
                texture: image.texture.id(),
                canvas_rect: image.placement.canvas_rect()?,
            })
        });
        self.renderer
            .paint(painter, &self.session.snapshot(), &self.viewport, base_image.as_ref());
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Z)) {
            self.execute(Command::Undo);
        }
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.session.cancel_gesture();
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in &dropped {
            match load_dropped_file(file) {
                Ok(image) => {
                    self.set_base_image(ctx, image);
                    break;
                }
                Err(err) => log::warn!("Ignoring dropped file: {}", err),
            }
        }
    }
}

impl eframe::App for MarkupApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &BrushSettings::from_session(&self.session));
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_brush_settings_round_trip_through_session() {
        let settings = BrushSettings {
            shape: BrushShape::Arrow,
            color: Color32::YELLOW,
            stroke_width: 12.0,
        };
        let mut session = EditorSession::default();
        settings.clone().apply(&mut session);
        assert_eq!(BrushSettings::from_session(&session), settings);
    }

    #[test]
    fn test_brush_settings_accept_partial_json() {
        let settings: BrushSettings = serde_json::from_str(r#"{"shape":"Rect"}"#).unwrap();
        assert_eq!(settings.shape, BrushShape::Rect);
        assert_eq!(settings.stroke_width, BrushSettings::default().stroke_width);
    }
}
