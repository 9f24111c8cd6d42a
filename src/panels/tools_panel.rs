use egui::{Color32, Sense, Stroke, Vec2};

use crate::MarkupApp;
use crate::command::Command;
use crate::tools::BrushShape;

const SWATCH_SIZE: f32 = 22.0;

pub fn tools_panel(app: &mut MarkupApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("tools_panel").show(ctx, |ui| {
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let active = app.session().shape_tool();
            for shape in BrushShape::ALL {
                let label = format!("{} {}", shape.icon(), shape.name());
                if ui.selectable_label(active == shape, label).clicked() {
                    log::info!("Tool selected from UI: {}", shape.name());
                    app.execute(Command::SetShapeTool(shape));
                }
            }

            ui.separator();

            let can_undo = app.session().history().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.execute(Command::Undo);
            }
            if ui.button("Done").clicked() {
                app.finish(ctx);
            }
        });

        ui.horizontal(|ui| {
            let palette = app.session().config().palette.clone();
            let current = app.session().color();
            for color in palette {
                if color_swatch(ui, color, color == current).clicked() {
                    app.execute(Command::SetColor(color));
                }
            }

            ui.separator();

            let config = app.session().config();
            let range = config.min_stroke_width..=config.max_stroke_width;
            let mut width = app.session().stroke_width();
            if ui
                .add(egui::Slider::new(&mut width, range).text("Width"))
                .changed()
            {
                app.execute(Command::SetStrokeWidth(width));
            }
        });

        ui.add_space(4.0);
    });
}

fn color_swatch(ui: &mut egui::Ui, color: Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), SWATCH_SIZE / 2.0 - 2.0, color);
    if selected {
        painter.circle_stroke(rect.center(), SWATCH_SIZE / 2.0, Stroke::new(2.0, Color32::WHITE));
    }
    response
}
