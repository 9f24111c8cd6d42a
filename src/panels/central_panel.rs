use crate::MarkupApp;

pub fn central_panel(app: &mut MarkupApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());

            app.handle_canvas_input(ctx, response.rect);
            app.paint_canvas(&painter.with_clip_rect(response.rect));
        });
}
