use eframe::egui;

use crate::SketchApp;

/// The canvas area: tracks the container size, feeds input, draws the surface.
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(230)))
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();

            // Surface follows the container on every frame; changes are destructive
            app.fit_canvas(canvas_rect);

            app.handle_input(ctx, canvas_rect);

            let painter = ui.painter_at(canvas_rect);
            app.render(ctx, &painter, canvas_rect);

            if app.canvas().is_drawing() {
                ctx.request_repaint();
            }
        });
}
