use egui::{Color32, Rect, pos2, vec2};

use crate::DoodleApp;

pub fn central_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_canvas_input(ctx, canvas_rect);

            // The buffer is whole pixels; draw it at its own size from the top-left
            let surface = app.surface();
            let size = vec2(surface.width() as f32, surface.height() as f32);
            let texture = app.canvas_texture(ctx);
            painter.image(
                texture,
                Rect::from_min_size(canvas_rect.min, size),
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        });
}
