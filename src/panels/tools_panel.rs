use egui::Slider;

use crate::DoodleApp;
use crate::tool::ActionKind;

/// Quick colors offered next to the picker
const PRESET_COLORS: [(&str, &str); 3] = [("Blue", "#0000ff"), ("Red", "#ff0000"), ("Black", "#272822")];

/// Quick stroke widths offered next to the slider
const PRESET_WIDTHS: [(&str, f32); 3] = [("Thin", 5.0), ("Medium", 10.0), ("Thick", 15.0)];

pub fn tools_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Shape");
            let active = app.surface().tool().kind;
            for kind in ActionKind::ALL {
                if ui.selectable_label(active == kind, kind.name()).clicked() {
                    log::info!("Tool selected from UI: {kind}");
                    app.surface_mut().set_tool(kind);
                }
            }

            ui.separator();
            ui.heading("Color");
            ui.horizontal(|ui| {
                for (label, hex) in PRESET_COLORS {
                    if ui.button(label).clicked() {
                        app.apply_color(hex);
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Custom:");
                let mut color = app.surface().tool().color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.surface_mut().set_color32(color);
                }
            });

            ui.separator();
            ui.heading("Size");
            ui.horizontal(|ui| {
                for (label, width) in PRESET_WIDTHS {
                    if ui.button(label).clicked() {
                        app.surface_mut().set_stroke_width(width);
                    }
                }
            });
            let mut width = app.surface().tool().width;
            if ui.add(Slider::new(&mut width, 1.0..=50.0).text("px")).changed() {
                app.surface_mut().set_stroke_width(width);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    app.reset();
                }
                if ui.button("Save").clicked() {
                    app.save_drawing();
                }
            });

            if let Some(status) = app.status() {
                ui.label(status);
            }

            ui.separator();
            let surface = app.surface();
            ui.label(format!("Actions: {}", surface.actions().len()));
            ui.label(format!("Gesture: {}", surface.state().name()));
            ui.label(format!("Canvas: {}x{}", surface.width(), surface.height()));
        });
}
