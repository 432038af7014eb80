use egui::{Rect, TextureId};

use crate::config::DoodleConfig;
use crate::export;
use crate::input::InputHandler;
use crate::panels;
use crate::surface::DrawingSurface;
use crate::texture::CanvasTexture;
use crate::tool::ToolSettings;

/// Desktop shell around a [`DrawingSurface`]: a tools panel for shape, color,
/// width, reset and save, and the canvas filling the rest of the window.
pub struct DoodleApp {
    surface: DrawingSurface,
    input: InputHandler,
    texture: CanvasTexture,
    config: DoodleConfig,
    /// Result of the last save, shown in the tools panel
    status: Option<String>,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DoodleConfig) -> Self {
        let mut app = Self::with_config(config);

        // Restore the tool the user had selected last time
        if let Some(tool) = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY))
        {
            app.surface.set_tool_settings(tool);
        }
        app
    }

    /// App without an eframe context, sized from the config
    pub fn with_config(config: DoodleConfig) -> Self {
        let surface = DrawingSurface::with_tool(
            config.canvas_width,
            config.canvas_height,
            config.background_color(),
            config.tool_settings(),
        );
        Self {
            surface,
            input: InputHandler::new(Rect::NOTHING),
            texture: CanvasTexture::new(),
            config,
            status: None,
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Match the canvas to its on-screen rect and feed this frame's pointer input
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let size = canvas_rect.size();
        self.surface
            .resize(size.x.max(0.0).round() as u32, size.y.max(0.0).round() as u32);

        for event in self.input.process_input(ctx) {
            self.surface.handle_event(event);
        }
    }

    /// Texture showing the current surface pixels
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> TextureId {
        self.texture.update(ctx, &self.surface).id()
    }

    /// Switch the drawing color from a hex string. A bad string keeps the
    /// previous color and is reported in the status line.
    pub fn apply_color(&mut self, hex: &str) {
        if let Err(err) = self.surface.set_color(hex) {
            self.status = Some(format!("Invalid color {hex:?}: {err}"));
        }
    }

    pub fn reset(&mut self) {
        self.surface.reset();
        self.status = None;
    }

    /// Save the canvas into the configured export directory
    pub fn save_drawing(&mut self) {
        let result = export::save_image(
            &self.surface,
            &self.config.export_dir,
            self.config.export_format,
        );
        self.status = Some(match result {
            Ok(path) => format!("Saved to {}", path.display()),
            Err(err) => {
                log::error!("Save failed: {err}");
                format!("Save failed: {err}")
            }
        });
    }
}

impl eframe::App for DoodleApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.surface.tool());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn config_in(dir: &std::path::Path) -> DoodleConfig {
        DoodleConfig {
            canvas_width: 40,
            canvas_height: 30,
            export_dir: dir.join("out"),
            ..DoodleConfig::default()
        }
    }

    #[test]
    fn test_save_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = DoodleApp::with_config(config_in(dir.path()));
        app.surface_mut().touch_down(pos2(5.0, 5.0));
        app.surface_mut().touch_up();

        app.save_drawing();
        let status = app.status().unwrap();
        assert!(status.starts_with("Saved to "), "{status}");
        assert_eq!(std::fs::read_dir(dir.path().join("out")).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_save_keeps_drawing() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the export directory should be
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let mut app = DoodleApp::with_config(config_in(dir.path()));
        app.surface_mut().touch_down(pos2(5.0, 5.0));
        app.surface_mut().touch_up();

        app.save_drawing();
        assert!(app.status().unwrap().starts_with("Save failed"));
        assert_eq!(app.surface().actions().len(), 1);

        app.reset();
        assert!(app.status().is_none());
        assert!(app.surface().actions().is_empty());
    }

    #[test]
    fn test_invalid_color_reported_in_status() {
        let mut app = DoodleApp::with_config(DoodleConfig::default());
        app.apply_color("#00ff00");
        assert_eq!(app.surface().tool().color, egui::Color32::GREEN);
        assert!(app.status().is_none());

        app.apply_color("green");
        assert_eq!(app.surface().tool().color, egui::Color32::GREEN);
        assert!(app.status().unwrap().starts_with("Invalid color"));
    }
}
