#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use eframe_doodle::{DoodleApp, DoodleConfig};

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional path to a JSON config as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => DoodleConfig::load(&path).unwrap_or_else(|err| {
            log::error!("Could not load config {path}: {err}, using defaults");
            DoodleConfig::default()
        }),
        None => DoodleConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.canvas_width as f32 + 200.0,
                config.canvas_height as f32,
            ])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Doodle",
        native_options,
        Box::new(|cc| Ok(Box::new(DoodleApp::new(cc, config)))),
    )
}

// The canvas only runs as a native app.
#[cfg(target_arch = "wasm32")]
fn main() {}
