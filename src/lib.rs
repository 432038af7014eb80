#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod raster;
pub mod state;
pub mod surface;
pub mod texture;
pub mod tool;
pub mod util;

pub use action::{Action, DrawAction};
pub use app::DoodleApp;
pub use config::DoodleConfig;
pub use error::{ColorParseError, ConfigError, ExportError};
pub use export::{ExportFormat, save_image};
pub use input::{InputHandler, TouchEvent};
pub use raster::{Blend, Paint, PaintStyle, Raster};
pub use state::GestureState;
pub use surface::DrawingSurface;
pub use tool::{ActionKind, ToolSettings};
