use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::ExportFormat;
use crate::tool::{ActionKind, ToolSettings, parse_color};

/// Startup configuration, read from JSON.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct DoodleConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Canvas and eraser color, `#RRGGBB`
    pub background: String,
    /// Initial drawing color, `#RRGGBB`
    pub color: String,
    pub stroke_width: f32,
    pub tool: ActionKind,
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
}

impl Default for DoodleConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            background: "#ffffff".to_owned(),
            color: "#000000".to_owned(),
            stroke_width: 5.0,
            tool: ActionKind::Path,
            export_dir: PathBuf::from("doodles"),
            export_format: ExportFormat::Png,
        }
    }
}

impl DoodleConfig {
    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_color(&self.background)
            .map_err(|e| ConfigError::Invalid(format!("background: {e}")))?;
        parse_color(&self.color).map_err(|e| ConfigError::Invalid(format!("color: {e}")))?;
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must not be empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color32 {
        parse_color(&self.background).unwrap_or(Color32::WHITE)
    }

    /// Tool settings for the first gesture. Widths below 1 are clamped.
    pub fn tool_settings(&self) -> ToolSettings {
        let color = parse_color(&self.color).unwrap_or(Color32::BLACK);
        ToolSettings::new(self.tool, color, self.stroke_width)
    }
}
