use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};
use crate::surface::DrawingSurface;
use crate::util::time;

/// File formats the canvas can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn image_format(&self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

/// Encode a pixel buffer. Formats without alpha get the RGB channels only.
pub fn encode(pixels: &RgbaImage, format: ImageFormat) -> ExportResult<Vec<u8>> {
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(ExportError::EmptyCanvas);
    }

    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgba8(pixels.clone())
                .to_rgb8()
                .write_to(&mut cursor, format)?;
        }
        _ => pixels.write_to(&mut cursor, format)?,
    }
    Ok(bytes)
}

/// Name for a new export, unique even for several saves within one second
pub fn export_file_name(format: ExportFormat) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "doodle_{}_{}.{}",
        time::timestamp_secs(),
        &id[..8],
        format.extension()
    )
}

/// Write the surface as an image file into `dir` and return its path.
///
/// The directory is created if it does not exist. A failed save leaves the
/// surface untouched.
pub fn save_image(
    surface: &DrawingSurface,
    dir: impl AsRef<Path>,
    format: ExportFormat,
) -> ExportResult<PathBuf> {
    let bytes = surface.export_image_as(format.image_format())?;

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(format));
    fs::write(&path, bytes)?;

    info!(
        "Saved {}x{} canvas to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_encode_png_decodes_back() {
        let pixels = RgbaImage::from_pixel(8, 4, image::Rgba([10, 20, 30, 255]));
        let bytes = encode(&pixels, ImageFormat::Png).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, pixels);
    }

    #[test]
    fn test_encode_jpeg() {
        let surface = DrawingSurface::new(16, 16, Color32::WHITE);
        let bytes = surface.export_image_as(ImageFormat::Jpeg).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_empty_canvas_fails() {
        let surface = DrawingSurface::new(0, 0, Color32::WHITE);
        assert!(matches!(surface.export_image(), Err(ExportError::EmptyCanvas)));
    }

    #[test]
    fn test_file_names() {
        let png = export_file_name(ExportFormat::Png);
        assert!(png.starts_with("doodle_"));
        assert!(png.ends_with(".png"));
        assert!(export_file_name(ExportFormat::Jpeg).ends_with(".jpg"));
        assert_ne!(png, export_file_name(ExportFormat::Png));
    }
}
