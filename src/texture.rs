use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use log::debug;

use crate::surface::DrawingSurface;

/// GPU copy of the drawing surface, refreshed only when the surface repainted
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    /// Surface revision the texture was last uploaded from
    version: u64,
}

impl Default for CanvasTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self {
            handle: None,
            version: 0,
        }
    }

    pub fn needs_update(&self, surface: &DrawingSurface) -> bool {
        self.handle.is_none() || self.version != surface.revision()
    }

    /// Upload the surface if it changed since the last call and return the texture
    pub fn update(&mut self, ctx: &Context, surface: &DrawingSurface) -> &TextureHandle {
        if self.needs_update(surface) {
            let image = to_color_image(surface);
            let handle = match self.handle.take() {
                Some(mut handle) => {
                    handle.set(image, TextureOptions::NEAREST);
                    handle
                }
                None => ctx.load_texture("doodle_canvas", image, TextureOptions::NEAREST),
            };
            self.handle = Some(handle);
            debug!("Uploaded canvas texture, revision {}", surface.revision());
            self.version = surface.revision();
        }

        self.handle.get_or_insert_with(|| {
            ctx.load_texture("doodle_canvas", to_color_image(surface), TextureOptions::NEAREST)
        })
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

fn to_color_image(surface: &DrawingSurface) -> ColorImage {
    let pixels = surface.pixels();
    ColorImage::from_rgba_unmultiplied(
        [pixels.width() as usize, pixels.height() as usize],
        pixels.as_raw(),
    )
}
