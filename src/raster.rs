use egui::{Color32, Pos2, Rect, pos2, vec2};
use image::{Rgba, RgbaImage};

use crate::action::common;

/// How a shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    /// Only the outline, `width` pixels wide
    Stroke,
    /// The interior; the width is ignored
    Fill,
}

/// How painted pixels combine with what is already in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    /// Source-over; fully transparent colors leave the buffer untouched
    #[default]
    Over,
    /// The color is written as-is, alpha included
    Replace,
}

/// Color, width, style and blend mode handed to the raster primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color32,
    pub width: f32,
    pub style: PaintStyle,
    pub blend: Blend,
}

impl Paint {
    pub fn stroke(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            style: PaintStyle::Stroke,
            blend: Blend::Over,
        }
    }

    /// Stroke that overwrites pixels with `color`, used to restore the background
    pub fn erase(color: Color32, width: f32) -> Self {
        Self {
            blend: Blend::Replace,
            ..Self::stroke(color, width)
        }
    }

    pub fn fill(color: Color32) -> Self {
        Self {
            color,
            width: 0.0,
            style: PaintStyle::Fill,
            blend: Blend::Over,
        }
    }

    fn half_width(&self) -> f32 {
        self.width / 2.0
    }
}

/// Offscreen RGBA pixel buffer that actions render into.
///
/// A pixel is painted when its center `(x + 0.5, y + 0.5)` falls inside the
/// shape. There is no anti-aliasing, so the same actions always produce the
/// same pixels.
#[derive(Clone)]
pub struct Raster {
    pixels: RgbaImage,
    background: Color32,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .field("background", &self.background)
            .finish()
    }
}

impl Raster {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(background)),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Read back a pixel, `None` when outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    /// Paint every pixel with the background color
    pub fn clear(&mut self) {
        let background = to_rgba(self.background);
        for pixel in self.pixels.pixels_mut() {
            *pixel = background;
        }
    }

    /// Reallocate the buffer; the content is reset to the background
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::from_pixel(width, height, to_rgba(self.background));
    }

    /// Source-over `color` on every pixel in `bounds` whose center satisfies `covers`
    pub fn fill_where(&mut self, bounds: Rect, color: Color32, covers: impl Fn(Pos2) -> bool) {
        self.paint_where(bounds, color, Blend::Over, covers);
    }

    fn paint_where(
        &mut self,
        bounds: Rect,
        color: Color32,
        mode: Blend,
        covers: impl Fn(Pos2) -> bool,
    ) {
        if self.pixels.width() == 0 || self.pixels.height() == 0 {
            return;
        }
        if mode == Blend::Over && color.a() == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.pixel_span(bounds) else {
            return;
        };

        let source = color.to_srgba_unmultiplied();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                if covers(center) {
                    let pixel = self.pixels.get_pixel_mut(x, y);
                    *pixel = match mode {
                        Blend::Over => blend(source, pixel.0),
                        Blend::Replace => Rgba(source),
                    };
                }
            }
        }
    }

    /// Round dot of the given diameter
    pub fn draw_dot(&mut self, center: Pos2, diameter: f32, color: Color32) {
        self.dot(center, diameter, color, Blend::Over);
    }

    fn dot(&mut self, center: Pos2, diameter: f32, color: Color32, mode: Blend) {
        let radius = diameter / 2.0;
        let bounds = Rect::from_center_size(center, vec2(diameter, diameter));
        self.paint_where(bounds, color, mode, |p| p.distance(center) <= radius);
    }

    /// Straight segment with round caps
    pub fn draw_segment(&mut self, start: Pos2, end: Pos2, paint: &Paint) {
        let radius = paint.half_width();
        let bounds = Rect::from_two_pos(start, end).expand(radius);
        self.paint_where(bounds, paint.color, paint.blend, |p| {
            common::segment_distance(p, start, end) <= radius
        });
    }

    /// Connected segments through `points`; a single point becomes a dot
    pub fn draw_polyline(&mut self, points: &[Pos2], paint: &Paint) {
        match points {
            [] => {}
            [only] => self.dot(*only, paint.width, paint.color, paint.blend),
            _ => {
                for pair in points.windows(2) {
                    self.draw_segment(pair[0], pair[1], paint);
                }
            }
        }
    }

    /// Axis-aligned rectangle; a stroke is centered on the edges
    pub fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => {
                self.paint_where(rect, paint.color, paint.blend, |p| rect.contains(p));
            }
            PaintStyle::Stroke => {
                let outer = rect.expand(paint.half_width());
                let inner = rect.shrink(paint.half_width());
                self.paint_where(outer, paint.color, paint.blend, |p| {
                    outer.contains(p) && !inner.contains(p)
                });
            }
        }
    }

    /// Circle; a stroke is a ring of `paint.width` centered on the radius
    pub fn draw_circle(&mut self, center: Pos2, radius: f32, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => {
                let bounds = Rect::from_center_size(center, vec2(radius * 2.0, radius * 2.0));
                self.paint_where(bounds, paint.color, paint.blend, |p| {
                    p.distance(center) <= radius
                });
            }
            PaintStyle::Stroke => {
                let half = paint.half_width();
                let extent = (radius + half) * 2.0;
                let bounds = Rect::from_center_size(center, vec2(extent, extent));
                self.paint_where(bounds, paint.color, paint.blend, |p| {
                    (p.distance(center) - radius).abs() <= half
                });
            }
        }
    }

    /// Inclusive pixel range touched by `bounds`, clipped to the buffer
    fn pixel_span(&self, bounds: Rect) -> Option<(u32, u32, u32, u32)> {
        if !bounds.min.x.is_finite()
            || !bounds.min.y.is_finite()
            || !bounds.max.x.is_finite()
            || !bounds.max.y.is_finite()
            || bounds.min.x > bounds.max.x
            || bounds.min.y > bounds.max.y
        {
            return None;
        }

        let max_x = (self.pixels.width() - 1) as f32;
        let max_y = (self.pixels.height() - 1) as f32;
        if bounds.max.x < 0.0 || bounds.max.y < 0.0 || bounds.min.x > max_x + 1.0 || bounds.min.y > max_y + 1.0 {
            return None;
        }

        let x0 = bounds.min.x.floor().clamp(0.0, max_x) as u32;
        let y0 = bounds.min.y.floor().clamp(0.0, max_y) as u32;
        let x1 = bounds.max.x.ceil().clamp(0.0, max_x) as u32;
        let y1 = bounds.max.y.ceil().clamp(0.0, max_y) as u32;
        Some((x0, y0, x1, y1))
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Source-over blend of unmultiplied RGBA values
fn blend(source: [u8; 4], dest: [u8; 4]) -> Rgba<u8> {
    let sa = source[3] as f32 / 255.0;
    if sa >= 1.0 {
        return Rgba(source);
    }
    let da = dest[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let value = (source[i] as f32 * sa + dest[i] as f32 * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}
