use egui::{Color32, Pos2, Rect};

use super::Action;
use super::path::PathAction;
use crate::raster::{Paint, Raster};
use crate::tool::ActionKind;

/// Freehand stroke that writes the canvas background color back into the buffer.
///
/// Covered pixels are replaced, not blended, so a translucent or transparent
/// background comes back exactly. The erased actions stay in the list and are
/// overwritten again on every redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct EraserAction {
    path: PathAction,
}

impl EraserAction {
    pub(crate) fn new(origin: Pos2, color: Color32, width: f32) -> Self {
        Self {
            path: PathAction::new(origin, color, width),
        }
    }

    pub fn points(&self) -> &[Pos2] {
        self.path.points()
    }
}

impl Action for EraserAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Eraser
    }

    fn origin(&self) -> Pos2 {
        self.path.origin()
    }

    fn color(&self) -> Color32 {
        self.path.color()
    }

    fn width(&self) -> f32 {
        self.path.width()
    }

    fn extend(&mut self, point: Pos2) {
        self.path.extend(point);
    }

    fn bounds(&self) -> Rect {
        self.path.bounds()
    }

    fn render(&self, raster: &mut Raster) {
        let paint = Paint::erase(raster.background(), self.path.width());
        raster.draw_polyline(self.path.points(), &paint);
    }
}
