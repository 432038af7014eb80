use egui::{Color32, Pos2, Rect, vec2};

use super::Action;
use crate::raster::Raster;
use crate::tool::ActionKind;

/// A single dot; movement after touch-down is ignored
#[derive(Debug, Clone, PartialEq)]
pub struct PointAction {
    origin: Pos2,
    color: Color32,
    width: f32,
}

impl PointAction {
    pub(crate) fn new(origin: Pos2, color: Color32, width: f32) -> Self {
        Self {
            origin,
            color,
            width,
        }
    }
}

impl Action for PointAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Point
    }

    fn origin(&self) -> Pos2 {
        self.origin
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn extend(&mut self, _point: Pos2) {}

    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.origin, vec2(self.width, self.width))
    }

    fn render(&self, raster: &mut Raster) {
        raster.draw_dot(self.origin, self.width, self.color);
    }
}
