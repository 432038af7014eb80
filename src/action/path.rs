use egui::{Color32, Pos2, Rect};

use super::{Action, common};
use crate::raster::{Paint, Raster};
use crate::tool::ActionKind;

/// Freehand stroke through every point the pointer visited
#[derive(Debug, Clone, PartialEq)]
pub struct PathAction {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl PathAction {
    pub(crate) fn new(origin: Pos2, color: Color32, width: f32) -> Self {
        Self {
            points: vec![origin],
            color,
            width,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

impl Action for PathAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Path
    }

    fn origin(&self) -> Pos2 {
        self.points[0]
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    fn bounds(&self) -> Rect {
        common::padded_bounds(&self.points, self.width / 2.0)
    }

    fn render(&self, raster: &mut Raster) {
        raster.draw_polyline(&self.points, &Paint::stroke(self.color, self.width));
    }
}
