//! Two-point shapes: the origin stays fixed and every move replaces the
//! opposite endpoint.

use egui::{Color32, Pos2, Rect, vec2};

use super::Action;
use crate::raster::{Paint, PaintStyle, Raster};
use crate::tool::ActionKind;

#[derive(Debug, Clone, PartialEq)]
pub struct LineAction {
    origin: Pos2,
    end: Pos2,
    color: Color32,
    width: f32,
}

impl LineAction {
    pub(crate) fn new(origin: Pos2, color: Color32, width: f32) -> Self {
        Self {
            origin,
            end: origin,
            color,
            width,
        }
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }
}

impl Action for LineAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Line
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

    fn extend(&mut self, point: Pos2) {
        self.end = point;
    }

    fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.origin, self.end).expand(self.width / 2.0)
    }

    fn render(&self, raster: &mut Raster) {
        raster.draw_segment(self.origin, self.end, &Paint::stroke(self.color, self.width));
    }
}

/// Axis-aligned rectangle spanned by the origin and the current corner
#[derive(Debug, Clone, PartialEq)]
pub struct RectAction {
    origin: Pos2,
    end: Pos2,
    color: Color32,
    width: f32,
    style: PaintStyle,
}

impl RectAction {
    pub(crate) fn new(origin: Pos2, color: Color32, width: f32, style: PaintStyle) -> Self {
        Self {
            origin,
            end: origin,
            color,
            width,
            style,
        }
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.origin, self.end)
    }

    fn paint(&self) -> Paint {
        match self.style {
            PaintStyle::Stroke => Paint::stroke(self.color, self.width),
            PaintStyle::Fill => Paint::fill(self.color),
        }
    }
}

impl Action for RectAction {
    fn kind(&self) -> ActionKind {
        match self.style {
            PaintStyle::Stroke => ActionKind::Rect,
            PaintStyle::Fill => ActionKind::FilledRect,
        }
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

    fn extend(&mut self, point: Pos2) {
        self.end = point;
    }

    fn bounds(&self) -> Rect {
        match self.style {
            PaintStyle::Stroke => self.rect().expand(self.width / 2.0),
            PaintStyle::Fill => self.rect(),
        }
    }

    fn render(&self, raster: &mut Raster) {
        raster.draw_rect(self.rect(), &self.paint());
    }
}

/// Circle whose diameter runs from the origin to the current point
#[derive(Debug, Clone, PartialEq)]
pub struct CircleAction {
    origin: Pos2,
    end: Pos2,
    color: Color32,
    width: f32,
    style: PaintStyle,
}

impl CircleAction {
    pub(crate) fn new(origin: Pos2, color: Color32, width: f32, style: PaintStyle) -> Self {
        Self {
            origin,
            end: origin,
            color,
            width,
            style,
        }
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn center(&self) -> Pos2 {
        self.origin.lerp(self.end, 0.5)
    }

    pub fn radius(&self) -> f32 {
        self.origin.distance(self.end) / 2.0
    }

    fn paint(&self) -> Paint {
        match self.style {
            PaintStyle::Stroke => Paint::stroke(self.color, self.width),
            PaintStyle::Fill => Paint::fill(self.color),
        }
    }
}

impl Action for CircleAction {
    fn kind(&self) -> ActionKind {
        match self.style {
            PaintStyle::Stroke => ActionKind::Circle,
            PaintStyle::Fill => ActionKind::FilledCircle,
        }
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

    fn extend(&mut self, point: Pos2) {
        self.end = point;
    }

    fn bounds(&self) -> Rect {
        let padding = match self.style {
            PaintStyle::Stroke => self.width / 2.0,
            PaintStyle::Fill => 0.0,
        };
        let extent = (self.radius() + padding) * 2.0;
        Rect::from_center_size(self.center(), vec2(extent, extent))
    }

    fn render(&self, raster: &mut Raster) {
        raster.draw_circle(self.center(), self.radius(), &self.paint());
    }
}
