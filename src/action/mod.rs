use egui::{Color32, Pos2, Rect};

pub(crate) mod common;
mod eraser;
mod path;
mod point;
mod shape;

pub use eraser::EraserAction;
pub use path::PathAction;
pub use point::PointAction;
pub use shape::{CircleAction, LineAction, RectAction};

use crate::raster::{PaintStyle, Raster};
use crate::tool::{ActionKind, ToolSettings, clamp_width};

/// Behavior shared by every drawable shape
pub trait Action {
    /// Which tool produced this action
    fn kind(&self) -> ActionKind;

    /// Where the gesture started
    fn origin(&self) -> Pos2;

    fn color(&self) -> Color32;

    /// Stroke width in pixels, never below the tool minimum
    fn width(&self) -> f32;

    /// Feed the next pointer position of the gesture.
    ///
    /// Freehand actions append the point; two-point shapes replace their
    /// moving endpoint.
    fn extend(&mut self, point: Pos2);

    /// Area the action may paint, including stroke padding
    fn bounds(&self) -> Rect;

    /// Paint the action into the raster
    fn render(&self, raster: &mut Raster);
}

/// Every shape the drawing surface knows how to build
#[derive(Debug, Clone, PartialEq)]
pub enum DrawAction {
    Point(PointAction),
    Path(PathAction),
    Line(LineAction),
    Rect(RectAction),
    Circle(CircleAction),
    FilledRect(RectAction),
    FilledCircle(CircleAction),
    Eraser(EraserAction),
}

impl DrawAction {
    /// Start a new action at `origin`. Widths below the minimum are clamped.
    pub fn new(kind: ActionKind, origin: Pos2, color: Color32, width: f32) -> Self {
        let width = clamp_width(width);
        let style = if kind.is_filled() {
            PaintStyle::Fill
        } else {
            PaintStyle::Stroke
        };
        match kind {
            ActionKind::Point => DrawAction::Point(PointAction::new(origin, color, width)),
            ActionKind::Path => DrawAction::Path(PathAction::new(origin, color, width)),
            ActionKind::Line => DrawAction::Line(LineAction::new(origin, color, width)),
            ActionKind::Rect => DrawAction::Rect(RectAction::new(origin, color, width, style)),
            ActionKind::Circle => {
                DrawAction::Circle(CircleAction::new(origin, color, width, style))
            }
            ActionKind::FilledRect => {
                DrawAction::FilledRect(RectAction::new(origin, color, width, style))
            }
            ActionKind::FilledCircle => {
                DrawAction::FilledCircle(CircleAction::new(origin, color, width, style))
            }
            ActionKind::Eraser => DrawAction::Eraser(EraserAction::new(origin, color, width)),
        }
    }

    /// Start a new action with the given tool settings
    pub fn from_tool(tool: &ToolSettings, origin: Pos2) -> Self {
        Self::new(tool.kind, origin, tool.color, tool.width)
    }

    /// Points of a freehand action
    pub fn points(&self) -> Option<&[Pos2]> {
        match self {
            DrawAction::Path(p) => Some(p.points()),
            DrawAction::Eraser(e) => Some(e.points()),
            _ => None,
        }
    }

    /// Moving endpoint of a two-point shape
    pub fn end(&self) -> Option<Pos2> {
        match self {
            DrawAction::Line(l) => Some(l.end()),
            DrawAction::Rect(r) | DrawAction::FilledRect(r) => Some(r.end()),
            DrawAction::Circle(c) | DrawAction::FilledCircle(c) => Some(c.end()),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Action {
        match self {
            DrawAction::Point(a) => a,
            DrawAction::Path(a) => a,
            DrawAction::Line(a) => a,
            DrawAction::Rect(a) | DrawAction::FilledRect(a) => a,
            DrawAction::Circle(a) | DrawAction::FilledCircle(a) => a,
            DrawAction::Eraser(a) => a,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Action {
        match self {
            DrawAction::Point(a) => a,
            DrawAction::Path(a) => a,
            DrawAction::Line(a) => a,
            DrawAction::Rect(a) | DrawAction::FilledRect(a) => a,
            DrawAction::Circle(a) | DrawAction::FilledCircle(a) => a,
            DrawAction::Eraser(a) => a,
        }
    }
}

impl Action for DrawAction {
    fn kind(&self) -> ActionKind {
        self.inner().kind()
    }

    fn origin(&self) -> Pos2 {
        self.inner().origin()
    }

    fn color(&self) -> Color32 {
        self.inner().color()
    }

    fn width(&self) -> f32 {
        self.inner().width()
    }

    fn extend(&mut self, point: Pos2) {
        self.inner_mut().extend(point);
    }

    fn bounds(&self) -> Rect {
        self.inner().bounds()
    }

    fn render(&self, raster: &mut Raster) {
        self.inner().render(raster);
    }
}
