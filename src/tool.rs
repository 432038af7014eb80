use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// Smallest stroke width a tool can carry, in pixels
pub const MIN_STROKE_WIDTH: f32 = 1.0;

/// The shape a gesture produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActionKind {
    Point,
    #[default]
    Path,
    Line,
    Rect,
    Circle,
    FilledRect,
    FilledCircle,
    Eraser,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        ActionKind::Point,
        ActionKind::Path,
        ActionKind::Line,
        ActionKind::Rect,
        ActionKind::Circle,
        ActionKind::FilledRect,
        ActionKind::FilledCircle,
        ActionKind::Eraser,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Point => "Point",
            ActionKind::Path => "Path",
            ActionKind::Line => "Line",
            ActionKind::Rect => "Rect",
            ActionKind::Circle => "Circle",
            ActionKind::FilledRect => "FilledRect",
            ActionKind::FilledCircle => "FilledCircle",
            ActionKind::Eraser => "Eraser",
        }
    }

    /// Filled variants ignore the stroke width when rendering
    pub fn is_filled(&self) -> bool {
        matches!(self, ActionKind::FilledRect | ActionKind::FilledCircle)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a tool name matches no known [`ActionKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTool(pub String);

impl fmt::Display for UnknownTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown tool: {}", self.0)
    }
}

impl std::error::Error for UnknownTool {}

impl FromStr for ActionKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTool(s.to_owned()))
    }
}

/// Clamp a requested stroke width to something drawable
pub fn clamp_width(width: f32) -> f32 {
    if width.is_finite() {
        width.max(MIN_STROKE_WIDTH)
    } else {
        MIN_STROKE_WIDTH
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB` into a color.
///
/// The alpha-first form follows the Android color string convention.
pub fn parse_color(input: &str) -> Result<Color32, ColorParseError> {
    let trimmed = input.trim();
    let hex = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(input.to_owned()))?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigits(input.to_owned()));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorParseError::InvalidDigits(input.to_owned()))
    };

    match hex.len() {
        6 => Ok(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color32::from_rgba_unmultiplied(
            byte(2)?,
            byte(4)?,
            byte(6)?,
            byte(0)?,
        )),
        len => Err(ColorParseError::InvalidLength {
            input: input.to_owned(),
            len,
        }),
    }
}

/// The tool used to build the next action: shape, color and width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub kind: ActionKind,
    pub color: Color32,
    pub width: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            kind: ActionKind::Path,
            color: Color32::BLACK,
            width: 5.0,
        }
    }
}

impl ToolSettings {
    pub fn new(kind: ActionKind, color: Color32, width: f32) -> Self {
        Self {
            kind,
            color,
            width: clamp_width(width),
        }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = clamp_width(width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_color("#ff0000"), Ok(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("#272822"), Ok(Color32::from_rgb(0x27, 0x28, 0x22)));
        assert_eq!(parse_color(" #0000FF "), Ok(Color32::BLUE));
    }

    #[test]
    fn test_parse_argb() {
        let color = parse_color("#ff00ff00").unwrap();
        assert_eq!(color, Color32::from_rgb(0, 255, 0));

        let transparent = parse_color("#00000000").unwrap();
        assert_eq!(transparent.a(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_color("ff0000"), Err(ColorParseError::MissingHash(_))));
        assert!(matches!(
            parse_color("#fff"),
            Err(ColorParseError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(parse_color("#gg0000"), Err(ColorParseError::InvalidDigits(_))));
        assert!(matches!(parse_color("#ff00é"), Err(ColorParseError::InvalidDigits(_))));
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(0.0), MIN_STROKE_WIDTH);
        assert_eq!(clamp_width(-3.0), MIN_STROKE_WIDTH);
        assert_eq!(clamp_width(f32::NAN), MIN_STROKE_WIDTH);
        assert_eq!(clamp_width(12.5), 12.5);
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!("line".parse::<ActionKind>(), Ok(ActionKind::Line));
        assert_eq!("FilledCircle".parse::<ActionKind>(), Ok(ActionKind::FilledCircle));
        assert!("Triangle".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_settings_clamp_on_construction() {
        let settings = ToolSettings::new(ActionKind::Rect, Color32::RED, -1.0);
        assert_eq!(settings.width, MIN_STROKE_WIDTH);
    }
}
