use egui::{Color32, Pos2};
use image::{ImageFormat, RgbaImage};
use log::{debug, info, warn};

use crate::action::{Action, DrawAction};
use crate::error::{ColorParseError, ExportResult};
use crate::export;
use crate::input::TouchEvent;
use crate::raster::Raster;
use crate::state::GestureState;
use crate::tool::{ActionKind, ToolSettings, parse_color};

/// Offscreen drawing canvas driven by touch events.
///
/// Holds the committed actions in paint order, the gesture in progress and the
/// tool that the next gesture will use. Every state-changing event triggers a
/// full redraw: background, then committed actions oldest first, then the
/// in-progress action on top.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    raster: Raster,
    actions: Vec<DrawAction>,
    state: GestureState,
    tool: ToolSettings,
    revision: u64,
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self::with_tool(width, height, background, ToolSettings::default())
    }

    pub fn with_tool(width: u32, height: u32, background: Color32, tool: ToolSettings) -> Self {
        let mut surface = Self {
            raster: Raster::new(width, height, background),
            actions: Vec::new(),
            state: GestureState::Idle,
            tool: ToolSettings::new(tool.kind, tool.color, tool.width),
            revision: 0,
        };
        surface.repaint();
        surface
    }

    // --- Tool selection ---

    pub fn tool(&self) -> &ToolSettings {
        &self.tool
    }

    /// Replace all tool settings at once; applies from the next gesture on
    pub fn set_tool_settings(&mut self, tool: ToolSettings) {
        self.tool = ToolSettings::new(tool.kind, tool.color, tool.width);
    }

    pub fn set_tool(&mut self, kind: ActionKind) {
        debug!("Tool set to {kind}");
        self.tool.kind = kind;
    }

    /// Select a tool by name. Unknown names leave the tool unchanged.
    pub fn set_tool_by_name(&mut self, name: &str) -> bool {
        match name.parse::<ActionKind>() {
            Ok(kind) => {
                self.set_tool(kind);
                true
            }
            Err(err) => {
                warn!("{err}, keeping {}", self.tool.kind);
                false
            }
        }
    }

    /// Set the color from a `#RRGGBB` or `#AARRGGBB` string
    pub fn set_color(&mut self, value: &str) -> Result<(), ColorParseError> {
        match parse_color(value) {
            Ok(color) => {
                self.set_color32(color);
                Ok(())
            }
            Err(err) => {
                warn!("Ignoring color: {err}");
                Err(err)
            }
        }
    }

    pub fn set_color32(&mut self, color: Color32) {
        debug!("Color set to {color:?}");
        self.tool.color = color;
    }

    /// Set the stroke width in pixels; values below 1 are clamped
    pub fn set_stroke_width(&mut self, width: f32) {
        self.tool.set_width(width);
        debug!("Stroke width set to {}", self.tool.width);
    }

    // --- Gestures ---

    /// Feed one touch event. Returns `true` if it changed the surface.
    pub fn handle_event(&mut self, event: TouchEvent) -> bool {
        match event {
            TouchEvent::Down(pos) => {
                self.touch_down(pos);
                true
            }
            TouchEvent::Move(pos) => self.touch_move(pos),
            TouchEvent::Up => self.touch_up(),
            TouchEvent::Cancel => self.touch_cancel(),
        }
    }

    /// Start a gesture with the current tool
    pub fn touch_down(&mut self, pos: Pos2) {
        if let Some(unfinished) = self.state.take_action() {
            // A second down without an up: keep what was drawn so far
            warn!("Touch down during an active gesture, committing {}", unfinished.kind());
            self.actions.push(unfinished);
        }

        let action = DrawAction::from_tool(&self.tool, pos);
        debug!("Gesture started: {} at {pos:?}", action.kind());
        self.state = GestureState::Drawing { action };
        self.repaint();
    }

    pub fn touch_move(&mut self, pos: Pos2) -> bool {
        let Some(action) = self.state.current_action_mut() else {
            return false;
        };
        action.extend(pos);
        self.repaint();
        true
    }

    /// Finish the gesture and commit its action
    pub fn touch_up(&mut self) -> bool {
        let Some(action) = self.state.take_action() else {
            return false;
        };
        info!(
            "Committed {} (#{}) color={:?} width={}",
            action.kind(),
            self.actions.len() + 1,
            action.color(),
            action.width()
        );
        self.actions.push(action);
        self.repaint();
        true
    }

    /// Abort the gesture without committing anything
    pub fn touch_cancel(&mut self) -> bool {
        let Some(action) = self.state.take_action() else {
            return false;
        };
        debug!("Gesture cancelled, discarding {}", action.kind());
        self.repaint();
        true
    }

    // --- Canvas ---

    /// Drop every action, including one in progress, and show only the background
    pub fn reset(&mut self) {
        if !self.actions.is_empty() || self.state.is_drawing() {
            info!("Reset: clearing {} actions", self.actions.len());
        }
        self.actions.clear();
        self.state = GestureState::Idle;
        self.repaint();
    }

    /// Change the buffer size and redraw everything into it
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.raster.width() && height == self.raster.height() {
            return;
        }
        debug!("Resizing canvas to {width}x{height}");
        self.raster.resize(width, height);
        self.repaint();
    }

    /// Full redraw of the pixel buffer
    fn repaint(&mut self) {
        self.raster.clear();
        for action in &self.actions {
            action.render(&mut self.raster);
        }
        if let Some(action) = self.state.current_action() {
            action.render(&mut self.raster);
        }
        self.revision += 1;
    }

    // --- Export ---

    /// Encode the current buffer as PNG
    pub fn export_image(&self) -> ExportResult<Vec<u8>> {
        self.export_image_as(ImageFormat::Png)
    }

    pub fn export_image_as(&self, format: ImageFormat) -> ExportResult<Vec<u8>> {
        export::encode(self.raster.pixels(), format)
    }

    /// Copy of the current buffer
    pub fn snapshot(&self) -> RgbaImage {
        self.raster.pixels().clone()
    }

    // --- Inspection ---

    /// Committed actions in paint order
    pub fn actions(&self) -> &[DrawAction] {
        &self.actions
    }

    pub fn current_action(&self) -> Option<&DrawAction> {
        self.state.current_action()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn pixels(&self) -> &RgbaImage {
        self.raster.pixels()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.raster.pixel(x, y)
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn background(&self) -> Color32 {
        self.raster.background()
    }

    /// Incremented on every repaint
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn surface() -> DrawingSurface {
        DrawingSurface::new(120, 120, Color32::WHITE)
    }

    #[test]
    fn test_new_surface_is_blank() {
        let surface = surface();
        assert!(surface.actions().is_empty());
        assert!(surface.state().is_idle());
        assert_eq!(surface.pixel(60, 60), Some(Color32::WHITE));
        assert_eq!(surface.revision(), 1);
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut surface = surface();
        let revision = surface.revision();
        assert!(!surface.handle_event(TouchEvent::Move(pos2(5.0, 5.0))));
        assert!(!surface.handle_event(TouchEvent::Up));
        assert!(!surface.handle_event(TouchEvent::Cancel));
        assert_eq!(surface.revision(), revision);
        assert!(surface.actions().is_empty());
    }

    #[test]
    fn test_second_down_commits_unfinished_gesture() {
        let mut surface = surface();
        surface.touch_down(pos2(10.0, 10.0));
        surface.touch_move(pos2(20.0, 20.0));
        surface.touch_down(pos2(50.0, 50.0));
        assert_eq!(surface.actions().len(), 1);
        assert_eq!(surface.current_action().map(|a| a.origin()), Some(pos2(50.0, 50.0)));
    }

    #[test]
    fn test_tool_change_applies_to_next_gesture() {
        let mut surface = surface();
        surface.set_tool(ActionKind::Line);
        surface.touch_down(pos2(10.0, 10.0));
        surface.set_tool(ActionKind::Rect);
        surface.touch_move(pos2(40.0, 40.0));
        surface.touch_up();
        assert_eq!(surface.actions()[0].kind(), ActionKind::Line);

        surface.touch_down(pos2(10.0, 10.0));
        assert_eq!(surface.current_action().map(|a| a.kind()), Some(ActionKind::Rect));
    }

    #[test]
    fn test_invalid_color_keeps_previous() {
        let mut surface = surface();
        surface.set_color("#ff0000").unwrap();
        assert!(surface.set_color("red").is_err());
        assert_eq!(surface.tool().color, Color32::RED);
    }

    #[test]
    fn test_unknown_tool_name_is_noop() {
        let mut surface = surface();
        surface.set_tool(ActionKind::Circle);
        assert!(!surface.set_tool_by_name("Spray"));
        assert_eq!(surface.tool().kind, ActionKind::Circle);
        assert!(surface.set_tool_by_name("filledrect"));
        assert_eq!(surface.tool().kind, ActionKind::FilledRect);
    }

    #[test]
    fn test_stroke_width_clamped() {
        let mut surface = surface();
        surface.set_stroke_width(-4.0);
        assert_eq!(surface.tool().width, 1.0);
        surface.set_stroke_width(15.0);
        assert_eq!(surface.tool().width, 15.0);
    }

    #[test]
    fn test_reset_mid_gesture_discards_current() {
        let mut surface = surface();
        surface.touch_down(pos2(10.0, 10.0));
        surface.reset();
        assert!(surface.state().is_idle());
        assert!(!surface.touch_up());
        assert!(surface.actions().is_empty());
    }

    #[test]
    fn test_resize_redraws_actions() {
        let mut surface = surface();
        surface.set_tool(ActionKind::FilledRect);
        surface.touch_down(pos2(10.0, 10.0));
        surface.touch_move(pos2(30.0, 30.0));
        surface.touch_up();

        surface.resize(60, 40);
        assert_eq!(surface.width(), 60);
        assert_eq!(surface.height(), 40);
        assert_eq!(surface.pixel(20, 20), Some(Color32::BLACK));
        assert_eq!(surface.pixel(50, 35), Some(Color32::WHITE));
    }
}
