use egui::{Context, PointerButton, Pos2, Rect};

/// Touch input as the drawing surface consumes it.
///
/// Positions are in canvas pixels; the surface applies no further transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// A pointer went down at this position
    Down(Pos2),
    /// The pointer moved while held down
    Move(Pos2),
    /// The pointer was released
    Up,
    /// The gesture was aborted, e.g. the pointer left the window
    Cancel,
}

/// Converts raw egui pointer input over the canvas into [`TouchEvent`]s
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            pressed: false,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Screen position to canvas-local position
    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate touch events for the canvas
    pub fn process_input(&mut self, ctx: &Context) -> Vec<TouchEvent> {
        let (hover, pressed, released, down) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
                input.pointer.button_down(PointerButton::Primary),
            )
        });

        self.translate(hover, pressed, released, down)
    }

    /// Pure part of [`Self::process_input`]: one frame of pointer state in,
    /// touch events out
    pub fn translate(
        &mut self,
        hover: Option<Pos2>,
        pressed: bool,
        released: bool,
        down: bool,
    ) -> Vec<TouchEvent> {
        let mut events = Vec::new();

        match hover {
            Some(pos) => {
                if pressed && !self.pressed && self.canvas_rect.contains(pos) {
                    events.push(TouchEvent::Down(self.to_canvas(pos)));
                    self.pressed = true;
                } else if self.pressed && Some(pos) != self.last_pointer_pos {
                    events.push(TouchEvent::Move(self.to_canvas(pos)));
                }

                if self.pressed && (released || !down) {
                    events.push(TouchEvent::Up);
                    self.pressed = false;
                }
                self.last_pointer_pos = Some(pos);
            }
            None => {
                // Pointer left the window mid-gesture
                if self.pressed {
                    events.push(TouchEvent::Cancel);
                    self.pressed = false;
                }
                self.last_pointer_pos = None;
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(pos2(100.0, 50.0), pos2(500.0, 450.0)))
    }

    #[test]
    fn test_press_drag_release() {
        let mut input = handler();
        assert_eq!(
            input.translate(Some(pos2(110.0, 60.0)), true, false, true),
            vec![TouchEvent::Down(pos2(10.0, 10.0))]
        );
        assert_eq!(
            input.translate(Some(pos2(200.0, 150.0)), false, false, true),
            vec![TouchEvent::Move(pos2(100.0, 100.0))]
        );
        // Holding still produces nothing
        assert!(input.translate(Some(pos2(200.0, 150.0)), false, false, true).is_empty());
        assert_eq!(
            input.translate(Some(pos2(200.0, 150.0)), false, true, false),
            vec![TouchEvent::Up]
        );
    }

    #[test]
    fn test_tap_in_single_frame() {
        let mut input = handler();
        assert_eq!(
            input.translate(Some(pos2(150.0, 100.0)), true, true, false),
            vec![TouchEvent::Down(pos2(50.0, 50.0)), TouchEvent::Up]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        assert!(input.translate(Some(pos2(10.0, 10.0)), true, false, true).is_empty());
        assert!(input.translate(Some(pos2(200.0, 200.0)), false, false, true).is_empty());
    }

    #[test]
    fn test_pointer_leaving_cancels() {
        let mut input = handler();
        input.translate(Some(pos2(110.0, 60.0)), true, false, true);
        assert_eq!(input.translate(None, false, false, false), vec![TouchEvent::Cancel]);
        assert!(input.translate(None, false, false, false).is_empty());
    }
}
