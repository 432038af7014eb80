//! Gesture state machine of the drawing surface.
//!
//! ```text
//!            down                   move
//!   ┌──────┐ ─────► ┌─────────┐ ◄──────┐
//!   │ Idle │        │ Drawing │ ───────┘
//!   └──────┘ ◄───── └─────────┘
//!            up (commit) / cancel (discard)
//! ```
//!
//! Only the action held by `Drawing` is ever mutated; once the gesture ends it
//! is either committed to the surface or dropped.

use crate::action::DrawAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A pointer is down and `action` follows it
    Drawing { action: DrawAction },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, GestureState::Drawing { .. })
    }

    /// The in-progress action, if a gesture is active
    pub fn current_action(&self) -> Option<&DrawAction> {
        match self {
            GestureState::Drawing { action } => Some(action),
            GestureState::Idle => None,
        }
    }

    pub fn current_action_mut(&mut self) -> Option<&mut DrawAction> {
        match self {
            GestureState::Drawing { action } => Some(action),
            GestureState::Idle => None,
        }
    }

    /// Leave the current state, returning the in-progress action if any
    pub fn take_action(&mut self) -> Option<DrawAction> {
        match std::mem::take(self) {
            GestureState::Drawing { action } => Some(action),
            GestureState::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::Drawing { .. } => "Drawing",
        }
    }
}
