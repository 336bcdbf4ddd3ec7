// Per-player input state management

use super::action::Action;
use std::collections::HashSet;

/// Held and edge state for one set of actions
///
/// Used once per player slot for fighter controls and once more for the
/// global menu controls.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions pressed since the last simulation frame
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Forget edge state once a simulation frame has consumed it
    pub(crate) fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}
