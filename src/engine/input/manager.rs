// Input manager - routes raw keyboard events into per-player and menu state

use super::action::{Action, InputSource};
use super::config::InputConfigManager;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Number of local player slots
pub const LOCAL_PLAYERS: usize = 2;

/// Main input manager that coordinates all input for both players
pub struct InputManager {
    /// Binding tables
    config: InputConfigManager,

    /// Fighter controls per player slot
    players: Vec<PlayerInput>,

    /// Menu and flow controls
    global: PlayerInput,

    /// Text typed since the last simulation frame (trivia answers)
    typed: String,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            config: InputConfigManager::new(LOCAL_PLAYERS),
            players: (0..LOCAL_PLAYERS).map(|_| PlayerInput::new()).collect(),
            global: PlayerInput::new(),
            typed: String::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        self.handle_key(
            InputSource::key(key_code),
            event.state == ElementState::Pressed,
            event.repeat,
            event.text.as_deref(),
        );
    }

    /// Apply one key transition to every binding table
    pub fn handle_key(&mut self, source: InputSource, pressed: bool, repeat: bool, text: Option<&str>) {
        for (slot, player) in self.players.iter_mut().enumerate() {
            if let Some(action) = self.config.player_action(slot, source) {
                if !pressed {
                    player.release(action);
                } else if !repeat {
                    player.press(action);
                }
            }
        }

        let global_action = self.config.global_action(source);
        if let Some(action) = global_action {
            if !pressed {
                self.global.release(action);
            } else if !repeat {
                self.global.press(action);
            }
        }

        if pressed && !global_action.is_some_and(|action| action.consumes_text()) {
            if let Some(text) = text {
                self.typed.extend(text.chars().filter(|c| !c.is_control()));
            }
        }
    }

    /// Forget per-frame edges and typed text once a simulation frame consumed them
    pub fn end_frame(&mut self) {
        for player in &mut self.players {
            player.end_frame();
        }
        self.global.end_frame();
        self.typed.clear();
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Check whether a menu/flow action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.global.just_pressed(action)
    }

    /// Printable text typed since the last frame
    pub fn typed_text(&self) -> &str {
        &self.typed
    }

    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    /// Drop every held key, e.g. when the window loses focus and release
    /// events stop arriving
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.global.reset();
        self.typed.clear();
    }

    /// Queue typed text directly, bypassing key events
    #[cfg(test)]
    pub(crate) fn type_text(&mut self, text: &str) {
        self.typed.push_str(text);
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
