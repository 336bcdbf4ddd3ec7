// Game action definitions and mappings

use serde::Deserialize;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
///
/// Variant names double as the action names in bindings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Action {
    // Fighter controls (held state is sampled every frame)
    MoveLeft,
    MoveRight,
    Jump,
    LightAttack,
    HeavyAttack,

    // Menu and flow controls (edge triggered)
    MenuUp,
    MenuDown,
    Confirm,
    Cancel,
    Pause,
    Erase,
    Retry,
    MainMenu,
    Quit,
    ToggleFullscreen,
}

impl Action {
    /// Whether pressing this action should swallow the key's typed text
    pub fn consumes_text(&self) -> bool {
        matches!(self, Self::Confirm | Self::Erase)
    }
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings for Player 1 (WASD + G/H)
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::KeyG), Action::LightAttack),
        (InputSource::key(KeyCode::KeyH), Action::HeavyAttack),
    ]
}

/// Default keyboard bindings for Player 2 (arrows + K/J)
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::KeyK), Action::LightAttack),
        (InputSource::key(KeyCode::KeyJ), Action::HeavyAttack),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyW), Action::MenuUp),
        (InputSource::key(KeyCode::ArrowUp), Action::MenuUp),
        (InputSource::key(KeyCode::KeyS), Action::MenuDown),
        (InputSource::key(KeyCode::ArrowDown), Action::MenuDown),
        (InputSource::key(KeyCode::Enter), Action::Confirm),
        (InputSource::key(KeyCode::NumpadEnter), Action::Confirm),
        (InputSource::key(KeyCode::Escape), Action::Cancel),
        (InputSource::key(KeyCode::Tab), Action::Pause),
        (InputSource::key(KeyCode::Backspace), Action::Erase),
        (InputSource::key(KeyCode::KeyR), Action::Retry),
        (InputSource::key(KeyCode::KeyM), Action::MainMenu),
        (InputSource::key(KeyCode::KeyQ), Action::Quit),
        (InputSource::key(KeyCode::F11), Action::ToggleFullscreen),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::LightAttack);
    }

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_player_bindings_cover_fighter_controls() {
        for bindings in [default_p1_bindings(), default_p2_bindings()] {
            for action in [
                Action::MoveLeft,
                Action::MoveRight,
                Action::Jump,
                Action::LightAttack,
                Action::HeavyAttack,
            ] {
                assert!(bindings.iter().any(|(_, a)| *a == action), "{:?} unbound", action);
            }
        }
    }

    #[test]
    fn test_players_do_not_share_keys() {
        let p1: std::collections::HashSet<_> =
            default_p1_bindings().into_iter().map(|(s, _)| s).collect();
        for (source, _) in default_p2_bindings() {
            assert!(!p1.contains(&source), "{:?} bound for both players", source);
        }
    }

    #[test]
    fn test_only_confirm_and_erase_consume_text() {
        assert!(Action::Confirm.consumes_text());
        assert!(Action::Erase.consumes_text());
        assert!(!Action::Retry.consumes_text());
        assert!(!Action::MenuUp.consumes_text());
    }

    #[test]
    fn test_no_duplicate_inputs_in_globals() {
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in global_bindings() {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in global bindings"
            );
        }
    }
}
