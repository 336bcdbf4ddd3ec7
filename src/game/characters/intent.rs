// What a fighter wants to do this frame

use super::state::AttackKind;
use crate::engine::input::{Action, PlayerInput};

/// One frame of fighter commands, from a human or the AI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub attack: Option<AttackKind>,
}

impl Intent {
    /// Do nothing
    pub fn idle() -> Self {
        Self::default()
    }

    /// Sample fighter controls. Light attack wins when both are down.
    ///
    /// Jump and attacks also fire on a press that was released again before
    /// the frame ran, so quick taps are never dropped.
    pub fn from_input(input: &PlayerInput) -> Self {
        let down = |action| input.is_pressed(action) || input.just_pressed(action);
        let attack = if down(Action::LightAttack) {
            Some(AttackKind::Light)
        } else if down(Action::HeavyAttack) {
            Some(AttackKind::Heavy)
        } else {
            None
        };

        Self {
            move_left: input.is_pressed(Action::MoveLeft),
            move_right: input.is_pressed(Action::MoveRight),
            jump: down(Action::Jump),
            attack,
        }
    }
}
