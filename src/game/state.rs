// Top-level game state machine types

use crate::game::characters::{FighterStats, PlayerSlot, ARCADE_STATS, ROUNDS_STATS};
use crate::game::trivia::TriviaSession;

/// Which rule set the match is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Ruleset {
    /// Single knockout ends the game, one attack button
    #[default]
    Arcade,
    /// Best of three rounds, punch and kick, character select
    Rounds,
}

impl Ruleset {
    pub fn stats(&self) -> FighterStats {
        match self {
            Self::Arcade => ARCADE_STATS,
            Self::Rounds => ROUNDS_STATS,
        }
    }

    pub fn has_character_select(&self) -> bool {
        matches!(self, Self::Rounds)
    }
}

/// Who controls player two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    VsAi,
    #[default]
    Versus,
}

/// The single active game state and its state-scoped data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    CharacterSelect,
    Fight,
    Pause,
    Trivia(TriviaSession),
    RoundEnd {
        winner: PlayerSlot,
        frames_left: u32,
    },
    GameOver {
        /// None when the winner cannot be told apart (arcade double knockout)
        winner: Option<PlayerSlot>,
    },
}

/// Payload-free tag of a [`GameState`], for code that only needs to know
/// which state is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateKind {
    #[default]
    Menu,
    CharacterSelect,
    Fight,
    Pause,
    Trivia,
    RoundEnd,
    GameOver,
}

impl StateKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::CharacterSelect => "CharacterSelect",
            Self::Fight => "Fight",
            Self::Pause => "Pause",
            Self::Trivia => "Trivia",
            Self::RoundEnd => "RoundEnd",
            Self::GameOver => "GameOver",
        }
    }
}

impl GameState {
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Menu => StateKind::Menu,
            Self::CharacterSelect => StateKind::CharacterSelect,
            Self::Fight => StateKind::Fight,
            Self::Pause => StateKind::Pause,
            Self::Trivia(_) => StateKind::Trivia,
            Self::RoundEnd { .. } => StateKind::RoundEnd,
            Self::GameOver { .. } => StateKind::GameOver,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}
