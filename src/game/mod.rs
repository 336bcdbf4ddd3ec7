// Game layer
//
// Fighters, combat resolution, the scripted opponent, the comeback trivia
// and the state machine that ties them together into a match.

pub mod ai;
pub mod characters;
pub mod combat;
pub mod matchup;
pub mod menu;
pub mod rounds;
pub mod snapshot;
pub mod state;
pub mod trivia;

pub use matchup::Match;
pub use snapshot::FrameSnapshot;
pub use state::{GameMode, GameState, Ruleset, StateKind};
pub use trivia::QuestionBank;
