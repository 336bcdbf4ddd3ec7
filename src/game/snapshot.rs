// Render-boundary view of one simulated frame
//
// Everything a renderer (or the window-title HUD) needs, copied out of the
// match so drawing never borrows simulation state.

use crate::engine::physics::Rect;
use crate::game::characters::{AnimationFrameData, Facing, Fighter, PlayerSlot, Stance};
use crate::game::combat::DamagePopup;
use crate::game::matchup::Match;
use crate::game::menu::MainMenu;
use crate::game::state::{GameMode, GameState, Ruleset, StateKind};

const TITLE: &str = "Mementos Melee";

/// Drawable state of one fighter
#[derive(Debug, Clone, PartialEq)]
pub struct FighterView {
    pub slot: PlayerSlot,
    pub name: &'static str,
    pub bounds: Rect,
    pub facing: Facing,
    pub stance: Stance,
    /// Frames until the next attack may start
    pub attack_cooldown: u32,
    pub health: i32,
    pub max_health: i32,
    pub display_health: f32,
    pub flashing: bool,
    pub animation: AnimationFrameData,
}

impl FighterView {
    fn capture(fighter: &Fighter) -> Self {
        Self {
            slot: fighter.slot(),
            name: fighter.profile().name,
            bounds: fighter.bounds(),
            facing: fighter.facing(),
            stance: fighter.stance(),
            attack_cooldown: fighter.attack_cooldown(),
            health: fighter.health(),
            max_health: fighter.max_health(),
            display_health: fighter.display_health(),
            flashing: fighter.hit_flash() > 0,
            animation: fighter.animation_frame(),
        }
    }
}

/// Active trivia question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaView {
    pub player: PlayerSlot,
    pub prompt: String,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub ruleset: Ruleset,
    pub mode: GameMode,
    pub state: StateKind,
    /// Floor strip of the arena
    pub floor: Rect,
    pub fighters: [FighterView; 2],
    /// Live attack boxes, for debug drawing
    pub hitboxes: Vec<Rect>,
    pub popups: Vec<DamagePopup>,
    pub menu_options: [&'static str; 3],
    pub menu_index: usize,
    /// Character names currently highlighted in character select
    pub picks: [&'static str; 2],
    pub trivia: Option<TriviaView>,
    pub round: u32,
    pub wins: [u32; 2],
    /// Round winner during RoundEnd, match winner during GameOver
    pub winner: Option<PlayerSlot>,
}

impl FrameSnapshot {
    pub fn capture(game: &Match) -> Self {
        let state = game.state();
        let trivia = match state {
            GameState::Trivia(session) => Some(TriviaView {
                player: session.player(),
                prompt: session.prompt().to_string(),
                input: session.input().to_string(),
            }),
            _ => None,
        };
        let winner = match state {
            GameState::RoundEnd { winner, .. } => Some(*winner),
            GameState::GameOver { winner } => *winner,
            _ => None,
        };
        let rounds = game.rounds();
        let selection = game.selection();

        Self {
            frame: game.frame(),
            ruleset: game.ruleset(),
            mode: game.mode(),
            state: state.kind(),
            floor: game.arena().floor(),
            fighters: PlayerSlot::ALL.map(|slot| FighterView::capture(game.fighter(slot))),
            hitboxes: game.hitboxes().to_vec(),
            popups: game.effects().popups().to_vec(),
            menu_options: MainMenu::labels(),
            menu_index: game.menu().index(),
            picks: PlayerSlot::ALL.map(|slot| selection.profile(slot).name),
            trivia,
            round: rounds.round(),
            wins: PlayerSlot::ALL.map(|slot| rounds.wins(slot)),
            winner,
        }
    }

    pub fn fighter(&self, slot: PlayerSlot) -> &FighterView {
        &self.fighters[slot.index()]
    }

    /// One-line summary, shown in the window title
    pub fn hud_line(&self) -> String {
        let [p1, p2] = &self.fighters;
        let scoreboard = match self.ruleset {
            Ruleset::Arcade => format!("P1 {} | P2 {}", p1.health, p2.health),
            Ruleset::Rounds => format!(
                "P1 {} | P2 {} | Round {} ({}-{})",
                p1.health, p2.health, self.round, self.wins[0], self.wins[1]
            ),
        };

        match self.state {
            StateKind::Menu => format!("{} | > {}", TITLE, self.menu_options[self.menu_index]),
            StateKind::CharacterSelect => format!(
                "{} | P1: {} vs P2: {}",
                TITLE, self.picks[0], self.picks[1]
            ),
            StateKind::Pause => format!("{} | PAUSED (M menu, Q quit)", scoreboard),
            StateKind::Trivia => match &self.trivia {
                Some(trivia) => format!(
                    "{} CRISIS: {} > {}_",
                    trivia.player.label(),
                    trivia.prompt,
                    trivia.input
                ),
                None => scoreboard,
            },
            StateKind::RoundEnd => match self.winner {
                Some(winner) => format!("{} | {} takes the round", scoreboard, winner.label()),
                None => scoreboard,
            },
            StateKind::GameOver => match self.winner {
                Some(winner) => format!("{} WINS! (R retry, Esc menu)", winner.label()),
                None => "DOUBLE KO! (R retry, Esc menu)".to_string(),
            },
            StateKind::Fight => scoreboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;
    use crate::game::trivia::QuestionBank;

    fn game(ruleset: Ruleset) -> Match {
        Match::new(ruleset, QuestionBank::fallback(), GameRng::from_seed(1))
    }

    #[test]
    fn test_menu_snapshot() {
        let snapshot = game(Ruleset::Arcade).snapshot();
        assert_eq!(snapshot.state, StateKind::Menu);
        assert_eq!(snapshot.mode, GameMode::Versus);
        assert_eq!(snapshot.menu_index, 0);
        assert_eq!(snapshot.menu_options[2], "EXIT");
        assert_eq!(snapshot.hud_line(), "Mementos Melee | > 1 PLAYER (VS AI)");
        assert!(snapshot.trivia.is_none());
        assert!(snapshot.winner.is_none());
    }

    #[test]
    fn test_fighter_views() {
        let snapshot = game(Ruleset::Rounds).snapshot();
        let p1 = snapshot.fighter(PlayerSlot::One);
        assert_eq!(p1.name, "The Procrastinator");
        assert_eq!(p1.bounds, Rect::new(200.0, 300.0, 80.0, 120.0));
        assert_eq!(p1.facing, Facing::Right);
        assert_eq!(p1.display_health, 100.0);
        assert!(!p1.flashing);
        assert_eq!(p1.stance, Stance::Idle);
        assert_eq!(p1.attack_cooldown, 0);
        assert_eq!(p1.animation.animation_name, "idle");

        let p2 = snapshot.fighter(PlayerSlot::Two);
        assert!(p2.animation.flip_horizontal);
        assert_eq!(snapshot.picks, ["The Procrastinator", "Caffeine Demon"]);
        assert_eq!(snapshot.wins, [0, 0]);
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.floor.top(), 420.0);
    }

    #[test]
    fn test_hud_line_follows_state_kind() {
        let mut snapshot = game(Ruleset::Rounds).snapshot();

        snapshot.state = StateKind::Fight;
        assert_eq!(snapshot.hud_line(), "P1 100 | P2 100 | Round 1 (0-0)");

        snapshot.state = StateKind::Pause;
        assert_eq!(snapshot.hud_line(), "P1 100 | P2 100 | Round 1 (0-0) | PAUSED (M menu, Q quit)");

        snapshot.state = StateKind::GameOver;
        assert_eq!(snapshot.hud_line(), "DOUBLE KO! (R retry, Esc menu)");
        snapshot.winner = Some(PlayerSlot::Two);
        assert_eq!(snapshot.hud_line(), format!("{} WINS! (R retry, Esc menu)", PlayerSlot::Two.label()));
    }
}
