// Match: owns both fighters and runs the game state machine
//
// One `update` call is one simulated frame. Every state reads the input it
// cares about and ignores the rest, so any state+input combination that is
// not a transition is a no-op.

use log::{debug, info};

use crate::core::rng::GameRng;
use crate::engine::input::{Action, InputManager};
use crate::engine::physics::{Arena, Rect};
use crate::game::ai;
use crate::game::characters::{Fighter, FrameEvents, Intent, PlayerSlot};
use crate::game::combat::Effects;
use crate::game::menu::{CharacterSelect, MainMenu, MenuOption};
use crate::game::rounds::{RoundTracker, ROUND_END_DELAY};
use crate::game::snapshot::FrameSnapshot;
use crate::game::state::{GameMode, GameState, Ruleset};
use crate::game::trivia::{QuestionBank, TriviaSession, CRISIS_THRESHOLD};

/// Simulation context for one play session
pub struct Match {
    ruleset: Ruleset,
    mode: GameMode,
    state: GameState,
    arena: Arena,

    p1: Fighter,
    p2: Fighter,

    menu: MainMenu,
    selection: CharacterSelect,
    rounds: RoundTracker,
    effects: Effects,
    /// Attack boxes that were live during the last simulated frame
    hitboxes: Vec<Rect>,

    questions: QuestionBank,
    rng: GameRng,

    frame: u64,
    exit_requested: bool,
}

impl Match {
    /// New session sitting in the main menu
    pub fn new(ruleset: Ruleset, questions: QuestionBank, rng: GameRng) -> Self {
        let arena = Arena::standard();
        let selection = CharacterSelect::default();
        let stats = ruleset.stats();

        info!(
            "New {:?} match ({} questions, seed {:?})",
            ruleset,
            questions.len(),
            rng.seed()
        );

        Self {
            ruleset,
            mode: GameMode::default(),
            state: GameState::Menu,
            p1: Fighter::new(PlayerSlot::One, selection.profile(PlayerSlot::One), stats, &arena),
            p2: Fighter::new(PlayerSlot::Two, selection.profile(PlayerSlot::Two), stats, &arena),
            arena,
            menu: MainMenu::default(),
            selection,
            rounds: RoundTracker::new(),
            effects: Effects::new(),
            hitboxes: Vec::new(),
            questions,
            rng,
            frame: 0,
            exit_requested: false,
        }
    }

    /// Run one simulated frame
    pub fn update(&mut self, input: &InputManager) {
        self.frame += 1;

        match self.state {
            GameState::Menu => self.update_menu(input),
            GameState::CharacterSelect => self.update_character_select(input),
            GameState::Fight => self.update_fight(input),
            GameState::Pause => self.update_pause(input),
            GameState::Trivia(_) => self.update_trivia(input),
            GameState::RoundEnd { .. } => self.update_round_end(input),
            GameState::GameOver { .. } => self.update_game_over(input),
        }
    }

    fn update_menu(&mut self, input: &InputManager) {
        if input.just_pressed(Action::MenuUp) {
            self.menu.up();
        }
        if input.just_pressed(Action::MenuDown) {
            self.menu.down();
        }
        if !input.just_pressed(Action::Confirm) {
            return;
        }

        self.mode = match self.menu.selected() {
            MenuOption::VsAi => GameMode::VsAi,
            MenuOption::Versus => GameMode::Versus,
            MenuOption::Exit => {
                info!("Exit selected from menu");
                self.exit_requested = true;
                return;
            }
        };
        info!("Starting {:?} game", self.mode);

        self.reset_match();
        if self.ruleset.has_character_select() {
            self.transition(GameState::CharacterSelect);
        } else {
            self.transition(GameState::Fight);
        }
    }

    fn update_character_select(&mut self, input: &InputManager) {
        if input.just_pressed(Action::Cancel) {
            self.transition(GameState::Menu);
            return;
        }

        if input.just_pressed(Action::MenuUp) {
            self.selection.cycle(PlayerSlot::One, -1);
        }
        if input.just_pressed(Action::MenuDown) {
            self.selection.cycle(PlayerSlot::One, 1);
        }
        if let Some(p2) = input.player(PlayerSlot::Two.index()) {
            if p2.just_pressed(Action::MoveLeft) {
                self.selection.cycle(PlayerSlot::Two, -1);
            }
            if p2.just_pressed(Action::MoveRight) {
                self.selection.cycle(PlayerSlot::Two, 1);
            }
        }

        if input.just_pressed(Action::Confirm) {
            info!(
                "Fighters: {} vs {}",
                self.selection.profile(PlayerSlot::One).name,
                self.selection.profile(PlayerSlot::Two).name
            );
            self.reset_match();
            self.transition(GameState::Fight);
        }
    }

    fn update_fight(&mut self, input: &InputManager) {
        if input.just_pressed(Action::Pause) || input.just_pressed(Action::Cancel) {
            self.transition(GameState::Pause);
            return;
        }

        self.hitboxes.clear();

        let p1_intent = player_intent(input, PlayerSlot::One);
        let events = self.p1.advance(&p1_intent, &self.arena, &mut self.p2);
        self.record_events(PlayerSlot::One, &events);

        // The AI reacts to where player one ended up this frame
        let p2_intent = match self.mode {
            GameMode::VsAi => ai::decide(&self.p2, &self.p1, &mut self.rng),
            GameMode::Versus => player_intent(input, PlayerSlot::Two),
        };
        let events = self.p2.advance(&p2_intent, &self.arena, &mut self.p1);
        self.record_events(PlayerSlot::Two, &events);

        self.effects.update();

        if self.p1.is_knocked_out() || self.p2.is_knocked_out() {
            self.end_round();
            return;
        }

        let crisis = PlayerSlot::ALL.into_iter().find(|slot| {
            let fighter = self.fighter(*slot);
            fighter.health() <= CRISIS_THRESHOLD && !fighter.crisis_triggered()
        });
        if let Some(slot) = crisis {
            self.trigger_crisis(slot);
        }
    }

    fn record_events(&mut self, slot: PlayerSlot, events: &FrameEvents) {
        if let Some(hitbox) = events.hitbox {
            self.hitboxes.push(hitbox);
        }
        if let Some(hit) = events.hit {
            debug!(
                "{} lands {:?} for {} (frame {})",
                slot.label(),
                hit.kind,
                hit.damage,
                self.frame
            );
            if self.ruleset == Ruleset::Rounds {
                self.effects.spawn_popup(hit.impact, hit.damage);
            }
        }
    }

    /// At least one fighter is down
    fn end_round(&mut self) {
        match self.ruleset {
            Ruleset::Arcade => {
                let winner = match (self.p1.is_knocked_out(), self.p2.is_knocked_out()) {
                    (false, true) => Some(PlayerSlot::One),
                    (true, false) => Some(PlayerSlot::Two),
                    _ => None,
                };
                info!("Knockout, winner {:?}", winner);
                self.transition(GameState::GameOver { winner });
            }
            Ruleset::Rounds => {
                let winner = RoundTracker::round_winner(self.p1.health());
                self.rounds.record_win(winner);
                info!(
                    "Round {} to {} ({}-{})",
                    self.rounds.round(),
                    winner.label(),
                    self.rounds.wins(PlayerSlot::One),
                    self.rounds.wins(PlayerSlot::Two)
                );
                self.transition(GameState::RoundEnd {
                    winner,
                    frames_left: ROUND_END_DELAY,
                });
            }
        }
    }

    fn trigger_crisis(&mut self, slot: PlayerSlot) {
        self.fighter_mut(slot).mark_crisis();
        let question = self.questions.pick(&mut self.rng);
        info!("{} in crisis: {:?}", slot.label(), question.prompt);
        let session = TriviaSession::new(slot, question);
        self.transition(GameState::Trivia(session));
    }

    fn update_pause(&mut self, input: &InputManager) {
        if input.just_pressed(Action::Pause) || input.just_pressed(Action::Cancel) {
            self.transition(GameState::Fight);
        } else if input.just_pressed(Action::MainMenu) {
            self.reset_match();
            self.transition(GameState::Menu);
        } else if input.just_pressed(Action::Quit) {
            info!("Quit requested from pause menu");
            self.exit_requested = true;
        }
    }

    fn update_trivia(&mut self, input: &InputManager) {
        let GameState::Trivia(session) = &mut self.state else {
            return;
        };

        session.push_text(input.typed_text());
        if input.just_pressed(Action::Erase) {
            session.erase();
        }
        if !input.just_pressed(Action::Confirm) {
            return;
        }

        let session = session.clone();
        let fighter = self.fighter_mut(session.player());
        let outcome = session.resolve(fighter);
        info!(
            "{} answered {:?}: {:?}, health now {}",
            session.player().label(),
            session.input(),
            outcome,
            fighter.health()
        );
        self.transition(GameState::Fight);
    }

    fn update_round_end(&mut self, input: &InputManager) {
        if self.handle_retry_or_leave(input) {
            return;
        }

        let GameState::RoundEnd { frames_left, .. } = &mut self.state else {
            return;
        };
        *frames_left = frames_left.saturating_sub(1);
        if *frames_left > 0 {
            return;
        }

        if let Some(champion) = self.rounds.match_winner() {
            info!("{} wins the match", champion.label());
            self.transition(GameState::GameOver {
                winner: Some(champion),
            });
        } else {
            self.start_next_round();
            self.transition(GameState::Fight);
        }
    }

    fn update_game_over(&mut self, input: &InputManager) {
        self.handle_retry_or_leave(input);
    }

    /// Retry restarts the match, Cancel goes back to the menu.
    /// Returns true if either happened.
    fn handle_retry_or_leave(&mut self, input: &InputManager) -> bool {
        if input.just_pressed(Action::Retry) {
            self.reset_match();
            self.transition(GameState::Fight);
            true
        } else if input.just_pressed(Action::Cancel) {
            self.transition(GameState::Menu);
            true
        } else {
            false
        }
    }

    fn start_next_round(&mut self) {
        self.rounds.next_round();
        self.p1.restore_for_round(&self.arena);
        self.p2.restore_for_round(&self.arena);
        self.effects.clear();
        self.hitboxes.clear();
        info!("Round {}", self.rounds.round());
    }

    /// Fresh fighters from the current picks, round counters and crisis
    /// flags cleared
    pub fn reset_match(&mut self) {
        let stats = self.ruleset.stats();
        self.p1 = Fighter::new(
            PlayerSlot::One,
            self.selection.profile(PlayerSlot::One),
            stats,
            &self.arena,
        );
        self.p2 = Fighter::new(
            PlayerSlot::Two,
            self.selection.profile(PlayerSlot::Two),
            stats,
            &self.arena,
        );
        self.rounds.reset();
        self.effects.clear();
        self.hitboxes.clear();
    }

    fn transition(&mut self, next: GameState) {
        info!("State: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    /// Render-boundary view of the current frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self)
    }

    pub fn fighter(&self, slot: PlayerSlot) -> &Fighter {
        match slot {
            PlayerSlot::One => &self.p1,
            PlayerSlot::Two => &self.p2,
        }
    }

    fn fighter_mut(&mut self, slot: PlayerSlot) -> &mut Fighter {
        match slot {
            PlayerSlot::One => &mut self.p1,
            PlayerSlot::Two => &mut self.p2,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn selection(&self) -> &CharacterSelect {
        &self.selection
    }

    pub fn rounds(&self) -> &RoundTracker {
        &self.rounds
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn hitboxes(&self) -> &[Rect] {
        &self.hitboxes
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

fn player_intent(input: &InputManager, slot: PlayerSlot) -> Intent {
    input
        .player(slot.index())
        .map(Intent::from_input)
        .unwrap_or_default()
}
