// Comeback trivia: question bank and the active question session

use log::{info, warn};
use serde::Deserialize;

use crate::core::rng::RandomSource;
use crate::engine::assets::{AssetError, AssetLoader};
use crate::game::characters::{Fighter, PlayerSlot};

/// Health at or below which a fighter's crisis triggers
pub const CRISIS_THRESHOLD: i32 = 20;

/// Health restored by a correct answer (capped at max health)
pub const CORRECT_HEAL: i32 = 50;

/// Health lost to a wrong answer
pub const WRONG_PENALTY: i32 = 20;

/// Default question file name, resolved by the asset loader
pub const QUESTIONS_FILE: &str = "questions.json";

/// One prompt and its expected answer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "q")]
    pub prompt: String,
    #[serde(rename = "a")]
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Used when no question file could be read
    pub fn fallback() -> Self {
        Self::new("File missing. Type OK.", "OK")
    }
}

/// Questions available for crisis draws. Never empty.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Bank from an explicit list; an empty list becomes the fallback question
    pub fn new(questions: Vec<Question>) -> Self {
        if questions.is_empty() {
            return Self::fallback();
        }
        Self { questions }
    }

    pub fn fallback() -> Self {
        Self {
            questions: vec![Question::fallback()],
        }
    }

    /// Read a JSON array of `{"q": ..., "a": ...}` records
    pub fn load(loader: &AssetLoader, name: &str) -> Result<Self, AssetError> {
        let questions: Vec<Question> = loader.load_json(name)?;
        Ok(Self::new(questions))
    }

    /// Like `load`, but a missing or malformed file degrades to the fallback
    pub fn load_or_fallback(loader: &AssetLoader, name: &str) -> Self {
        match Self::load(loader, name) {
            Ok(bank) => {
                info!("Loaded {} trivia questions from {}", bank.len(), name);
                bank
            }
            Err(e) => {
                warn!("Using fallback trivia question: {}", e);
                Self::fallback()
            }
        }
    }

    /// Uniform random draw
    pub fn pick(&self, rng: &mut impl RandomSource) -> &Question {
        &self.questions[rng.index(self.questions.len()).min(self.questions.len() - 1)]
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaOutcome {
    Correct,
    Wrong,
}

/// A question being answered by the fighter whose crisis triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaSession {
    player: PlayerSlot,
    prompt: String,
    /// Uppercased expected answer
    expected: String,
    input: String,
}

impl TriviaSession {
    pub fn new(player: PlayerSlot, question: &Question) -> Self {
        Self {
            player,
            prompt: question.prompt.clone(),
            expected: question.answer.to_uppercase(),
            input: String::new(),
        }
    }

    /// Append typed characters to the answer
    pub fn push_text(&mut self, text: &str) {
        self.input.push_str(text);
    }

    /// Remove the last typed character
    pub fn erase(&mut self) {
        self.input.pop();
    }

    /// Case-insensitive, whitespace-sensitive comparison
    pub fn is_correct(&self) -> bool {
        self.input.to_uppercase() == self.expected
    }

    /// Grade the answer and apply the heal or penalty to `fighter`
    pub fn resolve(&self, fighter: &mut Fighter) -> TriviaOutcome {
        if self.is_correct() {
            fighter.heal(CORRECT_HEAL);
            TriviaOutcome::Correct
        } else {
            fighter.lose_health(WRONG_PENALTY);
            TriviaOutcome::Wrong
        }
    }

    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
