// Best-of-three round bookkeeping

use crate::game::characters::PlayerSlot;

/// Round wins needed to take the match
pub const WINS_NEEDED: u32 = 2;

/// Frames the round result stays on screen before play continues (2 s)
pub const ROUND_END_DELAY: u32 = 120;

/// Per-player round wins and the current round number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTracker {
    wins: [u32; 2],
    round: u32,
}

impl Default for RoundTracker {
    fn default() -> Self {
        Self {
            wins: [0, 0],
            round: 1,
        }
    }
}

impl RoundTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the winner of a round where at least one fighter is down.
    /// Player two takes double knockouts.
    pub fn round_winner(p1_health: i32) -> PlayerSlot {
        if p1_health <= 0 {
            PlayerSlot::Two
        } else {
            PlayerSlot::One
        }
    }

    pub fn record_win(&mut self, winner: PlayerSlot) {
        self.wins[winner.index()] += 1;
    }

    /// The player who has reached `WINS_NEEDED`, if any
    pub fn match_winner(&self) -> Option<PlayerSlot> {
        PlayerSlot::ALL
            .into_iter()
            .find(|slot| self.wins[slot.index()] >= WINS_NEEDED)
    }

    pub fn next_round(&mut self) {
        self.round += 1;
    }

    pub fn wins(&self, slot: PlayerSlot) -> u32 {
        self.wins[slot.index()]
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
