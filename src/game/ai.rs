// Scripted opponent: chase, then occasionally jump or attack
//
// Stateless; every decision is a fresh roll against the current positions.

use crate::core::rng::RandomSource;
use crate::game::characters::{AttackKind, Fighter, Intent};

/// Horizontal gap the AI closes before it stops walking
pub const CHASE_DISTANCE: f32 = 60.0;

/// How much higher the opponent must be before the AI considers jumping
pub const JUMP_HEIGHT_GAP: f32 = 50.0;

/// Centre-to-centre distance inside which the AI may attack
pub const ATTACK_RANGE: f32 = 80.0;

/// Rolls are drawn from 0..=ROLL_MAX
const ROLL_MAX: u32 = 100;

/// Per-frame chance (in rolls below this value) of a jump attempt
const JUMP_CHANCE: u32 = 2;

/// Per-frame chance of an attack attempt
const ATTACK_CHANCE: u32 = 5;

/// Decide what `me` does this frame against `opponent`.
///
/// Two draws at most: one gated on height, one on distance. Draws are only
/// taken when their gate passes.
pub fn decide(me: &Fighter, opponent: &Fighter, rng: &mut impl RandomSource) -> Intent {
    let mut intent = Intent::idle();
    let mine = me.position();
    let theirs = opponent.position();

    if mine.x > theirs.x + CHASE_DISTANCE {
        intent.move_left = true;
    } else if mine.x < theirs.x - CHASE_DISTANCE {
        intent.move_right = true;
    }

    if theirs.y < mine.y - JUMP_HEIGHT_GAP && roll(rng) < JUMP_CHANCE {
        intent.jump = true;
    }

    let distance = (me.bounds().center_x() - opponent.bounds().center_x()).abs();
    if distance < ATTACK_RANGE && roll(rng) < ATTACK_CHANCE {
        intent.attack = Some(AttackKind::Light);
    }

    intent
}

fn roll(rng: &mut impl RandomSource) -> u32 {
    rng.below(ROLL_MAX + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::testing::ScriptedRolls;
    use crate::engine::physics::Arena;
    use crate::game::characters::{character, PlayerSlot, ARCADE_STATS};

    fn fighters() -> (Fighter, Fighter, Arena) {
        let arena = Arena::standard();
        let human = Fighter::new(PlayerSlot::One, character(0), ARCADE_STATS, &arena);
        let bot = Fighter::new(PlayerSlot::Two, character(1), ARCADE_STATS, &arena);
        (human, bot, arena)
    }

    /// Walk `fighter` until its x equals `x`
    fn walk_to(fighter: &mut Fighter, other: &mut Fighter, x: f32, arena: &Arena) {
        while fighter.position().x != x {
            let intent = Intent {
                move_left: fighter.position().x > x,
                move_right: fighter.position().x < x,
                ..Intent::idle()
            };
            fighter.advance(&intent, arena, other);
        }
    }

    #[test]
    fn test_chases_from_the_right() {
        let (human, bot, _) = fighters();
        let intent = decide(&bot, &human, &mut ScriptedRolls::always(100));
        assert!(intent.move_left);
        assert!(!intent.move_right);
        assert!(!intent.jump);
        assert!(intent.attack.is_none());
    }

    #[test]
    fn test_chases_from_the_left() {
        let (human, bot, _) = fighters();
        let intent = decide(&human, &bot, &mut ScriptedRolls::always(100));
        assert!(intent.move_right);
        assert!(!intent.move_left);
    }

    #[test]
    fn test_holds_position_inside_chase_distance() {
        let (mut human, mut bot, arena) = fighters();
        walk_to(&mut bot, &mut human, 260.0, &arena);

        let intent = decide(&bot, &human, &mut ScriptedRolls::always(100));
        assert!(!intent.move_left);
        assert!(!intent.move_right);
    }

    #[test]
    fn test_attacks_in_range_on_low_roll() {
        let (mut human, mut bot, arena) = fighters();
        walk_to(&mut bot, &mut human, 250.0, &arena);

        let intent = decide(&bot, &human, &mut ScriptedRolls::always(4));
        assert_eq!(intent.attack, Some(AttackKind::Light));

        let intent = decide(&bot, &human, &mut ScriptedRolls::always(5));
        assert!(intent.attack.is_none());
    }

    #[test]
    fn test_never_attacks_out_of_range() {
        let (human, bot, _) = fighters();
        let intent = decide(&bot, &human, &mut ScriptedRolls::always(0));
        assert!(intent.attack.is_none());
    }

    #[test]
    fn test_jumps_only_when_opponent_is_high() {
        let (mut human, bot, arena) = fighters();
        let mut rolls = ScriptedRolls::always(0);
        assert!(!decide(&bot, &human, &mut rolls).jump);

        // Airborne long enough to clear the 50 unit gap
        let jump = Intent {
            jump: true,
            ..Intent::idle()
        };
        let mut dummy = bot.clone();
        for _ in 0..6 {
            human.advance(&jump, &arena, &mut dummy);
        }
        assert!(human.position().y < bot.position().y - JUMP_HEIGHT_GAP);

        assert!(decide(&bot, &human, &mut ScriptedRolls::always(1)).jump);
        assert!(!decide(&bot, &human, &mut ScriptedRolls::always(2)).jump);
    }
}
