// Fighter entity: physics, attacks and damage for one combatant

use glam::Vec2;

use super::animation::{AnimationFrameData, AnimationPlayer};
use super::intent::Intent;
use super::roster::CharacterProfile;
use super::state::{AttackKind, Facing, Motion, Stance};
use super::stats::{AttackRelease, FighterStats};
use crate::core::math::approach;
use crate::engine::physics::{Arena, Body, Rect};
use crate::game::combat::attack_rect;

/// Which side of the keyboard controls a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// Zero-based index (input tables, win counters)
    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "P1",
            Self::Two => "P2",
        }
    }

    /// Horizontal spawn position
    pub fn spawn_x(&self) -> f32 {
        match self {
            Self::One => 200.0,
            Self::Two => 700.0,
        }
    }

    /// Fighters start facing each other
    pub fn spawn_facing(&self) -> Facing {
        match self {
            Self::One => Facing::Right,
            Self::Two => Facing::Left,
        }
    }
}

/// A landed attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub kind: AttackKind,
    pub damage: i32,
    /// Top centre of the defender when it was struck
    pub impact: Vec2,
}

/// Side effects of one `Fighter::advance` call
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameEvents {
    pub jumped: bool,
    pub landed: bool,
    pub attack_started: Option<AttackKind>,
    /// Live attack box this frame, whether or not it connected
    pub hitbox: Option<Rect>,
    pub hit: Option<Hit>,
}

/// One of the two combatants
#[derive(Debug, Clone)]
pub struct Fighter {
    slot: PlayerSlot,
    profile: &'static CharacterProfile,
    stats: FighterStats,
    body: Body,
    facing: Facing,
    stance: Stance,

    health: i32,
    /// Smoothed health for the health bar
    display_health: f32,

    attack_cooldown: u32,
    hit_flash: u32,

    /// Set once the comeback trivia fired for this fighter in the current match
    crisis_triggered: bool,

    animation: AnimationPlayer,
}

impl Fighter {
    /// Create a fighter standing at its slot's spawn point
    pub fn new(
        slot: PlayerSlot,
        profile: &'static CharacterProfile,
        stats: FighterStats,
        arena: &Arena,
    ) -> Self {
        let body = Body::resting(
            slot.spawn_x(),
            Vec2::new(stats.width, stats.height),
            arena,
        );
        let mut animation = AnimationPlayer::with_fighter_clips();
        animation.set_flip_horizontal(slot.spawn_facing().is_left());

        Self {
            slot,
            profile,
            body,
            facing: slot.spawn_facing(),
            stance: Stance::Idle,
            health: stats.max_health,
            display_health: stats.max_health as f32,
            attack_cooldown: 0,
            hit_flash: 0,
            crisis_triggered: false,
            animation,
            stats,
        }
    }

    /// Simulate one frame: cooldowns, intent, gravity, movement, attack
    /// resolution against `opponent`, then cosmetic timers.
    pub fn advance(&mut self, intent: &Intent, arena: &Arena, opponent: &mut Fighter) -> FrameEvents {
        let mut events = FrameEvents::default();

        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
            let release = match self.stats.attack_release {
                AttackRelease::NextFrame => true,
                AttackRelease::OnRecovery => self.attack_cooldown == 0,
            };
            if release {
                self.stance.release_attack();
            }
        }

        let mut dx = 0.0;
        if intent.move_left {
            dx -= self.stats.move_speed;
            self.facing = Facing::Left;
        }
        if intent.move_right {
            dx += self.stats.move_speed;
            self.facing = Facing::Right;
        }

        if intent.jump && self.body.launch(self.stats.jump_impulse) {
            events.jumped = true;
        }

        if let Some(kind) = intent.attack {
            if self.attack_cooldown == 0 && self.start_attack(kind) {
                events.attack_started = Some(kind);
            }
        }

        events.landed = self.body.step(dx, self.stats.gravity, arena).landed;

        if let Some(kind) = self.stance.attack_kind() {
            if self.stats.hit_window.contains(self.attack_cooldown) {
                if let Some(profile) = self.stats.attack(kind).copied() {
                    let reach = attack_rect(&self.body.bounds(), self.facing, &profile);
                    events.hitbox = Some(reach);

                    let target = opponent.bounds();
                    if reach.overlaps(&target) {
                        opponent.take_hit(profile.damage, &self.stats);
                        events.hit = Some(Hit {
                            kind,
                            damage: profile.damage,
                            impact: Vec2::new(target.center_x(), target.top()),
                        });
                    }
                }
            }
        }

        self.display_health = approach(
            self.display_health,
            self.health as f32,
            self.stats.display_health_rate,
        );
        self.hit_flash = self.hit_flash.saturating_sub(1);
        self.update_animation(dx);

        events
    }

    fn start_attack(&mut self, kind: AttackKind) -> bool {
        if self.stats.attack(kind).is_none() {
            return false;
        }
        self.stance = Stance::Attacking(kind);
        self.attack_cooldown = self.stats.attack_cooldown;
        self.animation.play_from_start(kind.animation_name());
        true
    }

    /// Apply a landed hit; `attacker` decides the flash length
    fn take_hit(&mut self, damage: i32, attacker: &FighterStats) {
        self.health -= damage;
        self.hit_flash = attacker.hit_flash_frames;
    }

    fn update_animation(&mut self, dx: f32) {
        let clip = self.stance.animation_name().unwrap_or(if dx != 0.0 {
            "walk"
        } else {
            "idle"
        });
        self.animation.play(clip);
        self.animation.set_flip_horizontal(self.facing.is_left());
        self.animation.update();
    }

    /// Restore health, add `amount`, capped at max health
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.stats.max_health);
    }

    /// Subtract health with no lower bound; the match decides what <= 0 means
    pub fn lose_health(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Put the fighter back at its spawn point with full health for a new
    /// round. The crisis flag survives: it is per match.
    pub fn restore_for_round(&mut self, arena: &Arena) {
        self.body.place(self.slot.spawn_x(), arena);
        self.facing = self.slot.spawn_facing();
        self.stance = Stance::Idle;
        self.health = self.stats.max_health;
        self.attack_cooldown = 0;
        self.hit_flash = 0;
        self.animation.play("idle");
        self.animation.set_flip_horizontal(self.facing.is_left());
    }

    /// Record that the comeback trivia fired. Returns false if it already had.
    pub fn mark_crisis(&mut self) -> bool {
        !std::mem::replace(&mut self.crisis_triggered, true)
    }

    pub fn crisis_triggered(&self) -> bool {
        self.crisis_triggered
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health <= 0
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn profile(&self) -> &'static CharacterProfile {
        self.profile
    }

    pub fn stats(&self) -> &FighterStats {
        &self.stats
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn motion(&self) -> Motion {
        self.body.motion()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    pub fn display_health(&self) -> f32 {
        self.display_health
    }

    pub fn attack_cooldown(&self) -> u32 {
        self.attack_cooldown
    }

    pub fn hit_flash(&self) -> u32 {
        self.hit_flash
    }

    pub fn animation_frame(&self) -> AnimationFrameData {
        self.animation.get_frame_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::testing::ScriptedRolls;
    use crate::core::rng::RandomSource;
    use crate::game::characters::roster::character;
    use crate::game::characters::stats::{ARCADE_STATS, ROUNDS_STATS};
    use approx::assert_relative_eq;

    fn pair(stats: FighterStats) -> (Fighter, Fighter, Arena) {
        let arena = Arena::standard();
        let p1 = Fighter::new(PlayerSlot::One, character(0), stats, &arena);
        let p2 = Fighter::new(PlayerSlot::Two, character(1), stats, &arena);
        (p1, p2, arena)
    }

    fn attack(kind: AttackKind) -> Intent {
        Intent {
            attack: Some(kind),
            ..Intent::idle()
        }
    }

    /// Move P2 so it stands right in front of P1
    fn close_in(p1: &Fighter, p2: &mut Fighter, arena: &Arena) {
        p2.body.place(p1.position().x + 50.0, arena);
    }

    #[test]
    fn test_spawn() {
        let (p1, p2, _) = pair(ARCADE_STATS);
        assert_eq!(p1.position(), Vec2::new(200.0, 320.0));
        assert_eq!(p2.position(), Vec2::new(700.0, 320.0));
        assert_eq!(p1.facing(), Facing::Right);
        assert_eq!(p2.facing(), Facing::Left);
        assert_eq!(p1.health(), 100);
        assert!(p1.motion().is_grounded());
    }

    #[test]
    fn test_movement_sets_facing() {
        let (mut p1, mut p2, arena) = pair(ARCADE_STATS);
        let left = Intent {
            move_left: true,
            ..Intent::idle()
        };
        p1.advance(&left, &arena, &mut p2);
        assert_eq!(p1.position().x, 195.0);
        assert_eq!(p1.facing(), Facing::Left);

        let right = Intent {
            move_right: true,
            ..Intent::idle()
        };
        p1.advance(&right, &arena, &mut p2);
        assert_eq!(p1.position().x, 200.0);
        assert_eq!(p1.facing(), Facing::Right);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let (mut p1, mut p2, arena) = pair(ARCADE_STATS);
        let jump = Intent {
            jump: true,
            ..Intent::idle()
        };

        let events = p1.advance(&jump, &arena, &mut p2);
        assert!(events.jumped);
        assert_eq!(p1.motion(), Motion::Airborne);
        assert_relative_eq!(p1.body.velocity_y, -14.2, epsilon = 1e-4);

        let events = p1.advance(&jump, &arena, &mut p2);
        assert!(!events.jumped);
        assert_relative_eq!(p1.body.velocity_y, -13.4, epsilon = 1e-4);
    }

    #[test]
    fn test_bounds_hold_under_random_input() {
        let (mut p1, mut p2, arena) = pair(ROUNDS_STATS);
        let mut rolls = ScriptedRolls::new(&[3, 14, 1, 9, 6, 0, 12, 7, 15, 2, 8, 11]);

        for _ in 0..2000 {
            let bits = rolls.below(16);
            let intent = Intent {
                move_left: bits & 1 != 0,
                move_right: bits & 2 != 0,
                jump: bits & 4 != 0,
                attack: (bits & 8 != 0).then_some(AttackKind::Heavy),
            };
            p1.advance(&intent, &arena, &mut p2);
            p2.advance(&intent, &arena, &mut p1);

            for fighter in [&p1, &p2] {
                let bounds = fighter.bounds();
                assert!(bounds.max().y <= arena.ground_y);
                assert!(bounds.left() >= 0.0);
                assert!(bounds.right() <= arena.width);
            }
        }
    }

    #[test]
    fn test_arcade_attack_hits_once_per_press() {
        let (mut p1, mut p2, arena) = pair(ARCADE_STATS);
        close_in(&p1, &mut p2, &arena);

        let events = p1.advance(&attack(AttackKind::Light), &arena, &mut p2);
        assert_eq!(events.attack_started, Some(AttackKind::Light));
        assert!(events.hit.is_some());
        assert_eq!(p2.health(), 90);
        assert_eq!(p2.hit_flash(), 15);

        // Defender stays inside the box for the rest of the cooldown
        for _ in 0..19 {
            let events = p1.advance(&Intent::idle(), &arena, &mut p2);
            assert!(events.hit.is_none());
            assert!(!p1.stance().is_attacking());
        }
        assert_eq!(p2.health(), 90);
        assert_eq!(p1.attack_cooldown(), 1);
    }

    #[test]
    fn test_arcade_held_attack_repeats_after_cooldown() {
        let (mut p1, mut p2, arena) = pair(ARCADE_STATS);
        close_in(&p1, &mut p2, &arena);

        let mut hits = 0;
        for _ in 0..41 {
            if p1.advance(&attack(AttackKind::Light), &arena, &mut p2).hit.is_some() {
                hits += 1;
            }
        }
        // Presses land on frames 1, 21 and 41
        assert_eq!(hits, 3);
        assert_eq!(p2.health(), 70);
    }

    #[test]
    fn test_arcade_has_no_heavy_attack() {
        let (mut p1, mut p2, arena) = pair(ARCADE_STATS);
        close_in(&p1, &mut p2, &arena);

        let events = p1.advance(&attack(AttackKind::Heavy), &arena, &mut p2);
        assert!(events.attack_started.is_none());
        assert_eq!(p1.attack_cooldown(), 0);
        assert_eq!(p2.health(), 100);
    }

    #[test]
    fn test_rounds_attack_lands_on_peak_frame() {
        let (mut p1, mut p2, arena) = pair(ROUNDS_STATS);
        close_in(&p1, &mut p2, &arena);

        p1.advance(&attack(AttackKind::Light), &arena, &mut p2);
        assert_eq!(p1.attack_cooldown(), 25);

        // Cooldown 24 down to 11: box not live yet
        for _ in 0..14 {
            let events = p1.advance(&Intent::idle(), &arena, &mut p2);
            assert!(events.hitbox.is_none());
        }
        assert_eq!(p2.health(), 100);

        let events = p1.advance(&Intent::idle(), &arena, &mut p2);
        assert_eq!(p1.attack_cooldown(), 10);
        assert_eq!(events.hit.map(|hit| hit.damage), Some(10));
        assert_eq!(p2.health(), 90);

        for _ in 0..10 {
            assert!(p1.advance(&Intent::idle(), &arena, &mut p2).hit.is_none());
        }
        assert_eq!(p2.health(), 90);
        assert_eq!(p1.stance(), Stance::Idle);
    }

    #[test]
    fn test_rounds_kick_reaches_further_than_punch() {
        let (mut p1, mut p2, arena) = pair(ROUNDS_STATS);
        // 100 units of air between the two bodies: out of punch range
        p2.body.place(p1.bounds().right() + 100.0, &arena);

        p1.advance(&attack(AttackKind::Light), &arena, &mut p2);
        for _ in 0..24 {
            assert!(p1.advance(&Intent::idle(), &arena, &mut p2).hit.is_none());
        }
        assert_eq!(p2.health(), 100);

        p1.advance(&attack(AttackKind::Heavy), &arena, &mut p2);
        let mut landed = None;
        for _ in 0..15 {
            if let Some(hit) = p1.advance(&Intent::idle(), &arena, &mut p2).hit {
                landed = Some(hit);
            }
        }
        let hit = landed.expect("kick connects at the peak frame");
        assert_eq!(hit.kind, AttackKind::Heavy);
        assert_eq!(hit.impact, Vec2::new(p2.bounds().center_x(), p2.bounds().top()));
        assert_eq!(p2.health(), 85);
    }

    #[test]
    fn test_rounds_simultaneous_punches_trade() {
        let (mut p1, mut p2, arena) = pair(ROUNDS_STATS);
        p2.body.place(p1.bounds().right() + 10.0, &arena);
        assert_eq!(p2.facing(), Facing::Left);

        p1.advance(&attack(AttackKind::Light), &arena, &mut p2);
        p2.advance(&attack(AttackKind::Light), &arena, &mut p1);

        let mut hits = [0, 0];
        for _ in 0..15 {
            if p1.advance(&Intent::idle(), &arena, &mut p2).hit.is_some() {
                hits[0] += 1;
            }
            // Being hit first does not cancel P2's own punch
            assert!(p2.stance().is_attacking());
            if p2.advance(&Intent::idle(), &arena, &mut p1).hit.is_some() {
                hits[1] += 1;
            }
        }
        assert_eq!(hits, [1, 1]);
        assert_eq!(p1.health(), 90);
        assert_eq!(p2.health(), 90);
        assert_eq!(p2.hit_flash(), 15);
    }

    #[test]
    fn test_hit_does_not_interrupt_movement() {
        let (mut p1, mut p2, arena) = pair(ROUNDS_STATS);
        close_in(&p1, &mut p2, &arena);
        p1.advance(&attack(AttackKind::Light), &arena, &mut p2);
        for _ in 0..15 {
            p1.advance(&Intent::idle(), &arena, &mut p2);
        }
        assert_eq!(p2.health(), 90);

        let start_x = p2.position().x;
        let walk = Intent {
            move_right: true,
            ..Intent::idle()
        };
        p2.advance(&walk, &arena, &mut p1);
        assert_eq!(p2.position().x, start_x + 5.0);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let (mut p1, _, _) = pair(ARCADE_STATS);
        p1.lose_health(30);
        p1.heal(50);
        assert_eq!(p1.health(), 100);

        p1.lose_health(85);
        p1.heal(50);
        assert_eq!(p1.health(), 65);
    }

    #[test]
    fn test_health_has_no_lower_clamp() {
        let (mut p1, _, _) = pair(ARCADE_STATS);
        p1.lose_health(120);
        assert_eq!(p1.health(), -20);
        assert!(p1.is_knocked_out());
    }

    #[test]
    fn test_display_health_converges() {
        let (mut p1, mut p2, arena) = pair(ARCADE_STATS);
        p2.lose_health(40);
        p2.advance(&Intent::idle(), &arena, &mut p1);
        assert_relative_eq!(p2.display_health(), 100.0 - 40.0 * 0.12, epsilon = 1e-4);

        for _ in 0..200 {
            p2.advance(&Intent::idle(), &arena, &mut p1);
        }
        assert_relative_eq!(p2.display_health(), 60.0, epsilon = 0.01);
    }

    #[test]
    fn test_mark_crisis_is_one_shot() {
        let (mut p1, _, _) = pair(ARCADE_STATS);
        assert!(p1.mark_crisis());
        assert!(!p1.mark_crisis());
        assert!(p1.crisis_triggered());
    }

    #[test]
    fn test_restore_for_round_keeps_crisis_flag() {
        let (mut p1, mut p2, arena) = pair(ROUNDS_STATS);
        p1.mark_crisis();
        p1.lose_health(90);
        p1.advance(
            &Intent {
                move_left: true,
                jump: true,
                ..Intent::idle()
            },
            &arena,
            &mut p2,
        );

        p1.restore_for_round(&arena);
        assert_eq!(p1.health(), 100);
        assert_eq!(p1.position(), Vec2::new(200.0, 300.0));
        assert_eq!(p1.facing(), Facing::Right);
        assert!(p1.motion().is_grounded());
        assert!(p1.crisis_triggered());
    }

    #[test]
    fn test_animation_follows_actions() {
        let (mut p1, mut p2, arena) = pair(ROUNDS_STATS);
        let walk = Intent {
            move_left: true,
            ..Intent::idle()
        };
        p1.advance(&walk, &arena, &mut p2);
        let frame = p1.animation_frame();
        assert_eq!(frame.animation_name, "walk");
        assert!(frame.flip_horizontal);

        p1.advance(&attack(AttackKind::Heavy), &arena, &mut p2);
        assert_eq!(p1.animation_frame().animation_name, "kick");

        p1.advance(&Intent::idle(), &arena, &mut p2);
        assert_eq!(p1.animation_frame().animation_name, "kick");
    }
}
