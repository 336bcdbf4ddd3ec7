// Fighter tuning - one stat block per ruleset, shared by both players
//
// Both fighters in a match always use the same block; characters differ
// only in name and presentation.

use super::state::AttackKind;

/// Where an attack box starts relative to the attacker's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReachOrigin {
    /// Box starts at the body's horizontal centre
    Center,
    /// Box starts at the body's leading edge (right edge facing right)
    LeadingEdge,
}

/// Geometry and damage of one attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    pub damage: i32,
    /// Horizontal length of the attack box
    pub reach: f32,
    /// Vertical size of the attack box
    pub height: f32,
    /// Distance from the top of the body to the top of the attack box
    pub y_offset: f32,
    pub origin: ReachOrigin,
}

/// Cooldown values during which an attack box is live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitWindow {
    /// Every cooldown value in `first..=last`
    Span { first: u32, last: u32 },
    /// A single cooldown value
    Peak(u32),
}

impl HitWindow {
    pub fn contains(&self, cooldown: u32) -> bool {
        match *self {
            Self::Span { first, last } => (first..=last).contains(&cooldown),
            Self::Peak(frame) => cooldown == frame,
        }
    }
}

/// When an attacking fighter returns to idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRelease {
    /// On the first cooldown tick after the attack starts
    NextFrame,
    /// When the cooldown counts back down to zero
    OnRecovery,
}

/// Fixed fighter stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterStats {
    // Movement
    /// Horizontal speed (units/frame)
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,

    // Body
    pub width: f32,
    pub height: f32,

    // Combat
    pub max_health: i32,
    /// Frames before another attack may start
    pub attack_cooldown: u32,
    pub hit_window: HitWindow,
    pub attack_release: AttackRelease,
    pub light: AttackProfile,
    /// None when the ruleset has a single attack button
    pub heavy: Option<AttackProfile>,
    /// Frames a defender flashes after being hit
    pub hit_flash_frames: u32,

    // Presentation
    /// Fraction of the gap display health closes each frame
    pub display_health_rate: f32,
}

/// Stats for the arcade ruleset: one attack, live on the frame it starts
pub const ARCADE_STATS: FighterStats = FighterStats {
    move_speed: 5.0,
    jump_impulse: -15.0,
    gravity: 0.8,

    width: 60.0,
    height: 100.0,

    max_health: 100,
    attack_cooldown: 20,
    hit_window: HitWindow::Span { first: 15, last: 20 },
    attack_release: AttackRelease::NextFrame,
    light: AttackProfile {
        damage: 10,
        reach: 80.0,
        height: 60.0,
        y_offset: 30.0,
        origin: ReachOrigin::Center,
    },
    heavy: None,
    hit_flash_frames: 15,

    display_health_rate: 0.12,
};

/// Stats for the rounds ruleset: punch and kick with a single peak frame
pub const ROUNDS_STATS: FighterStats = FighterStats {
    move_speed: 5.0,
    jump_impulse: -15.0,
    gravity: 0.8,

    width: 80.0,
    height: 120.0,

    max_health: 100,
    attack_cooldown: 25,
    hit_window: HitWindow::Peak(10),
    attack_release: AttackRelease::OnRecovery,
    light: AttackProfile {
        damage: 10,
        reach: 80.0,
        height: 80.0,
        y_offset: 20.0,
        origin: ReachOrigin::LeadingEdge,
    },
    heavy: Some(AttackProfile {
        damage: 15,
        reach: 130.0,
        height: 80.0,
        y_offset: 20.0,
        origin: ReachOrigin::LeadingEdge,
    }),
    hit_flash_frames: 15,

    display_health_rate: 0.12,
};

impl FighterStats {
    /// Profile for an attack kind, if this ruleset has it
    pub fn attack(&self, kind: AttackKind) -> Option<&AttackProfile> {
        match kind {
            AttackKind::Light => Some(&self.light),
            AttackKind::Heavy => self.heavy.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcade_window_spans_start_frame() {
        let window = ARCADE_STATS.hit_window;
        assert!(window.contains(ARCADE_STATS.attack_cooldown));
        assert!(window.contains(15));
        assert!(!window.contains(14));
        assert!(!window.contains(21));
    }

    #[test]
    fn test_rounds_window_is_single_peak() {
        let window = ROUNDS_STATS.hit_window;
        let live: Vec<u32> = (0..=ROUNDS_STATS.attack_cooldown)
            .filter(|cd| window.contains(*cd))
            .collect();
        assert_eq!(live, vec![10]);
    }

    #[test]
    fn test_heavy_only_in_rounds() {
        assert!(ARCADE_STATS.attack(AttackKind::Heavy).is_none());
        let kick = ROUNDS_STATS.attack(AttackKind::Heavy).unwrap();
        let punch = ROUNDS_STATS.attack(AttackKind::Light).unwrap();
        assert_eq!(kick.damage, 15);
        assert_eq!(punch.damage, 10);
        assert_eq!(kick.reach - punch.reach, 50.0);
    }

    #[test]
    fn test_shared_movement() {
        for stats in [ARCADE_STATS, ROUNDS_STATS] {
            assert_eq!(stats.move_speed, 5.0);
            assert_eq!(stats.jump_impulse, -15.0);
            assert_eq!(stats.max_health, 100);
        }
    }
}
