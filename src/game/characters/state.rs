// Per-fighter sub-states

pub use crate::engine::physics::Motion;

/// Which way a fighter is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// The two attack buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    /// Punch
    Light,
    /// Kick: more damage, longer reach
    Heavy,
}

impl AttackKind {
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Light => "punch",
            Self::Heavy => "kick",
        }
    }
}

/// What a fighter is doing with its hands
///
/// Being hit never touches the stance: an attack already running keeps its
/// hit window, so two fighters can trade blows on the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Idle,
    Attacking(AttackKind),
}

impl Stance {
    pub fn attack_kind(&self) -> Option<AttackKind> {
        match self {
            Self::Attacking(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking(_))
    }

    /// Drop an attack back to idle
    pub fn release_attack(&mut self) {
        if self.is_attacking() {
            *self = Self::Idle;
        }
    }

    /// Get the animation name for this stance, if it overrides movement
    pub fn animation_name(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Attacking(kind) => Some(kind.animation_name()),
        }
    }
}
