// Character system
//
// This module contains everything related to the two combatants:
// - Fighter entity (physics, attacks, damage)
// - Per-ruleset stats and attack geometry
// - Stance and facing sub-states
// - Per-frame intent derived from input or AI
// - Animation clip selection
// - Selectable roster

pub mod animation;
pub mod fighter;
pub mod intent;
pub mod roster;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationFrameData, AnimationPlayer};
pub use fighter::{Fighter, FrameEvents, Hit, PlayerSlot};
pub use intent::Intent;
pub use roster::{character, CharacterProfile, ROSTER};
pub use state::{AttackKind, Facing, Motion, Stance};
pub use stats::{FighterStats, ARCADE_STATS, ROUNDS_STATS};
