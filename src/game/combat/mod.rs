// Combat geometry and hit feedback

pub mod effects;
pub mod hitbox;

pub use effects::{DamagePopup, Effects};
pub use hitbox::attack_rect;
