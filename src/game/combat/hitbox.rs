// Attack box geometry

use crate::engine::physics::Rect;
use crate::game::characters::stats::{AttackProfile, ReachOrigin};
use crate::game::characters::state::Facing;

/// Box an attack covers for an attacker with body `body` facing `facing`.
///
/// The box is mirrored around the origin point when facing left.
pub fn attack_rect(body: &Rect, facing: Facing, profile: &AttackProfile) -> Rect {
    let anchor = match (profile.origin, facing) {
        (ReachOrigin::Center, _) => body.center_x(),
        (ReachOrigin::LeadingEdge, Facing::Right) => body.right(),
        (ReachOrigin::LeadingEdge, Facing::Left) => body.left(),
    };
    let x = match facing {
        Facing::Right => anchor,
        Facing::Left => anchor - profile.reach,
    };
    Rect::new(x, body.top() + profile.y_offset, profile.reach, profile.height)
}
