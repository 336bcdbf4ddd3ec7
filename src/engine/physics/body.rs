use glam::Vec2;

use super::collision::Rect;
use super::world::Arena;
use crate::core::math::clamp;

/// Vertical contact state of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Resting on the floor
    #[default]
    Grounded,
    /// Launched by a jump and not yet landed
    Airborne,
}

impl Motion {
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }
}

/// What happened to a body during one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// The body touched down this frame after being airborne
    pub landed: bool,
}

/// Kinematic box integrated with hand-tuned per-frame constants
///
/// Position is the top-left corner in screen space. Only vertical velocity
/// is persistent; horizontal motion is supplied fresh every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    motion: Motion,
}

impl Body {
    /// Create a body standing on the floor at horizontal position `x`
    pub fn resting(x: f32, size: Vec2, arena: &Arena) -> Self {
        Self {
            position: Vec2::new(x, arena.resting_y(size.y)),
            size,
            velocity_y: 0.0,
            motion: Motion::Grounded,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Start a jump with the given (negative, upward) impulse.
    /// Returns false when already airborne.
    pub fn launch(&mut self, impulse: f32) -> bool {
        if !self.motion.is_grounded() {
            return false;
        }
        self.velocity_y = impulse;
        self.motion = Motion::Airborne;
        true
    }

    /// Put the body back on the floor at `x` with no velocity
    pub fn place(&mut self, x: f32, arena: &Arena) {
        self.position = Vec2::new(x, arena.resting_y(self.size.y));
        self.velocity_y = 0.0;
        self.motion = Motion::Grounded;
    }

    /// Advance one frame: gravity, floor contact, then horizontal movement.
    ///
    /// Floor contact is resolved against the projected position before any
    /// movement is applied, so a fast fall can never end below the floor.
    pub fn step(&mut self, dx: f32, gravity: f32, arena: &Arena) -> StepResult {
        self.velocity_y += gravity;
        let mut dy = self.velocity_y;

        let resting_y = arena.resting_y(self.size.y);
        let mut landed = false;
        if self.position.y + dy >= resting_y {
            landed = self.motion == Motion::Airborne;
            self.position.y = resting_y;
            self.velocity_y = 0.0;
            self.motion = Motion::Grounded;
            dy = 0.0;
        }

        self.position.x += dx;
        self.position.y += dy;

        let (min_x, max_x) = arena.horizontal_limits(self.size.x);
        self.position.x = clamp(self.position.x, min_x, max_x);

        StepResult { landed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const GRAVITY: f32 = 0.8;

    fn body_at(x: f32) -> Body {
        Body::resting(x, Vec2::new(60.0, 100.0), &Arena::standard())
    }

    #[test]
    fn test_resting_body_stays_on_floor() {
        let arena = Arena::standard();
        let mut body = body_at(200.0);
        for _ in 0..10 {
            body.step(0.0, GRAVITY, &arena);
        }
        assert_eq!(body.position.y, 320.0);
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.motion().is_grounded());
    }

    #[test]
    fn test_jump_arc_returns_to_floor() {
        let arena = Arena::standard();
        let mut body = body_at(200.0);
        assert!(body.launch(-15.0));
        assert!(!body.launch(-15.0), "no double jump");

        let first = body.step(0.0, GRAVITY, &arena);
        assert!(!first.landed);
        assert_relative_eq!(body.position.y, 320.0 - 14.2, epsilon = 1e-4);

        let mut landed = false;
        for _ in 0..60 {
            let result = body.step(0.0, GRAVITY, &arena);
            assert!(body.bounds().max().y <= arena.ground_y);
            landed |= result.landed;
        }
        assert!(landed);
        assert!(body.motion().is_grounded());
        assert_eq!(body.position.y, 320.0);
    }

    #[test]
    fn test_fast_fall_does_not_tunnel() {
        let arena = Arena::standard();
        let mut body = body_at(200.0);
        body.launch(-15.0);
        body.position.y = 300.0;
        body.velocity_y = 500.0;

        let result = body.step(0.0, GRAVITY, &arena);
        assert!(result.landed);
        assert_eq!(body.bounds().max().y, arena.ground_y);
    }

    #[test]
    fn test_horizontal_clamp() {
        let arena = Arena::standard();
        let mut body = body_at(2.0);
        body.step(-5.0, GRAVITY, &arena);
        assert_eq!(body.position.x, 0.0);

        body.position.x = 938.0;
        body.step(5.0, GRAVITY, &arena);
        assert_eq!(body.position.x, 940.0);
    }

    #[test]
    fn test_place_resets_velocity() {
        let arena = Arena::standard();
        let mut body = body_at(100.0);
        body.launch(-15.0);
        body.step(0.0, GRAVITY, &arena);
        body.place(700.0, &arena);

        assert_eq!(body.position.x, 700.0);
        assert_eq!(body.position.y, 320.0);
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.motion().is_grounded());
    }
}
