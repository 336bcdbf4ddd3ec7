use super::collision::Rect;

/// Screen dimensions
pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 500.0;

/// Distance between the floor and the bottom of the screen
const FLOOR_DEPTH: f32 = 80.0;

/// The single-screen stage both fighters live in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// y coordinate of the floor surface
    pub ground_y: f32,
}

impl Arena {
    /// The standard 1000x500 stage with the floor 80 units above the bottom
    pub const fn standard() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            ground_y: SCREEN_HEIGHT - FLOOR_DEPTH,
        }
    }

    /// Leftmost and rightmost x a body of `width` may occupy
    pub fn horizontal_limits(&self, width: f32) -> (f32, f32) {
        (0.0, (self.width - width).max(0.0))
    }

    /// y coordinate that puts a body of `height` on the floor
    pub fn resting_y(&self, height: f32) -> f32 {
        self.ground_y - height
    }

    /// The floor strip, for renderers
    pub fn floor(&self) -> Rect {
        Rect::new(0.0, self.ground_y, self.width, self.height - self.ground_y)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::standard()
    }
}
