use glam::Vec2;
use parry2d::bounding_volume::Aabb;
use parry2d::math::Point;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn center_x(&self) -> f32 {
        self.min.x + self.size.x * 0.5
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Convert to a parry2d bounding box for intersection queries
    pub fn to_aabb(&self) -> Aabb {
        let max = self.max();
        Aabb::new(Point::new(self.min.x, self.min.y), Point::new(max.x, max.y))
    }

    /// Half-open overlap test: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.to_aabb()
            .intersection(&other.to_aabb())
            .map(|shared| {
                let extents = shared.extents();
                extents.x > 0.0 && extents.y > 0.0
            })
            .unwrap_or(false)
    }
}
