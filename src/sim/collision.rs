//! Circle collision primitive
//!
//! Every hit test in the game is circle against circle: ship hull against
//! asteroid bodies, and anything against a black hole's lethal core.

use glam::Vec2;

/// A collision circle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn intersects(&self, other: &Circle) -> bool {
        circles_intersect(self.center, self.radius, other.center, other.radius)
    }
}

/// True when the two circles overlap or touch
///
/// Symmetric in its two arguments. A negative radius shrinks the reach of
/// the other circle, matching the host library's primitive.
#[inline]
pub fn circles_intersect(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    center_a.distance(center_b) <= radius_a + radius_b
}
