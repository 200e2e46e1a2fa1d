//! Vapor trails left behind the ship and asteroids

use glam::Vec2;

/// One puff of vapor (oldest first in a trail)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub size: f32,
}

/// A fading sequence of vapor puffs, most recent last
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: Vec<TrailPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shrink every puff by `decrement`, dropping the ones that vanish,
    /// then append a fresh puff
    pub fn age_and_push(&mut self, decrement: f32, pos: Vec2, size: f32) {
        for point in &mut self.points {
            point.size -= decrement;
        }
        self.points.retain(|p| p.size > 0.0);
        self.points.push(TrailPoint { pos, size });
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
