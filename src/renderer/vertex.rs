//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Build a linear color from 8-bit channels
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgba;

    pub const WHITE: [f32; 4] = rgba(255, 255, 255, 255);
    /// Menu and HUD text
    pub const TEXT: [f32; 4] = rgba(245, 245, 245, 255);
    /// Background sprite tint (slightly see-through)
    pub const BACKGROUND_TINT: [f32; 4] = rgba(255, 255, 255, 200);

    pub const RED: [f32; 4] = rgba(230, 41, 55, 255);
    pub const ORANGE: [f32; 4] = rgba(255, 161, 0, 255);
    pub const YELLOW: [f32; 4] = rgba(253, 249, 0, 255);
    pub const GOLD: [f32; 4] = rgba(255, 203, 0, 255);

    pub const SHIP_TRAIL: [f32; 4] = rgba(255, 95, 31, 100);
    pub const ASTEROID_TRAIL: [f32; 4] = rgba(255, 190, 51, 100);
}
