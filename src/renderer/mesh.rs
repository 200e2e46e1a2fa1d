//! Vertex-buffer canvas
//!
//! Tessellates every draw call into a flat triangle list that a GPU backend
//! can upload as-is. Sprites become tinted quads; text is collected
//! separately for the host's font renderer.

use std::collections::HashMap;

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Canvas, Sprite, SpriteDraw};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A queued text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Canvas that builds one frame's triangle list
#[derive(Debug, Clone)]
pub struct MeshCanvas {
    vertices: Vec<Vertex>,
    texts: Vec<TextDraw>,
    sprite_sizes: HashMap<Sprite, Vec2>,
}

impl Default for MeshCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCanvas {
    /// Canvas with the stock texture sizes
    pub fn new() -> Self {
        let sprite_sizes = HashMap::from([
            (Sprite::Background, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            (Sprite::Ship, Vec2::new(32.0, 32.0)),
            (Sprite::Asteroid, Vec2::new(24.0, 24.0)),
            (Sprite::BlackHole, Vec2::new(32.0, 32.0)),
            (Sprite::Star, Vec2::new(16.0, 16.0)),
        ]);
        Self {
            vertices: Vec::new(),
            texts: Vec::new(),
            sprite_sizes,
        }
    }

    /// Override a texture size (e.g. after loading the real image)
    pub fn with_sprite_size(mut self, sprite: Sprite, size: Vec2) -> Self {
        self.sprite_sizes.insert(sprite, size);
        self
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw vertex data ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn texts(&self) -> &[TextDraw] {
        &self.texts
    }
}

impl Canvas for MeshCanvas {
    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.texts.clear();
        let screen = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        self.vertices
            .extend(shapes::rotated_quad(screen / 2.0, screen, 0.0, color));
    }

    fn sprite_size(&self, sprite: Sprite) -> Vec2 {
        self.sprite_sizes.get(&sprite).copied().unwrap_or(Vec2::ONE)
    }

    fn draw_sprite(&mut self, _sprite: Sprite, draw: SpriteDraw) {
        self.vertices.extend(shapes::rotated_quad(
            draw.center,
            draw.size,
            draw.rotation,
            draw.tint,
        ));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        if radius <= 0.0 {
            return;
        }
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        self.vertices.extend([
            Vertex::at(a, color),
            Vertex::at(b, color),
            Vertex::at(c, color),
        ]);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]) {
        self.texts.push(TextDraw {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Renderer, colors};
    use crate::settings::Settings;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut canvas = MeshCanvas::new();
        canvas.draw_triangle(Vec2::ZERO, Vec2::X, Vec2::Y, colors::RED);
        canvas.draw_text("hi", Vec2::ZERO, 10.0, colors::TEXT);
        canvas.clear(colors::WHITE);
        assert_eq!(canvas.vertices().len(), 6);
        assert!(canvas.texts().is_empty());
    }

    #[test]
    fn test_zero_radius_circle_is_skipped() {
        let mut canvas = MeshCanvas::new();
        canvas.draw_circle(Vec2::ZERO, 0.0, colors::SHIP_TRAIL);
        assert!(canvas.vertices().is_empty());
        canvas.draw_circle(Vec2::ZERO, 3.0, colors::SHIP_TRAIL);
        assert_eq!(canvas.vertices().len(), 8 * 3);
    }

    #[test]
    fn test_bytes_match_vertices() {
        let mut canvas = MeshCanvas::new();
        canvas.draw_triangle(Vec2::ZERO, Vec2::X, Vec2::Y, colors::RED);
        assert_eq!(canvas.as_bytes().len(), 3 * std::mem::size_of::<Vertex>());
    }

    #[test]
    fn test_sprite_size_override() {
        let canvas = MeshCanvas::new().with_sprite_size(Sprite::Ship, Vec2::new(40.0, 48.0));
        assert_eq!(canvas.sprite_size(Sprite::Ship), Vec2::new(40.0, 48.0));
        assert_eq!(canvas.sprite_size(Sprite::Star), Vec2::new(16.0, 16.0));
    }

    #[test]
    fn test_title_screen_mesh() {
        let state = GameState::new(5, Tuning::default());
        let mut renderer = Renderer::new(5, &Settings::default());
        let mut canvas = MeshCanvas::new();
        renderer.render(&state, &mut canvas);

        // clear quad + background quad
        assert_eq!(canvas.vertices().len(), 12);
        assert_eq!(canvas.texts().len(), 5);
        assert_eq!(canvas.texts()[0].text, "Black Hole Bounce");
    }
}
