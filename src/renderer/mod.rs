//! Rendering module
//!
//! Draws the game state back to front onto a host-provided [`Canvas`]:
//! background, stars, black holes, asteroids, explosions, ship, HUD.
//! Menus replace the play field outside of `Play`.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshCanvas;
pub use vertex::{Vertex, colors};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::sim::{
    Asteroid, BlackHole, ExplosionCluster, GameMode, GameState, Ship, SparkColor, Star, Trail,
    WarningLevel,
};

/// Black hole sprites are drawn this many times their texture size at birth
pub const BLACK_HOLE_RENDER_SCALE: f32 = 3.5;
pub const STAR_RENDER_SCALE: f32 = 1.5;

/// Sprite facing offset: ship textures point up, a zero angle points right
const SHIP_SPRITE_ROTATION: f32 = 90.0;

/// Keeps the spark stream apart from the simulation stream of the same seed
const SPARK_STREAM: u64 = 0x5eed_5a4c;

/// Loaded textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Ship,
    Asteroid,
    BlackHole,
    Star,
}

/// Placement of one sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub center: Vec2,
    pub size: Vec2,
    /// Clockwise rotation in degrees around `center`
    pub rotation: f32,
    pub tint: [f32; 4],
}

/// Drawing primitives the host provides
pub trait Canvas {
    fn clear(&mut self, color: [f32; 4]);
    /// Native texture size of `sprite`
    fn sprite_size(&self, sprite: Sprite) -> Vec2;
    fn draw_sprite(&mut self, sprite: Sprite, draw: SpriteDraw);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]);
    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]);
}

/// Tint for a spark color
pub fn spark_color(color: SparkColor) -> [f32; 4] {
    match color {
        SparkColor::Red => colors::RED,
        SparkColor::Orange => colors::ORANGE,
        SparkColor::Yellow => colors::YELLOW,
        SparkColor::Gold => colors::GOLD,
    }
}

/// Star tint, hotter as detonation approaches
pub fn warning_tint(level: WarningLevel) -> [f32; 4] {
    match level {
        WarningLevel::Calm => colors::YELLOW,
        WarningLevel::Warm => colors::ORANGE,
        WarningLevel::Critical => colors::RED,
    }
}

/// Draws one frame of the game
///
/// Spark shapes are re-randomized every frame from a stream owned by the
/// renderer, so drawing never touches the simulation RNG.
#[derive(Debug, Clone)]
pub struct Renderer {
    rng: Pcg32,
    trails: bool,
    particles: bool,
}

impl Renderer {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ SPARK_STREAM),
            trails: settings.trails,
            particles: settings.particles,
        }
    }

    pub fn set_trails(&mut self, enabled: bool) {
        self.trails = enabled;
    }

    pub fn set_particles(&mut self, enabled: bool) {
        self.particles = enabled;
    }

    pub fn render(&mut self, state: &GameState, canvas: &mut impl Canvas) {
        canvas.clear(colors::WHITE);
        self.draw_background(canvas);

        match state.mode {
            GameMode::Play => {
                for star in &state.stars {
                    self.draw_star(star, canvas);
                }
                for hole in &state.black_holes {
                    self.draw_black_hole(hole, canvas);
                }
                for asteroid in &state.asteroids {
                    self.draw_asteroid(asteroid, canvas);
                }
                if self.particles {
                    for cluster in &state.explosions {
                        self.draw_explosion(cluster, canvas);
                    }
                }
                self.draw_ship(&state.ship, canvas);
                canvas.draw_text(
                    &format!("Score: {}", state.score),
                    Vec2::new(10.0, 10.0),
                    40.0,
                    colors::TEXT,
                );
            }
            GameMode::Start => {
                canvas.draw_text("Black Hole Bounce", Vec2::new(550.0, 300.0), 64.0, colors::TEXT);
                canvas.draw_text(
                    "Stay Alive as Long as You Can!",
                    Vec2::new(350.0, 350.0),
                    64.0,
                    colors::TEXT,
                );
                self.draw_controls_help(canvas);
            }
            GameMode::Restart => {
                canvas.draw_text(
                    &format!("Final Score: {}", state.score),
                    Vec2::new(570.0, 300.0),
                    64.0,
                    colors::TEXT,
                );
                canvas.draw_text("Play Again?", Vec2::new(635.0, 350.0), 64.0, colors::TEXT);
                self.draw_controls_help(canvas);
            }
        }
    }

    fn draw_background(&self, canvas: &mut impl Canvas) {
        let size = canvas.sprite_size(Sprite::Background);
        canvas.draw_sprite(
            Sprite::Background,
            SpriteDraw {
                center: size / 2.0,
                size,
                rotation: 0.0,
                tint: colors::BACKGROUND_TINT,
            },
        );
    }

    fn draw_controls_help(&self, canvas: &mut impl Canvas) {
        canvas.draw_text("Left/Right arrows: Turn", Vec2::new(550.0, 450.0), 48.0, colors::TEXT);
        canvas.draw_text(
            "Up/Down arrows: Accelerate/Decelerate",
            Vec2::new(350.0, 500.0),
            48.0,
            colors::TEXT,
        );
        canvas.draw_text("Press Space to Start!", Vec2::new(470.0, 600.0), 64.0, colors::TEXT);
    }

    fn draw_star(&self, star: &Star, canvas: &mut impl Canvas) {
        let size = canvas.sprite_size(Sprite::Star) * STAR_RENDER_SCALE;
        canvas.draw_sprite(
            Sprite::Star,
            SpriteDraw {
                center: star.pos,
                size,
                rotation: star.angle.to_degrees(),
                tint: warning_tint(star.warning_level()),
            },
        );
    }

    fn draw_black_hole(&self, hole: &BlackHole, canvas: &mut impl Canvas) {
        let size = canvas.sprite_size(Sprite::BlackHole) * BLACK_HOLE_RENDER_SCALE * hole.scale();
        canvas.draw_sprite(
            Sprite::BlackHole,
            SpriteDraw {
                center: hole.pos,
                size,
                rotation: hole.angle.to_degrees(),
                tint: colors::WHITE,
            },
        );
    }

    fn draw_asteroid(&self, asteroid: &Asteroid, canvas: &mut impl Canvas) {
        // Asteroid positions are the sprite's top-left corner
        let size = canvas.sprite_size(Sprite::Asteroid);
        canvas.draw_sprite(
            Sprite::Asteroid,
            SpriteDraw {
                center: asteroid.pos + size / 2.0,
                size,
                rotation: 0.0,
                tint: colors::WHITE,
            },
        );
        self.draw_trail(&asteroid.trail, colors::ASTEROID_TRAIL, canvas);
    }

    fn draw_explosion(&mut self, cluster: &ExplosionCluster, canvas: &mut impl Canvas) {
        for particle in &cluster.particles {
            let points =
                shapes::spark_points(particle.pos, particle.angle, particle.speed, &mut self.rng);
            let color = spark_color(particle.color);
            for [a, b, c] in shapes::spark_triangles(points) {
                canvas.draw_triangle(a, b, c, color);
            }
        }
    }

    fn draw_ship(&self, ship: &Ship, canvas: &mut impl Canvas) {
        if !ship.dead {
            let size = canvas.sprite_size(Sprite::Ship);
            canvas.draw_sprite(
                Sprite::Ship,
                SpriteDraw {
                    center: ship.pos,
                    size,
                    rotation: ship.angle.to_degrees() + SHIP_SPRITE_ROTATION,
                    tint: colors::WHITE,
                },
            );
        }
        self.draw_trail(&ship.trail, colors::SHIP_TRAIL, canvas);
    }

    fn draw_trail(&self, trail: &Trail, color: [f32; 4], canvas: &mut impl Canvas) {
        if !self.trails {
            return;
        }
        for point in trail.points() {
            canvas.draw_circle(point.pos, point.size, color);
        }
    }
}
