//! Shape generation for 2D primitives

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;
use crate::polar_to_cartesian;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + polar_to_cartesian(radius, theta1), color));
        vertices.push(Vertex::at(center + polar_to_cartesian(radius, theta2), color));
    }

    vertices
}

/// Segment count that keeps small circles cheap and large ones round
pub fn circle_segments(radius: f32) -> u32 {
    (radius * 2.0).clamp(8.0, 48.0) as u32
}

/// Generate vertices for a rectangle of `size` centered on `center`,
/// rotated by `rotation` degrees
pub fn rotated_quad(center: Vec2, size: Vec2, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let rot = Vec2::from_angle(rotation.to_radians());
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + rot.rotate(c));

    [0, 1, 2, 0, 2, 3]
        .into_iter()
        .map(|i| Vertex::at(corners[i], color))
        .collect()
}

/// The four corners of a spark
///
/// Corners sit a quarter turn apart around the spark's heading, each pushed
/// out by `speed` times an independent random scale in `[2, 5)`. A spark
/// shrinks to a point as it slows down.
pub fn spark_points(pos: Vec2, heading: f32, speed: f32, rng: &mut impl Rng) -> [Vec2; 4] {
    std::array::from_fn(|k| {
        let reach = speed * (rng.random::<f32>() * 3.0 + 2.0);
        pos + polar_to_cartesian(reach, heading + FRAC_PI_2 * k as f32)
    })
}

/// Split the spark quad into its two triangles
pub fn spark_triangles(p: [Vec2; 4]) -> [[Vec2; 3]; 2] {
    [[p[0], p[3], p[1]], [p[2], p[1], p[3]]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, colors::WHITE, 16);
        assert_eq!(verts.len(), 48);
        for v in verts.iter().skip(1).step_by(3) {
            let r = Vec2::from(v.position).length();
            assert!((r - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rotated_quad_keeps_size() {
        let verts = rotated_quad(Vec2::new(100.0, 100.0), Vec2::new(20.0, 10.0), 90.0, colors::RED);
        assert_eq!(verts.len(), 6);
        // After a quarter turn the 20-wide quad spans 10 in x
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let min = xs.iter().cloned().fold(f32::MAX, f32::min);
        let max = xs.iter().cloned().fold(f32::MIN, f32::max);
        assert!((max - min - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_spark_points_within_reach() {
        let mut rng = Pcg32::seed_from_u64(9);
        let pos = Vec2::new(50.0, 50.0);
        for _ in 0..100 {
            let points = spark_points(pos, 0.3, 2.0, &mut rng);
            for (k, p) in points.iter().enumerate() {
                let offset = *p - pos;
                let reach = offset.length();
                assert!((4.0 - 1e-4..10.0 + 1e-4).contains(&reach));
                let expected = Vec2::from_angle(0.3 + FRAC_PI_2 * k as f32);
                assert!(offset.normalize().dot(expected) > 0.999);
            }
        }
    }

    #[test]
    fn test_stopped_spark_collapses() {
        let mut rng = Pcg32::seed_from_u64(1);
        let pos = Vec2::new(5.0, 6.0);
        let points = spark_points(pos, 1.0, 0.0, &mut rng);
        assert!(points.iter().all(|p| *p == pos));
    }

    #[test]
    fn test_spark_triangle_winding() {
        let p = [Vec2::X, Vec2::Y, Vec2::NEG_X, Vec2::NEG_Y];
        let [a, b] = spark_triangles(p);
        assert_eq!(a, [p[0], p[3], p[1]]);
        assert_eq!(b, [p[2], p[1], p[3]]);
    }
}
