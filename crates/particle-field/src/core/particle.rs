//! A single point in the field.

use glam::Vec2;

use crate::api::config::BoundaryPolicy;

/// A simulated point with constant velocity and a fixed render radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// CSS-pixel position.
    pub position: Vec2,
    /// Pixels per nominal frame interval.
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self { position, velocity, radius }
    }

    /// Move by `velocity * frame_scale`, then apply the boundary policy
    /// against `[0, bounds.x] x [0, bounds.y]`.
    pub fn advance(&mut self, frame_scale: f32, bounds: Vec2, policy: BoundaryPolicy) {
        self.position += self.velocity * frame_scale;
        match policy {
            BoundaryPolicy::Clamp => {
                self.position = self.position.clamp(Vec2::ZERO, bounds);
            }
            BoundaryPolicy::Reflect => {
                reflect_axis(&mut self.position.x, &mut self.velocity.x, bounds.x);
                reflect_axis(&mut self.position.y, &mut self.velocity.y, bounds.y);
            }
        }
    }

    /// Pull the position inside a shrunken viewport. Coordinates already
    /// inside are left untouched.
    pub fn clamp_into(&mut self, bounds: Vec2) {
        self.position.x = self.position.x.min(bounds.x);
        self.position.y = self.position.y.min(bounds.y);
    }

    pub fn is_within(&self, bounds: Vec2) -> bool {
        self.position.x >= 0.0
            && self.position.y >= 0.0
            && self.position.x <= bounds.x
            && self.position.y <= bounds.y
    }
}

fn reflect_axis(pos: &mut f32, vel: &mut f32, max: f32) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = -*vel;
    } else if *pos > max {
        *pos = 2.0 * max - *pos;
        *vel = -*vel;
    }
    // Overshoot larger than the viewport itself still lands on an edge.
    *pos = pos.clamp(0.0, max);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(100.0, 100.0);

    #[test]
    fn moves_by_scaled_velocity() {
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(0.1, -0.1), 2.0);
        p.advance(3.0, BOUNDS, BoundaryPolicy::Clamp);
        assert!((p.position.x - 50.3).abs() < 1e-4);
        assert!((p.position.y - 49.7).abs() < 1e-4);
    }

    #[test]
    fn clamp_sticks_to_edge_and_keeps_velocity() {
        let mut p = Particle::new(Vec2::new(99.95, 0.05), Vec2::new(0.15, -0.15), 2.0);
        p.advance(1.0, BOUNDS, BoundaryPolicy::Clamp);
        assert_eq!(p.position, Vec2::new(100.0, 0.0));
        assert_eq!(p.velocity, Vec2::new(0.15, -0.15));

        // Still pressing outward: stays on the edge.
        p.advance(1.0, BOUNDS, BoundaryPolicy::Clamp);
        assert_eq!(p.position, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn reflect_bounces_back_inside() {
        let mut p = Particle::new(Vec2::new(99.95, 0.05), Vec2::new(0.15, -0.15), 2.0);
        p.advance(1.0, BOUNDS, BoundaryPolicy::Reflect);
        assert!(p.is_within(BOUNDS));
        assert_eq!(p.velocity, Vec2::new(-0.15, 0.15));
        assert!((p.position.x - 99.9).abs() < 1e-3);
        assert!((p.position.y - 0.1).abs() < 1e-3);
    }

    #[test]
    fn reflect_handles_overshoot_past_whole_viewport() {
        let mut p = Particle::new(Vec2::new(1.0, 1.0), Vec2::new(0.15, 0.0), 2.0);
        p.advance(1.0, Vec2::new(0.5, 0.5), BoundaryPolicy::Reflect);
        assert!(p.is_within(Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn clamp_into_only_moves_outside_coordinates() {
        let mut p = Particle::new(Vec2::new(990.0, 10.0), Vec2::ZERO, 1.0);
        p.clamp_into(Vec2::new(500.0, 500.0));
        assert_eq!(p.position, Vec2::new(500.0, 10.0));
    }
}
