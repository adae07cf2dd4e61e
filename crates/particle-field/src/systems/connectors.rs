//! Proximity edges between nearby particles.
//!
//! Brute-force pair scan: n·(n-1)/2 distance checks per frame. Fine for the
//! capped particle count; anything larger wants a spatial grid instead.

use glam::Vec2;

use crate::core::particle::Particle;

/// A pair of particles closer than the connect threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
}

impl Connector {
    /// Linear falloff: `max_alpha` at zero distance, zero at `threshold`.
    pub fn alpha(&self, max_alpha: f32, threshold: f32) -> f32 {
        (max_alpha * (1.0 - self.distance / threshold)).max(0.0)
    }
}

/// Iterator over every unordered pair (i < j) closer than `threshold`.
pub struct Connectors<'a> {
    particles: &'a [Particle],
    threshold_sq: f32,
    i: usize,
    j: usize,
}

impl<'a> Connectors<'a> {
    pub fn new(particles: &'a [Particle], threshold: f32) -> Self {
        Self {
            particles,
            threshold_sq: threshold * threshold,
            i: 0,
            j: 1,
        }
    }
}

impl Iterator for Connectors<'_> {
    type Item = Connector;

    fn next(&mut self) -> Option<Connector> {
        let n = self.particles.len();
        while self.i + 1 < n {
            while self.j < n {
                let a = self.particles[self.i].position;
                let b = self.particles[self.j].position;
                self.j += 1;
                let d_sq = a.distance_squared(b);
                if d_sq < self.threshold_sq {
                    return Some(Connector { from: a, to: b, distance: d_sq.sqrt() });
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0)
    }

    #[test]
    fn only_pairs_under_threshold() {
        let ps = [at(0.0, 0.0), at(60.0, 0.0), at(300.0, 0.0)];
        let found: Vec<Connector> = Connectors::new(&ps, 120.0).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].from, Vec2::ZERO);
        assert_eq!(found[0].to, Vec2::new(60.0, 0.0));
        assert!((found[0].distance - 60.0).abs() < 1e-4);
    }

    #[test]
    fn threshold_is_exclusive() {
        let ps = [at(0.0, 0.0), at(120.0, 0.0)];
        assert_eq!(Connectors::new(&ps, 120.0).count(), 0);
    }

    #[test]
    fn every_pair_visited_once() {
        let ps: Vec<Particle> = (0..50).map(|i| at(i as f32 * 0.1, 0.0)).collect();
        assert_eq!(Connectors::new(&ps, 120.0).count(), 50 * 49 / 2);
    }

    #[test]
    fn empty_and_single_yield_nothing() {
        assert_eq!(Connectors::new(&[], 120.0).count(), 0);
        assert_eq!(Connectors::new(&[at(1.0, 1.0)], 120.0).count(), 0);
    }

    #[test]
    fn alpha_falls_off_linearly() {
        let c = Connector { from: Vec2::ZERO, to: Vec2::ZERO, distance: 60.0 };
        assert!((c.alpha(0.15, 120.0) - 0.075).abs() < 1e-6);
        let c = Connector { distance: 0.0, ..c };
        assert!((c.alpha(0.15, 120.0) - 0.15).abs() < 1e-6);
    }
}
