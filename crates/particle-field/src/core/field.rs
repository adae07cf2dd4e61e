use glam::Vec2;

use super::particle::Particle;
use super::rng::Rng;
use super::time::clamp_step;
use crate::api::config::{BoundaryPolicy, FieldConfig};

/// Simulation state: a fixed set of particles inside a rectangular viewport.
///
/// Particles are created once by [`ParticleField::seed`]; nothing adds or
/// removes them afterwards.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    policy: BoundaryPolicy,
    nominal_frame_ms: f32,
    max_step_ms: f32,
}

impl ParticleField {
    /// Seed `config.particle_count` particles uniformly across `bounds`.
    pub fn seed(config: &FieldConfig, bounds: Vec2, rng: &mut Rng) -> Self {
        let [r_lo, r_hi] = config.radius_range;
        let particles = (0..config.particle_count)
            .map(|_| {
                let position = Vec2::new(rng.range(0.0, bounds.x), rng.range(0.0, bounds.y));
                let velocity = Vec2::new(rng.symmetric(config.max_speed), rng.symmetric(config.max_speed));
                let radius = rng.range(r_lo, r_hi);
                Particle::new(position, velocity, radius)
            })
            .collect();

        Self::from_particles(particles, bounds, config)
    }

    /// Build a field from explicit particles (positions are clamped into `bounds`).
    pub fn from_particles(mut particles: Vec<Particle>, bounds: Vec2, config: &FieldConfig) -> Self {
        for p in &mut particles {
            p.position = p.position.clamp(Vec2::ZERO, bounds);
        }
        Self {
            particles,
            bounds,
            policy: config.boundary,
            nominal_frame_ms: config.nominal_frame_ms,
            max_step_ms: config.max_step_ms,
        }
    }

    /// Advance every particle by `velocity * (min(delta_ms, max_step) / nominal)`.
    pub fn step(&mut self, delta_ms: f32) {
        let scale = clamp_step(delta_ms, self.max_step_ms) / self.nominal_frame_ms;
        let (bounds, policy) = (self.bounds, self.policy);
        for p in &mut self.particles {
            p.advance(scale, bounds, policy);
        }
    }

    /// Adopt new viewport bounds, pulling any out-of-range particle onto the new edge.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        for p in &mut self.particles {
            p.clamp_into(bounds);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
