use serde::{Deserialize, Serialize};

use super::error::FieldError;

/// Hard ceiling on particle count. The connector pass checks every pair each
/// frame (n·(n-1)/2 distance tests), so raising this needs spatial partitioning.
pub const MAX_PARTICLES: usize = 50;

/// How a particle behaves when a step would carry it past a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Pin the coordinate to the edge and keep the velocity unchanged.
    #[default]
    Clamp,
    /// Mirror the overshoot back inside and negate the velocity component.
    Reflect,
}

/// Tunables for one mounted particle field.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles seeded at mount (default: 50, max: [`MAX_PARTICLES`]).
    pub particle_count: usize,
    /// Connector threshold in CSS pixels (default: 120).
    pub connect_distance: f32,
    /// Duration velocities are expressed against, in ms (default: 16.67).
    pub nominal_frame_ms: f32,
    /// Per-step delta ceiling in ms (default: 50).
    pub max_step_ms: f32,
    /// Quiet window before a resize is applied, in ms (default: 120).
    pub resize_debounce_ms: f64,
    /// Velocity components are drawn from [-max_speed, max_speed] (default: 0.15).
    pub max_speed: f32,
    /// Radius range [min, max) in CSS pixels (default: [1, 3]).
    pub radius_range: [f32; 2],
    /// Alpha of the black trail fade painted before each frame (default: 0.06).
    pub fade_alpha: f32,
    /// Particle fill alpha (default: 0.28).
    pub particle_alpha: f32,
    /// Connector alpha at zero distance (default: 0.15).
    pub connector_alpha: f32,
    /// Connector stroke width in CSS pixels (default: 0.4).
    pub connector_width: f32,
    pub boundary: BoundaryPolicy,
    /// RNG seed. `None` lets the host supply entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: MAX_PARTICLES,
            connect_distance: 120.0,
            nominal_frame_ms: 16.67,
            max_step_ms: 50.0,
            resize_debounce_ms: 120.0,
            max_speed: 0.15,
            radius_range: [1.0, 3.0],
            fade_alpha: 0.06,
            particle_alpha: 0.28,
            connector_alpha: 0.15,
            connector_width: 0.4,
            boundary: BoundaryPolicy::Clamp,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation or renderer cannot honor.
    pub fn validate(&self) -> Result<(), FieldError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> FieldError {
            FieldError::InvalidConfig { field, reason: reason.into() }
        }
        fn positive(field: &'static str, value: f64) -> Result<(), FieldError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(invalid(field, format!("must be a positive number, got {value}")))
            }
        }
        fn unit(field: &'static str, value: f32) -> Result<(), FieldError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(invalid(field, format!("must be within [0, 1], got {value}")))
            }
        }

        if self.particle_count == 0 || self.particle_count > MAX_PARTICLES {
            return Err(invalid(
                "particle_count",
                format!("must be within 1..={MAX_PARTICLES}, got {}", self.particle_count),
            ));
        }
        positive("connect_distance", self.connect_distance as f64)?;
        positive("nominal_frame_ms", self.nominal_frame_ms as f64)?;
        positive("max_step_ms", self.max_step_ms as f64)?;
        positive("resize_debounce_ms", self.resize_debounce_ms)?;
        positive("connector_width", self.connector_width as f64)?;
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(invalid("max_speed", "must be a finite non-negative number"));
        }
        let [lo, hi] = self.radius_range;
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
            return Err(invalid("radius_range", format!("expected 0 < min <= max, got [{lo}, {hi}]")));
        }
        unit("fade_alpha", self.fade_alpha)?;
        unit("particle_alpha", self.particle_alpha)?;
        unit("connector_alpha", self.connector_alpha)?;
        Ok(())
    }
}
