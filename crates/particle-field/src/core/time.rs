/// Variable-rate frame clock.
/// Turns host frame timestamps into elapsed deltas. Clamping and scaling
/// against the nominal frame happen in [`ParticleField::step`](crate::core::field::ParticleField::step).
pub struct FrameClock {
    /// Timestamp of the previous frame, in ms.
    last: f64,
}

impl FrameClock {
    pub fn new(start_ms: f64) -> Self {
        Self { last: start_ms }
    }

    /// Record a frame timestamp. Returns the raw delta since the previous one.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let raw = (timestamp_ms - self.last) as f32;
        self.last = timestamp_ms;
        raw
    }

    pub fn last_timestamp(&self) -> f64 {
        self.last
    }
}

/// Clamp a step delta into `[0, max_step_ms]`.
/// Non-finite and negative deltas (clock skew, first frame) become zero.
pub fn clamp_step(delta_ms: f32, max_step_ms: f32) -> f32 {
    if !delta_ms.is_finite() || delta_ms <= 0.0 {
        return 0.0;
    }
    delta_ms.min(max_step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_since_previous() {
        let mut c = FrameClock::new(100.0);
        assert_eq!(c.tick(116.0), 16.0);
        assert_eq!(c.tick(5116.0), 5000.0);
        assert_eq!(c.last_timestamp(), 5116.0);
    }

    #[test]
    fn backwards_timestamp_is_negative_then_recovers() {
        let mut c = FrameClock::new(100.0);
        assert_eq!(c.tick(90.0), -10.0);
        assert_eq!(c.tick(106.0), 16.0);
    }

    #[test]
    fn long_pause_is_capped() {
        assert_eq!(clamp_step(5000.0, 50.0), 50.0);
        assert_eq!(clamp_step(16.0, 50.0), 16.0);
    }

    #[test]
    fn bad_deltas_are_zero() {
        assert_eq!(clamp_step(f32::NAN, 50.0), 0.0);
        assert_eq!(clamp_step(-3.0, 50.0), 0.0);
        assert_eq!(clamp_step(f32::INFINITY, 50.0), 0.0);
    }
}
