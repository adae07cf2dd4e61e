use glam::Vec2;

/// Logical viewport size plus device pixel ratio.
///
/// Simulation and drawing happen in CSS pixels; only the backing buffer is
/// sized in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    pub css_width: f32,
    pub css_height: f32,
    pub device_pixel_ratio: f32,
}

impl ViewportGeometry {
    /// Build a geometry from raw host readings.
    /// Negative or non-finite sizes collapse to zero; the ratio is at least 1.
    pub fn new(css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        Self {
            css_width: sanitize(css_width),
            css_height: sanitize(css_height),
            device_pixel_ratio: dpr,
        }
    }

    /// Simulation bounds: `[0, width] x [0, height]`.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.css_width, self.css_height)
    }

    /// Physical backing-buffer size, `round(css * dpr)` per axis.
    pub fn buffer_size(&self) -> (u32, u32) {
        (
            (self.css_width * self.device_pixel_ratio).round() as u32,
            (self.css_height * self.device_pixel_ratio).round() as u32,
        )
    }

    /// CSS-pixel extent of the whole backing buffer, `buffer_size / dpr`.
    /// Differs from [`bounds`](Self::bounds) by under a pixel when rounding kicks in.
    pub fn surface_extent(&self) -> Vec2 {
        let (w, h) = self.buffer_size();
        Vec2::new(w as f32, h as f32) / self.device_pixel_ratio
    }

    /// Canvas 2D transform `(a, b, c, d, e, f)` mapping CSS pixels onto the buffer.
    pub fn transform(&self) -> [f64; 6] {
        let s = self.device_pixel_ratio as f64;
        [s, 0.0, 0.0, s, 0.0, 0.0]
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_scales_with_ratio() {
        let g = ViewportGeometry::new(800.0, 600.0, 2.0);
        assert_eq!(g.buffer_size(), (1600, 1200));
        assert_eq!(g.bounds(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn fractional_ratio_rounds_buffer() {
        let g = ViewportGeometry::new(333.0, 100.0, 1.5);
        assert_eq!(g.buffer_size(), (500, 150));
    }

    #[test]
    fn surface_extent_covers_rounded_buffer() {
        let g = ViewportGeometry::new(100.5, 50.0, 1.5);
        assert_eq!(g.buffer_size(), (151, 75));
        let extent = g.surface_extent();
        assert!(extent.x * 1.5 >= 151.0 - 1e-3);
        assert!(extent.x > g.css_width);
        assert!((extent.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn ratio_below_one_is_raised() {
        let g = ViewportGeometry::new(100.0, 100.0, 0.5);
        assert_eq!(g.device_pixel_ratio, 1.0);
        let g = ViewportGeometry::new(100.0, 100.0, f32::NAN);
        assert_eq!(g.device_pixel_ratio, 1.0);
    }

    #[test]
    fn transform_is_uniform_scale() {
        let g = ViewportGeometry::new(10.0, 10.0, 3.0);
        assert_eq!(g.transform(), [3.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn bad_sizes_collapse_to_zero() {
        let g = ViewportGeometry::new(-5.0, f32::INFINITY, 1.0);
        assert_eq!(g.bounds(), Vec2::ZERO);
    }
}
