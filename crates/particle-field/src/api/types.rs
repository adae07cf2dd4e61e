/// Opaque handle for a pending display-frame request issued by a [`Host`](super::host::Host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Opaque handle for a pending one-shot timer issued by a [`Host`](super::host::Host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// RGBA color. Channels are 0-255, alpha is 0.0-1.0 (Canvas `rgba()` convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. `rgba(34, 197, 94, 0.28)`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Tailwind green-500, the particle and connector tint.
    pub const FIELD_GREEN: Self = Self::rgb(34, 197, 94);
}

/// Host page theme. Only selects the surface base background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    /// Parse a host-provided mode string. Unknown values fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Base fill color of the drawing surface for this mode.
    pub fn background(self) -> Rgba {
        match self {
            Self::Dark => Rgba::BLACK,
            Self::Light => Rgba::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_matches_canvas_syntax() {
        let c = Rgba::FIELD_GREEN.with_alpha(0.28);
        assert_eq!(c.to_css(), "rgba(34, 197, 94, 0.28)");
    }

    #[test]
    fn display_mode_parses_case_insensitively() {
        assert_eq!(DisplayMode::from_name("Light"), DisplayMode::Light);
        assert_eq!(DisplayMode::from_name("dark"), DisplayMode::Dark);
        assert_eq!(DisplayMode::from_name("sepia"), DisplayMode::Dark);
    }

    #[test]
    fn display_mode_only_changes_background() {
        assert_eq!(DisplayMode::Dark.background(), Rgba::BLACK);
        assert_eq!(DisplayMode::Light.background(), Rgba::WHITE);
    }
}
