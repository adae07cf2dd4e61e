use crate::api::config::FieldConfig;
use crate::api::types::{DisplayMode, Rgba};
use crate::core::field::ParticleField;
use crate::core::viewport::ViewportGeometry;
use crate::renderer::draw_list::{DrawCommand, DrawList};
use crate::systems::connectors::Connectors;

/// Colors and thresholds the frame builder needs.
/// Only the fade follows the display mode, so trails settle on the base background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub fade: Rgba,
    pub particle: Rgba,
    /// Connector tint; alpha is computed per edge.
    pub connector: Rgba,
    pub connector_alpha: f32,
    pub connector_width: f32,
    pub connect_distance: f32,
}

impl FrameStyle {
    pub fn from_config(config: &FieldConfig, mode: DisplayMode) -> Self {
        Self {
            fade: mode.background().with_alpha(config.fade_alpha),
            particle: Rgba::FIELD_GREEN.with_alpha(config.particle_alpha),
            connector: Rgba::FIELD_GREEN,
            connector_alpha: config.connector_alpha,
            connector_width: config.connector_width,
            connect_distance: config.connect_distance,
        }
    }

    /// Retint the fade for `mode`, keeping its alpha.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.fade = mode.background().with_alpha(self.fade.a);
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::from_config(&FieldConfig::default(), DisplayMode::Dark)
    }
}

/// Build one frame: trail fade, then every particle, then every connector.
/// Connectors are drawn after all circles so no edge sits under a later fill.
pub fn build_frame(
    field: &ParticleField,
    geometry: &ViewportGeometry,
    style: &FrameStyle,
    list: &mut DrawList,
) {
    list.clear();

    list.push(DrawCommand::Fade {
        size: geometry.surface_extent(),
        color: style.fade,
    });

    for p in field.particles() {
        list.push(DrawCommand::Circle {
            center: p.position,
            radius: p.radius,
            color: style.particle,
        });
    }

    for edge in Connectors::new(field.particles(), style.connect_distance) {
        let alpha = edge.alpha(style.connector_alpha, style.connect_distance);
        list.push(DrawCommand::Line {
            from: edge.from,
            to: edge.to,
            width: style.connector_width,
            color: style.connector.with_alpha(alpha),
        });
    }
}
