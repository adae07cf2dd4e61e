use glam::Vec2;

use crate::api::types::Rgba;

/// One Canvas-2D-style drawing call, in CSS-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Translucent fill over the whole surface; leaves a fading trail.
    Fade { size: Vec2, color: Rgba },
    /// Filled circle.
    Circle { center: Vec2, radius: f32, color: Rgba },
    /// Stroked segment.
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

/// Ordered draw commands for a single frame.
/// Rebuilt every frame; the allocation is reused.
pub struct DrawList {
    commands: Vec<DrawCommand>,
    circles: u32,
    lines: u32,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            circles: 0,
            lines: 0,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.circles = 0;
        self.lines = 0;
    }

    pub fn push(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Circle { .. } => self.circles += 1,
            DrawCommand::Line { .. } => self.lines += 1,
            DrawCommand::Fade { .. } => {}
        }
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn circle_count(&self) -> u32 {
        self.circles
    }

    pub fn line_count(&self) -> u32 {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
