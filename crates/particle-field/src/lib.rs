pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod runner;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience
pub use api::config::{FieldConfig, BoundaryPolicy, MAX_PARTICLES};
pub use api::error::{FieldError, HostError};
pub use api::host::Host;
pub use api::types::{DisplayMode, FrameHandle, Rgba, TimerHandle};
pub use crate::core::field::ParticleField;
pub use crate::core::particle::Particle;
pub use crate::core::rng::Rng;
pub use crate::core::time::FrameClock;
pub use crate::core::viewport::ViewportGeometry;
pub use renderer::{DrawCommand, DrawList, Surface};
pub use runner::{FieldRunner, LifecycleState};
pub use systems::connectors::{Connector, Connectors};
pub use systems::render::{build_frame, FrameStyle};
pub use systems::resize::ResizeDebounce;
