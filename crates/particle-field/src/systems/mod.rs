pub mod connectors;
pub mod render;
pub mod resize;
