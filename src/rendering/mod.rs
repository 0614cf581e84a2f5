//! Rendering module - camera and colors.

mod plugin;
mod visual_config;

pub use plugin::RenderingPlugin;
pub use visual_config::{rgb, VisualConfig};
