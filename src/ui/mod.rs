//! UI module - title screen, dialogue box and inventory panel.

mod dialogue;
mod inventory;
mod plugin;
mod start_menu;

pub use plugin::UiPlugin;
