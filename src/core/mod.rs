//! Core game module - states, events, configuration and input bindings.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod input;
mod plugin;
mod states;

pub use config::*;
pub use events::*;
pub use input::{key_label, GameKey, KeyBindings};
pub use plugin::{CorePlugin, ElapsedTime, GameplaySet};
pub use states::*;
