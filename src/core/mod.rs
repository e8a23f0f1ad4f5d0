//! Core game module - states, events, data loading and errors.
//!
//! This module provides the foundation that all other game systems build upon.

mod data;
mod error;
mod events;
mod plugin;
mod states;

pub use data::{load_definition_file, load_definitions_dir, parse_definition, DataPaths, Definition};
pub use error::DataLoadError;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
