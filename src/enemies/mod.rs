//! Enemies module - monster entities, data, and removal.

mod components;
pub mod data;
mod plugin;
mod spawning;

pub use components::*;
pub use data::{MonsterDefinition, MonsterRegistry};
pub use plugin::EnemyPlugin;
pub use spawning::{monster_bundle, spawn_monster};
