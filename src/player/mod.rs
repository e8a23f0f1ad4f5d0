//! Player module - player entity, config, and targeting.

mod attack;
mod components;
mod plugin;
mod targeting;

pub use attack::{player_bundle, spawn_player};
pub use components::*;
pub use plugin::PlayerPlugin;
pub use targeting::{attack_center, closest_in_range};
