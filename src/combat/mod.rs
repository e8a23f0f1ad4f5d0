//! Combat module - health, weapons, fight resolution, and deaths.

mod components;
pub mod data;
mod plugin;
mod resolver;
mod systems;

pub use components::*;
pub use data::{WeaponDefinition, WeaponRegistry};
pub use plugin::CombatPlugin;
pub use resolver::{fight, FightOutcome, Retaliation};
pub use systems::CombatSet;
