//! Global events used for cross-system communication.
//!
//! The combat systems send these after health has already changed. Nothing in
//! the combat loop depends on them being read; they exist for observers such
//! as feedback effects, logging or a scoreboard.

use bevy::prelude::*;

/// Sent after damage has been applied to an entity.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Health actually removed (after clamping)
    pub amount: i32,
    /// True when this is a monster's counter-attack on its owner
    pub retaliation: bool,
}

/// Sent when an entity dies (health reaches 0).
///
/// Monsters are removed from the world in response; the player's death ends
/// the game.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}
