//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all monsters.
#[derive(Component)]
pub struct Monster;

/// Monster type identifier (matches RON file name).
#[derive(Component, Clone, Debug)]
pub struct MonsterType(pub String);

/// Damage a monster deals back to its owner when it survives a hit.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackPower(pub i32);

/// The player a monster hits back at.
///
/// Weak reference: `None`, or an entity that has since been despawned, simply
/// means there is nobody to retaliate against.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RetaliationTarget(pub Option<Entity>);
