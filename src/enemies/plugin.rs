//! Enemy plugin - registers monster data and removal systems.

use bevy::prelude::*;

use super::data::{load_monster_definitions, MonsterRegistry};
use super::spawning::despawn_dead_monsters;
use crate::combat::CombatSet;
use crate::core::GameState;

/// Enemy plugin - handles monster definitions and death removal.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MonsterRegistry>()
            .add_systems(Startup, load_monster_definitions)
            // Deaths are resolved in the damage set, removal follows
            .add_systems(
                Update,
                despawn_dead_monsters
                    .after(CombatSet::Damage)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
