//! Monster spawning and removal.

use bevy::prelude::*;

use super::components::{AttackPower, Monster, MonsterType, RetaliationTarget};
use super::data::MonsterDefinition;
use crate::combat::Health;
use crate::core::DeathEvent;

/// Components for a freshly spawned monster at full health.
pub fn monster_bundle(
    monster_type: &str,
    definition: &MonsterDefinition,
    position: Vec3,
    retaliation_target: Option<Entity>,
) -> impl Bundle {
    (
        Monster,
        MonsterType(monster_type.to_string()),
        Name::new(definition.name.clone()),
        Health::new(definition.max_health),
        AttackPower(definition.attack_power),
        RetaliationTarget(retaliation_target),
        Transform::from_translation(position),
    )
}

/// Spawn a monster from its definition.
pub fn spawn_monster(
    commands: &mut Commands,
    monster_type: &str,
    definition: &MonsterDefinition,
    position: Vec3,
    retaliation_target: Option<Entity>,
) -> Entity {
    let entity = commands
        .spawn(monster_bundle(monster_type, definition, position, retaliation_target))
        .id();

    info!("Spawned {} at {:?}", definition.name, position);
    entity
}

/// Remove monsters from the world once they have died.
pub fn despawn_dead_monsters(
    mut commands: Commands,
    mut death_events: EventReader<DeathEvent>,
    monsters: Query<&Name, With<Monster>>,
) {
    for event in death_events.read() {
        let Ok(name) = monsters.get(event.entity) else {
            continue;
        };

        info!("{} died", name);
        if let Some(entity_commands) = commands.get_entity(event.entity) {
            entity_commands.despawn_recursive();
        }
    }
}
