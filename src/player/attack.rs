//! Player swing scheduling and spawning.

use bevy::prelude::*;

use super::components::{Player, PlayerConfig};
use super::targeting::{attack_center, closest_in_range};
use crate::combat::{
    AttackIntent, CombatState, Dead, Health, PendingAttack, SwingStarted, Weapon,
};
use crate::core::{load_definition_file, DataLoadError, DataPaths};
use crate::enemies::Monster;

/// Components for a freshly spawned player at full health.
pub fn player_bundle(config: &PlayerConfig, weapon: Weapon, position: Vec3) -> impl Bundle {
    (
        Player,
        Name::new("Player"),
        Health::new(config.max_health),
        weapon,
        CombatState::default(),
        Transform::from_translation(position),
    )
}

/// Spawn the player.
pub fn spawn_player(
    commands: &mut Commands,
    config: &PlayerConfig,
    weapon: Weapon,
    position: Vec3,
) -> Entity {
    let entity = commands.spawn(player_bundle(config, weapon, position)).id();
    info!("Spawned player at {:?}", position);
    entity
}

/// Load `player.ron` over the default config, if present.
pub fn load_player_config(paths: Res<DataPaths>, mut config: ResMut<PlayerConfig>) {
    match load_definition_file::<PlayerConfig>(&paths.root.join("player.ron")) {
        Ok(loaded) => {
            info!("Loaded player config");
            *config = loaded;
        }
        Err(DataLoadError::FileNotFound(_)) => {
            debug!("No player config file, using defaults");
        }
        Err(e) => {
            error!("Failed to load player config, using defaults: {}", e);
        }
    }
}

/// Start a swing at the closest living monster in reach.
///
/// Ignored while a swing is already in progress, when the attacker is dead or
/// unarmed, and with nothing in reach. The hit itself lands when the wind-up
/// finishes.
pub fn begin_attacks(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    mut intents: EventReader<AttackIntent>,
    mut attackers: Query<
        (&Transform, &mut CombatState, Option<&Weapon>, Option<&Health>),
        (Without<PendingAttack>, Without<Dead>),
    >,
    monsters: Query<(Entity, &Transform, &Health), (With<Monster>, Without<Dead>)>,
    mut swing_events: EventWriter<SwingStarted>,
) {
    for intent in intents.read() {
        let Ok((transform, mut combat, weapon, health)) = attackers.get_mut(intent.attacker) else {
            continue;
        };
        let Some(weapon) = weapon else {
            continue;
        };
        if !combat.can_attack() || !health.map_or(true, Health::is_alive) {
            continue;
        }

        let center = attack_center(transform, config.attack_reach);
        let candidates = monsters
            .iter()
            .filter(|(_, _, health)| health.is_alive())
            .map(|(entity, monster_transform, _)| (entity, monster_transform.translation));

        let Some(target) = closest_in_range(center, config.attack_radius, candidates) else {
            debug!("Nothing in reach of {:?}", intent.attacker);
            continue;
        };

        combat.is_attacking = true;
        commands.entity(intent.attacker).insert(PendingAttack {
            target,
            timer: Timer::from_seconds(config.windup_secs(), TimerMode::Once),
        });
        swing_events.send(SwingStarted {
            attacker: intent.attacker,
            target,
            animation: weapon.attack_animation_name(),
        });
    }
}
