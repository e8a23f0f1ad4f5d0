//! Melee Arena - Entry Point
//!
//! Runs the combat loop headless: the player faces a cat and a dragon and
//! swings at whichever is closest until the arena is clear or the player falls.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use melee_arena::combat::{AttackIntent, WeaponKind, WeaponRegistry};
use melee_arena::core::GameState;
use melee_arena::enemies::{spawn_monster, Monster, MonsterRegistry};
use melee_arena::player::{spawn_player, Player, PlayerConfig};
use melee_arena::MeleeArenaPlugin;

/// Time between the player's swing requests.
const SWING_INTERVAL_SECS: f32 = 0.5;

#[derive(Resource)]
struct SwingClock(Timer);

fn main() {
    App::new()
        // Headless loop at 60 Hz
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins((LogPlugin::default(), StatesPlugin))

        // Our game plugin
        .add_plugins(MeleeArenaPlugin)

        .insert_resource(SwingClock(Timer::from_seconds(
            SWING_INTERVAL_SECS,
            TimerMode::Repeating,
        )))
        .add_systems(OnEnter(GameState::InGame), setup_arena)
        .add_systems(
            Update,
            (request_swings, exit_when_cleared).run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnEnter(GameState::GameOver), exit_on_game_over)
        .run();
}

/// Spawn the player and the two monsters in front of them.
fn setup_arena(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    weapons: Res<WeaponRegistry>,
    monsters: Res<MonsterRegistry>,
) {
    let weapon = weapons.weapon_or("one_hand_sword", WeaponKind::OneHandSword);
    let player = spawn_player(&mut commands, &config, weapon, Vec3::ZERO);

    for (monster_type, z) in [("cat", -1.5), ("dragon", -2.5)] {
        let Some(definition) = monsters.get(monster_type) else {
            warn!("Unknown monster type: {}", monster_type);
            continue;
        };
        spawn_monster(
            &mut commands,
            monster_type,
            definition,
            Vec3::new(0.0, 0.0, z),
            Some(player),
        );
    }
}

/// Ask the player to swing on a fixed cadence.
fn request_swings(
    time: Res<Time>,
    mut clock: ResMut<SwingClock>,
    player_query: Query<Entity, With<Player>>,
    mut intents: EventWriter<AttackIntent>,
) {
    if !clock.0.tick(time.delta()).just_finished() {
        return;
    }
    if let Ok(attacker) = player_query.get_single() {
        intents.send(AttackIntent { attacker });
    }
}

fn exit_when_cleared(
    monsters: Query<(), With<Monster>>,
    player_query: Query<&Name, With<Player>>,
    mut exit: EventWriter<AppExit>,
) {
    if player_query.is_empty() || !monsters.is_empty() {
        return;
    }
    info!("Arena cleared");
    exit.send(AppExit::Success);
}

fn exit_on_game_over(mut exit: EventWriter<AppExit>) {
    info!("Game over");
    exit.send(AppExit::Success);
}
