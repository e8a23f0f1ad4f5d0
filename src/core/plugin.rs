//! Core plugin that sets up game states, events, and data paths.

use bevy::prelude::*;

use super::data::DataPaths;
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, GameOver)
/// - Global events (DamageEvent, DeathEvent)
/// - The data file root
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()
            .init_resource::<DataPaths>()

            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()

            // Data files are read synchronously at Startup, so there is
            // nothing to wait for once Loading is entered
            .add_systems(OnEnter(GameState::Loading), finish_loading);
    }
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    info!("Data loaded, entering game");
    next_state.set(GameState::InGame);
}
