//! Melee Arena - a headless first-person melee combat loop in Bevy.
//!
//! The player swings a weapon at nearby monsters. Every hit that lands is
//! answered by the monster's retaliation strike, unless the hit was fatal.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, data loading
//! - **Player**: Player entity, config, attack targeting
//! - **Combat**: Health, weapons, fight resolution, deaths
//! - **Enemies**: Monster definitions, spawning, removal
//! - **UI**: Player and monster health readouts

pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod ui;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

/// Main game plugin that adds all sub-plugins.
pub struct MeleeArenaPlugin;

impl Plugin for MeleeArenaPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}

/// App with the full game and no window, driven by manual `update()` calls.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, MeleeArenaPlugin));
    app
}
