//! Player plugin - config and swing scheduling.

use bevy::prelude::*;

use super::attack::{begin_attacks, load_player_config};
use super::components::*;
use crate::combat::CombatSet;

/// Player plugin - handles player config and attack input.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>()
            .add_systems(Startup, load_player_config)
            .add_systems(Update, begin_attacks.in_set(CombatSet::Input));
    }
}
