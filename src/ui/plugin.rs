//! UI plugin - health readouts.

use bevy::prelude::*;

use super::hud;

/// UI plugin - handles the headless HUD.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
    }
}
