//! UI module - player and monster health readouts.

mod hud;
mod plugin;

pub use hud::{
    HealthReadout, HudConfig, HudRoot, MonsterDetector, MonsterHealthBar, PlayerHealthBar,
    NO_PLAYER_TEXT,
};
pub use plugin::UiPlugin;
