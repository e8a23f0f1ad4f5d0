//! In-game HUD - player and monster health readouts.
//!
//! The HUD entities carry the values a draw layer needs (fill fraction, label,
//! visibility). They poll `Health` every frame; combat never pushes to them.

use bevy::prelude::*;
use std::time::Duration;

use crate::combat::{Dead, Health};
use crate::core::GameState;
use crate::enemies::Monster;
use crate::player::{closest_in_range, Player};

/// Label shown on the player bar when there is no player to track.
pub const NO_PLAYER_TEXT: &str = "No player found";

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Display values for one health bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthReadout {
    /// Bar fill, 0.0 to 1.0
    pub fill: f32,
    pub text: String,
}

impl HealthReadout {
    /// Readout for `current / max`, with both values forced into a sane range.
    pub fn new(current: i32, max: i32, prefix: &str) -> Self {
        let safe_max = max.max(1);
        let safe_current = current.clamp(0, safe_max);

        Self {
            fill: safe_current as f32 / safe_max as f32,
            text: format!("{prefix}{safe_current} / {safe_max}"),
        }
    }
}

/// Player health bar.
#[derive(Component, Debug, Default)]
pub struct PlayerHealthBar {
    pub readout: HealthReadout,
    pub visible: bool,
    last_values: Option<(i32, i32)>,
}

/// Health bar bound to the nearest monster.
#[derive(Component, Debug, Default)]
pub struct MonsterHealthBar {
    pub monster: Option<Entity>,
    pub readout: HealthReadout,
    pub visible: bool,
    last_values: Option<(i32, i32)>,
}

impl MonsterHealthBar {
    /// Bind to `monster` (or unbind with `None`), showing the bar only when bound.
    pub fn show_for(&mut self, monster: Option<Entity>) {
        if self.monster != monster {
            self.last_values = None;
        }
        self.monster = monster;
        self.visible = monster.is_some();
    }
}

/// HUD tuning.
#[derive(Resource, Debug, Clone)]
pub struct HudConfig {
    /// Monsters within this distance of the player get a health bar
    pub show_distance: f32,
    /// How often the nearest monster is re-evaluated
    pub refresh_interval_secs: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            show_distance: 5.0,
            refresh_interval_secs: 0.1,
        }
    }
}

/// Countdown for nearest-monster checks. Fires on the first tick.
#[derive(Resource, Debug, Default)]
pub struct MonsterDetector {
    remaining_secs: f32,
}

impl MonsterDetector {
    /// Advance by `delta`; true when a check is due.
    pub fn tick(&mut self, delta: Duration, interval_secs: f32) -> bool {
        self.remaining_secs -= delta.as_secs_f32();
        if self.remaining_secs > 0.0 {
            return false;
        }
        self.remaining_secs = interval_secs;
        true
    }
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.init_resource::<HudConfig>()
        .init_resource::<MonsterDetector>()
        .add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (
                update_player_health_bar,
                detect_nearest_monster,
                update_monster_health_bar,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD entities.
fn spawn_hud(mut commands: Commands, mut detector: ResMut<MonsterDetector>) {
    *detector = MonsterDetector::default();
    commands.spawn((HudRoot, Name::new("Player Health"), PlayerHealthBar::default()));
    commands.spawn((HudRoot, Name::new("Monster Health"), MonsterHealthBar::default()));
}

/// Refresh the player bar when the player's health changes.
fn update_player_health_bar(
    player_query: Query<&Health, With<Player>>,
    mut bar_query: Query<&mut PlayerHealthBar>,
) {
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    let Ok(health) = player_query.get_single() else {
        if bar.visible || bar.last_values.is_some() || bar.readout.text.is_empty() {
            bar.visible = false;
            bar.last_values = None;
            bar.readout = HealthReadout {
                fill: 0.0,
                text: NO_PLAYER_TEXT.to_string(),
            };
        }
        return;
    };

    let values = (health.current, health.maximum);
    if bar.last_values == Some(values) {
        return;
    }

    bar.readout = HealthReadout::new(health.current, health.maximum, "Health: ");
    bar.visible = true;
    bar.last_values = Some(values);
}

/// Bind the monster bar to the nearest living monster near the player.
fn detect_nearest_monster(
    time: Res<Time>,
    config: Res<HudConfig>,
    mut detector: ResMut<MonsterDetector>,
    player_query: Query<&Transform, With<Player>>,
    monsters: Query<(Entity, &Transform, &Health), (With<Monster>, Without<Dead>)>,
    mut bar_query: Query<&mut MonsterHealthBar>,
) {
    if !detector.tick(time.delta(), config.refresh_interval_secs) {
        return;
    }
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    let nearest = player_query.get_single().ok().and_then(|player| {
        let candidates = monsters
            .iter()
            .filter(|(_, _, health)| health.is_alive())
            .map(|(entity, transform, _)| (entity, transform.translation));
        closest_in_range(player.translation, config.show_distance, candidates)
    });

    if bar.monster != nearest {
        bar.show_for(nearest);
    }
}

/// Refresh the monster bar from its bound monster.
fn update_monster_health_bar(
    monsters: Query<&Health, With<Monster>>,
    mut bar_query: Query<&mut MonsterHealthBar>,
) {
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };
    let Some(monster) = bar.monster else {
        return;
    };

    // Bound monster was removed from the world
    let Ok(health) = monsters.get(monster) else {
        bar.show_for(None);
        return;
    };

    let values = (health.current, health.maximum);
    if bar.last_values == Some(values) {
        return;
    }

    bar.readout = HealthReadout::new(health.current, health.maximum, "");
    bar.last_values = Some(values);
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_formats_and_fills() {
        let readout = HealthReadout::new(50, 100, "Health: ");
        assert_eq!(readout.text, "Health: 50 / 100");
        assert_eq!(readout.fill, 0.5);
    }

    #[test]
    fn readout_clamps_bad_values() {
        let readout = HealthReadout::new(-20, 0, "");
        assert_eq!(readout.text, "0 / 1");
        assert_eq!(readout.fill, 0.0);

        let readout = HealthReadout::new(300, 100, "");
        assert_eq!(readout.text, "100 / 100");
        assert_eq!(readout.fill, 1.0);
    }

    #[test]
    fn detector_fires_immediately_then_waits() {
        let mut detector = MonsterDetector::default();
        let step = Duration::from_millis(40);

        assert!(detector.tick(step, 0.1));
        assert!(!detector.tick(step, 0.1));
        assert!(!detector.tick(step, 0.1));
        assert!(detector.tick(step, 0.1));
    }

    #[test]
    fn unbinding_hides_bar() {
        let mut bar = MonsterHealthBar::default();
        bar.show_for(Some(Entity::from_raw(9)));
        assert!(bar.visible);

        bar.show_for(None);
        assert!(!bar.visible);
        assert_eq!(bar.monster, None);
    }
}
