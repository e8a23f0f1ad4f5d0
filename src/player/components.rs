//! Player-related components.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::{DataLoadError, Definition};

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Wind-up used when the configured one is too short to be a real swing.
const FALLBACK_WINDUP_SECS: f32 = 0.3;

/// Player tuning, optionally loaded from `player.ron` in the data directory.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Health ceiling at spawn
    pub max_health: i32,
    /// Distance in front of the player where the strike sphere is centered
    pub attack_reach: f32,
    /// Radius of the strike sphere
    pub attack_radius: f32,
    /// Time between starting a swing and the hit landing
    pub attack_windup_secs: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            attack_reach: 1.0,
            attack_radius: 2.0,
            attack_windup_secs: FALLBACK_WINDUP_SECS,
        }
    }
}

impl PlayerConfig {
    /// Wind-up in seconds; anything at or under 0.05 falls back to 0.3.
    pub fn windup_secs(&self) -> f32 {
        if self.attack_windup_secs <= 0.05 {
            FALLBACK_WINDUP_SECS
        } else {
            self.attack_windup_secs
        }
    }
}

impl Definition for PlayerConfig {
    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        if self.attack_radius < 0.0 {
            return Err(DataLoadError::InvalidDefinition {
                path: path.to_string(),
                field: "attack_radius",
                details: format!("must not be negative (got {})", self.attack_radius),
            });
        }
        Ok(())
    }
}
