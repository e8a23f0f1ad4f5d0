//! Weapon data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use super::components::{Weapon, WeaponKind};
use crate::core::{load_definitions_dir, DataLoadError, DataPaths, Definition};

/// Weapon definition loaded from RON file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WeaponDefinition {
    pub name: String,
    pub kind: WeaponKind,
    /// Overrides the kind's damage constant
    #[serde(default)]
    pub base_damage: Option<i32>,
    /// Overrides the `<Kind>Attack` animation state name
    #[serde(default)]
    pub attack_animation: Option<String>,
}

impl Definition for WeaponDefinition {
    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        if let Some(damage) = self.base_damage {
            if damage < 0 {
                return Err(DataLoadError::InvalidDefinition {
                    path: path.to_string(),
                    field: "base_damage",
                    details: format!("must not be negative (got {damage})"),
                });
            }
        }
        Ok(())
    }
}

/// Resource holding all loaded weapon definitions.
#[derive(Resource, Default)]
pub struct WeaponRegistry {
    pub definitions: HashMap<String, WeaponDefinition>,
}

impl WeaponRegistry {
    /// Get a weapon definition by file stem.
    pub fn get(&self, weapon_id: &str) -> Option<&WeaponDefinition> {
        self.definitions.get(weapon_id)
    }

    /// Build the named weapon, falling back to a plain weapon of `fallback` kind.
    pub fn weapon_or(&self, weapon_id: &str, fallback: WeaponKind) -> Weapon {
        self.get(weapon_id)
            .map(Weapon::from_definition)
            .unwrap_or_else(|| Weapon::new(fallback))
    }
}

/// Load all weapon definitions from the weapons data directory.
pub fn load_weapon_definitions(paths: Res<DataPaths>, mut registry: ResMut<WeaponRegistry>) {
    let dir = paths.weapons();

    match load_definitions_dir::<WeaponDefinition>(&dir) {
        Ok(definitions) => {
            for (id, definition) in &definitions {
                info!("Loaded weapon definition: {} ({})", definition.name, id);
            }
            registry.definitions.extend(definitions);
        }
        Err(e) => {
            warn!("No weapon definitions loaded, using built-in weapons: {}", e);
        }
    }

    info!("Loaded {} weapon definitions", registry.definitions.len());
}
