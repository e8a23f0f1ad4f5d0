//! Monster data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use crate::core::{load_definitions_dir, DataLoadError, DataPaths, Definition};

/// Monster definition loaded from RON file.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MonsterDefinition {
    pub name: String,
    pub max_health: i32,
    pub attack_power: i32,
}

impl MonsterDefinition {
    pub fn cat() -> Self {
        Self {
            name: "Cat".to_string(),
            max_health: 45,
            attack_power: 10,
        }
    }

    pub fn dragon() -> Self {
        Self {
            name: "Dragon".to_string(),
            max_health: 30,
            attack_power: 10,
        }
    }
}

impl Definition for MonsterDefinition {
    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        let invalid = |field, value: i32| DataLoadError::InvalidDefinition {
            path: path.to_string(),
            field,
            details: format!("must not be negative (got {value})"),
        };

        if self.max_health < 0 {
            return Err(invalid("max_health", self.max_health));
        }
        if self.attack_power < 0 {
            return Err(invalid("attack_power", self.attack_power));
        }
        Ok(())
    }
}

/// Resource holding all known monster definitions.
///
/// Starts with the built-in monsters; data files override them by name.
#[derive(Resource)]
pub struct MonsterRegistry {
    pub definitions: HashMap<String, MonsterDefinition>,
}

impl Default for MonsterRegistry {
    fn default() -> Self {
        let definitions = HashMap::from([
            ("cat".to_string(), MonsterDefinition::cat()),
            ("dragon".to_string(), MonsterDefinition::dragon()),
        ]);
        Self { definitions }
    }
}

impl MonsterRegistry {
    /// Get a monster definition by type name.
    pub fn get(&self, monster_type: &str) -> Option<&MonsterDefinition> {
        self.definitions.get(monster_type)
    }
}

/// Load all monster definitions from the monsters data directory.
pub fn load_monster_definitions(paths: Res<DataPaths>, mut registry: ResMut<MonsterRegistry>) {
    let dir = paths.monsters();

    match load_definitions_dir::<MonsterDefinition>(&dir) {
        Ok(definitions) => {
            for (monster_type, definition) in &definitions {
                info!("Loaded monster definition: {} ({})", definition.name, monster_type);
            }
            registry.definitions.extend(definitions);
        }
        Err(e) => {
            warn!("No monster definitions loaded, using built-in monsters: {}", e);
        }
    }

    info!("Loaded {} monster definitions", registry.definitions.len());
}
