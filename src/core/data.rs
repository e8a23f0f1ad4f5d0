//! RON data file loading shared by the monster and weapon registries.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::DataLoadError;

/// Root directory for data files.
#[derive(Resource, Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets/data"),
        }
    }
}

impl DataPaths {
    pub fn monsters(&self) -> PathBuf {
        self.root.join("monsters")
    }

    pub fn weapons(&self) -> PathBuf {
        self.root.join("weapons")
    }
}

/// A value loaded from a RON data file.
pub trait Definition: DeserializeOwned {
    /// Reject values that parse but make no sense in game.
    fn validate(&self, path: &str) -> Result<(), DataLoadError>;
}

/// Parse and validate a single definition from RON text.
pub fn parse_definition<T: Definition>(contents: &str, path: &str) -> Result<T, DataLoadError> {
    let definition = ron::from_str::<T>(contents).map_err(|e| DataLoadError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })?;
    definition.validate(path)?;
    Ok(definition)
}

/// Read, parse and validate a single definition file.
pub fn load_definition_file<T: Definition>(path: &Path) -> Result<T, DataLoadError> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(display));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    parse_definition(&contents, &display)
}

/// Load every `.ron` file in `dir`, keyed by file stem.
///
/// Files that fail to load are logged and skipped; only a missing or
/// unreadable directory is an error.
pub fn load_definitions_dir<T: Definition>(dir: &Path) -> Result<HashMap<String, T>, DataLoadError> {
    if !dir.exists() {
        return Err(DataLoadError::FileNotFound(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir).map_err(|e| DataLoadError::ReadError {
        path: dir.display().to_string(),
        details: e.to_string(),
    })?;

    let mut definitions = HashMap::new();

    for entry in entries.flatten() {
        let path = entry.path();

        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_definition_file::<T>(&path) {
            Ok(definition) => {
                definitions.insert(key, definition);
            }
            Err(e) => {
                error!("Skipping data file: {}", e);
            }
        }
    }

    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Sample {
        value: i32,
    }

    impl Definition for Sample {
        fn validate(&self, path: &str) -> Result<(), DataLoadError> {
            if self.value < 0 {
                return Err(DataLoadError::InvalidDefinition {
                    path: path.to_string(),
                    field: "value",
                    details: "must not be negative".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn parses_valid_definition() {
        let sample: Sample = parse_definition("(value: 4)", "sample.ron").unwrap();
        assert_eq!(sample.value, 4);
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let err = parse_definition::<Sample>("(value: \"four\")", "bad.ron").unwrap_err();
        match err {
            DataLoadError::ParseError { path, .. } => assert_eq!(path, "bad.ron"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_runs_after_parsing() {
        let err = parse_definition::<Sample>("(value: -1)", "neg.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidDefinition { field: "value", .. }));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = load_definitions_dir::<Sample>(Path::new("does/not/exist"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound(_))));
    }

    #[test]
    fn data_paths_nest_under_root() {
        let paths = DataPaths::default();
        assert_eq!(paths.monsters(), PathBuf::from("assets/data/monsters"));
        assert_eq!(paths.weapons(), PathBuf::from("assets/data/weapons"));
    }
}
