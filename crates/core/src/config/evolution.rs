use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration record for the migration engine.
///
/// Populated once by the host before wiring runs and passed through to the
/// engine unchanged. Only `enabled` is interpreted by the wiring itself; the
/// remaining options belong to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Master switch for the whole migration subtree
    pub enabled: bool,
    /// Locations searched for migration scripts, in order
    pub script_locations: Vec<String>,
    /// Index holding the applied-migration history
    pub history_index: String,
    /// Placeholder values substituted into migration scripts
    pub placeholders: HashMap<String, String>,
    /// Marker opening a placeholder reference in a script
    pub placeholder_prefix: String,
    /// Marker closing a placeholder reference in a script
    pub placeholder_suffix: String,
    /// Script file encoding
    pub encoding: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script_locations: vec!["es/migration".to_string()],
            history_index: "es_evolution".to_string(),
            placeholders: HashMap::new(),
            placeholder_prefix: "${".to_string(),
            placeholder_suffix: "}".to_string(),
            encoding: "UTF-8".to_string(),
        }
    }
}

impl MigrationConfig {
    /// Create a config with the feature switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}
