use std::collections::HashSet;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Storage paths have a non-blank name and a unique id
/// - `category_map` entries have a name and at least one keyword
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut ids = HashSet::new();
    for (i, path) in config.paths.iter().enumerate() {
        if path.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "paths[{}].name cannot be empty",
                i
            )));
        }
        if !ids.insert(path.id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate path id '{}'",
                path.id
            )));
        }
    }

    if let Some(map) = &config.inference.category_map {
        for (name, keywords) in map {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "inference.category_map has an entry with an empty name".to_string(),
                ));
            }
            if keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(ConfigError::ValidationError(format!(
                    "inference.category_map.{} needs at least one keyword",
                    name
                )));
            }
        }
    }

    Ok(())
}
