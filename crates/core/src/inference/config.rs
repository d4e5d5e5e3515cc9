//! Inference configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::tables::KeywordTable;

/// Switches for each inference stage, plus the optional keyword override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Try to map the site category onto a path.
    #[serde(default = "default_true")]
    pub match_by_category: bool,

    /// Score paths against the torrent title.
    #[serde(default = "default_true")]
    pub match_by_keyword: bool,

    /// Fall back to the path flagged as default (or named like one).
    #[serde(default = "default_true")]
    pub fallback_to_default_path: bool,

    /// Fall back to letting the download client choose.
    #[serde(default = "default_true")]
    pub use_downloader_default: bool,

    /// Category name -> keywords. Replaces the built-in table when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_map: Option<BTreeMap<String, Vec<String>>>,

    /// Append a per-series subfolder when the title carries a season.
    #[serde(default)]
    pub create_series_subfolder: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            match_by_category: true,
            match_by_keyword: true,
            fallback_to_default_path: true,
            use_downloader_default: true,
            category_map: None,
            create_series_subfolder: false,
        }
    }
}

impl InferenceConfig {
    /// Config with every strategy switched off.
    pub fn disabled() -> Self {
        Self {
            match_by_category: false,
            match_by_keyword: false,
            fallback_to_default_path: false,
            use_downloader_default: false,
            category_map: None,
            create_series_subfolder: false,
        }
    }

    /// Enables or disables series subfolders.
    pub fn with_series_subfolder(mut self, enabled: bool) -> Self {
        self.create_series_subfolder = enabled;
        self
    }

    /// Sets the user keyword table.
    pub fn with_category_map(mut self, map: BTreeMap<String, Vec<String>>) -> Self {
        self.category_map = Some(map);
        self
    }

    /// Returns true if any fallback step is enabled.
    pub fn has_fallback(&self) -> bool {
        self.fallback_to_default_path || self.use_downloader_default
    }

    /// Keyword table the scorer should use.
    pub fn keyword_table(&self) -> KeywordTable {
        match &self.category_map {
            Some(map) if !map.is_empty() => KeywordTable::from_map(map),
            _ => KeywordTable::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InferenceConfig::default();
        assert!(config.match_by_category);
        assert!(config.match_by_keyword);
        assert!(config.fallback_to_default_path);
        assert!(config.use_downloader_default);
        assert!(!config.create_series_subfolder);
        assert!(config.category_map.is_none());
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: InferenceConfig = toml::from_str("").unwrap();
        assert_eq!(config, InferenceConfig::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let toml = r#"
match_by_keyword = false
create_series_subfolder = true

[category_map]
"4K" = ["2160p", "UHD"]
"#;
        let config: InferenceConfig = toml::from_str(toml).unwrap();
        assert!(config.match_by_category);
        assert!(!config.match_by_keyword);
        assert!(config.create_series_subfolder);
        let map = config.category_map.as_ref().unwrap();
        assert_eq!(map["4K"], vec!["2160p", "UHD"]);
    }

    #[test]
    fn test_keyword_table_empty_map_falls_back_to_builtin() {
        let config = InferenceConfig::default().with_category_map(BTreeMap::new());
        assert_eq!(config.keyword_table(), KeywordTable::builtin());
    }

    #[test]
    fn test_keyword_table_override() {
        let mut map = BTreeMap::new();
        map.insert("4K".to_string(), vec!["2160P".to_string()]);
        let table = InferenceConfig::default()
            .with_category_map(map)
            .keyword_table();

        assert_eq!(table.categories().len(), 1);
        assert_eq!(table.categories()[0].name, "4K");
        // Keywords are matched against a lower-cased title
        assert_eq!(table.categories()[0].keywords, vec!["2160p"]);
    }
}
