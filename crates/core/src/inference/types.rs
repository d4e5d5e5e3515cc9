//! Input and output types for path inference.

use serde::{Deserialize, Serialize};

/// Name carried by the suggestion that leaves the save path to the download client.
pub const DOWNLOADER_DEFAULT_NAME: &str = "downloader default";

/// A torrent that needs a save location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentDescriptor {
    /// Release title as published by the site.
    pub name: String,
    /// Category reported by the site, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TorrentDescriptor {
    /// Create a descriptor without a site category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
        }
    }

    /// Attach the site-provided category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Lower-cased category, or `None` when absent or blank.
    pub(crate) fn category_lower(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase)
    }
}

/// A user-configured download destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePath {
    pub id: String,
    /// Human label, used for matching.
    pub name: String,
    /// Filesystem location. Empty means "let the download client decide".
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub is_default: bool,
}

impl StoragePath {
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            is_default: false,
        }
    }

    /// Mark this path as the designated default.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub(crate) fn name_lower(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// The engine's answer: where to save the torrent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub path: String,
    pub is_default: bool,
    /// Path before a series subfolder was appended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
    /// Series subfolder that was appended to `original_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_subfolder: Option<String>,
}

impl Suggestion {
    /// The "do not specify a path" sentinel.
    pub fn downloader_default() -> Self {
        Self {
            name: DOWNLOADER_DEFAULT_NAME.to_string(),
            path: String::new(),
            is_default: false,
            original_path: None,
            series_subfolder: None,
        }
    }

    /// Returns true if the download client should pick the location.
    pub fn is_downloader_default(&self) -> bool {
        self.path.is_empty() && self.name == DOWNLOADER_DEFAULT_NAME
    }
}

impl From<&StoragePath> for Suggestion {
    fn from(path: &StoragePath) -> Self {
        Self {
            name: path.name.clone(),
            path: path.path.clone(),
            is_default: path.is_default,
            original_path: None,
            series_subfolder: None,
        }
    }
}

/// Score computed for one storage path by the keyword scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathScore {
    /// Position of the path in the list that was scored.
    pub index: usize,
    pub name: String,
    pub score: i32,
    /// Contributions that made up the score, in evaluation order.
    pub reasons: Vec<String>,
}
