//! Last-resort path selection.

use crate::inference::traits::PathStrategy;
use crate::inference::types::{StoragePath, Suggestion, TorrentDescriptor};

/// Names that mark a catch-all path when none is flagged as default.
const DEFAULT_PATH_NAMES: &[&str] = &["其他", "默认", "default", "other"];

/// Falls back to the default path, then to the download client's own location.
#[derive(Debug, Clone, Copy)]
pub struct FallbackResolver {
    use_default_path: bool,
    use_downloader_default: bool,
}

impl FallbackResolver {
    pub fn new(use_default_path: bool, use_downloader_default: bool) -> Self {
        Self {
            use_default_path,
            use_downloader_default,
        }
    }

    /// Path flagged as default, else the first one named like a catch-all.
    fn default_path(paths: &[StoragePath]) -> Option<&StoragePath> {
        paths.iter().find(|p| p.is_default).or_else(|| {
            paths.iter().find(|p| {
                let name = p.name_lower();
                DEFAULT_PATH_NAMES.contains(&name.as_str())
            })
        })
    }
}

impl PathStrategy for FallbackResolver {
    fn name(&self) -> &str {
        "fallback"
    }

    fn suggest(&self, _torrent: &TorrentDescriptor, paths: &[StoragePath]) -> Option<Suggestion> {
        if self.use_default_path {
            if let Some(path) = Self::default_path(paths) {
                return Some(Suggestion::from(path));
            }
        }

        self.use_downloader_default.then(Suggestion::downloader_default)
    }
}
