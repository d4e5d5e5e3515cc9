//! Maps the site-provided category onto a configured path.

use tracing::trace;

use crate::inference::tables::{names_match, CANONICAL_CATEGORIES};
use crate::inference::traits::PathStrategy;
use crate::inference::types::{StoragePath, Suggestion, TorrentDescriptor};

/// Matches by site category: first by path name, then through the alias table.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryMatcher;

impl CategoryMatcher {
    pub fn new() -> Self {
        Self
    }

    /// First path whose name matches the category directly.
    fn direct_match<'a>(category: &str, paths: &'a [StoragePath]) -> Option<&'a StoragePath> {
        paths.iter().find(|p| names_match(&p.name, category))
    }

    /// First path whose name matches the canonical category the site category aliases to.
    fn alias_match<'a>(category: &str, paths: &'a [StoragePath]) -> Option<&'a StoragePath> {
        CANONICAL_CATEGORIES
            .iter()
            .filter(|canonical| canonical.matches_site_category(category))
            .find_map(|canonical| {
                let hit = paths.iter().find(|p| canonical.matches_path_name(&p.name));
                if let Some(path) = hit {
                    trace!(
                        category,
                        canonical = canonical.label,
                        path = %path.name,
                        "category resolved through alias"
                    );
                }
                hit
            })
    }
}

impl PathStrategy for CategoryMatcher {
    fn name(&self) -> &str {
        "category"
    }

    fn suggest(&self, torrent: &TorrentDescriptor, paths: &[StoragePath]) -> Option<Suggestion> {
        let category = torrent.category_lower()?;

        Self::direct_match(&category, paths)
            .or_else(|| Self::alias_match(&category, paths))
            .map(Suggestion::from)
    }
}
