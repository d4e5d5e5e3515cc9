//! Path resolver - runs the inference stages in priority order.

use tracing::debug;

use crate::inference::{
    category_matcher::CategoryMatcher,
    config::InferenceConfig,
    fallback::FallbackResolver,
    keyword_scorer::KeywordScorer,
    series_folder::apply_series_subfolder,
    traits::PathStrategy,
    types::{StoragePath, Suggestion, TorrentDescriptor},
};

/// Chains the enabled stages and applies the series finalizer to the winner.
pub struct PathResolver {
    strategies: Vec<Box<dyn PathStrategy>>,
    create_series_subfolder: bool,
}

impl PathResolver {
    /// Build the stage chain for a configuration.
    pub fn new(config: &InferenceConfig) -> Self {
        let mut strategies: Vec<Box<dyn PathStrategy>> = Vec::new();

        if config.match_by_category {
            strategies.push(Box::new(CategoryMatcher::new()));
        }
        if config.match_by_keyword {
            strategies.push(Box::new(KeywordScorer::new(config.keyword_table())));
        }
        if config.has_fallback() {
            strategies.push(Box::new(FallbackResolver::new(
                config.fallback_to_default_path,
                config.use_downloader_default,
            )));
        }

        Self {
            strategies,
            create_series_subfolder: config.create_series_subfolder,
        }
    }

    /// Names of the enabled stages, in the order they run.
    pub fn stage_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Suggest a path, or `None` when every enabled stage defers.
    pub fn resolve(&self, torrent: &TorrentDescriptor, paths: &[StoragePath]) -> Option<Suggestion> {
        if paths.is_empty() {
            debug!(torrent = %torrent.name, "no storage paths configured");
            return None;
        }

        let (stage, suggestion) = self
            .strategies
            .iter()
            .find_map(|s| s.suggest(torrent, paths).map(|found| (s.name(), found)))?;

        debug!(
            torrent = %torrent.name,
            stage,
            path = %suggestion.path,
            "storage path suggested"
        );

        if self.create_series_subfolder {
            Some(apply_series_subfolder(suggestion, &torrent.name))
        } else {
            Some(suggestion)
        }
    }
}

/// Suggest where a torrent should be saved.
///
/// Runs the category matcher, the keyword scorer and the fallback resolver in
/// that order (each only if enabled), stopping at the first suggestion, then
/// appends a series subfolder when configured. `None` means the caller should
/// let the user pick a path.
pub fn suggest_path(
    torrent: &TorrentDescriptor,
    paths: &[StoragePath],
    config: &InferenceConfig,
) -> Option<Suggestion> {
    PathResolver::new(config).resolve(torrent, paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let resolver = PathResolver::new(&InferenceConfig::default());
        assert_eq!(resolver.stage_names(), vec!["category", "keyword", "fallback"]);
    }

    #[test]
    fn test_disabled_stages_are_skipped() {
        let config = InferenceConfig {
            match_by_category: false,
            use_downloader_default: false,
            ..Default::default()
        };
        let resolver = PathResolver::new(&config);
        assert_eq!(resolver.stage_names(), vec!["keyword", "fallback"]);

        let resolver = PathResolver::new(&InferenceConfig::disabled());
        assert!(resolver.stage_names().is_empty());
    }

    #[test]
    fn test_empty_paths_yield_none() {
        let torrent = TorrentDescriptor::new("Westworld.S03E01");
        assert!(suggest_path(&torrent, &[], &InferenceConfig::default()).is_none());
    }

    #[test]
    fn test_category_short_circuits_keyword() {
        let paths = vec![
            StoragePath::new("1", "电影", "/m"),
            StoragePath::new("2", "剧集", "/t"),
        ];
        // Title looks like TV, but the site says movie
        let torrent = TorrentDescriptor::new("Show.S01E01").with_category("电影");
        let suggestion = suggest_path(&torrent, &paths, &InferenceConfig::default()).unwrap();
        assert_eq!(suggestion.path, "/m");
    }

    #[test]
    fn test_finalizer_only_when_enabled() {
        let paths = vec![StoragePath::new("1", "剧集", "/t")];
        let torrent = TorrentDescriptor::new("Show.S01E01");

        let plain = suggest_path(&torrent, &paths, &InferenceConfig::default()).unwrap();
        assert_eq!(plain.path, "/t");
        assert!(plain.series_subfolder.is_none());

        let config = InferenceConfig::default().with_series_subfolder(true);
        let nested = suggest_path(&torrent, &paths, &config).unwrap();
        assert_eq!(nested.path, "/t/Show S01");
    }

    #[test]
    fn test_finalizer_skips_downloader_default() {
        let paths = vec![StoragePath::new("1", "电影", "/m")];
        let torrent = TorrentDescriptor::new("Show.S01E01");
        let config = InferenceConfig::default().with_series_subfolder(true);

        let suggestion = suggest_path(&torrent, &paths, &config).unwrap();
        assert!(suggestion.is_downloader_default());
        assert!(suggestion.original_path.is_none());
    }
}
