//! Storage path inference.
//!
//! Decides which configured storage path a newly found torrent should be saved
//! to, from its release title and the category reported by the site.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PathResolver                          │
//! │                                                              │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ CategoryMatcher  │─▶│ KeywordScorer│─▶│FallbackResolver│  │
//! │  └──────────────────┘  └──────────────┘  └────────────────┘  │
//! │            first suggestion wins, later stages skipped       │
//! │                              │                               │
//! │                              ▼                               │
//! │                  series subfolder (optional)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage implements [`PathStrategy`]. The whole computation is a pure
//! function of its inputs: no I/O, no mutable shared state.
//!
//! # Example
//!
//! ```
//! use savepath_core::inference::{suggest_path, InferenceConfig, StoragePath, TorrentDescriptor};
//!
//! let paths = vec![
//!     StoragePath::new("movies", "电影", "/d/movies"),
//!     StoragePath::new("tv", "剧集", "/d/tv").as_default(),
//! ];
//! let torrent = TorrentDescriptor::new("Westworld.S03E01.1080p.WEB-DL");
//!
//! let suggestion = suggest_path(&torrent, &paths, &InferenceConfig::default()).unwrap();
//! assert_eq!(suggestion.path, "/d/tv");
//! ```

mod category_matcher;
mod config;
mod fallback;
mod keyword_scorer;
mod patterns;
mod resolver;
mod series_folder;
mod tables;
mod traits;
mod types;

pub use category_matcher::CategoryMatcher;
pub use config::InferenceConfig;
pub use fallback::FallbackResolver;
pub use keyword_scorer::{score_paths, KeywordScorer};
pub use patterns::{has_episode, has_season};
pub use resolver::{suggest_path, PathResolver};
pub use series_folder::{
    apply_series_subfolder, extract_series_name, join_path_segment, MAX_SERIES_NAME_CHARS,
};
pub use tables::{
    names_match, CanonicalCategory, KeywordCategory, KeywordTable, CANONICAL_CATEGORIES,
};
pub use traits::PathStrategy;
pub use types::{PathScore, StoragePath, Suggestion, TorrentDescriptor, DOWNLOADER_DEFAULT_NAME};
