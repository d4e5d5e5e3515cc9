pub mod config;
pub mod inference;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ENV_PREFIX,
};
pub use inference::{
    score_paths, suggest_path, InferenceConfig, KeywordTable, PathResolver, PathScore,
    PathStrategy, StoragePath, Suggestion, TorrentDescriptor,
};
