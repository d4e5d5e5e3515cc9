//! Traits for inference stages.

use crate::inference::types::{StoragePath, Suggestion, TorrentDescriptor};

/// One stage of the path-inference chain.
///
/// Stages are tried in priority order; the first one returning a suggestion wins.
pub trait PathStrategy: Send + Sync {
    /// Name of this stage for logging.
    fn name(&self) -> &str;

    /// Suggest a path for the torrent, or `None` to defer to the next stage.
    ///
    /// Must not depend on anything but its arguments and its own configuration.
    fn suggest(&self, torrent: &TorrentDescriptor, paths: &[StoragePath]) -> Option<Suggestion>;
}
