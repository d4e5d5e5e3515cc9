use serde::{Deserialize, Serialize};

use crate::inference::{InferenceConfig, StoragePath};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub inference: InferenceConfig,
    /// Storage paths, in matching priority order
    #[serde(default)]
    pub paths: Vec<StoragePath>,
}
