// ABOUTME: Purge tuning options.
// ABOUTME: Bounds how long a single image removal may take.

use crate::components::DEFAULT_IMAGE_REMOVAL_TIMEOUT;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PurgeConfig {
    #[serde(default = "default_image_timeout", with = "humantime_serde")]
    pub image_timeout: Duration,
}

fn default_image_timeout() -> Duration {
    DEFAULT_IMAGE_REMOVAL_TIMEOUT
}

impl Default for PurgeConfig {
    fn default() -> Self {
        PurgeConfig {
            image_timeout: default_image_timeout(),
        }
    }
}
