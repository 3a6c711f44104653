//! Event image storage configuration.

use serde::{Deserialize, Serialize};

/// Static event image configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Root directory containing event images, laid out as
    /// `<image_root>/<event id>/<filename>`.
    #[serde(default = "default_image_root")]
    pub image_root: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            image_root: default_image_root(),
        }
    }
}

fn default_image_root() -> String {
    "EventImage".to_string()
}
