use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://storage.googleapis.com".to_string()
}

/// Where word images live
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub bucket: String,
    /// Read images from this directory instead of over HTTP
    pub local_dir: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bucket: String::new(),
            local_dir: None,
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let base_url = env::var("WOTD_IMAGE_BASE_URL").unwrap_or_else(|_| default_base_url());
        let bucket = env::var("WOTD_IMAGE_BUCKET").unwrap_or_default();
        let local_dir = env::var("WOTD_IMAGE_DIR").ok().filter(|d| !d.is_empty());

        Self {
            base_url,
            bucket,
            local_dir,
        }
    }
}
