use std::env;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_visibility() -> String {
    "public".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MastodonConfig {
    pub enabled: bool,
    /// e.g. `https://mastodon.social`
    #[serde(default)]
    pub instance_url: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_visibility")]
    pub visibility: String,
}

impl Default for MastodonConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            instance_url: String::new(),
            access_token: String::new(),
            visibility: default_visibility(),
        }
    }
}

impl MastodonConfig {
    pub fn new() -> Self {
        let instance_url = env::var("MASTODON_INSTANCE_URL").unwrap_or_default();
        let access_token = env::var("MASTODON_ACCESS_TOKEN").unwrap_or_default();
        let visibility =
            env::var("MASTODON_VISIBILITY").unwrap_or_else(|_| default_visibility());

        let enabled = env_flag("MASTODON_ENABLED")
            .unwrap_or(!access_token.is_empty() && !instance_url.is_empty());

        Self {
            enabled,
            instance_url,
            access_token,
            visibility,
        }
    }
}
