use std::env;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_api_url() -> String {
    "https://api.x.com".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TwitterConfig {
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// OAuth 2.0 user-context token
    #[serde(default)]
    pub access_token: String,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: default_api_url(),
            access_token: String::new(),
        }
    }
}

impl TwitterConfig {
    pub fn new() -> Self {
        let api_url = env::var("TWITTER_API_URL").unwrap_or_else(|_| default_api_url());
        let access_token = env::var("TWITTER_ACCESS_TOKEN").unwrap_or_default();

        // enabled whenever a token is configured, unless switched off explicitly
        let enabled = env_flag("TWITTER_ENABLED").unwrap_or(!access_token.is_empty());

        Self {
            enabled,
            api_url,
            access_token,
        }
    }
}
