use std::env;

use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human readable output
    pub json: bool,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: default_filter(),
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        let json = env_flag("WOTD_LOG_JSON").unwrap_or(false);
        let filter = env::var("WOTD_LOG_FILTER").unwrap_or_else(|_| default_filter());

        Self { json, filter }
    }
}
