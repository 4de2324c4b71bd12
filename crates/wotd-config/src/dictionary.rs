use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "dictionary.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Published artifact read by the server
    #[serde(default = "default_path")]
    pub path: String,
    /// Offset used to decide which calendar day it is
    #[serde(default)]
    pub utc_offset_hours: i32,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            utc_offset_hours: 0,
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("WOTD_DICTIONARY_PATH").unwrap_or_else(|_| default_path());

        let utc_offset_hours = env::var("WOTD_UTC_OFFSET_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            path,
            utc_offset_hours,
        }
    }
}
