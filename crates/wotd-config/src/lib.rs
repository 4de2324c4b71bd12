use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::logging::LoggingConfig;
use self::mastodon::MastodonConfig;
use self::server::ServerConfig;
use self::storage::StorageConfig;
use self::store::StoreConfig;
use self::twitter::TwitterConfig;

pub mod dictionary;
pub mod logging;
pub mod mastodon;
pub mod server;
pub mod storage;
pub mod store;
pub mod twitter;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub storage: StorageConfig,
    pub store: StoreConfig,
    pub twitter: TwitterConfig,
    pub mastodon: MastodonConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Build from the process environment, falling back to defaults
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            dictionary: DictionaryConfig::new(),
            storage: StorageConfig::new(),
            store: StoreConfig::new(),
            twitter: TwitterConfig::new(),
            mastodon: MastodonConfig::new(),
            logging: LoggingConfig::new(),
        }
    }
}

/// Read a boolean flag, accepting `1/0`, `true/false`, `yes/no`
pub(crate) fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
