use std::env;

use serde::{Deserialize, Serialize};

fn default_db_path() -> String {
    "words.db".to_string()
}

fn default_backup_dir() -> String {
    "backups".to_string()
}

/// Offline tool's word database
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            backup_dir: default_backup_dir(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let db_path = env::var("WOTD_DB_PATH").unwrap_or_else(|_| default_db_path());
        let backup_dir = env::var("WOTD_BACKUP_DIR").unwrap_or_else(|_| default_backup_dir());

        Self {
            db_path,
            backup_dir,
        }
    }
}
