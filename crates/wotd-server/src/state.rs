use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use wotd_config::Config;
use wotd_core::{DayOfYearSource, SystemCalendar};
use wotd_io::{ArtifactError, HttpImageStore, ImageStore, LocalImageStore};
use wotd_social::{MastodonClient, Poster, TwitterClient};
use wotd_types::WordRecord;

pub struct AppState {
    pub config: Config,
    /// Loaded artifact, only ever read by the selector
    pub dictionary: RwLock<Vec<WordRecord>>,
    pub images: Option<Arc<dyn ImageStore>>,
    pub posters: Vec<Arc<dyn Poster>>,
    pub calendar: Arc<dyn DayOfYearSource>,
}

impl AppState {
    /// Wire collaborators from `config`
    pub fn new(config: Config, dictionary: Vec<WordRecord>) -> Self {
        let images = image_store(&config);
        let posters = posters(&config);
        let calendar = Arc::new(SystemCalendar::new(config.dictionary.utc_offset_hours));

        Self {
            config,
            dictionary: RwLock::new(dictionary),
            images,
            posters,
            calendar,
        }
    }

    pub fn with_posters(mut self, posters: Vec<Arc<dyn Poster>>) -> Self {
        self.posters = posters;
        self
    }

    pub fn with_images(mut self, images: Option<Arc<dyn ImageStore>>) -> Self {
        self.images = images;
        self
    }

    pub fn with_calendar(mut self, calendar: Arc<dyn DayOfYearSource>) -> Self {
        self.calendar = calendar;
        self
    }

    /// Re-read the artifact from disk, replacing the cached dictionary
    pub async fn reload(&self) -> Result<usize, ArtifactError> {
        let path = PathBuf::from(&self.config.dictionary.path);
        let records = tokio::task::spawn_blocking(move || wotd_io::read_artifact(&path))
            .await
            .map_err(std::io::Error::other)??;

        let count = records.len();
        *self.dictionary.write().await = records;
        Ok(count)
    }
}

fn image_store(config: &Config) -> Option<Arc<dyn ImageStore>> {
    let storage = &config.storage;
    if let Some(dir) = &storage.local_dir {
        tracing::info!("Serving images from {}", dir);
        return Some(Arc::new(LocalImageStore::new(dir)));
    }
    if storage.bucket.is_empty() {
        tracing::warn!("No image bucket configured, posting text only");
        return None;
    }
    Some(Arc::new(HttpImageStore::new(
        storage.base_url.clone(),
        storage.bucket.clone(),
    )))
}

fn posters(config: &Config) -> Vec<Arc<dyn Poster>> {
    let mut posters: Vec<Arc<dyn Poster>> = Vec::new();

    if config.twitter.enabled {
        posters.push(Arc::new(TwitterClient::new(
            config.twitter.api_url.clone(),
            config.twitter.access_token.clone(),
        )));
    } else {
        tracing::warn!("Twitter integration disabled");
    }

    if config.mastodon.enabled {
        posters.push(Arc::new(MastodonClient::new(
            config.mastodon.instance_url.clone(),
            config.mastodon.access_token.clone(),
            config.mastodon.visibility.clone(),
        )));
    } else {
        tracing::warn!("Mastodon integration disabled");
    }

    posters
}
