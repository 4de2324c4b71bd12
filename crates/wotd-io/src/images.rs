use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("invalid image key: {0}")]
    InvalidKey(String),

    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Blob storage holding word images
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, ImageError>;
}

/// Public object URLs of the form `{base_url}/{bucket}/{key}`
#[derive(Clone)]
pub struct HttpImageStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl HttpImageStore {
    pub fn new(base_url: String, bucket: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            bucket,
        }
    }

    pub fn object_url(&self, key: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let key = key.trim_start_matches('/');
        let bucket = self.bucket.trim_matches('/');
        if bucket.is_empty() {
            format!("{base}/{key}")
        } else {
            format!("{base}/{bucket}/{key}")
        }
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, ImageError> {
        if key.is_empty() {
            return Err(ImageError::InvalidKey(key.to_string()));
        }

        let url = self.object_url(key);
        tracing::debug!("Fetching image {}", url);
        let response = self.client.get(&url).send().await?;

        if response.status() == 404 {
            return Err(ImageError::NotFound(key.to_string()));
        }
        if !response.status().is_success() {
            return Err(ImageError::Http {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Images kept in a local directory, keyed by relative path
#[derive(Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, ImageError> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(ImageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, ImageError> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ImageError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
