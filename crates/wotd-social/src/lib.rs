mod compose;
mod mastodon;
mod twitter;

pub use compose::{compose_status, image_for};
pub use mastodon::MastodonClient;
pub use twitter::TwitterClient;

use async_trait::async_trait;

/// Something ready to publish
#[derive(Debug, Clone)]
pub struct Post {
    pub text: String,
    pub image: Option<Image>,
}

#[derive(Debug, Clone)]
pub struct Image {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: String,
    /// Alt text shown by the platform
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReceipt {
    pub platform: &'static str,
    pub id: String,
    pub url: Option<String>,
}

/// Social media platform adapter
#[async_trait]
pub trait Poster: Send + Sync {
    /// Short platform name used in logs and responses
    fn platform(&self) -> &'static str;

    async fn post(&self, post: &Post) -> Result<PostReceipt, PostError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error")]
    Authentication,

    #[error("Posting to {0} is disabled")]
    Disabled(&'static str),
}

/// Map an HTTP response to an error unless it succeeded
pub(crate) async fn check_response(
    response: reqwest::Response,
) -> Result<reqwest::Response, PostError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status.as_u16() {
        401 | 403 => Err(PostError::Authentication),
        429 => Err(PostError::RateLimited),
        code => {
            let body = response.text().await.unwrap_or_default();
            Err(PostError::Api { status: code, body })
        }
    }
}
