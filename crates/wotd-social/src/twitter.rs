use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;

use crate::{Image, Post, PostError, PostReceipt, Poster, check_response};

/// X (Twitter) API v2 client using an OAuth 2.0 user-context token
#[derive(Clone)]
pub struct TwitterClient {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl TwitterClient {
    pub fn new(api_url: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    async fn upload_media(&self, image: &Image) -> Result<String, PostError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)?;
        let form = Form::new()
            .text("media_category", "tweet_image")
            .part("media", part);

        let response = self
            .client
            .post(format!("{}/2/media/upload", self.api_url))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        let body: DataEnvelope<MediaData> = check_response(response).await?.json().await?;
        Ok(body.data.id)
    }
}

#[async_trait]
impl Poster for TwitterClient {
    fn platform(&self) -> &'static str {
        "twitter"
    }

    async fn post(&self, post: &Post) -> Result<PostReceipt, PostError> {
        if self.access_token.is_empty() {
            return Err(PostError::Authentication);
        }

        let media_id = match &post.image {
            Some(image) => Some(self.upload_media(image).await?),
            None => None,
        };

        let response = self
            .client
            .post(format!("{}/2/tweets", self.api_url))
            .bearer_auth(&self.access_token)
            .json(&tweet_payload(&post.text, media_id.as_deref()))
            .send()
            .await?;

        let body: DataEnvelope<TweetData> = check_response(response).await?.json().await?;
        tracing::info!("Posted tweet {}", body.data.id);

        Ok(PostReceipt {
            platform: self.platform(),
            url: Some(format!("https://x.com/i/web/status/{}", body.data.id)),
            id: body.data.id,
        })
    }
}

fn tweet_payload(text: &str, media_id: Option<&str>) -> serde_json::Value {
    match media_id {
        Some(id) => json!({ "text": text, "media": { "media_ids": [id] } }),
        None => json!({ "text": text }),
    }
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct MediaData {
    id: String,
}

#[derive(Deserialize)]
struct TweetData {
    id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_only_payload() {
        assert_eq!(tweet_payload("hi", None), json!({ "text": "hi" }));
    }

    #[test]
    fn payload_with_media() {
        assert_eq!(
            tweet_payload("hi", Some("123")),
            json!({ "text": "hi", "media": { "media_ids": ["123"] } })
        );
    }

    #[tokio::test]
    async fn missing_token_is_authentication_error() {
        let client = TwitterClient::new("http://127.0.0.1:1".to_string(), String::new());
        let post = Post {
            text: "hi".to_string(),
            image: None,
        };
        assert!(matches!(
            client.post(&post).await,
            Err(PostError::Authentication)
        ));
    }
}
