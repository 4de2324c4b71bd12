use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::{Image, Post, PostError, PostReceipt, Poster, check_response};

#[derive(Clone)]
pub struct MastodonClient {
    client: reqwest::Client,
    instance_url: String,
    access_token: String,
    visibility: String,
}

impl MastodonClient {
    pub fn new(instance_url: String, access_token: String, visibility: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            instance_url: instance_url.trim_end_matches('/').to_string(),
            access_token,
            visibility,
        }
    }

    async fn upload_media(&self, image: &Image) -> Result<String, PostError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)?;
        let form = Form::new()
            .part("file", part)
            .text("description", image.description.clone());

        let response = self
            .client
            .post(format!("{}/api/v2/media", self.instance_url))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        // 202 means the upload is still processing; the id is usable either way
        let attachment: MediaAttachment = check_response(response).await?.json().await?;
        Ok(attachment.id)
    }
}

#[async_trait]
impl Poster for MastodonClient {
    fn platform(&self) -> &'static str {
        "mastodon"
    }

    async fn post(&self, post: &Post) -> Result<PostReceipt, PostError> {
        if self.access_token.is_empty() {
            return Err(PostError::Authentication);
        }

        let mut media_ids = Vec::new();
        if let Some(image) = &post.image {
            media_ids.push(self.upload_media(image).await?);
        }

        let request = StatusRequest {
            status: &post.text,
            visibility: &self.visibility,
            media_ids,
        };

        let response = self
            .client
            .post(format!("{}/api/v1/statuses", self.instance_url))
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status: StatusResponse = check_response(response).await?.json().await?;
        tracing::info!("Posted Mastodon status {}", status.id);

        Ok(PostReceipt {
            platform: self.platform(),
            id: status.id,
            url: status.url,
        })
    }
}

#[derive(Serialize)]
struct StatusRequest<'a> {
    status: &'a str,
    visibility: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    media_ids: Vec<String>,
}

#[derive(Deserialize)]
struct MediaAttachment {
    id: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    id: String,
    url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_request_omits_empty_media() {
        let request = StatusRequest {
            status: "hi",
            visibility: "unlisted",
            media_ids: vec![],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "status": "hi", "visibility": "unlisted" })
        );
    }
}
