use serde::Serialize;
use wotd_social::{Image, Post, compose_status, image_for};
use wotd_types::WordRecord;

use crate::state::AppState;

/// Per-platform result of one publish attempt
#[derive(Debug, Clone, Serialize)]
pub struct PlatformResult {
    pub platform: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishOutcome {
    pub word: WordRecord,
    pub with_image: bool,
    pub results: Vec<PlatformResult>,
}

impl PublishOutcome {
    /// True unless every enabled platform failed
    pub fn succeeded(&self) -> bool {
        self.results.is_empty() || self.results.iter().any(|r| r.ok)
    }
}

/// Post `record` to every configured platform.
///
/// A missing image downgrades to a text-only post rather than failing.
pub async fn publish(state: &AppState, record: WordRecord) -> PublishOutcome {
    let image = fetch_image(state, &record).await;
    let with_image = image.is_some();
    let post = Post {
        text: compose_status(&record, with_image),
        image,
    };

    let mut results = Vec::with_capacity(state.posters.len());
    for poster in &state.posters {
        let platform = poster.platform();
        let result = match poster.post(&post).await {
            Ok(receipt) => {
                tracing::info!(platform, id = %receipt.id, "Posted word {}", record.index);
                PlatformResult {
                    platform,
                    ok: true,
                    id: Some(receipt.id),
                    url: receipt.url,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(platform, "Failed to post word {}: {}", record.index, e);
                PlatformResult {
                    platform,
                    ok: false,
                    id: None,
                    url: None,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(result);
    }

    PublishOutcome {
        word: record,
        with_image,
        results,
    }
}

async fn fetch_image(state: &AppState, record: &WordRecord) -> Option<Image> {
    if !record.has_photo() {
        return None;
    }
    let Some(store) = &state.images else {
        tracing::warn!("Word {} has a photo but no image store is configured", record.index);
        return None;
    };

    match store.fetch(&record.photo).await {
        Ok(bytes) => Some(image_for(record, bytes)),
        Err(e) => {
            tracing::warn!("Posting word {} without image: {}", record.index, e);
            None
        }
    }
}
