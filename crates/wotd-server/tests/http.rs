//! HTTP surface against fake collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use wotd_config::Config;
use wotd_core::FixedDay;
use wotd_io::{ImageError, ImageStore};
use wotd_server::{AppState, build_router};
use wotd_social::{Post, PostError, PostReceipt, Poster};
use wotd_types::WordRecord;

#[derive(Default)]
struct RecordingPoster {
    posts: Mutex<Vec<Post>>,
}

#[async_trait]
impl Poster for RecordingPoster {
    fn platform(&self) -> &'static str {
        "recording"
    }

    async fn post(&self, post: &Post) -> Result<PostReceipt, PostError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(PostReceipt {
            platform: self.platform(),
            id: "1".to_string(),
            url: None,
        })
    }
}

struct FailingPoster;

#[async_trait]
impl Poster for FailingPoster {
    fn platform(&self) -> &'static str {
        "failing"
    }

    async fn post(&self, _post: &Post) -> Result<PostReceipt, PostError> {
        Err(PostError::RateLimited)
    }
}

/// Serves `komorebi.jpg`, nothing else
struct FakeImages;

#[async_trait]
impl ImageStore for FakeImages {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, ImageError> {
        if key == "komorebi.jpg" {
            Ok(vec![0xff, 0xd8, 0xff])
        } else {
            Err(ImageError::NotFound(key.to_string()))
        }
    }
}

fn words() -> Vec<WordRecord> {
    vec![
        WordRecord {
            index: 1,
            word: "木漏れ日".to_string(),
            meaning: "sunlight through leaves".to_string(),
            link: "https://example.com/1".to_string(),
            photo: "komorebi.jpg".to_string(),
            photo_attribution: "Photo by Ōno".to_string(),
        },
        WordRecord {
            index: 2,
            word: "積ん読".to_string(),
            meaning: "buying books and not reading them".to_string(),
            photo: "missing.jpg".to_string(),
            photo_attribution: "Photo by Kato".to_string(),
            ..WordRecord::default()
        },
        WordRecord {
            index: 3,
            word: "侘寂".to_string(),
            meaning: "beauty in imperfection".to_string(),
            ..WordRecord::default()
        },
    ]
}

async fn serve(state: AppState) -> String {
    let router = build_router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_on_day(day: u32, dictionary: Vec<WordRecord>) -> AppState {
    AppState::new(Config::default(), dictionary).with_calendar(Arc::new(FixedDay(day)))
}

async fn get_json(url: String) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

async fn post_json(url: String) -> (u16, Value) {
    let response = reqwest::Client::new().post(url).send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn health() {
    let base = serve(state_on_day(1, words())).await;
    let body = reqwest::get(format!("{base}/healthz"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn todays_word_wraps_past_dictionary_length() {
    let base = serve(state_on_day(5, words())).await;
    let (status, body) = get_json(format!("{base}/words/today")).await;
    assert_eq!(status, 200);
    assert_eq!(body["index"], 2);
    assert_eq!(body["word"], "積ん読");
}

#[tokio::test]
async fn words_by_position() {
    let base = serve(state_on_day(1, words())).await;
    for (position, index) in [(1, 1), (3, 3), (4, 1), (6, 3), (7, 1)] {
        let (status, body) = get_json(format!("{base}/words/{position}")).await;
        assert_eq!(status, 200);
        assert_eq!(body["index"], index, "position {position}");
    }
}

#[tokio::test]
async fn bad_positions_are_client_errors() {
    let base = serve(state_on_day(1, words())).await;
    for position in ["0", "-5", "abc"] {
        let (status, body) = get_json(format!("{base}/words/{position}")).await;
        assert_eq!(status, 400, "position {position}");
        assert_eq!(body["error"]["code"], "invalid_position");
    }
}

#[tokio::test]
async fn empty_dictionary_is_server_error() {
    let base = serve(state_on_day(1, vec![])).await;
    let (status, body) = get_json(format!("{base}/words/today")).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"]["code"], "empty_dictionary");
}

#[tokio::test]
async fn posting_today_attaches_image_and_credit() {
    let poster = Arc::new(RecordingPoster::default());
    let state = state_on_day(1, words())
        .with_posters(vec![poster.clone() as Arc<dyn Poster>])
        .with_images(Some(Arc::new(FakeImages) as Arc<dyn ImageStore>));
    let base = serve(state).await;

    let (status, body) = post_json(format!("{base}/post/today")).await;
    assert_eq!(status, 200);
    assert_eq!(body["with_image"], true);
    assert_eq!(body["results"][0]["platform"], "recording");
    assert_eq!(body["results"][0]["ok"], true);

    let posts = poster.posts.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert!(posts[0].text.starts_with("木漏れ日\n\nsunlight through leaves"));
    assert!(posts[0].text.ends_with("📷 Photo by Ōno"));
    let image = posts[0].image.as_ref().unwrap();
    assert_eq!(image.bytes, vec![0xff, 0xd8, 0xff]);
    assert_eq!(image.mime, "image/jpeg");
}

#[tokio::test]
async fn missing_image_falls_back_to_text() {
    let poster = Arc::new(RecordingPoster::default());
    let state = state_on_day(1, words())
        .with_posters(vec![poster.clone() as Arc<dyn Poster>])
        .with_images(Some(Arc::new(FakeImages) as Arc<dyn ImageStore>));
    let base = serve(state).await;

    let (status, body) = post_json(format!("{base}/post/2")).await;
    assert_eq!(status, 200);
    assert_eq!(body["with_image"], false);

    let posts = poster.posts.lock().unwrap();
    assert!(posts[0].image.is_none());
    assert!(!posts[0].text.contains("Kato"));
}

#[tokio::test]
async fn partial_failure_still_succeeds() {
    let state = state_on_day(1, words()).with_posters(vec![
        Arc::new(FailingPoster) as Arc<dyn Poster>,
        Arc::new(RecordingPoster::default()) as Arc<dyn Poster>,
    ]);
    let base = serve(state).await;

    let (status, body) = post_json(format!("{base}/post/3")).await;
    assert_eq!(status, 200);
    assert_eq!(body["results"][0]["ok"], false);
    assert_eq!(body["results"][0]["error"], "Rate limit exceeded");
    assert_eq!(body["results"][1]["ok"], true);
}

#[tokio::test]
async fn total_failure_is_bad_gateway() {
    let state = state_on_day(1, words()).with_posters(vec![Arc::new(FailingPoster) as Arc<dyn Poster>]);
    let base = serve(state).await;
    let (status, _) = post_json(format!("{base}/post/today")).await;
    assert_eq!(status, 502);
}

#[tokio::test]
async fn reload_reads_artifact_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.json");
    std::fs::write(&path, serde_json::to_string(&words()).unwrap()).unwrap();

    let mut config = Config::default();
    config.dictionary.path = path.to_string_lossy().into_owned();
    let base = serve(AppState::new(config, vec![])).await;

    let (status, _) = get_json(format!("{base}/words/1")).await;
    assert_eq!(status, 500);

    let (status, body) = post_json(format!("{base}/dictionary/reload")).await;
    assert_eq!(status, 200);
    assert_eq!(body["words"], 3);

    let (status, body) = get_json(format!("{base}/words/1")).await;
    assert_eq!(status, 200);
    assert_eq!(body["word"], "木漏れ日");
}
