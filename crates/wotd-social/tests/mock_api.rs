//! Adapters against small in-process stand-ins for the platform APIs.

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use wotd_social::{Image, MastodonClient, Post, PostError, Poster, TwitterClient};

type Seen = Arc<Mutex<Vec<Value>>>;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn post_with_image() -> Post {
    Post {
        text: "木漏れ日\n\nsunlight".to_string(),
        image: Some(Image {
            bytes: vec![1, 2, 3],
            file_name: "komorebi.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            description: "木漏れ日".to_string(),
        }),
    }
}

#[tokio::test]
async fn mastodon_uploads_media_then_posts_status() {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route(
            "/api/v2/media",
            post(|headers: HeaderMap, _body: Bytes| async move {
                assert_eq!(bearer(&headers).as_deref(), Some("Bearer secret"));
                (StatusCode::ACCEPTED, Json(json!({ "id": "media-1" })))
            }),
        )
        .route(
            "/api/v1/statuses",
            post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(body);
                Json(json!({ "id": "109", "url": "https://example.social/@wotd/109" }))
            }),
        )
        .with_state(seen.clone());
    let base = serve(app).await;

    let client = MastodonClient::new(base, "secret".to_string(), "unlisted".to_string());
    let receipt = client.post(&post_with_image()).await.unwrap();

    assert_eq!(receipt.platform, "mastodon");
    assert_eq!(receipt.id, "109");
    assert_eq!(receipt.url.as_deref(), Some("https://example.social/@wotd/109"));

    let bodies = seen.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["status"], "木漏れ日\n\nsunlight");
    assert_eq!(bodies[0]["visibility"], "unlisted");
    assert_eq!(bodies[0]["media_ids"], json!(["media-1"]));
}

#[tokio::test]
async fn twitter_posts_text_only() {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route(
            "/2/tweets",
            post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(body);
                (StatusCode::CREATED, Json(json!({ "data": { "id": "42", "text": "x" } })))
            }),
        )
        .with_state(seen.clone());
    let base = serve(app).await;

    let client = TwitterClient::new(base, "token".to_string());
    let post = Post {
        text: "hello".to_string(),
        image: None,
    };
    let receipt = client.post(&post).await.unwrap();

    assert_eq!(receipt.id, "42");
    assert_eq!(seen.lock().unwrap()[0], json!({ "text": "hello" }));
}

#[tokio::test]
async fn status_codes_map_to_errors() {
    let app = Router::new()
        .route("/limited/2/tweets", post(|| async { StatusCode::TOO_MANY_REQUESTS }))
        .route("/denied/2/tweets", post(|| async { StatusCode::UNAUTHORIZED }))
        .route(
            "/broken/2/tweets",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    let base = serve(app).await;
    let post = Post {
        text: "hello".to_string(),
        image: None,
    };

    let limited = TwitterClient::new(format!("{base}/limited"), "t".to_string());
    assert!(matches!(limited.post(&post).await, Err(PostError::RateLimited)));

    let denied = TwitterClient::new(format!("{base}/denied"), "t".to_string());
    assert!(matches!(denied.post(&post).await, Err(PostError::Authentication)));

    let broken = TwitterClient::new(format!("{base}/broken"), "t".to_string());
    match broken.post(&post).await {
        Err(PostError::Api { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
