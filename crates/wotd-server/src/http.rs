use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use wotd_core::{select_by_day_of_year, select_by_position};
use wotd_types::WordRecord;

use crate::error::ApiError;
use crate::publish::publish;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/words/today", get(today_handler))
        .route("/words/:position", get(position_handler))
        .route("/post/today", post(post_today_handler))
        .route("/post/:position", post(post_position_handler))
        .route("/dictionary/reload", post(reload_handler))
        .with_state(state)
}

async fn healthz_handler() -> &'static str {
    "ok"
}

async fn today_handler(State(state): State<Arc<AppState>>) -> Result<Json<WordRecord>, ApiError> {
    Ok(Json(todays_word(&state).await?))
}

async fn position_handler(
    State(state): State<Arc<AppState>>,
    Path(position): Path<String>,
) -> Result<Json<WordRecord>, ApiError> {
    Ok(Json(word_at(&state, &position).await?))
}

async fn post_today_handler(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let record = todays_word(&state).await?;
    tracing::info!("Posting today's word: {}", record.index);
    Ok(publish_response(&state, record).await)
}

async fn post_position_handler(
    State(state): State<Arc<AppState>>,
    Path(position): Path<String>,
) -> Result<Response, ApiError> {
    let record = word_at(&state, &position).await?;
    tracing::info!("Posting word at position {}: {}", position, record.index);
    Ok(publish_response(&state, record).await)
}

async fn reload_handler(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>, ApiError> {
    let words = state
        .reload()
        .await
        .map_err(|e| ApiError::internal("reload_failed", e.to_string()))?;
    tracing::info!("Reloaded dictionary with {} words", words);
    Ok(Json(json!({ "words": words })))
}

async fn todays_word(state: &AppState) -> Result<WordRecord, ApiError> {
    let day = state.calendar.day_of_year();
    let dictionary = state.dictionary.read().await;
    Ok(select_by_day_of_year(dictionary.as_slice(), day)?.clone())
}

async fn word_at(state: &AppState, raw: &str) -> Result<WordRecord, ApiError> {
    let position: i64 = raw.parse().map_err(|_| {
        ApiError::bad_request(
            "invalid_position",
            format!("position must be an integer, got {raw:?}"),
        )
    })?;
    let dictionary = state.dictionary.read().await;
    Ok(select_by_position(dictionary.as_slice(), position)?.clone())
}

async fn publish_response(state: &AppState, record: WordRecord) -> Response {
    let outcome = publish(state, record).await;
    let status = if outcome.succeeded() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(outcome)).into_response()
}
