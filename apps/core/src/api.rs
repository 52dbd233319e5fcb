//! HTTP boundary: router, handlers, shared state.
//!
//! Handlers parse and validate the request, call into the core, and wrap the
//! result as `{<key>, success: true, ...}`. Validation failures become 400,
//! anything else a handler can produce becomes 500; both carry
//! `{error, success: false}` (see `error::AppError`). The extension calls
//! from arbitrary page origins, so CORS is permissive.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;
use validator::Validate;

use crate::config::Config;
use crate::error::AppError;
use crate::explain::ConceptExplainer;
use crate::models::{ExplainRequest, SearchRequest, SessionRequest};
use crate::search::{papers, ArxivClient, VideoSearcher};
use crate::session::{ExportBundle, SessionRecord};

pub const SERVICE_NAME: &str = "Sona Research Assistant API";

/// Shared per-process state, constructed once and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub explainer: Arc<ConceptExplainer>,
    pub papers: Arc<ArxivClient>,
    pub videos: Arc<VideoSearcher>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            explainer: Arc::new(ConceptExplainer::new()),
            papers: Arc::new(ArxivClient::new()),
            videos: Arc::new(VideoSearcher::new(config.youtube_api_key.clone())),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/explain", post(explain_concept))
        .route("/api/session", post(create_session))
        .route("/api/session/:session_id/export", get(export_session))
        .route("/api/search", post(search_related))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Explains a highlighted text or concept.
async fn explain_concept(
    State(state): State<AppState>,
    Json(payload): Json<ExplainRequest>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    info!(
        "Explain requested: {:?} (page: {:?})",
        payload.text,
        payload.context.title.as_deref().or(payload.context.url.as_deref())
    );
    let explanation = state.explainer.explain(&payload.text, &payload.context);

    Ok(Json(json!({
        "explanation": explanation,
        "success": true,
        "timestamp": Local::now().to_rfc3339(),
    })))
}

/// Creates a new research session. The record is returned, not stored.
async fn create_session(payload: Option<Json<SessionRequest>>) -> Json<Value> {
    let title = payload.and_then(|Json(body)| body.title);
    let session = SessionRecord::new(title);
    info!("created session {}", session.id);

    Json(json!({
        "session": session,
        "success": true,
    }))
}

/// Exports a research session as a formatted document (stub).
async fn export_session(Path(session_id): Path<String>) -> Json<Value> {
    let export = ExportBundle::for_session(&session_id);

    Json(json!({
        "export": export,
        "success": true,
    }))
}

/// Searches for related papers and videos. The two provider calls are
/// independent and run concurrently; each degrades on its own.
async fn search_related(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    info!("Search requested: {:?}", payload.query);
    let (papers, videos) = tokio::join!(
        state.papers.search(&payload.query, papers::DEFAULT_MAX_RESULTS),
        state.videos.search(&payload.query),
    );

    Ok(Json(json!({
        "results": {
            "papers": papers,
            "videos": videos,
            "query": payload.query,
        },
        "success": true,
    })))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": Local::now().to_rfc3339(),
    }))
}
