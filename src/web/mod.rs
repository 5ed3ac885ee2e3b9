// Web server: Axum-based analysis endpoint.
//
// POST /analyze takes a comment batch and returns the annotated batch with
// ranked content ideas. GET /health is a liveness probe that never touches
// the pipeline.

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::pipeline::analyze::Analyzer;
use crate::pipeline::error::AnalysisError;

pub mod handlers;

/// Request body allowance per comment in the batch cap.
pub const BODY_BYTES_PER_COMMENT: usize = 16 * 1024;

/// Smallest body limit, so an empty batch always fits.
const MIN_BODY_LIMIT: usize = 64 * 1024;

/// Shared application state threaded through all Axum handlers.
/// The analyzer's capabilities are loaded before the listener binds.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    /// Largest accepted request body, in bytes
    pub body_limit: usize,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        let body_limit = body_limit_for(analyzer.max_batch());
        Self {
            analyzer,
            body_limit,
        }
    }
}

/// Body limit scaled to the batch cap.
pub fn body_limit_for(max_batch: usize) -> usize {
    max_batch
        .saturating_mul(BODY_BYTES_PER_COMMENT)
        .max(MIN_BODY_LIMIT)
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(analyzer: Analyzer, port: u16, bind: &str) -> Result<()> {
    let state = AppState::new(analyzer);
    info!(body_limit = state.body_limit, "Request body limit");
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Comment Compass listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.body_limit;
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze", post(handlers::analyze::analyze_comments))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "message": "Comment Compass NLP service" }))
}

/// Liveness probe: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match self {
            AnalysisError::MalformedInput(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AnalysisError::BatchTooLarge { .. } | AnalysisError::BodyTooLarge { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
        };
        (
            status,
            axum::Json(serde_json::json!({
                "error": self.kind(),
                "detail": self.to_string(),
            })),
        )
            .into_response()
    }
}
