// POST /analyze: annotate a comment batch and rank content ideas.
//
// The body is taken as raw bytes and parsed by the pipeline so a malformed
// batch surfaces as an AnalysisError (generic internal error) rather than
// axum's own extractor rejection. Body-buffering rejections, including the
// size limit, are mapped onto the same error shape.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::pipeline::error::AnalysisError;
use crate::web::AppState;

pub async fn analyze_comments(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AnalysisError::BodyTooLarge {
                    limit: state.body_limit,
                }
            } else {
                AnalysisError::MalformedInput(rejection.body_text())
            };
            warn!(error = %err, "Rejected request body");
            return err.into_response();
        }
    };

    match state.analyzer.analyze_json(&body).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            warn!(error = %e, "Rejected comment batch");
            e.into_response()
        }
    }
}
