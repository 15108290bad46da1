use crate::Error;
use crate::chunk::Chunk;
use crate::extract::extract_chunks;
use crate::server::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of a `/parse` request. `type` and `text` are accepted as legacy
/// aliases for `language` and `code`.
#[derive(Debug, Default, Deserialize)]
pub struct ParseRequest {
    pub language: Option<String>,
    pub code: Option<String>,
    pub max_chars: Option<usize>,
    #[serde(rename = "type")]
    pub legacy_type: Option<String>,
    #[serde(rename = "text")]
    pub legacy_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub chunks: Vec<Chunk>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error: error.into() }))
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

pub async fn handle_parse(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let language = req
        .language
        .or(req.legacy_type)
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    let code = req.code.or(req.legacy_text).unwrap_or_default();

    // Missing input is a valid, empty outcome rather than an error.
    if language.is_empty() || code.is_empty() {
        return Ok(Json(ParseResponse { chunks: Vec::new() }));
    }

    let max_chars = req.max_chars.unwrap_or(state.max_chars);
    if max_chars == 0 {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "max_chars must be greater than zero",
        ));
    }

    match extract_chunks(&language, &code, max_chars) {
        Ok(chunks) => Ok(Json(ParseResponse { chunks })),
        Err(e @ Error::UnsupportedLanguage(_)) => {
            Err(error_response(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            tracing::error!("chunk extraction failed: {}", e);
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
