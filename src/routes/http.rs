// JSON handlers: version, server listing, start/stop

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::server_service::{ErrorKind, ServerError};
use crate::version::{NAME, VERSION};

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Engine => StatusCode::BAD_GATEWAY,
            ErrorKind::Other => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/servers — fresh listing of every labeled container.
pub(super) async fn list_servers_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServerError> {
    let servers = state.service.list_servers().await?;
    Ok(Json(servers))
}

pub(super) async fn start_server_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    state.service.start_server(&id).await?;
    Ok(Json(serde_json::json!({ "message": "Server starting..." })))
}

#[derive(Debug, Deserialize)]
pub(super) struct StopParams {
    timeout: Option<u32>,
}

/// POST /api/servers/{id}/stop?timeout=<secs> — timeout falls back to lifecycle.stop_timeout_secs.
pub(super) async fn stop_server_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StopParams>,
) -> Result<impl IntoResponse, ServerError> {
    let timeout = params
        .timeout
        .unwrap_or(state.config.lifecycle.stop_timeout_secs);
    state.service.stop_server(&id, timeout).await?;
    Ok(Json(serde_json::json!({ "message": "Server stopping..." })))
}
