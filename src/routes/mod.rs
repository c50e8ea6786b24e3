// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::server_service::ServerService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<ServerService>,
    pub(crate) config: AppConfig,
}

pub fn app(service: Arc<ServerService>, config: AppConfig) -> Router {
    let state = AppState { service, config };
    Router::new()
        .route("/", get(|| async { "Hello from mcdash!" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/servers", get(http::list_servers_handler)) // GET /api/servers
        .route("/api/servers/{id}/start", post(http::start_server_handler)) // POST start
        .route("/api/servers/{id}/stop", post(http::stop_server_handler)) // POST stop
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
