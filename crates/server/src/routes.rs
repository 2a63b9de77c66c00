use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{Health, Message};
use service::trees::TreeStore;

pub mod trees;

/// Shared handler state: the process-wide storage handle, opened once at
/// startup and injected into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub trees: Arc<TreeStore>,
}

pub async fn greeting() -> Json<Message> {
    Json(Message::new("Hi this is working"))
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health))
        .route("/trees", post(trees::create_tree))
        .route(
            "/trees/:id",
            get(trees::get_tree).put(trees::update_tree).delete(trees::delete_tree),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
