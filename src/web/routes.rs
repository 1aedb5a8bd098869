use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(handlers::api::list_posts))
        .route("/categories", get(handlers::api::list_categories))
        .route("/tags", get(handlers::api::list_tags))
}
