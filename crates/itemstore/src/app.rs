use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        health::livez,
        items::{create_item, delete_item, get_item, list_items, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/item", post(create_item))
        .route(
            "/item/{id}/{name}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/items", get(list_items))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
