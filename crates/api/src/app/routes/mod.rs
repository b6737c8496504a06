use axum::{routing::post, Router};

pub mod items;
pub mod items_api;
pub mod system;

/// Router for all item endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/validation/items", items::router())
        .route("/validation/api/items/add", post(items_api::add_item))
}
