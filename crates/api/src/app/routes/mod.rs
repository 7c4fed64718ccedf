use axum::{routing::get, Router};

pub mod categories;
pub mod products;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::home))
        .route("/health", get(system::health))
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .fallback(system::trim_trailing_slash)
}
