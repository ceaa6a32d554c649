// crates/marketplace/src/infrastructure/api/http/router.rs

use axum::routing::{get, patch};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::infrastructure::api::http::handlers;
use crate::infrastructure::api::http::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/vendors", get(handlers::list_vendors).post(handlers::create_vendor))
        .route("/vendors/:id", get(handlers::get_vendor).patch(handlers::update_vendor))
        .route(
            "/vendors/:id/products",
            get(handlers::list_vendor_products).post(handlers::create_product),
        )
        .route("/products/:id", patch(handlers::update_product))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
