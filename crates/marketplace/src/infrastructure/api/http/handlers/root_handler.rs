// crates/marketplace/src/infrastructure/api/http/handlers/root_handler.rs

use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "MummyJ2Treats API",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
