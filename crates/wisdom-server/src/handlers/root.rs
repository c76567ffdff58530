//! Root banner handler

use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "🐹 Gerald the Hamster is spinning his wheel and thinking..."
    }))
}
