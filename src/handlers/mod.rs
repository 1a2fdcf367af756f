pub mod fees;
pub mod payments;
pub mod students;

use axum::Json;
use serde_json::{Value, json};

/// GET / -> liveness message.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "School Fee API is running successfully" }))
}
