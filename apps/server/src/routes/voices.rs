use axum::Json;
use serde_json::json;

pub async fn list() -> Json<serde_json::Value> {
    Json(json!({ "voices": bazi_voice::profiles() }))
}
