use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub prompt: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[tracing::instrument(skip_all)]
pub async fn suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut ctx = serde_json::Map::new();
    ctx.insert("prompt".to_string(), request.prompt.clone().into());
    if let Some(context) = request.context {
        ctx.insert("context".to_string(), context.into());
    }

    let suggestion = bazi_llm::suggest(&state.llm, ctx).await?;
    tracing::info!("suggestion generated");

    Ok(Json(json!({
        "suggestion": suggestion,
        "prompt": request.prompt,
    })))
}

#[tracing::instrument(skip(state))]
pub async fn generate_shownotes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let episode = state
        .db
        .get_episode(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Episode not found".to_string()))?;

    let mut ctx = serde_json::Map::new();
    ctx.insert("title".to_string(), episode.metadata.title.into());
    ctx.insert("text_content".to_string(), episode.text_content.into());

    let shownotes = bazi_llm::generate_shownotes(&state.llm, ctx).await?;
    state.db.set_shownotes(&id, shownotes.as_str()).await?;
    tracing::info!(%id, "shownotes generated");

    Ok(Json(json!({
        "episode_id": id,
        "shownotes": shownotes,
    })))
}
