use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use bazi_db::EpisodeStatus;

use crate::error::ApiError;
use crate::state::AppState;

// Downloads and listener figures are placeholders until a real analytics
// pipeline exists; only the episode counts come from the store.

#[tracing::instrument(skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let total_episodes = state.db.count_episodes().await?;
    let published_episodes = state
        .db
        .count_episodes_with_status(EpisodeStatus::Published)
        .await?;
    let recent_episodes = state.db.recent_episodes(3).await?;

    Ok(Json(json!({
        "total_episodes": total_episodes,
        "published_episodes": published_episodes,
        "total_downloads": published_episodes * 150,
        "average_listeners": 120,
        "recent_episodes": recent_episodes,
        "upcoming_episodes": [],
    })))
}

#[tracing::instrument(skip(state))]
pub async fn episode(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.db.get_episode(&id).await?.is_none() {
        return Err(ApiError::NotFound("Episode not found".to_string()));
    }

    Ok(Json(json!({
        "episode_id": id,
        "downloads": 245,
        "listeners": 198,
        "average_listen_duration": 78.5,
        "top_countries": ["Germany", "Austria", "Switzerland"],
        "traffic_sources": {
            "spotify": 45,
            "apple_podcasts": 30,
            "direct": 15,
            "other": 10,
        },
    })))
}
