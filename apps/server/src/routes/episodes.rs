use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use bazi_db::{Episode, EpisodeCreate, EpisodeUpdate};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

fn default_limit() -> u32 {
    50
}

#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EpisodeCreate>,
) -> Result<Json<Episode>, ApiError> {
    let episode = state.db.create_episode(input).await?;
    tracing::info!(id = %episode.id, "created episode");
    Ok(Json(episode))
}

#[tracing::instrument(skip_all)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Episode>>, ApiError> {
    let episodes = state.db.list_episodes(query.limit, query.skip).await?;
    Ok(Json(episodes))
}

#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Episode>, ApiError> {
    let episode = state
        .db
        .get_episode(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Episode not found".to_string()))?;
    Ok(Json(episode))
}

#[tracing::instrument(skip(state, update))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<EpisodeUpdate>,
) -> Result<Json<Episode>, ApiError> {
    let episode = state.db.update_episode(&id, update).await?;
    tracing::info!(%id, "updated episode");
    Ok(Json(episode))
}

#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.db.delete_episode(&id).await? {
        return Err(ApiError::NotFound("Episode not found".to_string()));
    }
    tracing::info!(%id, "deleted episode");
    Ok(Json(json!({ "message": "Episode deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::routes::tests::{body_json, get_request, json_request, test_state};
    use crate::routes::router;

    #[tokio::test]
    async fn get_missing_episode_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let router = router(test_state(dir.path()).await, &["*".to_string()]);

        let response = router
            .oneshot(get_request("/api/episodes/missing"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Episode not found");
    }

    #[tokio::test]
    async fn update_with_new_script_reparses_segments() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;

        let create = json!({
            "text_content": "hallo",
            "metadata": { "title": "t", "description": "d" }
        });
        let response = router(state.clone(), &["*".to_string()])
            .oneshot(json_request("POST", "/api/episodes", create))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = router(state, &["*".to_string()])
            .oneshot(json_request(
                "PUT",
                &format!("/api/episodes/{id}"),
                json!({ "text_content": "[JOSEF] Servus" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let updated = body_json(response).await;
        assert_eq!(updated["speaker_segments"][0]["speaker"], "josef");
        assert_eq!(updated["speaker_segments"][0]["text"], "Servus");
    }

    #[tokio::test]
    async fn illegal_status_update_is_409() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;

        let create = json!({
            "text_content": "hallo",
            "metadata": { "title": "t", "description": "d" }
        });
        let response = router(state.clone(), &["*".to_string()])
            .oneshot(json_request("POST", "/api/episodes", create))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = router(state, &["*".to_string()])
            .oneshot(json_request(
                "PUT",
                &format!("/api/episodes/{id}"),
                json!({ "status": "published" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn delete_twice_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;

        let create = json!({
            "text_content": "hallo",
            "metadata": { "title": "t", "description": "d" }
        });
        let response = router(state.clone(), &["*".to_string()])
            .oneshot(json_request("POST", "/api/episodes", create))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let request = |uri: &str| {
            axum::http::Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(axum::body::Body::empty())
                .unwrap()
        };

        let response = router(state.clone(), &["*".to_string()])
            .oneshot(request(&format!("/api/episodes/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router(state, &["*".to_string()])
            .oneshot(request(&format!("/api/episodes/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
