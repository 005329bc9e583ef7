use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use bazi_db::{Episode, EpisodeStatus};
use bazi_voice::VoiceSettings;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default)]
    pub voice_settings: Option<VoiceSettings>,
}

fn default_voice() -> String {
    bazi_script::Speaker::default().to_string()
}

/// One-off synthesis, not tied to an episode.
#[tracing::instrument(skip_all, fields(voice = %request.voice))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<TtsRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let voice_id = state.voices.resolve(&request.voice);
    let settings = request.voice_settings.unwrap_or_default();

    let audio = state.tts.convert(voice_id, &request.text, &settings).await?;

    let filename = format!("{}.mp3", uuid::Uuid::new_v4());
    state.audio.save(&filename, &audio).await?;
    tracing::info!(%filename, "generated audio");

    Ok(Json(json!({
        "audio_url": format!("/api/audio/{filename}"),
        "filename": filename,
        "voice": request.voice,
    })))
}

/// Synthesizes one audio artifact per speaker segment of an episode.
///
/// The episode is moved to `processing` first; any failure flips it to
/// `error` before the failure is surfaced, so it never stays in-progress.
#[tracing::instrument(skip(state))]
pub async fn generate_episode(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let episode = state
        .db
        .get_episode(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Episode not found".to_string()))?;

    state.db.set_status(&id, EpisodeStatus::Processing).await?;

    match synthesize_segments(&state, &episode).await {
        Ok(files) => {
            let audio_url = files.first().map(|file| format!("/api/audio/{file}"));
            state.db.set_audio(&id, audio_url.clone()).await?;
            tracing::info!(%id, segments = files.len(), "episode audio generated");

            Ok(Json(json!({
                "episode_id": id,
                "audio_url": audio_url,
                "segments": files.len(),
            })))
        }
        Err(err) => {
            if let Err(status_err) = state.db.set_status(&id, EpisodeStatus::Error).await {
                tracing::error!(%id, "failed to mark episode as errored: {status_err}");
            }
            Err(err)
        }
    }
}

async fn synthesize_segments(
    state: &AppState,
    episode: &Episode,
) -> Result<Vec<String>, ApiError> {
    let segments = if episode.speaker_segments.is_empty() {
        bazi_script::parse(&episode.text_content)
    } else {
        episode.speaker_segments.clone()
    };

    let mut files = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        tracing::info!(
            segment = i + 1,
            total = segments.len(),
            speaker = %segment.speaker,
            "generating segment audio"
        );

        let voice_id = state.voices.voice_id(segment.speaker);
        let audio = state
            .tts
            .convert(voice_id, &segment.text, &episode.voice_settings)
            .await?;

        let filename = format!("{}_segment_{}.mp3", episode.id, i);
        state.audio.save(&filename, &audio).await?;
        files.push(filename);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::routes::router;
    use crate::routes::tests::{body_json, json_request, test_state};

    #[tokio::test]
    async fn failed_generation_marks_episode_errored() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path()).await;
        // nothing listens on this port, so every synthesis request fails
        state.tts = bazi_tts::Client::with_base_url("test-key", "http://127.0.0.1:1");

        let create = json!({
            "text_content": "[markus] Servus beinand!",
            "metadata": { "title": "Folge 1", "description": "Test" }
        });
        let response = router(state.clone(), &["*".to_string()])
            .oneshot(json_request("POST", "/api/episodes", create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = router(state.clone(), &["*".to_string()])
            .oneshot(json_request(
                "POST",
                &format!("/api/tts/generate-episode/{id}"),
                json!({}),
            ))
            .await
            .unwrap();
        assert!(response.status().is_server_error());

        let stored = state.db.get_episode(&id).await.unwrap().unwrap();
        assert_eq!(stored.status, bazi_db::EpisodeStatus::Error);
        assert!(stored.audio_url.is_none());
    }
}
