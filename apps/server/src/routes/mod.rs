mod analytics;
mod audio;
mod chat;
mod episodes;
mod music;
mod tts;
mod voices;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .route("/episodes", post(episodes::create).get(episodes::list))
        .route(
            "/episodes/{id}",
            get(episodes::get)
                .put(episodes::update)
                .delete(episodes::delete),
        )
        .route("/tts/generate", post(tts::generate))
        .route("/tts/generate-episode/{id}", post(tts::generate_episode))
        .route("/audio/{filename}", get(audio::serve))
        .route("/chatgpt/suggest", post(chat::suggest))
        .route(
            "/chatgpt/generate-shownotes/{id}",
            post(chat::generate_shownotes),
        )
        .route("/analytics/dashboard", get(analytics::dashboard))
        .route("/analytics/episode/{id}", get(analytics::episode))
        .route("/music/upload", post(music::upload))
        .route("/music", get(music::list))
        .route("/voices", get(voices::list));

    Router::new()
        .nest("/api", api)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Podcast App API - Der Bazi mit Baraka" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    if origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(cors::Any)
    } else {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        layer.allow_origin(origins)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::state::{AppState, AudioStore};

    pub async fn test_state(audio_dir: &std::path::Path) -> AppState {
        AppState {
            db: bazi_db::Database::memory().await.unwrap(),
            tts: bazi_tts::Client::new("test-key"),
            llm: bazi_llm::Client::new("test-key"),
            voices: std::sync::Arc::new(bazi_voice::VoiceRegistry::default()),
            audio: AudioStore::create(audio_dir).await.unwrap(),
        }
    }

    pub async fn test_router(audio_dir: &std::path::Path) -> Router {
        router(test_state(audio_dir).await, &["*".to_string()])
    }

    pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_banner() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(dir.path()).await;

        let response = router.oneshot(get_request("/api/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Podcast App API - Der Bazi mit Baraka");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(dir.path()).await;

        let response = router.oneshot(get_request("/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_then_roundtrip_episode() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;

        let create = json!({
            "text_content": "Intro line\n[KLAUS] Hi there",
            "metadata": { "title": "Folge 1", "description": "Test" }
        });
        let response = router(state.clone(), &["*".to_string()])
            .oneshot(json_request("POST", "/api/episodes", create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = body_json(response).await;
        assert_eq!(created["status"], "draft");
        assert_eq!(created["metadata"]["episode_number"], 1);
        assert_eq!(created["speaker_segments"].as_array().unwrap().len(), 2);
        assert_eq!(created["speaker_segments"][1]["speaker"], "klaus");

        let id = created["id"].as_str().unwrap();
        let response = router(state.clone(), &["*".to_string()])
            .oneshot(get_request(&format!("/api/episodes/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router(state, &["*".to_string()])
            .oneshot(get_request("/api/episodes"))
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }
}
