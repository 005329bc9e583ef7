use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Db(#[from] bazi_db::Error),
    #[error(transparent)]
    Tts(#[from] bazi_tts::Error),
    #[error(transparent)]
    Llm(#[from] bazi_llm::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Db(bazi_db::Error::EpisodeNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Db(bazi_db::Error::IllegalTransition { .. }) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{self}");
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
