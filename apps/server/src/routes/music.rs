use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::Deserialize;

use bazi_db::{MusicCategory, MusicFile};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

fn parse_category(value: Option<&str>) -> Result<MusicCategory, ApiError> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("unknown music category: {raw}"))),
        None => Ok(MusicCategory::default()),
    }
}

#[tracing::instrument(skip_all)]
pub async fn upload(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<MusicFile>, ApiError> {
    let category = parse_category(query.category.as_deref())?;

    let mut stored = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;

        let filename = format!("{}_{}", uuid::Uuid::new_v4(), name);
        state.audio.save(&filename, &data).await?;
        stored = Some((name, filename));
    }

    let (name, filename) =
        stored.ok_or_else(|| ApiError::BadRequest("missing file field".to_string()))?;

    let music = MusicFile::new(name, format!("/api/audio/{filename}"), category);
    let music = state.db.create_music_file(music).await?;
    tracing::info!(name = %music.name, "music file uploaded");

    Ok(Json(music))
}

#[tracing::instrument(skip_all)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MusicFile>>, ApiError> {
    let category = match query.category.as_deref() {
        Some(raw) => Some(
            raw.parse::<MusicCategory>()
                .map_err(|_| ApiError::BadRequest(format!("unknown music category: {raw}")))?,
        ),
        None => None,
    };

    let files = state.db.list_music_files(category).await?;
    Ok(Json(files))
}
