use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a music asset is used in an episode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MusicCategory {
    Intro,
    Outro,
    Transition,
    #[default]
    Background,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicFile {
    pub id: String,
    pub name: String,
    pub file_url: String,
    pub category: MusicCategory,
    #[serde(default)]
    pub duration: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl MusicFile {
    pub fn new(
        name: impl Into<String>,
        file_url: impl Into<String>,
        category: MusicCategory,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            file_url: file_url.into(),
            category,
            duration: None,
            created_at: Utc::now(),
        }
    }
}
