use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bazi_script::Segment;
use bazi_voice::VoiceSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    "Podcast".to_string()
}

fn default_host() -> String {
    "Der Bazi mit Baraka".to_string()
}

pub(crate) fn default_voice() -> String {
    bazi_script::Speaker::default().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub text_content: String,
    pub metadata: EpisodeMetadata,
    #[serde(default = "default_voice")]
    pub selected_voice: String,
    #[serde(default)]
    pub voice_settings: VoiceSettings,
    #[serde(default)]
    pub speaker_segments: Vec<Segment>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub audio_duration: Option<f64>,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub shownotes: Option<String>,
    pub status: EpisodeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Episode {
    pub fn new(input: EpisodeCreate) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text_content: input.text_content,
            metadata: input.metadata,
            selected_voice: input.selected_voice,
            voice_settings: input.voice_settings,
            speaker_segments: input.speaker_segments,
            audio_url: None,
            audio_duration: None,
            transcription: None,
            shownotes: None,
            status: EpisodeStatus::default(),
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeCreate {
    pub text_content: String,
    pub metadata: EpisodeMetadata,
    #[serde(default = "default_voice")]
    pub selected_voice: String,
    #[serde(default)]
    pub voice_settings: VoiceSettings,
    #[serde(default)]
    pub speaker_segments: Vec<Segment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeUpdate {
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub metadata: Option<EpisodeMetadata>,
    #[serde(default)]
    pub selected_voice: Option<String>,
    #[serde(default)]
    pub voice_settings: Option<VoiceSettings>,
    #[serde(default)]
    pub speaker_segments: Vec<Segment>,
    #[serde(default)]
    pub status: Option<EpisodeStatus>,
}

/// Episode lifecycle. Transitions outside `can_transition` are rejected
/// instead of overwriting the field.
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
pub enum EpisodeStatus {
    #[default]
    Draft,
    Processing,
    Completed,
    Error,
    Published,
}

impl EpisodeStatus {
    pub fn can_transition(self, next: EpisodeStatus) -> bool {
        use EpisodeStatus::*;
        matches!(
            (self, next),
            (Draft, Processing)
                | (Processing, Completed)
                | (Processing, Error)
                | (Error, Processing)
                | (Completed, Processing)
                | (Completed, Published)
        )
    }

    /// Staying in the current state is always allowed.
    pub fn transition(self, next: EpisodeStatus) -> Result<EpisodeStatus, crate::Error> {
        if self == next || self.can_transition(next) {
            Ok(next)
        } else {
            Err(crate::Error::IllegalTransition {
                from: self,
                to: next,
            })
        }
    }
}
