use super::{Database, Episode, EpisodeCreate, EpisodeStatus, EpisodeUpdate};

impl Database {
    pub async fn create_episode(&self, mut input: EpisodeCreate) -> Result<Episode, crate::Error> {
        let conn = self.conn()?;

        if input.speaker_segments.is_empty() {
            input.speaker_segments = bazi_script::parse(&input.text_content);
        }

        if input.metadata.episode_number.is_none() {
            let mut rows = conn
                .query("SELECT COALESCE(MAX(episode_number), 0) FROM episodes", ())
                .await?;
            let max = match rows.next().await? {
                Some(row) => row.get::<i64>(0)?,
                None => 0,
            };
            input.metadata.episode_number = Some(max as u32 + 1);
        }

        let episode = Episode::new(input);
        let doc = serde_json::to_string(&episode)?;

        conn.execute(
            "INSERT INTO episodes (id, status, episode_number, created_at, doc)
             VALUES (?, ?, ?, ?, ?)",
            libsql::params![
                episode.id.clone(),
                episode.status.to_string(),
                episode.metadata.episode_number.unwrap_or(0) as i64,
                episode.created_at.to_rfc3339(),
                doc
            ],
        )
        .await?;

        Ok(episode)
    }

    pub async fn list_episodes(&self, limit: u32, skip: u32) -> Result<Vec<Episode>, crate::Error> {
        let conn = self.conn()?;

        let mut rows = conn
            .query(
                "SELECT doc FROM episodes
                 ORDER BY created_at DESC
                 LIMIT ? OFFSET ?",
                libsql::params![limit as i64, skip as i64],
            )
            .await?;

        let mut episodes = Vec::new();
        while let Some(row) = rows.next().await? {
            let doc = row.get::<String>(0)?;
            episodes.push(serde_json::from_str(&doc)?);
        }
        Ok(episodes)
    }

    pub async fn get_episode(&self, id: &str) -> Result<Option<Episode>, crate::Error> {
        let conn = self.conn()?;

        let mut rows = conn
            .query(
                "SELECT doc FROM episodes WHERE id = ?",
                libsql::params![id.to_string()],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            let doc = row.get::<String>(0)?;
            Ok(Some(serde_json::from_str(&doc)?))
        } else {
            Ok(None)
        }
    }

    /// Partial update. A changed script without explicitly supplied
    /// segments re-derives them; status changes go through the lifecycle
    /// guard.
    pub async fn update_episode(
        &self,
        id: &str,
        update: EpisodeUpdate,
    ) -> Result<Episode, crate::Error> {
        let mut episode = self
            .get_episode(id)
            .await?
            .ok_or_else(|| crate::Error::EpisodeNotFound(id.to_string()))?;

        let explicit_segments = !update.speaker_segments.is_empty();
        if explicit_segments {
            episode.speaker_segments = update.speaker_segments;
        }
        if let Some(text) = update.text_content {
            if !explicit_segments && text != episode.text_content {
                episode.speaker_segments = bazi_script::parse(&text);
            }
            episode.text_content = text;
        }
        if let Some(metadata) = update.metadata {
            episode.metadata = metadata;
        }
        if let Some(voice) = update.selected_voice {
            episode.selected_voice = voice;
        }
        if let Some(settings) = update.voice_settings {
            episode.voice_settings = settings;
        }
        if let Some(status) = update.status {
            episode.status = episode.status.transition(status)?;
            if episode.status == EpisodeStatus::Published && episode.published_at.is_none() {
                episode.published_at = Some(chrono::Utc::now());
            }
        }

        episode.updated_at = chrono::Utc::now();
        self.persist_episode(&episode).await?;
        Ok(episode)
    }

    pub async fn delete_episode(&self, id: &str) -> Result<bool, crate::Error> {
        let conn = self.conn()?;

        let affected = conn
            .execute(
                "DELETE FROM episodes WHERE id = ?",
                libsql::params![id.to_string()],
            )
            .await?;
        Ok(affected > 0)
    }

    pub async fn set_status(
        &self,
        id: &str,
        status: EpisodeStatus,
    ) -> Result<Episode, crate::Error> {
        let mut episode = self
            .get_episode(id)
            .await?
            .ok_or_else(|| crate::Error::EpisodeNotFound(id.to_string()))?;

        episode.status = episode.status.transition(status)?;
        episode.updated_at = chrono::Utc::now();
        self.persist_episode(&episode).await?;
        Ok(episode)
    }

    /// Records the generated audio and completes the episode.
    pub async fn set_audio(
        &self,
        id: &str,
        audio_url: Option<String>,
    ) -> Result<Episode, crate::Error> {
        let mut episode = self
            .get_episode(id)
            .await?
            .ok_or_else(|| crate::Error::EpisodeNotFound(id.to_string()))?;

        episode.audio_url = audio_url;
        episode.status = episode.status.transition(EpisodeStatus::Completed)?;
        episode.updated_at = chrono::Utc::now();
        self.persist_episode(&episode).await?;
        Ok(episode)
    }

    pub async fn set_shownotes(
        &self,
        id: &str,
        shownotes: impl Into<String>,
    ) -> Result<Episode, crate::Error> {
        let mut episode = self
            .get_episode(id)
            .await?
            .ok_or_else(|| crate::Error::EpisodeNotFound(id.to_string()))?;

        episode.shownotes = Some(shownotes.into());
        episode.updated_at = chrono::Utc::now();
        self.persist_episode(&episode).await?;
        Ok(episode)
    }

    async fn persist_episode(&self, episode: &Episode) -> Result<(), crate::Error> {
        let conn = self.conn()?;
        let doc = serde_json::to_string(episode)?;

        conn.execute(
            "UPDATE episodes SET status = ?, episode_number = ?, doc = ? WHERE id = ?",
            libsql::params![
                episode.status.to_string(),
                episode.metadata.episode_number.unwrap_or(0) as i64,
                doc,
                episode.id.clone()
            ],
        )
        .await?;
        Ok(())
    }
}
