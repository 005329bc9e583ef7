use super::{Database, Episode, EpisodeStatus};

impl Database {
    pub async fn count_episodes(&self) -> Result<u64, crate::Error> {
        let conn = self.conn()?;

        let mut rows = conn.query("SELECT COUNT(*) FROM episodes", ()).await?;
        match rows.next().await? {
            Some(row) => Ok(row.get::<i64>(0)? as u64),
            None => Ok(0),
        }
    }

    pub async fn count_episodes_with_status(
        &self,
        status: EpisodeStatus,
    ) -> Result<u64, crate::Error> {
        let conn = self.conn()?;

        let mut rows = conn
            .query(
                "SELECT COUNT(*) FROM episodes WHERE status = ?",
                libsql::params![status.to_string()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(row.get::<i64>(0)? as u64),
            None => Ok(0),
        }
    }

    pub async fn recent_episodes(&self, limit: u32) -> Result<Vec<Episode>, crate::Error> {
        self.list_episodes(limit, 0).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EpisodeCreate, EpisodeMetadata};

    fn create_input(title: &str) -> EpisodeCreate {
        EpisodeCreate {
            text_content: "hallo".to_string(),
            metadata: EpisodeMetadata {
                title: title.to_string(),
                description: String::new(),
                episode_number: None,
                category: "Podcast".to_string(),
                host: "Der Bazi mit Baraka".to_string(),
                guests: vec![],
                tags: vec![],
                thumbnail_url: None,
                publish_date: None,
            },
            selected_voice: "markus".to_string(),
            voice_settings: Default::default(),
            speaker_segments: vec![],
        }
    }

    #[tokio::test]
    async fn counts_follow_status_changes() {
        let db = Database::memory().await.unwrap();

        let a = db.create_episode(create_input("a")).await.unwrap();
        db.create_episode(create_input("b")).await.unwrap();

        assert_eq!(db.count_episodes().await.unwrap(), 2);
        assert_eq!(
            db.count_episodes_with_status(EpisodeStatus::Published)
                .await
                .unwrap(),
            0
        );

        db.set_status(&a.id, EpisodeStatus::Processing).await.unwrap();
        db.set_audio(&a.id, None).await.unwrap();
        db.set_status(&a.id, EpisodeStatus::Published).await.unwrap();

        assert_eq!(
            db.count_episodes_with_status(EpisodeStatus::Published)
                .await
                .unwrap(),
            1
        );

        let recent = db.recent_episodes(3).await.unwrap();
        assert_eq!(recent.len(), 2);
    }
}
