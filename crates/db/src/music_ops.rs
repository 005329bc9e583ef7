use super::{Database, MusicCategory, MusicFile};

impl Database {
    pub async fn create_music_file(&self, music: MusicFile) -> Result<MusicFile, crate::Error> {
        let conn = self.conn()?;
        let doc = serde_json::to_string(&music)?;

        conn.execute(
            "INSERT INTO music_library (id, category, created_at, doc)
             VALUES (?, ?, ?, ?)",
            libsql::params![
                music.id.clone(),
                music.category.to_string(),
                music.created_at.to_rfc3339(),
                doc
            ],
        )
        .await?;

        Ok(music)
    }

    pub async fn list_music_files(
        &self,
        category: Option<MusicCategory>,
    ) -> Result<Vec<MusicFile>, crate::Error> {
        let conn = self.conn()?;

        let mut rows = match category {
            Some(category) => {
                conn.query(
                    "SELECT doc FROM music_library
                     WHERE category = ?
                     ORDER BY created_at DESC",
                    libsql::params![category.to_string()],
                )
                .await?
            }
            None => {
                conn.query(
                    "SELECT doc FROM music_library ORDER BY created_at DESC",
                    (),
                )
                .await?
            }
        };

        let mut files = Vec::new();
        while let Some(row) = rows.next().await? {
            let doc = row.get::<String>(0)?;
            files.push(serde_json::from_str(&doc)?);
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_and_filter_by_category() {
        let db = Database::memory().await.unwrap();

        db.create_music_file(MusicFile::new("jingle.mp3", "/api/audio/a", MusicCategory::Intro))
            .await
            .unwrap();
        db.create_music_file(MusicFile::new("pad.mp3", "/api/audio/b", MusicCategory::Background))
            .await
            .unwrap();

        let all = db.list_music_files(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let intros = db
            .list_music_files(Some(MusicCategory::Intro))
            .await
            .unwrap();
        assert_eq!(intros.len(), 1);
        assert_eq!(intros[0].name, "jingle.mp3");
    }
}
