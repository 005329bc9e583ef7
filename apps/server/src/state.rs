use std::path::{Path, PathBuf};
use std::sync::Arc;

use bazi_db::Database;
use bazi_voice::VoiceRegistry;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tts: bazi_tts::Client,
    pub llm: bazi_llm::Client,
    pub voices: Arc<VoiceRegistry>,
    pub audio: AudioStore,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            db: Database::file(&config.db_path).await?,
            tts: bazi_tts::Client::new(config.elevenlabs_api_key.clone()),
            llm: bazi_llm::Client::new(config.openai_api_key.clone()),
            voices: Arc::new(VoiceRegistry::default()),
            audio: AudioStore::create(&config.audio_dir).await?,
        })
    }
}

/// Flat directory of generated and uploaded audio artifacts.
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: Arc<PathBuf>,
}

impl AudioStore {
    pub async fn create(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir: Arc::new(dir) })
    }

    pub async fn save(&self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(self.dir.join(filename), bytes).await
    }

    /// Resolves a stored file by name. Names with path separators or parent
    /// components are rejected.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\'])
            || Path::new(filename).components().count() != 1
        {
            return None;
        }
        Some(self.dir.join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::create(dir.path()).await.unwrap();

        assert!(store.resolve("a.mp3").is_some());
        assert!(store.resolve("").is_none());
        assert!(store.resolve("..").is_none());
        assert!(store.resolve("../a.mp3").is_none());
        assert!(store.resolve("nested/a.mp3").is_none());
        assert!(store.resolve("nested\\a.mp3").is_none());
    }

    #[tokio::test]
    async fn save_writes_into_the_store_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::create(dir.path()).await.unwrap();

        store.save("x.mp3", b"bytes").await.unwrap();
        let path = store.resolve("x.mp3").unwrap();
        assert_eq!(tokio::fs::read(path).await.unwrap(), b"bytes");
    }
}
