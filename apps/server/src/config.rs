use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub audio_dir: PathBuf,
    pub elevenlabs_api_key: String,
    pub openai_api_key: String,
    pub cors_origins: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let db_path = std::env::var("DB_PATH").unwrap_or_else(|_| "bazicast.db".to_string());
        let audio_dir = std::env::var("AUDIO_DIR").unwrap_or_else(|_| "audio_files".to_string());

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse()?,
            Err(_) => 8000,
        };

        Ok(Self {
            db_path: db_path.into(),
            audio_dir: audio_dir.into(),
            elevenlabs_api_key: std::env::var("ELEVENLABS_API_KEY").unwrap_or_default(),
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            cors_origins,
            port,
        })
    }
}
