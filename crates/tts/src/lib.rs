mod error;

pub use error::Error;

use bazi_voice::VoiceSettings;
use bytes::Bytes;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const MODEL_ID: &str = "eleven_multilingual_v2";
const XI_API_KEY_HEADER: &str = "xi-api-key";

/// ElevenLabs text-to-speech client. One blocking-free HTTP request per
/// segment; no retries and no streaming.
#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Synthesizes `text` with the given voice and returns the MP3 bytes.
    pub async fn convert(
        &self,
        voice_id: &str,
        text: &str,
        voice_settings: &VoiceSettings,
    ) -> Result<Bytes, Error> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);

        let response = self
            .inner
            .post(&url)
            .header(XI_API_KEY_HEADER, &self.api_key)
            .json(&ConvertRequest {
                text,
                model_id: MODEL_ID,
                voice_settings,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            return Err(Error::Api { status, body });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_request_wire_shape() {
        let settings = VoiceSettings::default();
        let body = serde_json::to_value(ConvertRequest {
            text: "Servus",
            model_id: MODEL_ID,
            voice_settings: &settings,
        })
        .unwrap();

        assert_eq!(body["text"], "Servus");
        assert_eq!(body["model_id"], "eleven_multilingual_v2");
        assert_eq!(body["voice_settings"]["stability"], 0.75);
        assert_eq!(body["voice_settings"]["use_speaker_boost"], true);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = Client::with_base_url("key", "http://localhost:1234/");

        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
