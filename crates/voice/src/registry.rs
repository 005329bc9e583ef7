use std::collections::HashMap;

use bazi_script::Speaker;
use strum::IntoEnumIterator;

/// Mapping from speaker role to a synthesis voice id.
///
/// Constructed once at startup and injected wherever audio is dispatched.
/// Construction checks that every speaker is mapped, so lookups by
/// `Speaker` are total afterwards.
#[derive(Debug, Clone)]
pub struct VoiceRegistry {
    voices: HashMap<Speaker, String>,
}

impl VoiceRegistry {
    pub fn new(voices: HashMap<Speaker, String>) -> Result<Self, crate::Error> {
        for speaker in Speaker::iter() {
            if !voices.contains_key(&speaker) {
                return Err(crate::Error::UnmappedSpeaker(speaker));
            }
        }
        Ok(Self { voices })
    }

    pub fn voice_id(&self, speaker: Speaker) -> &str {
        &self.voices[&speaker]
    }

    /// Resolves a user-supplied voice name, falling back to the default
    /// speaker's voice when the name is not a known speaker.
    pub fn resolve(&self, name: &str) -> &str {
        match name.trim().to_lowercase().parse::<Speaker>() {
            Ok(speaker) => self.voice_id(speaker),
            Err(_) => self.voice_id(Speaker::default()),
        }
    }
}

impl Default for VoiceRegistry {
    fn default() -> Self {
        let voices = HashMap::from([
            (Speaker::Markus, "21m00Tcm4TlvDq8ikWAM".to_string()),
            (Speaker::Klaus, "AZnzlk1XvdvUeBnXmlld".to_string()),
            (Speaker::Franz, "ErXwobaYiN019PkySvjV".to_string()),
            (Speaker::Josef, "VR6AewLTigWG4xSOukaG".to_string()),
        ]);
        Self { voices }
    }
}
