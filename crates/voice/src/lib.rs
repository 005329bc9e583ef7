mod profile;
mod registry;
mod settings;

pub use profile::{profiles, VoiceProfile};
pub use registry::VoiceRegistry;
pub use settings::VoiceSettings;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no voice configured for speaker '{0}'")]
    UnmappedSpeaker(bazi_script::Speaker),
}
