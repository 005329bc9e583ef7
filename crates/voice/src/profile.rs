use bazi_script::Speaker;
use serde::Serialize;

/// Static description of a voice role, shown in the production UI.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceProfile {
    pub id: Speaker,
    pub name: &'static str,
    pub description: &'static str,
    pub best_for: &'static str,
    pub accent: &'static str,
}

pub fn profiles() -> Vec<VoiceProfile> {
    vec![
        VoiceProfile {
            id: Speaker::Markus,
            name: "Markus",
            description: "Neutral, professionell, klare Aussprache",
            best_for: "Nachrichten, Tutorials",
            accent: "Bayerisch Neutral",
        },
        VoiceProfile {
            id: Speaker::Klaus,
            name: "Klaus",
            description: "Warm, sympathisch, etwas Dialekt",
            best_for: "Geschichten, Interviews",
            accent: "Bayerisch Warm",
        },
        VoiceProfile {
            id: Speaker::Franz,
            name: "Franz",
            description: "Selbstbewusst, autoritär, tief",
            best_for: "Kommentare, Debatten",
            accent: "Bayerisch Autoritär",
        },
        VoiceProfile {
            id: Speaker::Josef,
            name: "Josef",
            description: "Starker Dialekt, sehr authentisch",
            best_for: "Comedy, Authentizität",
            accent: "Bayerisch Regional",
        },
    ]
}
