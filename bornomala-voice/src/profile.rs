//! Persona voice profiles

use serde::{Deserialize, Serialize};

/// A persona: rate/pitch defaults plus the name keywords used to pick an
/// installed voice that sounds like the character.
///
/// Profiles are fixed at narrator construction; selection happens by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// Display name.
    pub label: String,

    /// Bangla display name.
    pub label_bn: String,

    /// Playback speed multiplier (0 < rate <= 2.0, 1.0 is normal).
    pub rate: f32,

    /// Pitch multiplier (0.0-2.0, 1.0 is neutral).
    pub pitch: f32,

    /// Volume (0.0-1.0).
    pub volume: f32,

    /// Voice-name substrings to match, most preferred first.
    pub preferred_keywords: Vec<String>,

    /// Looser substrings used when nothing preferred matches.
    pub fallback_keywords: Vec<String>,
}

impl VoiceProfile {
    /// Validate profile tuning
    pub fn validate(&self) -> Result<(), String> {
        if self.label.is_empty() {
            return Err("Profile label cannot be empty".to_string());
        }

        if !(self.rate > 0.0 && self.rate <= 2.0) {
            return Err(format!(
                "Profile '{}' rate must be in (0.0, 2.0]",
                self.label
            ));
        }

        if !(0.0..=2.0).contains(&self.pitch) {
            return Err(format!(
                "Profile '{}' pitch must be between 0.0 and 2.0",
                self.label
            ));
        }

        if !(0.0..=1.0).contains(&self.volume) {
            return Err(format!(
                "Profile '{}' volume must be between 0.0 and 1.0",
                self.label
            ));
        }

        Ok(())
    }
}

fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The three built-in personas.
pub fn builtin_profiles() -> Vec<VoiceProfile> {
    vec![
        VoiceProfile {
            label: "Sweetie".to_string(),
            label_bn: "সুইটি".to_string(),
            rate: 0.65,
            pitch: 1.8,
            volume: 1.0,
            preferred_keywords: keywords(&[
                "samantha", "victoria", "karen", "moira", "tessa", "fiona", "allison", "ava",
                "susan",
            ]),
            fallback_keywords: keywords(&["female", "woman", "girl"]),
        },
        VoiceProfile {
            label: "Bubbly".to_string(),
            label_bn: "বাবলি".to_string(),
            rate: 0.70,
            pitch: 1.55,
            volume: 1.0,
            preferred_keywords: keywords(&[
                "alice", "emma", "amy", "joanna", "salli", "kendra", "kimberly", "ivy",
            ]),
            fallback_keywords: keywords(&["female", "woman"]),
        },
        VoiceProfile {
            label: "Teddy".to_string(),
            label_bn: "টেডি".to_string(),
            rate: 0.68,
            pitch: 1.1,
            volume: 1.0,
            preferred_keywords: keywords(&[
                "daniel", "matthew", "joey", "justin", "oliver", "thomas", "arthur",
            ]),
            fallback_keywords: keywords(&["male", "man"]),
        },
    ]
}
