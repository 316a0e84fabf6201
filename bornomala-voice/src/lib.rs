//! bornomala-voice: speech narration for the Bornomala alphabet app
//!
//! Provides child-friendly text-to-speech narration with:
//! - Persona voice profiles matched against installed platform voices
//! - English narration with keyword-based voice selection
//! - Bangla narration through a configurable locale fallback chain
//! - Single-flight playback that always resolves (guard timeout plus
//!   liveness probe), so narration can never wedge the caller

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod narrator;
pub mod profile;

pub use backend::espeak::EspeakBackend;
pub use backend::{SpeechBackend, Utterance};
pub use catalog::{resolve_native, resolve_secondary, InstalledVoice};
pub use config::{LocaleRule, NarrationConfig};
pub use error::VoiceError;
pub use narrator::{Narrator, SpeakOptions};
pub use profile::{builtin_profiles, VoiceProfile};
