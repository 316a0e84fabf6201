//! Speech playback backends

pub mod espeak;

use crate::catalog::InstalledVoice;
use crate::error::VoiceError;
use async_trait::async_trait;

/// One utterance handed to the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,

    /// Locale tag ("en-US", "bn-BD").
    pub language: String,

    /// Resolved platform voice name. `None` submits untargeted, with only
    /// the locale tag set.
    pub voice: Option<String>,

    /// Speed multiplier (1.0 is normal).
    pub rate: f32,

    /// Pitch multiplier (1.0 is neutral).
    pub pitch: f32,

    /// Volume (0.0-1.0).
    pub volume: f32,
}

/// Trait for platform speech services.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Snapshot of installed voices. May be empty shortly after startup;
    /// callers must treat the catalog as eventually consistent.
    fn voices(&self) -> Vec<InstalledVoice>;

    /// Play one utterance. Resolves when the platform reports completion or
    /// failure. Callers race this against their own timeout.
    async fn play(&self, utterance: &Utterance) -> Result<(), VoiceError>;

    /// True while an utterance is audibly playing.
    fn is_speaking(&self) -> bool;

    /// True while an utterance has been accepted but is not yet audible.
    fn is_pending(&self) -> bool;

    /// True when the platform suspended playback (OS screen lock and the
    /// like).
    fn is_paused(&self) -> bool;

    /// Resume suspended playback. No-op when not paused.
    fn resume(&self);

    /// Stop current and queued playback. No-op when idle.
    fn cancel(&self);

    /// Backend name for logs.
    fn name(&self) -> &str;
}
