//! The narrator: single-flight utterance playback with persona voices
//!
//! At most one utterance is logically in flight; a new request cancels the
//! previous one before submitting. Playback always resolves: platform
//! completion, platform error, a guard timeout, a liveness probe, and
//! supersession by a newer request all count as done. Narration is
//! decorative and must never block the caller.

use crate::backend::{SpeechBackend, Utterance};
use crate::catalog::{resolve_native, resolve_secondary};
use crate::config::NarrationConfig;
use crate::error::VoiceError;
use crate::profile::{builtin_profiles, VoiceProfile};
use bornomala_core::content;
use bornomala_core::Language;
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// Letters are narrated slower than words; isolated glyphs are hard to
/// perceive at word speed.
const LETTER_RATE: f32 = 0.55;
const WORD_RATE: f32 = 0.68;
const SECONDARY_WORD_RATE: f32 = 0.72;
const SECONDARY_WORD_PITCH: f32 = 1.15;
const PRAISE_RATE: f32 = 0.78;
const LETTER_PITCH_LIFT: f32 = 0.15;
const PRAISE_PITCH_LIFT: f32 = 0.2;
const MAX_PITCH: f32 = 2.0;
/// Gap between the letter name and its word in full narration.
const SEGMENT_GAP_MS: u64 = 250;

/// Per-call overrides for [`Narrator::speak`].
#[derive(Debug, Clone, Default)]
pub struct SpeakOptions {
    pub language: Option<Language>,
    pub voice: Option<String>,
    pub rate: Option<f32>,
    pub pitch: Option<f32>,
    pub volume: Option<f32>,
}

struct Selection {
    profile_index: usize,
    language: Language,
}

/// Narration engine.
///
/// Owns the persona list, the current persona/language selection, and the
/// platform backend. One instance per running app; all methods take `&self`.
pub struct Narrator {
    config: NarrationConfig,
    profiles: Vec<VoiceProfile>,
    backend: Arc<dyn SpeechBackend>,
    selection: RwLock<Selection>,
    generation: AtomicU64,
    preempted: watch::Sender<u64>,
}

impl Narrator {
    /// Create a narrator with the built-in personas.
    pub fn new(
        backend: Arc<dyn SpeechBackend>,
        config: NarrationConfig,
    ) -> Result<Self, VoiceError> {
        Self::with_profiles(backend, config, builtin_profiles())
    }

    /// Create a narrator with custom personas.
    pub fn with_profiles(
        backend: Arc<dyn SpeechBackend>,
        config: NarrationConfig,
        profiles: Vec<VoiceProfile>,
    ) -> Result<Self, VoiceError> {
        config.validate().map_err(VoiceError::Config)?;

        if profiles.is_empty() {
            return Err(VoiceError::Config(
                "At least one voice profile is required".to_string(),
            ));
        }
        for profile in &profiles {
            profile.validate().map_err(VoiceError::Config)?;
        }

        let (preempted, _) = watch::channel(0u64);

        info!(
            backend = backend.name(),
            profiles = profiles.len(),
            "narrator initialized"
        );

        Ok(Self {
            config,
            profiles,
            backend,
            selection: RwLock::new(Selection {
                profile_index: 0,
                language: Language::English,
            }),
            generation: AtomicU64::new(0),
            preempted,
        })
    }

    pub fn profiles(&self) -> &[VoiceProfile] {
        &self.profiles
    }

    pub fn profile_index(&self) -> usize {
        self.selection.read().profile_index
    }

    /// Select a persona by index into [`Narrator::profiles`].
    pub fn set_profile(&self, index: usize) -> Result<(), VoiceError> {
        if index >= self.profiles.len() {
            return Err(VoiceError::Narrator(format!(
                "Profile index {} out of range ({} profiles)",
                index,
                self.profiles.len()
            )));
        }
        self.selection.write().profile_index = index;
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.selection.read().language
    }

    pub fn set_language(&self, language: Language) {
        self.selection.write().language = language;
    }

    /// True once the platform has reported at least one installed voice.
    pub fn is_ready(&self) -> bool {
        !self.backend.voices().is_empty()
    }

    /// True when the current catalog satisfies the secondary fallback chain.
    pub fn has_secondary_voice(&self) -> bool {
        resolve_secondary(&self.backend.voices(), &self.config.secondary_fallback).is_some()
    }

    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    /// Stop any current or queued playback. Safe to call when idle.
    pub fn cancel(&self) {
        self.preempt();
    }

    /// Speak one piece of text. Always resolves: platform errors, timeouts,
    /// and silent drops all count as completion.
    pub async fn speak(&self, text: &str, options: SpeakOptions) {
        if !self.config.enabled {
            return;
        }

        let generation = self.preempt();

        if self.backend.is_paused() {
            self.backend.resume();
        }

        let text = text.trim();
        if text.is_empty() {
            return;
        }

        // Platforms drop short utterances submitted right after a cancel;
        // give the cancel time to settle.
        let settle = if text.chars().count() <= self.config.short_text_max_chars {
            self.config.short_text_settle_ms
        } else {
            self.config.settle_delay_ms
        };
        if settle > 0 {
            tokio::time::sleep(Duration::from_millis(settle)).await;
            if self.is_superseded(generation) {
                return;
            }
        }

        let (profile, language) = {
            let selection = self.selection.read();
            let language = options.language.unwrap_or(selection.language);
            (self.profiles[selection.profile_index].clone(), language)
        };

        let voice = match options.voice {
            Some(name) => Some(name),
            None => {
                let voices = self.backend.voices();
                let resolved = match language {
                    Language::English => {
                        resolve_native(&voices, &profile, &self.config.native_language)
                    }
                    Language::Bangla => {
                        resolve_secondary(&voices, &self.config.secondary_fallback)
                    }
                };
                if resolved.is_none() {
                    debug!(
                        language = language.code(),
                        "no matching voice; submitting untargeted"
                    );
                }
                resolved.map(|v| v.name.clone())
            }
        };

        let utterance = Utterance {
            text: text.to_string(),
            language: match language {
                Language::English => self.config.native_locale.clone(),
                Language::Bangla => self.config.secondary_locale.clone(),
            },
            voice,
            rate: options.rate.unwrap_or(profile.rate),
            pitch: options.pitch.unwrap_or(profile.pitch),
            volume: options
                .volume
                .unwrap_or_else(|| profile.volume.min(self.config.volume)),
        };

        debug!(
            voice = utterance.voice.as_deref().unwrap_or("<untargeted>"),
            language = %utterance.language,
            rate = utterance.rate,
            "submitting utterance"
        );

        let guard = Duration::from_millis(self.config.guard_timeout_ms);
        tokio::select! {
            result = self.backend.play(&utterance) => {
                if let Err(e) = result {
                    debug!("platform playback failed; treated as completion: {}", e);
                }
            }
            _ = tokio::time::sleep(guard) => {
                debug!("utterance guard timeout elapsed");
            }
            _ = self.liveness_probe() => {
                debug!("platform reports idle playback; treated as completion");
            }
            _ = self.wait_superseded(generation) => {}
        }
    }

    /// Speak a letter name, slower and slightly higher than word narration.
    pub async fn speak_letter(&self, glyph: char) {
        let pitch = (self.current_profile().pitch + LETTER_PITCH_LIFT).min(MAX_PITCH);
        self.speak(
            &glyph.to_string(),
            SpeakOptions {
                language: Some(Language::English),
                rate: Some(LETTER_RATE),
                pitch: Some(pitch),
                ..Default::default()
            },
        )
        .await;
    }

    /// Speak a vocabulary word in the given language.
    ///
    /// Bangla words resolve a voice through the fallback chain up front and
    /// degrade to an untargeted utterance (locale tag only) when nothing on
    /// the device matches.
    pub async fn speak_word(&self, word: &str, language: Language) {
        match language {
            Language::English => {
                self.speak(
                    word,
                    SpeakOptions {
                        language: Some(Language::English),
                        rate: Some(WORD_RATE),
                        ..Default::default()
                    },
                )
                .await;
            }
            Language::Bangla => {
                let voices = self.backend.voices();
                let voice = resolve_secondary(&voices, &self.config.secondary_fallback)
                    .map(|v| v.name.clone());
                if voice.is_none() {
                    debug!("no Bangla-capable voice installed; speaking with locale tag only");
                }
                self.speak(
                    word,
                    SpeakOptions {
                        language: Some(Language::Bangla),
                        voice,
                        rate: Some(SECONDARY_WORD_RATE),
                        pitch: Some(SECONDARY_WORD_PITCH),
                        ..Default::default()
                    },
                )
                .await;
            }
        }
    }

    /// Speak a letter name followed by its first vocabulary word.
    pub async fn speak_full(&self, glyph: char) {
        self.speak_letter(glyph).await;

        let Some(letter) = content::letter(glyph) else {
            return;
        };
        let Some(word) = letter.words.first() else {
            return;
        };

        tokio::time::sleep(Duration::from_millis(SEGMENT_GAP_MS)).await;
        self.speak(
            word.en,
            SpeakOptions {
                language: Some(Language::English),
                rate: Some(WORD_RATE),
                ..Default::default()
            },
        )
        .await;
    }

    /// Speak a random praise phrase for the current language mode.
    /// Decorative symbols are stripped first; speech engines mishandle them.
    pub async fn speak_praise(&self) {
        let language = self.language();
        let phrase = {
            let mut rng = rand::thread_rng();
            match language {
                Language::English => content::PRAISE_EN.choose(&mut rng).copied(),
                Language::Bangla => content::PRAISE_BN.choose(&mut rng).copied(),
            }
        };
        let Some(phrase) = phrase else {
            return;
        };

        let cleaned = sanitize_praise(phrase);
        if cleaned.is_empty() {
            return;
        }

        let pitch = (self.current_profile().pitch + PRAISE_PITCH_LIFT).min(MAX_PITCH);
        self.speak(
            &cleaned,
            SpeakOptions {
                language: Some(language),
                rate: Some(PRAISE_RATE),
                pitch: Some(pitch),
                ..Default::default()
            },
        )
        .await;
    }

    fn current_profile(&self) -> VoiceProfile {
        self.profiles[self.selection.read().profile_index].clone()
    }

    /// Cancel platform playback and mark every outstanding speak call as
    /// superseded. Returns the new generation.
    fn preempt(&self) -> u64 {
        self.backend.cancel();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.preempted.send_replace(generation);
        generation
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) > generation
    }

    async fn wait_superseded(&self, generation: u64) {
        let mut rx = self.preempted.subscribe();
        loop {
            if self.is_superseded(generation) {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender never drops while the narrator lives; park forever
                // rather than spuriously resolving the race.
                std::future::pending::<()>().await;
            }
        }
    }

    async fn liveness_probe(&self) {
        let delay = self.config.liveness_probe_ms;
        if delay == 0 {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if self.backend.is_speaking() || self.backend.is_pending() {
            std::future::pending::<()>().await;
        }
    }
}

/// Keep word characters, spaces, and exclamation marks.
fn sanitize_praise(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace() || *c == '!')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::sanitize_praise;

    #[test]
    fn test_sanitize_praise_strips_decorations() {
        assert_eq!(sanitize_praise("Amazing! 🌟"), "Amazing!");
        assert_eq!(sanitize_praise("Great job! 🌈"), "Great job!");
        assert_eq!(sanitize_praise("অসাধারণ! 🌟"), "অসাধারণ!");
        assert_eq!(sanitize_praise("🌟✨"), "");
    }
}
