//! Configuration for the narration engine

use serde::{Deserialize, Serialize};

/// Narration engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Master switch. Disabled narration resolves immediately without
    /// touching the platform.
    pub enabled: bool,

    /// Upper bound on waiting for the platform to finish one utterance
    /// (milliseconds). Elapsing counts as completion, not as an error.
    pub guard_timeout_ms: u64,

    /// Delay after submission at which a platform reporting neither speaking
    /// nor pending playback is treated as done (milliseconds, 0 disables).
    pub liveness_probe_ms: u64,

    /// Delay between cancelling the previous utterance and submitting the
    /// next one (milliseconds).
    pub settle_delay_ms: u64,

    /// Settle delay for very short texts. Platforms tend to drop those when
    /// they arrive right after a cancel.
    pub short_text_settle_ms: u64,

    /// Texts of at most this many characters use the short settle delay.
    pub short_text_max_chars: usize,

    /// Language prefix for native-mode voice resolution.
    pub native_language: String,

    /// Locale tag stamped on native-mode utterances.
    pub native_locale: String,

    /// Locale tag stamped on secondary-mode utterances.
    pub secondary_locale: String,

    /// Secondary-mode voice fallback chain, tried in order. The default
    /// prefers exact Bangla voices, then any Bangla, then Hindi, then any
    /// South Asian regional voice. Which neighbors count as acceptable is a
    /// product decision, so the chain is data, not code.
    pub secondary_fallback: Vec<LocaleRule>,

    /// Playback volume (0.0-1.0).
    pub volume: f32,
}

/// One step of a locale fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleRule {
    /// Locale tag equals this value ("bn-BD").
    Exact(String),
    /// Locale tag starts with this language subtag ("bn" matches "bn-IN").
    Language(String),
    /// Locale tag carries this region subtag ("IN" matches "hi-IN").
    Region(String),
}

impl LocaleRule {
    /// True when the rule accepts the given locale tag.
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            LocaleRule::Exact(want) => tag.eq_ignore_ascii_case(want),
            LocaleRule::Language(prefix) => crate::catalog::has_language_prefix(tag, prefix),
            LocaleRule::Region(region) => tag
                .split(|c: char| c == '-' || c == '_')
                .skip(1)
                .any(|part| part.eq_ignore_ascii_case(region)),
        }
    }

    fn pattern(&self) -> &str {
        match self {
            LocaleRule::Exact(s) | LocaleRule::Language(s) | LocaleRule::Region(s) => s,
        }
    }
}

/// The default Bangla fallback chain.
pub fn default_secondary_fallback() -> Vec<LocaleRule> {
    vec![
        LocaleRule::Exact("bn-BD".to_string()),
        LocaleRule::Exact("bn-IN".to_string()),
        LocaleRule::Language("bn".to_string()),
        LocaleRule::Exact("hi-IN".to_string()),
        LocaleRule::Language("hi".to_string()),
        LocaleRule::Region("IN".to_string()),
    ]
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            guard_timeout_ms: 4_000,
            liveness_probe_ms: 350,
            settle_delay_ms: 100,
            short_text_settle_ms: 220,
            short_text_max_chars: 4,
            native_language: "en".to_string(),
            native_locale: "en-US".to_string(),
            secondary_locale: "bn-BD".to_string(),
            secondary_fallback: default_secondary_fallback(),
            volume: 1.0,
        }
    }
}

impl NarrationConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(100..=30_000).contains(&self.guard_timeout_ms) {
            return Err("Guard timeout must be between 100 and 30000 ms".to_string());
        }

        if self.liveness_probe_ms >= self.guard_timeout_ms {
            return Err("Liveness probe delay must be below the guard timeout".to_string());
        }

        if self.settle_delay_ms > 2_000 || self.short_text_settle_ms > 2_000 {
            return Err("Settle delays too large (max 2000 ms)".to_string());
        }

        if !(0.0..=1.0).contains(&self.volume) {
            return Err("Volume must be between 0.0 and 1.0".to_string());
        }

        for tag in [
            self.native_language.as_str(),
            self.native_locale.as_str(),
            self.secondary_locale.as_str(),
        ] {
            validate_locale_tag(tag)?;
        }

        for rule in &self.secondary_fallback {
            validate_locale_tag(rule.pattern())?;
        }

        Ok(())
    }
}

fn validate_locale_tag(tag: &str) -> Result<(), String> {
    if tag.is_empty() {
        return Err("Locale tag cannot be empty".to_string());
    }

    if tag.len() > 32 {
        return Err("Locale tag too long (max 32 chars)".to_string());
    }

    if !tag
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Locale tag '{}' contains invalid characters (only alphanumeric, '-' and '_' allowed)",
            tag
        ));
    }

    Ok(())
}
