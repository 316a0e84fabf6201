//! Installed-voice catalog and voice resolution
//!
//! Resolution is pure: it scans a snapshot of the platform's voice catalog
//! and never blocks or fails. Catalogs load asynchronously on most
//! platforms, so an empty snapshot is a normal early-lifetime state and
//! resolves to `None`.

use crate::config::LocaleRule;
use crate::profile::VoiceProfile;
use serde::{Deserialize, Serialize};

/// One voice installed on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledVoice {
    /// Human-readable voice name ("Samantha", "Bengali").
    pub name: String,

    /// Locale tag ("en-US", "bn").
    pub language: String,
}

impl InstalledVoice {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}

/// True when `tag` starts with `language` on a subtag boundary, so "en"
/// matches "en-US" and "en" but not "eng".
pub fn has_language_prefix(tag: &str, language: &str) -> bool {
    if language.is_empty() || tag.len() < language.len() {
        return false;
    }
    if !tag.is_char_boundary(language.len()) {
        return false;
    }
    let (head, rest) = tag.split_at(language.len());
    head.eq_ignore_ascii_case(language)
        && rest
            .chars()
            .next()
            .map_or(true, |c| c == '-' || c == '_')
}

fn name_contains(name: &str, keyword: &str) -> bool {
    name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Pick the best native-language voice for a persona.
///
/// Scan order: each preferred keyword against native-locale voices, then
/// each fallback keyword, then the first native-locale voice, then the
/// first voice of any kind. `None` only when the catalog is empty.
pub fn resolve_native<'a>(
    voices: &'a [InstalledVoice],
    profile: &VoiceProfile,
    language: &str,
) -> Option<&'a InstalledVoice> {
    if voices.is_empty() {
        return None;
    }

    let native = |v: &&InstalledVoice| has_language_prefix(&v.language, language);

    for keyword in profile
        .preferred_keywords
        .iter()
        .chain(profile.fallback_keywords.iter())
    {
        if let Some(voice) = voices
            .iter()
            .filter(native)
            .find(|v| name_contains(&v.name, keyword))
        {
            return Some(voice);
        }
    }

    voices.iter().find(native).or_else(|| voices.first())
}

/// Pick the best secondary-language voice by walking the fallback chain.
///
/// Returns the first voice matching each rule in order, or `None` when
/// nothing in the catalog is acceptable.
pub fn resolve_secondary<'a>(
    voices: &'a [InstalledVoice],
    rules: &[LocaleRule],
) -> Option<&'a InstalledVoice> {
    for rule in rules {
        if let Some(voice) = voices.iter().find(|v| rule.matches(&v.language)) {
            return Some(voice);
        }
    }
    None
}
