//! Tests for voice resolution over catalog snapshots

use bornomala_voice::catalog::{has_language_prefix, resolve_native, resolve_secondary};
use bornomala_voice::config::{default_secondary_fallback, LocaleRule};
use bornomala_voice::profile::builtin_profiles;
use bornomala_voice::InstalledVoice;

fn voice(name: &str, language: &str) -> InstalledVoice {
    InstalledVoice::new(name, language)
}

#[test]
fn test_preferred_keyword_priority_wins() {
    // Karen matches a later preferred keyword and sits first in the catalog;
    // Samantha matches the first keyword and must win anyway.
    let voices = vec![
        voice("Karen", "en-AU"),
        voice("Samantha", "en-US"),
        voice("Daniel", "en-GB"),
    ];
    let profile = &builtin_profiles()[0]; // Sweetie: samantha first

    let resolved = resolve_native(&voices, profile, "en").unwrap();
    assert_eq!(resolved.name, "Samantha");
}

#[test]
fn test_keyword_match_is_case_insensitive_substring() {
    let voices = vec![voice("Microsoft SAMANTHA Desktop", "en-US")];
    let profile = &builtin_profiles()[0];

    let resolved = resolve_native(&voices, profile, "en").unwrap();
    assert_eq!(resolved.name, "Microsoft SAMANTHA Desktop");
}

#[test]
fn test_fallback_keywords_after_preferred() {
    let voices = vec![
        voice("Zarvox", "en-US"),
        voice("Female Voice 1", "en-US"),
    ];
    let profile = &builtin_profiles()[0]; // No preferred names here

    let resolved = resolve_native(&voices, profile, "en").unwrap();
    assert_eq!(resolved.name, "Female Voice 1");
}

#[test]
fn test_native_locale_restriction() {
    // Samantha exists but speaks French; the first English voice wins.
    let voices = vec![voice("Samantha", "fr-FR"), voice("Zarvox", "en-GB")];
    let profile = &builtin_profiles()[0];

    let resolved = resolve_native(&voices, profile, "en").unwrap();
    assert_eq!(resolved.name, "Zarvox");
}

#[test]
fn test_any_voice_fallback() {
    let voices = vec![voice("Anna", "de-DE")];
    let profile = &builtin_profiles()[0];

    let resolved = resolve_native(&voices, profile, "en").unwrap();
    assert_eq!(resolved.name, "Anna");
}

#[test]
fn test_native_empty_catalog_resolves_none() {
    let profile = &builtin_profiles()[0];
    assert!(resolve_native(&[], profile, "en").is_none());
}

#[test]
fn test_language_prefix_boundaries() {
    assert!(has_language_prefix("en-US", "en"));
    assert!(has_language_prefix("en", "en"));
    assert!(has_language_prefix("EN-us", "en"));
    assert!(has_language_prefix("en_GB", "en"));
    assert!(!has_language_prefix("eng", "en"));
    assert!(!has_language_prefix("e", "en"));
    assert!(!has_language_prefix("fr-FR", "en"));
}

#[test]
fn test_secondary_exact_tag_priority() {
    // bn-IN sits first in the catalog but bn-BD leads the chain.
    let voices = vec![
        voice("Bengali India", "bn-IN"),
        voice("Bengali Bangladesh", "bn-BD"),
    ];

    let resolved = resolve_secondary(&voices, &default_secondary_fallback()).unwrap();
    assert_eq!(resolved.name, "Bengali Bangladesh");
}

#[test]
fn test_secondary_language_only_tag() {
    let voices = vec![voice("Bengali", "bn"), voice("English", "en-US")];

    let resolved = resolve_secondary(&voices, &default_secondary_fallback()).unwrap();
    assert_eq!(resolved.name, "Bengali");
}

#[test]
fn test_secondary_related_language_fallback() {
    let voices = vec![voice("Hindi", "hi-IN"), voice("English", "en-US")];

    let resolved = resolve_secondary(&voices, &default_secondary_fallback()).unwrap();
    assert_eq!(resolved.name, "Hindi");
}

#[test]
fn test_secondary_region_generic_fallback() {
    // Only a generic regional voice is installed; it beats silence.
    let voices = vec![voice("Tamil", "ta-IN"), voice("English", "en-US")];

    let resolved = resolve_secondary(&voices, &default_secondary_fallback()).unwrap();
    assert_eq!(resolved.name, "Tamil");
}

#[test]
fn test_secondary_no_match_resolves_none() {
    let voices = vec![voice("English", "en-US"), voice("French", "fr-FR")];
    assert!(resolve_secondary(&voices, &default_secondary_fallback()).is_none());
}

#[test]
fn test_secondary_empty_catalog_resolves_none() {
    assert!(resolve_secondary(&[], &default_secondary_fallback()).is_none());
}

#[test]
fn test_secondary_case_insensitive_tags() {
    let voices = vec![voice("Bengali", "BN-bd")];

    let resolved = resolve_secondary(&voices, &default_secondary_fallback()).unwrap();
    assert_eq!(resolved.name, "Bengali");
}

#[test]
fn test_secondary_respects_custom_chain_order() {
    let voices = vec![voice("Hindi", "hi-IN"), voice("Bengali", "bn-BD")];
    let chain = vec![
        LocaleRule::Exact("hi-IN".to_string()),
        LocaleRule::Exact("bn-BD".to_string()),
    ];

    let resolved = resolve_secondary(&voices, &chain).unwrap();
    assert_eq!(resolved.name, "Hindi");
}
