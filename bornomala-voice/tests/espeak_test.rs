//! Tests for the espeak-ng backend's pure helpers
//!
//! Parsing and parameter mapping only; nothing here needs an espeak-ng
//! binary installed.

use bornomala_voice::backend::espeak::{
    espeak_amplitude, espeak_pitch, language_id, parse_voice_list, wpm_for_rate,
};

const SAMPLE_VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  bn              --/M      Bengali            bn
 2  en-gb           --/M      English (Great Britain) gmw/en
 5  hi              --/M      Hindi              inc/hi
 5  ta              --/M      Tamil              dra/ta
";

#[test]
fn test_parse_voice_list_basic() {
    let voices = parse_voice_list(SAMPLE_VOICES);
    assert_eq!(voices.len(), 5);

    assert_eq!(voices[0].name, "Afrikaans");
    assert_eq!(voices[0].language, "af");

    assert_eq!(voices[1].name, "Bengali");
    assert_eq!(voices[1].language, "bn");
}

#[test]
fn test_parse_voice_list_multiword_names() {
    let voices = parse_voice_list(SAMPLE_VOICES);
    let english = voices
        .iter()
        .find(|v| v.language == "en-gb")
        .expect("en-gb voice");
    assert_eq!(english.name, "English (Great Britain)");
}

#[test]
fn test_parse_voice_list_skips_malformed_lines() {
    let output = "\
Pty Language       Age/Gender VoiceName          File
garbage
 5  bn              --/M      Bengali            bn
 5
";
    let voices = parse_voice_list(output);
    assert_eq!(voices.len(), 1);
    assert_eq!(voices[0].name, "Bengali");
}

#[test]
fn test_parse_voice_list_empty_output() {
    assert!(parse_voice_list("").is_empty());
    assert!(parse_voice_list("Pty Language Age/Gender VoiceName File\n").is_empty());
}

#[test]
fn test_wpm_for_rate_mapping() {
    assert_eq!(wpm_for_rate(1.0), 175);
    assert_eq!(wpm_for_rate(0.55), 96);
    assert_eq!(wpm_for_rate(2.0), 350);
    // Clamped at both ends.
    assert_eq!(wpm_for_rate(0.1), 80);
    assert_eq!(wpm_for_rate(10.0), 450);
}

#[test]
fn test_espeak_pitch_mapping() {
    assert_eq!(espeak_pitch(1.0), 50);
    assert_eq!(espeak_pitch(1.8), 90);
    assert_eq!(espeak_pitch(0.0), 0);
    // 2.0 maps past the scale and clamps to the top.
    assert_eq!(espeak_pitch(2.0), 99);
}

#[test]
fn test_espeak_amplitude_mapping() {
    assert_eq!(espeak_amplitude(1.0), 200);
    assert_eq!(espeak_amplitude(0.5), 100);
    assert_eq!(espeak_amplitude(0.0), 0);
    assert_eq!(espeak_amplitude(2.0), 200);
}

#[test]
fn test_language_id_primary_subtag() {
    assert_eq!(language_id("bn-BD"), "bn");
    assert_eq!(language_id("en_US"), "en");
    assert_eq!(language_id("EN"), "en");
    assert_eq!(language_id("hi"), "hi");
}
