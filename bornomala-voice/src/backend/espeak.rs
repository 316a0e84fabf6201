//! espeak-ng command-line backend
//!
//! Plays by spawning one espeak-ng process per utterance and tracking the
//! child so cancel can kill it. Voice enumeration parses
//! `espeak-ng --voices`. espeak has no pause notion, so the paused state is
//! constantly false and resume is a no-op.

use crate::backend::{SpeechBackend, Utterance};
use crate::catalog::InstalledVoice;
use crate::error::VoiceError;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

const ESPEAK_BIN: &str = "espeak-ng";
/// espeak speaks at roughly this many words per minute at normal speed.
const BASE_WPM: f32 = 175.0;
const CHILD_POLL_MS: u64 = 25;
const MAX_VOICES: usize = 1000;
const MAX_NAME_LEN: usize = 256;

pub struct EspeakBackend {
    available: bool,
    voices: RwLock<Vec<InstalledVoice>>,
    active: Mutex<Option<ActiveChild>>,
    token_counter: AtomicU64,
}

struct ActiveChild {
    token: u64,
    child: Child,
}

impl EspeakBackend {
    /// Probe espeak-ng and load the voice catalog.
    pub fn new() -> Result<Self, VoiceError> {
        let available = std::process::Command::new(ESPEAK_BIN)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);

        let backend = Self {
            available,
            voices: RwLock::new(Vec::new()),
            active: Mutex::new(None),
            token_counter: AtomicU64::new(0),
        };

        if available {
            backend.refresh_voices();
            info!(
                voices = backend.voices.read().len(),
                "espeak-ng backend initialized"
            );
        } else {
            warn!("espeak-ng not found; narration will be silent");
        }

        Ok(backend)
    }

    /// Reload the voice catalog. Installed voices can change at runtime.
    pub fn refresh_voices(&self) {
        if !self.available {
            return;
        }
        match std::process::Command::new(ESPEAK_BIN)
            .arg("--voices")
            .output()
        {
            Ok(output) if output.status.success() => {
                let parsed = parse_voice_list(&String::from_utf8_lossy(&output.stdout));
                *self.voices.write() = parsed;
            }
            Ok(output) => warn!(status = %output.status, "espeak-ng --voices failed"),
            Err(e) => warn!("failed to enumerate espeak-ng voices: {}", e),
        }
    }

    /// The `-v` argument for an utterance: the catalog language id of the
    /// resolved voice when one was named, else the primary subtag of the
    /// utterance's locale.
    fn voice_arg(&self, utterance: &Utterance) -> String {
        if let Some(ref name) = utterance.voice {
            let voices = self.voices.read();
            if let Some(voice) = voices.iter().find(|v| v.name.eq_ignore_ascii_case(name)) {
                return voice.language.clone();
            }
        }
        language_id(&utterance.language)
    }
}

#[async_trait]
impl SpeechBackend for EspeakBackend {
    fn voices(&self) -> Vec<InstalledVoice> {
        self.voices.read().clone()
    }

    async fn play(&self, utterance: &Utterance) -> Result<(), VoiceError> {
        if !self.available {
            return Err(VoiceError::Backend("espeak-ng not available".to_string()));
        }

        let text: String = utterance.text.chars().filter(|c| !c.is_control()).collect();
        if text.trim().is_empty() {
            return Err(VoiceError::Backend(
                "text is empty after sanitization".to_string(),
            ));
        }

        let voice = self.voice_arg(utterance);
        let token = self.token_counter.fetch_add(1, Ordering::SeqCst) + 1;

        let child = Command::new(ESPEAK_BIN)
            .arg("-v")
            .arg(&voice)
            .arg("-s")
            .arg(wpm_for_rate(utterance.rate).to_string())
            .arg("-p")
            .arg(espeak_pitch(utterance.pitch).to_string())
            .arg("-a")
            .arg(espeak_amplitude(utterance.volume).to_string())
            .arg("--")
            .arg(&text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| VoiceError::Backend(format!("failed to spawn espeak-ng: {}", e)))?;

        debug!(voice = %voice, chars = text.len(), "espeak-ng playback started");

        {
            let mut active = self.active.lock();
            if let Some(mut old) = active.take() {
                let _ = old.child.start_kill();
            }
            *active = Some(ActiveChild { token, child });
        }

        loop {
            tokio::time::sleep(Duration::from_millis(CHILD_POLL_MS)).await;
            let mut active = self.active.lock();
            match active.as_mut() {
                Some(entry) if entry.token == token => match entry.child.try_wait() {
                    Ok(Some(status)) => {
                        *active = None;
                        if status.success() {
                            return Ok(());
                        }
                        return Err(VoiceError::Backend(format!(
                            "espeak-ng exited with {}",
                            status
                        )));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        *active = None;
                        return Err(VoiceError::Io(e));
                    }
                },
                // Cancelled, or another utterance took the slot.
                _ => return Ok(()),
            }
        }
    }

    fn is_speaking(&self) -> bool {
        self.active.lock().is_some()
    }

    fn is_pending(&self) -> bool {
        false
    }

    fn is_paused(&self) -> bool {
        false
    }

    fn resume(&self) {}

    fn cancel(&self) {
        if let Some(mut entry) = self.active.lock().take() {
            let _ = entry.child.start_kill();
            debug!("espeak-ng playback cancelled");
        }
    }

    fn name(&self) -> &str {
        "espeak-ng"
    }
}

/// Map a speed multiplier to espeak's words-per-minute flag.
pub fn wpm_for_rate(rate: f32) -> u32 {
    ((BASE_WPM * rate).round() as i64).clamp(80, 450) as u32
}

/// Map a pitch multiplier (1.0 neutral) to espeak's 0-99 scale (50 neutral).
pub fn espeak_pitch(pitch: f32) -> u32 {
    ((pitch * 50.0).round() as i64).clamp(0, 99) as u32
}

/// Map a 0.0-1.0 volume to espeak's 0-200 amplitude scale.
pub fn espeak_amplitude(volume: f32) -> u32 {
    ((volume * 200.0).round() as i64).clamp(0, 200) as u32
}

/// Primary language subtag of a locale tag, lowercased ("bn-BD" becomes
/// "bn").
pub fn language_id(tag: &str) -> String {
    tag.split(|c: char| c == '-' || c == '_')
        .next()
        .unwrap_or(tag)
        .to_ascii_lowercase()
}

/// Parse `espeak-ng --voices` output (header line plus one voice per line).
pub fn parse_voice_list(output: &str) -> Vec<InstalledVoice> {
    output
        .lines()
        .skip(1)
        .filter_map(parse_voice_line)
        .take(MAX_VOICES)
        .collect()
}

fn parse_voice_line(line: &str) -> Option<InstalledVoice> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 5 {
        return None;
    }

    let language = parts[1];
    if language.is_empty()
        || !language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }

    // The voice name may contain spaces; the column after it is the voice
    // file, which carries a '/' for nearly every shipped voice. Fall back to
    // treating the last column as the file when none does.
    let file_idx = parts
        .iter()
        .skip(3)
        .position(|p| p.contains('/'))
        .map(|i| i + 3)
        .unwrap_or(parts.len() - 1);
    let name = if file_idx > 3 {
        parts[3..file_idx].join(" ")
    } else {
        parts[3].to_string()
    };

    if name.is_empty() || name.chars().any(|c| c.is_control()) {
        return None;
    }
    let name: String = name.chars().take(MAX_NAME_LEN).collect();

    Some(InstalledVoice {
        name,
        language: language.to_string(),
    })
}
