//! Error types for bornomala-voice

use bornomala_core::Error as CoreError;
use thiserror::Error;

/// Narration errors.
///
/// These surface from constructors and backends only; `Narrator::speak`
/// swallows playback failures by contract.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Narrator error: {0}")]
    Narrator(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl From<VoiceError> for CoreError {
    fn from(err: VoiceError) -> Self {
        CoreError::Speech(err.to_string())
    }
}
