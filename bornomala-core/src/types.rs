//! Shared types for the Bornomala workspace

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Narration language.
///
/// English is the native mode: on-device voice coverage is assumed to be
/// rich. Bangla is the secondary mode: a precise voice is commonly absent
/// and selection runs through a fallback chain instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "bn")]
    Bangla,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Bangla => "bn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "bn" | "bangla" | "bengali" => Ok(Language::Bangla),
            other => Err(Error::Configuration(format!(
                "Unknown language '{}' (expected 'en' or 'bn')",
                other
            ))),
        }
    }
}
