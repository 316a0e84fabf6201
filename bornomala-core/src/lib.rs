//! bornomala-core: shared foundation for the Bornomala alphabet narrator
//!
//! Provides:
//! - Common error type used across the workspace
//! - The `Language` enum (English / Bangla narration modes)
//! - Static alphabet content: letters, vocabulary words, praise phrases

pub mod content;
pub mod error;
pub mod types;

pub use content::{letter, Letter, Word, ALPHABET, PRAISE_BN, PRAISE_EN};
pub use error::{Error, Result};
pub use types::Language;
