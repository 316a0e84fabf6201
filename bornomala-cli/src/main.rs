// Bornomala Command Line Interface
// Narrates letters, words, and praise through the local speech backend

use anyhow::Context;
use bornomala_core::Language;
use bornomala_voice::{
    builtin_profiles, EspeakBackend, NarrationConfig, Narrator, SpeakOptions, SpeechBackend,
};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(name = "bornomala")]
#[command(about = "Bornomala - English/Bangla alphabet narrator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Persona index (see `bornomala profiles`)
    #[arg(long, short, default_value = "0", global = true)]
    profile: usize,

    /// Narration language (en or bn)
    #[arg(long, default_value = "en", global = true)]
    lang: String,

    /// Narration configuration file (TOML)
    #[arg(long, short, global = true)]
    config: Option<String>,

    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Narrate a single letter name
    Letter {
        /// The letter to narrate (A-Z)
        glyph: char,
    },
    /// Narrate a letter name followed by its first word
    Full {
        /// The letter to narrate (A-Z)
        glyph: char,
    },
    /// Narrate a word
    Word {
        /// The word to narrate
        text: String,
    },
    /// Narrate a random praise phrase
    Praise,
    /// Narrate arbitrary text
    Say {
        /// The text to narrate
        text: String,
    },
    /// List installed platform voices
    Voices,
    /// List the built-in personas
    Profiles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let language: Language = cli.lang.parse()?;

    let config: NarrationConfig = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path))?;
            toml::from_str(&raw)
                .with_context(|| format!("invalid narration config in {}", path))?
        }
        None => NarrationConfig::default(),
    };

    let backend = Arc::new(EspeakBackend::new()?);

    match cli.command {
        Commands::Voices => {
            let voices = backend.voices();
            if voices.is_empty() {
                println!("No voices installed (is espeak-ng available?)");
                return Ok(());
            }
            for voice in voices {
                println!("{:<12} {}", voice.language, voice.name);
            }
        }
        Commands::Profiles => {
            for (index, profile) in builtin_profiles().iter().enumerate() {
                println!(
                    "{}: {} / {} (rate {:.2}, pitch {:.2})",
                    index, profile.label, profile.label_bn, profile.rate, profile.pitch
                );
            }
        }
        command => {
            let narrator = Narrator::new(backend, config)?;
            narrator.set_profile(cli.profile)?;
            narrator.set_language(language);
            debug!(profile = cli.profile, lang = %language, "narrating");

            match command {
                Commands::Letter { glyph } => narrator.speak_letter(glyph).await,
                Commands::Full { glyph } => narrator.speak_full(glyph).await,
                Commands::Word { text } => narrator.speak_word(&text, language).await,
                Commands::Praise => narrator.speak_praise().await,
                Commands::Say { text } => narrator.speak(&text, SpeakOptions::default()).await,
                Commands::Voices | Commands::Profiles => unreachable!(),
            }
        }
    }

    Ok(())
}
