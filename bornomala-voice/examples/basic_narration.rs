//! Basic narration example

use bornomala_core::Language;
use bornomala_voice::{EspeakBackend, NarrationConfig, Narrator};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let backend = Arc::new(EspeakBackend::new()?);
    let narrator = Narrator::new(backend, NarrationConfig::default())?;

    println!("Narrating the letter A...");
    narrator.speak_full('A').await;

    println!("Narrating a Bangla word...");
    narrator.set_language(Language::Bangla);
    narrator.speak_word("আপেল", Language::Bangla).await;

    println!("A little praise...");
    narrator.speak_praise().await;

    Ok(())
}
