//! CLI command definitions and handlers

use clap::Subcommand;

use crate::core::client::DeeplEngine;
use crate::core::config::DeeplConfig;
use crate::core::engine::{OutcomeCollector, SendOutcome, TranslationEngine};
use crate::core::language::{SOURCE_LANGUAGES, TARGET_LANGUAGES};
use crate::core::models::EngineRequest;

/// Commands for the DeepL translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a piece of text
    Translate {
        /// Text to translate
        text: String,

        /// Target language tag (e.g. fr, en-GB, pt-BR)
        #[arg(short, long)]
        target_lang: String,

        /// Source language tag (auto-detect if not specified)
        #[arg(short, long)]
        source_lang: Option<String>,
    },

    /// List supported application-level language tags
    Languages,

    /// List the engine's models
    Models,
}

/// Handle the translate command
pub async fn handle_translate(
    text: String,
    target_lang: String,
    source_lang: Option<String>,
) -> anyhow::Result<()> {
    use tracing::info;

    let engine = DeeplEngine::from_env()?;

    info!("Translating to {}", target_lang);

    let mut request = EngineRequest::translate(text, target_lang);
    if let Some(source_lang) = source_lang {
        request = request.with_source_lang(source_lang);
    }

    let mut collector = OutcomeCollector::new();
    engine.send_message(&request, &mut collector).await;

    match collector.into_outcome() {
        SendOutcome::Completed { message, .. } => {
            println!("{}", message.content);
            Ok(())
        }
        SendOutcome::Errored { message } => anyhow::bail!("Translation failed: {}", message),
        SendOutcome::Cancelled => anyhow::bail!("Translation cancelled"),
    }
}

/// Handle the languages command
pub fn handle_languages() {
    println!("Source languages ({}):", SOURCE_LANGUAGES.len());
    for (tag, code) in SOURCE_LANGUAGES {
        println!("   {:<10} -> {}", tag, code);
    }

    println!("\nTarget languages ({}):", TARGET_LANGUAGES.len());
    for (tag, code) in TARGET_LANGUAGES {
        println!("   {:<10} -> {}", tag, code);
    }
}

/// Handle the models command
pub fn handle_models() -> anyhow::Result<()> {
    // The model list is static, no API key needed
    let engine = DeeplEngine::new(DeeplConfig::default())?;

    println!("Engine: {}", engine.name());
    for model in engine.model_list() {
        println!("   {}", model);
    }

    Ok(())
}
