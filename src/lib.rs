//! DeepL Translator - translation engine adapter for the DeepL API
//!
//! This library adapts a generic translation-engine interface to the
//! DeepL HTTP API: language tag mapping, a single-shot request/response
//! adapter, and a normalized callback contract for its outcomes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::{DeeplEngine, DEEPL_MODEL},
    config::DeeplConfig,
    engine::{EngineHandler, OutcomeCollector, SendOutcome, TranslationEngine},
    errors::TranslationError,
    language::{map_language, source_lang_code, target_lang_code, SOURCE_LANGUAGES, TARGET_LANGUAGES},
    models::{EngineMessage, EngineRequest, FinishReason, TranslateMetadata, MODE_TRANSLATE},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
