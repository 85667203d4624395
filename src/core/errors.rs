//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
///
/// Every variant is terminal: the engine reports it once through the
/// caller's error callback and makes no retry. Cancellation is not an
/// error and has no variant here.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// API key missing or blank after trimming
    #[error("DeepL API key is not configured")]
    MissingApiKey,

    /// Request carries no translation metadata
    #[error("Request carries no translation metadata")]
    MissingMetadata,

    /// Requested operation is not translation
    #[error("Unsupported operation mode: {mode}")]
    UnsupportedMode {
        mode: String,
    },

    /// Metadata has no target language
    #[error("Target language is required")]
    MissingTargetLanguage,

    /// Nothing to translate
    #[error("No text to translate")]
    EmptyText,

    /// Target language tag has no DeepL equivalent
    #[error("Unsupported target language: {tag}")]
    UnsupportedTargetLanguage {
        tag: String,
    },

    /// Source language tag has no DeepL equivalent
    #[error("Unsupported source language: {tag}")]
    UnsupportedSourceLanguage {
        tag: String,
    },

    /// Provider rejected the request; `message` carries the extracted
    /// provider message verbatim so callers see e.g. "Invalid API key"
    #[error("{message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Provider answered 200 with no translations
    #[error("DeepL returned no translations")]
    EmptyResponse,

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
