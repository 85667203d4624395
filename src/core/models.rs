//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio_util::sync::CancellationToken;

/// The only operation mode this engine serves
pub const MODE_TRANSLATE: &str = "translate";

/// Translation metadata attached to a request
///
/// `mode` stays an open string: requests cross a serialized registry
/// boundary and an unknown mode must survive intact so it can be named
/// in the unsupported-operation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateMetadata {
    /// Requested operation, `"translate"` for this engine
    pub mode: String,
    /// Application tag of the input language; absent means auto-detect
    pub source_lang: Option<String>,
    /// Application tag of the output language
    pub target_lang: Option<String>,
}

/// A single engine request
#[derive(Debug, Clone, Default)]
pub struct EngineRequest {
    /// Text to translate
    pub original_text: String,
    /// Translation metadata; a request without it is rejected
    pub metadata: Option<TranslateMetadata>,
    /// Caller-owned cancellation signal, checked at the network boundary
    pub cancel: CancellationToken,
}

impl EngineRequest {
    /// Build a translate request for `target_lang`
    pub fn translate(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            original_text: text.into(),
            metadata: Some(TranslateMetadata {
                mode: MODE_TRANSLATE.to_string(),
                source_lang: None,
                target_lang: Some(target_lang.into()),
            }),
            cancel: CancellationToken::new(),
        }
    }

    /// Set an explicit source language instead of auto-detection
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        if let Some(meta) = self.metadata.as_mut() {
            meta.source_lang = Some(source_lang.into());
        }
        self
    }

    /// Attach a caller-owned cancellation token
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// A normalized message delivered to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineMessage {
    /// Translated content; multi-segment responses are joined with `\n`
    pub content: String,
    /// Speaker role marker; empty for this engine
    pub role: String,
    /// Whether `content` is the complete text rather than a stream delta
    pub is_full_text: bool,
}

/// Reason a request finished normally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The provider produced a complete translation
    Stop,
}

impl FinishReason {
    /// Wire representation of the reason
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Stop => "stop",
        }
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
