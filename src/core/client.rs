//! DeepL translation engine adapter
//!
//! One request per call: validate, post the form-encoded payload,
//! demultiplex the response into the caller's callbacks. No retries,
//! no backoff. Timeout policy belongs to the transport client; the
//! caller's cancellation token is honored at the network boundary.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::DeeplConfig;
use crate::core::engine::{EngineHandler, TranslationEngine};
use crate::core::errors::{Result, TranslationError};
use crate::core::language::{source_lang_code, target_lang_code};
use crate::core::models::{EngineMessage, EngineRequest, FinishReason, MODE_TRANSLATE};

/// Static model identifier of this engine
pub const DEEPL_MODEL: &str = "deepl-translate";

/// DeepL's Authorization header scheme token
const AUTH_SCHEME: &str = "DeepL-Auth-Key";

/// DeepL translation engine
///
/// Holds no per-request state; a clone shares the transport client and
/// the immutable configuration, so concurrent sends are independent.
#[derive(Debug, Clone)]
pub struct DeeplEngine {
    client: reqwest::Client,
    config: Arc<DeeplConfig>,
}

/// A request that passed validation, in provider vocabulary
struct ProviderRequest<'a> {
    text: &'a str,
    target_lang: &'static str,
    source_lang: Option<&'static str>,
}

impl<'a> ProviderRequest<'a> {
    /// Form fields for the translate call. `split_sentences=nonewlines`
    /// and `preserve_formatting=1` are fixed: the caller's newlines are
    /// segment boundaries and must come back intact.
    fn form_params(&self) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("text", self.text), ("target_lang", self.target_lang)];
        if let Some(source_lang) = self.source_lang {
            params.push(("source_lang", source_lang));
        }
        params.push(("split_sentences", "nonewlines"));
        params.push(("preserve_formatting", "1"));
        params
    }
}

impl DeeplEngine {
    /// Create a new engine from configuration.
    ///
    /// The configuration is not validated here: an unconfigured API key
    /// is reported per request through the error callback, as the
    /// engine registry constructs engines before settings exist.
    pub fn new(config: DeeplConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = DeeplConfig::from_env()?;
        Self::new(config)
    }

    /// The engine's configuration
    pub fn config(&self) -> &DeeplConfig {
        &self.config
    }

    /// Check request preconditions and map both language fields.
    ///
    /// Short-circuits on the first failure; the order is part of the
    /// contract. An absent source language is valid, the provider
    /// auto-detects.
    fn validate<'a>(&self, request: &'a EngineRequest) -> Result<ProviderRequest<'a>> {
        if self.config.api_key.trim().is_empty() {
            return Err(TranslationError::MissingApiKey);
        }

        let meta = request
            .metadata
            .as_ref()
            .ok_or(TranslationError::MissingMetadata)?;

        if meta.mode != MODE_TRANSLATE {
            return Err(TranslationError::UnsupportedMode {
                mode: meta.mode.clone(),
            });
        }

        let target_tag = meta
            .target_lang
            .as_deref()
            .filter(|tag| !tag.is_empty())
            .ok_or(TranslationError::MissingTargetLanguage)?;

        if request.original_text.is_empty() {
            return Err(TranslationError::EmptyText);
        }

        let target_lang = target_lang_code(Some(target_tag)).ok_or_else(|| {
            TranslationError::UnsupportedTargetLanguage {
                tag: target_tag.to_string(),
            }
        })?;

        let source_lang = match meta.source_lang.as_deref().filter(|tag| !tag.is_empty()) {
            Some(tag) => {
                let code = source_lang_code(Some(tag)).ok_or_else(|| {
                    TranslationError::UnsupportedSourceLanguage {
                        tag: tag.to_string(),
                    }
                })?;
                Some(code)
            }
            None => None,
        };

        Ok(ProviderRequest {
            text: &request.original_text,
            target_lang,
            source_lang,
        })
    }
}

#[async_trait]
impl TranslationEngine for DeeplEngine {
    fn name(&self) -> &'static str {
        "deepl"
    }

    fn default_model(&self) -> String {
        DEEPL_MODEL.to_string()
    }

    fn model_list(&self) -> Vec<String> {
        vec![DEEPL_MODEL.to_string()]
    }

    async fn send_message(&self, request: &EngineRequest, handler: &mut dyn EngineHandler) {
        let provider_request = match self.validate(request) {
            Ok(provider_request) => provider_request,
            Err(e) => {
                handler.on_error(e.to_string()).await;
                return;
            }
        };

        debug!(
            "Translating to {} (source: {})",
            provider_request.target_lang,
            provider_request.source_lang.unwrap_or("auto"),
        );

        let send = self
            .client
            .post(self.config.endpoint())
            .header(
                "Authorization",
                format!("{} {}", AUTH_SCHEME, self.config.api_key),
            )
            .form(&provider_request.form_params())
            .send();

        // Cancellation wins silently: the caller asked for it and gets
        // no callback of any kind.
        let response = tokio::select! {
            _ = request.cancel.cancelled() => {
                debug!("Translation request cancelled");
                return;
            }
            result = send => match result {
                Ok(response) => response,
                Err(e) => {
                    handler.on_error(TranslationError::from(e).to_string()).await;
                    return;
                }
            },
        };

        let status = response.status();
        handler.on_status_code(status.as_u16());

        if !status.is_success() {
            let error = match response.text().await {
                Ok(body) => provider_error(&body, status.as_u16()),
                Err(e) => TranslationError::from(e),
            };
            warn!("DeepL request failed: {}", error);
            handler.on_error(error.to_string()).await;
            return;
        }

        let body = tokio::select! {
            _ = request.cancel.cancelled() => {
                debug!("Translation request cancelled while reading response");
                return;
            }
            body = response.text() => match body {
                Ok(body) => body,
                Err(e) => {
                    handler.on_error(TranslationError::from(e).to_string()).await;
                    return;
                }
            },
        };

        let json: serde_json::Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(e) => {
                handler.on_error(TranslationError::from(e).to_string()).await;
                return;
            }
        };

        let segments = parse_translations(&json);
        if segments.is_empty() {
            handler
                .on_error(TranslationError::EmptyResponse.to_string())
                .await;
            return;
        }

        debug!("Received {} translation segment(s)", segments.len());

        let message = EngineMessage {
            content: segments.join("\n"),
            role: String::new(),
            is_full_text: true,
        };
        handler.on_message(message).await;
        handler.on_finished(FinishReason::Stop).await;
    }
}

/// Best-effort error extraction from a non-success response body:
/// the JSON `message` field, else the raw text, else a generic
/// message carrying the status code.
fn provider_error(body: &str, status: u16) -> TranslationError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        })
        .or_else(|| {
            let raw = body.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        })
        .unwrap_or_else(|| format!("DeepL API error: HTTP {}", status));

    TranslationError::ApiError { status, message }
}

/// Translation segments from a success body; a missing or malformed
/// `translations` field is an empty list
fn parse_translations(json: &serde_json::Value) -> Vec<String> {
    json.get("translations")
        .and_then(|t| t.as_array())
        .map(|translations| {
            translations
                .iter()
                .filter_map(|t| t.get("text").and_then(|text| text.as_str()))
                .map(|text| text.to_string())
                .collect()
        })
        .unwrap_or_default()
}
