//! Engine capability and callback surfaces
//!
//! The callback contract lets streaming-capable engines share one
//! interface with single-shot engines: a non-streaming engine simply
//! delivers one full message and then the finish signal.

use async_trait::async_trait;

use crate::core::models::{EngineMessage, EngineRequest, FinishReason};

/// Callback surface an engine drives while serving one request.
///
/// Exactly one of `on_message` + `on_finished` or `on_error` fires per
/// request; a cancelled request fires neither. `on_message` is awaited
/// before the finish signal.
#[async_trait]
pub trait EngineHandler: Send {
    /// Deliver a normalized message
    async fn on_message(&mut self, message: EngineMessage);

    /// Report a terminal error
    async fn on_error(&mut self, message: String);

    /// Signal normal completion
    async fn on_finished(&mut self, reason: FinishReason);

    /// Observe the HTTP status of the provider response
    fn on_status_code(&mut self, _code: u16) {}
}

/// Engine capability surface consumed by the engine registry
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Registry identifier of the engine
    fn name(&self) -> &'static str;

    /// The engine's static model identifier
    fn default_model(&self) -> String;

    /// Selectable models; a single element for fixed-model engines
    fn model_list(&self) -> Vec<String>;

    /// Whether the engine runs without network access
    fn is_local(&self) -> bool {
        false
    }

    /// Serve one request, reporting only through `handler`
    async fn send_message(&self, request: &EngineRequest, handler: &mut dyn EngineHandler);
}

/// Terminal outcome of a single send, for callers that do not stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The engine delivered a message and finished normally
    Completed {
        /// The delivered message
        message: EngineMessage,
        /// Finish reason forwarded by the engine
        reason: FinishReason,
    },
    /// The engine reported a terminal error
    Errored {
        /// The reported error message
        message: String,
    },
    /// The request was cancelled; no callback fired
    Cancelled,
}

/// Handler that buffers callbacks and folds them into a [`SendOutcome`]
#[derive(Debug, Default)]
pub struct OutcomeCollector {
    message: Option<EngineMessage>,
    error: Option<String>,
    finished: Option<FinishReason>,
    status_code: Option<u16>,
}

impl OutcomeCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// HTTP status observed for the request, if any response arrived
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Fold the recorded callbacks into the terminal outcome.
    ///
    /// A collector that saw no callback at all means the request was
    /// cancelled.
    pub fn into_outcome(self) -> SendOutcome {
        if let Some(message) = self.error {
            return SendOutcome::Errored { message };
        }
        match (self.message, self.finished) {
            (Some(message), Some(reason)) => SendOutcome::Completed { message, reason },
            _ => SendOutcome::Cancelled,
        }
    }
}

#[async_trait]
impl EngineHandler for OutcomeCollector {
    async fn on_message(&mut self, message: EngineMessage) {
        self.message = Some(message);
    }

    async fn on_error(&mut self, message: String) {
        self.error = Some(message);
    }

    async fn on_finished(&mut self, reason: FinishReason) {
        self.finished = Some(reason);
    }

    fn on_status_code(&mut self, code: u16) {
        self.status_code = Some(code);
    }
}
