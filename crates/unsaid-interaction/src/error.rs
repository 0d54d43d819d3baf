//! Error type for translation agents.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by [`EmotionTranslator`](crate::EmotionTranslator)
/// implementations.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// The agent could not run at all (missing configuration, bad
    /// payload, no usable model).
    #[error("Translation failed: {0}")]
    ExecutionFailed(String),

    /// Transport or HTTP-level failure, with retryability metadata.
    #[error("Translation API error: {message}")]
    Process {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// Anything else (malformed response body, etc.)
    #[error("{0}")]
    Other(String),
}

impl TranslateError {
    /// Creates a Process error carrying a server-provided retry delay.
    pub fn process_with_retry_after(
        status_code: u16,
        message: impl Into<String>,
        is_retryable: bool,
        retry_after: Duration,
    ) -> Self {
        Self::Process {
            status_code: Some(status_code),
            message: message.into(),
            is_retryable,
            retry_after: Some(retry_after),
        }
    }

    /// Whether the failure is worth retrying (connect/timeout errors,
    /// 429 and 5xx responses).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Process { is_retryable: true, .. })
    }

    /// Status code of the underlying HTTP response, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Process { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
