//! GeminiTranslator - Direct REST API implementation for Gemini.
//!
//! This agent calls the Gemini REST API directly without CLI dependency.
//! Configuration is loaded from secret.json. Models are tried in priority
//! order, with models that recently worked tried first.

use crate::config::load_secret_config;
use crate::error::TranslateError;
use crate::translator::{EmotionTranslator, TranslationOutcome};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model priority order: models with free-tier access first.
const MODEL_OPTIONS: [&str; 4] = [
    "gemini-2.5-flash-lite",
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-2.5-pro",
];

const SYSTEM_PROMPT: &str = r#"You are UNSAID, an emotional translation engine. Your ONLY task is to translate raw emotional text into clear, respectful language.

STRICT RULES:
1. NO advice, suggestions, or guidance
2. NO diagnosis or clinical terms
3. NO emergency or crisis language
4. NO questions
5. ONLY translate emotions
6. DO NOT include validation messages

FORMAT REQUIREMENTS:
Return ONLY valid JSON with this exact structure:
{
  "clearExpression": "translated text here",
  "respectfulExpression": "translated text here",
  "emotions": ["emotion1", "emotion2"]
}

TONE: Calm, gentle, neutral, respectful, non-judgmental."#;

/// Models wrap JSON in prose or code fences; take the outermost brace pair.
static JSON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON block pattern is valid"));

/// Translation agent that talks to the Gemini HTTP API.
///
/// Each instance owns its list of last-known-good models; separate
/// instances (e.g. in tests) never share that state.
pub struct GeminiTranslator {
    client: Client,
    api_key: String,
    preferred_model: Option<String>,
    working_models: Mutex<Vec<String>>,
}

impl GeminiTranslator {
    /// Creates a new agent with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            preferred_model: None,
            working_models: Mutex::new(Vec::new()),
        }
    }

    /// Loads configuration from secret.json.
    ///
    /// A `model_name` in the configuration is tried before the built-in
    /// priority list.
    pub fn try_from_env() -> Result<Self, TranslateError> {
        let secret_config = load_secret_config().map_err(TranslateError::ExecutionFailed)?;

        let gemini_config = secret_config.gemini.ok_or_else(|| {
            TranslateError::ExecutionFailed(
                "Gemini configuration not found in secret.json".to_string(),
            )
        })?;

        let mut agent = Self::new(gemini_config.api_key);
        agent.preferred_model = gemini_config.model_name;
        Ok(agent)
    }

    /// Overrides the first model to try.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.preferred_model = Some(model.into());
        self
    }

    /// Models to try, in order: the configured preference, previously
    /// working models, then the remaining options.
    fn priority_order(&self) -> Vec<String> {
        let working = self
            .working_models
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut order: Vec<String> = Vec::new();
        let candidates = self
            .preferred_model
            .iter()
            .map(String::as_str)
            .chain(working.iter().map(String::as_str))
            .chain(MODEL_OPTIONS);
        for model in candidates {
            if !order.iter().any(|m| m == model) {
                order.push(model.to_string());
            }
        }
        order
    }

    fn mark_working(&self, model: &str) {
        let mut working = self
            .working_models
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !working.iter().any(|m| m == model) {
            working.push(model.to_string());
        }
    }

    fn mark_failed(&self, model: &str) {
        let mut working = self
            .working_models
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        working.retain(|m| m != model);
    }

    async fn send_request(&self, model: &str, prompt: &str) -> Result<String, TranslateError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = model,
            api_key = self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| TranslateError::Process {
                status_code: None,
                message: format!("Gemini API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
                retry_after: None,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| TranslateError::Other(format!("Failed to parse Gemini response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl EmotionTranslator for GeminiTranslator {
    fn expertise(&self) -> &str {
        "Gemini API translator for emotional rephrasing"
    }

    async fn translate(&self, text: &str) -> Result<TranslationOutcome, TranslateError> {
        let prompt = format!("{SYSTEM_PROMPT}\n\nUser Text: \"\"\"{text}\"\"\"\n\nResponse:");
        let mut last_error: Option<TranslateError> = None;

        for model in self.priority_order() {
            tracing::debug!(model = %model, "trying Gemini model");

            let output = match self.send_request(&model, &prompt).await {
                Ok(output) => output,
                Err(err) => {
                    if err.status_code() == Some(429) {
                        tracing::info!(model = %model, "model quota exceeded, skipping for now");
                    } else {
                        tracing::warn!(model = %model, error = %err, "model failed");
                    }
                    self.mark_failed(&model);
                    last_error = Some(err);
                    continue;
                }
            };

            self.mark_working(&model);

            let Some(json) = JSON_BLOCK.find(&output) else {
                tracing::warn!(model = %model, "model returned non-JSON output, trying next");
                continue;
            };

            match serde_json::from_str::<TranslationOutcome>(json.as_str()) {
                Ok(mut outcome) => {
                    outcome.normalize_emotions();
                    return Ok(outcome);
                }
                Err(err) => {
                    tracing::warn!(model = %model, error = %err, "failed to parse model JSON, trying next");
                    self.mark_failed(&model);
                    last_error = Some(TranslateError::Other(format!(
                        "Model returned unparseable JSON: {err}"
                    )));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            TranslateError::ExecutionFailed("All Gemini models unavailable".to_string())
        }))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, TranslateError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            TranslateError::ExecutionFailed(
                "Gemini API returned no text in the response candidates".into(),
            )
        })
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> TranslateError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    if let Some(delay) = retry_after {
        TranslateError::process_with_retry_after(status.as_u16(), message, is_retryable, delay)
    } else {
        TranslateError::Process {
            status_code: Some(status.as_u16()),
            message,
            is_retryable,
            retry_after: None,
        }
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_starts_with_defaults() {
        let agent = GeminiTranslator::new("test-key");
        assert_eq!(agent.priority_order(), MODEL_OPTIONS);
    }

    #[test]
    fn test_working_model_is_promoted() {
        let agent = GeminiTranslator::new("test-key");
        agent.mark_working("gemini-2.0-flash");

        let order = agent.priority_order();
        assert_eq!(order[0], "gemini-2.0-flash");
        assert_eq!(order.len(), MODEL_OPTIONS.len());
    }

    #[test]
    fn test_failed_model_is_demoted() {
        let agent = GeminiTranslator::new("test-key");
        agent.mark_working("gemini-2.0-flash");
        agent.mark_failed("gemini-2.0-flash");

        assert_eq!(agent.priority_order(), MODEL_OPTIONS);
    }

    #[test]
    fn test_preferred_model_goes_first() {
        let agent = GeminiTranslator::new("test-key").with_model("gemini-2.5-pro");
        let order = agent.priority_order();
        assert_eq!(order[0], "gemini-2.5-pro");
        assert_eq!(order.len(), MODEL_OPTIONS.len());
    }

    #[test]
    fn test_instances_do_not_share_working_models() {
        let first = GeminiTranslator::new("key-a");
        let second = GeminiTranslator::new("key-b");
        first.mark_working("gemini-2.5-pro");

        assert_eq!(second.priority_order(), MODEL_OPTIONS);
        assert_eq!(first.priority_order()[0], "gemini-2.5-pro");
    }

    #[test]
    fn test_json_block_extraction_from_fenced_output() {
        let output = "Here you go:\n```json\n{\"clearExpression\": \"a\", \"respectfulExpression\": \"b\", \"emotions\": [\"sad\"]}\n```";
        let json = JSON_BLOCK.find(output).expect("block found");
        let outcome: TranslationOutcome = serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(outcome.clear_expression, "a");
    }

    #[test]
    fn test_json_block_absent_in_prose() {
        assert!(JSON_BLOCK.find("I cannot help with that.").is_none());
    }

    #[test]
    fn test_extract_text_response_takes_last_candidate_text() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(ContentResponse {
                    parts: vec![PartResponse {
                        text: Some("hello".to_string()),
                    }],
                }),
            }]),
        };
        assert_eq!(extract_text_response(response).unwrap(), "hello");
    }

    #[test]
    fn test_extract_text_response_empty_candidates() {
        let response = GenerateContentResponse { candidates: None };
        assert!(matches!(
            extract_text_response(response),
            Err(TranslateError::ExecutionFailed(_))
        ));
    }

    #[test]
    fn test_map_http_error_retryability() {
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, "{}".to_string(), None);
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), Some(429));

        let err = map_http_error(StatusCode::BAD_REQUEST, "{}".to_string(), None);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_map_http_error_parses_structured_body() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string(), None);
        match err {
            TranslateError::Process { message, .. } => {
                assert_eq!(message, "RESOURCE_EXHAUSTED: Quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let header = HeaderValue::from_static("30");
        assert_eq!(
            parse_retry_after(Some(&header)),
            Some(Duration::from_secs(30))
        );
        assert_eq!(parse_retry_after(None), None);

        let date = HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(parse_retry_after(Some(&date)), None);
    }
}
