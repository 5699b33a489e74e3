//! LLM Client: the single point of entry for all Gemini API calls in Resumatch.
//!
//! ARCHITECTURAL RULE: No other module may call the provider directly.
//! All LLM interactions MUST go through `CompletionBackend`.
//!
//! Model: gemini-2.5-flash (hardcoded, do not make configurable)
//!
//! Calls are never retried here. A failed analysis is retried by the user
//! resubmitting; `LlmError::is_retryable` tells the caller whether that is worth it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all LLM calls in Resumatch.
pub const MODEL: &str = "gemini-2.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 8192;
const TEMPERATURE: f32 = 0.2;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Upstream HTTP status, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Capacity and availability failures. Everything else will fail the same
    /// way on resubmission.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Api { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            LlmError::Http(e) => e.is_timeout() || e.is_connect(),
            LlmError::Parse(_) | LlmError::EmptyContent => false,
        }
    }
}

/// Anything that turns a prompt into model text. Carried in `AppState` as
/// `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends one prompt and returns the raw reply text.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError>;

    /// False when the backend cannot possibly authenticate (e.g. empty key).
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single user turn with the system instruction alongside.
    fn new(prompt: &'a str, system: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![RequestPart { text: system }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Wraps the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/models/{MODEL}:generateContent")
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest::new(prompt, system);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}", status);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: parse_error_message(body),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }
        if let Some(reason) = parsed.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            if reason != "STOP" {
                warn!("Gemini finished with reason {reason}");
            }
        }

        parsed.text().ok_or(LlmError::EmptyContent)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Pulls `error.message` out of a provider error envelope, falling back to the raw body.
fn parse_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Finds the JSON object in a model reply.
///
/// The first fenced block (```` ```json ```` or bare ```` ``` ````) holding a
/// complete object wins, wherever it sits in the reply. Without one, the reply
/// is scanned for the first `{` that opens a complete object, so braces in
/// surrounding prose are skipped.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let mut rest = text;
    while let Some(open) = rest.find("```") {
        let after = &rest[open + 3..];
        let body = after.strip_prefix("json").unwrap_or(after);
        let (body, next) = match body.find("```") {
            Some(close) => (&body[..close], &body[close + 3..]),
            None => (body, ""),
        };
        if let Some(object) = first_object(body) {
            return Some(object);
        }
        rest = next;
    }
    first_object(text)
}

/// The first complete `{ ... }` value in `text`. Stops at the first candidate
/// that runs off the end of the input, since every later `{` is inside it.
fn first_object(text: &str) -> Option<&str> {
    for (start, _) in text.match_indices('{') {
        let candidate = &text[start..];
        let mut values = serde_json::Deserializer::from_str(candidate).into_iter::<Value>();
        match values.next() {
            Some(Ok(Value::Object(_))) => return Some(&candidate[..values.byte_offset()]),
            Some(Err(e)) if e.is_eof() => return None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_object_from_tagged_fence() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json_object(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_json_object_from_untagged_fence() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json_object(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_json_object_without_fence() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(extract_json_object(input), Some(input));
    }

    #[test]
    fn test_extract_json_object_skips_surrounding_prose() {
        let input = "Here is the analysis:\n```json\n{\"a\": {\"b\": 1}}\n```\nGood luck!";
        assert_eq!(extract_json_object(input), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_extract_json_object_ignores_braces_after_fence() {
        let input = "```json\n{\"a\": 1}\n```\n\nNote: fields marked {n/a} were not found.";
        assert_eq!(extract_json_object(input), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_json_object_ignores_braces_before_fence() {
        let input = "I compared {resume} with {job}:\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(input), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_json_object_skips_non_json_fence() {
        let input = "```text\nsee {below}\n```\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(input), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_json_object_bare_object_between_braced_prose() {
        let input = "Using {template}: {\"a\": [1, 2]} (see {docs})";
        assert_eq!(extract_json_object(input), Some("{\"a\": [1, 2]}"));
    }

    #[test]
    fn test_extract_json_object_none_without_braces() {
        assert_eq!(extract_json_object("I cannot help with that."), None);
        assert_eq!(extract_json_object(""), None);
        assert_eq!(extract_json_object("} backwards {"), None);
        assert_eq!(extract_json_object("```json\n{\"a\": [1, \n```"), None);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "```json\n{"}, {"text": "}\n```"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("```json\n{}\n```"));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 10);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_parse_error_message_from_envelope() {
        let body = r#"{"error": {"code": 503, "message": "The model is overloaded. Please try again later.", "status": "UNAVAILABLE"}}"#;
        assert_eq!(
            parse_error_message(body.to_string()),
            "The model is overloaded. Please try again later."
        );
        assert_eq!(parse_error_message("upstream died".to_string()), "upstream died");
    }

    #[test]
    fn test_retryable_statuses() {
        for status in [429, 500, 502, 503, 504] {
            let err = LlmError::Api {
                status,
                message: String::new(),
            };
            assert!(err.is_retryable(), "{status} should be retryable");
        }
        for status in [400, 401, 403, 404] {
            let err = LlmError::Api {
                status,
                message: String::new(),
            };
            assert!(!err.is_retryable(), "{status} should not be retryable");
        }
        assert!(!LlmError::EmptyContent.is_retryable());
    }

    #[tokio::test]
    async fn test_transport_failures_are_classified() {
        let refused = Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        assert!(refused.is_connect());
        assert!(LlmError::Http(refused).is_retryable());

        let malformed = Client::new().get("not a url").send().await.unwrap_err();
        assert!(!LlmError::Http(malformed).is_retryable());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::new(
            "Compare these documents",
            "You are a recruiter",
        ))
        .unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Compare these documents");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a recruiter"
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 8192);
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert!(body.get("system_instruction").is_none());
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new("key".to_string()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(client.is_configured());
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let client = GeminiClient::new("   ".to_string()).unwrap();
        assert!(!client.is_configured());
    }
}
