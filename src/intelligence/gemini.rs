//! Gemini `generateContent` client.
//!
//! Raw HTTP against the Generative Language API — no SDK. The request
//! declares structured output (`responseMimeType` + `responseSchema`) so the
//! model is steered toward the `{who, mission}` object, and the response is
//! still parsed defensively because steering is not a guarantee.
//!
//! Single attempt with a hard timeout; the editor has no retry policy.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::error::GenerateError;
use crate::intelligence::prompts::{build_identity_prompt, parse_identity_response};
use crate::intelligence::{ContentGenerator, GeneratedIdentity};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Concatenate the text parts of the first candidate, if any.
fn first_candidate_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let content = candidate.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self, GenerateError> {
        if api_key.is_empty() {
            return Err(GenerateError::NoApiKey);
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> Result<Url, GenerateError> {
        let base = Url::parse(API_BASE)?;
        Ok(base.join(&format!("models/{}:generateContent", self.model))?)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_identity(
        &self,
        business_context: &str,
    ) -> Result<GeneratedIdentity, GenerateError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_identity_prompt(business_context),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": {
                        "who": { "type": "STRING" },
                        "mission": { "type": "STRING" },
                    },
                    "required": ["who", "mission"],
                }),
            },
        };

        let response = self
            .http
            .post(self.endpoint()?)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        if let Some(reason) = body
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            if reason != "STOP" {
                log::warn!("generation finished with reason {}", reason);
            }
        }

        let text = first_candidate_text(&body).ok_or(GenerateError::EmptyResponse)?;
        parse_identity_response(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(
            GeminiClient::new(String::new(), "gemini-3-flash-preview".to_string()),
            Err(GenerateError::NoApiKey)
        ));
    }

    #[test]
    fn endpoint_includes_model_and_method() {
        let client =
            GeminiClient::new("k".to_string(), "gemini-3-flash-preview".to_string()).unwrap();
        let url = client.endpoint().unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn candidate_text_is_concatenated_from_parts() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": { "parts": [{ "text": "{\"who\":" }, { "text": " \"A\"}" }] },
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(
            first_candidate_text(&body).as_deref(),
            Some("{\"who\": \"A\"}")
        );
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(first_candidate_text(&body).is_none());

        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert!(first_candidate_text(&body).is_none());
    }
}
