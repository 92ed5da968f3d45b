//! Anthropic analysis provider implementation.
//!
//! Sends sermon text wrapped in the fixed instructional prompt to the
//! Messages API and extracts the first text block of the reply.

use super::{AnalysisProvider, ProviderError};
use crate::services::prompt::build_analysis_prompt;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Anthropic Messages API endpoint.
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header required by the Messages API.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic provider configuration.
#[derive(Clone)]
pub struct AnthropicConfig {
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub max_tokens: i32,
}

/// Anthropic analysis provider.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// The configured credential, if one is usable.
    fn api_key(&self) -> Option<&Secret<String>> {
        self.config
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().is_empty())
    }
}

#[async_trait]
impl AnalysisProvider for AnthropicProvider {
    async fn analyze(&self, sermon_text: &str) -> Result<String, ProviderError> {
        // Checked before anything leaves the process so a missing credential
        // never triggers an outbound call.
        let api_key = self.api_key().ok_or_else(|| {
            ProviderError::NotConfigured("ANTHROPIC_API_KEY is not set".to_string())
        })?;

        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: build_analysis_prompt(sermon_text),
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            sermon_len = sermon_text.len(),
            "Sending request to Anthropic API"
        );

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();

            tracing::warn!(
                status,
                body = %error_text,
                "Anthropic API rejected the request"
            );

            return Err(ProviderError::UpstreamStatus(status));
        }

        let api_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &api_response.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens.unwrap_or(0),
                output_tokens = usage.output_tokens.unwrap_or(0),
                "Anthropic API usage"
            );
        }

        first_text_block(&api_response.content)
            .map(|text| text.to_string())
            .ok_or_else(|| ProviderError::ApiError("Response contained no text content".to_string()))
    }
}

/// Extract the first text segment of the response body.
fn first_text_block(content: &[ContentBlock]) -> Option<&str> {
    content.iter().find_map(|block| match block {
        ContentBlock::Text { text } => Some(text.as_str()),
        ContentBlock::Other(_) => None,
    })
}

// ============================================================================
// Anthropic API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: i32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentBlock {
    Text { text: String },
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    input_tokens: Option<i32>,
    output_tokens: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_before_any_network_call() {
        let provider = AnthropicProvider::new(AnthropicConfig {
            api_key: None,
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 16,
        });

        let err = provider.analyze("A short sermon.").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn empty_key_fails_before_any_network_call() {
        let provider = AnthropicProvider::new(AnthropicConfig {
            api_key: Some(Secret::new(String::new())),
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 16,
        });

        let err = provider.analyze("A short sermon.").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[test]
    fn first_text_block_is_extracted() {
        let body = r#"{
            "content": [
                {"type": "text", "text": "Strong opening, clear thesis."}
            ],
            "usage": {"input_tokens": 120, "output_tokens": 45}
        }"#;

        let response: MessagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            first_text_block(&response.content),
            Some("Strong opening, clear thesis.")
        );
        assert_eq!(response.usage.unwrap().input_tokens, Some(120));
    }

    #[test]
    fn non_text_blocks_are_skipped() {
        let body = r#"{
            "content": [
                {"type": "tool_use", "id": "t1", "name": "lookup", "input": {}},
                {"type": "text", "text": "Feedback here."}
            ]
        }"#;

        let response: MessagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(first_text_block(&response.content), Some("Feedback here."));
    }

    #[test]
    fn empty_content_yields_none() {
        let response: MessagesResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert_eq!(first_text_block(&response.content), None);
    }
}
