//! Anthropic Messages API client used in generative mode

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clients::traits::{ClientError, GenerationClient};
use crate::config::GenerationConfig;

pub const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, config: &GenerationConfig) -> Result<Self, ClientError> {
        // No request timeout here: the transport in front of the service owns that.
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl GenerationClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        debug!(
            "Requesting page from Anthropic (model={}, prompt_chars={})",
            self.model,
            prompt.len()
        );

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::UnexpectedContent(format!("unreadable body: {e}")))?;

        parsed
            .content
            .into_iter()
            .find_map(|block| match block.kind.as_str() {
                "text" => block.text,
                _ => None,
            })
            .ok_or_else(|| ClientError::UnexpectedContent("no text content block".to_string()))
    }

    fn model(&self) -> &str {
        &self.model
    }
}
