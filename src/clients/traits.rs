use async_trait::async_trait;
use thiserror::Error;

/// Ways a single call to the text-generation service can fail
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("api error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected response content: {0}")]
    UnexpectedContent(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// One request to an external text-generation service, raw text back.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}
