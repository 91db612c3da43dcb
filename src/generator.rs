//! Page generation: template mode or generative mode, chosen by configuration.

use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{AnthropicClient, ClientError, GenerationClient};
use crate::config::Config;
use crate::error::{FailureKind, GenerationError};
use crate::form::{FormData, GeneratedPage};
use crate::palette::accent_color;
use crate::prompts::build_page_prompt;
use crate::template::render_page;
use crate::validator::parse_page_response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Deterministic template, no external calls
    Template,
    /// Copy written by the external text-generation service
    Generative,
}

/// Stateless across calls; clone freely and share between requests.
#[derive(Clone)]
pub struct PageGenerator {
    client: Option<Arc<dyn GenerationClient>>,
}

impl PageGenerator {
    pub fn new(client: Option<Arc<dyn GenerationClient>>) -> Self {
        Self { client }
    }

    pub fn template_only() -> Self {
        Self { client: None }
    }

    /// Generative mode only when an API key is configured
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = match &config.runtime.anthropic_api_key {
            Some(key) => {
                let client = AnthropicClient::new(key.clone(), &config.generation)?;
                Some(Arc::new(client) as Arc<dyn GenerationClient>)
            }
            None => None,
        };
        Ok(Self { client })
    }

    pub fn mode(&self) -> GenerationMode {
        if self.client.is_some() {
            GenerationMode::Generative
        } else {
            GenerationMode::Template
        }
    }

    /// Produce a page for `data`. All-or-nothing: no partial result on failure.
    pub async fn generate(&self, data: &FormData) -> Result<GeneratedPage, GenerationError> {
        let accent = accent_color(&data.industry);

        let Some(client) = &self.client else {
            info!("No API key configured, returning template page");
            return Ok(render_page(data, accent));
        };

        let prompt = build_page_prompt(data, accent, data.tone.description());
        info!(
            "Generating page for '{}' (model={}, accent={}, tone={})",
            data.business_name,
            client.model(),
            accent,
            data.tone
        );

        let raw = client.complete(&prompt).await.map_err(|e| {
            error!("Generation call failed: {}", e);
            GenerationError::from(FailureKind::ExternalCall(e))
        })?;

        parse_page_response(&raw).map_err(|e| {
            error!("Failed to parse model response ({}): {}", e, e.raw());
            GenerationError::from(FailureKind::MalformedResponse(e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Tone;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedClient {
        reply: std::result::Result<String, fn() -> ClientError>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl GenerationClient for CannedClient {
        async fn complete(&self, prompt: &str) -> std::result::Result<String, ClientError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }

        fn model(&self) -> &str {
            "canned"
        }
    }

    fn canned(reply: std::result::Result<String, fn() -> ClientError>) -> Arc<CannedClient> {
        Arc::new(CannedClient {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn sample(industry: &str) -> FormData {
        FormData {
            business_name: "Northwind".into(),
            industry: industry.into(),
            target_audience: "Small offices".into(),
            problem_solved: "Messy books".into(),
            key_benefits: "Accurate, Fast, Friendly".into(),
            call_to_action: "Call now".into(),
            tone: Tone::Professional,
        }
    }

    #[tokio::test]
    async fn test_template_mode_uses_default_accent() {
        let generator = PageGenerator::template_only();
        assert_eq!(generator.mode(), GenerationMode::Template);

        let page = generator.generate(&sample("Random Industry")).await.unwrap();
        assert_eq!(page.css.matches("#3b82f6").count(), 7);
        assert!(page.html.contains("Northwind"));
    }

    #[tokio::test]
    async fn test_generative_mode_sends_prompt_and_validates() {
        let client = canned(Ok(
            r#"Here you go: {"html":"<h1>Northwind</h1>","css":"h1{color:#0ea5e9}"}"#.to_string(),
        ));
        let generator = PageGenerator::new(Some(client.clone() as Arc<dyn GenerationClient>));
        assert_eq!(generator.mode(), GenerationMode::Generative);

        let page = generator.generate(&sample("Accounting")).await.unwrap();
        assert_eq!(page.html, "<h1>Northwind</h1>");

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Accent Color: #0ea5e9"));
        assert!(prompts[0].contains("trustworthy, polished, and authoritative"));
    }

    #[tokio::test]
    async fn test_external_failure_is_wrapped() {
        let client = canned(Err(|| ClientError::Api {
            status: 529,
            body: "overloaded".into(),
        }));
        let err = PageGenerator::new(Some(client.clone() as Arc<dyn GenerationClient>))
            .generate(&sample("Tech"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate page");
        assert!(matches!(
            err.cause(),
            FailureKind::ExternalCall(ClientError::Api { status: 529, .. })
        ));
        // No automatic retry.
        assert_eq!(client.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_response_is_wrapped() {
        let client = canned(Ok(r#"{"html":"x"}"#.to_string()));
        let err = PageGenerator::new(Some(client as Arc<dyn GenerationClient>))
            .generate(&sample("Tech"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate page");
        assert!(matches!(err.cause(), FailureKind::MalformedResponse(_)));
    }

    #[test]
    fn test_from_config_selects_mode_by_credential() {
        let mut config = Config::default();
        assert_eq!(
            PageGenerator::from_config(&config).unwrap().mode(),
            GenerationMode::Template
        );

        config.runtime.anthropic_api_key = Some("sk-ant-test".into());
        assert_eq!(
            PageGenerator::from_config(&config).unwrap().mode(),
            GenerationMode::Generative
        );
    }
}
