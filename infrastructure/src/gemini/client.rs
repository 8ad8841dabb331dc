//! Gemini REST client implementing the [`ModelInvoker`] port.
//!
//! Each invocation walks a candidate list (see [`ModelSelector`]) until one
//! model answers. The reply text is decoded with [`ModelOutput::from_text`],
//! so empty or non-JSON replies come back as degraded output rather than
//! errors.

use super::error::{GeminiError, Result};
use super::protocol::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, ListModelsResponse,
};
use super::selection::ModelSelector;
use crate::config::{FileGeminiConfig, FileModelsConfig};
use async_trait::async_trait;
use chartroom_application::{InvokeError, ModelInvoker};
use chartroom_domain::{Model, ModelOutput};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiInvoker {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    selector: ModelSelector,
    /// Served model names, fetched once; empty when the listing failed
    available: OnceCell<Vec<String>>,
}

impl GeminiInvoker {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: crate::config::DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key: api_key.into(),
            selector: ModelSelector::default(),
            available: OnceCell::new(),
        }
    }

    /// Build from the `[gemini]` and `[models]` sections.
    ///
    /// Fails when no API key can be resolved.
    pub fn from_config(gemini: &FileGeminiConfig, models: &FileModelsConfig) -> Result<Self> {
        let api_key = gemini
            .resolve_api_key()
            .ok_or_else(|| GeminiError::MissingApiKey(gemini.api_key_env.clone()))?;
        let selector = ModelSelector::new(
            models.parse_fallbacks().0,
            models.aliases.clone(),
        );
        Ok(Self::new(api_key)
            .with_base_url(&gemini.base_url)
            .with_selector(selector))
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn with_selector(mut self, selector: ModelSelector) -> Self {
        self.selector = selector;
        self
    }

    async fn available_models(&self) -> &[String] {
        self.available
            .get_or_init(|| async {
                match self.list_models().await {
                    Ok(names) => {
                        info!("Gemini serves {} models", names.len());
                        names
                    }
                    Err(e) => {
                        warn!("Could not list Gemini models, using requested names: {}", e);
                        Vec::new()
                    }
                }
            })
            .await
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/v1beta/models?pageSize=1000", self.base_url);
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let listing: ListModelsResponse = Self::check(response).await?.json().await?;
        Ok(listing.short_names())
    }

    async fn generate(&self, model: &str, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::json(system, user))
            .send()
            .await?;
        let body: GenerateContentResponse = Self::check(response).await?.json().await?;
        Ok(body.text())
    }

    /// Turn non-2xx responses into [`GeminiError::Api`]
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|body| body.error.message)
            .unwrap_or(text);
        Err(GeminiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ModelInvoker for GeminiInvoker {
    async fn invoke(
        &self,
        model: &Model,
        system_instruction: &str,
        user_prompt: &str,
    ) -> std::result::Result<ModelOutput, InvokeError> {
        let available = self.available_models().await;
        let candidates = self.selector.candidates(model.as_str(), available);
        debug!("Model {} candidates: {:?}", model, candidates);

        let mut last_error = None;
        for candidate in &candidates {
            match self.generate(candidate, system_instruction, user_prompt).await {
                Ok(text) => {
                    if candidate != model.as_str() {
                        debug!("Model {} served by {}", model, candidate);
                    }
                    return Ok(ModelOutput::from_text(text.trim()));
                }
                Err(e) => {
                    warn!("Gemini model {} failed: {}", candidate, e);
                    last_error = Some((candidate.clone(), e));
                }
            }
        }

        Err(match last_error {
            Some((candidate, e)) => InvokeError::unavailable(candidate, e.to_string()),
            None => InvokeError::unavailable(model.as_str(), "no candidate models"),
        })
    }
}
