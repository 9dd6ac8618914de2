use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::RankingSettings;
use crate::models::Profile;
use crate::services::prompt::{build_prompt, parse_ranking_text};
use crate::services::ranking::{RankingService, RankingServiceError};

/// Client for the Anthropic Messages API, used as the AI ranker.
///
/// Makes exactly one request per batch. The request timeout is enforced by the
/// underlying HTTP client; a slow answer is reported like any other failure.
pub struct AnthropicRanker {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    api_version: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicRanker {
    /// Create a new ranker from settings.
    ///
    /// A disabled ranker or an empty key leaves the client without a
    /// credential, so every batch falls back to heuristic scoring.
    pub fn new(settings: &RankingSettings) -> Result<Self, RankingServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        let api_key = settings
            .api_key
            .clone()
            .filter(|key| settings.enabled && !key.trim().is_empty());

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key,
            api_version: settings.api_version.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl RankingService for AnthropicRanker {
    async fn rank_batch(&self, viewer: &Profile, candidates: &[Profile]) -> Result<Vec<Value>, RankingServiceError> {
        let api_key = self.api_key.as_deref().ok_or(RankingServiceError::MissingCredential)?;

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_prompt(viewer, candidates)?;
        let url = format!("{}/v1/messages", self.endpoint.trim_end_matches('/'));

        tracing::debug!("Requesting AI ranking for {} candidates from {}", candidates.len(), self.model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(&MessagesRequest {
                model: &self.model,
                max_tokens: self.max_tokens,
                messages: vec![Message {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(RankingServiceError::ApiError { status, body });
        }

        let body: MessagesResponse = response.json().await?;
        let text = body
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or(RankingServiceError::EmptyResponse)?;

        parse_ranking_text(&text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
