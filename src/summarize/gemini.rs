//! Gemini-backed summarization client.
//!
//! Thin REST client for the `generateContent` endpoint. The caller treats
//! every error as a degradation signal, so this module only has to be
//! honest about failure, never resilient.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde_json::json;

use super::Summarize;
use crate::utils::constants::{DEFAULT_GEMINI_MODEL, GEMINI_ENDPOINT};

/// Client for the external summarization service.
#[derive(Debug, Clone)]
pub struct GeminiSummarizer {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl GeminiSummarizer {
    /// Create a client. Without an API key every call fails, which the
    /// caller resolves by falling back to the local heuristic.
    #[must_use]
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key,
            model: model.into(),
            endpoint: GEMINI_ENDPOINT.to_string(),
        }
    }

    /// Default model, key from configuration.
    #[must_use]
    pub fn with_default_model(api_key: Option<String>) -> Self {
        Self::new(api_key, DEFAULT_GEMINI_MODEL)
    }

    /// Override the service endpoint (tests point this at a local server).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_prompt(stories: &[String]) -> String {
        let stories_text = stories
            .iter()
            .enumerate()
            .map(|(i, story)| format!("Story {}: {}", i + 1, story))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "Based on the following patient stories and reviews about a doctor, provide a concise \
             2-line paragraph summary highlighting the key pros and cons, and overall recommendation.\n\n\
             Patient Stories:\n{stories_text}\n\n\
             Please provide exactly 2 lines as a natural paragraph (no \"Line 1:\" or \"Line 2:\" labels):\n\
             First line: Key strengths and positive aspects\n\
             Second line: Areas of concern (if any) and overall recommendation\n\n\
             Write as a natural flowing paragraph with just 2 lines."
        )
    }
}

impl Summarize for GeminiSummarizer {
    async fn summarize(&self, stories: &[String]) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("no summarization API key configured"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": Self::build_prompt(stories) }]
            }],
            "generationConfig": {
                "temperature": 0.7,
                "topP": 0.8,
                "topK": 40,
                "maxOutputTokens": 2048,
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("summarization request failed")?
            .error_for_status()
            .context("summarization service returned an error status")?;

        let payload: serde_json::Value = response
            .json()
            .await
            .context("failed to decode summarization response")?;

        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|value| value.as_str())
            .ok_or_else(|| anyhow!("summarization response carried no candidate text"))?;

        Ok(text.trim().to_string())
    }
}
