use std::time::Duration;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use crate::config::SummarySettings;
use crate::summary::Summarizer;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Summary backend talking to a local Ollama server.
pub struct OllamaSummarizer {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaSummarizer {
    pub fn new<S: Into<String>>(base_url: S, model: S, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(OllamaSummarizer {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    pub fn from_settings(settings: &SummarySettings) -> Result<Self> {
        OllamaSummarizer::new(settings.base_url.clone(), settings.model.clone(), settings.timeout())
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

impl Summarizer for OllamaSummarizer {
    fn name(&self) -> &str {
        &self.model
    }

    async fn summarize(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await
            .with_context(|| format!("Failed to connect to Ollama API for model '{}'", self.model))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Ollama returned error status {} for model '{}'", status, self.model);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to read response from model '{}'", self.model))?;

        let text = body.response.trim();
        if text.is_empty() {
            anyhow::bail!("Model '{}' returned empty response", self.model);
        }
        Ok(text.to_string())
    }
}
