use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::errors::PlannerError;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Generative Language `generateContent`, asking for a JSON body.
pub struct GeminiProvider {
    model: String,
    api_key: String,
    client: Client,
    timeout_secs: u64,
}

impl GeminiProvider {
    pub fn new(model: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            model,
            api_key,
            client: Client::new(),
            timeout_secs,
        }
    }
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

fn request_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [
            { "role": "user", "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "temperature": 0.1,
            "topP": 0.95,
            "topK": 32,
            "maxOutputTokens": 8192,
            "responseMimeType": "application/json"
        },
        "safetySettings": [
            { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_ONLY_HIGH" }
        ]
    })
}

/// Concatenated text parts of the first candidate.
fn response_text(body: &str) -> Result<String> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| anyhow!("Failed to parse Gemini response: {e}\nRaw: {body}"))?;
    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(anyhow!("Gemini returned no text"));
    }
    Ok(text)
}

#[async_trait]
impl super::Provider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = request_body(prompt);
        tracing::debug!(model = %self.model, "POST {url}");

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await
            .context("gemini request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("gemini read body failed")?;
        tracing::debug!(%status, bytes = text.len(), "gemini responded");

        if !status.is_success() {
            return Err(PlannerError::Provider(format!("Gemini API error ({status}): {text}")).into());
        }
        response_text(&text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
