use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::errors::PlannerError;

/// OpenAI chat completions, sending the prompt as a single user message.
pub struct OpenAIProvider {
    model: String,
    api_key: String,
    client: Client,
    timeout_secs: u64,
}

impl OpenAIProvider {
    pub fn new(model: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            model,
            api_key,
            client: Client::new(),
            timeout_secs,
        }
    }
}

#[async_trait]
impl super::Provider for OpenAIProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.1,
            "response_format": { "type": "json_object" }
        });
        tracing::debug!(model = %self.model, "POST /v1/chat/completions");

        let resp = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(%status, bytes = text.len(), "openai responded");

        if !status.is_success() {
            return Err(PlannerError::Provider(format!("OpenAI API error ({status}): {text}")).into());
        }

        #[derive(Deserialize)]
        struct ChatMessage {
            content: Option<String>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessage,
        }
        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse OpenAI response: {e}\nRaw: {text}"))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow!("OpenAI returned no message content"))
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
