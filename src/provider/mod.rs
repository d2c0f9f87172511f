use anyhow::Result;
use async_trait::async_trait;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::errors::PlannerError;

pub mod gemini;
pub mod ollama;
pub mod openai;
pub mod replay;

/// A model backend: prompt in, raw response text out.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(cfg: &Config) -> Result<DynProvider> {
    let model = cfg.model();
    let key = || {
        cfg.api_key
            .clone()
            .ok_or(PlannerError::MissingApiKey(cfg.provider.name()))
    };
    match cfg.provider {
        ProviderKind::Gemini => Ok(Box::new(gemini::GeminiProvider::new(
            model,
            key()?,
            cfg.timeout_secs,
        ))),
        ProviderKind::OpenAI => Ok(Box::new(openai::OpenAIProvider::new(
            model,
            key()?,
            cfg.timeout_secs,
        ))),
        ProviderKind::Ollama => Ok(Box::new(ollama::Ollama::new(
            model,
            cfg.ollama_url.clone(),
            cfg.timeout_secs,
        ))),
    }
}
