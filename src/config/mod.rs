use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::ProviderKind;
use crate::errors::PlannerError;

pub const GOOGLE_KEY_VAR: &str = "GOOGLE_AI_API_KEY";
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";
pub const FORCE_MOCK_VAR: &str = "CAMPAIGN_FORCE_MOCK";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: String,
    pub provider: ProviderKind,
    /// Falls back to the provider's default model.
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub force_mock: bool,
    pub timeout_secs: u64,
    pub ollama_url: String,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            provider: ProviderKind::Gemini,
            model: None,
            api_key: None,
            force_mock: false,
            timeout_secs: 120,
            ollama_url: "http://localhost:11434".into(),
            seed: None,
        }
    }
}

impl Config {
    /// Defaults, overlaid by the TOML file when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self, PlannerError> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                let cfg: Config = toml::from_str(&text)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Ok(cfg)
            }
            None => Ok(Config::default()),
        }
    }

    /// Overlays environment settings read through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let key_var = match self.provider {
            ProviderKind::Gemini => Some(GOOGLE_KEY_VAR),
            ProviderKind::OpenAI => Some(OPENAI_KEY_VAR),
            ProviderKind::Ollama => None,
        };
        if let Some(key) = key_var.and_then(|name| var(name)).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if var(FORCE_MOCK_VAR).is_some_and(|v| v.trim().eq_ignore_ascii_case("true")) {
            self.force_mock = true;
        }
    }

    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn use_mock(&self) -> bool {
        self.force_mock || (self.provider.needs_api_key() && !self.has_api_key())
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.timeout_secs == 0 {
            return Err(PlannerError::Config("timeout_secs must be positive".into()));
        }
        if self.provider == ProviderKind::Ollama && url::Url::parse(&self.ollama_url).is_err() {
            return Err(PlannerError::Config(format!("invalid ollama_url: {}", self.ollama_url)));
        }
        Ok(())
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.force_mock {
            out.push("Mock mode is forced. No model calls will be made.".to_string());
        } else if self.provider.needs_api_key() && !self.has_api_key() {
            out.push("No API key provided. Mock mode will be used.".to_string());
        }
        out
    }
}
