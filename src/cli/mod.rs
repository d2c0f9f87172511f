use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::wire::CampaignRequest;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "google")]
    Gemini,
    #[value(name = "openai", alias = "open-ai")]
    OpenAI,
    Ollama,
}

impl ProviderKind {
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAI => "openai",
            ProviderKind::Ollama => "ollama",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-2.0-flash",
            ProviderKind::OpenAI => "gpt-4.1-mini",
            ProviderKind::Ollama => "llama3.1",
        }
    }

    pub fn needs_api_key(self) -> bool {
        !matches!(self, ProviderKind::Ollama)
    }
}

#[derive(Parser, Debug)]
#[command(name = "campaign_planner", version, about = "Plans YouTube creator marketing campaigns")]
pub struct Args {
    /// What the campaign should achieve.
    #[arg(long)]
    pub goals: String,

    #[arg(long)]
    pub audience: Option<String>,

    /// Preferred creator traits, niches or channels.
    #[arg(long)]
    pub creator_details: Option<String>,

    #[arg(long, default_value = "")]
    pub budget: String,

    #[arg(long, default_value = "")]
    pub timeline: String,

    /// Product page; analysed before planning.
    #[arg(long)]
    pub product_url: Option<String>,

    #[arg(long)]
    pub root: Option<String>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    /// Skip the model and synthesise a plan.
    #[arg(long, default_value_t = false)]
    pub mock: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Parse a captured model response instead of calling a provider.
    #[arg(long)]
    pub response_file: Option<String>,

    /// Print the canonical plan as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub save_prompt: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub save_plan: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub progress: bool,

    #[arg(long)]
    pub config: Option<String>,
}

impl Args {
    /// Flags win over file and environment settings.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(root) = &self.root {
            cfg.root = root.clone();
        }
        if let Some(provider) = self.provider {
            if provider != cfg.provider {
                cfg.model = None;
            }
            cfg.provider = provider;
        }
        if let Some(model) = &self.model {
            cfg.model = Some(model.clone());
        }
        if let Some(secs) = self.timeout_secs {
            cfg.timeout_secs = secs;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        cfg.force_mock |= self.mock;
    }

    pub fn request(&self) -> CampaignRequest {
        CampaignRequest {
            campaign_goals: self.goals.clone(),
            target_audience: self.audience.clone(),
            creator_details: self.creator_details.clone(),
            campaign_budget: self.budget.clone(),
            timeline: self.timeline.clone(),
            product_info: self.product_url.clone(),
            product_analysis: None,
        }
    }

    pub fn saves_anything(&self) -> bool {
        self.save_prompt || self.save_response || self.save_plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "campaign_planner",
            "--goals", "Sell more",
            "--provider", "openai",
            "--mock",
            "--seed", "9",
        ]);
        let mut cfg = Config { model: Some("gemini-pro".into()), ..Config::default() };
        args.apply(&mut cfg);
        assert_eq!(cfg.provider, ProviderKind::OpenAI);
        assert_eq!(cfg.model(), "gpt-4.1-mini");
        assert!(cfg.force_mock);
        assert_eq!(cfg.seed, Some(9));
    }

    #[test]
    fn builds_request() {
        let args = Args::parse_from([
            "campaign_planner",
            "--goals", "Launch",
            "--budget", "$5,000",
            "--product-url", "https://example.com/p",
        ]);
        let req = args.request();
        assert_eq!(req.campaign_goals, "Launch");
        assert_eq!(req.campaign_budget, "$5,000");
        assert_eq!(req.product_info.as_deref(), Some("https://example.com/p"));
        assert!(req.target_audience.is_none());
        assert!(args.progress);
    }
}
