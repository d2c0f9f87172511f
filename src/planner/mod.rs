//! Ties the pipeline together: prompt, model call, parse, normalize, with the
//! mock generator standing in whenever there is no usable model.

use crate::analysis::{mock_product_analysis, parse_product_analysis};
use crate::mock::MockGenerator;
use crate::normalize::normalize;
use crate::parse::{parse_response_staged, ParseStage};
use crate::prompt::{campaign_prompt, product_analysis_prompt};
use crate::provider::DynProvider;
use crate::wire::{CampaignPlan, CampaignRequest, ProductAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Model,
    Mock,
    /// The model call failed and the plan was synthesised instead.
    MockFallback,
}

impl PlanSource {
    pub fn label(self) -> &'static str {
        match self {
            PlanSource::Model => "model",
            PlanSource::Mock => "mock",
            PlanSource::MockFallback => "mock (model call failed)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan: CampaignPlan,
    pub source: PlanSource,
    pub prompt: String,
    /// Raw model text; `None` when no model answered.
    pub response: Option<String>,
    pub stage: Option<ParseStage>,
}

pub struct CampaignPlanner {
    provider: Option<DynProvider>,
    mock: MockGenerator,
}

impl CampaignPlanner {
    pub fn new(provider: Option<DynProvider>, seed: Option<u64>) -> Self {
        Self {
            provider,
            mock: MockGenerator::new(seed),
        }
    }

    /// Planner that never calls a model.
    pub fn mock_only(seed: Option<u64>) -> Self {
        Self::new(None, seed)
    }

    pub fn uses_model(&self) -> bool {
        self.provider.is_some()
    }

    /// Product analysis for `url`, from the model when there is one.
    pub async fn analyze_product(&self, url: &str) -> ProductAnalysis {
        let Some(provider) = &self.provider else {
            tracing::info!(url, "analysing product from URL keywords");
            return mock_product_analysis(url);
        };
        match provider.generate(&product_analysis_prompt(url)).await {
            Ok(text) => parse_product_analysis(url, &text),
            Err(e) => {
                tracing::warn!(error = %e, provider = provider.name(), "product analysis failed; using URL keywords");
                mock_product_analysis(url)
            }
        }
    }

    pub async fn generate(&mut self, request: &CampaignRequest) -> PlanOutcome {
        let prompt = campaign_prompt(request);

        let Some(provider) = &self.provider else {
            return PlanOutcome {
                plan: self.mock.generate(request),
                source: PlanSource::Mock,
                prompt,
                response: None,
                stage: None,
            };
        };

        tracing::info!(provider = provider.name(), "requesting campaign plan");
        match provider.generate(&prompt).await {
            Ok(text) => {
                let (raw, stage) = parse_response_staged(&text);
                tracing::info!(?stage, "model response parsed");
                PlanOutcome {
                    plan: normalize(&raw),
                    source: PlanSource::Model,
                    prompt,
                    response: Some(text),
                    stage: Some(stage),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, provider = provider.name(), "model call failed; falling back to mock plan");
                PlanOutcome {
                    plan: self.mock.generate(request),
                    source: PlanSource::MockFallback,
                    prompt,
                    response: None,
                    stage: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;
    use async_trait::async_trait;

    struct Canned(&'static str);

    #[async_trait]
    impl Provider for Canned {
        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    struct Failing;

    #[async_trait]
    impl Provider for Failing {
        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("connection refused"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn boxed(provider: impl Provider + 'static) -> Option<DynProvider> {
        let provider: DynProvider = Box::new(provider);
        Some(provider)
    }

    fn request() -> CampaignRequest {
        CampaignRequest {
            campaign_goals: "Grow sign-ups for a budgeting app".into(),
            campaign_budget: "$10,000 - $20,000".into(),
            timeline: "2 months".into(),
            ..CampaignRequest::default()
        }
    }

    #[tokio::test]
    async fn model_answer_is_parsed_and_normalized() {
        let mut planner = CampaignPlanner::new(
            boxed(Canned(r#"```json
{"campaignName": "Budget Boss", "videoIdeas": ["Month one diary"],
 "recommendedCreators": [{"name": "Penny Wise"}]}
```"#)),
            None,
        );
        let outcome = planner.generate(&request()).await;
        assert_eq!(outcome.source, PlanSource::Model);
        assert_eq!(outcome.stage, Some(ParseStage::StrictJson));
        assert_eq!(outcome.plan.campaign_name, "Budget Boss");
        assert_eq!(outcome.plan.creator_categories[0].creators[0].name, "Penny Wise");
        assert!(outcome.response.is_some());
        assert!(outcome.prompt.contains("Grow sign-ups"));
    }

    #[tokio::test]
    async fn prose_answer_goes_through_extraction() {
        let mut planner = CampaignPlanner::new(
            boxed(Canned("Campaign Name: Save Smart\n\nVideo Ideas:\n- Paycheck to savings walkthrough\n")),
            None,
        );
        let outcome = planner.generate(&request()).await;
        assert_eq!(outcome.stage, Some(ParseStage::TextExtraction));
        assert_eq!(outcome.plan.campaign_name, "Save Smart");
        assert_eq!(outcome.plan.video_ideas, vec!["Paycheck to savings walkthrough"]);
    }

    #[tokio::test]
    async fn provider_error_falls_back_to_mock() {
        let mut planner = CampaignPlanner::new(boxed(Failing), Some(1));
        let outcome = planner.generate(&request()).await;
        assert_eq!(outcome.source, PlanSource::MockFallback);
        assert!(outcome.response.is_none());
        assert_eq!(outcome.plan.video_ideas.len(), 5);
    }

    #[tokio::test]
    async fn no_provider_means_mock() {
        let mut planner = CampaignPlanner::mock_only(Some(2));
        assert!(!planner.uses_model());
        let outcome = planner.generate(&request()).await;
        assert_eq!(outcome.source, PlanSource::Mock);
        assert!(outcome.plan.creator_categories.len() >= 3);
    }

    #[tokio::test]
    async fn product_analysis_paths() {
        let planner = CampaignPlanner::mock_only(None);
        let mocked = planner.analyze_product("https://gadgetworld.com/phone").await;
        assert_eq!(mocked.extracted_info.category, "electronics");

        let planner = CampaignPlanner::new(boxed(Failing), None);
        let fallback = planner.analyze_product("https://example.com/blender").await;
        assert_eq!(fallback.extracted_info.category, "unknown");

        let planner = CampaignPlanner::new(
            boxed(Canned(r#"{"category": "Audio", "keyFeatures": ["Noise cancelling"]}"#)),
            None,
        );
        let modelled = planner.analyze_product("https://example.com/headphones").await;
        assert_eq!(modelled.extracted_info.category, "Audio");
    }
}
