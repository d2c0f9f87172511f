use serde::{Deserialize, Serialize};

/// ========================================
/// Campaign plan wire shape
/// ========================================

pub const DEFAULT_CAMPAIGN_NAME: &str = "YouTube Creator Campaign";
pub const DEFAULT_CATEGORY_NAME: &str = "Recommended Creators";
pub const DEFAULT_CREATOR_NAME: &str = "Unknown Creator";
pub const DEFAULT_CHANNEL_URL: &str = "https://youtube.com";
pub const DEFAULT_SUBSCRIBERS: &str = "500K subscribers";
pub const DEFAULT_AVERAGE_VIEWS: &str = "150K";
pub const DEFAULT_BUDGET_FIT: &str = "Medium fit";

/// Upper bound for every list field of a plan.
pub const MAX_LIST_ITEMS: usize = 5;

/// Filler used whenever a creator arrives without a description.
pub fn default_description(name: &str) -> String {
    format!("{name} creates content that aligns well with your campaign goals.")
}

/// Channel URL derived from a creator name: lower-cased, whitespace removed.
pub fn channel_url_for(name: &str) -> String {
    let handle: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("https://youtube.com/c/{handle}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    pub description: String,
    pub channel_url: String,
    pub subscribers: String,
    pub average_views: String,
    pub budget_fit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorCategory {
    pub category_name: String,
    pub creators: Vec<Creator>,
}

/// Canonical output of every producer (model pipeline or mock generator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPlan {
    pub campaign_name: String,
    pub video_ideas: Vec<String>,
    pub tracking_metrics: Vec<String>,
    pub keys_to_success: Vec<String>,
    pub creator_categories: Vec<CreatorCategory>,
}

impl Default for CampaignPlan {
    fn default() -> Self {
        Self {
            campaign_name: DEFAULT_CAMPAIGN_NAME.to_string(),
            video_ideas: Vec::new(),
            tracking_metrics: Vec::new(),
            keys_to_success: Vec::new(),
            creator_categories: Vec::new(),
        }
    }
}

impl CampaignPlan {
    pub fn total_creators(&self) -> usize {
        self.creator_categories.iter().map(|c| c.creators.len()).sum()
    }
}

/// Campaign details as entered by the merchant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub campaign_goals: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_details: Option<String>,
    pub campaign_budget: String,
    pub timeline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_analysis: Option<ProductAnalysis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Model,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedCreator {
    pub name: String,
    pub description: String,
    pub subscribers: String,
    pub channel_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedInfo {
    pub category: String,
    pub estimated_price: String,
    pub target_demographic: String,
    pub key_features: Vec<String>,
    pub recommended_creator_types: Vec<String>,
    pub suggested_content_styles: Vec<String>,
    #[serde(default)]
    pub recommended_creators: Vec<AnalyzedCreator>,
}

/// What we know about the product behind the campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysis {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub analysis_source: AnalysisSource,
    pub extracted_info: ExtractedInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_url_strips_whitespace_and_lowercases() {
        assert_eq!(channel_url_for("Tech Daily  Show"), "https://youtube.com/c/techdailyshow");
    }

    #[test]
    fn plan_serializes_with_camel_case_keys() {
        let plan = CampaignPlan {
            campaign_name: "Glow".into(),
            video_ideas: vec!["Unboxing the glow kit".into()],
            ..CampaignPlan::default()
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["campaignName"], "Glow");
        assert_eq!(value["videoIdeas"][0], "Unboxing the glow kit");
    }

    #[test]
    fn default_plan_has_default_name_and_no_creators() {
        let plan = CampaignPlan::default();
        assert_eq!(plan.campaign_name, DEFAULT_CAMPAIGN_NAME);
        assert_eq!(plan.total_creators(), 0);
    }
}
