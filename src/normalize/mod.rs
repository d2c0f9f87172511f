use serde_json::{Map, Value};

use crate::wire::{
    default_description, CampaignPlan, Creator, CreatorCategory, DEFAULT_AVERAGE_VIEWS,
    DEFAULT_BUDGET_FIT, DEFAULT_CAMPAIGN_NAME, DEFAULT_CATEGORY_NAME, DEFAULT_CHANNEL_URL,
    DEFAULT_CREATOR_NAME, DEFAULT_SUBSCRIBERS, MAX_LIST_ITEMS,
};

/// Builds the canonical plan from any raw object. Every field is checked on
/// its own; a missing or mistyped field becomes its default, malformed
/// entries are dropped. `raw` is never modified.
pub fn normalize(raw: &Value) -> CampaignPlan {
    let mut creator_categories = categories(raw.get("creatorCategories"));

    if creator_categories.is_empty() {
        if let Some(legacy) = legacy_category(raw.get("recommendedCreators")) {
            tracing::info!("converting flat recommendedCreators into a category");
            creator_categories.push(legacy);
        }
    }

    let plan = CampaignPlan {
        campaign_name: text(raw.get("campaignName"))
            .unwrap_or(DEFAULT_CAMPAIGN_NAME)
            .to_string(),
        video_ideas: string_list(raw.get("videoIdeas")),
        tracking_metrics: string_list(raw.get("trackingMetrics")),
        keys_to_success: string_list(raw.get("keysToSuccess")),
        creator_categories,
    };

    tracing::info!(
        campaign_name = %plan.campaign_name,
        video_ideas = plan.video_ideas.len(),
        tracking_metrics = plan.tracking_metrics.len(),
        keys_to_success = plan.keys_to_success.len(),
        categories = plan.creator_categories.len(),
        creators = plan.total_creators(),
        "normalized campaign plan"
    );
    plan
}

/// A usable string: present, string-typed, not blank.
fn text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| text(Some(item)))
        .take(MAX_LIST_ITEMS)
        .map(str::to_string)
        .collect()
}

fn objects(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

fn categories(value: Option<&Value>) -> Vec<CreatorCategory> {
    objects(value)
        .map(|category| CreatorCategory {
            category_name: text(category.get("categoryName"))
                .unwrap_or(DEFAULT_CATEGORY_NAME)
                .to_string(),
            creators: objects(category.get("creators"))
                .map(|c| creator(c, None))
                .collect(),
        })
        .filter(|category| !category.creators.is_empty())
        .collect()
}

/// The pre-category shape: a flat creator array, never carrying a budget fit.
fn legacy_category(value: Option<&Value>) -> Option<CreatorCategory> {
    let creators: Vec<Creator> = objects(value)
        .map(|c| creator(c, Some(DEFAULT_BUDGET_FIT)))
        .collect();
    if creators.is_empty() {
        return None;
    }
    Some(CreatorCategory {
        category_name: DEFAULT_CATEGORY_NAME.to_string(),
        creators,
    })
}

fn field<'a>(raw: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    text(raw.get(key))
}

fn creator(raw: &Map<String, Value>, forced_fit: Option<&str>) -> Creator {
    let name = field(raw, "name").unwrap_or(DEFAULT_CREATOR_NAME).to_string();
    let description = field(raw, "description")
        .map(str::to_string)
        .unwrap_or_else(|| default_description(&name));
    let budget_fit = forced_fit
        .or_else(|| field(raw, "budgetFit"))
        .unwrap_or(DEFAULT_BUDGET_FIT);

    Creator {
        description,
        channel_url: field(raw, "channelUrl").unwrap_or(DEFAULT_CHANNEL_URL).to_string(),
        subscribers: field(raw, "subscribers").unwrap_or(DEFAULT_SUBSCRIBERS).to_string(),
        average_views: field(raw, "averageViews").unwrap_or(DEFAULT_AVERAGE_VIEWS).to_string(),
        budget_fit: budget_fit.to_string(),
        name,
    }
}
