//! Best-effort plan skeleton from prose. Output feeds `normalize`, never the
//! caller directly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::categories::extract_creator_categories;
use super::creators::extract_creators_from_text;
use super::list::extract_list_items;
use crate::wire::{CreatorCategory, DEFAULT_CAMPAIGN_NAME, DEFAULT_CATEGORY_NAME, MAX_LIST_ITEMS};

fn section_patterns(sources: &[&str]) -> Vec<Regex> {
    sources.iter().map(|s| Regex::new(s).unwrap()).collect()
}

static VIDEO_IDEAS: Lazy<Vec<Regex>> = Lazy::new(|| {
    section_patterns(&[
        r"(?is)video ideas?:?(.*?)(?:tracking|measurement|metrics|keys|success|creators|$)",
        r"(?is)content recommendations?:?(.*?)(?:tracking|measurement|metrics|keys|success|creators|$)",
    ])
});

static TRACKING_METRICS: Lazy<Vec<Regex>> = Lazy::new(|| {
    section_patterns(&[
        r"(?is)tracking metrics:?(.*?)(?:keys|success|creators|$)",
        r"(?is)measurement metrics:?(.*?)(?:keys|success|creators|$)",
        r"(?is)metrics:?(.*?)(?:keys|success|creators|$)",
    ])
});

static KEYS_TO_SUCCESS: Lazy<Vec<Regex>> = Lazy::new(|| {
    section_patterns(&[
        r"(?is)keys to success:?(.*?)(?:recommended|creators|$)",
        r"(?is)key recommendations:?(.*?)(?:recommended|creators|$)",
        r"(?is)tips for success:?(.*?)(?:recommended|creators|$)",
    ])
});

static CAMPAIGN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)campaign name:?\s*([^\n]+)").unwrap());

/// Plan fields recovered from unstructured text; lists may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialPlan {
    pub campaign_name: String,
    pub video_ideas: Vec<String>,
    pub tracking_metrics: Vec<String>,
    pub keys_to_success: Vec<String>,
    pub creator_categories: Vec<CreatorCategory>,
}

impl From<PartialPlan> for Value {
    fn from(plan: PartialPlan) -> Self {
        serde_json::to_value(plan).unwrap_or_default()
    }
}

pub fn extract_structured_data(text: &str) -> PartialPlan {
    let mut creator_categories = extract_creator_categories(text);
    if creator_categories.is_empty() {
        let creators = extract_creators_from_text(text);
        if !creators.is_empty() {
            creator_categories.push(CreatorCategory {
                category_name: DEFAULT_CATEGORY_NAME.to_string(),
                creators,
            });
        }
    }

    let plan = PartialPlan {
        campaign_name: campaign_name(text),
        video_ideas: first_listed_section(&VIDEO_IDEAS, text),
        tracking_metrics: first_listed_section(&TRACKING_METRICS, text),
        keys_to_success: first_listed_section(&KEYS_TO_SUCCESS, text),
        creator_categories,
    };

    tracing::info!(
        campaign_name = %plan.campaign_name,
        video_ideas = plan.video_ideas.len(),
        tracking_metrics = plan.tracking_metrics.len(),
        keys_to_success = plan.keys_to_success.len(),
        categories = plan.creator_categories.len(),
        "extracted structured data from text"
    );
    plan
}

/// First pattern whose section body yields at least one list item.
fn first_listed_section(patterns: &[Regex], text: &str) -> Vec<String> {
    patterns
        .iter()
        .filter_map(|re| re.captures(text).and_then(|c| c.get(1)))
        .map(|body| extract_list_items(body.as_str(), MAX_LIST_ITEMS))
        .find(|items| !items.is_empty())
        .unwrap_or_default()
}

fn campaign_name(text: &str) -> String {
    CAMPAIGN_NAME
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_matches(|c: char| matches!(c, '*' | '"') || c.is_whitespace()))
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CAMPAIGN_NAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "Here is your plan.\n\
\n\
Campaign Name: **Summer Glow Sprint**\n\
\n\
Video Ideas:\n\
1. Morning routine featuring the serum\n\
2. Thirty day skin diary\n\
3. Dermatologist reacts to the formula\n\
\n\
Tracking Metrics:\n\
- Promo code redemptions\n\
- Average watch time\n\
\n\
Keys to Success:\n\
* Brief the talent early\n\
* Allow honest opinions\n\
\n\
Recommended Creators:\n\
1. Glow Getter: daily skincare vlog\n\
2. Derm Doc: evidence based reviews\n";

    #[test]
    fn sections_are_extracted() {
        let plan = extract_structured_data(PROSE);
        assert_eq!(plan.campaign_name, "Summer Glow Sprint");
        assert_eq!(plan.video_ideas.len(), 3);
        assert_eq!(plan.video_ideas[0], "Morning routine featuring the serum");
        assert_eq!(plan.tracking_metrics, vec!["Promo code redemptions", "Average watch time"]);
        assert_eq!(plan.keys_to_success, vec!["Brief the talent early", "Allow honest opinions"]);
    }

    #[test]
    fn creators_are_grouped() {
        let plan = extract_structured_data(PROSE);
        let names: Vec<&str> = plan
            .creator_categories
            .iter()
            .map(|c| c.category_name.as_str())
            .collect();
        assert_eq!(names, vec!["Lifestyle Creators", "Review Creators"]);
    }

    #[test]
    fn synonym_pattern_is_used() {
        let plan = extract_structured_data(
            "Content recommendations:\n- Try-on haul with the new line\n- Styling tips for fall",
        );
        assert_eq!(plan.video_ideas.len(), 2);
    }

    #[test]
    fn empty_text_gives_default_name() {
        let plan = extract_structured_data("");
        assert_eq!(plan.campaign_name, DEFAULT_CAMPAIGN_NAME);
        assert!(plan.video_ideas.is_empty());
        assert!(plan.creator_categories.is_empty());
    }

    #[test]
    fn converts_to_raw_object() {
        let value: Value = extract_structured_data(PROSE).into();
        assert_eq!(value["campaignName"], "Summer Glow Sprint");
        assert!(value["creatorCategories"].is_array());
        assert_eq!(value["keysToSuccess"][0], "Brief the talent early");
        assert_eq!(
            value["creatorCategories"][0]["creators"][0]["channelUrl"],
            "https://youtube.com/c/glowgetter"
        );
    }
}
