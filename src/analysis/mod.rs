//! Product analysis: what the product is, who buys it, and which creators
//! and content styles suit it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::parse::{json_candidate, parse_object};
use crate::wire::{AnalysisSource, AnalyzedCreator, ExtractedInfo, ProductAnalysis, DEFAULT_CHANNEL_URL};

const UNKNOWN_SUBSCRIBERS: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Electronics,
    Clothing,
    Beauty,
    Home,
    Food,
    Unknown,
}

impl ProductType {
    /// Keyword match on the whole URL first, then on the host alone.
    pub fn classify(url: &str, domain: &str) -> Self {
        let url = url.to_lowercase();
        let domain = domain.to_lowercase();
        let url_rules: [(&[&str], ProductType); 5] = [
            (&["electronics"], ProductType::Electronics),
            (&["clothing", "fashion", "wear"], ProductType::Clothing),
            (&["beauty", "makeup", "skincare"], ProductType::Beauty),
            (&["home", "furniture", "decor"], ProductType::Home),
            (&["food", "grocery", "meal"], ProductType::Food),
        ];
        if domain.contains("tech") || domain.contains("electronic") {
            return ProductType::Electronics;
        }
        for (words, kind) in url_rules {
            if words.iter().any(|w| url.contains(w)) {
                return kind;
            }
        }

        let domain_rules: [(&[&str], ProductType); 5] = [
            (&["gadget"], ProductType::Electronics),
            (&["apparel"], ProductType::Clothing),
            (&["cosmetic"], ProductType::Beauty),
            (&["furniture"], ProductType::Home),
            (&["grocery"], ProductType::Food),
        ];
        domain_rules
            .into_iter()
            .find(|(words, _)| words.iter().any(|w| domain.contains(w)))
            .map_or(ProductType::Unknown, |(_, kind)| kind)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductType::Electronics => "electronics",
            ProductType::Clothing => "clothing",
            ProductType::Beauty => "beauty",
            ProductType::Home => "home",
            ProductType::Food => "food",
            ProductType::Unknown => "unknown",
        }
    }

    fn estimated_price(self) -> &'static str {
        match self {
            ProductType::Electronics => "$100 - $1000+",
            ProductType::Clothing => "$20 - $200",
            ProductType::Beauty => "$15 - $150",
            ProductType::Home => "$50 - $500",
            ProductType::Food => "$10 - $100",
            ProductType::Unknown => "Varies",
        }
    }

    fn target_demographic(self) -> &'static str {
        match self {
            ProductType::Electronics => "Tech enthusiasts, 18-45",
            ProductType::Clothing => "Fashion-conscious, 16-40",
            ProductType::Beauty => "Beauty enthusiasts, 18-35",
            ProductType::Home => "Home owners, 25-55",
            ProductType::Food => "Cooking enthusiasts, 25-65",
            ProductType::Unknown => "General audience",
        }
    }

    fn key_features(self) -> [&'static str; 5] {
        match self {
            ProductType::Electronics => ["Innovative technology", "Performance", "Connectivity", "User experience", "Durability"],
            ProductType::Clothing => ["Style", "Comfort", "Quality materials", "Versatility", "Fit"],
            ProductType::Beauty => ["Effectiveness", "Ingredients", "Results", "Application", "Value"],
            ProductType::Home => ["Design", "Functionality", "Quality", "Durability", "Aesthetics"],
            ProductType::Food => ["Taste", "Nutrition", "Quality ingredients", "Convenience", "Value"],
            ProductType::Unknown => ["Quality", "Value", "Design", "Functionality", "Performance"],
        }
    }

    fn creator_types(self) -> [&'static str; 3] {
        match self {
            ProductType::Electronics => ["Tech reviewers", "Unboxing channels", "Tutorial creators"],
            ProductType::Clothing => ["Fashion influencers", "Style vloggers", "Lifestyle creators"],
            ProductType::Beauty => ["Beauty gurus", "Makeup artists", "Skincare experts"],
            ProductType::Home => ["Home decor channels", "DIY creators", "Lifestyle vloggers"],
            ProductType::Food => ["Cooking channels", "Food reviewers", "Recipe creators"],
            ProductType::Unknown => ["Lifestyle creators", "Review channels", "Vloggers"],
        }
    }

    fn content_styles(self) -> [&'static str; 3] {
        match self {
            ProductType::Electronics => ["Detailed reviews", "Comparison videos", "How-to tutorials"],
            ProductType::Clothing => ["Try-on hauls", "Styling tips", "Outfit inspirations"],
            ProductType::Beauty => ["First impressions", "Tutorials", "Before & after demonstrations"],
            ProductType::Home => ["Home tours", "Transformation videos", "DIY projects"],
            ProductType::Food => ["Recipe tutorials", "Taste tests", "Cooking challenges"],
            ProductType::Unknown => ["Reviews", "Tutorials", "Day-in-the-life vlogs"],
        }
    }
}

fn domain_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Analysis guessed from the URL alone.
pub fn mock_product_analysis(url: &str) -> ProductAnalysis {
    let Some(domain) = domain_of(url) else {
        tracing::warn!(url, "product URL could not be parsed; using minimal analysis");
        return ProductAnalysis {
            url: url.to_string(),
            domain: None,
            analysis_source: AnalysisSource::Mock,
            extracted_info: ExtractedInfo {
                category: "Unknown".to_string(),
                estimated_price: "Varies".to_string(),
                target_demographic: "General audience".to_string(),
                key_features: owned(&ProductType::Unknown.key_features()),
                recommended_creator_types: owned(&["Review channels", "Lifestyle vloggers", "How-to channels"]),
                suggested_content_styles: owned(&["Reviews", "Tutorials", "Day-in-the-life videos"]),
                recommended_creators: Vec::new(),
            },
        };
    };

    let kind = ProductType::classify(url, &domain);
    ProductAnalysis {
        url: url.to_string(),
        domain: Some(domain),
        analysis_source: AnalysisSource::Mock,
        extracted_info: ExtractedInfo {
            category: kind.label().to_string(),
            estimated_price: kind.estimated_price().to_string(),
            target_demographic: kind.target_demographic().to_string(),
            key_features: owned(&kind.key_features()),
            recommended_creator_types: owned(&kind.creator_types()),
            suggested_content_styles: owned(&kind.content_styles()),
            recommended_creators: Vec::new(),
        },
    }
}

/// Parses a model's product analysis: JSON when it has the expected fields,
/// otherwise labelled fields pulled out of the prose.
pub fn parse_product_analysis(url: &str, text: &str) -> ProductAnalysis {
    let extracted_info = match parse_object(json_candidate(text)).and_then(|v| from_json(&v)) {
        Some(info) => {
            tracing::debug!("product analysis parsed from JSON");
            info
        }
        None => {
            tracing::info!("product analysis is not usable JSON; extracting from text");
            from_text(text)
        }
    };
    ProductAnalysis {
        url: url.to_string(),
        domain: domain_of(url),
        analysis_source: AnalysisSource::Model,
        extracted_info,
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

fn str_array(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn from_json(value: &Value) -> Option<ExtractedInfo> {
    let category = str_field(value, "category")?;
    value.get("keyFeatures")?.as_array()?;

    let creators: Vec<AnalyzedCreator> = value
        .get("recommendedCreators")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .map(|c| AnalyzedCreator {
            name: str_field(c, "name").unwrap_or("Unknown creator").to_string(),
            description: str_field(c, "description").unwrap_or_default().to_string(),
            subscribers: str_field(c, "subscribers").unwrap_or(UNKNOWN_SUBSCRIBERS).to_string(),
            channel_url: str_field(c, "channelUrl").unwrap_or(DEFAULT_CHANNEL_URL).to_string(),
        })
        .collect();

    Some(ExtractedInfo {
        category: category.to_string(),
        estimated_price: str_field(value, "priceRange").unwrap_or("Varies").to_string(),
        target_demographic: str_field(value, "targetDemographic")
            .unwrap_or("General audience")
            .to_string(),
        key_features: str_array(value, "keyFeatures"),
        recommended_creator_types: creators.iter().map(|c| c.name.clone()).collect(),
        suggested_content_styles: str_array(value, "recommendedContentTypes"),
        recommended_creators: creators,
    })
}

static CATEGORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:product\s+category|category)"?[:\s]+"?([^"\n,]+)"?"#).unwrap());
static DEMOGRAPHIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:target\s+demographic|audience|demographic|target\s+market)"?[:\s]+"?([^"\n,]+)"?"#).unwrap()
});
static PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:price\s+range|pricing|price|cost)"?[:\s]+"?([$€£]?[0-9,.]+\s*(?:-\s*[$€£]?[0-9,.]+)?|affordable|expensive|premium|budget[^"\n,]*)"?"#,
    )
    .unwrap()
});
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(?:[-•*]|\d+\.)\s*").unwrap());
static FEATURE_SENTENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[^.!?]*(?:feature|strength|highlight|selling\s+point|benefit)[^.!?]*").unwrap()
});
static CREATOR_ITEM_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*(?:[-•*]|\d+\.)").unwrap());
static YOUTUBE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://(?:www\.)?youtube\.com/[@a-zA-Z0-9\-_]+").unwrap());
static CREATOR_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([A-Za-z0-9 .,&'\-_]+?)(?:\s*[-–:]\s*|\s*\(|\s+with\b|\s+who\b)").unwrap()
});
static SUBSCRIBER_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?[KkMm]?\s*(?:subscribers|subs|followers))").unwrap());
static JSON_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r#""name"\s*:\s*"([^"]*)""#).unwrap());
static JSON_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r#""channelUrl"\s*:\s*"([^"]*)""#).unwrap());
static JSON_SUBS: Lazy<Regex> = Lazy::new(|| Regex::new(r#""subscribers"\s*:\s*"([^"]*)""#).unwrap());
static JSON_DESC: Lazy<Regex> = Lazy::new(|| Regex::new(r#""description"\s*:\s*"([^"]*)""#).unwrap());
static OBJECT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\},\s*\{").unwrap());

/// Body of a `"key": [ ... ]` array in JSON-ish text.
fn json_array_body<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let re = Regex::new(&format!(r#"(?s)"{}"\s*:\s*\[(.*?)\]"#, regex::escape(key))).ok()?;
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

fn quoted_strings(body: &str) -> Vec<String> {
    QUOTED
        .captures_iter(body)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Marker-prefixed lines following one of the `labels` and a colon.
fn labelled_list(text: &str, labels: &str) -> Vec<String> {
    let pattern = format!(r"(?i)(?:{labels})\s*:\s*((?:(?:[-•*]|\d+\.)[ \t]*[^\n]+\n?)+)");
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };
    let Some(body) = re.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };
    body.as_str()
        .lines()
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn captured(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn from_text(text: &str) -> ExtractedInfo {
    let mut key_features = json_array_body(text, "keyFeatures")
        .map(quoted_strings)
        .unwrap_or_default();
    if key_features.is_empty() {
        key_features = labelled_list(text, r"key\s+features|main\s+features|features|strengths");
    }
    if key_features.is_empty() {
        key_features = FEATURE_SENTENCE
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| s.len() > 5 && s.len() < 100)
            .collect();
    }
    key_features.truncate(5);

    let mut content_types = json_array_body(text, "recommendedContentTypes")
        .map(quoted_strings)
        .unwrap_or_default();
    if content_types.is_empty() {
        content_types = labelled_list(
            text,
            r"content\s+types|recommended\s+content|content\s+styles|video\s+ideas",
        );
    }
    if content_types.is_empty() {
        content_types = owned(&["Product reviews", "How-to tutorials", "Unboxing videos"]);
    }
    content_types.truncate(3);

    let mut creators = json_creators(text);
    if creators.is_empty() {
        creators = listed_creators(text);
    }
    if creators.is_empty() {
        creators = placeholder_creators();
    }

    ExtractedInfo {
        category: captured(&CATEGORY, text).unwrap_or_else(|| "Unknown".to_string()),
        estimated_price: captured(&PRICE, text).unwrap_or_else(|| "Varies".to_string()),
        target_demographic: captured(&DEMOGRAPHIC, text)
            .unwrap_or_else(|| "General audience".to_string()),
        key_features,
        recommended_creator_types: creators
            .iter()
            .take(3)
            .map(|c| format!("{} ({})", c.name, c.subscribers))
            .collect(),
        suggested_content_styles: content_types,
        recommended_creators: creators,
    }
}

fn json_creators(text: &str) -> Vec<AnalyzedCreator> {
    let Some(body) = json_array_body(text, "recommendedCreators") else {
        return Vec::new();
    };
    OBJECT_SPLIT
        .split(body)
        .filter_map(|object| {
            let name = captured(&JSON_NAME, object)?;
            Some(AnalyzedCreator {
                name,
                channel_url: captured(&JSON_URL, object).unwrap_or_else(|| DEFAULT_CHANNEL_URL.to_string()),
                subscribers: captured(&JSON_SUBS, object).unwrap_or_else(|| UNKNOWN_SUBSCRIBERS.to_string()),
                description: captured(&JSON_DESC, object).unwrap_or_default(),
            })
        })
        .collect()
}

fn listed_creators(text: &str) -> Vec<AnalyzedCreator> {
    let items = labelled_list_block(text);
    items
        .iter()
        .filter_map(|item| {
            let item = LIST_MARKER.replace(item, "");
            let item = item.trim();
            let url = YOUTUBE_URL.find(item).map(|m| m.as_str().to_string());
            let name = captured(&CREATOR_NAME, item);
            if name.is_none() && url.is_none() {
                return None;
            }
            Some(AnalyzedCreator {
                name: name.unwrap_or_else(|| "Unknown creator".to_string()),
                channel_url: url.unwrap_or_else(|| DEFAULT_CHANNEL_URL.to_string()),
                subscribers: captured(&SUBSCRIBER_MENTION, item)
                    .unwrap_or_else(|| UNKNOWN_SUBSCRIBERS.to_string()),
                description: item.to_string(),
            })
        })
        .collect()
}

/// Creator entries of a creators section, one string per entry.
fn labelled_list_block(text: &str) -> Vec<String> {
    static SECTION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?i)(?:recommended\s+creators|best\s+creators|top\s+creators|creators)\s*:\s*((?:(?:[-•*]|\d+\.)[ \t]*[^\n]+\n?)+)",
        )
        .unwrap()
    });
    let Some(body) = SECTION.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };
    CREATOR_ITEM_SPLIT
        .split(body.as_str().trim())
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

fn placeholder_creators() -> Vec<AnalyzedCreator> {
    ["vlogger", "reviewer", "educator"]
        .iter()
        .map(|kind| AnalyzedCreator {
            name: format!("YouTube {kind}"),
            channel_url: DEFAULT_CHANNEL_URL.to_string(),
            subscribers: UNKNOWN_SUBSCRIBERS.to_string(),
            description: format!(
                "No specific creators identified. Consider searching for {kind}s in your product niche."
            ),
        })
        .collect()
}
