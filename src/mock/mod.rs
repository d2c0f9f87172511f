//! Synthetic plans for running without a model backend. Content is random;
//! only the plan shape is guaranteed.

use fastrand::Rng;

use crate::reach::{self, BudgetRange};
use crate::wire::{channel_url_for, CampaignPlan, CampaignRequest, Creator, CreatorCategory, MAX_LIST_ITEMS};

const FALLBACK_BUDGET: &str = "$5,000 - $10,000";

const CATEGORIES: [&str; 9] = [
    "Beauty & Lifestyle",
    "Tech Reviewers",
    "Fitness Enthusiasts",
    "Gaming Channels",
    "Food & Cooking",
    "DIY & Crafts",
    "Travel Vloggers",
    "Educational Content",
    "Fashion Influencers",
];

const NAME_SUFFIXES: [&str; 8] = ["Lab", "Daily", "Insider", "Corner", "Central", "Studio", "Nation", "Weekly"];

const CONTENT_STYLES: [&str; 6] = [
    "high-quality",
    "story-driven",
    "fast-paced",
    "honest, no-nonsense",
    "beautifully shot",
    "community-focused",
];

const NAME_TEMPLATES: [&str; 4] = [
    "{} Creator Spotlight",
    "The {} Launch Collective",
    "{} Voices Campaign",
    "Project {}",
];

const VIDEO_IDEAS: [&str; 8] = [
    "Unboxing and first impressions of the {}",
    "A week-long challenge using the {} every day",
    "Side-by-side comparison of the {} with popular alternatives",
    "Behind-the-scenes look at how the {} fits into a daily routine",
    "Top five ways to get the most out of the {}",
    "Honest long-term review of the {} after one month",
    "Viewer Q&A about the {} with a live demo",
    "Before-and-after story featuring the {}",
];

const TRACKING_METRICS: [&str; 7] = [
    "Click-through rate on creator affiliate links",
    "Promo code redemptions per creator",
    "Average view duration on sponsored segments",
    "Engagement rate (likes, comments, shares) per video",
    "Cost per acquisition across all creators",
    "Subscriber growth on the brand channel during the campaign",
    "Sentiment of comments mentioning the product",
];

const KEYS_TO_SUCCESS: [&str; 7] = [
    "Give creators creative freedom so the integration feels authentic",
    "Share a short, clear brief with key product features and talking points",
    "Stagger video releases to keep momentum across the timeline",
    "Offer unique promo codes to attribute sales to each creator",
    "Repurpose the best-performing clips as paid social ads",
    "Follow up with top performers for a second round of content",
    "Send product early so creators have time to use it for real",
];

pub struct MockGenerator {
    rng: Rng,
}

impl MockGenerator {
    /// A fixed seed gives reproducible plans; `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self { rng }
    }

    pub fn generate(&mut self, request: &CampaignRequest) -> CampaignPlan {
        tracing::info!("generating mock campaign plan");
        let keyword = product_keyword(request);
        let template = NAME_TEMPLATES[self.rng.usize(..NAME_TEMPLATES.len())];

        CampaignPlan {
            campaign_name: template.replacen("{}", &title_case(&keyword), 1),
            video_ideas: self
                .pick(&VIDEO_IDEAS, MAX_LIST_ITEMS)
                .into_iter()
                .map(|idea| idea.replacen("{}", &keyword, 1))
                .collect(),
            tracking_metrics: self.pick(&TRACKING_METRICS, MAX_LIST_ITEMS).into_iter().map(str::to_string).collect(),
            keys_to_success: self.pick(&KEYS_TO_SUCCESS, MAX_LIST_ITEMS).into_iter().map(str::to_string).collect(),
            creator_categories: self.categories(request),
        }
    }

    fn pick(&mut self, pool: &[&'static str], count: usize) -> Vec<&'static str> {
        let mut items = pool.to_vec();
        self.rng.shuffle(&mut items);
        items.truncate(count);
        items
    }

    fn categories(&mut self, request: &CampaignRequest) -> Vec<CreatorCategory> {
        let budget_text = if request.campaign_budget.trim().is_empty() {
            FALLBACK_BUDGET
        } else {
            request.campaign_budget.as_str()
        };
        let budget = BudgetRange::parse(budget_text);
        let count = self.rng.usize(3..=4);

        self.pick(&CATEGORIES, count)
            .into_iter()
            .map(|category| {
                let creators = (0..self.rng.usize(5..=8))
                    .map(|i| self.creator(category, i, &budget))
                    .collect();
                CreatorCategory {
                    category_name: category.to_string(),
                    creators,
                }
            })
            .collect()
    }

    fn creator(&mut self, category: &str, index: usize, budget: &BudgetRange) -> Creator {
        let labels = budget.tier().subscriber_labels();
        let subscribers = labels[self.rng.usize(..labels.len())];
        let style = CONTENT_STYLES[self.rng.usize(..CONTENT_STYLES.len())];
        let stem = category.split_whitespace().next().unwrap_or("Creator");
        let name = format!("{stem} {}", NAME_SUFFIXES[index % NAME_SUFFIXES.len()]);

        Creator {
            description: format!(
                "Known for {style} {} content. Audience demographic aligns well with your target market.",
                category.to_lowercase()
            ),
            channel_url: channel_url_for(&name),
            subscribers: subscribers.to_string(),
            average_views: reach::average_views(subscribers),
            budget_fit: reach::budget_fit(subscribers, budget).to_string(),
            name,
        }
    }
}

/// A short noun for the product: analysed category, else the longest word
/// of the goals.
fn product_keyword(request: &CampaignRequest) -> String {
    let analysed = request
        .product_analysis
        .as_ref()
        .map(|a| a.extracted_info.category.trim().to_lowercase())
        .filter(|c| !c.is_empty() && c != "unknown");
    if let Some(category) = analysed {
        return category;
    }
    request
        .campaign_goals
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 3)
        .max_by_key(|w| w.len())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "product".to_string())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
