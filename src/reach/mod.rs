use once_cell::sync::Lazy;
use regex::Regex;

use crate::wire::{DEFAULT_AVERAGE_VIEWS, DEFAULT_BUDGET_FIT};

/// Share of subscribers expected to watch an average video.
pub const VIEW_RATE: f64 = 0.15;

pub const HIGH_FIT: &str = "High fit for your budget";
pub const LOW_FIT: &str = "Low fit for your budget";

/// Labels handed to creators whose audience size was not stated.
pub const SUBSCRIBER_LABELS: [&str; 5] = [
    "500K subscribers",
    "1.2M subscribers",
    "750K subscribers",
    "250K subscribers",
    "3.5M subscribers",
];

static SUBSCRIBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*([KkMm])?").unwrap());

static BUDGET_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$?([\d,]+)").unwrap());

/// Subscriber count in thousands, e.g. "1.2M subscribers" -> 1200.0.
/// A bare number is taken as a raw count; thousands separators are ignored.
pub fn subscribers_in_thousands(label: &str) -> Option<f64> {
    let label = label.replace(',', "");
    let caps = SUBSCRIBER_RE.captures(&label)?;
    let magnitude: f64 = caps[1].parse().ok()?;
    let thousands = match caps.get(2).map(|m| m.as_str()) {
        Some("M") | Some("m") => magnitude * 1000.0,
        Some(_) => magnitude,
        None => magnitude / 1000.0,
    };
    Some(thousands)
}

/// Average-views label for a subscriber label, e.g. "500K subscribers" -> "75K".
pub fn average_views(subscribers: &str) -> String {
    let Some(subs_k) = subscribers_in_thousands(subscribers) else {
        return DEFAULT_AVERAGE_VIEWS.to_string();
    };
    format_views(subs_k * VIEW_RATE)
}

fn format_views(views_k: f64) -> String {
    if views_k >= 1000.0 {
        format!("{:.1}M", views_k / 1000.0)
    } else if views_k >= 1.0 {
        format!("{}K", views_k.round() as u64)
    } else {
        format!("{}", (views_k * 1000.0).round() as u64)
    }
}

/// Picks a subscriber label for a creator name. Same name, same label.
pub fn subscriber_label_for(name: &str) -> &'static str {
    let sum: usize = name.bytes().map(usize::from).sum();
    SUBSCRIBER_LABELS[sum % SUBSCRIBER_LABELS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self { min: 10_000.0, max: 20_000.0 }
    }
}

impl BudgetRange {
    /// Parses strings like "$5,000 - $10,000", "under $5,000" or "$50,000+".
    pub fn parse(budget: &str) -> Self {
        let numbers: Vec<f64> = BUDGET_NUMBER_RE
            .captures_iter(budget)
            .filter_map(|c| c[1].replace(',', "").parse::<f64>().ok())
            .collect();

        let lower = budget.to_lowercase();
        match numbers.as_slice() {
            [] => Self::default(),
            [n] if lower.contains("under") || lower.contains("less than") => {
                Self { min: 0.0, max: *n }
            }
            [n] if lower.contains("over") || lower.contains("more than") || lower.contains('+') => {
                Self { min: *n, max: n * 2.0 }
            }
            [n] => Self { min: n * 0.5, max: n * 1.5 },
            [min, max, ..] => Self { min: *min, max: *max },
        }
    }

    pub fn tier(&self) -> BudgetTier {
        if self.min < 5_000.0 {
            BudgetTier::Micro
        } else if self.min < 25_000.0 {
            BudgetTier::Mid
        } else {
            BudgetTier::Large
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    /// 50K-200K subscribers
    Micro,
    /// 200K-1M subscribers
    Mid,
    /// 1M+ subscribers
    Large,
}

impl BudgetTier {
    pub fn subscriber_labels(self) -> &'static [&'static str] {
        match self {
            BudgetTier::Micro => &["50K subscribers", "80K subscribers", "120K subscribers", "180K subscribers"],
            BudgetTier::Mid => &["250K subscribers", "500K subscribers", "750K subscribers", "950K subscribers"],
            BudgetTier::Large => &["1.2M subscribers", "1.5M subscribers", "2.5M subscribers", "3.5M subscribers"],
        }
    }
}

/// How well a creator of the given size fits the budget.
pub fn budget_fit(subscribers: &str, budget: &BudgetRange) -> &'static str {
    let Some(subs_k) = subscribers_in_thousands(subscribers) else {
        return DEFAULT_BUDGET_FIT;
    };
    let fits = match budget.tier() {
        BudgetTier::Micro => subs_k <= 200.0,
        BudgetTier::Mid => (200.0..=1000.0).contains(&subs_k),
        BudgetTier::Large => subs_k >= 1000.0,
    };
    if fits {
        HIGH_FIT
    } else {
        LOW_FIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_from_thousands_label() {
        assert_eq!(average_views("500K subscribers"), "75K");
        assert_eq!(average_views("100K subscribers"), "15K");
    }

    #[test]
    fn views_from_millions_label() {
        assert_eq!(average_views("1.2M subscribers"), "180K");
        assert_eq!(average_views("10M subscribers"), "1.5M");
    }

    #[test]
    fn thousands_separators_are_ignored() {
        assert_eq!(subscribers_in_thousands("1,200,000 subscribers"), Some(1200.0));
        assert_eq!(average_views("1,200,000 subscribers"), "180K");
        assert_eq!(average_views("85,000"), "13K");
    }

    #[test]
    fn views_from_unparseable_label_is_default() {
        assert_eq!(average_views("lots of fans"), DEFAULT_AVERAGE_VIEWS);
    }

    #[test]
    fn views_are_deterministic() {
        assert_eq!(average_views("3.5M subscribers"), average_views("3.5M subscribers"));
    }

    #[test]
    fn subscriber_label_is_stable_per_name() {
        assert_eq!(subscriber_label_for("TechLab"), subscriber_label_for("TechLab"));
        assert!(SUBSCRIBER_LABELS.contains(&subscriber_label_for("anyone")));
    }

    #[test]
    fn budget_range_variants() {
        assert_eq!(BudgetRange::parse("$5,000 - $10,000"), BudgetRange { min: 5000.0, max: 10000.0 });
        assert_eq!(BudgetRange::parse("under $5,000"), BudgetRange { min: 0.0, max: 5000.0 });
        assert_eq!(BudgetRange::parse("over $25,000"), BudgetRange { min: 25000.0, max: 50000.0 });
        assert_eq!(BudgetRange::parse("$50,000+"), BudgetRange { min: 50000.0, max: 100000.0 });
        assert_eq!(BudgetRange::parse("$10,000"), BudgetRange { min: 5000.0, max: 15000.0 });
        assert_eq!(BudgetRange::parse("flexible"), BudgetRange::default());
    }

    #[test]
    fn budget_fit_by_tier() {
        let micro = BudgetRange::parse("under $4,000");
        assert_eq!(budget_fit("120K subscribers", &micro), HIGH_FIT);
        assert_eq!(budget_fit("1.2M subscribers", &micro), LOW_FIT);

        let mid = BudgetRange::parse("$5,000 - $10,000");
        assert_eq!(budget_fit("750K subscribers", &mid), HIGH_FIT);
        assert_eq!(budget_fit("80K subscribers", &mid), LOW_FIT);
        assert_eq!(budget_fit("2.5M subscribers", &mid), LOW_FIT);

        let large = BudgetRange::parse("$30,000 - $60,000");
        assert_eq!(budget_fit("1.5M subscribers", &large), HIGH_FIT);
        assert_eq!(budget_fit("950K subscribers", &large), LOW_FIT);

        assert_eq!(budget_fit("unknown", &large), DEFAULT_BUDGET_FIT);
    }
}
