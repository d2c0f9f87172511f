//! Ordered list items out of a loosely formatted text block.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:\d+\.|[-*•])[ \t]*(.+)$").unwrap());
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());
static LEADING_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*•]\s*").unwrap());

type Strategy = fn(&str) -> Vec<String>;

/// Tried in order; the first one that yields a usable item wins.
const STRATEGIES: [(&str, Strategy); 3] = [
    ("marked", marked_lines),
    ("plain", plain_lines),
    ("split", split_lines),
];

/// Extracts at most `max_items` list items from `text`. Never fails.
pub fn extract_list_items(text: &str, max_items: usize) -> Vec<String> {
    let text = text.trim();
    for (name, strategy) in STRATEGIES {
        let items = clean(strategy(text), max_items);
        if !items.is_empty() {
            tracing::debug!(strategy = name, count = items.len(), "list items extracted");
            return items;
        }
    }
    Vec::new()
}

fn marked_lines(text: &str) -> Vec<String> {
    MARKED_LINE
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

fn plain_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| (10..=150).contains(&l.chars().count()))
        .filter(|l| !l.ends_with(':') && !looks_like_header(l))
        .map(str::to_string)
        .collect()
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| {
            let n = l.chars().count();
            n > 10 && n < 150
        })
        .filter(|l| !l.ends_with(':'))
        .map(str::to_string)
        .collect()
}

fn looks_like_header(line: &str) -> bool {
    if line.starts_with('#') {
        return true;
    }
    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        return true;
    }
    let has_letters = line.chars().any(char::is_alphabetic);
    has_letters && !line.chars().any(char::is_lowercase)
}

fn clean(raw: Vec<String>, max_items: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in raw {
        let item = LEADING_NUMBER.replace(&item, "");
        let item = LEADING_BULLET.replace(&item, "");
        let item = item.trim();
        if item.chars().count() <= 5
            || item.chars().all(|c| c.is_ascii_digit())
            || item.ends_with(':')
            || out.iter().any(|seen| seen == item)
        {
            continue;
        }
        out.push(item.to_string());
        if out.len() == max_items {
            break;
        }
    }
    out
}
