//! Creator categories: explicit `Category:` blocks, or keyword grouping as a
//! fallback.

use once_cell::sync::Lazy;
use regex::Regex;

use super::creators::extract_creators_from_text;
use crate::wire::{Creator, CreatorCategory, DEFAULT_CATEGORY_NAME};

/// Case-sensitive, and only at the start of a line.
static CATEGORY_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:Category|Niche|Group):").unwrap());
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\r?\n").unwrap());

/// Keyword taxonomy, in priority order.
const TAXONOMY: [(&str, &[&str]); 4] = [
    ("Review", &["review", "unbox", "test", "critic"]),
    ("Lifestyle", &["lifestyle", "daily", "vlog", "life"]),
    ("Tutorial", &["tutorial", "how to", "guide", "tips", "learn"]),
    ("Entertainment", &["entertainment", "funny", "comedy", "prank"]),
];

/// Catch-all bucket for creators no keyword matched.
const CATCH_ALL: &str = "Niche";

pub fn extract_creator_categories(text: &str) -> Vec<CreatorCategory> {
    let explicit = explicit_categories(text);
    if !explicit.is_empty() {
        tracing::debug!(count = explicit.len(), "explicit creator categories found");
        return explicit;
    }

    let creators = extract_creators_from_text(text);
    if creators.is_empty() {
        return Vec::new();
    }
    tracing::debug!(creators = creators.len(), "grouping creators by content type");
    categorize_by_type(creators)
}

/// Blocks opened by a label and closed by the next label or a blank line.
/// Each block is searched for its own recommended-creators section.
fn explicit_categories(text: &str) -> Vec<CreatorCategory> {
    let labels: Vec<_> = CATEGORY_LABEL.find_iter(text).collect();
    let mut categories = Vec::new();

    for (i, label) in labels.iter().enumerate() {
        let next_label = labels.get(i + 1).map_or(text.len(), |m| m.start());
        let block_end = BLANK_LINE
            .find(&text[label.end()..next_label])
            .map_or(next_label, |blank| label.end() + blank.start());
        let block = &text[label.start()..block_end];

        let name_line = text[label.end()..block_end].lines().next().unwrap_or("");
        let name = name_line.trim_matches(|c: char| c == '*' || c == '#' || c.is_whitespace());
        let name = if name.is_empty() { DEFAULT_CATEGORY_NAME } else { name };

        let creators = extract_creators_from_text(block);
        if !creators.is_empty() {
            categories.push(CreatorCategory {
                category_name: name.to_string(),
                creators,
            });
        }
    }
    categories
}

/// Puts every creator in exactly one bucket; first matching type wins.
/// Buckets come out in the order they first received a creator.
pub fn categorize_by_type(creators: Vec<Creator>) -> Vec<CreatorCategory> {
    let mut buckets: Vec<(usize, Vec<Creator>)> = Vec::new();

    for creator in creators {
        let haystack = format!("{} {}", creator.name, creator.description).to_lowercase();
        let slot = TAXONOMY
            .iter()
            .position(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
            .unwrap_or(TAXONOMY.len());
        match buckets.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, members)) => members.push(creator),
            None => buckets.push((slot, vec![creator])),
        }
    }

    buckets
        .into_iter()
        .map(|(slot, creators)| {
            let name = TAXONOMY.get(slot).map_or(CATCH_ALL, |(name, _)| *name);
            CreatorCategory {
                category_name: format!("{name} Creators"),
                creators,
            }
        })
        .collect()
}
