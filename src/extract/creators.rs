//! Creator records out of a "recommended creators" section of free text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::reach;
use crate::wire::{channel_url_for, default_description, Creator, DEFAULT_BUDGET_FIT};

static CREATOR_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)recommended(?:\s+youtube)?\s+creators:?(.*?)(?:campaign\s+name|video\s+ideas|tracking\s+metrics|keys\s+to\s+success|$)",
    )
    .unwrap()
});

static ENTRY_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(?:\d+\.|[-*•])\s*").unwrap());

/// Finds the recommended-creators section and parses its entries.
/// Returns nothing when the text has no such section.
pub fn extract_creators_from_text(text: &str) -> Vec<Creator> {
    let Some(section) = creator_section(text) else {
        tracing::debug!("no recommended creators section");
        return Vec::new();
    };
    let creators = parse_creator_entries(section);
    tracing::debug!(count = creators.len(), "creators extracted from text");
    creators
}

fn creator_section(text: &str) -> Option<&str> {
    CREATOR_SECTION
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Parses marker-delimited entries; an entry runs until the next marker or
/// a blank line.
pub fn parse_creator_entries(block: &str) -> Vec<Creator> {
    split_entries(block)
        .iter()
        .filter_map(|entry| parse_entry(entry))
        .collect()
}

fn split_entries(block: &str) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in block.lines() {
        if let Some(marker) = ENTRY_MARKER.find(line) {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            current = Some(line[marker.end()..].trim().to_string());
        } else if line.trim().is_empty() {
            if let Some(done) = current.take() {
                entries.push(done);
            }
        } else if let Some(entry) = current.as_mut() {
            entry.push(' ');
            entry.push_str(line.trim());
        }
    }
    if let Some(done) = current {
        entries.push(done);
    }
    entries
}

fn parse_entry(entry: &str) -> Option<Creator> {
    let split = entry.find(|c: char| matches!(c, ':' | ',' | '('))?;
    let name = entry[..split].trim_matches(|c: char| c == '*' || c.is_whitespace());
    if name.is_empty() {
        return None;
    }

    let description = entry[split + 1..]
        .trim_start_matches(|c: char| matches!(c, ':' | ',' | '-' | '*') || c.is_whitespace())
        .trim();
    let description = if description.is_empty() {
        default_description(name)
    } else {
        description.to_string()
    };

    let subscribers = reach::subscriber_label_for(name);
    Some(Creator {
        name: name.to_string(),
        description,
        channel_url: channel_url_for(name),
        subscribers: subscribers.to_string(),
        average_views: reach::average_views(subscribers),
        budget_fit: DEFAULT_BUDGET_FIT.to_string(),
    })
}
