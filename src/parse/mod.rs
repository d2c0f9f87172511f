use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::extract::extract_structured_data;

/// Greedy: first `{` through last `}`.
static JSON_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Which stage produced the raw object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    StrictJson,
    RepairedQuotes,
    TextExtraction,
}

/// Turns model output into a raw JSON object for `normalize`. Never fails;
/// the last stage always produces an object.
pub fn parse_response(text: &str) -> Value {
    parse_response_staged(text).0
}

pub fn parse_response_staged(text: &str) -> (Value, ParseStage) {
    let candidate = json_candidate(text);

    if let Some(value) = parse_object(candidate) {
        tracing::debug!("parsed response as JSON");
        return (value, ParseStage::StrictJson);
    }

    if let Some(value) = parse_object(&candidate.replace('\'', "\"")) {
        tracing::debug!("parsed response as JSON after fixing quotes");
        return (value, ParseStage::RepairedQuotes);
    }

    tracing::info!("response is not JSON; falling back to text extraction");
    (extract_structured_data(text).into(), ParseStage::TextExtraction)
}

/// The JSON-looking span of `text`, or all of it when there is none.
pub(crate) fn json_candidate(text: &str) -> &str {
    JSON_SPAN.find(text).map_or(text, |m| m.as_str())
}

/// Only objects count; a bare string or number moves on to the next stage.
pub(crate) fn parse_object(candidate: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "JSON parse attempt failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_json() {
        let (value, stage) = parse_response_staged(r#"{"campaignName": "Glow", "videoIdeas": ["a"]}"#);
        assert_eq!(stage, ParseStage::StrictJson);
        assert_eq!(value["campaignName"], "Glow");
    }

    #[test]
    fn json_wrapped_in_prose_and_fences() {
        let text = "Sure! Here it is:\n```json\n{\"campaignName\": \"Fenced\"}\n```\nGood luck.";
        let (value, stage) = parse_response_staged(text);
        assert_eq!(stage, ParseStage::StrictJson);
        assert_eq!(value["campaignName"], "Fenced");
    }

    #[test]
    fn single_quotes_are_repaired() {
        let (value, stage) = parse_response_staged("{'campaignName': 'X', 'videoIdeas': ['a','b']}");
        assert_eq!(stage, ParseStage::RepairedQuotes);
        assert_eq!(value["campaignName"], "X");
        assert_eq!(value["videoIdeas"][1], "b");
    }

    #[test]
    fn prose_falls_through_to_extraction() {
        let (value, stage) = parse_response_staged("Campaign Name: Spring Push\nVideo Ideas:\n- A day in the life");
        assert_eq!(stage, ParseStage::TextExtraction);
        assert_eq!(value["campaignName"], "Spring Push");
    }

    #[test]
    fn non_object_json_is_not_accepted() {
        let (value, stage) = parse_response_staged("42");
        assert_eq!(stage, ParseStage::TextExtraction);
        assert!(value.is_object());
    }

    #[test]
    fn broken_braces_still_yield_object() {
        let (value, stage) = parse_response_staged("{ this is { not json }");
        assert_eq!(stage, ParseStage::TextExtraction);
        assert!(value.is_object());
    }

    #[test]
    fn empty_input() {
        assert!(parse_response("").is_object());
    }
}
