//! Heuristic extraction of plan fields from free text.
//!
//! Each extractor is total: malformed input yields fewer items, never an
//! error.

pub mod categories;
pub mod creators;
pub mod list;
pub mod structured;

pub use categories::{categorize_by_type, extract_creator_categories};
pub use creators::{extract_creators_from_text, parse_creator_entries};
pub use list::extract_list_items;
pub use structured::{extract_structured_data, PartialPlan};
