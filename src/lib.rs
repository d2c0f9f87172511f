pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod log;
pub mod mock;
pub mod normalize;
pub mod parse;
pub mod planner;
pub mod prompt;
pub mod provider;
pub mod reach;
pub mod ux;
pub mod wire;

pub use extract::{
    extract_creator_categories, extract_creators_from_text, extract_list_items,
    extract_structured_data,
};
pub use normalize::normalize;
pub use parse::parse_response;
pub use wire::{CampaignPlan, CampaignRequest, Creator, CreatorCategory};
