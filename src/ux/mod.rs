use colored::Colorize;

use crate::planner::PlanSource;
use crate::reach::{HIGH_FIT, LOW_FIT};
use crate::wire::{CampaignPlan, ProductAnalysis};

fn section(title: &str, items: &[String]) {
    println!("\n{}", title.bold());
    if items.is_empty() {
        println!("  (none)");
        return;
    }
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
}

fn fit_label(fit: &str) -> String {
    match fit {
        HIGH_FIT => fit.green().to_string(),
        LOW_FIT => fit.red().to_string(),
        _ => fit.yellow().to_string(),
    }
}

pub fn show_plan(plan: &CampaignPlan, source: PlanSource) {
    println!(
        "\n{}  {}",
        format!("=== {} ===", plan.campaign_name).bold(),
        format!("[{}]", source.label()).dimmed()
    );

    section("Video ideas", &plan.video_ideas);
    section("Tracking metrics", &plan.tracking_metrics);
    section("Keys to success", &plan.keys_to_success);

    println!(
        "\n{} ({} creators in {} categories)",
        "Creators".bold(),
        plan.total_creators(),
        plan.creator_categories.len()
    );
    for category in &plan.creator_categories {
        println!("\n  {}", category.category_name.cyan().bold());
        for c in &category.creators {
            println!(
                "    {}  {} · {} avg views · {}",
                c.name.bold(),
                c.subscribers,
                c.average_views,
                fit_label(&c.budget_fit)
            );
            println!("      {}", c.channel_url.underline());
            println!("      {}", c.description.dimmed());
        }
    }
    println!();
}

pub fn show_analysis(analysis: &ProductAnalysis) {
    let info = &analysis.extracted_info;
    println!(
        "\n{} {}",
        "Product:".bold(),
        analysis.domain.as_deref().unwrap_or(&analysis.url)
    );
    println!("  category: {}   price: {}", info.category, info.estimated_price);
    println!("  audience: {}", info.target_demographic);
    if !info.key_features.is_empty() {
        println!("  features: {}", info.key_features.join(", "));
    }
}
