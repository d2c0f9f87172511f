use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

use campaign_planner::cli::Args;
use campaign_planner::config::Config;
use campaign_planner::log::{self, SaveToggles};
use campaign_planner::planner::CampaignPlanner;
use campaign_planner::provider::{self, replay::Replay, DynProvider};
use campaign_planner::ux;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn choose_provider(args: &Args, cfg: &Config) -> anyhow::Result<Option<DynProvider>> {
    if let Some(path) = &args.response_file {
        let replay: DynProvider = Box::new(Replay::new(path));
        return Ok(Some(replay));
    }
    if cfg.use_mock() {
        return Ok(None);
    }
    provider::make_provider(cfg).map(Some)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log::init_tracing(args.debug);

    let mut cfg = Config::load(args.config.as_deref().map(Path::new)).context("loading config")?;
    args.apply(&mut cfg);
    cfg.apply_env(|k| std::env::var(k).ok());
    cfg.validate()?;
    for warning in cfg.warnings() {
        tracing::warn!("{warning}");
    }

    let run = Uuid::new_v4();
    tracing::debug!(%run, provider = cfg.provider.name(), model = %cfg.model(), "starting run");

    let mut planner = CampaignPlanner::new(choose_provider(&args, &cfg)?, cfg.seed);
    let mut request = args.request();

    let show_progress = args.progress && !args.json && planner.uses_model();

    if let Some(url) = request.product_info.clone().filter(|u| !u.trim().is_empty()) {
        let pb = show_progress.then(|| spinner("Analysing product..."));
        let analysis = planner.analyze_product(&url).await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
        if !args.json {
            ux::show_analysis(&analysis);
        }
        request.product_analysis = Some(analysis);
    }

    let pb = show_progress.then(|| spinner("Generating campaign plan..."));
    let outcome = planner.generate(&request).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if args.saves_anything() {
        let toggles = SaveToggles {
            prompt: args.save_prompt,
            response: args.save_response,
            plan: args.save_plan,
        };
        let saved = log::save_run(Path::new(&cfg.root), run, &outcome, toggles)?;
        log::log_saved_paths(&saved);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.plan)?);
    } else {
        ux::show_plan(&outcome.plan, outcome.source);
    }

    Ok(())
}
