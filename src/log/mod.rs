use chrono::Utc;
use fs_err as fs;
use serde_json::{json, to_string_pretty};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::planner::PlanOutcome;

/// Logs to stderr. `RUST_LOG` wins over the `debug` flag.
pub fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SaveToggles {
    pub prompt: bool,
    pub response: bool,
    pub plan: bool,
}

#[derive(Debug)]
pub struct SavedPaths {
    pub dir: PathBuf,
    pub prompt: Option<PathBuf>,
    pub response: Option<PathBuf>,
    pub plan: Option<PathBuf>,
}

pub fn run_dir(root: &Path, run: Uuid) -> PathBuf {
    root.join(".campaign").join("runs").join(run.to_string())
}

/// Writes the selected artifacts plus a `run.json` summary.
pub fn save_run(
    root: &Path,
    run: Uuid,
    outcome: &PlanOutcome,
    toggles: SaveToggles,
) -> anyhow::Result<SavedPaths> {
    let dir = run_dir(root, run);
    fs::create_dir_all(&dir)?;

    let mut saved = SavedPaths { dir: dir.clone(), prompt: None, response: None, plan: None };

    if toggles.prompt {
        let p = dir.join("prompt.txt");
        fs::write(&p, &outcome.prompt)?;
        saved.prompt = Some(p);
    }

    if toggles.response {
        match &outcome.response {
            Some(text) => {
                let p = dir.join("response.txt");
                fs::write(&p, text)?;
                saved.response = Some(p);
            }
            None => tracing::debug!("no model response to save"),
        }
    }

    if toggles.plan {
        let p = dir.join("plan.json");
        fs::write(&p, to_string_pretty(&outcome.plan)?)?;
        saved.plan = Some(p);
    }

    let meta = json!({
        "id": run,
        "createdAt": Utc::now(),
        "source": outcome.source.label(),
        "parseStage": outcome.stage.map(|s| format!("{s:?}")),
        "creators": outcome.plan.total_creators(),
    });
    fs::write(dir.join("run.json"), to_string_pretty(&meta)?)?;

    Ok(saved)
}

pub fn log_saved_paths(saved: &SavedPaths) {
    tracing::info!(dir = %saved.dir.display(), "run artifacts saved");
    for (what, path) in [("prompt", &saved.prompt), ("response", &saved.response), ("plan", &saved.plan)] {
        match path {
            Some(p) => tracing::debug!("{what} saved at: {}", p.display()),
            None => tracing::debug!("{what} not saved"),
        }
    }
}
