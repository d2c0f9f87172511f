use anyhow::{Context, Result};
use async_trait::async_trait;
use fs_err as fs;
use std::path::PathBuf;

use super::Provider;

/// Answers every prompt with a previously captured response file.
pub struct Replay {
    path: PathBuf,
}

impl Replay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Provider for Replay {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        tracing::info!(path = %self.path.display(), "replaying captured response");
        fs::read_to_string(&self.path).context("could not read response file")
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}
