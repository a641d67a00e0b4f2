//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::search::{Engine, SearchConfig, Traversal};

/// Engine options accepted by every command that runs a search
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON file with a search configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use the explicit-stack traversal
    #[arg(long)]
    pub iterative: bool,

    /// Stop after visiting this many states (budgeted mode)
    #[arg(long)]
    pub max_nodes: Option<u64>,
}

impl SearchArgs {
    /// Merge the config file (if any) with the command-line overrides.
    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)
                .with_context(|| format!("failed to load search config {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if self.iterative {
            config = config.with_traversal(Traversal::Iterative);
        }
        if let Some(max_nodes) = self.max_nodes {
            config = config.with_max_nodes(max_nodes);
        }
        Ok(config)
    }

    pub fn engine(&self) -> Result<Engine> {
        let config = self.search_config()?;
        Engine::new(config).context("invalid search configuration")
    }
}
