//! Build command implementation.

use anyhow::{Context, Result};
use roster_core::{BuildOutcome, Config, SiteBuilder};
use std::path::PathBuf;

/// Options for a build run
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub keep_going: bool,
}

/// Build every profile page and print the summary line
pub fn build_profiles(opts: &BuildOptions) -> Result<()> {
    let mut config = load_config(opts)?;
    if opts.keep_going {
        config.keep_going = true;
    }

    tracing::info!("Building profiles for {}", config.site_name);

    let builder = SiteBuilder::new(config);
    let outcome = builder.build().context("Failed to build profile pages")?;

    match outcome {
        BuildOutcome::NoProfilesDirectory => {
            println!("No profiles directory found.");
        }
        BuildOutcome::Built(summary) => {
            if !summary.skipped.is_empty() {
                tracing::warn!("{} profile(s) skipped", summary.skipped.len());
            }
            println!("Built {} profile page(s).", summary.built());
        }
    }

    Ok(())
}

fn load_config(opts: &BuildOptions) -> Result<Config> {
    match &opts.config {
        Some(path) => {
            tracing::info!("Loading config from {:?}", path);
            Config::from_file(path, &opts.root).context("Failed to load configuration")
        }
        None => Config::discover(&opts.root).context("Failed to load configuration"),
    }
}
