//! # roster CLI
//!
//! Command-line interface for the guild roster profile page builder.

mod commands;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root holding profiles/ and the index.html template
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Path to configuration file (defaults to roster.yml in the root, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip malformed profiles instead of aborting the build
    #[arg(long)]
    keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the build summary
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let opts = commands::BuildOptions {
        root: cli.root,
        config: cli.config,
        keep_going: cli.keep_going,
    };
    commands::build_profiles(&opts)
}
