//! CLI binary for kwmine.

use clap::Parser;
use kwmine::{AppConfig, ConfigOverrides, ProgressReporter};
use kwmine_suggest::CancellationToken;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// kwmine: mine Google and Bing autocomplete suggestions from seed words.
#[derive(Parser)]
#[command(name = "kwmine", version, about)]
struct Cli {
    /// Path to TOML configuration file (defaults to ~/.config/kwmine/config.toml if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed file, one seed per line.
    #[arg(short, long, env = "KWMINE_SEEDS")]
    seeds: Option<PathBuf>,

    /// Output file for unique suggestions.
    #[arg(short, long, env = "KWMINE_OUTPUT")]
    output: Option<PathBuf>,

    /// Number of concurrent workers.
    #[arg(short, long, env = "KWMINE_WORKERS")]
    workers: Option<usize>,

    /// Query only the bare seeds, without suffix expansion.
    #[arg(long)]
    no_expand: bool,

    /// Hide the progress bar.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; warnings from individual failed requests stay
    // hidden unless RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kwmine=info,kwmine_suggest=error")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, finishing in-flight work...");
            cancel_clone.cancel();
        }
    });

    let reporter = if cli.quiet {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::new()
    };
    let callback = reporter.callback();

    info!(
        seeds = %config.input.seeds_path.display(),
        output = %config.output.path.display(),
        workers = config.miner.workers,
        "kwmine v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let outcome = kwmine::run(&config, Some(&callback), &cancel).await?;

    println!("{}", outcome.summary());
    println!(
        "wrote {} rows to {}",
        outcome.rows_written,
        outcome.output_path.display()
    );
    Ok(())
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seeds_path: self.seeds.clone(),
            output_path: self.output.clone(),
            workers: self.workers,
            no_expand: self.no_expand,
        }
    }
}

/// Defaults, then the config file, then env/CLI overrides.
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match cli.config {
        Some(ref path) => AppConfig::from_file(path)?,
        None => {
            let path = AppConfig::default_config_path();
            if path.exists() {
                AppConfig::from_file(&path)?
            } else {
                AppConfig::default()
            }
        }
    };
    config.apply_overrides(&cli.overrides());
    Ok(config)
}
