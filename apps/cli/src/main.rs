//! # `DealForge` CLI
//!
//! Generates synthetic CRM contacts and deals, joins deals to contacts, and
//! prints a sample of the enriched result to stdout. Diagnostics go to
//! stderr so the report stays pipeable.

mod report;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use dforge::domain::config::AppConfig;
use dforge::kernel::config::load_config;
use dforge_logger::Logger;
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

/// Synthetic CRM contact/deal generator.
#[derive(Debug, Parser)]
#[command(name = "dforge")]
#[command(version)]
#[command(about = "Generate synthetic CRM contacts and deals and print enriched samples")]
struct Cli {
    /// Path to a TOML configuration file (defaults to `dforge.toml` if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed seed for a reproducible run (overrides the config file).
    #[arg(short, long)]
    seed: Option<u64>,

    /// How many enriched deals to print (overrides the config file).
    #[arg(long)]
    sample: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).init()?;

    let mut cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(seed) = cli.seed {
        cfg.generation.seed = Some(seed);
    }
    if let Some(sample) = cli.sample {
        cfg.report.sample = sample;
    }
    validate(&cfg)?;

    // Without a pinned seed, draw one from entropy and log it so any run can
    // be reproduced after the fact.
    let seed = cfg.generation.seed.unwrap_or_else(|| rand::rng().random());
    let as_of = Local::now().date_naive();

    info!(
        seed,
        contacts = cfg.generation.contacts,
        deals = cfg.generation.deals,
        "Generating dataset"
    );

    let dataset = dforge::generate(&cfg, seed, as_of);

    let stdout = std::io::stdout();
    report::print_sample(&mut stdout.lock(), &dataset.enriched, cfg.report.sample)
        .context("Failed to write report")?;

    Ok(())
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    let generation = &cfg.generation;

    if !(0.0..=1.0).contains(&generation.unlinked_ratio) {
        anyhow::bail!(
            "generation.unlinked_ratio must be within [0, 1], got {}",
            generation.unlinked_ratio
        );
    }
    if generation.reference_span == 0 {
        anyhow::bail!("generation.reference_span must be at least 1");
    }

    Ok(())
}
