// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Training set preparation CLI
//!
//! Usage:
//!   prepare-training-set --data-dir ./data/raw --output ./output/training_set.csv
//!   prepare-training-set --config prep.json

use anyhow::Result;
use clap::Parser;
use fakenews_prep::config::PrepConfig;
use fakenews_prep::pipeline::PrepPipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prepare-training-set")]
#[command(about = "Build the fake/real news training set")]
#[command(version)]
struct Args {
    /// JSON configuration file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the raw BuzzFeed/PolitiFact files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Path of the training set CSV
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replacement Dale-Chall easy word list, one word per line
    #[arg(long)]
    easy_words: Option<PathBuf>,

    /// Do not write the JSON run summary
    #[arg(long)]
    no_summary: bool,

    /// Hide progress bars
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = PrepConfig::load(args.config.as_deref())?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(output) = args.output {
        config.training_set_path = output;
    }
    if args.easy_words.is_some() {
        config.easy_words_path = args.easy_words;
    }
    if args.no_summary {
        config.write_summary = false;
    }

    tracing::info!("Fake News Training Set Preparation");
    tracing::info!("==================================");
    tracing::info!("Data: {}", config.data_dir.display());
    tracing::info!("Output: {}", config.training_set_path.display());

    let pipeline = PrepPipeline::new(config)?.with_progress(!args.quiet);
    let results = pipeline.run()?;

    println!("\n{}", "=".repeat(60));
    println!("TRAINING SET SUMMARY");
    println!("{}", "=".repeat(60));
    println!(
        "Articles: {} (fake={}, real={})",
        results.counts.total, results.counts.fake, results.counts.real
    );
    println!("{:-<60}", "");
    println!("{:<20} {:>12} {:>12} {:>12}", "Feature", "Mean", "Fake mean", "Real mean");
    println!("{:-<60}", "");
    for summary in &results.summaries {
        let mean = |s: Option<&fakenews_prep::Summary>| {
            s.map_or("-".to_string(), |s| format!("{:.3}", s.mean))
        };
        println!(
            "{:<20} {:>12} {:>12} {:>12}",
            summary.feature.column(),
            mean(summary.all.as_ref()),
            mean(summary.fake.as_ref()),
            mean(summary.real.as_ref())
        );
    }
    println!("{:-<60}", "");
    println!("\nTraining set saved to: {}", pipeline.config().training_set_path.display());

    Ok(())
}
