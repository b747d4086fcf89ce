// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Table and graph export CLI
//!
//! Writes article count and statistics tables plus ECDF series into
//! `<root>/visualization/exports/{tables,graphs}`.

use anyhow::Result;
use clap::Parser;
use fakenews_prep::config::PrepConfig;
use fakenews_prep::console;
use fakenews_prep::error::ExportError;
use fakenews_prep::export::{ExportDirs, Exporter};
use fakenews_prep::features::read_training_set;
use fakenews_prep::pipeline::{export_report, PrepPipeline};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "article-report")]
#[command(about = "Export article tables and ECDF series")]
#[command(version)]
struct Args {
    /// JSON configuration file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the raw BuzzFeed/PolitiFact files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Read features from an existing training set instead of the raw files
    #[arg(short, long)]
    training_set: Option<PathBuf>,

    /// Root directory containing visualization/exports
    #[arg(short, long)]
    export_root: Option<PathBuf>,

    /// Decimal places in tables
    #[arg(long)]
    decimals: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    console::configure_colors();

    let args = Args::parse();

    let mut config = PrepConfig::load(args.config.as_deref())?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(root) = args.export_root {
        config.export_root = root;
    }
    if let Some(decimals) = args.decimals {
        config.decimals = decimals;
    }

    // Fail on missing export directories before doing any work
    let dirs = ExportDirs::locate(&config.export_root)?;

    let records = match args.training_set {
        Some(ref path) => {
            tracing::info!("Reading features from {}", path.display());
            read_training_set(path)?
        }
        None => PrepPipeline::new(config.clone())?.with_progress(true).build_records()?,
    };

    let stdin = std::io::stdin();
    let mut exporter = Exporter::new(dirs, stdin.lock(), std::io::stdout());

    match export_report(&records, config.decimals, &mut exporter) {
        Ok(written) => {
            println!("\nExported {} files:", written.len());
            for path in written {
                println!("  - {}", path.display());
            }
            Ok(())
        }
        Err(e) if matches!(e.downcast_ref::<ExportError>(), Some(ExportError::OverwriteDeclined(_))) => {
            std::process::exit(0);
        }
        Err(e) => Err(e),
    }
}
