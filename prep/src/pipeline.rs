// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Training-set preparation pipeline
//!
//! Orchestrates:
//! - Dataset loading and id remapping
//! - Feature extraction
//! - Training set and run summary serialization
//! - Table and graph export

use crate::articles::ArticleSet;
use crate::config::PrepConfig;
use crate::export::{Exporter, FileCategory};
use crate::features::{write_training_set, Feature, FeatureExtractor, FeatureRecord};
use crate::graphs::report_graphs;
use crate::readability::DaleChall;
use crate::sentiment::SentimentScorer;
use crate::stats::{ArticleCounts, GroupedSummary};
use crate::tables::report_tables;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Summary of a preparation run, saved next to the training set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepResults {
    pub config: PrepConfig,
    pub counts: ArticleCounts,
    pub summaries: Vec<GroupedSummary>,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl PrepResults {
    pub fn from_records(config: PrepConfig, records: &[FeatureRecord]) -> Self {
        Self {
            config,
            counts: ArticleCounts::from_records(records),
            summaries: Feature::ALL
                .iter()
                .map(|feature| GroupedSummary::from_records(*feature, records))
                .collect(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, output_path: &Path) -> Result<()> {
        std::fs::create_dir_all(output_path.parent().unwrap_or(Path::new(".")))?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(output_path, json)?;
        tracing::info!("Run summary saved to {}", output_path.display());
        Ok(())
    }
}

/// Main preparation pipeline
pub struct PrepPipeline {
    config: PrepConfig,
    extractor: FeatureExtractor,
}

impl PrepPipeline {
    /// Build the pipeline, loading a custom easy word list if configured
    pub fn new(config: PrepConfig) -> Result<Self> {
        let readability = match config.easy_words_path {
            Some(ref path) => DaleChall::from_file(path)?,
            None => DaleChall::new(),
        };
        let extractor = FeatureExtractor::new(SentimentScorer::new(), readability);
        Ok(Self { config, extractor })
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.extractor = self.extractor.with_progress(show);
        self
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Load the articles and compute one feature record per article
    pub fn build_records(&self) -> Result<Vec<FeatureRecord>> {
        tracing::info!("Loading articles from {}", self.config.data_dir.display());
        let articles = ArticleSet::load(&self.config.data_dir)?;
        tracing::info!(
            "Articles loaded: {} (fake={}, real={})",
            articles.len(),
            articles.fake.len(),
            articles.real.len()
        );

        Ok(self.extractor.extract_all(&articles))
    }

    /// Build the training set, write it and optionally its run summary
    pub fn run(&self) -> Result<PrepResults> {
        let records = self.build_records()?;
        write_training_set(&records, &self.config.training_set_path)?;

        let results = PrepResults::from_records(self.config.clone(), &records);
        if self.config.write_summary {
            results.save(&self.config.summary_path())?;
        }

        Ok(results)
    }
}

/// Export all tables and graphs for `records`, returning the written paths
pub fn export_report<R: BufRead, W: Write>(
    records: &[FeatureRecord],
    decimals: u32,
    exporter: &mut Exporter<R, W>,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for table in report_tables(records, decimals) {
        written.push(exporter.write(&table.file_name, FileCategory::Table, &table.render())?);
    }
    for graph in report_graphs(records) {
        written.push(exporter.write(&graph.file_name(), FileCategory::Graph, &graph.to_csv()?)?);
    }

    tracing::info!("Exported {} tables and graphs", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportDirs;
    use std::io::Cursor;

    fn records() -> Vec<FeatureRecord> {
        vec![
            FeatureRecord {
                length: 120,
                shares: 4,
                num_authors: 1,
                sentiment_score: 0.2,
                readability_score: Some(7.5),
                is_fake: 1,
            },
            FeatureRecord {
                length: 300,
                shares: 9,
                num_authors: 2,
                sentiment_score: -0.1,
                readability_score: None,
                is_fake: 0,
            },
        ]
    }

    #[test]
    fn test_results_summary() {
        let results = PrepResults::from_records(PrepConfig::default(), &records());

        assert_eq!(results.counts, ArticleCounts { total: 2, fake: 1, real: 1 });
        assert_eq!(results.summaries.len(), Feature::ALL.len());
        assert_eq!(results.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_results_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("summary.json");
        PrepResults::from_records(PrepConfig::default(), &records()).save(&path).unwrap();

        let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["counts"]["total"], 2);
    }

    #[test]
    fn test_export_report_writes_tables_and_graphs() {
        let root = tempfile::tempdir().unwrap();
        let exports = root.path().join("visualization").join("exports");
        std::fs::create_dir_all(exports.join("graphs")).unwrap();
        std::fs::create_dir_all(exports.join("tables")).unwrap();

        let dirs = ExportDirs::locate(root.path()).unwrap();
        let mut exporter = Exporter::new(dirs, Cursor::new(Vec::new()), Vec::new());
        let written = export_report(&records(), 3, &mut exporter).unwrap();

        assert_eq!(written.len(), 1 + 2 * Feature::ALL.len());
        assert!(exports.join("tables/articles/articles_counts_table.txt").exists());
        assert!(exports.join("graphs/ecdfs/sentiment_vs_type_of_article.csv").exists());
    }

    #[test]
    fn test_missing_easy_word_file_fails() {
        let config = PrepConfig {
            easy_words_path: Some(PathBuf::from("no/such/words.txt")),
            ..PrepConfig::default()
        };
        assert!(PrepPipeline::new(config).is_err());
    }
}
