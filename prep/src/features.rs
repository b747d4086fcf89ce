// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Per-article feature extraction and the flat training set
//!
//! One [`FeatureRecord`] is produced per article, fakes first and then reals,
//! each group in load order. Readability is left empty for texts under
//! [`READABILITY_MIN_WORDS`] words.

use crate::articles::{Article, ArticleSet, Label};
use crate::readability::{DaleChall, READABILITY_MIN_WORDS};
use crate::sentiment::SentimentScorer;
use crate::text;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A numeric column of the training set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Length,
    Shares,
    NumAuthors,
    Sentiment,
    Readability,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Length,
        Feature::Shares,
        Feature::NumAuthors,
        Feature::Sentiment,
        Feature::Readability,
    ];

    /// Column header in the training set CSV
    pub fn column(&self) -> &'static str {
        match self {
            Feature::Length => "length",
            Feature::Shares => "shares",
            Feature::NumAuthors => "num_authors",
            Feature::Sentiment => "sentiment-score",
            Feature::Readability => "readability-score",
        }
    }

    /// Human-readable name used in table titles
    pub fn title(&self) -> &'static str {
        match self {
            Feature::Length => "Length",
            Feature::Shares => "Shares",
            Feature::NumAuthors => "Authors",
            Feature::Sentiment => "Sentiment",
            Feature::Readability => "Readability",
        }
    }

    /// Whether the statistics of this feature are whole numbers
    pub fn is_count(&self) -> bool {
        matches!(self, Feature::Length | Feature::Shares | Feature::NumAuthors)
    }
}

/// One row of the training set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub length: usize,
    pub shares: u64,
    pub num_authors: usize,
    #[serde(rename = "sentiment-score")]
    pub sentiment_score: f64,
    #[serde(rename = "readability-score")]
    pub readability_score: Option<f64>,
    /// 1 = fake, 0 = real
    #[serde(rename = "is-fake")]
    pub is_fake: u8,
}

impl FeatureRecord {
    /// Value of `feature`; `None` for a missing readability score
    pub fn value(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Length => Some(self.length as f64),
            Feature::Shares => Some(self.shares as f64),
            Feature::NumAuthors => Some(self.num_authors as f64),
            Feature::Sentiment => Some(self.sentiment_score),
            Feature::Readability => self.readability_score,
        }
    }
}

/// Computes feature records with a fixed pair of text scorers
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    sentiment: SentimentScorer,
    readability: DaleChall,
    show_progress: bool,
}

impl FeatureExtractor {
    pub fn new(sentiment: SentimentScorer, readability: DaleChall) -> Self {
        Self {
            sentiment,
            readability,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Feature record of a single article
    pub fn extract(&self, article: &Article) -> FeatureRecord {
        let text = article.scoring_text();

        let readability_score = if text::word_count(&text) >= READABILITY_MIN_WORDS {
            self.readability.score(&text).map(|r| r.score)
        } else {
            None
        };

        FeatureRecord {
            length: article.length(),
            shares: article.shares,
            num_authors: article.authors.len(),
            sentiment_score: self.sentiment.score(&text),
            readability_score,
            is_fake: article.label.to_binary(),
        }
    }

    /// Feature records of all articles, fakes first
    pub fn extract_all(&self, articles: &ArticleSet) -> Vec<FeatureRecord> {
        let mut records = Vec::with_capacity(articles.len());

        for label in Label::ORDER {
            let group = articles.group(label);
            let pb = self.progress_bar(group.len() as u64, label);

            for article in group {
                records.push(self.extract(article));
                pb.inc(1);
            }

            pb.finish_and_clear();
            tracing::info!("Created {} {} article rows", group.len(), label.as_str());
        }

        records
    }

    fn progress_bar(&self, len: u64, label: Label) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg} [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(format!("Creating {} article data", label.as_str()));
        pb
    }
}

/// Write the training set CSV, creating parent directories as needed
pub fn write_training_set(records: &[FeatureRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create training set: {}", path.display()))?;
    write_records(records, file)?;

    tracing::info!("Training set with {} rows saved to {}", records.len(), path.display());
    Ok(())
}

/// Serialise records as CSV with a header row
pub fn write_records<W: std::io::Write>(records: &[FeatureRecord], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a training set CSV back
pub fn read_training_set(path: &Path) -> Result<Vec<FeatureRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open training set: {}", path.display()))?;
    reader
        .deserialize()
        .enumerate()
        .map(|(idx, row)| row.with_context(|| format!("Failed to read row {} of {}", idx, path.display())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::Outlet;

    fn article(title: &str, body: &str, authors: &[&str], shares: u64, label: Label) -> Article {
        Article {
            id: format!("BuzzFeed_{:?}_1", label),
            title: title.to_string(),
            body: body.to_string(),
            url: "None".to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            source: "None".to_string(),
            publish_date: "None".to_string(),
            shares,
            label,
            outlet: Outlet::BuzzFeed,
        }
    }

    #[test]
    fn test_extract_single_article() {
        let extractor = FeatureExtractor::default();
        let record = extractor.extract(&article("A B", "C D", &["Jane"], 5, Label::Fake));

        assert_eq!(record.length, 6);
        assert_eq!(record.shares, 5);
        assert_eq!(record.num_authors, 1);
        assert_eq!(record.readability_score, None);
        assert_eq!(record.is_fake, 1);
    }

    #[test]
    fn test_readability_threshold() {
        let extractor = FeatureExtractor::default();
        // 99 body words + 1 title word = 100
        let body = vec!["word"; 99].join(" ");
        let record = extractor.extract(&article("Title", &body, &[], 0, Label::Real));
        assert!(record.readability_score.is_some());

        let body = vec!["word"; 98].join(" ");
        let record = extractor.extract(&article("Title", &body, &[], 0, Label::Real));
        assert!(record.readability_score.is_none());
    }

    #[test]
    fn test_extract_all_orders_fakes_first() {
        let mut set = ArticleSet::default();
        set.push(vec![
            article("r1", "x", &[], 1, Label::Real),
            article("r2", "x", &[], 2, Label::Real),
        ]);
        set.push(vec![article("f1", "x", &[], 3, Label::Fake)]);

        let records = FeatureExtractor::default().extract_all(&set);

        assert_eq!(records.len(), 3);
        let shares: Vec<u64> = records.iter().map(|r| r.shares).collect();
        assert_eq!(shares, vec![3, 1, 2]);
        let labels: Vec<u8> = records.iter().map(|r| r.is_fake).collect();
        assert_eq!(labels, vec![1, 0, 0]);
    }

    #[test]
    fn test_csv_layout() {
        let records = vec![
            FeatureRecord {
                length: 6,
                shares: 5,
                num_authors: 1,
                sentiment_score: 0.0,
                readability_score: None,
                is_fake: 1,
            },
            FeatureRecord {
                length: 700,
                shares: 2,
                num_authors: 0,
                sentiment_score: -0.5,
                readability_score: Some(7.25),
                is_fake: 0,
            },
        ];
        let mut out = Vec::new();
        write_records(&records, &mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("length,shares,num_authors,sentiment-score,readability-score,is-fake")
        );
        assert_eq!(lines.next(), Some("6,5,1,0.0,,1"));
        assert_eq!(lines.next(), Some("700,2,0,-0.5,7.25,0"));
    }

    #[test]
    fn test_training_set_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("training_set.csv");
        let records = vec![FeatureRecord {
            length: 12,
            shares: 3,
            num_authors: 2,
            sentiment_score: 0.25,
            readability_score: None,
            is_fake: 0,
        }];

        write_training_set(&records, &path).unwrap();
        assert_eq!(read_training_set(&path).unwrap(), records);
    }

    #[test]
    fn test_record_values() {
        let record = FeatureRecord {
            length: 10,
            shares: 4,
            num_authors: 2,
            sentiment_score: 0.5,
            readability_score: None,
            is_fake: 1,
        };
        assert_eq!(record.value(Feature::Length), Some(10.0));
        assert_eq!(record.value(Feature::Readability), None);
        assert!(Feature::Shares.is_count());
        assert!(!Feature::Sentiment.is_count());
    }
}
