// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Feature preparation for the BuzzFeed/PolitiFact fake news datasets
//!
//! This crate provides:
//! - Loading of the FakeNewsNet content, name-index and share files
//! - Per-article features (length, shares, authors, sentiment, readability)
//! - The flat `training_set.csv` consumed by a downstream classifier
//! - Descriptive statistics, tables and ECDF series by article type

pub mod articles;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod features;
pub mod graphs;
pub mod names;
pub mod pipeline;
pub mod readability;
pub mod sentiment;
pub mod shares;
pub mod stats;
pub mod tables;
pub mod text;

pub use articles::{parse_authors, Article, ArticleSet, Label, Outlet, Partition};
pub use config::PrepConfig;
pub use error::{ExportError, LoadError};
pub use export::{ExportDirs, Exporter, FileCategory, OverwriteDecision};
pub use features::{FeatureExtractor, FeatureRecord};
pub use pipeline::{PrepPipeline, PrepResults};
pub use stats::{ArticleCounts, GroupedSummary, Summary};
