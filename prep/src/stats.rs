// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Descriptive statistics over feature columns
//!
//! Implements:
//! - Mean, median and mode
//! - Sample standard deviation
//! - Range and interquartile range
//! - Skewness and excess kurtosis (biased moment estimators)

use crate::features::{Feature, FeatureRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Summary statistics of one column of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub stdev: f64,
    pub range: f64,
    pub iqr: f64,
    pub skew: f64,
    pub kurtosis: f64,
}

impl Summary {
    /// Summarise `values`. Returns `None` when there are no finite values;
    /// NaN entries are skipped.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;

        // central moments
        let m2 = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let m3 = sorted.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n;
        let m4 = sorted.iter().map(|v| (v - mean).powi(4)).sum::<f64>() / n;

        let stdev = if sorted.len() < 2 {
            0.0
        } else {
            (m2 * n / (n - 1.0)).sqrt()
        };
        let (skew, kurtosis) = if m2 == 0.0 {
            (0.0, 0.0)
        } else {
            (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
        };

        Some(Self {
            count: sorted.len(),
            mean,
            median: percentile(&sorted, 50.0),
            mode: mode(&sorted),
            stdev,
            range: sorted[sorted.len() - 1] - sorted[0],
            iqr: percentile(&sorted, 75.0) - percentile(&sorted, 25.0),
            skew,
            kurtosis,
        })
    }

    /// Statistic values in table row order
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("Mean", self.mean),
            ("Median", self.median),
            ("Mode", self.mode),
            ("Stdev", self.stdev),
            ("Range", self.range),
            ("IQR", self.iqr),
            ("Skew", self.skew),
            ("Kurtosis", self.kurtosis),
        ]
    }
}

/// Percentile `p` (0-100) of sorted values with linear interpolation
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Most frequent value of sorted values, smallest on ties
fn mode(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_run = 0;
    let mut start = 0;

    while start < sorted.len() {
        let mut end = start;
        while end < sorted.len() && sorted[end] == sorted[start] {
            end += 1;
        }
        if end - start > best_run {
            best_run = end - start;
            best = sorted[start];
        }
        start = end;
    }

    best
}

/// Summaries of one feature over all, fake and real articles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedSummary {
    pub feature: Feature,
    pub all: Option<Summary>,
    pub fake: Option<Summary>,
    pub real: Option<Summary>,
}

impl GroupedSummary {
    pub fn from_records(feature: Feature, records: &[FeatureRecord]) -> Self {
        let column = |keep: &dyn Fn(&FeatureRecord) -> bool| -> Vec<f64> {
            records
                .iter()
                .filter(|&r| keep(r))
                .filter_map(|r| r.value(feature))
                .collect()
        };

        Self {
            feature,
            all: Summary::from_values(&column(&|_| true)),
            fake: Summary::from_values(&column(&|r| r.is_fake == 1)),
            real: Summary::from_values(&column(&|r| r.is_fake == 0)),
        }
    }

    pub fn groups(&self) -> [(&'static str, Option<&Summary>); 3] {
        [
            ("all", self.all.as_ref()),
            ("fake", self.fake.as_ref()),
            ("real", self.real.as_ref()),
        ]
    }
}

/// Number of articles, split by label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleCounts {
    pub total: usize,
    pub fake: usize,
    pub real: usize,
}

impl ArticleCounts {
    pub fn from_records(records: &[FeatureRecord]) -> Self {
        let fake = records.iter().filter(|r| r.is_fake == 1).count();
        Self {
            total: records.len(),
            fake,
            real: records.len() - fake,
        }
    }
}
