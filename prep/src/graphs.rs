// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Empirical CDF series of features by article type

use crate::features::{Feature, FeatureRecord};
use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;

/// One point of an ECDF curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcdfPoint {
    pub group: &'static str,
    pub value: f64,
    pub ecdf: f64,
}

/// `(value, fraction of values <= value)` for each distinct value, ascending
pub fn ecdf(values: &[f64]) -> Vec<(f64, f64)> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len() as f64;
    let mut points: Vec<(f64, f64)> = Vec::new();
    for (idx, value) in sorted.iter().enumerate() {
        let fraction = (idx + 1) as f64 / n;
        match points.last_mut() {
            Some(last) if last.0 == *value => last.1 = fraction,
            _ => points.push((*value, fraction)),
        }
    }
    points
}

/// ECDF curves of one feature for all, fake and real articles
#[derive(Debug, Clone)]
pub struct EcdfGraph {
    pub feature: Feature,
    pub points: Vec<EcdfPoint>,
}

impl EcdfGraph {
    pub fn from_records(feature: Feature, records: &[FeatureRecord]) -> Self {
        let groups: [(&'static str, Option<u8>); 3] = [("all", None), ("fake", Some(1)), ("real", Some(0))];

        let points = groups
            .iter()
            .flat_map(|&(group, label)| {
                let values: Vec<f64> = records
                    .iter()
                    .filter(|r| label.map_or(true, |l| r.is_fake == l))
                    .filter_map(|r| r.value(feature))
                    .collect();
                ecdf(&values)
                    .into_iter()
                    .map(move |(value, ecdf)| EcdfPoint { group, value, ecdf })
            })
            .collect();

        Self { feature, points }
    }

    pub fn file_name(&self) -> String {
        format!("ecdfs/{}_vs_type_of_article.csv", self.feature.title().to_lowercase())
    }

    /// Render as CSV with a `group,value,ecdf` header
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for point in &self.points {
            writer.serialize(point)?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// One ECDF graph per feature
pub fn report_graphs(records: &[FeatureRecord]) -> Vec<EcdfGraph> {
    Feature::ALL
        .iter()
        .map(|feature| EcdfGraph::from_records(*feature, records))
        .collect()
}
