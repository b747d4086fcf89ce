// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Article count and basic-statistics tables

use crate::features::{Feature, FeatureRecord};
use crate::stats::{ArticleCounts, GroupedSummary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};

/// Statistics reported as whole numbers for count-valued features
const WHOLE_NUMBER_STATS: &[&str] = &["Median", "Mode", "Range", "IQR"];

/// A titled table and the file name it is exported under
#[derive(Debug)]
pub struct ReportTable {
    pub file_name: String,
    pub title: String,
    pub table: Table,
}

impl ReportTable {
    /// Title line followed by the rendered table
    pub fn render(&self) -> String {
        format!("{}\n{}\n", self.title, self.table)
    }
}

fn new_table(header: Vec<String>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn align_numbers(table: &mut Table, columns: usize) {
    for idx in 1..columns {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Counts of all, fake and real articles
pub fn article_counts_table(counts: &ArticleCounts) -> ReportTable {
    let mut table = new_table(vec![
        String::new(),
        "# Unique".to_string(),
        "# Fake".to_string(),
        "# Real".to_string(),
    ]);
    table.add_row(vec![
        "Counts".to_string(),
        counts.total.to_string(),
        counts.fake.to_string(),
        counts.real.to_string(),
    ]);
    align_numbers(&mut table, 4);

    ReportTable {
        file_name: "articles/articles_counts_table.txt".to_string(),
        title: "Article Counts".to_string(),
        table,
    }
}

/// Format one statistic, truncating to an integer where the feature counts things
pub fn format_stat(feature: Feature, stat: &str, value: f64, decimals: u32) -> String {
    if feature.is_count() && WHOLE_NUMBER_STATS.contains(&stat) {
        format!("{}", value.trunc() as i64)
    } else {
        format!("{:.*}", decimals as usize, value)
    }
}

/// Mean, median, mode, stdev, range, IQR, skew and kurtosis of a feature
/// per article, per fake article and per real article
pub fn basic_statistics_table(summary: &GroupedSummary, decimals: u32) -> ReportTable {
    let name = summary.feature.title();
    let mut table = new_table(vec![
        String::new(),
        format!("{}/Article", name),
        format!("{}/Fake", name),
        format!("{}/Real", name),
    ]);

    let stat_names = ["Mean", "Median", "Mode", "Stdev", "Range", "IQR", "Skew", "Kurtosis"];
    for (row_idx, stat) in stat_names.iter().enumerate() {
        let mut row = vec![stat.to_string()];
        for (_, group) in summary.groups() {
            row.push(match group {
                Some(s) => format_stat(summary.feature, stat, s.rows()[row_idx].1, decimals),
                None => "-".to_string(),
            });
        }
        table.add_row(row);
    }
    align_numbers(&mut table, 4);

    let slug = summary.feature.title().to_lowercase();
    ReportTable {
        file_name: format!("articles/{}_per_article_basic_statistics.txt", slug),
        title: format!("{} Per Article Basic Statistics", name),
        table,
    }
}

/// The counts table followed by one statistics table per feature
pub fn report_tables(records: &[FeatureRecord], decimals: u32) -> Vec<ReportTable> {
    let mut tables = vec![article_counts_table(&ArticleCounts::from_records(records))];
    for feature in Feature::ALL {
        let summary = GroupedSummary::from_records(feature, records);
        tables.push(basic_statistics_table(&summary, decimals));
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(shares: u64, sentiment: f64, is_fake: u8) -> FeatureRecord {
        FeatureRecord {
            length: 100,
            shares,
            num_authors: 1,
            sentiment_score: sentiment,
            readability_score: None,
            is_fake,
        }
    }

    #[test]
    fn test_counts_table() {
        let table = article_counts_table(&ArticleCounts { total: 422, fake: 211, real: 211 });
        let rendered = table.render();

        assert!(rendered.starts_with("Article Counts\n"));
        assert!(rendered.contains("# Unique"));
        assert!(rendered.contains("422"));
        assert!(rendered.contains("211"));
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(Feature::Shares, "Median", 12.5, 3), "12");
        assert_eq!(format_stat(Feature::Shares, "Mean", 12.5, 3), "12.500");
        assert_eq!(format_stat(Feature::Sentiment, "Median", 0.12345, 2), "0.12");
    }

    #[test]
    fn test_statistics_table() {
        let records = vec![record(10, 0.5, 1), record(20, -0.5, 1), record(6, 0.0, 0)];
        let summary = GroupedSummary::from_records(Feature::Shares, &records);
        let table = basic_statistics_table(&summary, 2);
        let rendered = table.render();

        assert_eq!(table.file_name, "articles/shares_per_article_basic_statistics.txt");
        assert!(rendered.starts_with("Shares Per Article Basic Statistics"));
        assert!(rendered.contains("Shares/Fake"));
        assert!(rendered.contains("Kurtosis"));
        // mean of fake shares
        assert!(rendered.contains("15.00"));
    }

    #[test]
    fn test_missing_group_renders_dash() {
        let records = vec![record(1, 0.0, 1)];
        let summary = GroupedSummary::from_records(Feature::Readability, &records);
        let rendered = basic_statistics_table(&summary, 2).render();
        assert!(rendered.contains('-'));
    }

    #[test]
    fn test_report_tables() {
        let records = vec![record(1, 0.1, 1), record(2, 0.2, 0)];
        let tables = report_tables(&records, 3);
        assert_eq!(tables.len(), 1 + Feature::ALL.len());
        assert_eq!(tables[0].file_name, "articles/articles_counts_table.txt");
    }
}
