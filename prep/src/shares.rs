// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Share counts per article
//!
//! `<Outlet>NewsUser.txt` records how often each user shared each article as
//! `<news line> <user line> <count>` triples. The share count of an article
//! is the sum of `count` over its triples.

use crate::error::LoadError;
use crate::names::NameIndex;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Share count keyed by canonical article name
#[derive(Debug, Clone, Default)]
pub struct ShareCounts {
    by_name: HashMap<String, u64>,
}

impl ShareCounts {
    /// Load an outlet's share file and key its totals by canonical name
    pub fn load(path: &Path, names: &NameIndex) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open share file: {}", path.display()))?;
        let per_line = parse_share_lines(&raw, &path.display().to_string())?;

        let mut counts = Self::default();
        for (news_line, shares) in per_line {
            match names.line(news_line) {
                Some(name) => counts.insert(name, shares),
                None => tracing::warn!(
                    "Share file {} references news line {} which has no name",
                    path.display(),
                    news_line
                ),
            }
        }
        Ok(counts)
    }

    pub fn insert(&mut self, name: &str, shares: u64) {
        *self.by_name.entry(name.to_string()).or_insert(0) += shares;
    }

    pub fn get(&self, name: &str) -> std::result::Result<u64, LoadError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| LoadError::MissingShares { name: name.to_string() })
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<(String, u64)> for ShareCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Self::default();
        for (name, shares) in iter {
            counts.insert(&name, shares);
        }
        counts
    }
}

/// Sum share counts per news line. Blank lines are skipped.
fn parse_share_lines(raw: &str, file: &str) -> std::result::Result<HashMap<usize, u64>, LoadError> {
    let mut totals = HashMap::new();

    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = || LoadError::MalformedShareLine {
            line: idx + 1,
            file: file.to_string(),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(malformed());
        }
        let news_line: usize = fields[0].parse().map_err(|_| malformed())?;
        let count: u64 = fields[2].parse().map_err(|_| malformed())?;

        *totals.entry(news_line).or_insert(0) += count;
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_share_lines_sums_per_article() {
        let totals = parse_share_lines("1\t10\t2\n1\t11\t3\n2\t10\t1\n\n", "x").unwrap();
        assert_eq!(totals[&1], 5);
        assert_eq!(totals[&2], 1);
    }

    #[test]
    fn test_parse_share_lines_rejects_garbage() {
        let err = parse_share_lines("1\t10\n", "x").unwrap_err();
        assert!(matches!(err, LoadError::MalformedShareLine { line: 1, .. }));

        let err = parse_share_lines("1 2 3\na b c\n", "x").unwrap_err();
        assert!(matches!(err, LoadError::MalformedShareLine { line: 2, .. }));
    }

    #[test]
    fn test_load_keys_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NewsUser.txt");
        std::fs::write(&path, "1\t1\t4\n2\t1\t1\n2\t2\t6\n").unwrap();
        let names = NameIndex::from_lines("News.txt".to_string(), ["Real_1", "Fake_1"]);

        let counts = ShareCounts::load(&path, &names).unwrap();

        assert_eq!(counts.get("Real_1").unwrap(), 4);
        assert_eq!(counts.get("Fake_1").unwrap(), 7);
        assert!(matches!(counts.get("Fake_2"), Err(LoadError::MissingShares { .. })));
    }
}
