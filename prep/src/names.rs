// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Remapping of raw CSV ids to canonical article names
//!
//! Each outlet ships a `<Outlet>News.txt` file listing one canonical article
//! name per line, reals first and fakes after a fixed offset. A raw id such
//! as `Fake_12-Webpage` points at line `12 + offset` of that file.

use crate::error::LoadError;
use anyhow::{Context, Result};
use std::path::Path;

/// Line-addressable contents of an outlet's name-index file
#[derive(Debug, Clone)]
pub struct NameIndex {
    file: String,
    lines: Vec<String>,
}

impl NameIndex {
    /// Read a name-index file into memory
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open name index: {}", path.display()))?;
        Ok(Self::from_lines(path.display().to_string(), raw.lines()))
    }

    pub fn from_lines<'a>(file: String, lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            file,
            lines: lines.into_iter().map(|l| l.trim_end_matches('\r').to_string()).collect(),
        }
    }

    /// Name on the 1-based `line`, if present
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// 1-based line number of `name`, if present
    pub fn line_of(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l == name).map(|idx| idx + 1)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolve a raw CSV id to its canonical name.
    ///
    /// `offset` is added to the numeric part of the id; it is 0 for real
    /// articles and the outlet's fake offset for fake ones.
    pub fn resolve(&self, raw_id: &str, offset: usize) -> std::result::Result<String, LoadError> {
        let number = parse_raw_id(raw_id).ok_or_else(|| LoadError::MalformedId {
            raw: raw_id.to_string(),
            file: self.file.clone(),
        })?;
        let line = number.checked_add(offset).ok_or_else(|| LoadError::MalformedId {
            raw: raw_id.to_string(),
            file: self.file.clone(),
        })?;

        self.line(line)
            .map(str::to_string)
            .ok_or_else(|| LoadError::UnknownArticle {
                raw: raw_id.to_string(),
                line,
                file: self.file.clone(),
            })
    }
}

/// Extract `n` from an id of the form `<Label>_<n>-<Suffix>`
pub fn parse_raw_id(raw_id: &str) -> Option<usize> {
    let start = raw_id.find('_')? + 1;
    let len = raw_id[start..].find('-')?;
    raw_id[start..start + len].trim().parse().ok()
}
