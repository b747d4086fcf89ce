// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Typed errors for dataset loading and export path resolution

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort loading of the raw dataset files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("article id '{raw}' in {file} is not of the form <Label>_<n>-<Suffix>")]
    MalformedId { raw: String, file: String },

    #[error("article '{raw}' maps to line {line} of {file}, which does not exist")]
    UnknownArticle { raw: String, line: usize, file: String },

    #[error("article name '{name}' appears more than once in {partition}")]
    DuplicateArticle { name: String, partition: String },

    #[error("row {row} of {file} has no article text")]
    MissingText { row: usize, file: String },

    #[error("no share count recorded for article '{name}'")]
    MissingShares { name: String },

    #[error("line {line} of {file} is not a '<news> <user> <count>' triple")]
    MalformedShareLine { line: usize, file: String },
}

/// Conditions raised while resolving where a table or graph is written
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export directory '{0}' does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("invalid file category '{0}': must be 'graph' or 'table'")]
    InvalidCategory(String),

    #[error("file name '{0}' has no extension")]
    MissingExtension(String),

    #[error("overwrite of '{0}' declined")]
    OverwriteDeclined(PathBuf),

    #[error("input closed before an answer to the overwrite prompt was given")]
    PromptClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
