// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Resolution of export paths for tables and graphs
//!
//! Exports live in `<root>/visualization/exports/{graphs,tables}`. Both
//! directories must exist before anything is written. Writing over an
//! existing file requires an explicit `y` on the overwrite prompt.

use crate::console;
use crate::error::ExportError;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Kind of exported file, selecting its directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Graph,
    Table,
}

impl FromStr for FileCategory {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graph" => Ok(FileCategory::Graph),
            "table" => Ok(FileCategory::Table),
            other => Err(ExportError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileCategory::Graph => f.write_str("graph"),
            FileCategory::Table => f.write_str("table"),
        }
    }
}

/// The two export directories
#[derive(Debug, Clone)]
pub struct ExportDirs {
    graphs: PathBuf,
    tables: PathBuf,
}

impl ExportDirs {
    /// Locate the export directories under `root`, failing if either is missing
    pub fn locate(root: &Path) -> Result<Self, ExportError> {
        let exports = root.join("visualization").join("exports");
        let dirs = Self {
            graphs: exports.join("graphs"),
            tables: exports.join("tables"),
        };

        for dir in [&dirs.graphs, &dirs.tables] {
            if !dir.is_dir() {
                let name = dir.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                eprintln!(
                    "{} {} {} {}",
                    console::alert("The directory"),
                    console::file(&name),
                    console::alert("does not exist. Please create it in"),
                    console::file(&dir.display().to_string())
                );
                return Err(ExportError::DirectoryNotFound(dir.clone()));
            }
        }

        Ok(dirs)
    }

    pub fn dir(&self, category: FileCategory) -> &Path {
        match category {
            FileCategory::Graph => &self.graphs,
            FileCategory::Table => &self.tables,
        }
    }

    /// Target path of `file_name` (which may contain subdirectories)
    pub fn target_path(&self, file_name: &str, category: FileCategory) -> Result<PathBuf, ExportError> {
        if Path::new(file_name).extension().is_none() {
            return Err(ExportError::MissingExtension(file_name.to_string()));
        }
        Ok(self.dir(category).join(file_name))
    }
}

/// Answer given on the overwrite prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    Overwrite,
    Abort,
}

/// Ask whether `path` may be overwritten until the answer is `y` or `n`
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<OverwriteDecision, ExportError> {
    let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    writeln!(
        output,
        "{} {} {}",
        console::warn("It seems that a file named"),
        console::file(&name),
        console::warn("already exists. Are you fine with this being overwritten?")
    )?;
    write_choices(output)?;

    loop {
        let mut response = String::new();
        if input.read_line(&mut response)? == 0 {
            return Err(ExportError::PromptClosed);
        }
        let response = response.trim();

        match response.to_lowercase().as_str() {
            "y" => {
                writeln!(output, "{}", console::info("Continuing..."))?;
                return Ok(OverwriteDecision::Overwrite);
            }
            "n" => {
                let dir = path.parent().map(|p| p.display().to_string()).unwrap_or_default();
                writeln!(
                    output,
                    "{} {} {} {} {}",
                    console::warn("Aborting...please remove"),
                    console::file(&name),
                    console::warn("from"),
                    console::file(&dir),
                    console::warn("to prevent it from being overwritten.")
                )?;
                return Ok(OverwriteDecision::Abort);
            }
            _ => {
                writeln!(
                    output,
                    "{}",
                    console::warn(&format!("Response of '{}' is not y or n.", response))
                )?;
                write_choices(output)?;
            }
        }
    }
}

fn write_choices<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{}", console::info("(yes or no)"))?;
    writeln!(output, "{}", console::info("y: continue"))?;
    writeln!(output, "{}", console::info("n: quit"))
}

/// Writes exported files, prompting before any overwrite
pub struct Exporter<R, W> {
    dirs: ExportDirs,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Exporter<R, W> {
    pub fn new(dirs: ExportDirs, input: R, output: W) -> Self {
        Self { dirs, input, output }
    }

    /// Resolve where `file_name` goes, asking before reusing an existing file.
    ///
    /// Declining the overwrite yields [`ExportError::OverwriteDeclined`].
    pub fn resolve(&mut self, file_name: &str, category: FileCategory) -> Result<PathBuf, ExportError> {
        let path = self.dirs.target_path(file_name, category)?;

        if path.exists() {
            match confirm_overwrite(&path, &mut self.input, &mut self.output)? {
                OverwriteDecision::Overwrite => {}
                OverwriteDecision::Abort => return Err(ExportError::OverwriteDeclined(path)),
            }
        }

        Ok(path)
    }

    /// Resolve by category name (`"graph"` or `"table"`)
    pub fn resolve_named(&mut self, file_name: &str, category: &str) -> Result<PathBuf, ExportError> {
        let category = category.parse()?;
        self.resolve(file_name, category)
    }

    /// Write `contents` to `file_name` in the category's directory
    pub fn write(&mut self, file_name: &str, category: FileCategory, contents: &str) -> Result<PathBuf, ExportError> {
        let path = self.resolve(file_name, category)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        tracing::info!("Exported {} {}", category, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn export_root() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let exports = root.path().join("visualization").join("exports");
        std::fs::create_dir_all(exports.join("graphs")).unwrap();
        std::fs::create_dir_all(exports.join("tables")).unwrap();
        root
    }

    fn exporter(root: &Path, answers: &str) -> Exporter<Cursor<Vec<u8>>, Vec<u8>> {
        let dirs = ExportDirs::locate(root).unwrap();
        Exporter::new(dirs, Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_missing_directories() {
        let root = tempfile::tempdir().unwrap();
        let err = ExportDirs::locate(root.path()).unwrap_err();
        assert!(matches!(err, ExportError::DirectoryNotFound(ref p) if p.ends_with("graphs")));

        std::fs::create_dir_all(root.path().join("visualization/exports/graphs")).unwrap();
        let err = ExportDirs::locate(root.path()).unwrap_err();
        assert!(matches!(err, ExportError::DirectoryNotFound(ref p) if p.ends_with("tables")));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("graph".parse::<FileCategory>().unwrap(), FileCategory::Graph);
        assert_eq!("table".parse::<FileCategory>().unwrap(), FileCategory::Table);
        assert!(matches!(
            "chart".parse::<FileCategory>(),
            Err(ExportError::InvalidCategory(ref c)) if c == "chart"
        ));
    }

    #[test]
    fn test_invalid_category_name() {
        let root = export_root();
        let mut exporter = exporter(root.path(), "");
        let err = exporter.resolve_named("a.txt", "image").unwrap_err();
        assert!(matches!(err, ExportError::InvalidCategory(_)));
    }

    #[test]
    fn test_file_name_needs_extension() {
        let root = export_root();
        let dirs = ExportDirs::locate(root.path()).unwrap();
        assert!(matches!(
            dirs.target_path("counts", FileCategory::Table),
            Err(ExportError::MissingExtension(_))
        ));
        let path = dirs.target_path("articles/counts.txt", FileCategory::Table).unwrap();
        assert!(path.ends_with("tables/articles/counts.txt"));
    }

    #[test]
    fn test_new_file_written_without_prompt() {
        let root = export_root();
        let mut exporter = exporter(root.path(), "");
        let path = exporter.write("ecdf.csv", FileCategory::Graph, "x\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x\n");
        assert!(exporter.output.is_empty());
    }

    #[test]
    fn test_no_keeps_existing_file() {
        let root = export_root();
        let target = root.path().join("visualization/exports/tables/counts.txt");
        std::fs::write(&target, "original").unwrap();

        let mut exporter = exporter(root.path(), "n\n");
        let err = exporter.write("counts.txt", FileCategory::Table, "new").unwrap_err();

        assert!(matches!(err, ExportError::OverwriteDeclined(_)));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_yes_overwrites_existing_file() {
        let root = export_root();
        let target = root.path().join("visualization/exports/tables/counts.txt");
        std::fs::write(&target, "original").unwrap();

        let mut exporter = exporter(root.path(), "Y\n");
        exporter.write("counts.txt", FileCategory::Table, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_reprompts_until_valid_answer() {
        let mut input = Cursor::new(b"maybe\nyes\n\nn\n".to_vec());
        let mut output = Vec::new();

        let decision = confirm_overwrite(Path::new("/tmp/x.txt"), &mut input, &mut output).unwrap();

        assert_eq!(decision, OverwriteDecision::Abort);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Response of 'maybe' is not y or n."));
        assert!(shown.contains("Response of 'yes' is not y or n."));
        assert!(shown.contains("Response of '' is not y or n."));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new(b"what\n".to_vec());
        let mut output = Vec::new();
        let err = confirm_overwrite(Path::new("x.txt"), &mut input, &mut output).unwrap_err();
        assert!(matches!(err, ExportError::PromptClosed));
    }
}
