// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Loading of the BuzzFeed and PolitiFact news content files

use crate::error::LoadError;
use crate::names::NameIndex;
use crate::shares::ShareCounts;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Placeholder for fields absent from the raw files
pub const MISSING_FIELD: &str = "None";

/// Author tokens that do not name a person
const AUTHOR_SENTINELS: &[&str] = &["none", "view all posts"];

/// News outlet a dataset half comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outlet {
    BuzzFeed,
    PolitiFact,
}

impl Outlet {
    pub const ALL: [Outlet; 2] = [Outlet::BuzzFeed, Outlet::PolitiFact];

    pub fn name(&self) -> &'static str {
        match self {
            Outlet::BuzzFeed => "BuzzFeed",
            Outlet::PolitiFact => "PolitiFact",
        }
    }

    /// Line offset of the first fake article in the outlet's name index
    pub fn fake_offset(&self) -> usize {
        match self {
            Outlet::BuzzFeed => 91,
            Outlet::PolitiFact => 120,
        }
    }

    pub fn content_file(&self, label: Label) -> String {
        format!("{}_{}_news_content.csv", self.name(), label.as_str())
    }

    pub fn names_file(&self) -> String {
        format!("{}News.txt", self.name())
    }

    pub fn shares_file(&self) -> String {
        format!("{}NewsUser.txt", self.name())
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fake/real ground truth of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    /// Fake articles are processed before real ones
    pub const ORDER: [Label; 2] = [Label::Fake, Label::Real];

    /// 1 = fake, 0 = real
    pub fn to_binary(&self) -> u8 {
        match self {
            Label::Fake => 1,
            Label::Real => 0,
        }
    }

    pub fn is_fake(&self) -> bool {
        matches!(self, Label::Fake)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "fake",
            Label::Real => "real",
        }
    }
}

/// One outlet's fake or real half of the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    pub outlet: Outlet,
    pub label: Label,
}

impl Partition {
    pub fn new(outlet: Outlet, label: Label) -> Self {
        Self { outlet, label }
    }

    /// Offset added to a raw id number to find its line in the name index
    pub fn name_offset(&self) -> usize {
        match self.label {
            Label::Fake => self.outlet.fake_offset(),
            Label::Real => 0,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.outlet, self.label.as_str())
    }
}

/// A single news article with its canonical name and share count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Canonical name from the outlet's name index
    pub id: String,
    pub title: String,
    pub body: String,
    pub url: String,
    pub authors: Vec<String>,
    pub source: String,
    pub publish_date: String,
    pub shares: u64,
    pub label: Label,
    pub outlet: Outlet,
}

impl Article {
    /// Title plus body length in characters
    pub fn length(&self) -> usize {
        self.title.chars().count() + self.body.chars().count()
    }

    /// Body followed by title, the text that gets scored
    pub fn scoring_text(&self) -> String {
        [self.body.as_str(), self.title.as_str()].join(" ")
    }
}

/// Raw row of a `*_news_content.csv` file. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct ContentRow {
    id: String,
    title: Option<String>,
    text: Option<String>,
    url: Option<String>,
    authors: Option<String>,
    source: Option<String>,
    publish_date: Option<String>,
}

/// Split a raw author field on commas, dropping sentinel tokens
pub fn parse_authors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .filter(|author| {
            let lower = author.to_lowercase();
            !AUTHOR_SENTINELS.contains(&lower.as_str())
        })
        .map(str::to_string)
        .collect()
}

/// Whether a canonical article name denotes a fake article
pub fn is_article_fake(name: &str) -> bool {
    name.contains("Fake")
}

fn or_missing(field: Option<String>) -> String {
    field.unwrap_or_else(|| MISSING_FIELD.to_string())
}

/// Parse one partition's content CSV.
///
/// Ids are remapped through `names`; a repeated canonical name, a missing
/// body or a missing share count aborts the load.
pub fn read_partition<R: Read>(
    reader: R,
    file: &str,
    partition: Partition,
    names: &NameIndex,
    shares: &ShareCounts,
) -> Result<Vec<Article>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut articles = Vec::new();

    for (idx, result) in reader.deserialize::<ContentRow>().enumerate() {
        let row = result.with_context(|| format!("Failed to read record {} in {}", idx, file))?;

        let id = names.resolve(&row.id, partition.name_offset())?;
        if !seen.insert(id.clone()) {
            return Err(LoadError::DuplicateArticle {
                name: id,
                partition: partition.to_string(),
            }
            .into());
        }
        if is_article_fake(&id) != partition.label.is_fake() {
            tracing::warn!("Article '{}' resolved from {} does not match label {}", id, file, partition.label.as_str());
        }

        let body = row
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| LoadError::MissingText { row: idx, file: file.to_string() })?;
        let authors = parse_authors(row.authors.as_deref().unwrap_or(MISSING_FIELD));
        let share_count = shares.get(&id)?;

        articles.push(Article {
            id,
            title: or_missing(row.title),
            body,
            url: or_missing(row.url),
            authors,
            source: or_missing(row.source),
            publish_date: or_missing(row.publish_date),
            shares: share_count,
            label: partition.label,
            outlet: partition.outlet,
        });
    }

    Ok(articles)
}

/// All articles of both outlets, split by label
#[derive(Debug, Clone, Default)]
pub struct ArticleSet {
    pub fake: Vec<Article>,
    pub real: Vec<Article>,
}

impl ArticleSet {
    /// Load all four partitions from a FakeNewsNet data directory
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut set = Self::default();

        for outlet in Outlet::ALL {
            let names = NameIndex::load(&data_dir.join(outlet.names_file()))?;
            let shares = ShareCounts::load(&data_dir.join(outlet.shares_file()), &names)?;
            tracing::debug!("{}: {} names, {} share totals", outlet, names.len(), shares.len());

            for label in Label::ORDER {
                let partition = Partition::new(outlet, label);
                let path = data_dir.join(outlet.content_file(label));
                let file = std::fs::File::open(&path)
                    .with_context(|| format!("Failed to open content file: {}", path.display()))?;
                let articles = read_partition(file, &path.display().to_string(), partition, &names, &shares)?;

                tracing::info!("Loaded {} articles from {}", articles.len(), partition);
                set.push(articles);
            }
        }

        Ok(set)
    }

    /// Append a partition's articles to the matching label group
    pub fn push(&mut self, articles: Vec<Article>) {
        for article in articles {
            match article.label {
                Label::Fake => self.fake.push(article),
                Label::Real => self.real.push(article),
            }
        }
    }

    pub fn group(&self, label: Label) -> &[Article] {
        match label {
            Label::Fake => &self.fake,
            Label::Real => &self.real,
        }
    }

    /// Articles in processing order: fakes, then reals
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.fake.iter().chain(self.real.iter())
    }

    pub fn len(&self) -> usize {
        self.fake.len() + self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fake.is_empty() && self.real.is_empty()
    }
}
