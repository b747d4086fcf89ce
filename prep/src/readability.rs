// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Dale-Chall readability scoring
//!
//! raw = 0.1579 * (% difficult words) + 0.0496 * (words per sentence),
//! plus 3.6365 when more than 5% of the words are difficult. A word is
//! difficult when it is not on the easy-word list. Numbers count as easy.

use crate::text;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Below this many words the Dale-Chall formula is not applied
pub const READABILITY_MIN_WORDS: usize = 100;

const EMBEDDED_EASY_WORDS: &str = include_str!("../data/dale_chall_easy_words.txt");

/// US school grade band of a Dale-Chall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeLevel {
    FourthAndBelow,
    FifthToSixth,
    SeventhToEighth,
    NinthToTenth,
    EleventhToTwelfth,
    College,
    CollegeGraduate,
}

impl GradeLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 5.0 => GradeLevel::FourthAndBelow,
            s if s < 6.0 => GradeLevel::FifthToSixth,
            s if s < 7.0 => GradeLevel::SeventhToEighth,
            s if s < 8.0 => GradeLevel::NinthToTenth,
            s if s < 9.0 => GradeLevel::EleventhToTwelfth,
            s if s < 10.0 => GradeLevel::College,
            _ => GradeLevel::CollegeGraduate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaleChallScore {
    pub score: f64,
    pub grade: GradeLevel,
    pub words: usize,
    pub difficult_words: usize,
    pub sentences: usize,
}

/// Dale-Chall scorer holding the easy-word list
#[derive(Debug, Clone)]
pub struct DaleChall {
    easy_words: HashSet<String>,
}

impl DaleChall {
    /// Scorer over the embedded easy-word list
    pub fn new() -> Self {
        Self::from_word_list(EMBEDDED_EASY_WORDS)
    }

    /// Scorer over a word list with one word per line
    pub fn from_word_list(list: &str) -> Self {
        Self {
            easy_words: list
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let list = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read easy word list: {}", path.display()))?;
        let scorer = Self::from_word_list(&list);
        tracing::info!("Loaded {} easy words from {}", scorer.easy_words.len(), path.display());
        Ok(scorer)
    }

    pub fn is_easy(&self, word: &str) -> bool {
        word.chars().all(|c| c.is_numeric()) || self.easy_words.contains(word)
    }

    /// Score `text`, or `None` when it has fewer than [`READABILITY_MIN_WORDS`] words
    pub fn score(&self, text: &str) -> Option<DaleChallScore> {
        let words = text::normalized_words(text);
        if words.len() < READABILITY_MIN_WORDS {
            return None;
        }

        let difficult_words = words.iter().filter(|w| !self.is_easy(w)).count();
        let sentences = text::sentence_count(text).max(1);

        let pdw = difficult_words as f64 / words.len() as f64 * 100.0;
        let asl = words.len() as f64 / sentences as f64;
        let mut score = 0.1579 * pdw + 0.0496 * asl;
        if pdw > 5.0 {
            score += 3.6365;
        }

        Some(DaleChallScore {
            score,
            grade: GradeLevel::from_score(score),
            words: words.len(),
            difficult_words,
            sentences,
        })
    }
}

impl Default for DaleChall {
    fn default() -> Self {
        Self::new()
    }
}
