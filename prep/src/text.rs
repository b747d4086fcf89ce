// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Word and sentence segmentation shared by the text scorers

use regex::Regex;
use std::sync::LazyLock;

/// Alphanumeric runs, optionally joined by inner apostrophes ("don't", "O'Neil")
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").unwrap());
static SENTENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Words of `text` in order, as they appear
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

/// Lowercased words with typographic apostrophes normalised
pub fn normalized_words(text: &str) -> Vec<String> {
    words(text).map(|w| w.to_lowercase().replace('’', "'")).collect()
}

pub fn word_count(text: &str) -> usize {
    WORD_REGEX.find_iter(text).count()
}

/// Titles and shorthand whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "gov", "sen", "rep", "gen", "col",
    "lt", "sgt", "capt", "rev", "hon", "pres", "vs", "etc", "inc", "ltd", "corp", "jan",
    "feb", "apr", "aug", "sept", "oct", "nov", "dec",
];

/// Whether a single `.` right after `before` belongs to an abbreviation or an
/// initial ("Mr.", "U.S.", "J. Smith")
fn ends_abbreviation(before: &str) -> bool {
    let token = before
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_uppercase(),
        (Some(_), Some(_)) => ABBREVIATIONS.contains(&token.to_lowercase().as_str()),
        _ => false,
    }
}

/// Number of sentences containing at least one word. Text with words but no
/// terminal punctuation is one sentence.
pub fn sentence_count(text: &str) -> usize {
    let mut count = 0;
    let mut start = 0;

    for end in SENTENCE_END_REGEX.find_iter(text) {
        if end.as_str() == "." && ends_abbreviation(&text[..end.start()]) {
            continue;
        }
        if WORD_REGEX.is_match(&text[start..end.start()]) {
            count += 1;
        }
        start = end.end();
    }
    if WORD_REGEX.is_match(&text[start..]) {
        count += 1;
    }
    count
}
