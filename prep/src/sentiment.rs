// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Lexicon-based sentiment scoring of article text
//!
//! Each lexicon hit contributes its score, scaled by a preceding intensity
//! modifier and inverted (with damping) when a negation occurred within the
//! last few words. The article score is the mean contribution, clamped to
//! [-1, 1].

use crate::text;
use std::collections::HashMap;

const POSITIVE: &[(&str, f64)] = &[
    ("accomplish", 0.5), ("accomplished", 0.55), ("achieve", 0.5), ("achievement", 0.6),
    ("admire", 0.6), ("advantage", 0.4), ("agree", 0.3), ("agreed", 0.3),
    ("agreement", 0.35), ("ally", 0.3), ("amazing", 0.8), ("applaud", 0.6),
    ("approval", 0.35), ("approve", 0.4), ("approved", 0.4), ("awesome", 0.75),
    ("beautiful", 0.7), ("benefit", 0.45), ("benefits", 0.45), ("best", 0.7),
    ("better", 0.45), ("bold", 0.3), ("boost", 0.4), ("brave", 0.55),
    ("brilliant", 0.8), ("calm", 0.3), ("celebrate", 0.65), ("celebrated", 0.65),
    ("champion", 0.6), ("clean", 0.3), ("clear", 0.25), ("comfortable", 0.4),
    ("commend", 0.55), ("compromise", 0.3), ("confident", 0.5), ("correct", 0.3),
    ("courage", 0.55), ("creative", 0.45), ("delight", 0.7), ("delighted", 0.7),
    ("deserve", 0.3), ("effective", 0.45), ("encourage", 0.45), ("enjoy", 0.55),
    ("excellent", 0.8), ("excited", 0.6), ("exciting", 0.6), ("fair", 0.35),
    ("faith", 0.35), ("famous", 0.4), ("fantastic", 0.8), ("favor", 0.35),
    ("fine", 0.25), ("free", 0.3), ("freedom", 0.45), ("friend", 0.45),
    ("friendly", 0.5), ("fun", 0.55), ("gain", 0.4), ("generous", 0.6),
    ("glad", 0.55), ("good", 0.5), ("grateful", 0.6), ("great", 0.7),
    ("happy", 0.7), ("heal", 0.4), ("healthy", 0.5), ("help", 0.35),
    ("helped", 0.35), ("helpful", 0.5), ("hero", 0.65), ("honest", 0.55),
    ("honor", 0.55), ("hope", 0.45), ("hopeful", 0.5), ("hopes", 0.45),
    ("impressive", 0.65), ("improve", 0.45), ("improved", 0.45), ("improvement", 0.45),
    ("incredible", 0.75), ("innocent", 0.35), ("inspire", 0.6), ("integrity", 0.55),
    ("interesting", 0.35), ("join", 0.2), ("joy", 0.75), ("justice", 0.45),
    ("kind", 0.5), ("laugh", 0.5), ("leader", 0.3), ("legal", 0.2),
    ("like", 0.25), ("love", 0.7), ("loyal", 0.5), ("lucky", 0.5),
    ("nice", 0.45), ("peace", 0.55), ("peaceful", 0.55), ("perfect", 0.75),
    ("pleased", 0.55), ("popular", 0.45), ("positive", 0.5), ("praise", 0.6),
    ("praised", 0.6), ("pretty", 0.35), ("progress", 0.45), ("promise", 0.3),
    ("protect", 0.35), ("protected", 0.35), ("proud", 0.55), ("recovery", 0.4),
    ("reform", 0.2), ("reliable", 0.45), ("relief", 0.45), ("respect", 0.5),
    ("safe", 0.4), ("safety", 0.35), ("satisfied", 0.5), ("secure", 0.4),
    ("security", 0.3), ("smart", 0.5), ("solid", 0.35), ("stability", 0.35),
    ("strength", 0.45), ("strong", 0.45), ("succeed", 0.6), ("success", 0.65),
    ("successful", 0.65), ("support", 0.35), ("supported", 0.35), ("supporter", 0.3),
    ("supporters", 0.3), ("thank", 0.45), ("thanks", 0.45), ("triumph", 0.7),
    ("true", 0.3), ("trust", 0.45), ("truth", 0.35), ("unite", 0.45),
    ("united", 0.35), ("victory", 0.65), ("welcome", 0.45), ("win", 0.6),
    ("winner", 0.6), ("winning", 0.6), ("wins", 0.6), ("wise", 0.5),
    ("wonderful", 0.8), ("worth", 0.3),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("abuse", -0.75), ("accuse", -0.45), ("accused", -0.45), ("afraid", -0.5),
    ("aggressive", -0.45), ("alarm", -0.45), ("allegations", -0.4), ("alleged", -0.3),
    ("anger", -0.6), ("angry", -0.6), ("annoying", -0.45), ("arrest", -0.5),
    ("arrested", -0.5), ("assault", -0.75), ("attack", -0.6), ("attacked", -0.6),
    ("attacks", -0.6), ("awful", -0.8), ("bad", -0.5), ("ban", -0.35),
    ("betray", -0.7), ("blame", -0.5), ("blamed", -0.5), ("bomb", -0.7),
    ("bullshit", -0.7), ("catastrophe", -0.9), ("chaos", -0.65), ("cheat", -0.65),
    ("collapse", -0.7), ("conspiracy", -0.5), ("controversy", -0.4), ("corrupt", -0.75),
    ("corruption", -0.75), ("crime", -0.65), ("crimes", -0.65), ("criminal", -0.65),
    ("crisis", -0.6), ("critic", -0.3), ("criticize", -0.45), ("critics", -0.3),
    ("cruel", -0.75), ("damage", -0.5), ("danger", -0.55), ("dangerous", -0.6),
    ("dead", -0.7), ("death", -0.7), ("deaths", -0.7), ("deceive", -0.65),
    ("defeat", -0.5), ("deficit", -0.35), ("deny", -0.35), ("destroy", -0.7),
    ("destruction", -0.7), ("disaster", -0.8), ("disgrace", -0.7), ("dishonest", -0.65),
    ("dispute", -0.35), ("doubt", -0.35), ("evil", -0.8), ("fail", -0.55),
    ("failed", -0.55), ("failure", -0.6), ("fake", -0.55), ("false", -0.45),
    ("fear", -0.55), ("fight", -0.35), ("fraud", -0.8), ("furious", -0.7),
    ("guilty", -0.55), ("harm", -0.55), ("hate", -0.75), ("hoax", -0.65),
    ("horrible", -0.8), ("hostile", -0.55), ("hurt", -0.55), ("illegal", -0.55),
    ("investigation", -0.25), ("kill", -0.75), ("killed", -0.75), ("liar", -0.7),
    ("lie", -0.6), ("lies", -0.6), ("lose", -0.45), ("loss", -0.45),
    ("lost", -0.45), ("lying", -0.6), ("mess", -0.45), ("murder", -0.85),
    ("nasty", -0.6), ("negative", -0.45), ("opposed", -0.3), ("outrage", -0.65),
    ("outraged", -0.65), ("pain", -0.55), ("panic", -0.65), ("poor", -0.4),
    ("problem", -0.35), ("protest", -0.3), ("racist", -0.75), ("rage", -0.65),
    ("reject", -0.45), ("riot", -0.65), ("risk", -0.35), ("sad", -0.55),
    ("scam", -0.75), ("scandal", -0.65), ("scandals", -0.65), ("scary", -0.55),
    ("severe", -0.5), ("shame", -0.6), ("shock", -0.45), ("shocking", -0.5),
    ("shutdown", -0.4), ("sick", -0.45), ("slammed", -0.5), ("steal", -0.65),
    ("stupid", -0.65), ("suffer", -0.6), ("terrible", -0.8), ("terror", -0.8),
    ("terrorist", -0.8), ("threat", -0.55), ("threatened", -0.55), ("threats", -0.55),
    ("tragedy", -0.75), ("trouble", -0.45), ("ugly", -0.55), ("unfair", -0.5),
    ("victim", -0.5), ("victims", -0.5), ("violations", -0.5), ("violence", -0.7),
    ("violent", -0.7), ("war", -0.6), ("weak", -0.45), ("worry", -0.45),
    ("worse", -0.55), ("worst", -0.8), ("wrong", -0.5),
];

const MODIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.6), ("completely", 1.5), ("deeply", 1.4), ("extremely", 1.8),
    ("highly", 1.4), ("incredibly", 1.7), ("quite", 1.2), ("really", 1.4),
    ("so", 1.3), ("totally", 1.4), ("very", 1.5), ("barely", 0.6),
    ("hardly", 0.6), ("slightly", 0.7), ("somewhat", 0.8), ("maybe", 0.8),
    ("perhaps", 0.8), ("possibly", 0.7),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nobody", "nothing", "nowhere", "without",
    "don't", "doesn't", "didn't", "can't", "cannot", "couldn't", "won't", "wouldn't",
    "shouldn't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "hadn't",
    "dont", "doesnt", "didnt", "cant", "wont", "isnt", "wasnt",
];

/// Word scores, modifiers and negations
#[derive(Debug, Clone)]
pub struct Lexicon {
    scores: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    negations: Vec<String>,
}

impl Lexicon {
    pub fn english() -> Self {
        Self {
            scores: POSITIVE
                .iter()
                .chain(NEGATIVE.iter())
                .map(|(w, s)| (w.to_string(), *s))
                .collect(),
            modifiers: MODIFIERS.iter().map(|(w, m)| (w.to_string(), *m)).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == word)
    }

    /// Add or replace a word score
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.scores.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

/// Sentiment scorer over a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Lexicon,
    negation_window: usize,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::english(),
            negation_window: 3,
        }
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Score `text` in [-1, 1]; 0.0 when no lexicon word occurs
    pub fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut modifier = 1.0;
        let mut since_negation: Option<usize> = None;

        for word in text::normalized_words(text) {
            if self.lexicon.is_negation(&word) {
                since_negation = Some(0);
                continue;
            }
            if let Some(m) = self.lexicon.modifier(&word) {
                modifier = m;
                continue;
            }

            if let Some(base) = self.lexicon.score(&word) {
                let mut score = base * modifier;
                if since_negation.is_some_and(|n| n < self.negation_window) {
                    score = -score * 0.8;
                }
                total += score;
                hits += 1;
                modifier = 1.0;
            }

            since_negation = since_negation
                .map(|n| n + 1)
                .filter(|n| *n < self.negation_window);
        }

        if hits == 0 {
            return 0.0;
        }
        (total / hits as f64).clamp(-1.0, 1.0)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
