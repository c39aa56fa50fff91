//! Bundled lexicon-based polarity scorer
//!
//! A deliberately small engine so the service runs without an external
//! sentiment library. Words are matched case-insensitively against a table
//! of polarities in `[-1, 1]`; the text score is the mean polarity of the
//! matched words.
//!
//! Modifiers apply to the next sentiment word only:
//! - intensifiers ("very", "really", ...) scale it up
//! - negators ("not", "never", "don't", ...) flip it and halve it
//! - a token ending in `!` boosts the most recent sentiment word

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::error::ScoringError;
use crate::scorer::PolarityScorer;

/// Multiplier applied by a negator to the following sentiment word
const NEGATION_FACTOR: f64 = -0.5;

/// Multiplier applied to the last sentiment word by a trailing `!`
const EXCLAMATION_FACTOR: f64 = 1.25;

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.2),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("absolutely", 1.4),
        ("totally", 1.3),
        ("quite", 1.1),
        ("super", 1.3),
        ("slightly", 0.6),
        ("somewhat", 0.7),
        ("barely", 0.5),
    ])
});

static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["not", "no", "never", "nothing", "neither", "nor", "hardly", "cannot"])
});

/// Built-in word polarities
static DEFAULT_WORDS: &[(&str, f64)] = &[
    // Strongly positive
    ("love", 0.6),
    ("loved", 0.6),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("amazing", 0.8),
    ("fantastic", 0.8),
    ("brilliant", 0.9),
    ("perfect", 1.0),
    ("awesome", 1.0),
    ("best", 1.0),
    ("outstanding", 0.9),
    ("superb", 1.0),
    ("delighted", 0.8),
    ("thrilled", 0.8),
    // Moderately positive
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("glad", 0.5),
    ("nice", 0.6),
    ("lovely", 0.5),
    ("pleasant", 0.7),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("fun", 0.3),
    ("beautiful", 0.85),
    ("cool", 0.35),
    ("pleased", 0.5),
    ("excited", 0.4),
    ("better", 0.5),
    ("calm", 0.3),
    // Mildly positive
    ("fine", 0.4),
    ("okay", 0.5),
    ("ok", 0.5),
    ("interesting", 0.5),
    ("helpful", 0.3),
    // Strongly negative
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("hate", -0.8),
    ("hated", -0.9),
    ("disgusting", -1.0),
    ("furious", -0.8),
    ("miserable", -1.0),
    ("pathetic", -1.0),
    // Moderately negative
    ("bad", -0.7),
    ("sad", -0.5),
    ("angry", -0.5),
    ("upset", -0.5),
    ("unhappy", -0.6),
    ("annoying", -0.8),
    ("annoyed", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("poor", -0.4),
    ("worse", -0.4),
    ("boring", -1.0),
    ("ugly", -0.7),
    ("stupid", -0.8),
    ("wrong", -0.5),
    ("broken", -0.4),
    // Mildly negative
    ("tired", -0.4),
    ("difficult", -0.5),
    ("lonely", -0.3),
    ("worried", -0.3),
];

/// Lexicon-backed [`PolarityScorer`]
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Empty lexicon; every text scores 0.0 until words are added
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add or replace a word; polarity is clamped to `[-1, 1]`
    pub fn add_word(&mut self, word: &str, polarity: f64) {
        self.words.insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
    }

    /// Builder form of [`add_word`](Self::add_word)
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.add_word(word, polarity);
        self
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Polarity of `text` in `[-1, 1]`; 0.0 when no lexicon word matches
    pub fn score(&self, text: &str) -> f64 {
        let mut matched: Vec<f64> = Vec::new();
        let mut modifier: Option<f64> = None;

        for raw in text.split_whitespace() {
            let word = normalize(raw);

            if !word.is_empty() {
                if is_negator(&word) {
                    modifier = Some(modifier.unwrap_or(1.0) * NEGATION_FACTOR);
                } else if let Some(boost) = INTENSIFIERS.get(word.as_str()) {
                    modifier = Some(modifier.unwrap_or(1.0) * boost);
                } else if let Some(&polarity) = self.words.get(&word) {
                    let value = polarity * modifier.take().unwrap_or(1.0);
                    matched.push(value.clamp(-1.0, 1.0));
                } else {
                    modifier = None;
                }
            }

            if raw.ends_with('!') {
                if let Some(last) = matched.last_mut() {
                    *last = (*last * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
                }
            }
        }

        if matched.is_empty() {
            return 0.0;
        }

        let mean = matched.iter().sum::<f64>() / matched.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        let mut scorer = Self::new();
        for (word, polarity) in DEFAULT_WORDS {
            scorer.add_word(word, *polarity);
        }
        scorer
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64, ScoringError> {
        Ok(self.score(text))
    }
}

/// Lowercase and strip surrounding punctuation, keeping inner apostrophes
fn normalize(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .trim_matches('\'')
        .to_lowercase()
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(word) || word.ends_with("n't")
}
