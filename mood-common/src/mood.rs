//! Mood labels and classification results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse mood label derived from a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Neutral,
}

impl Mood {
    /// Wire name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label used for the negative side of the polarity range
///
/// Deployments disagree on whether strongly negative text is "sad" or
/// "angry"; the choice is a policy parameter. Defaults to `Sad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeMood {
    #[default]
    Sad,
    Angry,
}

impl From<NegativeMood> for Mood {
    fn from(negative: NegativeMood) -> Self {
        match negative {
            NegativeMood::Sad => Mood::Sad,
            NegativeMood::Angry => Mood::Angry,
        }
    }
}

/// Outcome of classifying one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: Mood,
    /// Raw polarity reported by the scorer
    pub score: f64,
}
