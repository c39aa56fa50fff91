//! Polarity-to-mood classification
//!
//! Scores strictly above `positive_threshold` are happy, scores strictly
//! below `negative_threshold` take the negative label, everything else is
//! neutral. The thresholds themselves fall in the neutral band, so with the
//! defaults exactly `0.2` and `-0.2` are neutral.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result, ScoringError};
use crate::mood::{Mood, MoodResult, NegativeMood};
use crate::scorer::PolarityScorer;

pub const DEFAULT_POSITIVE_THRESHOLD: f64 = 0.2;
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = -0.2;

/// Thresholds and labels that partition the polarity range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodPolicy {
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,

    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,

    #[serde(default)]
    pub negative_mood: NegativeMood,
}

fn default_positive_threshold() -> f64 {
    DEFAULT_POSITIVE_THRESHOLD
}

fn default_negative_threshold() -> f64 {
    DEFAULT_NEGATIVE_THRESHOLD
}

impl Default for MoodPolicy {
    fn default() -> Self {
        Self {
            positive_threshold: DEFAULT_POSITIVE_THRESHOLD,
            negative_threshold: DEFAULT_NEGATIVE_THRESHOLD,
            negative_mood: NegativeMood::default(),
        }
    }
}

impl MoodPolicy {
    /// Default thresholds with the given negative label
    pub fn with_negative_mood(negative_mood: NegativeMood) -> Self {
        Self {
            negative_mood,
            ..Self::default()
        }
    }

    /// Check that the thresholds describe a valid partition of [-1, 1]
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("positive_threshold", self.positive_threshold),
            ("negative_threshold", self.negative_threshold),
        ] {
            if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "classifier.{} must be within [-1.0, 1.0], got {}",
                    name, value
                )));
            }
        }

        if self.negative_threshold > self.positive_threshold {
            return Err(Error::Config(format!(
                "classifier.negative_threshold ({}) must not exceed positive_threshold ({})",
                self.negative_threshold, self.positive_threshold
            )));
        }

        Ok(())
    }

    /// Map a polarity score to its mood label
    pub fn label(&self, score: f64) -> Mood {
        if score > self.positive_threshold {
            Mood::Happy
        } else if score < self.negative_threshold {
            self.negative_mood.into()
        } else {
            Mood::Neutral
        }
    }
}

/// Score `text` and classify it under `policy`
///
/// Scorer failures are returned as-is. A score that is not a finite value
/// in `[-1.0, 1.0]` is rejected instead of being bucketed.
pub fn classify<S>(
    text: &str,
    scorer: &S,
    policy: &MoodPolicy,
) -> std::result::Result<MoodResult, ScoringError>
where
    S: PolarityScorer + ?Sized,
{
    let score = scorer.polarity(text)?;

    if !score.is_finite() || !(-1.0..=1.0).contains(&score) {
        return Err(ScoringError::InvalidScore(score));
    }

    let mood = policy.label(score);
    trace!(score, %mood, "Classified text");

    Ok(MoodResult { mood, score })
}

/// Classifier bundling a policy with the scorer it applies to
#[derive(Clone)]
pub struct MoodClassifier {
    policy: MoodPolicy,
    scorer: Arc<dyn PolarityScorer>,
}

impl MoodClassifier {
    pub fn new(policy: MoodPolicy, scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { policy, scorer }
    }

    pub fn policy(&self) -> &MoodPolicy {
        &self.policy
    }

    pub fn classify(&self, text: &str) -> std::result::Result<MoodResult, ScoringError> {
        classify(text, self.scorer.as_ref(), &self.policy)
    }
}

impl std::fmt::Debug for MoodClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoodClassifier")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
