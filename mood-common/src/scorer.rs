//! Polarity scorer seam
//!
//! The classifier never talks to a sentiment engine directly; it is handed
//! something implementing [`PolarityScorer`]. Plain closures qualify, which
//! is how tests inject stub scores and failures.

use crate::error::ScoringError;

/// Sentiment-polarity engine
///
/// Implementations return a polarity in `[-1.0, 1.0]` for the given text.
/// Calls are synchronous and may block.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, ScoringError>;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> Result<f64, ScoringError> + Send + Sync,
{
    fn polarity(&self, text: &str) -> Result<f64, ScoringError> {
        self(text)
    }
}
