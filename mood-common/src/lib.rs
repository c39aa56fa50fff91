//! # Mood Common Library
//!
//! Framework-independent core of the mood analysis service:
//! - Request payload validation
//! - Polarity-to-mood classification policy
//! - Polarity scorer seam and the bundled lexicon scorer
//! - TOML configuration loading
//! - Error types

pub mod classifier;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod mood;
pub mod scorer;
pub mod validator;

pub use classifier::{classify, MoodClassifier, MoodPolicy};
pub use error::{Error, Result, ScoringError, ValidationError};
pub use lexicon::LexiconScorer;
pub use mood::{Mood, MoodResult, NegativeMood};
pub use scorer::PolarityScorer;
pub use validator::validate;
