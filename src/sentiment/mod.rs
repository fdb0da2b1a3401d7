//! Sentiment scoring and labeling.
//!
//! Scoring is delegated to a [`SentimentEngine`]; the crate ships
//! [`LexiconAnalyzer`], and any `Fn(&str) -> SentimentScores` works too.

mod analyzer;
mod lexicon;

pub use analyzer::{LexiconAnalyzer, VALENCE_RANGE};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compound scores at or beyond this magnitude are not neutral.
pub const LABEL_THRESHOLD: f64 = 0.05;

/// The four-part score bundle of a lexicon sentiment engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Share of negative weight, in [0, 1].
    #[serde(rename = "neg")]
    pub negative: f64,
    /// Share of neutral weight, in [0, 1].
    #[serde(rename = "neu")]
    pub neutral: f64,
    /// Share of positive weight, in [0, 1].
    #[serde(rename = "pos")]
    pub positive: f64,
    /// Normalized polarity in [-1, 1].
    pub compound: f64,
}

/// Polarity bucket of a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Buckets a compound score; `None` is neutral.
    pub fn from_compound(compound: Option<f64>) -> Self {
        match compound {
            Some(c) if c >= LABEL_THRESHOLD => Self::Positive,
            Some(c) if c <= -LABEL_THRESHOLD => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Shorthand for [`SentimentLabel::from_compound`].
pub fn label(compound: Option<f64>) -> SentimentLabel {
    SentimentLabel::from_compound(compound)
}

/// A text-in, scores-out sentiment capability.
pub trait SentimentEngine: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

impl<F> SentimentEngine for F
where
    F: Fn(&str) -> SentimentScores + Send + Sync,
{
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        self(text)
    }
}

/// Scores optional text with an engine and labels the result.
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer<E = LexiconAnalyzer> {
    engine: E,
}

impl SentimentScorer {
    /// A scorer backed by the built-in [`LexiconAnalyzer`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: SentimentEngine> SentimentScorer<E> {
    /// A scorer backed by a custom engine.
    pub const fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Scores `text`; absent text is not scoreable and yields `None`.
    pub fn score(&self, text: Option<&str>) -> Option<SentimentScores> {
        text.map(|t| self.engine.polarity_scores(t))
    }

    /// Scores and labels in one step.
    pub fn score_and_label(&self, text: Option<&str>) -> (Option<SentimentScores>, SentimentLabel) {
        let scores = self.score(text);
        (scores, label(scores.map(|s| s.compound)))
    }
}
