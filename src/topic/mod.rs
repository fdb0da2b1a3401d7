//! Currency focus of a headline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{FxError, filter::PatternSet};

const USD_PATTERNS: &[&str] = &[
    r"\busd\b",
    r"\bus\.?dollars?\b",
    r"\bdollars?\b",
    r"\bgreenbacks?\b",
    r"\bking\s*dollars?\b",
];

const EUR_PATTERNS: &[&str] = &[
    r"\beur\b",
    r"\beuros?\b",
    r"\bsingle\s*currenc(y|ies)\b",
    r"\beurozone\b",
    r"\beuro\s*area\b",
];

/// Which leg of EUR/USD a headline is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurrencyTopic {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    Both,
    Other,
}

impl CurrencyTopic {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Both => "Both",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CurrencyTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Labels headlines by the currency names they mention.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    usd: PatternSet,
    eur: PatternSet,
}

impl TopicClassifier {
    /// Compiles the USD and EUR name tables.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Pattern`] if a table entry fails to compile.
    pub fn new() -> Result<Self, FxError> {
        Ok(Self {
            usd: PatternSet::compile(USD_PATTERNS)?,
            eur: PatternSet::compile(EUR_PATTERNS)?,
        })
    }

    /// Classifies a headline. A missing headline is [`CurrencyTopic::Other`].
    pub fn classify(&self, title: Option<&str>) -> CurrencyTopic {
        let Some(title) = title else {
            return CurrencyTopic::Other;
        };
        let title = title.to_lowercase();
        match (self.usd.is_match(&title), self.eur.is_match(&title)) {
            (true, true) => CurrencyTopic::Both,
            (true, false) => CurrencyTopic::Usd,
            (false, true) => CurrencyTopic::Eur,
            (false, false) => CurrencyTopic::Other,
        }
    }
}
