use super::patterns::PatternSet;

/// Outcome of a single rule for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep the article; later rules are not consulted.
    Keep,
    /// Drop the article; later rules are not consulted.
    Drop,
    /// This rule has no opinion.
    Continue,
}

/// A named step of the relevance policy.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Drop on any match.
    Exclude {
        name: &'static str,
        patterns: PatternSet,
    },
    /// Drop on a match, unless the allow set matches too.
    ExcludeUnless {
        name: &'static str,
        patterns: PatternSet,
        allow: PatternSet,
    },
    /// Keep on a match, drop otherwise.
    Require {
        name: &'static str,
        patterns: PatternSet,
    },
}

impl Rule {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exclude { name, .. } | Self::ExcludeUnless { name, .. } | Self::Require { name, .. } => {
                *name
            }
        }
    }

    /// Applies the rule to lowercased text.
    pub fn evaluate(&self, text: &str) -> Verdict {
        match self {
            Self::Exclude { patterns, .. } => {
                if patterns.is_match(text) {
                    Verdict::Drop
                } else {
                    Verdict::Continue
                }
            }
            Self::ExcludeUnless {
                patterns, allow, ..
            } => {
                if patterns.is_match(text) && !allow.is_match(text) {
                    Verdict::Drop
                } else {
                    Verdict::Continue
                }
            }
            Self::Require { patterns, .. } => {
                if patterns.is_match(text) {
                    Verdict::Keep
                } else {
                    Verdict::Drop
                }
            }
        }
    }
}

/// The final keep/drop decision and the rule that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub keep: bool,
    /// `None` when every rule returned [`Verdict::Continue`].
    pub rule: Option<&'static str>,
}
