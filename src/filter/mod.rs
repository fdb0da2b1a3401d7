//! EUR/USD relevance filtering.
//!
//! The policy is an ordered list of [`Rule`]s evaluated on the lowercased
//! `title + " " + summary` text. The first rule that does not return
//! [`Verdict::Continue`] decides:
//!
//! 1. `earnings` drops corporate-earnings stories, unconditionally.
//! 2. `crypto` drops crypto stories unless they are about euro stablecoins.
//! 3. `relevance` keeps whatever mentions EUR/USD drivers and drops the rest.

mod patterns;
mod rules;

pub use patterns::{Pattern, PatternSet};
pub use rules::{Decision, Rule, Verdict};

use rayon::prelude::*;

use crate::{FxError, core::text::combined_lowercase, news::Article};

pub const RULE_EARNINGS: &str = "earnings";
pub const RULE_CRYPTO: &str = "crypto";
pub const RULE_RELEVANCE: &str = "relevance";

/// Keep/drop filter for EUR/USD news. Stateless once built; share it freely.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    rules: Vec<Rule>,
}

impl RelevanceFilter {
    /// Builds the filter with the standard vocabularies.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Pattern`] if a table entry fails to compile.
    pub fn new() -> Result<Self, FxError> {
        Self::builder().build()
    }

    /// Starts a builder for extending the standard vocabularies.
    pub fn builder() -> RelevanceFilterBuilder {
        RelevanceFilterBuilder::default()
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decides on already combined, lowercased text.
    pub fn decide_text(&self, text: &str) -> Decision {
        for rule in &self.rules {
            match rule.evaluate(text) {
                Verdict::Continue => {}
                Verdict::Keep => {
                    return Decision {
                        keep: true,
                        rule: Some(rule.name()),
                    };
                }
                Verdict::Drop => {
                    return Decision {
                        keep: false,
                        rule: Some(rule.name()),
                    };
                }
            }
        }
        Decision {
            keep: false,
            rule: None,
        }
    }

    /// Decides on an article's title and summary.
    pub fn decide(&self, article: &Article) -> Decision {
        self.decide_text(&combined_lowercase([article.title(), article.summary()]))
    }

    pub fn is_relevant(&self, article: &Article) -> bool {
        self.decide(article).keep
    }

    /// Keeps the relevant articles, in their original order.
    ///
    /// Articles are evaluated in parallel.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(input = articles.len())))]
    pub fn filter(&self, articles: Vec<Article>) -> Vec<Article> {
        let kept: Vec<Article> = articles
            .into_par_iter()
            .filter(|a| self.is_relevant(a))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(kept = kept.len(), "relevance filter applied");

        kept
    }

    /// Single-threaded [`RelevanceFilter::filter`].
    pub fn filter_sequential(&self, articles: Vec<Article>) -> Vec<Article> {
        articles.into_iter().filter(|a| self.is_relevant(a)).collect()
    }
}

/// Builder for a [`RelevanceFilter`] with extra patterns on top of the standard tables.
///
/// Extra patterns are regular expressions, matched case-insensitively like the
/// built-in ones. They are compiled in [`RelevanceFilterBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RelevanceFilterBuilder {
    earnings: Vec<String>,
    crypto: Vec<String>,
    allow: Vec<String>,
    include: Vec<String>,
}

impl RelevanceFilterBuilder {
    /// Adds an always-excluding pattern.
    #[must_use]
    pub fn exclude_earnings(mut self, pattern: impl Into<String>) -> Self {
        self.earnings.push(pattern.into());
        self
    }

    /// Adds an off-topic pattern that the euro-stablecoin allow set can override.
    #[must_use]
    pub fn exclude_crypto(mut self, pattern: impl Into<String>) -> Self {
        self.crypto.push(pattern.into());
        self
    }

    /// Adds a pattern to the allow set that overrides the crypto exclusion.
    #[must_use]
    pub fn allow(mut self, pattern: impl Into<String>) -> Self {
        self.allow.push(pattern.into());
        self
    }

    /// Adds a relevance pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Compiles all tables.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Pattern`] for the first pattern that fails to compile.
    pub fn build(self) -> Result<RelevanceFilter, FxError> {
        let earnings = extended(patterns::EARNINGS, &self.earnings)?;

        let mut crypto = extended(patterns::CRYPTO_EXCLUDE, &self.crypto)?;
        for (pattern, suffix) in patterns::CRYPTO_EXCLUDE_GUARDED {
            crypto.push(Pattern::new(pattern)?.unless_followed_by(suffix)?);
        }

        let allow = extended(patterns::EURO_STABLECOIN_ALLOW, &self.allow)?;
        let include = extended(patterns::INCLUDE, &self.include)?;

        Ok(RelevanceFilter {
            rules: vec![
                Rule::Exclude {
                    name: RULE_EARNINGS,
                    patterns: earnings,
                },
                Rule::ExcludeUnless {
                    name: RULE_CRYPTO,
                    patterns: crypto,
                    allow,
                },
                Rule::Require {
                    name: RULE_RELEVANCE,
                    patterns: include,
                },
            ],
        })
    }
}

fn extended(base: &[&str], extra: &[String]) -> Result<PatternSet, FxError> {
    let mut set = PatternSet::compile(base)?;
    for p in extra {
        set.push(Pattern::new(p)?);
    }
    Ok(set)
}
