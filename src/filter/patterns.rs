//! Fixed vocabularies for the EUR/USD relevance rules, and the compiled
//! pattern types they are turned into.
//!
//! Every table is matched case-insensitively against the lowercased
//! title + summary text.

use regex::{Regex, RegexBuilder};

use crate::core::FxError;

/// Earnings and corporate-action vocabulary. A hit always excludes.
pub(crate) const EARNINGS: &[&str] = &[
    r"\b(earnings|quarterly results|q[1-4]\s*\d{4}|eps|guidance|revenue|profit|net income|dividend|buyback|ipo|spinoff)\b",
    r"\b(downgrades?|upgrades?)\b",
];

/// Crypto vocabulary without exceptions.
pub(crate) const CRYPTO_EXCLUDE: &[&str] = &[r"\b(bitcoin|btc|ethereum|eth|altcoin|defi|nft)\b"];

/// Crypto vocabulary paired with the suffix that disqualifies a hit.
/// `crypto-euro` is about the euro, not about crypto.
pub(crate) const CRYPTO_EXCLUDE_GUARDED: &[(&str, &str)] = &[(r"\bcrypto\b", r"-?euro")];

/// Euro stablecoin vocabulary; cancels the crypto exclusion.
pub(crate) const EURO_STABLECOIN_ALLOW: &[&str] = &[
    r"\b(euro[-\s]?stablecoin|euro[-\s]?coin|euroc|eurc|eurt|stasis|euro tether|eur[-\s]?stablecoin)\b",
];

/// Anything an EUR/USD reader cares about.
pub(crate) const INCLUDE: &[&str] = &[
    // pair
    r"\b(eur\s*/\s*usd|usd\s*/\s*eur)\b",
    // currency names
    r"\b(us\s*dollar|u\.s\.\s*dollar|usd|greenback|king\s*dollar)\b",
    r"\b(euro(zone| area)?|eur|single\s*currency)\b",
    // indices and ETFs
    r"\b(dxy|u\.s\.\s*dollar\s*index|dollar\s*index|bloomberg\s*dollar\s*spot\s*index)\b",
    r"\b(fxe|uup)\b",
    // central banks
    r"\b(ecb|european central bank|lagarde|panetta|cipollone|schaaf)\b",
    r"\b(fed|federal reserve|fomc|powell)\b",
    // macro data
    r"\b(cpi|hicp|pce|nfp|non[-\s]?farm|payrolls|unemployment|pmi|gdp|ifo|zew|recession|stagflation|inflation|deflation|disinflation)\b",
    // rate policy
    r"\b(rate(s)?|hike|cut|pivot|pause|qe|qt|balance sheet|dot plot)\b",
    // trade policy
    r"\b(tariff(s)?|dut(y|ies)|sanction(s)?|trade\s*war|export controls?|anti[-\s]?dumping|wto dispute)\b",
    // geopolitics
    r"\b(geopolitic(s|al)|war|conflict|invasion|missile|strike|escalation|coup|border\s*clash|attack|terror)\b",
    // euro digital assets and regulation
    r"\b(euro[-\s]?stablecoin|euroc|eurc|eurt|stasis|euro tether|eur[-\s]?stablecoin|digital\s*euro|mica|bafin|allunity)\b",
];

/// A compiled case-insensitive pattern, optionally with a suffix that vetoes a hit.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    unless_followed_by: Option<Regex>,
}

impl Pattern {
    /// Compiles `pattern` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Pattern`] if the expression does not compile.
    pub fn new(pattern: &str) -> Result<Self, FxError> {
        Ok(Self {
            regex: compile(pattern)?,
            unless_followed_by: None,
        })
    }

    /// A hit immediately followed by text matching `suffix` does not count.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Pattern`] if `suffix` does not compile.
    pub fn unless_followed_by(mut self, suffix: &str) -> Result<Self, FxError> {
        self.unless_followed_by = Some(compile(&format!(r"\A(?:{suffix})"))?);
        Ok(self)
    }

    /// The source expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// True if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match &self.unless_followed_by {
            None => self.regex.is_match(text),
            Some(guard) => self
                .regex
                .find_iter(text)
                .any(|m| !guard.is_match(&text[m.end()..])),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, FxError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

/// An ordered group of patterns; the set matches when any member does.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compiles every expression in `patterns`.
    ///
    /// # Errors
    ///
    /// Returns the first compile error.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, FxError> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Appends an already compiled pattern.
    pub fn push(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// True if any member matches `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// The members that match `text`, in table order.
    pub fn matching<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Pattern> + 'a {
        self.patterns.iter().filter(move |p| p.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
