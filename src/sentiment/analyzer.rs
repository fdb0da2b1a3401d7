use std::collections::{HashMap, HashSet};

use super::lexicon::{BOOSTERS, C_INCR, N_SCALAR, NEGATIONS, WORDS};
use super::{SentimentEngine, SentimentScores};
use crate::FxError;

/// Accepted valences in lexicon files.
pub const VALENCE_RANGE: std::ops::RangeInclusive<f64> = -4.0..=4.0;

/// Normalization constant for the compound score; approximates the maximum expected sum.
const ALPHA: f64 = 15.0;

/// Rule-based lexicon sentiment analyzer.
///
/// Sums word valences with heuristics for boosters ("very"), capitalised
/// emphasis, negation within three tokens, "least", "kind of", contrastive
/// "but" and `!`/`?` emphasis, then normalizes the sum into `compound`.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self {
            lexicon: WORDS.iter().map(|(w, v)| ((*w).to_string(), *v)).collect(),
            boosters: BOOSTERS.iter().map(|(w, v)| ((*w).to_string(), *v)).collect(),
            negations: NEGATIONS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in tables extended (and overridden) by a lexicon in the common
    /// tab-separated format: `token<TAB>mean valence[<TAB>...]`.
    ///
    /// Blank lines are skipped; columns after the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Lexicon`] naming the first line without a numeric
    /// valence in [`VALENCE_RANGE`].
    pub fn from_lexicon_str(lexicon: &str) -> Result<Self, FxError> {
        let mut analyzer = Self::default();
        for (idx, line) in lexicon.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut cols = line.split('\t');
            let token = cols.next().unwrap_or_default().trim();
            let valence = cols
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .ok_or_else(|| FxError::Lexicon(format!("line {}: expected `token<TAB>valence`", idx + 1)))?;
            if token.is_empty() {
                return Err(FxError::Lexicon(format!("line {}: empty token", idx + 1)));
            }
            // `parse` accepts NaN and infinities.
            if !VALENCE_RANGE.contains(&valence) {
                return Err(FxError::Lexicon(format!(
                    "line {}: valence {valence} outside [{}, {}]",
                    idx + 1,
                    VALENCE_RANGE.start(),
                    VALENCE_RANGE.end()
                )));
            }
            analyzer.lexicon.insert(token.to_lowercase(), valence);
        }
        Ok(analyzer)
    }

    /// Adds or replaces a single word.
    #[must_use]
    pub fn with_word(mut self, word: impl AsRef<str>, valence: f64) -> Self {
        self.lexicon.insert(word.as_ref().to_lowercase(), valence);
        self
    }

    /// Valence of a lowercase word, if it is in the lexicon.
    pub fn valence_of(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Scores `text`.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = allcap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lower.iter().enumerate() {
            if self.boosters.contains_key(word)
                || (word == "kind" && lower.get(i + 1).is_some_and(|n| n == "of"))
            {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(i, &tokens, &lower, cap_diff));
        }

        but_check(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    fn sentiment_valence(&self, i: usize, tokens: &[&str], lower: &[String], cap_diff: bool) -> f64 {
        let Some(&base) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" before another sentiment word acts as a negator, not as a word of its own.
        if lower[i] == "no" && lower.get(i + 1).is_some_and(|n| self.in_lexicon(n)) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(tokens[i]) && cap_diff {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start in 0..3 {
            if i <= start {
                break;
            }
            let j = i - start - 1;
            if self.in_lexicon(&lower[j]) {
                continue;
            }
            let mut s = self.scalar_inc_dec(tokens[j], &lower[j], valence, cap_diff);
            if start == 1 {
                s *= 0.95;
            } else if start == 2 {
                s *= 0.9;
            }
            valence += s;
            valence = self.negation_check(valence, lower, start, i);
        }

        self.least_check(valence, lower, i)
    }

    fn scalar_inc_dec(&self, word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&boost) = self.boosters.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if is_upper(word) && cap_diff {
            scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        scalar
    }

    fn negated(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't")
    }

    fn negation_check(&self, valence: f64, lower: &[String], start: usize, i: usize) -> f64 {
        match start {
            0 if self.negated(&lower[i - 1]) => valence * N_SCALAR,
            1 => {
                if lower[i - 2] == "never" && matches!(lower[i - 1].as_str(), "so" | "this") {
                    valence * 1.25
                } else if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                    valence
                } else if self.negated(&lower[i - 2]) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
            2 => {
                let never_so = lower[i - 3] == "never"
                    && (matches!(lower[i - 2].as_str(), "so" | "this")
                        || matches!(lower[i - 1].as_str(), "so" | "this"));
                if never_so {
                    valence * 1.25
                } else if lower[i - 3] == "without"
                    && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt")
                {
                    valence
                } else if self.negated(&lower[i - 3]) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
            _ => valence,
        }
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 1 && lower[i - 1] == "least" && !self.in_lexicon(&lower[i - 1]) {
            if lower[i - 2] != "at" && lower[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && lower[i - 1] == "least" && !self.in_lexicon(&lower[i - 1]) {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl SentimentEngine for LexiconAnalyzer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        Self::polarity_scores(self, text)
    }
}

/// Whitespace tokens; surrounding punctuation is stripped unless that would
/// leave two characters or fewer (keeps emoticons like `:)` intact).
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|t| {
            let stripped = t.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 { t } else { stripped }
        })
        .collect()
}

fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are written in capitals.
fn allcap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_upper(t)).count();
    caps > 0 && caps < tokens.len()
}

fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (si, s) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *s *= 0.5;
        } else if si > bi {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep = text.matches('!').count().min(4) as f64 * 0.292;
    let qm = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    ep + qm
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(x: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (x * f).round() / f
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScores {
    if sentiments.is_empty() {
        return SentimentScores::default();
    }

    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0, 0.0, 0.0);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    SentimentScores {
        negative: round_to((neg_sum / total).abs(), 3),
        neutral: round_to((neu_count / total).abs(), 3),
        positive: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
