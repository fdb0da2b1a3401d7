//! Filter → classify → score, over one batch.

mod model;

pub use model::{ANNOTATION_KEYS, AnnotatedArticle};

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    FxError,
    filter::{Decision, RelevanceFilter},
    news::Article,
    sentiment::{LexiconAnalyzer, SentimentEngine, SentimentScorer},
    topic::{CurrencyTopic, TopicClassifier},
};

/// Counts gathered while running a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub input: usize,
    pub kept: usize,
    /// Dropped articles per deciding rule name. Articles no rule decided on
    /// are counted under `"unmatched"`.
    pub dropped_by_rule: BTreeMap<&'static str, usize>,
    pub topics: BTreeMap<CurrencyTopic, usize>,
}

impl PipelineReport {
    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

/// The three annotation stages, built once and shared across a batch.
///
/// Each article is handled independently; batches are processed on rayon's
/// pool and come back in input order.
#[derive(Debug, Clone)]
pub struct Pipeline<E = LexiconAnalyzer> {
    filter: RelevanceFilter,
    classifier: TopicClassifier,
    scorer: SentimentScorer<E>,
}

impl Pipeline {
    /// The standard tables with the built-in sentiment engine.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Pattern`] if a pattern table fails to compile.
    pub fn new() -> Result<Self, FxError> {
        Self::with_engine(LexiconAnalyzer::default())
    }
}

impl<E: SentimentEngine> Pipeline<E> {
    /// The standard tables with a custom sentiment engine.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Pattern`] if a pattern table fails to compile.
    pub fn with_engine(engine: E) -> Result<Self, FxError> {
        Ok(Self::from_parts(
            RelevanceFilter::new()?,
            TopicClassifier::new()?,
            SentimentScorer::with_engine(engine),
        ))
    }

    /// Assembles a pipeline from configured stages.
    pub const fn from_parts(
        filter: RelevanceFilter,
        classifier: TopicClassifier,
        scorer: SentimentScorer<E>,
    ) -> Self {
        Self {
            filter,
            classifier,
            scorer,
        }
    }

    pub const fn filter(&self) -> &RelevanceFilter {
        &self.filter
    }

    pub const fn classifier(&self) -> &TopicClassifier {
        &self.classifier
    }

    pub const fn scorer(&self) -> &SentimentScorer<E> {
        &self.scorer
    }

    /// Classifies the title and scores the summary, without filtering.
    pub fn annotate(&self, article: &Article) -> AnnotatedArticle {
        let currency_topic = self.classifier.classify(article.title());
        let (sentiment, sentiment_label) = self.scorer.score_and_label(article.summary());
        AnnotatedArticle {
            article: article.clone(),
            currency_topic,
            sentiment,
            sentiment_label,
        }
    }

    /// Annotates the relevant articles of a batch, in input order.
    pub fn run(&self, articles: &[Article]) -> Vec<AnnotatedArticle> {
        articles
            .par_iter()
            .filter(|a| self.filter.is_relevant(a))
            .map(|a| self.annotate(a))
            .collect()
    }

    /// [`Pipeline::run`], plus counts of what was kept and why the rest was dropped.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(input = articles.len())))]
    pub fn run_with_report(&self, articles: &[Article]) -> (Vec<AnnotatedArticle>, PipelineReport) {
        let outcomes: Vec<(Decision, Option<AnnotatedArticle>)> = articles
            .par_iter()
            .map(|a| {
                let decision = self.filter.decide(a);
                let annotated = decision.keep.then(|| self.annotate(a));
                (decision, annotated)
            })
            .collect();

        let mut report = PipelineReport {
            input: articles.len(),
            ..PipelineReport::default()
        };
        let mut annotated = Vec::new();
        for (decision, item) in outcomes {
            match item {
                Some(item) => {
                    *report.topics.entry(item.currency_topic).or_default() += 1;
                    annotated.push(item);
                }
                None => {
                    let rule = decision.rule.unwrap_or("unmatched");
                    *report.dropped_by_rule.entry(rule).or_default() += 1;
                }
            }
        }
        report.kept = annotated.len();

        #[cfg(feature = "tracing")]
        tracing::info!(
            kept = report.kept,
            dropped = report.dropped(),
            "filtered to {} relevant news items",
            report.kept
        );

        (annotated, report)
    }
}
