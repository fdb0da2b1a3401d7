use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    news::Article,
    sentiment::{SentimentLabel, SentimentScores},
    topic::CurrencyTopic,
};

/// Keys an [`AnnotatedArticle`] adds to the article's own fields.
pub const ANNOTATION_KEYS: [&str; 6] = [
    "currency_topic",
    "neg",
    "neu",
    "pos",
    "compound",
    "sentiment_label",
];

/// A relevant article with its currency focus and sentiment.
///
/// Serializes flat with a fixed set of keys: `title`, `summary` and
/// `time_published`, the article's pass-through fields, then
/// [`ANNOTATION_KEYS`]. Absent text and scores are `null`. A pass-through
/// field named like an annotation key is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedArticle {
    pub article: Article,
    pub currency_topic: CurrencyTopic,
    /// `None` when the summary is absent or not text.
    pub sentiment: Option<SentimentScores>,
    pub sentiment_label: SentimentLabel,
}

impl AnnotatedArticle {
    pub fn compound(&self) -> Option<f64> {
        self.sentiment.map(|s| s.compound)
    }

    pub fn title(&self) -> Option<&str> {
        self.article.title()
    }

    pub fn summary(&self) -> Option<&str> {
        self.article.summary()
    }
}

impl Serialize for AnnotatedArticle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.article.serialize_fields(&mut map, true, &ANNOTATION_KEYS)?;

        let scores = self.sentiment;
        map.serialize_entry("currency_topic", &self.currency_topic)?;
        map.serialize_entry("neg", &scores.map(|s| s.negative))?;
        map.serialize_entry("neu", &scores.map(|s| s.neutral))?;
        map.serialize_entry("pos", &scores.map(|s| s.positive))?;
        map.serialize_entry("compound", &scores.map(|s| s.compound))?;
        map.serialize_entry("sentiment_label", &self.sentiment_label)?;
        map.end()
    }
}
