use fxnews_rs::{
    Article, CurrencyTopic, Pipeline, SentimentLabel, SentimentScores, SentimentScorer,
    RelevanceFilter, TopicClassifier, news::parse_feed,
};

use crate::common::{article, mixed_batch, news_fixture};

fn fixture_articles() -> Vec<Article> {
    parse_feed(&news_fixture()).unwrap()
}

#[test]
fn run_keeps_relevant_items_in_order() {
    let pipeline = Pipeline::new().unwrap();
    let out = pipeline.run(&fixture_articles());

    let titles: Vec<_> = out.iter().map(|a| a.title().unwrap()).collect();
    assert_eq!(
        titles,
        [
            "EUR/USD slips as Fed officials push back on rate cut bets",
            "Euro stablecoin EURC gains traction under MiCA",
            "Greenback steady ahead of payrolls",
        ]
    );

    let topics: Vec<_> = out.iter().map(|a| a.currency_topic).collect();
    assert_eq!(
        topics,
        [CurrencyTopic::Both, CurrencyTopic::Eur, CurrencyTopic::Usd]
    );
}

#[test]
fn run_scores_summaries() {
    let out = Pipeline::new().unwrap().run(&fixture_articles());

    // "weakened" outweighs "easing".
    assert_eq!(out[0].sentiment_label, SentimentLabel::Negative);
    assert!(out[0].compound().unwrap() < 0.0);

    // "welcome" clarity.
    assert_eq!(out[1].sentiment_label, SentimentLabel::Positive);

    // null summary: not scoreable, neutral.
    assert_eq!(out[2].sentiment, None);
    assert_eq!(out[2].compound(), None);
    assert_eq!(out[2].sentiment_label, SentimentLabel::Neutral);
}

#[test]
fn run_with_report_counts_rules_and_topics() {
    let pipeline = Pipeline::new().unwrap();
    let articles = fixture_articles();
    let (out, report) = pipeline.run_with_report(&articles);

    assert_eq!(out, pipeline.run(&articles));
    assert_eq!(report.input, 6);
    assert_eq!(report.kept, 3);
    assert_eq!(report.dropped(), 3);
    assert_eq!(report.dropped_by_rule.get("earnings"), Some(&1));
    assert_eq!(report.dropped_by_rule.get("crypto"), Some(&1));
    assert_eq!(report.dropped_by_rule.get("relevance"), Some(&1));
    assert_eq!(report.topics.get(&CurrencyTopic::Both), Some(&1));
    assert_eq!(report.topics.get(&CurrencyTopic::Eur), Some(&1));
    assert_eq!(report.topics.get(&CurrencyTopic::Usd), Some(&1));
    assert_eq!(report.topics.get(&CurrencyTopic::Other), None);
}

#[test]
fn empty_batch_is_empty() {
    let pipeline = Pipeline::new().unwrap();
    assert!(pipeline.run(&[]).is_empty());

    let (out, report) = pipeline.run_with_report(&[]);
    assert!(out.is_empty());
    assert_eq!(report.input, 0);
    assert_eq!(report.dropped(), 0);
}

#[test]
fn mixed_batch_matches_filter_alone() {
    let pipeline = Pipeline::new().unwrap();
    let batch = mixed_batch();

    let kept_by_filter = pipeline.filter().filter_sequential(batch.clone());
    let kept_by_pipeline: Vec<Article> = pipeline
        .run(&batch)
        .into_iter()
        .map(|a| a.article)
        .collect();
    assert_eq!(kept_by_pipeline, kept_by_filter);
    assert_eq!(kept_by_pipeline.len(), 4);
}

#[test]
fn annotate_does_not_filter() {
    let pipeline = Pipeline::new().unwrap();
    let local = article("Local bakery wins award", "Customers love the new bread.");

    let annotated = pipeline.annotate(&local);
    assert_eq!(annotated.currency_topic, CurrencyTopic::Other);
    assert_eq!(annotated.sentiment_label, SentimentLabel::Positive);
    assert_eq!(annotated.article, local);
}

#[test]
fn topic_uses_title_and_sentiment_uses_summary() {
    let pipeline = Pipeline::new().unwrap();
    let a = pipeline.annotate(&article(
        "Stocks drift ahead of Fed",
        "The dollar and the euro both slumped.",
    ));
    assert_eq!(a.currency_topic, CurrencyTopic::Other);
    assert_eq!(a.sentiment_label, SentimentLabel::Negative);
}

#[test]
fn custom_engine_flows_through() {
    let pipeline = Pipeline::with_engine(|_: &str| SentimentScores {
        compound: -0.9,
        ..SentimentScores::default()
    })
    .unwrap();

    let out = pipeline.run(&fixture_articles());
    assert_eq!(out[0].sentiment_label, SentimentLabel::Negative);
    assert_eq!(out[1].sentiment_label, SentimentLabel::Negative);
    // Still no score without a summary.
    assert_eq!(out[2].sentiment_label, SentimentLabel::Neutral);
}

#[test]
fn from_parts_uses_the_given_filter() {
    let filter = RelevanceFilter::builder()
        .include(r"\bbakery\b")
        .build()
        .unwrap();
    let pipeline = Pipeline::from_parts(
        filter,
        TopicClassifier::new().unwrap(),
        SentimentScorer::new(),
    );

    let out = pipeline.run(&mixed_batch());
    assert!(out.iter().any(|a| a.title() == Some("Local bakery wins award")));
}
