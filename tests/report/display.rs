use fxnews_rs::{
    Article, CurrencyTopic, Pipeline, SentimentLabel,
    report::{DEFAULT_DISPLAY_ROWS, display_rows},
};

#[test]
fn display_rows_truncates_to_limit() {
    let pipeline = Pipeline::new().unwrap();
    let articles: Vec<Article> = (0..30)
        .map(|i| Article::new(format!("EUR update {i}"), "The euro rallied."))
        .collect();
    let annotated = pipeline.run(&articles);
    assert_eq!(annotated.len(), 30);

    let rows = display_rows(&annotated, DEFAULT_DISPLAY_ROWS);
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[0].title, Some("EUR update 0"));
    assert_eq!(rows[19].title, Some("EUR update 19"));
    assert_eq!(rows[0].currency_topic, CurrencyTopic::Eur);
    assert_eq!(rows[0].sentiment_text, SentimentLabel::Positive);
    assert_eq!(rows[0].compound, annotated[0].compound());
}

#[test]
fn display_rows_shorter_than_limit() {
    let pipeline = Pipeline::new().unwrap();
    let annotated = pipeline.run(&[Article::new("Dollar index climbs", "")]);

    let rows = display_rows(&annotated, 5);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].summary, Some(""));
    assert_eq!(rows[0].compound, Some(0.0));
    assert_eq!(rows[0].sentiment_text, SentimentLabel::Neutral);

    assert!(display_rows(&annotated, 0).is_empty());
}
