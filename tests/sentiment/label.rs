use fxnews_rs::{SentimentLabel, label};

#[test]
fn thresholds_are_inclusive_toward_polar_labels() {
    assert_eq!(label(Some(0.05)), SentimentLabel::Positive);
    assert_eq!(label(Some(-0.05)), SentimentLabel::Negative);
    assert_eq!(label(Some(0.04)), SentimentLabel::Neutral);
    assert_eq!(label(Some(-0.0499)), SentimentLabel::Neutral);
    assert_eq!(label(Some(0.0)), SentimentLabel::Neutral);
    assert_eq!(label(None), SentimentLabel::Neutral);
}

#[test]
fn extremes_are_labeled() {
    assert_eq!(label(Some(1.0)), SentimentLabel::Positive);
    assert_eq!(label(Some(-1.0)), SentimentLabel::Negative);
}

#[test]
fn label_serializes_lowercase() {
    let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
    assert_eq!(json, r#""negative""#);
    assert_eq!(SentimentLabel::Positive.to_string(), "positive");
}
