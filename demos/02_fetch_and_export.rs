use std::time::Duration;

use fxnews_rs::{FxClient, FxError, NewsBuilder, Pipeline, report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Reads ALPHAVANTAGE_API_KEY.
    let client = FxClient::builder()
        .api_key_from_env()
        .timeout(Duration::from_secs(20))
        .cache_ttl(Duration::from_secs(300))
        .build()?;

    let articles = match NewsBuilder::new(&client).limit(1000).fetch().await {
        Ok(articles) => articles,
        Err(FxError::MissingFeed { message }) => {
            eprintln!(
                "warning: no news data found or API limit reached{}",
                message.map(|m| format!(" ({m})")).unwrap_or_default()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("Fetched {} news items.", articles.len());

    let pipeline = Pipeline::new()?;
    let (annotated, summary) = pipeline.run_with_report(&articles);
    println!("Filtered to {} relevant news items.", summary.kept);
    for (rule, n) in &summary.dropped_by_rule {
        println!("  dropped by {rule}: {n}");
    }

    let path = std::env::args().nth(1).unwrap_or_else(|| "av_news.csv".to_string());
    report::export_csv(&path, &annotated)?;
    println!("Wrote {path}");

    Ok(())
}
