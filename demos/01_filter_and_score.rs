use fxnews_rs::{Article, Pipeline, report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let batch = vec![
        Article::new(
            "EUR/USD climbs as ECB signals patience on rate cuts",
            "The euro gained after Lagarde said policymakers are confident inflation is easing.",
        )
        .with_time_published("20250103T101500"),
        Article::new(
            "Acme Corp Q3 EPS beats guidance",
            "Shares rose after the company raised its dividend.",
        ),
        Article::new(
            "Bitcoin rallies past resistance",
            "Crypto traders cheer another record high.",
        ),
        Article::new(
            "EURC digital euro stablecoin adoption grows amid crypto volatility",
            "Issuers expect MiCA rules to support euro stablecoins.",
        )
        .with_time_published("20250104T080000"),
        Article::new(
            "Dollar slumps as recession fears grow",
            "The greenback fell sharply after weak payrolls data.",
        )
        .with_time_published("20250105T133000"),
        Article::new("Local bakery wins award", "A great day for bread."),
    ];

    let pipeline = Pipeline::new()?;

    // 1. Explain every decision.
    println!("--- Filter decisions ---");
    for article in &batch {
        let decision = pipeline.filter().decide(article);
        println!(
            "  [{}] by {:<9} {}",
            if decision.keep { "keep" } else { "drop" },
            decision.rule.unwrap_or("-"),
            article.title().unwrap_or_default()
        );
    }
    println!();

    // 2. Annotate the survivors.
    let (annotated, summary) = pipeline.run_with_report(&batch);
    println!("Filtered to {} relevant news items.", summary.kept);
    for row in report::display_rows(&annotated, report::DEFAULT_DISPLAY_ROWS) {
        println!(
            "  {:<5} {:>7} {:<8} {}",
            row.currency_topic,
            row.compound.map(|c| format!("{c:.4}")).unwrap_or_default(),
            row.sentiment_text,
            row.title.unwrap_or_default()
        );
    }
    println!();

    // 3. Sentiment over time per currency.
    for (topic, points) in report::time_series(&annotated) {
        println!("--- {topic} ---");
        for p in points {
            println!("  {}  {:+.4}", p.time.format("%Y-%m-%d %H:%M"), p.compound);
        }
    }

    Ok(())
}
