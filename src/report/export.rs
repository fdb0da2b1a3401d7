use std::{collections::BTreeSet, fs::File, io, path::Path};

use serde_json::Value;

use crate::{FxError, pipeline::AnnotatedArticle};

/// Columns written before and after the pass-through fields.
pub const CSV_FIXED_COLUMNS: (&[&str], &[&str]) = (
    &["title", "summary", "time_published"],
    &["currency_topic", "neg", "neu", "pos", "compound", "sentiment_text"],
);

/// Writes the full annotated collection as CSV.
///
/// Pass-through provider fields get one column each (sorted by name, union
/// over all rows). Strings are written as-is, other JSON values as JSON text,
/// and missing values as empty cells. A `title`, `summary` or
/// `time_published` that was not text is written raw.
///
/// # Errors
///
/// Returns [`FxError::Csv`] or [`FxError::Io`] if writing fails.
pub fn write_csv<W: io::Write>(writer: W, articles: &[AnnotatedArticle]) -> Result<(), FxError> {
    let (leading, trailing) = CSV_FIXED_COLUMNS;
    let extra_keys: BTreeSet<&str> = articles
        .iter()
        .flat_map(|a| a.article.extra.keys().map(String::as_str))
        .filter(|k| !leading.contains(k) && !trailing.contains(k))
        .collect();

    let mut wtr = csv::Writer::from_writer(writer);

    let header = leading
        .iter()
        .copied()
        .chain(extra_keys.iter().copied())
        .chain(trailing.iter().copied());
    wtr.write_record(header)?;

    for a in articles {
        let mut row = Vec::with_capacity(leading.len() + extra_keys.len() + trailing.len());
        for key in leading {
            row.push(cell(a.article.field_value(key).as_ref()));
        }
        for key in &extra_keys {
            row.push(cell(a.article.extra.get(*key)));
        }
        row.push(a.currency_topic.to_string());
        let scores = a.sentiment;
        for v in [
            scores.map(|s| s.negative),
            scores.map(|s| s.neutral),
            scores.map(|s| s.positive),
            scores.map(|s| s.compound),
        ] {
            row.push(v.map(|v| v.to_string()).unwrap_or_default());
        }
        row.push(a.sentiment_label.to_string());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// [`write_csv`] into a new file at `path`.
///
/// # Errors
///
/// Returns [`FxError::Io`] if the file cannot be created, otherwise as [`write_csv`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err, fields(rows = articles.len())))]
pub fn export_csv(path: impl AsRef<Path>, articles: &[AnnotatedArticle]) -> Result<(), FxError> {
    let file = File::create(path.as_ref())?;
    write_csv(io::BufWriter::new(file), articles)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
