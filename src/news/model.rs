use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

/// Keys read into the typed text fields of [`Article`].
pub(crate) const TEXT_FIELDS: [&str; 3] = ["title", "summary", "time_published"];

/// A single news record as delivered by the provider.
///
/// Only the three fields the pipeline reads are typed. Everything else the
/// provider sends (`url`, `source`, `topics`, ...) is kept in [`Article::extra`]
/// and serialized back unchanged. A text field that arrives with a non-string
/// value is `None` for the pipeline, and its raw value stays in `extra`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    /// The headline. `None` when absent or not a string.
    pub title: Option<String>,
    /// The teaser text. `None` when absent or not a string.
    pub summary: Option<String>,
    /// Publication time as sent by the provider, typically `YYYYMMDDTHHMMSS`.
    pub time_published: Option<String>,
    /// Provider-supplied fields the pipeline does not interpret.
    pub extra: Map<String, Value>,
}

impl Article {
    /// Creates an article from its headline and summary.
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    /// Sets the publication timestamp.
    #[must_use]
    pub fn with_time_published(mut self, ts: impl Into<String>) -> Self {
        self.time_published = Some(ts.into());
        self
    }

    /// Adds a pass-through field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    fn text_field(&self, key: &str) -> Option<&String> {
        match key {
            "title" => self.title.as_ref(),
            "summary" => self.summary.as_ref(),
            "time_published" => self.time_published.as_ref(),
            _ => None,
        }
    }

    /// The value exported for a text field: the text, else the raw provider value.
    pub(crate) fn field_value(&self, key: &str) -> Option<Value> {
        self.text_field(key)
            .map(|t| Value::String(t.clone()))
            .or_else(|| self.extra.get(key).cloned())
    }

    /// Writes the text fields, then the pass-through fields, into `map`.
    ///
    /// With `keep_empty`, absent text fields are written as `null`. Pass-through
    /// keys listed in `reserved` are left out.
    pub(crate) fn serialize_fields<M: SerializeMap>(
        &self,
        map: &mut M,
        keep_empty: bool,
        reserved: &[&str],
    ) -> Result<(), M::Error> {
        for key in TEXT_FIELDS {
            match (self.text_field(key), self.extra.get(key)) {
                (Some(text), _) => map.serialize_entry(key, text)?,
                (None, Some(raw)) => map.serialize_entry(key, raw)?,
                (None, None) if keep_empty => map.serialize_entry(key, &Value::Null)?,
                (None, None) => {}
            }
        }
        for (key, value) in &self.extra {
            if TEXT_FIELDS.contains(&key.as_str()) || reserved.contains(&key.as_str()) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        Ok(())
    }
}

impl Serialize for Article {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_fields(&mut map, false, &[])?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Article {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            title: take_text(&mut extra, "title"),
            summary: take_text(&mut extra, "summary"),
            time_published: take_text(&mut extra, "time_published"),
            extra,
        })
    }
}

/// Moves a string field out of `extra`; other non-null values stay behind.
fn take_text(extra: &mut Map<String, Value>, key: &str) -> Option<String> {
    match extra.remove(key)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        raw => {
            extra.insert(key.to_string(), raw);
            None
        }
    }
}

/// Result ordering requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Latest,
    /// Oldest first.
    Earliest,
    /// Provider relevance ranking.
    Relevance,
}

impl SortOrder {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "LATEST",
            Self::Earliest => "EARLIEST",
            Self::Relevance => "RELEVANCE",
        }
    }
}
