//! Helpers for turning optional article text fields into matchable text.

/// Joins the present fields with a single space and lowercases the result.
///
/// Missing fields contribute nothing, so `[None, Some("A")]` yields `"a"`.
pub(crate) fn combined_lowercase<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for field in fields.into_iter().flatten() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(field);
    }
    out.to_lowercase()
}
