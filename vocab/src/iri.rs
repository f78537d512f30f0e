//! String-level URI helpers. None of these consult the registry.

/// Splits a compact URI like `"schema:name"` into `("schema", "name")`.
///
/// Returns `None` when the value has no colon, when the slug is empty or
/// contains `/`, or when the remainder starts with `//` (an absolute URI
/// such as `http://...`).
#[must_use]
pub fn parse_compact(s: &str) -> Option<(&str, &str)> {
    let (slug, local) = s.split_once(':')?;
    if slug.is_empty() || slug.contains('/') || local.starts_with("//") {
        return None;
    }
    Some((slug, local))
}

/// Returns true for `http://` and `https://` URIs.
#[must_use]
pub fn is_http_uri(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Returns the namespace part of `uri`: everything up to and including the
/// last `#`, or the last `/` when there is no `#`.
///
/// A URI with neither separator is returned unchanged.
#[must_use]
pub fn prefix_from_uri(uri: &str) -> &str {
    match uri.rfind('#').or_else(|| uri.rfind('/')) {
        Some(pos) => &uri[..=pos],
        None => uri,
    }
}
