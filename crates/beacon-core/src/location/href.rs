//! Href parsing into a browser-equivalent location descriptor.

use url::Url;

use super::{LocationDescriptor, LocationError};

const BLOB_PREFIX: &str = "blob:";

/// Parses `href`, unwrapping `blob:` and flattening `file:` URLs.
///
/// Surrounding whitespace is ignored, as the URL parser ignores it too.
pub(super) fn parse_href(href: &str) -> Result<LocationDescriptor, LocationError> {
    let href = href.trim();
    let inner = strip_blob_prefix(href).unwrap_or(href);
    let parsed = Url::parse(inner).map_err(|source| LocationError::Parse {
        href: href.to_string(),
        source,
    })?;

    if parsed.scheme() == "file" {
        return Ok(LocationDescriptor::new("", parsed.path(), "", href));
    }

    let hostname = parsed.host_str().unwrap_or("");
    Ok(LocationDescriptor::new(
        hostname,
        parsed.path(),
        search_of(&parsed),
        href,
    ))
}

/// Returns the inner URL of a `blob:` href (scheme match is case-insensitive).
fn strip_blob_prefix(href: &str) -> Option<&str> {
    let head = href.get(..BLOB_PREFIX.len())?;
    if head.eq_ignore_ascii_case(BLOB_PREFIX) {
        Some(&href[BLOB_PREFIX.len()..])
    } else {
        None
    }
}

/// `?query`, or empty when the query is absent or empty.
fn search_of(url: &Url) -> String {
    match url.query() {
        Some(q) if !q.is_empty() => format!("?{}", q),
        _ => String::new(),
    }
}
