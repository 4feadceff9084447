//! Location descriptors: the resolved document location a page view is
//! reported for.
//!
//! A descriptor is either handed over by a host that already exposes a
//! browser-like `location` (see [`LocationDescriptor::new`]) or built from a
//! raw href, which unwraps `blob:` object URLs and flattens `file:` URLs.

mod error;
mod href;

pub use error::LocationError;

/// Immutable `{hostname, pathname, search, href}` snapshot of a location.
///
/// Field semantics follow a browser's `window.location`: `search` is empty or
/// starts with `?`, `pathname` is percent-encoded, and `hostname` is empty for
/// local files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDescriptor {
    hostname: String,
    pathname: String,
    search: String,
    href: String,
}

impl LocationDescriptor {
    pub fn new(
        hostname: impl Into<String>,
        pathname: impl Into<String>,
        search: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            pathname: pathname.into(),
            search: search.into(),
            href: href.into(),
        }
    }

    /// Builds a descriptor from a full href.
    ///
    /// - `blob:<inner>` takes hostname/pathname/search from `<inner>`; `href`
    ///   keeps the full blob URL.
    /// - `file:` URLs have an empty hostname and an empty search.
    ///
    /// # Examples
    ///
    /// - `from_href("https://chatanalytics.app/demo/?a=1")` → hostname
    ///   `chatanalytics.app`, pathname `/demo/`, search `?a=1`
    /// - `from_href("file:///C:/report.html")` → hostname `""`, pathname `/C:/report.html`
    pub fn from_href(href: &str) -> Result<Self, LocationError> {
        href::parse_href(href)
    }

    /// Like [`from_href`](Self::from_href) but never fails.
    ///
    /// An unparseable href yields a descriptor with an empty hostname whose
    /// pathname is the raw input, which classifies as a report.
    pub fn from_href_lossy(href: &str) -> Self {
        match href::parse_href(href) {
            Ok(loc) => loc,
            Err(err) => {
                tracing::debug!("unparseable location, treating as local: {}", err);
                Self::new("", href, "", href)
            }
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}
