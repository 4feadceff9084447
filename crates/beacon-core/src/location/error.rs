//! Error type for building a location descriptor from an href.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    /// The href (or the inner URL of a `blob:` href) is not a valid URL.
    #[error("invalid location {href:?}: {source}")]
    Parse {
        href: String,
        #[source]
        source: url::ParseError,
    },
}
