//! Outbound analytics event payload.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;

/// Fixed origin every event URL is reported under.
pub const ORIGIN: &str = "https://chatanalytics.app";

/// Site domain the analytics backend files events under.
pub const DOMAIN: &str = "chatanalytics.app";

/// Event name for page views.
pub const PAGEVIEW: &str = "pageview";

/// JSON body of a single event POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEvent {
    pub name: String,
    pub url: String,
    pub domain: String,
}

impl OutboundEvent {
    /// Builds an event named `name` for a classified location.
    ///
    /// `url` is [`ORIGIN`] followed by the logical path and the verbatim search.
    pub fn new(name: impl Into<String>, classification: &Classification) -> Self {
        Self {
            name: name.into(),
            url: format!("{}{}", ORIGIN, classification.path_and_query()),
            domain: DOMAIN.to_string(),
        }
    }

    pub fn pageview(classification: &Classification) -> Self {
        Self::new(PAGEVIEW, classification)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
