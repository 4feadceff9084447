//! Page-view classification.
//!
//! Maps a [`LocationDescriptor`] to the logical path reported to analytics:
//! the landing page, a named page on the hosted app (e.g. `/demo`), or a
//! report. The mapping is total: any location that is not recognizably the
//! hosted app is a report.

mod uuid;

pub use uuid::is_canonical_uuid;

use std::fmt;

use crate::location::LocationDescriptor;

/// Hostname the app is served from.
pub const APP_HOSTNAME: &str = "chatanalytics.app";

/// Logical path of a report view.
pub const REPORT_PATH: &str = "/report";

/// Logical page a view is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalPath {
    /// Hosted app root; renders as `""`.
    Landing,
    /// Single named page on the hosted app; holds the segment without slashes.
    Named(String),
    /// Generated report, wherever it is opened from.
    Report,
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalPath::Landing => Ok(()),
            LogicalPath::Named(segment) => write!(f, "/{}", segment),
            LogicalPath::Report => f.write_str(REPORT_PATH),
        }
    }
}

/// Result of classifying a location: logical path plus the verbatim search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub logical_path: LogicalPath,
    pub search: String,
}

impl Classification {
    /// `logical_path` followed by `search`, with no re-encoding.
    pub fn path_and_query(&self) -> String {
        format!("{}{}", self.logical_path, self.search)
    }
}

/// Classifies a location. First matching rule wins:
///
/// 1. app hostname, empty or `/` path → landing
/// 2. app hostname, one non-UUID segment → that segment
/// 3. app hostname, one UUID segment → report
/// 4. empty hostname (local file) → report
/// 5. anything else → report
pub fn classify(loc: &LocationDescriptor) -> Classification {
    Classification {
        logical_path: logical_path_of(loc.hostname(), loc.pathname()),
        search: loc.search().to_string(),
    }
}

fn logical_path_of(hostname: &str, pathname: &str) -> LogicalPath {
    if hostname.eq_ignore_ascii_case(APP_HOSTNAME) {
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        return match segments.as_slice() {
            [] => LogicalPath::Landing,
            [segment] if is_canonical_uuid(segment) => LogicalPath::Report,
            [segment] => LogicalPath::Named((*segment).to_string()),
            _ => LogicalPath::Report,
        };
    }

    // Local files (empty hostname) and re-hosted copies both land here.
    LogicalPath::Report
}
