//! `beacon classify <href>` – show how a location is reported.

use anyhow::Result;
use beacon_core::{classify, LocationDescriptor, OutboundEvent};

pub fn run_classify(href: &str) -> Result<()> {
    let loc = LocationDescriptor::from_href_lossy(href);
    let classification = classify(&loc);
    let event = OutboundEvent::pageview(&classification);

    let path = classification.logical_path.to_string();
    println!("{:<8} {}", "HOST", or_dash(loc.hostname()));
    println!("{:<8} {}", "PATH", or_dash(&path));
    println!("{:<8} {}", "SEARCH", or_dash(&classification.search));
    println!("{:<8} {}", "URL", event.url);
    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
