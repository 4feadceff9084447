//! `beacon send <href>` – build and deliver one event.

use anyhow::{Context, Result};
use beacon_core::config::BeaconConfig;
use beacon_core::{LocationDescriptor, StaticLocation, Tracker};

/// Sends `event` for `href` and waits for delivery to finish.
///
/// `cfg` is `None` for a dry run: the JSON body is printed and nothing is
/// sent. Delivery failures are logged, never returned; the exit status only
/// reflects local problems.
pub async fn run_send(cfg: Option<&BeaconConfig>, href: &str, event: &str) -> Result<()> {
    let dry_run = cfg.is_none();
    let tracker = build_tracker(cfg, href);

    if !dry_run && !tracker.is_enabled() {
        tracing::info!("sending disabled in config; event not sent");
    }

    let event_name = event.to_string();
    let sent = tokio::task::spawn_blocking(move || tracker.track(&event_name).wait())
        .await
        .context("send task join")?;

    if dry_run {
        println!("{}", sent.to_json()?);
    } else {
        println!("{} {}", sent.name, sent.url);
    }
    Ok(())
}

fn build_tracker(cfg: Option<&BeaconConfig>, href: &str) -> Tracker<StaticLocation> {
    let source = StaticLocation(LocationDescriptor::from_href_lossy(href));
    match cfg {
        Some(cfg) => Tracker::from_config(source, cfg),
        None => Tracker::disabled(source),
    }
}
