//! Event delivery.
//!
//! Delivery is best effort: [`fire_and_forget`] runs the POST on its own
//! thread and only logs failures, so nothing about the network reaches the
//! code that reported the page view. There are no retries.

mod error;
mod http;

pub use error::TransportError;
pub use http::CurlTransport;

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::event::OutboundEvent;

/// Sends one event to the analytics backend.
pub trait Transport: Send + Sync {
    fn send(&self, event: &OutboundEvent) -> Result<(), TransportError>;
}

/// Delivers `event` on a background thread and swallows any failure.
///
/// Returns the thread handle so callers that must not exit early (the CLI,
/// tests) can join it; dropping the handle detaches delivery. Returns `None`
/// if the thread could not be spawned, which is logged like any other
/// delivery failure.
pub fn fire_and_forget(
    transport: Arc<dyn Transport>,
    event: OutboundEvent,
) -> Option<JoinHandle<()>> {
    let spawned = thread::Builder::new()
        .name("beacon-send".to_string())
        .spawn(move || {
            if let Err(err) = transport.send(&event) {
                tracing::debug!("dropped {} event for {}: {}", event.name, event.url, err);
            }
        });
    match spawned {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::debug!("could not spawn delivery thread: {}", err);
            None
        }
    }
}
