//! Page-view tracking entry point.
//!
//! A [`Tracker`] reads the current location from a [`LocationSource`] at call
//! time, classifies it, and hands the resulting event to a [`Transport`]
//! without waiting for delivery.

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::classify::classify;
use crate::config::BeaconConfig;
use crate::event::{OutboundEvent, PAGEVIEW};
use crate::location::LocationDescriptor;
use crate::transport::{fire_and_forget, CurlTransport, Transport};

/// Supplies the location a page view is reported for.
pub trait LocationSource {
    fn current(&self) -> LocationDescriptor;
}

/// A fixed, injected location.
#[derive(Debug, Clone)]
pub struct StaticLocation(pub LocationDescriptor);

impl LocationSource for StaticLocation {
    fn current(&self) -> LocationDescriptor {
        self.0.clone()
    }
}

/// Event that was built for a `track` call, plus its in-flight delivery.
#[derive(Debug)]
pub struct Dispatch {
    pub event: OutboundEvent,
    /// `None` when sending is disabled or the delivery thread did not start.
    pub delivery: Option<JoinHandle<()>>,
}

impl Dispatch {
    /// Blocks until delivery has finished (successfully or not).
    pub fn wait(self) -> OutboundEvent {
        if let Some(handle) = self.delivery {
            if handle.join().is_err() {
                tracing::debug!("delivery thread panicked for {}", self.event.url);
            }
        }
        self.event
    }
}

pub struct Tracker<S> {
    source: S,
    transport: Option<Arc<dyn Transport>>,
}

impl<S: LocationSource> Tracker<S> {
    pub fn new(source: S, transport: Arc<dyn Transport>) -> Self {
        Self {
            source,
            transport: Some(transport),
        }
    }

    /// Tracker that builds events but never sends them.
    pub fn disabled(source: S) -> Self {
        Self {
            source,
            transport: None,
        }
    }

    /// Tracker posting through libcurl as configured; disabled when
    /// `cfg.enabled` is false.
    pub fn from_config(source: S, cfg: &BeaconConfig) -> Self {
        if cfg.enabled {
            Self::new(source, Arc::new(CurlTransport::from_config(cfg)))
        } else {
            Self::disabled(source)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Reports event `name` for the current location. Never fails.
    pub fn track(&self, name: &str) -> Dispatch {
        let loc = self.source.current();
        let classification = classify(&loc);
        let event = OutboundEvent::new(name, &classification);
        tracing::debug!("{} {} -> {}", name, loc.href(), event.url);

        let delivery = self
            .transport
            .as_ref()
            .and_then(|t| fire_and_forget(Arc::clone(t), event.clone()));
        Dispatch { event, delivery }
    }

    pub fn pageview(&self) -> Dispatch {
        self.track(PAGEVIEW)
    }
}
