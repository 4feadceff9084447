pub mod config;
pub mod logging;

pub mod classify;
pub mod event;
pub mod location;
pub mod tracker;
pub mod transport;

pub use classify::{classify, Classification, LogicalPath};
pub use event::OutboundEvent;
pub use location::LocationDescriptor;
pub use tracker::{Dispatch, LocationSource, StaticLocation, Tracker};
