//! Delivery error type.

use thiserror::Error;

/// Why a single event could not be delivered. Never surfaced to the caller of
/// [`fire_and_forget`](super::fire_and_forget); only logged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Endpoint answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Event could not be encoded as JSON.
    #[error("encode event: {0}")]
    Serialize(#[from] serde_json::Error),
}
