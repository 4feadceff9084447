//! libcurl-backed event POST.

use std::time::Duration;

use super::{Transport, TransportError};
use crate::config::BeaconConfig;
use crate::event::OutboundEvent;

/// Posts events as JSON to an analytics endpoint.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    endpoint: String,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl CurlTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let defaults = BeaconConfig::default();
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(defaults.connect_timeout_secs),
            timeout: Duration::from_secs(defaults.timeout_secs),
            user_agent: defaults.user_agent,
        }
    }

    pub fn from_config(cfg: &BeaconConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for CurlTransport {
    fn send(&self, event: &OutboundEvent) -> Result<(), TransportError> {
        let body = event.to_json()?;

        let mut easy = curl::easy::Easy::new();
        easy.url(&self.endpoint)?;
        easy.post(true)?;
        easy.post_fields_copy(body.as_bytes())?;
        // Redirects are not followed; libcurl would resend a 30x POST as a bodyless GET.
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        // Endpoint parses the body as JSON regardless of content type.
        let mut list = curl::easy::List::new();
        list.append("Content-Type: text/plain")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            // Response body is not used; keep it off stdout.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransportError::Http(code));
        }
        tracing::debug!("delivered {} event for {}", event.name, event.url);
        Ok(())
    }
}
