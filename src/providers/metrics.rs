use std::time::Duration;

use gateway_oled_core::providers::MetricsSource;
use gateway_oled_core::{MetricsSnapshot, ProviderError};
use reqwest::blocking::Client;

use crate::error::Error;

/// Packet metrics from the local forwarder's HTTP API.
///
/// A single attempt per render; any transport failure or non-2xx status reads
/// as "unavailable".
pub struct HttpMetrics {
    client: Client,
    url: String,
}

impl HttpMetrics {
    pub fn new(url: String, timeout: Duration) -> Result<Self, Error> {
        // loopback only, never through a proxy
        let client = Client::builder().timeout(timeout).no_proxy().build()?;
        Ok(Self { client, url })
    }
}

impl MetricsSource for HttpMetrics {
    fn metrics(&mut self) -> Result<MetricsSnapshot, ProviderError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        MetricsSnapshot::from_json(&body)
    }
}
