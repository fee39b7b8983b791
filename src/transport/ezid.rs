//! EZID HTTP transport
//!
//! Talks to `<base_url>/<identifier>` with HTTP basic credentials:
//! - GET returns the identifier's ANVL metadata behind a status line
//! - PUT creates the identifier or replaces its metadata

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use super::{CONTENT_TYPE_ANVL, RegistryResponse, RegistryTransport, TransportError};
use crate::config::RegistryConfig;
use crate::models::Identifier;

/// Blocking HTTP transport for an EZID endpoint
pub struct EzidTransport {
    config: RegistryConfig,
    client: Client,
}

impl EzidTransport {
    /// Create a transport from validated settings
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use doi_registry_sdk::config::RegistryConfig;
    /// use doi_registry_sdk::transport::EzidTransport;
    ///
    /// let config = RegistryConfig::new("apitest", "apitest").with_timeout(10);
    /// let transport = EzidTransport::new(config).unwrap();
    /// ```
    pub fn new(config: RegistryConfig) -> Result<Self, TransportError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                TransportError::ClientError(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Build a request with authentication headers
    fn build_request(&self, method: reqwest::Method, identifier: &Identifier) -> RequestBuilder {
        let url = self.config.identifier_url(identifier.as_str());
        self.client
            .request(method, url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(ACCEPT, "text/plain")
    }

    fn send(
        &self,
        request: RequestBuilder,
        identifier: &Identifier,
    ) -> Result<RegistryResponse, TransportError> {
        let response = request.send().map_err(|e| {
            TransportError::NetworkError(format!("Request for {} failed: {}", identifier, e))
        })?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            TransportError::NetworkError(format!(
                "Failed to read response for {}: {}",
                identifier, e
            ))
        })?;
        debug!("{} responded with status {}", identifier, status);
        Ok(RegistryResponse { status, body })
    }
}

impl RegistryTransport for EzidTransport {
    fn get(&self, identifier: &Identifier) -> Result<RegistryResponse, TransportError> {
        let request = self.build_request(reqwest::Method::GET, identifier);
        self.send(request, identifier)
    }

    fn put(
        &self,
        identifier: &Identifier,
        body: &[u8],
    ) -> Result<RegistryResponse, TransportError> {
        let request = self
            .build_request(reqwest::Method::PUT, identifier)
            .header(CONTENT_TYPE, CONTENT_TYPE_ANVL)
            .body(body.to_vec());
        self.send(request, identifier)
    }
}
