//! Registry transport abstraction
//!
//! Defines the RegistryTransport trait and implementations:
//! - EzidTransport: HTTP against an EZID endpoint (default backend)
//! - InMemoryRegistry: in-process registry for development and tests
//!
//! A non-2xx status is a normal [`RegistryResponse`]; only failures to
//! complete the exchange at all are a [`TransportError`].

use serde::Serialize;

use crate::config::ConfigError;
use crate::models::Identifier;

#[cfg(feature = "ezid-backend")]
pub mod ezid;
pub mod memory;

#[cfg(feature = "ezid-backend")]
pub use ezid::EzidTransport;
pub use memory::InMemoryRegistry;

/// Content type of every metadata upload
pub const CONTENT_TYPE_ANVL: &str = "text/plain; charset=UTF-8";

/// Error type for transport operations
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP client error: {0}")]
    ClientError(String),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

/// Status and body returned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryResponse {
    pub status: u16,
    pub body: String,
}

impl RegistryResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for registry transports
///
/// Both calls are synchronous and authenticated by the implementation.
pub trait RegistryTransport {
    /// Fetch the current metadata of an identifier
    fn get(&self, identifier: &Identifier) -> Result<RegistryResponse, TransportError>;

    /// Create or fully replace an identifier's metadata with an ANVL body
    fn put(
        &self,
        identifier: &Identifier,
        body: &[u8],
    ) -> Result<RegistryResponse, TransportError>;
}

impl<T: RegistryTransport + ?Sized> RegistryTransport for &T {
    fn get(&self, identifier: &Identifier) -> Result<RegistryResponse, TransportError> {
        (**self).get(identifier)
    }

    fn put(
        &self,
        identifier: &Identifier,
        body: &[u8],
    ) -> Result<RegistryResponse, TransportError> {
        (**self).put(identifier, body)
    }
}
