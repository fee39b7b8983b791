//! In-memory registry
//!
//! Behaves like the remote registry for the parts this crate relies on:
//! - PUT is an upsert: 201 on create, 200 on replace, full replacement
//! - records missing a required field are rejected with 400
//! - GET answers `success: <id>` followed by the stored ANVL
//!
//! Used for development without credentials and throughout the tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use super::{RegistryResponse, RegistryTransport, TransportError};
use crate::anvl::{self, Metadata};
use crate::models::{Identifier, keys};

/// One request seen by the in-memory registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Get(Identifier),
    Put(Identifier),
}

/// Single-threaded in-process registry
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    records: RefCell<BTreeMap<Identifier, Metadata>>,
    history: RefCell<Vec<Request>>,
    unreachable: RefCell<HashSet<Identifier>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every request for `identifier` fail at the transport level
    pub fn simulate_outage(&self, identifier: &Identifier) {
        self.unreachable.borrow_mut().insert(identifier.clone());
    }

    /// Stored metadata of an identifier
    pub fn metadata(&self, identifier: &Identifier) -> Option<Metadata> {
        self.records.borrow().get(identifier).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Every request received, in order
    pub fn history(&self) -> Vec<Request> {
        self.history.borrow().clone()
    }

    fn check_reachable(&self, identifier: &Identifier) -> Result<(), TransportError> {
        if self.unreachable.borrow().contains(identifier) {
            return Err(TransportError::NetworkError(format!(
                "Connection refused for {}",
                identifier
            )));
        }
        Ok(())
    }
}

impl RegistryTransport for InMemoryRegistry {
    fn get(&self, identifier: &Identifier) -> Result<RegistryResponse, TransportError> {
        self.history
            .borrow_mut()
            .push(Request::Get(identifier.clone()));
        self.check_reachable(identifier)?;

        match self.records.borrow().get(identifier) {
            Some(metadata) => {
                let mut body = format!("success: {}\n", identifier);
                body.push_str(&String::from_utf8_lossy(&anvl::encode_metadata(metadata)));
                Ok(RegistryResponse::new(200, body))
            }
            None => Ok(RegistryResponse::new(
                400,
                "error: bad request - no such identifier\n",
            )),
        }
    }

    fn put(
        &self,
        identifier: &Identifier,
        body: &[u8],
    ) -> Result<RegistryResponse, TransportError> {
        self.history
            .borrow_mut()
            .push(Request::Put(identifier.clone()));
        self.check_reachable(identifier)?;

        let Ok(text) = std::str::from_utf8(body) else {
            return Ok(RegistryResponse::new(
                400,
                "error: bad request - UTF-8 decode error\n",
            ));
        };
        let metadata = anvl::decode(text);

        if let Some(missing) = keys::REQUIRED
            .into_iter()
            .find(|key| !metadata.contains_key(*key))
        {
            return Ok(RegistryResponse::new(
                400,
                format!("error: bad request - missing required element: {}\n", missing),
            ));
        }

        let created = self
            .records
            .borrow_mut()
            .insert(identifier.clone(), metadata)
            .is_none();
        let status = if created { 201 } else { 200 };
        Ok(RegistryResponse::new(status, format!("success: {}\n", identifier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "_profile: datacite\n\
        _target: https://example.org\n\
        datacite.creator: Lab\n\
        datacite.title: Title\n\
        datacite.publisher: Lab\n\
        datacite.publicationyear: 2025\n\
        datacite.resourcetype: Dataset\n";

    #[test]
    fn test_put_creates_then_replaces() {
        let registry = InMemoryRegistry::new();
        let id = Identifier::new("doi:10.5072/FK2/X");

        assert_eq!(registry.put(&id, BODY.as_bytes()).unwrap().status, 201);
        assert_eq!(registry.put(&id, BODY.as_bytes()).unwrap().status, 200);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_put_rejects_missing_required_field() {
        let registry = InMemoryRegistry::new();
        let id = Identifier::new("doi:10.5072/FK2/X");
        let response = registry
            .put(&id, b"_profile: datacite\n_target: https://example.org\n")
            .unwrap();
        assert_eq!(response.status, 400);
        assert!(response.body.contains("datacite.creator"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_round_trips_metadata() {
        let registry = InMemoryRegistry::new();
        let id = Identifier::new("doi:10.5072/FK2/X");
        registry.put(&id, BODY.as_bytes()).unwrap();

        let response = registry.get(&id).unwrap();
        assert!(response.is_success());
        assert!(response.body.starts_with("success: doi:10.5072/FK2/X\n"));
        assert!(response.body.contains("datacite.title: Title\n"));
    }

    #[test]
    fn test_get_unknown_identifier() {
        let registry = InMemoryRegistry::new();
        let response = registry.get(&Identifier::new("doi:10.5072/FK2/NOPE")).unwrap();
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_outage_is_transport_error() {
        let registry = InMemoryRegistry::new();
        let id = Identifier::new("doi:10.5072/FK2/X");
        registry.simulate_outage(&id);
        assert!(matches!(
            registry.put(&id, BODY.as_bytes()),
            Err(TransportError::NetworkError(_))
        ));
        assert_eq!(registry.history(), vec![Request::Put(id)]);
    }
}
