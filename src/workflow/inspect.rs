//! Inspection workflow: fetch, decode and classify existing records

use serde::Serialize;
use tracing::{info, warn};

use super::RegistryRejection;
use crate::anvl::{self, Metadata};
use crate::classify::{Topic, classify};
use crate::models::Identifier;
use crate::transport::RegistryTransport;

/// What a fetch produced for one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InspectionResult {
    Fetched {
        status: u16,
        raw_body: String,
        metadata: Metadata,
        classified: Vec<(String, String)>,
    },
    Rejected(RegistryRejection),
    TransportFailed {
        error: String,
    },
}

/// Per-identifier result of [`inspect`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub identifier: Identifier,
    pub result: InspectionResult,
}

impl Inspection {
    pub fn is_ok(&self) -> bool {
        matches!(self.result, InspectionResult::Fetched { .. })
    }

    /// Body as returned by the registry, if a response arrived
    pub fn raw_body(&self) -> Option<&str> {
        match &self.result {
            InspectionResult::Fetched { raw_body, .. } => Some(raw_body.as_str()),
            InspectionResult::Rejected(rejection) => Some(rejection.body.as_str()),
            InspectionResult::TransportFailed { .. } => None,
        }
    }

    /// Selected fields; empty unless the fetch succeeded
    pub fn classified_fields(&self) -> &[(String, String)] {
        match &self.result {
            InspectionResult::Fetched { classified, .. } => classified.as_slice(),
            _ => &[],
        }
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        match &self.result {
            InspectionResult::Fetched { metadata, .. } => Some(metadata),
            _ => None,
        }
    }
}

/// Fetch every identifier in order and classify its fields by `topic`
///
/// A failed fetch becomes an error entry for that identifier; the
/// remaining identifiers are still fetched.
pub fn inspect<T>(identifiers: &[Identifier], transport: &T, topic: Topic) -> Vec<Inspection>
where
    T: RegistryTransport + ?Sized,
{
    identifiers
        .iter()
        .map(|identifier| Inspection {
            identifier: identifier.clone(),
            result: fetch(identifier, transport, topic),
        })
        .collect()
}

fn fetch<T>(identifier: &Identifier, transport: &T, topic: Topic) -> InspectionResult
where
    T: RegistryTransport + ?Sized,
{
    match transport.get(identifier) {
        Ok(response) if response.is_success() => {
            let metadata = anvl::decode(&response.body);
            let classified = classify(&metadata, topic);
            info!(
                "Fetched {} ({} field(s), {} {} field(s))",
                identifier,
                metadata.len(),
                classified.len(),
                topic
            );
            InspectionResult::Fetched {
                status: response.status,
                raw_body: response.body,
                metadata,
                classified,
            }
        }
        Ok(response) => {
            warn!(
                "Registry returned status {} for {}: {}",
                response.status,
                identifier,
                response.body.trim()
            );
            InspectionResult::Rejected(response.into())
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", identifier, e);
            InspectionResult::TransportFailed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::InMemoryRegistry;

    #[test]
    fn test_unknown_identifier_is_rejected_entry() {
        let registry = InMemoryRegistry::new();
        let inspections = inspect(
            &[Identifier::new("doi:10.5072/FK2/NOPE")],
            &registry,
            Topic::Container,
        );
        assert_eq!(inspections.len(), 1);
        assert!(!inspections[0].is_ok());
        assert!(inspections[0].classified_fields().is_empty());
        assert!(inspections[0].raw_body().unwrap().contains("no such identifier"));
    }

    #[test]
    fn test_outage_is_reported_per_identifier() {
        let registry = InMemoryRegistry::new();
        let down = Identifier::new("doi:10.5072/FK2/DOWN");
        let missing = Identifier::new("doi:10.5072/FK2/MISSING");
        registry.simulate_outage(&down);

        let inspections = inspect(&[down, missing], &registry, Topic::Version);
        assert!(matches!(
            inspections[0].result,
            InspectionResult::TransportFailed { .. }
        ));
        assert!(inspections[0].raw_body().is_none());
        assert!(matches!(inspections[1].result, InspectionResult::Rejected(_)));
    }
}
