//! Registration workflow: upsert each record through the transport

use serde::Serialize;
use tracing::{info, warn};

use super::RegistryRejection;
use crate::models::{Identifier, IdentifierRecord};
use crate::transport::RegistryTransport;

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// 2xx from the registry
    Accepted { status: u16, body: String },
    /// Non-2xx from the registry
    Rejected(RegistryRejection),
    /// The request never completed
    TransportFailed { error: String },
}

/// Per-record result of [`register`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub identifier: Identifier,
    pub status: SubmissionStatus,
}

impl Outcome {
    /// HTTP status, absent when the request never completed
    pub fn http_status(&self) -> Option<u16> {
        match &self.status {
            SubmissionStatus::Accepted { status, .. } => Some(*status),
            SubmissionStatus::Rejected(rejection) => Some(rejection.status),
            SubmissionStatus::TransportFailed { .. } => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, SubmissionStatus::Accepted { .. })
    }
}

/// Register every record in order
///
/// Each record is encoded and PUT on its own. A failed record is reported
/// and the next one is still attempted; there is no cross-record
/// atomicity. Submitting the same records again yields equivalent outcomes
/// since the registry treats PUT as an upsert.
pub fn register<T>(records: &[IdentifierRecord], transport: &T) -> Vec<Outcome>
where
    T: RegistryTransport + ?Sized,
{
    records
        .iter()
        .map(|record| submit(record, transport))
        .collect()
}

fn submit<T>(record: &IdentifierRecord, transport: &T) -> Outcome
where
    T: RegistryTransport + ?Sized,
{
    let identifier = record.identifier().clone();
    let body = record.encode();

    let status = match transport.put(&identifier, &body) {
        Ok(response) if response.is_success() => {
            info!(
                "Registered {} (status {}), resolve at {}",
                identifier,
                response.status,
                identifier.resolver_url()
            );
            SubmissionStatus::Accepted {
                status: response.status,
                body: response.body,
            }
        }
        Ok(response) => {
            warn!(
                "Registry rejected {} with status {}: {}",
                identifier,
                response.status,
                response.body.trim()
            );
            SubmissionStatus::Rejected(response.into())
        }
        Err(e) => {
            warn!("Failed to submit {}: {}", identifier, e);
            SubmissionStatus::TransportFailed {
                error: e.to_string(),
            }
        }
    };

    Outcome { identifier, status }
}
