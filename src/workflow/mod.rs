//! Registration and inspection workflows
//!
//! Both workflows walk their input strictly in order, one request at a
//! time, and never stop early: each identifier gets its own outcome.

pub mod inspect;
pub mod register;

pub use inspect::{Inspection, InspectionResult, inspect};
pub use register::{Outcome, SubmissionStatus, register};

use serde::Serialize;

use crate::transport::RegistryResponse;

/// Non-2xx answer from the registry, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryRejection {
    pub status: u16,
    pub body: String,
}

impl From<RegistryResponse> for RegistryRejection {
    fn from(response: RegistryResponse) -> Self {
        Self {
            status: response.status,
            body: response.body,
        }
    }
}
