//! Validation functionality
//!
//! Provides advisory checks for identifier record sets:
//! - Record checks (required fields, line breaks, relationship triples)
//! - Relationship checks (dangling references, missing inverse relations)
//!
//! The registry remains the authority that rejects bad records; these
//! checks only report.

pub mod records;
pub mod relationships;

pub use records::{MalformedField, MissingField, check_record};
pub use relationships::{
    DanglingEdge, GraphValidationResult, MissingInverse, RelationshipValidator,
};

use crate::models::IdentifierRecord;

/// Validate a record set with the default validator
pub fn validate_graph(records: &[IdentifierRecord]) -> GraphValidationResult {
    RelationshipValidator::new().validate(records)
}
