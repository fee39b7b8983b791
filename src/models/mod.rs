//! Models module for the SDK
//!
//! Defines the identifier record model: metadata fields, identifiers,
//! relationship triples and the records that carry them.

pub mod field;
pub mod identifier;
pub mod record;
pub mod relationship;

pub use field::{FieldList, MetadataField, RELATED_IDENTIFIER_TYPE_DOI, keys};
pub use identifier::{
    Identifier, IdentifierError, Shoulder, TEST_SHOULDER, from_resolver_url, to_resolver_url,
};
pub use record::IdentifierRecord;
pub use relationship::{RelatedIdentifier, RelationType, related_identifiers};
