//! DOI Registry SDK - Build, register and inspect related DOI records
//!
//! Provides unified interfaces for:
//! - ANVL encoding/decoding of registry metadata
//! - Identifier record model and relationship edges
//! - Relationship graph construction (containers and version chains)
//! - Registration and inspection workflows over a registry transport
//! - Advisory graph validation

pub mod anvl;
pub mod classify;
pub mod config;
pub mod graph;
pub mod models;
pub mod output;
pub mod transport;
pub mod validation;
pub mod workflow;

// Re-export commonly used types
pub use anvl::{Metadata, decode, encode};
pub use classify::{Topic, classify};
pub use config::{ConfigError, RegistryConfig};
pub use graph::{GraphBuilder, GraphError, Topology, TopologyError};
pub use models::{
    FieldList, Identifier, IdentifierRecord, MetadataField, RelatedIdentifier, RelationType,
    Shoulder,
};
#[cfg(feature = "ezid-backend")]
pub use transport::EzidTransport;
pub use transport::{InMemoryRegistry, RegistryResponse, RegistryTransport, TransportError};
pub use validation::{GraphValidationResult, RelationshipValidator, validate_graph};
pub use workflow::{Inspection, Outcome, RegistryRejection, inspect, register};
