//! Relationship graph construction
//!
//! Builds consistent sets of cross-referencing identifier records from a
//! small declarative topology:
//! - a container record with N part records pointing back to it
//! - a canonical "all versions" record with a linear chain of versions
//! - a standalone record with no relationships

pub mod builder;
pub mod topology;

pub use builder::{
    CanonicalSpec, CommonMetadata, ContainerSpec, GraphBuilder, PartSpec, SingleSpec, VersionSpec,
};
pub use topology::{Layout, Topology};

use std::path::PathBuf;

/// Error for topology input that cannot produce a consistent graph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Container '{0}' declares no parts")]
    NoParts(String),
    #[error("Canonical record '{0}' declares no versions")]
    NoVersions(String),
    #[error("Identifier suffix cannot be empty")]
    EmptySuffix,
    #[error("Identifier suffix '{0}' contains '#', '?', whitespace or a control character")]
    InvalidSuffix(String),
    #[error("Duplicate identifier suffix: {0}")]
    DuplicateSuffix(String),
    #[error("Value of '{key}' for {identifier} contains a line break")]
    LineBreakInValue { identifier: String, key: String },
}

/// Error loading a topology file
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid topology in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
