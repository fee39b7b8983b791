//! Error types for the CLI

use std::path::PathBuf;

use doi_registry_sdk::config::ConfigError;
use doi_registry_sdk::graph::GraphError;
use doi_registry_sdk::models::IdentifierError;
use doi_registry_sdk::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid topology in {0}: {1}")]
    TopologyParseError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error("Failed to serialize output: {0}")]
    SerializationError(String),

    #[error("{failed} of {total} registration(s) failed")]
    RegistrationFailed { failed: usize, total: usize },

    #[error("{failed} of {total} lookup(s) failed")]
    InspectionFailed { failed: usize, total: usize },

    #[error("Validation found {0} issue(s)")]
    ValidationFailed(usize),
}
