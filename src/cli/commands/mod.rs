//! CLI command implementations

pub mod check;
pub mod inspect;
pub mod register;
pub mod resolve;

use std::path::Path;

use serde::Serialize;

use crate::error::CliError;
use doi_registry_sdk::config::RegistryConfig;
use doi_registry_sdk::graph::{Topology, TopologyError};
use doi_registry_sdk::transport::EzidTransport;

/// Connection overrides shared by the networked commands
pub struct ConnectionArgs {
    pub base_url: Option<String>,
    pub timeout: Option<u64>,
}

/// Read and parse a topology file
pub(crate) fn load_topology(path: &Path) -> Result<Topology, CliError> {
    Topology::from_path(path).map_err(|e| match e {
        TopologyError::Io { path, source } => CliError::FileReadError(path, source.to_string()),
        TopologyError::Parse { path, source } => {
            CliError::TopologyParseError(path, source.to_string())
        }
    })
}

/// Build the EZID transport from the environment plus any overrides
pub(crate) fn connect(args: &ConnectionArgs) -> Result<EzidTransport, CliError> {
    let mut config = RegistryConfig::from_env()?;
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }
    Ok(EzidTransport::new(config)?)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::SerializationError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
