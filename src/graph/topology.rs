//! Declarative topology descriptions, loadable from TOML
//!
//! ```toml
//! shoulder = "doi:10.5072/FK2"
//!
//! [common]
//! creator = "Example Marine Lab"
//! publisher = "Example Marine Lab"
//! publication_year = "2025"
//!
//! [layout]
//! kind = "container"
//!
//! [layout.container]
//! suffix = "OCEAN-RELEASE-2025"
//! target = "https://example.org/data-releases/ocean-2025"
//! title = "2025 Coastal Observing System Data Release"
//!
//! [[layout.parts]]
//! suffix = "OCEAN-RELEASE-2025-P1"
//! target = "https://example.org/data-releases/ocean-2025/sea-surface-temp"
//! title = "Sea Surface Temperature Gridded Product (2025 Release)"
//! version = "2025.1"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{GraphError, TopologyError};
use super::builder::{
    CanonicalSpec, CommonMetadata, ContainerSpec, GraphBuilder, PartSpec, SingleSpec, VersionSpec,
};
use crate::models::{IdentifierRecord, Shoulder};

/// Shape of the graph to build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    Single {
        record: SingleSpec,
    },
    Container {
        container: ContainerSpec,
        parts: Vec<PartSpec>,
    },
    VersionChain {
        canonical: CanonicalSpec,
        versions: Vec<VersionSpec>,
    },
}

/// A complete graph description: shoulder, shared metadata and layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub shoulder: Shoulder,
    pub common: CommonMetadata,
    pub layout: Layout,
}

impl Topology {
    /// Parse a topology from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Read and parse a topology file
    pub fn from_path(path: &Path) -> Result<Self, TopologyError> {
        let content = std::fs::read_to_string(path).map_err(|source| TopologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let topology = Self::from_toml_str(&content).map_err(|source| TopologyError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded topology from {}", path.display());
        Ok(topology)
    }

    pub fn builder(&self) -> GraphBuilder {
        GraphBuilder::new(self.shoulder.clone(), self.common.clone())
    }

    /// Build every record of the described graph, root record first
    pub fn build(&self) -> Result<Vec<IdentifierRecord>, GraphError> {
        let builder = self.builder();
        match &self.layout {
            Layout::Single { record } => Ok(vec![builder.build_single(record)?]),
            Layout::Container { container, parts } => {
                builder.build_container_graph(container, parts)
            }
            Layout::VersionChain {
                canonical,
                versions,
            } => builder.build_version_chain(canonical, versions),
        }
    }
}
