//! Relationship field classifier
//!
//! Picks the fields of a decoded record that express relationships or
//! version lineage, for display and verification after registration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::anvl::Metadata;
use crate::models::keys;

/// Which family of fields to select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Container/part relationships and landing targets
    Container,
    /// Version labels and version relationships
    Version,
}

const CONTAINER_PREFIXES: [&str; 4] = [
    keys::TARGET,
    keys::RELATED_IDENTIFIER,
    keys::RELATED_IDENTIFIER_TYPE,
    keys::RELATION_TYPE,
];

const VERSION_PREFIXES: [&str; 4] = [
    keys::VERSION,
    keys::RELATED_IDENTIFIER,
    keys::RELATED_IDENTIFIER_TYPE,
    keys::RELATION_TYPE,
];

impl Topic {
    /// Key prefixes selected for this topic
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Topic::Container => &CONTAINER_PREFIXES,
            Topic::Version => &VERSION_PREFIXES,
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        self.prefixes().iter().any(|prefix| key.starts_with(prefix))
    }

    /// Heading used when rendering classified fields
    pub fn heading(&self) -> &'static str {
        match self {
            Topic::Container => "Relationship fields",
            Topic::Version => "Version-related fields",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Container => f.write_str("container"),
            Topic::Version => f.write_str("version"),
        }
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "container" => Ok(Topic::Container),
            "version" => Ok(Topic::Version),
            _ => Err(format!(
                "Unknown topic: {} (expected 'container' or 'version')",
                s
            )),
        }
    }
}

/// Select the fields matching `topic`, ordered by key
///
/// Ordering is plain lexicographic on the full key, so
/// `datacite.relationtype.10` sorts before `datacite.relationtype.2`.
pub fn classify(metadata: &Metadata, topic: Topic) -> Vec<(String, String)> {
    metadata
        .iter()
        .filter(|(key, _)| topic.matches(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
