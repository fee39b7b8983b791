//! Identifier and shoulder types
//!
//! An identifier has two string forms related by a lossless transform:
//! - registry form: `doi:10.5072/FK2/X`
//! - resolver URL: `https://doi.org/10.5072/FK2/X`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scheme prefix of the registry form
pub const DOI_SCHEME: &str = "doi:";

/// Resolver host prepended to the bare identifier
pub const RESOLVER_BASE: &str = "https://doi.org/";

/// Test shoulder accepted by the registry for throwaway identifiers
pub const TEST_SHOULDER: &str = "doi:10.5072/FK2";

/// Convert an identifier to its resolver URL
///
/// Strips the `doi:` scheme when present; bare identifiers pass through
/// unchanged before the resolver host is prepended.
pub fn to_resolver_url(identifier: &str) -> String {
    let bare = identifier.strip_prefix(DOI_SCHEME).unwrap_or(identifier);
    format!("{}{}", RESOLVER_BASE, bare)
}

/// Convert a resolver URL back to the registry form
///
/// Input that is already in registry form is returned as is; bare
/// identifiers gain the `doi:` scheme.
pub fn from_resolver_url(url: &str) -> String {
    if url.starts_with(DOI_SCHEME) {
        return url.to_string();
    }
    let bare = url.strip_prefix(RESOLVER_BASE).unwrap_or(url);
    format!("{}{}", DOI_SCHEME, bare)
}

/// Error parsing an identifier string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("Identifier is empty")]
    Empty,
    #[error("Identifier '{0}' must have the form <prefix>/<suffix>")]
    MissingSuffix(String),
}

/// A registry identifier, stored in registry form (`doi:<prefix>/<suffix>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap an identifier string without validation
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// Build an identifier from its bare form (`10.5072/FK2/X`)
    pub fn from_bare(bare: &str) -> Self {
        Self(format!("{}{}", DOI_SCHEME, bare))
    }

    /// Parse any accepted form: registry, resolver URL or bare
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(IdentifierError::Empty);
        }
        let identifier = Self(from_resolver_url(input));
        match identifier.bare().split_once('/') {
            Some((prefix, suffix)) if !prefix.is_empty() && !suffix.is_empty() => Ok(identifier),
            _ => Err(IdentifierError::MissingSuffix(input.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier without the `doi:` scheme, as written in relationship fields
    pub fn bare(&self) -> &str {
        self.0.strip_prefix(DOI_SCHEME).unwrap_or(&self.0)
    }

    pub fn resolver_url(&self) -> String {
        to_resolver_url(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Registry namespace under which identifiers are minted
///
/// Always held in registry form without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Shoulder(String);

impl Shoulder {
    pub fn new(shoulder: impl Into<String>) -> Self {
        let shoulder: String = shoulder.into();
        let trimmed = shoulder.trim().trim_end_matches('/');
        Self(from_resolver_url(trimmed))
    }

    /// Identifier `<shoulder>/<suffix>`
    pub fn mint(&self, suffix: &str) -> Identifier {
        Identifier(format!("{}/{}", self.0, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Shoulder {
    fn default() -> Self {
        Self(TEST_SHOULDER.to_string())
    }
}

impl From<String> for Shoulder {
    fn from(shoulder: String) -> Self {
        Self::new(shoulder)
    }
}

impl From<Shoulder> for String {
    fn from(shoulder: Shoulder) -> Self {
        shoulder.0
    }
}

impl fmt::Display for Shoulder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
