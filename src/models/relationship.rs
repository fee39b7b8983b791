//! Relationship types and the edge view over numbered relationship fields

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::{FieldList, keys};
use super::identifier::Identifier;

/// DataCite relation types used between identifiers in this system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    HasPart,
    IsPartOf,
    HasVersion,
    IsVersionOf,
    IsPreviousVersionOf,
    IsNewVersionOf,
}

impl RelationType {
    pub const ALL: [RelationType; 6] = [
        RelationType::HasPart,
        RelationType::IsPartOf,
        RelationType::HasVersion,
        RelationType::IsVersionOf,
        RelationType::IsPreviousVersionOf,
        RelationType::IsNewVersionOf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::HasPart => "HasPart",
            RelationType::IsPartOf => "IsPartOf",
            RelationType::HasVersion => "HasVersion",
            RelationType::IsVersionOf => "IsVersionOf",
            RelationType::IsPreviousVersionOf => "IsPreviousVersionOf",
            RelationType::IsNewVersionOf => "IsNewVersionOf",
        }
    }

    /// The relation the target must declare back to the source
    pub fn inverse(&self) -> RelationType {
        match self {
            RelationType::HasPart => RelationType::IsPartOf,
            RelationType::IsPartOf => RelationType::HasPart,
            RelationType::HasVersion => RelationType::IsVersionOf,
            RelationType::IsVersionOf => RelationType::HasVersion,
            RelationType::IsPreviousVersionOf => RelationType::IsNewVersionOf,
            RelationType::IsNewVersionOf => RelationType::IsPreviousVersionOf,
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationType::ALL
            .into_iter()
            .find(|relation| relation.as_str() == s)
            .ok_or_else(|| format!("Unknown relation type: {}", s))
    }
}

/// One relationship triple as read back from a field list
///
/// Members are optional so that incomplete triples can be reported by
/// validation instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedIdentifier {
    pub index: usize,
    /// Related identifier in bare form
    pub identifier: Option<String>,
    pub identifier_type: Option<String>,
    /// Raw relation type value
    pub relation_type: Option<String>,
}

impl RelatedIdentifier {
    fn empty(index: usize) -> Self {
        Self {
            index,
            identifier: None,
            identifier_type: None,
            relation_type: None,
        }
    }

    /// Parsed relation type, if present and known
    pub fn relation(&self) -> Option<RelationType> {
        self.relation_type.as_deref().and_then(|value| value.parse().ok())
    }

    /// Related identifier in registry form
    pub fn target(&self) -> Option<Identifier> {
        self.identifier.as_deref().map(Identifier::from_bare)
    }

    pub fn is_complete(&self) -> bool {
        self.identifier.is_some() && self.identifier_type.is_some() && self.relation_type.is_some()
    }
}

fn numbered_index(key: &str, prefix: &str) -> Option<usize> {
    key.strip_prefix(prefix)?.strip_prefix('.')?.parse().ok()
}

/// Collect relationship triples from a field list, ordered by index
pub fn related_identifiers(fields: &FieldList) -> Vec<RelatedIdentifier> {
    let mut edges: BTreeMap<usize, RelatedIdentifier> = BTreeMap::new();

    for field in fields {
        // `relatedidentifier` is a prefix of `relatedidentifiertype`, so the
        // dotted index parse is what tells them apart
        if let Some(index) = numbered_index(&field.key, keys::RELATED_IDENTIFIER) {
            edges
                .entry(index)
                .or_insert_with(|| RelatedIdentifier::empty(index))
                .identifier = Some(field.value.clone());
        } else if let Some(index) = numbered_index(&field.key, keys::RELATED_IDENTIFIER_TYPE) {
            edges
                .entry(index)
                .or_insert_with(|| RelatedIdentifier::empty(index))
                .identifier_type = Some(field.value.clone());
        } else if let Some(index) = numbered_index(&field.key, keys::RELATION_TYPE) {
            edges
                .entry(index)
                .or_insert_with(|| RelatedIdentifier::empty(index))
                .relation_type = Some(field.value.clone());
        }
    }

    edges.into_values().collect()
}
