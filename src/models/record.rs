//! Identifier record: an identifier plus its ordered metadata

use serde::Serialize;

use super::field::{FieldList, keys};
use super::identifier::Identifier;
use super::relationship::{RelatedIdentifier, RelationType, related_identifiers};
use crate::anvl;

/// One identifier's full metadata set, including its relationship triples
///
/// Records are immutable once built; the registration workflow consumes
/// them as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierRecord {
    identifier: Identifier,
    fields: FieldList,
}

impl IdentifierRecord {
    pub fn new(identifier: Identifier, fields: FieldList) -> Self {
        Self { identifier, fields }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    /// ANVL wire body for this record
    pub fn encode(&self) -> Vec<u8> {
        anvl::encode(&self.fields)
    }

    /// Relationship triples in index order
    pub fn related_identifiers(&self) -> Vec<RelatedIdentifier> {
        related_identifiers(&self.fields)
    }

    /// Targets of every edge with the given relation type, in index order
    pub fn targets_of(&self, relation: RelationType) -> Vec<Identifier> {
        self.related_identifiers()
            .iter()
            .filter(|edge| edge.relation() == Some(relation))
            .filter_map(RelatedIdentifier::target)
            .collect()
    }

    /// Required registry fields this record lacks
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        keys::REQUIRED
            .into_iter()
            .filter(|key| !self.fields.contains_key(key))
            .collect()
    }
}
