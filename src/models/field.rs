//! Metadata fields and the ordered field list carried by every identifier record

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;
use super::relationship::RelationType;

/// Well-known metadata keys used by the registry's DataCite profile
pub mod keys {
    pub const PROFILE: &str = "_profile";
    pub const TARGET: &str = "_target";
    pub const CREATOR: &str = "datacite.creator";
    pub const TITLE: &str = "datacite.title";
    pub const PUBLISHER: &str = "datacite.publisher";
    pub const PUBLICATION_YEAR: &str = "datacite.publicationyear";
    pub const RESOURCE_TYPE: &str = "datacite.resourcetype";
    pub const VERSION: &str = "datacite.version";

    pub const RELATED_IDENTIFIER: &str = "datacite.relatedidentifier";
    pub const RELATED_IDENTIFIER_TYPE: &str = "datacite.relatedidentifiertype";
    pub const RELATION_TYPE: &str = "datacite.relationtype";

    /// Fields the registry requires on every record
    pub const REQUIRED: [&str; 7] = [
        PROFILE,
        TARGET,
        CREATOR,
        TITLE,
        PUBLISHER,
        PUBLICATION_YEAR,
        RESOURCE_TYPE,
    ];

    /// `datacite.relatedidentifier.<index>`
    pub fn related_identifier(index: usize) -> String {
        format!("{}.{}", RELATED_IDENTIFIER, index)
    }

    /// `datacite.relatedidentifiertype.<index>`
    pub fn related_identifier_type(index: usize) -> String {
        format!("{}.{}", RELATED_IDENTIFIER_TYPE, index)
    }

    /// `datacite.relationtype.<index>`
    pub fn relation_type(index: usize) -> String {
        format!("{}.{}", RELATION_TYPE, index)
    }
}

/// Identifier type written into every relationship triple
pub const RELATED_IDENTIFIER_TYPE_DOI: &str = "DOI";

/// A single `key: value` metadata pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    pub key: String,
    pub value: String,
}

impl MetadataField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the value would break the one-field-per-line wire format
    pub fn has_line_break(&self) -> bool {
        self.value.contains(['\n', '\r'])
    }
}

/// Ordered sequence of metadata fields
///
/// Order is preserved exactly as pushed. It determines the wire output of
/// the ANVL encoder and keeps numbered relationship triples together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList(Vec<MetadataField>);

impl FieldList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a field
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(MetadataField::new(key, value));
    }

    /// Append a field, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append one relationship triple at `index` pointing at `target`
    ///
    /// The related identifier is written in its bare form (no `doi:` scheme).
    pub fn push_relation(&mut self, index: usize, target: &Identifier, relation: RelationType) {
        self.push(keys::related_identifier(index), target.bare());
        self.push(
            keys::related_identifier_type(index),
            RELATED_IDENTIFIER_TYPE_DOI,
        );
        self.push(keys::relation_type(index), relation.as_str());
    }

    /// Value of the last field with the given key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|field| field.key == key)
    }

    pub fn into_inner(self) -> Vec<MetadataField> {
        self.0
    }
}

impl Deref for FieldList {
    type Target = [MetadataField];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<MetadataField>> for FieldList {
    fn from(fields: Vec<MetadataField>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| MetadataField::new(key, value))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a MetadataField;
    type IntoIter = std::slice::Iter<'a, MetadataField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
