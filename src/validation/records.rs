//! Per-record checks: required fields, wire-safe values and well-formed
//! relationship triples

use serde::Serialize;

use crate::models::{Identifier, IdentifierRecord, RELATED_IDENTIFIER_TYPE_DOI, RelationType};

/// Required field absent from a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub identifier: Identifier,
    pub key: &'static str,
}

/// Problem with a record's fields or relationship triples
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum MalformedField {
    /// Value contains a line terminator and would corrupt the wire format
    LineBreak { identifier: Identifier, key: String },
    /// Triple is missing one of its three members
    IncompleteEdge { identifier: Identifier, index: usize },
    /// Edge indices do not run 1, 2, 3, ...
    IndexGap {
        identifier: Identifier,
        expected: usize,
        found: usize,
    },
    /// Related identifier type other than DOI
    UnsupportedIdentifierType {
        identifier: Identifier,
        index: usize,
        found: String,
    },
    UnknownRelationType {
        identifier: Identifier,
        index: usize,
        found: String,
    },
}

/// Check one record on its own
pub fn check_record(record: &IdentifierRecord) -> (Vec<MissingField>, Vec<MalformedField>) {
    let identifier = record.identifier();

    let missing = record
        .missing_required_fields()
        .into_iter()
        .map(|key| MissingField {
            identifier: identifier.clone(),
            key,
        })
        .collect();

    let mut malformed = Vec::new();

    for field in record.fields() {
        if field.has_line_break() {
            malformed.push(MalformedField::LineBreak {
                identifier: identifier.clone(),
                key: field.key.clone(),
            });
        }
    }

    for (position, edge) in record.related_identifiers().into_iter().enumerate() {
        let expected = position + 1;
        if edge.index != expected {
            malformed.push(MalformedField::IndexGap {
                identifier: identifier.clone(),
                expected,
                found: edge.index,
            });
        }
        if !edge.is_complete() {
            malformed.push(MalformedField::IncompleteEdge {
                identifier: identifier.clone(),
                index: edge.index,
            });
            continue;
        }
        if let Some(found) = edge
            .identifier_type
            .as_deref()
            .filter(|kind| *kind != RELATED_IDENTIFIER_TYPE_DOI)
        {
            malformed.push(MalformedField::UnsupportedIdentifierType {
                identifier: identifier.clone(),
                index: edge.index,
                found: found.to_string(),
            });
        }
        if let Some(found) = edge
            .relation_type
            .as_deref()
            .filter(|value| value.parse::<RelationType>().is_err())
        {
            malformed.push(MalformedField::UnknownRelationType {
                identifier: identifier.clone(),
                index: edge.index,
                found: found.to_string(),
            });
        }
    }

    (missing, malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldList;

    fn record(fields: FieldList) -> IdentifierRecord {
        IdentifierRecord::new(Identifier::new("doi:10.5072/FK2/X"), fields)
    }

    #[test]
    fn test_index_gap() {
        let fields = FieldList::new()
            .with("datacite.relatedidentifier.2", "10.5072/FK2/Y")
            .with("datacite.relatedidentifiertype.2", "DOI")
            .with("datacite.relationtype.2", "HasPart");
        let (_, malformed) = check_record(&record(fields));
        assert_eq!(
            malformed,
            vec![MalformedField::IndexGap {
                identifier: Identifier::new("doi:10.5072/FK2/X"),
                expected: 1,
                found: 2,
            }]
        );
    }

    #[test]
    fn test_incomplete_and_unknown() {
        let fields = FieldList::new()
            .with("datacite.relatedidentifier.1", "10.5072/FK2/Y")
            .with("datacite.relatedidentifier.2", "10.5072/FK2/Z")
            .with("datacite.relatedidentifiertype.2", "URL")
            .with("datacite.relationtype.2", "IsCitedBy");
        let (missing, malformed) = check_record(&record(fields));
        assert_eq!(missing.len(), 7);
        assert_eq!(malformed.len(), 3);
        assert!(matches!(
            malformed[0],
            MalformedField::IncompleteEdge { index: 1, .. }
        ));
        assert!(matches!(
            &malformed[1],
            MalformedField::UnsupportedIdentifierType { found, .. } if found == "URL"
        ));
        assert!(matches!(
            &malformed[2],
            MalformedField::UnknownRelationType { found, .. } if found == "IsCitedBy"
        ));
    }

    #[test]
    fn test_line_break() {
        let fields = FieldList::new().with("datacite.title", "two\nlines");
        let (_, malformed) = check_record(&record(fields));
        assert!(matches!(malformed[0], MalformedField::LineBreak { .. }));
    }
}
