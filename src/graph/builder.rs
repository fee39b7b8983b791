//! Graph builder for container and version-chain topologies
//!
//! Every record gets the descriptive fields in a fixed order
//! (`_profile`, `_target`, creator, title, publisher, publication year,
//! resource type), then an optional `datacite.version`, then its
//! relationship triples numbered from 1.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::GraphError;
use crate::models::{FieldList, Identifier, IdentifierRecord, RelationType, Shoulder, keys};

pub const DEFAULT_PROFILE: &str = "datacite";
pub const DEFAULT_RESOURCE_TYPE: &str = "Dataset";
pub const DEFAULT_CONTAINER_RESOURCE_TYPE: &str = "Collection";

/// Version label carried by the canonical record of a version chain
pub const CANONICAL_VERSION_LABEL: &str = "all";

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

/// Metadata shared by every record in one graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonMetadata {
    #[serde(default = "default_profile")]
    pub profile: String,
    pub creator: String,
    pub publisher: String,
    /// Default publication year for records that do not set their own
    pub publication_year: String,
}

impl CommonMetadata {
    pub fn new(
        creator: impl Into<String>,
        publisher: impl Into<String>,
        publication_year: impl Into<String>,
    ) -> Self {
        Self {
            profile: default_profile(),
            creator: creator.into(),
            publisher: publisher.into(),
            publication_year: publication_year.into(),
        }
    }
}

/// A standalone identifier with no relationships
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSpec {
    pub suffix: String,
    pub target: String,
    pub title: String,
    #[serde(default)]
    pub publication_year: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// The container record of a container graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub suffix: String,
    pub target: String,
    pub title: String,
    #[serde(default)]
    pub publication_year: Option<String>,
    /// Defaults to `Collection`
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// One part of a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSpec {
    pub suffix: String,
    pub target: String,
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub publication_year: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// The canonical "all versions" record of a version chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSpec {
    pub suffix: String,
    pub target: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// One version in a version chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    pub suffix: String,
    pub target: String,
    pub title: String,
    pub year: String,
    pub version_label: String,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// Builds identifier records under one shoulder with shared metadata
///
/// Building is pure: no I/O, and the same input always yields the same
/// records in the same order.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    shoulder: Shoulder,
    common: CommonMetadata,
}

impl GraphBuilder {
    pub fn new(shoulder: Shoulder, common: CommonMetadata) -> Self {
        Self { shoulder, common }
    }

    pub fn shoulder(&self) -> &Shoulder {
        &self.shoulder
    }

    pub fn common(&self) -> &CommonMetadata {
        &self.common
    }

    fn descriptive_fields(
        &self,
        target: &str,
        title: &str,
        year: Option<&str>,
        resource_type: &str,
    ) -> FieldList {
        FieldList::new()
            .with(keys::PROFILE, self.common.profile.as_str())
            .with(keys::TARGET, target)
            .with(keys::CREATOR, self.common.creator.as_str())
            .with(keys::TITLE, title)
            .with(keys::PUBLISHER, self.common.publisher.as_str())
            .with(
                keys::PUBLICATION_YEAR,
                year.unwrap_or(self.common.publication_year.as_str()),
            )
            .with(keys::RESOURCE_TYPE, resource_type)
    }

    /// Build a single record with no relationships
    pub fn build_single(&self, spec: &SingleSpec) -> Result<IdentifierRecord, GraphError> {
        check_suffixes(&spec.suffix, std::iter::empty())?;

        let mut fields = self.descriptive_fields(
            &spec.target,
            &spec.title,
            spec.publication_year.as_deref(),
            spec.resource_type.as_deref().unwrap_or(DEFAULT_RESOURCE_TYPE),
        );
        if let Some(version) = &spec.version {
            fields.push(keys::VERSION, version.as_str());
        }

        finish(self.shoulder.mint(&spec.suffix), fields)
    }

    /// Build a container record plus one record per part
    ///
    /// The container carries `HasPart` edge i for part i and no
    /// `datacite.version`. Each part carries its version and a single
    /// `IsPartOf` edge at index 1.
    pub fn build_container_graph(
        &self,
        container: &ContainerSpec,
        parts: &[PartSpec],
    ) -> Result<Vec<IdentifierRecord>, GraphError> {
        if parts.is_empty() {
            return Err(GraphError::NoParts(container.suffix.clone()));
        }
        check_suffixes(&container.suffix, parts.iter().map(|p| p.suffix.as_str()))?;

        let container_id = self.shoulder.mint(&container.suffix);
        let part_ids: Vec<Identifier> = parts
            .iter()
            .map(|part| self.shoulder.mint(&part.suffix))
            .collect();

        let mut fields = self.descriptive_fields(
            &container.target,
            &container.title,
            container.publication_year.as_deref(),
            container
                .resource_type
                .as_deref()
                .unwrap_or(DEFAULT_CONTAINER_RESOURCE_TYPE),
        );
        for (position, part_id) in part_ids.iter().enumerate() {
            fields.push_relation(position + 1, part_id, RelationType::HasPart);
        }

        let mut records = Vec::with_capacity(parts.len() + 1);
        records.push(finish(container_id.clone(), fields)?);

        for (part, part_id) in parts.iter().zip(part_ids) {
            let mut fields = self.descriptive_fields(
                &part.target,
                &part.title,
                part.publication_year.as_deref(),
                part.resource_type.as_deref().unwrap_or(DEFAULT_RESOURCE_TYPE),
            );
            fields.push(keys::VERSION, part.version.as_str());
            fields.push_relation(1, &container_id, RelationType::IsPartOf);
            records.push(finish(part_id, fields)?);
        }

        debug!(
            "Built container graph for {} with {} part(s)",
            container_id,
            parts.len()
        );
        Ok(records)
    }

    /// Build a canonical record plus one record per version
    ///
    /// The canonical record has `datacite.version = all` and `HasVersion`
    /// edge i for version i. Version records number their edges from 1:
    /// `IsVersionOf` the canonical record, then `IsPreviousVersionOf` the
    /// predecessor when there is one, then `IsNewVersionOf` the successor
    /// when there is one.
    pub fn build_version_chain(
        &self,
        canonical: &CanonicalSpec,
        versions: &[VersionSpec],
    ) -> Result<Vec<IdentifierRecord>, GraphError> {
        if versions.is_empty() {
            return Err(GraphError::NoVersions(canonical.suffix.clone()));
        }
        check_suffixes(
            &canonical.suffix,
            versions.iter().map(|v| v.suffix.as_str()),
        )?;

        let canonical_id = self.shoulder.mint(&canonical.suffix);
        let version_ids: Vec<Identifier> = versions
            .iter()
            .map(|version| self.shoulder.mint(&version.suffix))
            .collect();

        let mut fields = self.descriptive_fields(
            &canonical.target,
            &canonical.title,
            canonical.year.as_deref(),
            canonical
                .resource_type
                .as_deref()
                .unwrap_or(DEFAULT_RESOURCE_TYPE),
        );
        fields.push(keys::VERSION, CANONICAL_VERSION_LABEL);
        for (position, version_id) in version_ids.iter().enumerate() {
            fields.push_relation(position + 1, version_id, RelationType::HasVersion);
        }

        let mut records = Vec::with_capacity(versions.len() + 1);
        records.push(finish(canonical_id.clone(), fields)?);

        for (position, version) in versions.iter().enumerate() {
            let mut fields = self.descriptive_fields(
                &version.target,
                &version.title,
                Some(version.year.as_str()),
                version.resource_type.as_deref().unwrap_or(DEFAULT_RESOURCE_TYPE),
            );
            fields.push(keys::VERSION, version.version_label.as_str());

            let mut index = 1;
            fields.push_relation(index, &canonical_id, RelationType::IsVersionOf);
            if let Some(predecessor) = position.checked_sub(1).map(|p| &version_ids[p]) {
                index += 1;
                fields.push_relation(index, predecessor, RelationType::IsPreviousVersionOf);
            }
            if let Some(successor) = version_ids.get(position + 1) {
                index += 1;
                fields.push_relation(index, successor, RelationType::IsNewVersionOf);
            }

            records.push(finish(version_ids[position].clone(), fields)?);
        }

        debug!(
            "Built version chain for {} with {} version(s)",
            canonical_id,
            versions.len()
        );
        Ok(records)
    }
}

/// Reject empty, duplicate and URL-breaking suffixes across one graph
fn check_suffixes<'a>(
    root: &'a str,
    children: impl Iterator<Item = &'a str>,
) -> Result<(), GraphError> {
    let mut seen = HashSet::new();
    for suffix in std::iter::once(root).chain(children) {
        if suffix.trim().is_empty() {
            return Err(GraphError::EmptySuffix);
        }
        if suffix
            .chars()
            .any(|c| c == '#' || c == '?' || c.is_whitespace() || c.is_control())
        {
            return Err(GraphError::InvalidSuffix(suffix.to_string()));
        }
        if !seen.insert(suffix) {
            return Err(GraphError::DuplicateSuffix(suffix.to_string()));
        }
    }
    Ok(())
}

fn finish(identifier: Identifier, fields: FieldList) -> Result<IdentifierRecord, GraphError> {
    if let Some(field) = fields.iter().find(|field| field.has_line_break()) {
        return Err(GraphError::LineBreakInValue {
            identifier: identifier.to_string(),
            key: field.key.clone(),
        });
    }
    Ok(IdentifierRecord::new(identifier, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> GraphBuilder {
        GraphBuilder::new(
            Shoulder::default(),
            CommonMetadata::new("Example Marine Lab", "Example Marine Lab", "2025"),
        )
    }

    fn part(suffix: &str) -> PartSpec {
        PartSpec {
            suffix: suffix.to_string(),
            target: format!("https://example.org/{}", suffix.to_lowercase()),
            title: format!("Product {}", suffix),
            version: "2025.1".to_string(),
            publication_year: None,
            resource_type: None,
        }
    }

    fn container(suffix: &str) -> ContainerSpec {
        ContainerSpec {
            suffix: suffix.to_string(),
            target: "https://example.org/data-releases/ocean-2025".to_string(),
            title: "2025 Coastal Observing System Data Release".to_string(),
            publication_year: None,
            resource_type: None,
        }
    }

    #[test]
    fn test_container_field_order() {
        let records = builder()
            .build_container_graph(&container("REL"), &[part("REL-P1")])
            .unwrap();
        let order: Vec<&str> = records[0].fields().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "_profile",
                "_target",
                "datacite.creator",
                "datacite.title",
                "datacite.publisher",
                "datacite.publicationyear",
                "datacite.resourcetype",
                "datacite.relatedidentifier.1",
                "datacite.relatedidentifiertype.1",
                "datacite.relationtype.1",
            ]
        );
        assert_eq!(records[0].get(keys::RESOURCE_TYPE), Some("Collection"));
        assert_eq!(records[1].get(keys::RESOURCE_TYPE), Some("Dataset"));
        assert_eq!(records[1].get(keys::VERSION), Some("2025.1"));
    }

    #[test]
    fn test_container_requires_parts() {
        let err = builder()
            .build_container_graph(&container("REL"), &[])
            .unwrap_err();
        assert_eq!(err, GraphError::NoParts("REL".to_string()));
    }

    #[test]
    fn test_duplicate_suffix_rejected() {
        let err = builder()
            .build_container_graph(&container("REL"), &[part("P"), part("P")])
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateSuffix("P".to_string()));

        let err = builder()
            .build_container_graph(&container("REL"), &[part("REL")])
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateSuffix("REL".to_string()));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let err = builder()
            .build_container_graph(&container(" "), &[part("P1")])
            .unwrap_err();
        assert_eq!(err, GraphError::EmptySuffix);
    }

    #[test]
    fn test_suffix_with_url_delimiters_rejected() {
        for suffix in ["A#B?x=1", "A?B", "TWO WORDS", "TAB\tBED", "LINE\nBREAK"] {
            let err = builder()
                .build_container_graph(&container("REL"), &[part(suffix)])
                .unwrap_err();
            assert_eq!(err, GraphError::InvalidSuffix(suffix.to_string()));
        }

        let err = builder()
            .build_single(&SingleSpec {
                suffix: "A#B".to_string(),
                target: "https://example.org/a".to_string(),
                title: "A".to_string(),
                publication_year: None,
                resource_type: None,
                version: None,
            })
            .unwrap_err();
        assert_eq!(err, GraphError::InvalidSuffix("A#B".to_string()));
    }

    #[test]
    fn test_line_break_rejected() {
        let mut broken = part("P1");
        broken.title = "Line one\nLine two".to_string();
        let err = builder()
            .build_container_graph(&container("REL"), &[broken])
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::LineBreakInValue {
                identifier: "doi:10.5072/FK2/P1".to_string(),
                key: "datacite.title".to_string(),
            }
        );
    }

    #[test]
    fn test_single_record() {
        let record = builder()
            .build_single(&SingleSpec {
                suffix: "TESTDOI123".to_string(),
                target: "https://example.org".to_string(),
                title: "Test DOI".to_string(),
                publication_year: Some("2024".to_string()),
                resource_type: Some("Other".to_string()),
                version: None,
            })
            .unwrap();
        assert_eq!(record.identifier().as_str(), "doi:10.5072/FK2/TESTDOI123");
        assert_eq!(record.get(keys::PUBLICATION_YEAR), Some("2024"));
        assert_eq!(record.get(keys::RESOURCE_TYPE), Some("Other"));
        assert!(record.related_identifiers().is_empty());
        assert!(record.missing_required_fields().is_empty());
    }

    #[test]
    fn test_single_version_chain_has_no_adjacency() {
        let records = builder()
            .build_version_chain(
                &CanonicalSpec {
                    suffix: "WORK-ALL".to_string(),
                    target: "https://example.org/work-all".to_string(),
                    title: "Work (all versions)".to_string(),
                    year: None,
                    resource_type: None,
                },
                &[VersionSpec {
                    suffix: "WORK-V1".to_string(),
                    target: "https://example.org/work-v1".to_string(),
                    title: "Work (version 1.0)".to_string(),
                    year: "2024".to_string(),
                    version_label: "1.0".to_string(),
                    resource_type: None,
                }],
            )
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(keys::VERSION), Some("all"));
        assert_eq!(records[0].get(keys::PUBLICATION_YEAR), Some("2025"));
        assert_eq!(records[1].related_identifiers().len(), 1);
        assert_eq!(records[1].get(keys::PUBLICATION_YEAR), Some("2024"));
    }
}
