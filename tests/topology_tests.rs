//! Topology file loading tests

use std::io::Write;

use doi_registry_sdk::graph::{GraphError, Layout, Topology, TopologyError};
use doi_registry_sdk::models::RelationType;
use tempfile::NamedTempFile;

const CONTAINER: &str = r#"
shoulder = "https://doi.org/10.5072/FK2/"

[common]
creator = "Example Marine Lab"
publisher = "Example Marine Lab"
publication_year = "2025"

[layout]
kind = "container"

[layout.container]
suffix = "OCEAN-RELEASE-2025"
target = "https://example.org/data-releases/ocean-2025"
title = "2025 Coastal Observing System Data Release"

[[layout.parts]]
suffix = "OCEAN-RELEASE-2025-P1"
target = "https://example.org/data-releases/ocean-2025/sst"
title = "Sea Surface Temperature Gridded Product"
version = "2025.1"

[[layout.parts]]
suffix = "OCEAN-RELEASE-2025-P2"
target = "https://example.org/data-releases/ocean-2025/chl"
title = "Chlorophyll-a Concentration"
version = "2025.1"
resource_type = "Image"
"#;

fn write_topology(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn load(content: &str) -> Topology {
    let file = write_topology(content);
    Topology::from_path(file.path()).unwrap()
}

mod loading_tests {
    use super::*;

    #[test]
    fn test_load_container_topology_from_file() {
        let topology = load(CONTAINER);
        assert_eq!(topology.shoulder.as_str(), "doi:10.5072/FK2");
        assert_eq!(topology.common.profile, "datacite");
        assert!(matches!(topology.layout, Layout::Container { ref parts, .. } if parts.len() == 2));

        let records = topology.build().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("datacite.resourcetype"), Some("Collection"));
        assert_eq!(records[1].get("datacite.resourcetype"), Some("Dataset"));
        assert_eq!(records[2].get("datacite.resourcetype"), Some("Image"));
        assert_eq!(records[0].targets_of(RelationType::HasPart).len(), 2);
    }

    #[test]
    fn test_single_topology_uses_default_shoulder() {
        let topology = load(
            r#"
[common]
creator = "Lab"
publisher = "Lab"
publication_year = "2024"

[layout]
kind = "single"

[layout.record]
suffix = "STANDALONE"
target = "https://example.org/standalone"
title = "Standalone dataset"
"#,
        );
        let records = topology.build().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier().as_str(), "doi:10.5072/FK2/STANDALONE");
        assert!(records[0].related_identifiers().is_empty());
        assert!(records[0].missing_required_fields().is_empty());
    }

    #[test]
    fn test_duplicate_suffix_is_rejected() {
        let duplicated = CONTAINER.replace("OCEAN-RELEASE-2025-P2", "OCEAN-RELEASE-2025-P1");
        assert_eq!(
            load(&duplicated).build(),
            Err(GraphError::DuplicateSuffix(
                "OCEAN-RELEASE-2025-P1".to_string()
            ))
        );
    }

    #[test]
    fn test_unknown_layout_kind_fails_to_parse() {
        let broken = CONTAINER.replace("kind = \"container\"", "kind = \"ring\"");
        assert!(Topology::from_toml_str(&broken).is_err());
    }
}

mod from_path_tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Topology::from_path(&path).unwrap_err();
        assert!(matches!(err, TopologyError::Io { ref path, .. } if path.ends_with("absent.toml")));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_topology("[layout]\nkind = \"ring\"\n");
        let err = Topology::from_path(file.path()).unwrap_err();
        assert!(matches!(err, TopologyError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid topology in "));
    }
}
