//! Relationship validation functionality
//!
//! Validates a set of identifier records as a graph: every edge must point
//! at a record in the set, and every edge must be answered by the inverse
//! relation from its target.
//!
//! Uses petgraph to hold the records as nodes and the declared relations
//! as directed, labelled edges.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::{Directed, Graph};
use serde::Serialize;
use tracing::warn;

use super::records::{MalformedField, MissingField, check_record};
use crate::models::{Identifier, IdentifierRecord, RelationType};

/// Result of graph validation
#[derive(Debug, Default, Serialize)]
pub struct GraphValidationResult {
    /// Required fields absent from a record
    pub missing_fields: Vec<MissingField>,
    /// Line breaks and broken relationship triples
    pub malformed_fields: Vec<MalformedField>,
    /// Edges whose target is not part of the record set
    pub dangling_edges: Vec<DanglingEdge>,
    /// Edges the target does not answer with the inverse relation
    pub missing_inverses: Vec<MissingInverse>,
}

impl GraphValidationResult {
    pub fn is_valid(&self) -> bool {
        self.missing_fields.is_empty()
            && self.malformed_fields.is_empty()
            && self.dangling_edges.is_empty()
            && self.missing_inverses.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.missing_fields.len()
            + self.malformed_fields.len()
            + self.dangling_edges.len()
            + self.missing_inverses.len()
    }
}

/// Edge pointing outside the record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingEdge {
    pub source: Identifier,
    pub index: usize,
    pub target: Identifier,
    pub relation: RelationType,
}

/// Edge without its reciprocal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingInverse {
    pub source: Identifier,
    pub target: Identifier,
    pub relation: RelationType,
    /// Relation the target should declare back to the source
    pub expected: RelationType,
}

/// Relationship validator
#[derive(Debug, Default)]
pub struct RelationshipValidator;

impl RelationshipValidator {
    /// Create a new relationship validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a complete record set
    pub fn validate(&self, records: &[IdentifierRecord]) -> GraphValidationResult {
        let mut result = GraphValidationResult::default();

        for record in records {
            let (missing, malformed) = check_record(record);
            result.missing_fields.extend(missing);
            result.malformed_fields.extend(malformed);
        }

        let (graph, dangling) = self.build_graph(records);
        result.dangling_edges = dangling;
        result.missing_inverses = self.find_missing_inverses(&graph);

        if !result.is_valid() {
            warn!(
                "Relationship graph of {} record(s) has {} issue(s)",
                records.len(),
                result.issue_count()
            );
        }
        result
    }

    /// Build the relation graph, returning edges whose target is unknown
    ///
    /// Edges with an unparseable relation type are left out here; they are
    /// reported as malformed by the per-record check.
    fn build_graph(
        &self,
        records: &[IdentifierRecord],
    ) -> (Graph<Identifier, RelationType, Directed>, Vec<DanglingEdge>) {
        let mut graph = Graph::<Identifier, RelationType, Directed>::new();
        let mut node_map: HashMap<Identifier, NodeIndex> = HashMap::new();

        for record in records {
            let identifier = record.identifier().clone();
            node_map
                .entry(identifier.clone())
                .or_insert_with(|| graph.add_node(identifier));
        }

        let mut dangling = Vec::new();
        for record in records {
            let source = node_map[record.identifier()];
            for edge in record.related_identifiers() {
                let (Some(target), Some(relation)) = (edge.target(), edge.relation()) else {
                    continue;
                };
                match node_map.get(&target) {
                    Some(&target_node) => {
                        graph.add_edge(source, target_node, relation);
                    }
                    None => dangling.push(DanglingEdge {
                        source: record.identifier().clone(),
                        index: edge.index,
                        target,
                        relation,
                    }),
                }
            }
        }

        (graph, dangling)
    }

    fn find_missing_inverses(
        &self,
        graph: &Graph<Identifier, RelationType, Directed>,
    ) -> Vec<MissingInverse> {
        let mut missing = Vec::new();

        for edge in graph.raw_edges() {
            let (source, target) = (edge.source(), edge.target());
            let expected = edge.weight.inverse();
            let answered = graph
                .edges_connecting(target, source)
                .any(|back| *back.weight() == expected);
            if !answered {
                missing.push(MissingInverse {
                    source: graph[source].clone(),
                    target: graph[target].clone(),
                    relation: edge.weight,
                    expected,
                });
            }
        }

        missing
    }
}
