//! Output formatting for registration and inspection results

use crate::anvl;
use crate::classify::Topic;
use crate::models::IdentifierRecord;
use crate::validation::GraphValidationResult;
use crate::workflow::{Inspection, InspectionResult, Outcome, SubmissionStatus};

/// Preview of what will be submitted for a record
pub fn format_record_preview(record: &IdentifierRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\nDOI landing page: {}\n",
        record.identifier().resolver_url()
    ));
    output.push_str(&format!("Identifier: {}\n", record.identifier()));
    output.push_str(&anvl::encode_to_string(record.fields()));
    output
}

/// Format registration outcomes, one block per identifier
pub fn format_outcomes(outcomes: &[Outcome]) -> String {
    let mut output = String::new();

    for outcome in outcomes {
        match &outcome.status {
            SubmissionStatus::Accepted { status, body } => {
                output.push_str(&format!(
                    "\n✅ Registered {} (status {})\n",
                    outcome.identifier, status
                ));
                output.push_str(&format!(
                    "  Resolve at {}\n",
                    outcome.identifier.resolver_url()
                ));
                if !body.trim().is_empty() {
                    output.push_str(&format!("  Response: {}\n", body.trim()));
                }
            }
            SubmissionStatus::Rejected(rejection) => {
                output.push_str(&format!(
                    "\n⚠️  Rejected {} (status {})\n",
                    outcome.identifier, rejection.status
                ));
                output.push_str(&format!("  Response: {}\n", rejection.body.trim()));
            }
            SubmissionStatus::TransportFailed { error } => {
                output.push_str(&format!("\n⚠️  Failed {}\n", outcome.identifier));
                output.push_str(&format!("  Error: {}\n", error));
            }
        }
    }

    let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
    output.push_str(&format!(
        "\n{} of {} identifier(s) registered\n",
        succeeded,
        outcomes.len()
    ));
    output
}

/// Format inspection results with the classified fields under a heading
pub fn format_inspections(inspections: &[Inspection], topic: Topic) -> String {
    let mut output = String::new();

    for inspection in inspections {
        output.push_str(&format!("\nMetadata for {}\n", inspection.identifier));
        match &inspection.result {
            InspectionResult::Fetched {
                status, raw_body, ..
            } => {
                output.push_str(&format!("Status: {}\n", status));
                output.push_str("Full metadata:\n");
                output.push_str(raw_body.trim());
                output.push('\n');
                output.push_str(&format!("{}:\n", topic.heading()));
                for (key, value) in inspection.classified_fields() {
                    output.push_str(&format!("  {}: {}\n", key, value));
                }
            }
            InspectionResult::Rejected(rejection) => {
                output.push_str(&format!("Status: {}\n", rejection.status));
                output.push_str(&format!("⚠️  {}\n", rejection.body.trim()));
            }
            InspectionResult::TransportFailed { error } => {
                output.push_str(&format!("⚠️  Error: {}\n", error));
            }
        }
    }

    output
}

/// Format validation findings
pub fn format_validation(result: &GraphValidationResult) -> String {
    let mut output = String::new();

    if !result.missing_fields.is_empty() {
        output.push_str("\n⚠️  Missing Required Fields:\n");
        for missing in &result.missing_fields {
            output.push_str(&format!("  - {}: {}\n", missing.identifier, missing.key));
        }
    }

    if !result.malformed_fields.is_empty() {
        output.push_str("\n⚠️  Malformed Fields:\n");
        for malformed in &result.malformed_fields {
            output.push_str(&format!("  - {:?}\n", malformed));
        }
    }

    if !result.dangling_edges.is_empty() {
        output.push_str("\n⚠️  Dangling Relationships:\n");
        for edge in &result.dangling_edges {
            output.push_str(&format!(
                "  - {} #{} {} {} (not in this graph)\n",
                edge.source, edge.index, edge.relation, edge.target
            ));
        }
    }

    if !result.missing_inverses.is_empty() {
        output.push_str("\n⚠️  Missing Inverse Relationships:\n");
        for missing in &result.missing_inverses {
            output.push_str(&format!(
                "  - {} {} {}, but {} does not declare {}\n",
                missing.source, missing.relation, missing.target, missing.target, missing.expected
            ));
        }
    }

    if result.is_valid() {
        output.push_str("\n✅ All checks passed!\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identifier;
    use crate::workflow::RegistryRejection;

    #[test]
    fn test_format_outcomes_counts_successes() {
        let outcomes = vec![
            Outcome {
                identifier: Identifier::new("doi:10.5072/FK2/A"),
                status: SubmissionStatus::Accepted {
                    status: 201,
                    body: "success: doi:10.5072/FK2/A".to_string(),
                },
            },
            Outcome {
                identifier: Identifier::new("doi:10.5072/FK2/B"),
                status: SubmissionStatus::Rejected(RegistryRejection {
                    status: 401,
                    body: "error: unauthorized".to_string(),
                }),
            },
        ];
        let text = format_outcomes(&outcomes);
        assert!(text.contains("Resolve at https://doi.org/10.5072/FK2/A"));
        assert!(text.contains("Rejected doi:10.5072/FK2/B (status 401)"));
        assert!(text.contains("1 of 2 identifier(s) registered"));
    }

    #[test]
    fn test_format_inspections_uses_topic_heading() {
        let inspections = vec![Inspection {
            identifier: Identifier::new("doi:10.5072/FK2/V1"),
            result: InspectionResult::Fetched {
                status: 200,
                raw_body: "success: doi:10.5072/FK2/V1\ndatacite.version: 1.0\n".to_string(),
                metadata: Default::default(),
                classified: vec![("datacite.version".to_string(), "1.0".to_string())],
            },
        }];
        let text = format_inspections(&inspections, Topic::Version);
        assert!(text.contains("Version-related fields:\n  datacite.version: 1.0\n"));
    }

    #[test]
    fn test_format_validation_clean() {
        let text = format_validation(&GraphValidationResult::default());
        assert!(text.contains("All checks passed"));
    }
}
