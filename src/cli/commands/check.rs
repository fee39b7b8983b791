//! Check command implementation

use std::path::PathBuf;

use serde::Serialize;

use super::{load_topology, print_json};
use crate::error::CliError;
use doi_registry_sdk::models::IdentifierRecord;
use doi_registry_sdk::output::{format_record_preview, format_validation};
use doi_registry_sdk::validation::{GraphValidationResult, validate_graph};

/// Arguments for the `check` command
pub struct CheckArgs {
    pub topology: PathBuf,
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    records: &'a [IdentifierRecord],
    validation: &'a GraphValidationResult,
}

/// Handle the `check` command: build and validate offline
pub fn handle_check(args: &CheckArgs) -> Result<(), CliError> {
    let records = load_topology(&args.topology)?.build()?;
    let validation = validate_graph(&records);

    if args.json {
        print_json(&CheckReport {
            records: &records,
            validation: &validation,
        })?;
    } else {
        for record in &records {
            print!("{}", format_record_preview(record));
        }
        print!("{}", format_validation(&validation));
    }

    if !validation.is_valid() {
        return Err(CliError::ValidationFailed(validation.issue_count()));
    }
    Ok(())
}
