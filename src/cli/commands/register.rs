//! Register command implementation

use std::path::PathBuf;

use tracing::warn;

use super::{ConnectionArgs, connect, load_topology, print_json};
use crate::error::CliError;
use doi_registry_sdk::output::{format_outcomes, format_record_preview};
use doi_registry_sdk::validation::validate_graph;
use doi_registry_sdk::workflow::register;

/// Arguments for the `register` command
pub struct RegisterArgs {
    /// Topology file describing the records to register
    pub topology: PathBuf,
    /// Print the records instead of submitting them
    pub dry_run: bool,
    pub json: bool,
    pub connection: ConnectionArgs,
}

/// Handle the `register` command
pub fn handle_register(args: &RegisterArgs) -> Result<(), CliError> {
    let records = load_topology(&args.topology)?.build()?;

    let validation = validate_graph(&records);
    if !validation.is_valid() {
        warn!(
            "Topology has {} validation issue(s); submitting anyway",
            validation.issue_count()
        );
    }

    if args.dry_run {
        if args.json {
            return print_json(&records);
        }
        for record in &records {
            print!("{}", format_record_preview(record));
        }
        return Ok(());
    }

    let transport = connect(&args.connection)?;
    let outcomes = register(&records, &transport);

    if args.json {
        print_json(&outcomes)?;
    } else {
        print!("{}", format_outcomes(&outcomes));
    }

    let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
    if failed > 0 {
        return Err(CliError::RegistrationFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}
