//! Inspect command implementation

use super::{ConnectionArgs, connect, print_json};
use crate::error::CliError;
use doi_registry_sdk::classify::Topic;
use doi_registry_sdk::models::Identifier;
use doi_registry_sdk::output::format_inspections;
use doi_registry_sdk::workflow::inspect;

/// Arguments for the `inspect` command
pub struct InspectArgs {
    /// Identifiers in registry, bare or resolver URL form
    pub identifiers: Vec<String>,
    pub topic: Topic,
    pub json: bool,
    pub connection: ConnectionArgs,
}

/// Handle the `inspect` command
pub fn handle_inspect(args: &InspectArgs) -> Result<(), CliError> {
    if args.identifiers.is_empty() {
        return Err(CliError::InvalidArgument(
            "At least one identifier is required".to_string(),
        ));
    }
    let identifiers = args
        .identifiers
        .iter()
        .map(|input| Identifier::parse(input))
        .collect::<Result<Vec<_>, _>>()?;

    let transport = connect(&args.connection)?;
    let inspections = inspect(&identifiers, &transport, args.topic);

    if args.json {
        print_json(&inspections)?;
    } else {
        print!("{}", format_inspections(&inspections, args.topic));
    }

    let failed = inspections.iter().filter(|i| !i.is_ok()).count();
    if failed > 0 {
        return Err(CliError::InspectionFailed {
            failed,
            total: inspections.len(),
        });
    }
    Ok(())
}
