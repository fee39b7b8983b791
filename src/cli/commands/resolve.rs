//! Resolve command implementation

use serde::Serialize;

use super::print_json;
use crate::error::CliError;
use doi_registry_sdk::models::Identifier;

/// Arguments for the `resolve` command
pub struct ResolveArgs {
    pub input: String,
    pub json: bool,
}

#[derive(Serialize)]
struct Resolution {
    identifier: String,
    resolver_url: String,
}

/// Handle the `resolve` command: print both forms of an identifier
pub fn handle_resolve(args: &ResolveArgs) -> Result<(), CliError> {
    let identifier = Identifier::parse(&args.input)?;
    let resolution = Resolution {
        resolver_url: identifier.resolver_url(),
        identifier: identifier.to_string(),
    };

    if args.json {
        return print_json(&resolution);
    }
    println!("Identifier: {}", resolution.identifier);
    println!("DOI landing page: {}", resolution.resolver_url);
    Ok(())
}
