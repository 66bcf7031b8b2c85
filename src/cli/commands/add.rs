//! `passkeep add` — store a new credential.

use crate::cli::output;
use crate::cli::{read_password_value, unlocked_service, Cli};
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(cli: &Cli, site: &str, username: &str, password: Option<&str>) -> Result<()> {
    let value = read_password_value(&format!("Enter password for {username}@{site}"), password)?;

    let service = unlocked_service(cli)?;
    service.add_password(site, username, &value)?;

    output::success(&format!("Password added for {username}@{site}"));
    output::tip("Retrieve it with: passkeep get <site>");

    Ok(())
}
