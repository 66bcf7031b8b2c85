//! `passkeep update` — replace the password for a site/username pair.

use crate::cli::output;
use crate::cli::{read_password_value, unlocked_service, Cli};
use crate::errors::Result;

/// Execute the `update` command.
pub fn execute(cli: &Cli, site: &str, username: &str, password: Option<&str>) -> Result<()> {
    let value = read_password_value(
        &format!("Enter new password for {username}@{site}"),
        password,
    )?;

    let service = unlocked_service(cli)?;
    service.update_password(site, username, &value)?;

    output::success(&format!("Password updated for {username}@{site}"));

    Ok(())
}
