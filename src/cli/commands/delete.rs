//! `passkeep delete` — remove the first credential stored for a site.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{unlocked_service, Cli};
use crate::errors::{PassKeepError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, site: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete password for '{site}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassKeepError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let service = unlocked_service(cli)?;
    service.delete_password(site)?;

    output::success(&format!("Deleted password for '{site}'"));

    Ok(())
}
