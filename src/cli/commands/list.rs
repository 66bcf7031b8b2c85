//! `passkeep list` — display all credentials in a table.

use crate::cli::output;
use crate::cli::{unlocked_service, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let service = unlocked_service(cli)?;
    let entries = service.list_passwords()?;

    output::print_entries_table(&entries);
    if !entries.is_empty() {
        output::info(&format!("Total: {} entries", entries.len()));
    }

    Ok(())
}
