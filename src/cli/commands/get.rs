//! `passkeep get` — retrieve and print the first credential for a site.

use crate::cli::{unlocked_service, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, site: &str) -> Result<()> {
    let service = unlocked_service(cli)?;
    let entry = service.get_password(site)?;

    println!("Site:     {}", entry.site);
    println!("Username: {}", entry.username);
    println!("Password: {}", entry.password);

    Ok(())
}
