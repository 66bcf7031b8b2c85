use clap::Parser;
use passkeep::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref site,
            ref username,
            ref password,
        } => passkeep::cli::commands::add::execute(&cli, site, username, password.as_deref()),
        Commands::Get { ref site } => passkeep::cli::commands::get::execute(&cli, site),
        Commands::List => passkeep::cli::commands::list::execute(&cli),
        Commands::Update {
            ref site,
            ref username,
            ref password,
        } => passkeep::cli::commands::update::execute(&cli, site, username, password.as_deref()),
        Commands::Delete { ref site, force } => {
            passkeep::cli::commands::delete::execute(&cli, site, force)
        }
        Commands::Completions { ref shell } => {
            passkeep::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passkeep::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
