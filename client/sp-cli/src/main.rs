//! sp - Smart Pantry session client
//!
//! Signs in, bootstraps the profile and optionally edits it, printing JSON.
//!
//! # Examples
//!
//! ```bash
//! # Show the bootstrapped profile
//! SP_EMAIL=a@b.com SP_PASSWORD=secret sp profile show --pretty
//!
//! # Edit and submit
//! sp --email a@b.com --password secret profile edit --name Mario --weight 80
//! ```

use sp_cli::{
    CliError, CliResult, SessionRunner,
    cli::Cli,
    commands::{Commands, route_listing},
    logger,
    profile_commands::ProfileCommands,
    report::{finish, print_json, report_notices, report_retained},
};
use sp_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    finish(run(cli).await)
}

async fn run(cli: Cli) -> CliResult<()> {
    let Cli {
        command,
        server,
        email,
        password,
        pretty,
    } = cli;

    let action = match command {
        Commands::Routes => return print_json(&route_listing(), pretty),
        Commands::Profile { action } => action,
    };

    let mut config = Config::load()?;
    if let Some(url) = server {
        config.api.base_url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let email = email.ok_or_else(|| CliError::missing_credentials("--email or SP_EMAIL"))?;
    let password =
        password.ok_or_else(|| CliError::missing_credentials("--password or SP_PASSWORD"))?;

    let mut runner = SessionRunner::from_config(&config)?;
    let profile = runner.sign_in(&email, &password).await?;

    let output = match action {
        ProfileCommands::Show => {
            report_notices(&runner.drain_notices());
            serde_json::to_value(&profile)?
        }
        ProfileCommands::Edit(args) => {
            let outcome = runner.edit(&args.draft_edits()).await?;
            report_retained(&outcome.retained);
            report_notices(&outcome.notices);
            serde_json::to_value(&outcome.profile)?
        }
    };

    runner.sign_out().await?;
    print_json(&output, pretty)
}
