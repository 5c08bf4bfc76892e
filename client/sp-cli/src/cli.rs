use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sp")]
#[command(about = "Smart Pantry session client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile service URL (overrides config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Account email
    #[arg(long, global = true, env = "SP_EMAIL")]
    pub email: Option<String>,

    /// Account password
    #[arg(long, global = true, env = "SP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
