use crate::profile_commands::ProfileCommands;

use clap::Subcommand;
use sp_core::Route;

#[derive(Subcommand)]
pub enum Commands {
    /// Profile operations (require sign-in)
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// List navigation destinations
    Routes,
}

/// Navigation destinations as JSON, bottom bar first
pub fn route_listing() -> serde_json::Value {
    serde_json::json!({
        "bottom_bar": Route::BOTTOM_BAR.iter().map(Route::as_str).collect::<Vec<_>>(),
        "top_bar": Route::TOP_BAR.iter().map(Route::as_str).collect::<Vec<_>>(),
    })
}
