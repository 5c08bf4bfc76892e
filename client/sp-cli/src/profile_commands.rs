use clap::{Args, Subcommand};
use sp_core::DraftField;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Sign in and print the bootstrapped profile
    Show,
    /// Edit profile fields and submit them
    Edit(EditArgs),
}

/// Raw field values, applied to the draft exactly as typed
#[derive(Args, Debug, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    /// Height in cm
    #[arg(long)]
    pub height: Option<String>,

    /// Weight in kg
    #[arg(long)]
    pub weight: Option<String>,

    #[arg(long)]
    pub activity_level: Option<String>,
}

impl EditArgs {
    /// Given fields in [`DraftField::ALL`] order
    pub fn draft_edits(&self) -> Vec<(DraftField, String)> {
        DraftField::ALL
            .iter()
            .filter_map(|&field| {
                let value = match field {
                    DraftField::Name => &self.name,
                    DraftField::Age => &self.age,
                    DraftField::Gender => &self.gender,
                    DraftField::HeightCm => &self.height,
                    DraftField::WeightKg => &self.weight,
                    DraftField::ActivityLevel => &self.activity_level,
                };
                value.clone().map(|v| (field, v))
            })
            .collect()
    }
}
