use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Profile fields the presentation layer may edit while a draft is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Age,
    Gender,
    HeightCm,
    WeightKg,
    ActivityLevel,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        Self::Name,
        Self::Age,
        Self::Gender,
        Self::HeightCm,
        Self::WeightKg,
        Self::ActivityLevel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::HeightCm => "height",
            Self::WeightKg => "weight",
            Self::ActivityLevel => "activity_level",
        }
    }
}

impl FromStr for DraftField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "height" => Ok(Self::HeightCm),
            "weight" => Ok(Self::WeightKg),
            "activity_level" => Ok(Self::ActivityLevel),
            _ => Err(CoreError::InvalidDraftField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of applying a raw value to a draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    /// The draft now holds the new value
    Applied,
    /// Input was not a valid number; previous value kept
    Retained,
}
