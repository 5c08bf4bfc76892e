use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Navigation destinations of the main experience.
///
/// Pure selection state; carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Pantry,
    ShopList,
    Diet,
    Stats,
    Profile,
    Notifications,
}

impl Route {
    /// Destinations shown in the bottom navigation bar, in order.
    pub const BOTTOM_BAR: [Route; 5] = [
        Self::Home,
        Self::Pantry,
        Self::ShopList,
        Self::Diet,
        Self::Stats,
    ];

    /// Destinations reachable from the top bar actions.
    pub const TOP_BAR: [Route; 2] = [Self::Notifications, Self::Profile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Pantry => "pantry",
            Self::ShopList => "list",
            Self::Diet => "diet",
            Self::Stats => "stats",
            Self::Profile => "profile",
            Self::Notifications => "notifications",
        }
    }
}

impl FromStr for Route {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "home" => Ok(Self::Home),
            "pantry" => Ok(Self::Pantry),
            "list" => Ok(Self::ShopList),
            "diet" => Ok(Self::Diet),
            "stats" => Ok(Self::Stats),
            "profile" => Ok(Self::Profile),
            "notifications" => Ok(Self::Notifications),
            _ => Err(CoreError::InvalidRoute {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
