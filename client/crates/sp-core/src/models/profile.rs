use crate::{Biometrics, DraftField, FieldUpdate, Goals, Identity};

use serde::{Deserialize, Serialize};

/// The full user record as known to the client.
///
/// A profile always carries the [`Identity`] that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    identity: Identity,
    pub name: String,
    pub biometrics: Biometrics,
    goals: Goals,
    pub is_first_login: bool,
}

impl Profile {
    pub fn new(
        identity: Identity,
        name: impl Into<String>,
        biometrics: Biometrics,
        goals: Goals,
        is_first_login: bool,
    ) -> Self {
        Self {
            identity,
            name: name.into(),
            biometrics,
            goals,
            is_first_login,
        }
    }

    /// Minimal profile used when the remote fetch fails: identity only,
    /// zeroed biometrics and goals.
    pub fn fallback(identity: Identity) -> Self {
        Self::new(
            identity,
            String::new(),
            Biometrics::default(),
            Goals::default(),
            false,
        )
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Replace the server-owned goals wholesale.
    pub fn with_goals(mut self, goals: Goals) -> Self {
        self.goals = goals;
        self
    }

    /// Apply a raw presentation-layer value to one editable field.
    ///
    /// Text fields are stored verbatim. Numeric fields keep their previous
    /// value when the input does not parse to a finite, non-negative number.
    pub fn apply_draft_field(&mut self, field: DraftField, raw: &str) -> FieldUpdate {
        let biometrics = &mut self.biometrics;
        match field {
            DraftField::Name => self.name = raw.to_string(),
            DraftField::Gender => biometrics.gender = raw.to_string(),
            DraftField::ActivityLevel => biometrics.activity_level = raw.to_string(),
            DraftField::Age => match raw.trim().parse::<u32>() {
                Ok(age) => biometrics.age = age,
                Err(_) => return FieldUpdate::Retained,
            },
            DraftField::HeightCm => match parse_measure(raw) {
                Some(height) => biometrics.height_cm = height,
                None => return FieldUpdate::Retained,
            },
            DraftField::WeightKg => match parse_measure(raw) {
                Some(weight) => biometrics.weight_kg = weight,
                None => return FieldUpdate::Retained,
            },
        }

        FieldUpdate::Applied
    }
}

fn parse_measure(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
