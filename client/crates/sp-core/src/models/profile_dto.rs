use crate::{Biometrics, Goals, Identity, Profile};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Profile as exchanged with the profile service.
///
/// Missing fields decode to empty/zero values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileDto {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub biometrics: BiometricsDto,
    pub goals: GoalsDto,
    pub first_login: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BiometricsDto {
    pub age: u32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub activity_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoalsDto {
    pub daily_kcal: u32,
    pub macros_target: BTreeMap<String, u32>,
}

impl ProfileDto {
    /// Bind the payload to the identity that requested it.
    ///
    /// The payload's own `uid`/`email` are not trusted; callers compare them
    /// beforehand if they care.
    pub fn into_profile(self, identity: Identity) -> Profile {
        Profile::new(
            identity,
            self.name,
            self.biometrics.into(),
            self.goals.into(),
            self.first_login,
        )
    }
}

impl From<&Profile> for ProfileDto {
    fn from(p: &Profile) -> Self {
        Self {
            uid: p.identity().id().to_string(),
            email: p.identity().email().to_string(),
            name: p.name.clone(),
            biometrics: BiometricsDto::from(&p.biometrics),
            goals: GoalsDto::from(p.goals()),
            first_login: p.is_first_login,
        }
    }
}

impl From<&Biometrics> for BiometricsDto {
    fn from(b: &Biometrics) -> Self {
        Self {
            age: b.age,
            gender: b.gender.clone(),
            height: b.height_cm,
            weight: b.weight_kg,
            activity_level: b.activity_level.clone(),
        }
    }
}

impl From<BiometricsDto> for Biometrics {
    fn from(b: BiometricsDto) -> Self {
        Self {
            age: b.age,
            gender: b.gender,
            height_cm: b.height,
            weight_kg: b.weight,
            activity_level: b.activity_level,
        }
    }
}

impl From<&Goals> for GoalsDto {
    fn from(g: &Goals) -> Self {
        Self {
            daily_kcal: g.daily_kcal,
            macros_target: g.macros_target.clone(),
        }
    }
}

impl From<GoalsDto> for Goals {
    fn from(g: GoalsDto) -> Self {
        Goals::new(g.daily_kcal, g.macros_target)
    }
}
