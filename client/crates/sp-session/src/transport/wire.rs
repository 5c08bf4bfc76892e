use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sp_core::ProfileDto;

/// Body of `get-user-data`
#[derive(Debug, Serialize)]
pub(crate) struct UserRequest<'a> {
    pub uid: &'a str,
    pub email: &'a str,
}

/// Response of `get-user-data`
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UserResponse {
    pub status: String,
    pub user_data: Option<ProfileDto>,
}

/// Response of `update-user`
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UpdateUserResponse {
    pub status: String,
    pub daily_kcal: u32,
    pub macros: BTreeMap<String, u32>,
}
