pub mod biometrics;
pub mod draft_field;
pub mod goals;
pub mod identity;
pub mod profile;
pub mod profile_dto;
pub mod route;
