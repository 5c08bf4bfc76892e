mod draft_field;
mod identity;
mod profile;
mod profile_dto;
mod route;
