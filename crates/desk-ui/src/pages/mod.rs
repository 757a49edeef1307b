pub mod forbidden;
pub mod login;
pub mod user_create;
pub mod user_edit;
pub mod users;
