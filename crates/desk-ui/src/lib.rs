#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod pages;

pub use app::render_page;
pub use pages::forbidden::render_forbidden;
pub use pages::login::render_login;
pub use pages::user_create::render_user_create;
pub use pages::user_edit::render_user_edit;
pub use pages::users::render_user_list;
