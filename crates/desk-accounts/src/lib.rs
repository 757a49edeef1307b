#![allow(non_snake_case)]

pub mod account;
pub mod email;
pub mod error;
pub mod memory;
pub mod password;
pub mod policy;
pub mod service;
pub mod session;
pub mod store;
pub mod token;

pub use account::{Account, NewAccount};
pub use error::{AccountError, StoreError};
pub use memory::MemoryStore;
pub use policy::{AccountPolicy, TokenPolicy};
pub use service::AccountService;
pub use session::SessionService;
pub use store::{AccountStore, SessionStore, TokenStore};
pub use token::TokenService;
