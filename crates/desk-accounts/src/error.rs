use desk_types::{FieldErrors, NON_FIELD_ERRORS};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("account with email {0} already exists")]
    DuplicateEmail(String),
    #[error("account {0} not found")]
    NotFound(u64),
    #[error("store backend failure: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("unable to authenticate with provided credentials")]
    Authentication(FieldErrors),
    #[error("authentication credentials were not provided")]
    Unauthenticated,
    #[error("you do not have permission to perform this action")]
    Forbidden,
    #[error("account {0} not found")]
    NotFound(u64),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccountError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        AccountError::Validation(single(field, message))
    }

    pub fn credentials(message: impl Into<String>) -> Self {
        AccountError::Authentication(single(NON_FIELD_ERRORS, message))
    }
}

pub(crate) fn single(field: &str, message: impl Into<String>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message.into()]);
    errors
}
