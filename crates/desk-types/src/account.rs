use serde::{Deserialize, Serialize};

/// Fields of an account that the public API is allowed to return.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PublicAccount {
    pub id: u64,
    pub email: String,
    pub name: String,
}

/// Everything the admin site shows about an account. Never carries the hash.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountDetail {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

// Request fields are optional so that a missing field surfaces as a
// validation message instead of a body rejection.

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TokenRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Admin edit form contents after checkbox decoding.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminAccountUpdate {
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}
