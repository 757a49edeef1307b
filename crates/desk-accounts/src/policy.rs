use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AccountPolicy {
    pub min_password_length: usize,
    pub max_email_length: usize,
    pub max_name_length: usize,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            min_password_length: 5,
            max_email_length: 255,
            max_name_length: 255,
        }
    }
}

/// Tokens are `length_bytes` random bytes, hex encoded.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TokenPolicy {
    pub length_bytes: usize,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self { length_bytes: 20 }
    }
}
