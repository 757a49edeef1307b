use std::sync::OnceLock;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::error::AccountError;

/// Hash a password with Argon2id into a PHC string (salt embedded).
pub fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Hashing(e.to_string()))
}

/// False for a wrong password and for an unparsable hash.
pub fn verify_password(password: &str, passwordHash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(passwordHash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn hash_password_blocking(password: String) -> Result<String, AccountError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AccountError::Hashing(format!("hashing task failed: {e}")))?
}

pub async fn verify_password_blocking(
    password: String,
    passwordHash: String,
) -> Result<bool, AccountError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &passwordHash))
        .await
        .map_err(|e| AccountError::Hashing(format!("verification task failed: {e}")))
}

/// Runs one verification against a throwaway hash so that a lookup miss
/// costs about as much as a wrong password.
pub async fn burn_verification(password: String) -> Result<(), AccountError> {
    tokio::task::spawn_blocking(move || {
        if let Some(hash) = dummy_hash() {
            let _ = verify_password(&password, hash);
        }
    })
    .await
    .map_err(|e| AccountError::Hashing(format!("verification task failed: {e}")))
}

fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hash_password("unusable-password").ok())
        .as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("test123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("test123"));
        assert!(verify_password("test123", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("", ""));
    }

    #[tokio::test]
    async fn blocking_wrappers_agree_with_sync_versions() {
        let hash = hash_password_blocking("secret".into()).await.unwrap();
        assert!(verify_password_blocking("secret".into(), hash.clone()).await.unwrap());
        assert!(!verify_password_blocking("other".into(), hash).await.unwrap());
        burn_verification("whatever".into()).await.unwrap();
    }
}
