use async_trait::async_trait;

use crate::account::{Account, NewAccount};
use crate::error::StoreError;

/// Persistence for account records.
///
/// Implementations must make `create` and email changes in `update` atomic
/// with respect to the email uniqueness check.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError>;

    async fn get(&self, id: u64) -> Result<Option<Account>, StoreError>;

    /// `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// All accounts ordered by id.
    async fn list(&self) -> Result<Vec<Account>, StoreError>;

    async fn update(&self, account: Account) -> Result<Account, StoreError>;
}

/// One API token per account.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the account's existing token, or stores and returns `candidate`.
    async fn get_or_insert_token(
        &self,
        accountId: u64,
        candidate: String,
    ) -> Result<String, StoreError>;

    async fn token_owner(&self, token: &str) -> Result<Option<u64>, StoreError>;
}

/// Admin-site login sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn open_session(&self, key: String, accountId: u64) -> Result<(), StoreError>;

    async fn session_owner(&self, key: &str) -> Result<Option<u64>, StoreError>;

    async fn close_session(&self, key: &str) -> Result<(), StoreError>;
}
