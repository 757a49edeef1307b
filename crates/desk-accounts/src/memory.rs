use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::{Account, NewAccount};
use crate::error::StoreError;
use crate::store::{AccountStore, SessionStore, TokenStore};

/// Process-local store. Every table sits behind its own lock.
#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<AccountTable>,
    tokens: RwLock<TokenTable>,
    sessions: RwLock<HashMap<String, u64>>,
}

#[derive(Default)]
struct AccountTable {
    rows: BTreeMap<u64, Account>,
    by_email: HashMap<String, u64>,
    last_id: u64,
}

#[derive(Default)]
struct TokenTable {
    by_key: HashMap<String, u64>,
    by_account: HashMap<u64, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut table = self.accounts.write().await;

        if table.by_email.contains_key(&account.email) {
            return Err(StoreError::DuplicateEmail(account.email));
        }

        table.last_id += 1;
        let record = Account {
            id: table.last_id,
            email: account.email,
            name: account.name,
            password_hash: account.password_hash,
            is_active: true,
            is_staff: account.is_staff,
            is_superuser: account.is_superuser,
        };

        table.by_email.insert(record.email.clone(), record.id);
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: u64) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let table = self.accounts.read().await;
        Ok(table
            .by_email
            .get(email)
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.accounts.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, account: Account) -> Result<Account, StoreError> {
        let mut table = self.accounts.write().await;

        let previousEmail = match table.rows.get(&account.id) {
            Some(existing) => existing.email.clone(),
            None => return Err(StoreError::NotFound(account.id)),
        };

        if previousEmail != account.email {
            if let Some(owner) = table.by_email.get(&account.email) {
                if *owner != account.id {
                    return Err(StoreError::DuplicateEmail(account.email));
                }
            }
            table.by_email.remove(&previousEmail);
            table.by_email.insert(account.email.clone(), account.id);
        }

        table.rows.insert(account.id, account.clone());
        Ok(account)
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn get_or_insert_token(
        &self,
        accountId: u64,
        candidate: String,
    ) -> Result<String, StoreError> {
        let mut table = self.tokens.write().await;

        if let Some(existing) = table.by_account.get(&accountId) {
            return Ok(existing.clone());
        }

        table.by_key.insert(candidate.clone(), accountId);
        table.by_account.insert(accountId, candidate.clone());
        Ok(candidate)
    }

    async fn token_owner(&self, token: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.tokens.read().await.by_key.get(token).copied())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn open_session(&self, key: String, accountId: u64) -> Result<(), StoreError> {
        self.sessions.write().await.insert(key, accountId);
        Ok(())
    }

    async fn session_owner(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.sessions.read().await.get(key).copied())
    }

    async fn close_session(&self, key: &str) -> Result<(), StoreError> {
        self.sessions.write().await.remove(key);
        Ok(())
    }
}
